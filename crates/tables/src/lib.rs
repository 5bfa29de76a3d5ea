//! `abcrank-tables` — the table store collaborator boundary.
//!
//! The classification core never touches storage directly; it consumes rows
//! loaded through the [`TableStore`] trait and hands derived rows back to
//! it. Two implementations ship here: a directory-of-CSVs store matching
//! the original data layout, and an in-memory fake for tests.

pub mod csv_store;
pub mod error;
pub mod memory;
pub mod store;

pub use csv_store::CsvTableStore;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryTableStore;
pub use store::TableStore;
