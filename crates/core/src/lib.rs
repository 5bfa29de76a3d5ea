//! `abcrank-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O concerns):
//! identifiers, input/output record types, the error model, classification
//! policies and the injectable clock.

pub mod clock;
pub mod dataset;
pub mod error;
pub mod id;
pub mod policy;
pub mod record;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dataset::Dataset;
pub use error::{DomainError, DomainResult};
pub use id::{AccountId, CanonicalSku, OfferId};
pub use policy::{ClassifyPolicy, StalenessPolicy, Tier, TierPolicy};
pub use record::{AccountRecord, ClassifiedRow, OrderRecord, ProductRecord};
