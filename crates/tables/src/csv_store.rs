//! Directory-of-CSVs table store.
//!
//! Each dataset lives at `{dir}/{table_name}.csv` with a header row, the
//! layout existing exports already use. Rows decode straight into the typed
//! records via serde, so a missing column or a non-numeric field fails at
//! load time with the dataset name attached.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use abcrank_core::{AccountRecord, ClassifiedRow, Dataset, OrderRecord, ProductRecord};

use crate::error::{StoreError, StoreResult};
use crate::store::TableStore;

/// Table store backed by a directory of CSV files.
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    dir: PathBuf,
}

impl CsvTableStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(format!("{}.csv", dataset.table_name()))
    }

    fn load<T: DeserializeOwned>(&self, dataset: Dataset) -> StoreResult<Vec<T>> {
        let path = self.table_path(dataset);
        if !path.exists() {
            debug!(%dataset, "table file absent, loading as empty");
            return Ok(Vec::new());
        }
        let file = File::open(&path).map_err(|source| StoreError::Io { dataset, source })?;
        let rows = read_rows(dataset, file)?;
        debug!(%dataset, rows = rows.len(), "loaded table");
        Ok(rows)
    }

    fn save<T: Serialize>(&self, dataset: Dataset, rows: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.table_path(dataset).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| StoreError::Io { dataset, source })?;
        }
        let mut writer = csv::Writer::from_path(self.table_path(dataset))
            .map_err(|source| StoreError::Write { dataset, source })?;
        for row in rows {
            writer
                .serialize(row)
                .map_err(|source| StoreError::Write { dataset, source })?;
        }
        writer
            .flush()
            .map_err(|source| StoreError::Io { dataset, source })?;
        debug!(%dataset, rows = rows.len(), "saved table");
        Ok(())
    }
}

impl TableStore for CsvTableStore {
    fn load_products(&self) -> StoreResult<Vec<ProductRecord>> {
        self.load(Dataset::Products)
    }

    fn load_orders(&self) -> StoreResult<Vec<OrderRecord>> {
        self.load(Dataset::Orders)
    }

    fn load_accounts(&self) -> StoreResult<Vec<AccountRecord>> {
        self.load(Dataset::Accounts)
    }

    fn save_classification(&self, rows: &[ClassifiedRow]) -> StoreResult<()> {
        self.save(Dataset::Classification, rows)
    }
}

/// Decode one dataset from any reader. Split out from the file path so
/// shape validation is testable against in-memory CSV text.
pub fn read_rows<T: DeserializeOwned, R: Read>(
    dataset: Dataset,
    reader: R,
) -> StoreResult<Vec<T>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        rows.push(result.map_err(|source| StoreError::Malformed { dataset, source })?);
    }
    Ok(rows)
}
