use crate::common::errors::{BusinessResult, StorageErrorExt};
use crate::discards::models::DiscardRecord;
use crate::plantings::models::PlantingRecord;
use crate::sowings::models::SowingRecord;
use crate::storage::{self, Dataset};
use crate::trays::ledger::TrayLedger;
use crate::trays::models::TrayStock;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// All nursery tables, loaded from and persisted to one data directory.
///
/// Workflows take `&mut Nursery`, build the new version of a table, persist
/// it and only then replace the in-memory copy, so a failed write leaves the
/// state as it was.
#[derive(Debug, Clone)]
pub struct Nursery {
    data_dir: PathBuf,
    pub ledger: TrayLedger,
    pub sowings: Vec<SowingRecord>,
    pub plantings: Vec<PlantingRecord>,
    pub discards: Vec<DiscardRecord>,
}

impl Nursery {
    pub fn load(data_dir: &Path) -> Result<Self> {
        let nursery = Self {
            data_dir: data_dir.to_path_buf(),
            ledger: TrayLedger::from_rows(storage::load::<TrayStock>(data_dir)?),
            sowings: storage::load(data_dir)?,
            plantings: storage::load(data_dir)?,
            discards: storage::load(data_dir)?,
        };

        tracing::info!(
            "Loaded nursery data from {}: {} tray rows, {} sowings, {} plantings, {} discards",
            data_dir.display(),
            nursery.ledger.rows().len(),
            nursery.sowings.len(),
            nursery.plantings.len(),
            nursery.discards.len()
        );

        Ok(nursery)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Rewrite the whole dataset file of `T` with `rows`
    pub fn persist<T: Dataset>(&self, rows: &[T]) -> BusinessResult<()> {
        storage::save(rows, &self.data_dir).for_dataset(T::NAME)
    }

    pub fn persist_ledger(&self, ledger: &TrayLedger) -> BusinessResult<()> {
        self.persist(ledger.rows())
    }

    /// Write a log table and, when given, the tray ledger it implies. Both
    /// files land or neither does: if the ledger write fails the log file is
    /// rewritten from `previous`.
    pub fn persist_with_ledger<T: Dataset>(
        &self,
        previous: &[T],
        rows: &[T],
        ledger: Option<&TrayLedger>,
    ) -> BusinessResult<()> {
        self.persist(rows)?;
        let Some(ledger) = ledger else {
            return Ok(());
        };

        if let Err(err) = self.persist_ledger(ledger) {
            if let Err(restore_err) = self.persist(previous) {
                tracing::error!(
                    "Failed to restore {} after a tray stock write failure: {restore_err}",
                    T::NAME
                );
            }
            return Err(err);
        }
        Ok(())
    }
}
