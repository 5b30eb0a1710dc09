//! Flat-file persistence for the nursery datasets.
//!
//! Each dataset is one comma-separated file with a fixed header row. Files
//! are rewritten whole on every save; a file that does not exist yet reads
//! as an empty table.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;

/// A table persisted as a CSV file. `Row` carries the on-disk column names
/// through its serde renames; `COLUMNS` must list the same headers in order.
pub trait Dataset: Sized {
    const NAME: &'static str;
    const FILE_NAME: &'static str;
    const COLUMNS: &'static [&'static str];

    type Row: Serialize + DeserializeOwned;

    fn to_row(&self) -> Self::Row;
    fn from_row(row: Self::Row) -> Self;
}

/// Read every row of `T` from `data_dir`. Missing files yield an empty table.
pub fn load<T: Dataset>(data_dir: &Path) -> Result<Vec<T>> {
    let path = data_dir.join(T::FILE_NAME);
    if !path.exists() {
        tracing::debug!("{} not found, starting with an empty table", path.display());
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .from_path(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let rows = reader
        .deserialize::<T::Row>()
        .enumerate()
        .map(|(line, row)| {
            row.map(T::from_row)
                .with_context(|| format!("Malformed row {} in {}", line + 2, path.display()))
        })
        .collect::<Result<Vec<T>>>()?;

    tracing::debug!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Overwrite the file of `T` in `data_dir` with `rows`.
pub fn save<T: Dataset>(rows: &[T], data_dir: &Path) -> Result<()> {
    let path = data_dir.join(T::FILE_NAME);
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    // Headers are written by hand so an empty table still carries them
    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row.to_row())?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trays::models::TrayStock;

    fn tray(code: &str, variety_name: &str, quantity: i64) -> TrayStock {
        TrayStock {
            code: code.to_string(),
            variety_name: variety_name.to_string(),
            quantity,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<TrayStock> = load(dir.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_save_writes_exact_headers() {
        let dir = tempfile::tempdir().unwrap();
        save(&[tray("123456", "Tomate", 10)], dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("bandejas_compradas.csv")).unwrap();
        assert_eq!(contents, "Código,Nome Variedade,Quantidade\n123456,Tomate,10\n");
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let dir = tempfile::tempdir().unwrap();
        save::<TrayStock>(&[], dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("bandejas_compradas.csv")).unwrap();
        assert_eq!(contents, "Código,Nome Variedade,Quantidade\n");
        let rows: Vec<TrayStock> = load(dir.path()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        save(
            &[tray("123456", "Tomate", 10), tray("HB0001", "Alface, crespa", 3)],
            dir.path(),
        )
        .unwrap();

        let first: Vec<TrayStock> = load(dir.path()).unwrap();
        let second: Vec<TrayStock> = load(dir.path()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[1].variety_name, "Alface, crespa");
    }

    #[test]
    fn test_surrounding_whitespace_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![tray("123456", " Tomate ", 10), tray("HB0001", "  ", 3)];
        save(&rows, dir.path()).unwrap();

        let loaded: Vec<TrayStock> = load(dir.path()).unwrap();
        assert_eq!(loaded, rows);
    }

    #[test]
    fn test_reads_file_written_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bandejas_compradas.csv"),
            "Código,Nome Variedade,Quantidade\n654321,Manjericão,4\n",
        )
        .unwrap();

        let rows: Vec<TrayStock> = load(dir.path()).unwrap();
        assert_eq!(rows, vec![tray("654321", "Manjericão", 4)]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("bandejas_compradas.csv"),
            "Código,Nome Variedade,Quantidade\n123456,Tomate,lots\n",
        )
        .unwrap();

        let err = load::<TrayStock>(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Malformed row 2"));
    }
}
