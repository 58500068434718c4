//! Append-only workbook persistence.
//!
//! A workbook is a set of named tables that only ever grow by one row at a
//! time. Measurement rows and result rows are appended independently; nothing
//! links a result back to the measurement it came from.

use crate::config::StoreConfig;
use crate::{BodyComposition, Error, Measurement, Result};
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// A tabular store that supports appending a row to a named table
pub trait TableStore {
    fn append_row(&mut self, table: &str, row: &[String]) -> Result<()>;
}

impl<S: TableStore + ?Sized> TableStore for Box<S> {
    fn append_row(&mut self, table: &str, row: &[String]) -> Result<()> {
        (**self).append_row(table, row)
    }
}

// ============================================================================
// CSV workbook
// ============================================================================

/// Workbook stored as a directory with one `<table>.csv` file per table
#[derive(Debug)]
pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    /// Open an existing workbook directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(Error::persistence(
                dir.display().to_string(),
                "workbook not found (run `bodyfat init` first)",
            ));
        }
        tracing::debug!("Opened workbook at {:?}", dir);
        Ok(Self { dir })
    }

    /// Create the workbook directory and any missing tables with their headers.
    ///
    /// Tables that already exist are left untouched.
    pub fn create(dir: impl Into<PathBuf>, tables: &[(&str, Vec<String>)]) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        let workbook = Self { dir };

        for (table, header) in tables {
            let path = workbook.table_path(table);
            if path.exists() {
                tracing::info!("Table {} already exists, keeping it", table);
                continue;
            }

            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(header)?;
            writer.flush()?;
            tracing::info!("Created table {} at {:?}", table, path);
        }

        Ok(workbook)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", table))
    }

    /// Read every data row of a table, skipping the header
    pub fn rows(&self, table: &str) -> Result<Vec<Vec<String>>> {
        let path = self.existing_table(table)?;
        let file = std::fs::File::open(&path)?;
        file.lock_shared()?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(&file);
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        file.unlock()?;
        Ok(rows)
    }

    fn existing_table(&self, table: &str) -> Result<PathBuf> {
        let path = self.table_path(table);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Error::persistence(table, "table not found"))
        }
    }

    fn write_row(path: &Path, row: &[String]) -> Result<()> {
        let file = OpenOptions::new().append(true).open(path)?;

        // Acquire exclusive lock
        file.lock_exclusive()?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&file);
        writer.write_record(row)?;
        writer.flush()?;
        drop(writer);

        file.sync_all()?;
        file.unlock()?;
        Ok(())
    }
}

impl TableStore for CsvWorkbook {
    fn append_row(&mut self, table: &str, row: &[String]) -> Result<()> {
        let path = self.existing_table(table)?;

        Self::write_row(&path, row).map_err(|e| match e {
            Error::Persistence { .. } => e,
            other => Error::persistence(table, other.to_string()),
        })?;

        tracing::debug!("Appended {} cells to table {}", row.len(), table);
        Ok(())
    }
}

// ============================================================================
// In-memory workbook
// ============================================================================

/// Workbook held in memory, used for dry runs and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryWorkbook {
    tables: BTreeMap<String, Vec<Vec<String>>>,
}

impl MemoryWorkbook {
    /// Workbook with the given empty tables
    pub fn with_tables<'a>(tables: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect(),
        }
    }

    pub fn rows(&self, table: &str) -> Option<&[Vec<String>]> {
        self.tables.get(table).map(Vec::as_slice)
    }
}

impl TableStore for MemoryWorkbook {
    fn append_row(&mut self, table: &str, row: &[String]) -> Result<()> {
        let rows = self
            .tables
            .get_mut(table)
            .ok_or_else(|| Error::persistence(table, "table not found"))?;
        rows.push(row.to_vec());
        tracing::debug!("Appended {} cells to in-memory table {}", row.len(), table);
        Ok(())
    }
}

// ============================================================================
// Persistence client
// ============================================================================

/// Writes measurements and results to their tables in one workbook
pub struct PersistenceClient<S> {
    store: S,
    measurements_table: String,
    results_table: String,
}

impl<S: TableStore> PersistenceClient<S> {
    pub fn new(store: S, config: &StoreConfig) -> Self {
        Self::with_tables(store, &config.measurements_table, &config.results_table)
    }

    pub fn with_tables(store: S, measurements_table: &str, results_table: &str) -> Self {
        Self {
            store,
            measurements_table: measurements_table.to_string(),
            results_table: results_table.to_string(),
        }
    }

    pub fn measurements_table(&self) -> &str {
        &self.measurements_table
    }

    pub fn results_table(&self) -> &str {
        &self.results_table
    }

    pub fn append_measurement(&mut self, measurement: &Measurement) -> Result<()> {
        self.store
            .append_row(&self.measurements_table, &measurement.to_row())
    }

    pub fn append_result(&mut self, result: &BodyComposition) -> Result<()> {
        self.store.append_row(&self.results_table, &result.to_row())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Create the configured workbook and both tables with headers
pub fn init_workbook(config: &StoreConfig) -> Result<CsvWorkbook> {
    CsvWorkbook::create(
        config.workbook_dir(),
        &[
            (config.measurements_table.as_str(), Measurement::header()),
            (config.results_table.as_str(), BodyComposition::header()),
        ],
    )
}
