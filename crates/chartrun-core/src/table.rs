// File: crates/chartrun-core/src/table.rs
// Summary: Category table loaded from a delimited text file; columns looked up by name.

use std::path::Path;

use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::Series;

/// Column name -> string cells, in header order.
/// Contract: every column has the same number of cells (one per data row).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryTable {
    columns: Vec<(String, Vec<String>)>,
}

impl CategoryTable {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    /// True when the file had no data rows (a header alone still yields names).
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn column(&self, name: &str) -> Result<&[String]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_slice())
            .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))
    }

    /// Parse a column into numbers. Row numbers in errors are 1-based data rows.
    pub fn numeric(&self, name: &str) -> Result<Series> {
        self.column(name)?
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.trim().parse::<f64>().map_err(|_| ChartError::ParseValue {
                    column: name.to_string(),
                    row: i + 1,
                    value: cell.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Series::new)
    }
}

/// Load a comma-delimited file whose first row names the columns.
pub fn load_table(path: impl AsRef<Path>) -> Result<CategoryTable> {
    load_table_with(path, b',')
}

pub fn load_table_with(path: impl AsRef<Path>, delimiter: u8) -> Result<CategoryTable> {
    let path = path.as_ref();
    let csv_err = |source| ChartError::Csv { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(csv_err)?;

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let mut columns: Vec<(String, Vec<String>)> =
        headers.iter().map(|h| (h.trim().to_string(), Vec::new())).collect();

    for rec in rdr.records() {
        let rec = rec.map_err(csv_err)?;
        for (i, (_, cells)) in columns.iter_mut().enumerate() {
            cells.push(rec.get(i).unwrap_or_default().to_string());
        }
    }

    let table = CategoryTable { columns };
    debug!(path = %path.display(), columns = table.columns.len(), rows = table.len(), "loaded table");
    Ok(table)
}
