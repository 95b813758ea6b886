//! A CSV file with a header row, held as strings; numeric parsing
//! happens when a column is selected, so only the columns that are
//! actually plotted have to be numeric.

use std::{fs::File, io::Read, path::Path};

use itertools::Itertools;

use crate::{error::ChartError, info, series::Series};

#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    /// For error messages: the file path or "<input>"
    source_name: String,
    headers: Vec<String>,
    /// Every row has `headers.len()` cells (checked by the csv
    /// reader, which is not `flexible`)
    rows: Vec<Vec<String>>,
}

fn csv_error(source_name: &str, e: csv::Error) -> ChartError {
    let message = e.to_string();
    match e.into_kind() {
        csv::ErrorKind::Io(e) => ChartError::io(format!("reading {source_name}"), e),
        _ => ChartError::DataFormat {
            source_name: source_name.into(),
            message,
        },
    }
}

impl SampleTable {
    pub fn read_file(path: &Path) -> Result<Self, ChartError> {
        let file =
            File::open(path).map_err(|e| ChartError::io(format!("opening {path:?}"), e))?;
        let table = Self::from_reader(file, format!("{path:?}"))?;
        info!(
            "read {} rows with columns {:?} from {path:?}",
            table.len(),
            table.headers
        );
        Ok(table)
    }

    pub fn from_reader(input: impl Read, source_name: impl Into<String>) -> Result<Self, ChartError> {
        let source_name = source_name.into();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(input);
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error(&source_name, e))?
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map_ok(|record| record.iter().map(String::from).collect::<Vec<_>>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| csv_error(&source_name, e))?;
        Ok(SampleTable {
            source_name,
            headers,
            rows,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Result<usize, ChartError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ChartError::DataFormat {
                source_name: self.source_name.clone(),
                message: format!(
                    "missing column {name:?}, available columns: {}",
                    self.headers.iter().map(|h| format!("{h:?}")).join(", ")
                ),
            })
    }

    /// The values of column `name` in row order.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, ChartError> {
        let i = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(rowno, row)| {
                let cell = &row[i];
                match cell.parse::<f64>() {
                    Ok(v) if v.is_finite() => Ok(v),
                    _ => Err(ChartError::Parse {
                        source_name: self.source_name.clone(),
                        column: name.into(),
                        row: rowno + 1,
                        value: cell.clone(),
                    }),
                }
            })
            .collect()
    }

    /// Select the independent (`x_column`) and dependent (`y_column`)
    /// variables. Both columns are checked for existence before any
    /// cell is parsed.
    pub fn series(&self, x_column: &str, y_column: &str) -> Result<Series, ChartError> {
        self.column_index(x_column)?;
        self.column_index(y_column)?;
        let xs = self.numeric_column(x_column)?;
        let ys = self.numeric_column(y_column)?;
        Series::new(xs, ys)
    }
}
