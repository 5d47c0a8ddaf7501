//! Reading wide indicator CSVs (one row per country, one column per year).
//!
//! Layout assumption: a fixed number of metadata columns before and after the year
//! columns, declared through [`TableLayout`]. Missing cells become `0.0`.
//!
//! ```no_run
//! use wbi_dash::loader;
//! use wbi_dash::models::TableLayout;
//!
//! let t = loader::load_with_countries("literacy.csv", "Country Name", &TableLayout::default())?;
//! println!("{} countries, years {:?}", t.countries.len(), t.years);
//! # Ok::<(), wbi_dash::error::DataError>(())
//! ```

use crate::error::DataError;
use crate::models::{FilteredTable, IndicatorTable, RawTable, SeriesByYear, TableLayout, is_year_label};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Cell texts that count as "no value".
const MISSING_MARKERS: [&str; 8] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "#N/A", ".."];

/// Headers plus data records of one CSV file.
struct Sheet {
    path: PathBuf,
    headers: Vec<String>,
    records: Vec<StringRecord>,
}

impl Sheet {
    fn read(path: &Path) -> Result<Self, DataError> {
        let read_err = |source| DataError::FileRead {
            path: path.to_path_buf(),
            source,
        };
        // short rows are padded with missing cells; long ones are rejected below
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(read_err)?;
        let headers: Vec<String> = rdr
            .headers()
            .map_err(read_err)?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let records = rdr
            .records()
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_err)?;
        if let Some((row, rec)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() > headers.len())
        {
            return Err(DataError::SchemaMismatch {
                path: path.to_path_buf(),
                reason: format!(
                    "row {} has {} fields, the header has {}",
                    row + 2,
                    rec.len(),
                    headers.len()
                ),
            });
        }
        Ok(Self {
            path: path.to_path_buf(),
            headers,
            records,
        })
    }

    fn schema_err(&self, reason: impl Into<String>) -> DataError {
        DataError::SchemaMismatch {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| self.schema_err(format!("missing country column '{name}'")))
    }

    /// Year labels and their column indices, per `layout`.
    fn year_columns(&self, layout: &TableLayout) -> Result<Vec<(usize, String)>, DataError> {
        let n = self.headers.len();
        if n < layout.leading + layout.trailing {
            return Err(self.schema_err(format!(
                "{n} columns, but the layout reserves {} leading and {} trailing metadata columns",
                layout.leading, layout.trailing
            )));
        }
        let cols: Vec<(usize, String)> = (layout.leading..n - layout.trailing)
            .map(|i| (i, self.headers[i].trim().to_string()))
            .collect();
        if layout.validate_years
            && let Some((i, bad)) = cols.iter().find(|(_, h)| !is_year_label(h))
        {
            return Err(self.schema_err(format!(
                "column {i} ('{bad}') is not a year label; check the leading/trailing metadata columns"
            )));
        }
        Ok(cols)
    }

    fn countries(&self, idx: usize) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.get(idx).unwrap_or("").trim().to_string())
            .collect()
    }

    /// Numeric column over the rows selected by `keep`.
    fn numeric_column(
        &self,
        col: usize,
        label: &str,
        keep: impl Fn(usize) -> bool,
    ) -> Result<Vec<f64>, DataError> {
        let mut out = Vec::with_capacity(self.records.len());
        for (row, rec) in self.records.iter().enumerate() {
            if !keep(row) {
                continue;
            }
            let raw = rec.get(col).unwrap_or("");
            let v = parse_cell(raw).ok_or_else(|| DataError::Parse {
                path: self.path.clone(),
                // 1-based, counting the header line
                row: row + 2,
                column: label.to_string(),
                value: raw.to_string(),
            })?;
            out.push(v);
        }
        Ok(out)
    }
}

/// Parse one year cell. Missing markers and non-finite numbers become `0.0`;
/// anything else non-numeric is `None`.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() || MISSING_MARKERS.contains(&s) {
        return Some(0.0);
    }
    let v = s.parse::<f64>().ok()?;
    Some(if v.is_finite() { v } else { 0.0 })
}

/// Load every row of `path`: the country column plus one numeric series per year.
///
/// `countries[i]` and `series[year][i]` always describe the same row.
pub fn load_with_countries<P: AsRef<Path>>(
    path: P,
    country_column: &str,
    layout: &TableLayout,
) -> Result<IndicatorTable, DataError> {
    let path = path.as_ref();
    let load = || -> Result<IndicatorTable, DataError> {
        let sheet = Sheet::read(path)?;
        let country_idx = sheet.column_index(country_column)?;
        let cols = sheet.year_columns(layout)?;

        let mut series = SeriesByYear::new();
        for (col, label) in &cols {
            series.insert(label.clone(), sheet.numeric_column(*col, label, |_| true)?);
        }
        Ok(IndicatorTable {
            countries: sheet.countries(country_idx),
            series,
            years: cols.into_iter().map(|(_, l)| l).collect(),
        })
    };
    load()
        .inspect(|t| {
            log::info!(
                "{} read success ({} rows, {} years)",
                path.display(),
                t.countries.len(),
                t.years.len()
            )
        })
        .inspect_err(|e| log::error!("{} load failed: {e}", path.display()))
}

/// Load only the rows whose country is in `allow_list`, in file order.
///
/// A per-year series is shorter than `allow_list` whenever the file lacks some of
/// its countries; `countries` records which rows were kept.
pub fn load_filtered<P: AsRef<Path>>(
    path: P,
    country_column: &str,
    allow_list: &[String],
    layout: &TableLayout,
) -> Result<FilteredTable, DataError> {
    let path = path.as_ref();
    let allowed: HashSet<&str> = allow_list.iter().map(|s| s.as_str()).collect();
    let load = || -> Result<FilteredTable, DataError> {
        let sheet = Sheet::read(path)?;
        let country_idx = sheet.column_index(country_column)?;
        let cols = sheet.year_columns(layout)?;

        let all = sheet.countries(country_idx);
        let keep = |row: usize| allowed.contains(all[row].as_str());

        let mut series = SeriesByYear::new();
        for (col, label) in &cols {
            series.insert(label.clone(), sheet.numeric_column(*col, label, keep)?);
        }
        let countries = all
            .iter()
            .enumerate()
            .filter(|(row, _)| keep(*row))
            .map(|(_, c)| c.clone())
            .collect();
        Ok(FilteredTable {
            countries,
            series,
            years: cols.into_iter().map(|(_, l)| l).collect(),
        })
    };
    load()
        .inspect(|t| {
            log::info!(
                "{} read success ({} of {} allow-listed countries)",
                path.display(),
                t.countries.len(),
                allow_list.len()
            )
        })
        .inspect_err(|e| log::error!("{} load failed: {e}", path.display()))
}

/// Headers and raw cell text, for display.
pub fn read_raw<P: AsRef<Path>>(path: P) -> Result<RawTable, DataError> {
    let path = path.as_ref();
    let sheet = Sheet::read(path).inspect_err(|e| log::error!("{} load failed: {e}", path.display()))?;
    Ok(RawTable {
        headers: sheet.headers,
        rows: sheet
            .records
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_become_zero() {
        for s in ["", "  ", "NA", "NaN", "..", "#N/A", "null"] {
            assert_eq!(parse_cell(s), Some(0.0), "{s:?}");
        }
        assert_eq!(parse_cell(" 3.25 "), Some(3.25));
        assert_eq!(parse_cell("-1e2"), Some(-100.0));
        assert_eq!(parse_cell("inf"), Some(0.0));
        assert_eq!(parse_cell("abc"), None);
    }
}
