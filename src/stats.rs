use crate::assemble::year_values;
use crate::error::YearNotFound;
use crate::models::SeriesByYear;
use serde::{Deserialize, Serialize};

/// Summary statistics for one indicator in one year.
///
/// Zero cells are counted as `missing`: loading cannot tell "no data" from zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub indicator: String,
    pub year: String,
    pub count: usize,
    pub missing: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}

/// Summarize the non-zero values of `series[year]`.
pub fn year_summary(
    series: &SeriesByYear,
    year: &str,
    indicator: &str,
) -> Result<Summary, YearNotFound> {
    let all = year_values(series, year, indicator)?;
    let mut vals: Vec<f64> = all.iter().copied().filter(|v| *v != 0.0).collect();
    vals.sort_by(f64::total_cmp);

    let count = vals.len();
    let min = vals.first().cloned();
    let max = vals.last().cloned();
    let mean = if count > 0 {
        Some(vals.iter().sum::<f64>() / count as f64)
    } else {
        None
    };
    let median = if count == 0 {
        None
    } else if count % 2 == 1 {
        Some(vals[count / 2])
    } else {
        Some((vals[count / 2 - 1] + vals[count / 2]) / 2.0)
    };
    Ok(Summary {
        indicator: indicator.to_string(),
        year: year.to_string(),
        count: all.len(),
        missing: all.len() - count,
        min,
        max,
        mean,
        median,
    })
}
