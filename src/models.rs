use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// The fixed set of countries used to filter and order allow-list series.
pub const COUNTRY_ALLOW_LIST: [&str; 10] = [
    "Australia",
    "Canada",
    "Switzerland",
    "United Kingdom",
    "Japan",
    "Netherlands",
    "Norway",
    "Singapore",
    "Sweden",
    "United States",
];

/// Owned copy of [`COUNTRY_ALLOW_LIST`], handy for APIs that take `&[String]`.
pub fn default_allow_list() -> Vec<String> {
    COUNTRY_ALLOW_LIST.iter().map(|s| s.to_string()).collect()
}

/// Year label → values, one per (kept) row.
pub type SeriesByYear = BTreeMap<String, Vec<f64>>;

/// Declares which header columns are metadata rather than year labels.
///
/// The slice is positional: `leading` columns are dropped from the front and
/// `trailing` columns from the back. With `validate_years` set, every column left
/// after slicing must look like a four-digit year, otherwise loading fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub leading: usize,
    pub trailing: usize,
    pub validate_years: bool,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            leading: 2,
            trailing: 2,
            validate_years: true,
        }
    }
}

impl TableLayout {
    /// Positional slicing only; any column name is accepted as a year label.
    pub fn lenient() -> Self {
        Self {
            validate_years: false,
            ..Self::default()
        }
    }
}

/// True if `label` is four ASCII digits, such as `"1990"`.
pub fn is_year_label(label: &str) -> bool {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    YEAR.get_or_init(|| Regex::new(r"^[0-9]{4}$").expect("static regex"))
        .is_match(label.trim())
}

/// A fully loaded table: every row, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTable {
    /// Country column, row order.
    pub countries: Vec<String>,
    /// `series[year][i]` belongs to `countries[i]`.
    pub series: SeriesByYear,
    /// Year labels in header order.
    pub years: Vec<String>,
}

/// A table restricted to allow-listed rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredTable {
    /// Names of the rows that matched the allow-list, row order.
    pub countries: Vec<String>,
    pub series: SeriesByYear,
    pub years: Vec<String>,
}

/// Raw header and cell text of a CSV, kept for table display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One (country, value) observation of an assembled series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryValue {
    pub country: String,
    pub value: f64,
}

impl CountryValue {
    pub fn new(country: impl Into<String>, value: f64) -> Self {
        Self {
            country: country.into(),
            value,
        }
    }
}

/// An ordered list of observations for one indicator and one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountrySeries {
    pub indicator: String,
    pub points: Vec<CountryValue>,
}

impl CountrySeries {
    /// Pair names with values positionally. Extra entries on either side are dropped.
    pub fn from_parallel(indicator: impl Into<String>, names: &[String], values: &[f64]) -> Self {
        Self {
            indicator: indicator.into(),
            points: names
                .iter()
                .zip(values)
                .map(|(n, v)| CountryValue::new(n.clone(), *v))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.country.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Everything the chart bundle needs for one selected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSelection {
    pub year: String,
    /// GDP per person growth, allow-list order.
    pub gdp_growth: CountrySeries,
    /// Literacy rate, allow-list order (dual-axis line).
    pub literacy_allow: CountrySeries,
    /// Literacy rate, all countries with a positive value.
    pub literacy_map: CountrySeries,
    /// Adolescent fertility rate, all countries with a positive value.
    pub fertility_map: CountrySeries,
}

impl YearSelection {
    pub fn series(&self) -> [&CountrySeries; 4] {
        [
            &self.gdp_growth,
            &self.literacy_allow,
            &self.literacy_map,
            &self.fertility_map,
        ]
    }
}
