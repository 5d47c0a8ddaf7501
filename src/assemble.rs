//! Gathering the chart inputs for one selected year.

use crate::error::YearNotFound;
use crate::models::{CountrySeries, CountryValue, FilteredTable, IndicatorTable, SeriesByYear, YearSelection};

/// Indicator names used in series and error messages.
pub const GDP_GROWTH: &str = "GDP per person growth (annual %)";
pub const LITERACY: &str = "Literacy rate, adult female (%)";
pub const FERTILITY: &str = "Adolescent fertility rate (births per 1,000 women ages 15-19)";

/// Values for `year`, or a [`YearNotFound`] naming the indicator.
pub fn year_values<'a>(
    series: &'a SeriesByYear,
    year: &str,
    indicator: &str,
) -> Result<&'a [f64], YearNotFound> {
    series
        .get(year)
        .map(|v| v.as_slice())
        .ok_or_else(|| YearNotFound {
            year: year.to_string(),
            indicator: indicator.to_string(),
        })
}

/// Keep only pairs with a strictly positive value, in input order.
pub fn retain_positive(series: CountrySeries) -> CountrySeries {
    CountrySeries {
        indicator: series.indicator,
        points: series.points.into_iter().filter(|p| p.value > 0.0).collect(),
    }
}

/// Pair matched row names with values, then order them as in `allow_list`.
///
/// Countries the file did not carry are absent from the result.
pub fn align_to_allow_list(
    indicator: &str,
    countries: &[String],
    values: &[f64],
    allow_list: &[String],
) -> CountrySeries {
    let mut points: Vec<CountryValue> = countries
        .iter()
        .zip(values)
        .map(|(c, v)| CountryValue::new(c.clone(), *v))
        .collect();
    // stable: duplicate rows keep file order
    points.sort_by_key(|p| {
        allow_list
            .iter()
            .position(|a| *a == p.country)
            .unwrap_or(usize::MAX)
    });
    CountrySeries {
        indicator: indicator.to_string(),
        points,
    }
}

/// The loaded tables the assembler draws from.
#[derive(Debug, Clone, Copy)]
pub struct Sources<'a> {
    pub gdp: &'a FilteredTable,
    pub literacy_allow: &'a FilteredTable,
    pub literacy: &'a IndicatorTable,
    pub fertility: &'a IndicatorTable,
    pub allow_list: &'a [String],
}

/// Assemble the four series for `year`.
pub fn assemble(src: Sources<'_>, year: &str) -> Result<YearSelection, YearNotFound> {
    let gdp = year_values(&src.gdp.series, year, GDP_GROWTH)?;
    let lit_allow = year_values(&src.literacy_allow.series, year, LITERACY)?;
    let lit_all = year_values(&src.literacy.series, year, LITERACY)?;
    let fert_all = year_values(&src.fertility.series, year, FERTILITY)?;

    Ok(YearSelection {
        year: year.to_string(),
        gdp_growth: align_to_allow_list(GDP_GROWTH, &src.gdp.countries, gdp, src.allow_list),
        literacy_allow: align_to_allow_list(
            LITERACY,
            &src.literacy_allow.countries,
            lit_allow,
            src.allow_list,
        ),
        literacy_map: retain_positive(CountrySeries::from_parallel(
            LITERACY,
            &src.literacy.countries,
            lit_all,
        )),
        fertility_map: retain_positive(CountrySeries::from_parallel(
            FERTILITY,
            &src.fertility.countries,
            fert_all,
        )),
    })
}
