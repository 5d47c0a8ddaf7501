mod common;

use wbi_dash::assemble::{FERTILITY, LITERACY};
use wbi_dash::{AppContext, DataError, DataSources};

#[test]
fn context_loads_and_offers_literacy_years() {
    let dir = common::data_dir();
    let ctx = AppContext::load(&DataSources::in_dir(dir.path())).unwrap();
    assert_eq!(ctx.years(), ["2015".to_string(), "2016".to_string()]);
    assert!(ctx.gdp_table_html.contains("<th>Country Name</th>"));
}

#[test]
fn selection_follows_allow_list_order() {
    let dir = common::data_dir();
    let ctx = AppContext::load(&DataSources::in_dir(dir.path())).unwrap();
    let sel = ctx.select("2015").unwrap();

    assert_eq!(sel.gdp_growth.names(), vec!["Australia", "Canada", "Japan"]);
    assert_eq!(sel.gdp_growth.values(), vec![1.0, -0.2, 1.6]);
    assert_eq!(sel.literacy_allow.names(), vec!["Australia", "Canada", "Japan"]);
    assert_eq!(sel.literacy_allow.values(), vec![97.2, 98.5, 99.0]);
}

#[test]
fn maps_drop_non_positive_values_and_keep_file_order() {
    let dir = common::data_dir();
    let ctx = AppContext::load(&DataSources::in_dir(dir.path())).unwrap();
    let sel = ctx.select("2015").unwrap();

    assert_eq!(sel.literacy_map.indicator, LITERACY);
    assert_eq!(
        sel.literacy_map.names(),
        vec!["Japan", "Brazil", "Canada", "Australia"]
    );
    assert_eq!(sel.fertility_map.indicator, FERTILITY);
    assert_eq!(sel.fertility_map.names(), vec!["Japan", "Brazil"]);

    let later = ctx.select("2016").unwrap();
    assert_eq!(later.fertility_map.names(), vec!["Japan", "Chad", "Brazil"]);
}

#[test]
fn unknown_year_is_reported() {
    let dir = common::data_dir();
    let ctx = AppContext::load(&DataSources::in_dir(dir.path())).unwrap();
    let err = ctx.select("1999").unwrap_err();
    assert_eq!(err.year, "1999");
    assert!(err.to_string().contains("year not found"));
}

#[test]
fn summaries_cover_three_indicators() {
    let dir = common::data_dir();
    let ctx = AppContext::load(&DataSources::in_dir(dir.path())).unwrap();
    let sums = ctx.summaries("2015").unwrap();
    assert_eq!(sums.len(), 3);
    let lit = &sums[1];
    assert_eq!(lit.count, 5);
    assert_eq!(lit.missing, 1);
    assert_eq!(lit.max, Some(99.0));
}

#[test]
fn missing_file_aborts_loading() {
    let dir = common::data_dir();
    std::fs::remove_file(dir.path().join("pregrant.csv")).unwrap();
    let err = AppContext::load(&DataSources::in_dir(dir.path())).unwrap_err();
    assert!(matches!(err, DataError::FileRead { .. }));
}
