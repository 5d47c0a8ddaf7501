mod common;

use std::fs;
use wbi_dash::models::{CountrySeries, YearSelection};
use wbi_dash::storage;
use wbi_dash::{AppContext, DataSources};

#[test]
fn save_csv_and_json() {
    let dir = common::data_dir();
    let ctx = AppContext::load(&DataSources::in_dir(dir.path())).unwrap();
    let sel = ctx.select("2015").unwrap();
    let rows: usize = sel.series().iter().map(|s| s.len()).sum();
    let out = tempfile::tempdir().unwrap();

    let csv_path = out.path().join("sel.csv");
    storage::save_csv(&sel, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("year,indicator,country,value"));
    assert_eq!(csv_txt.lines().count(), 1 + rows);
    assert!(csv_txt.contains("2015,GDP per person growth (annual %),Canada,-0.2"));

    let json_path = out.path().join("sel.json");
    storage::save_json(&sel, &json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(v["year"], "2015");
    assert_eq!(v["gdp_growth"]["points"].as_array().unwrap().len(), 3);
}

#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let evil = CountrySeries::from_parallel(
        "+SUM(A1:A9)",
        &["=HYPERLINK(\"http://evil\")".to_string(), "@foo".to_string()],
        &[1.0, 2.0],
    );
    let sel = YearSelection {
        year: "2015".into(),
        gdp_growth: evil,
        literacy_allow: CountrySeries::default(),
        literacy_map: CountrySeries::default(),
        fertility_map: CountrySeries::default(),
    };
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("evil.csv");
    storage::save_csv(&sel, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "'+SUM(A1:A9)");
    assert_eq!(&rows[0][2], "'=HYPERLINK(\"http://evil\")");
    assert_eq!(&rows[1][2], "'@foo");
}
