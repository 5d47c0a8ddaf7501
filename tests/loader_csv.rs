mod common;

use common::write;
use wbi_dash::error::DataError;
use wbi_dash::loader::{load_filtered, load_with_countries, read_raw};
use wbi_dash::models::TableLayout;

fn s(v: &[&str]) -> Vec<String> {
    v.iter().map(|x| x.to_string()).collect()
}

#[test]
fn metadata_columns_are_sliced_off() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "t.csv",
        "id,Country,2015,2016,extra1,extra2\n1,A,5,10,x,y\n",
    );
    let t = load_with_countries(dir.path().join("t.csv"), "Country", &TableLayout::default()).unwrap();
    assert_eq!(t.years, s(&["2015", "2016"]));
    assert_eq!(t.countries, s(&["A"]));
    assert_eq!(t.series["2015"], vec![5.0]);
    assert_eq!(t.series["2016"], vec![10.0]);
}

#[test]
fn every_year_has_one_value_per_country() {
    let dir = common::data_dir();
    let t = load_with_countries(
        dir.path().join("literacy.csv"),
        "Country Name",
        &TableLayout::default(),
    )
    .unwrap();
    assert_eq!(t.countries.len(), 5);
    for y in &t.years {
        assert_eq!(t.series[y].len(), t.countries.len(), "year {y}");
    }
    // ".." and empty cells
    assert_eq!(t.series["2015"][3], 0.0);
    assert_eq!(t.series["2016"][1], 0.0);
}

#[test]
fn filtered_keeps_allow_listed_rows_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "t.csv",
        "Country Name,Code,2015,Ind,IndCode\nA,AA,5,i,c\nC,CC,9,i,c\n",
    );
    let t = load_filtered(
        dir.path().join("t.csv"),
        "Country Name",
        &s(&["A", "B"]),
        &TableLayout::default(),
    )
    .unwrap();
    assert_eq!(t.series["2015"], vec![5.0]);
    assert_eq!(t.countries, s(&["A"]));
    assert_eq!(t.years, s(&["2015"]));
}

#[test]
fn filtered_series_has_allow_list_length_when_all_present() {
    let dir = common::data_dir();
    let allow = s(&["Australia", "Canada", "Japan"]);
    let t = load_filtered(
        dir.path().join("GDP per person.csv"),
        "Country Name",
        &allow,
        &TableLayout::default(),
    )
    .unwrap();
    for y in &t.years {
        assert_eq!(t.series[y].len(), allow.len());
    }
    assert_eq!(t.countries, s(&["Canada", "Australia", "Japan"]));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_with_countries(
        dir.path().join("nope.csv"),
        "Country",
        &TableLayout::default(),
    )
    .unwrap_err();
    assert!(matches!(err, DataError::FileRead { .. }), "{err}");
}

#[test]
fn missing_country_column_is_a_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "t.csv", "id,Nation,2015,a,b\n1,A,5,x,y\n");
    let err = load_with_countries(dir.path().join("t.csv"), "Country", &TableLayout::default())
        .unwrap_err();
    match err {
        DataError::SchemaMismatch { reason, .. } => assert!(reason.contains("Country")),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn non_year_header_fails_unless_lenient() {
    let dir = tempfile::tempdir().unwrap();
    // one trailing metadata column only, so "Indicator Name" lands in the year range
    write(
        dir.path(),
        "t.csv",
        "Country Name,Code,2015,Indicator Name,Code2,Extra\nA,AA,5,,NA,e\n",
    );
    let path = dir.path().join("t.csv");
    let strict = TableLayout {
        leading: 2,
        trailing: 1,
        validate_years: true,
    };
    let err = load_with_countries(&path, "Country Name", &strict).unwrap_err();
    assert!(matches!(err, DataError::SchemaMismatch { .. }));

    let lenient = TableLayout {
        validate_years: false,
        ..strict
    };
    let t = load_with_countries(&path, "Country Name", &lenient).unwrap();
    assert_eq!(t.years, s(&["2015", "Indicator Name", "Code2"]));
}

#[test]
fn garbage_cell_reports_row_and_column() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "t.csv",
        "id,Country,2015,2016,e1,e2\n1,A,5,10,x,y\n2,B,abc,1,x,y\n",
    );
    let err = load_with_countries(dir.path().join("t.csv"), "Country", &TableLayout::default())
        .unwrap_err();
    match err {
        DataError::Parse {
            row, column, value, ..
        } => {
            assert_eq!(row, 3);
            assert_eq!(column, "2015");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn raw_table_keeps_cell_text() {
    let dir = common::data_dir();
    let raw = read_raw(dir.path().join("GDP per person.csv")).unwrap();
    assert_eq!(raw.headers[0], "Country Name");
    assert_eq!(raw.rows.len(), 4);
    assert_eq!(raw.rows[0][2], "-0.2");
}

#[test]
fn short_rows_load_absent_cells_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "t.csv",
        "id,Country,2015,2016,extra1,extra2\n1,A,5,10,x,y\n2,B,7\n",
    );
    let t = load_with_countries(dir.path().join("t.csv"), "Country", &TableLayout::default()).unwrap();
    assert_eq!(t.countries, s(&["A", "B"]));
    assert_eq!(t.series["2015"], vec![5.0, 7.0]);
    assert_eq!(t.series["2016"], vec![10.0, 0.0]);

    let f = load_filtered(
        dir.path().join("t.csv"),
        "Country",
        &s(&["B"]),
        &TableLayout::default(),
    )
    .unwrap();
    assert_eq!(f.series["2016"], vec![0.0]);
}

#[test]
fn long_rows_are_a_schema_error() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "t.csv",
        "id,Country,2015,extra1,extra2\n1,A,5,x,y\n2,B,7,x,y,surplus\n",
    );
    let err = load_with_countries(dir.path().join("t.csv"), "Country", &TableLayout::default())
        .unwrap_err();
    match err {
        DataError::SchemaMismatch { reason, .. } => {
            assert!(reason.contains("row 3"), "{reason}");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn non_ascii_digits_are_not_years() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "t.csv",
        "id,Country,२०१५,extra1,extra2\n1,A,5,x,y\n",
    );
    let err = load_with_countries(dir.path().join("t.csv"), "Country", &TableLayout::default())
        .unwrap_err();
    assert!(matches!(err, DataError::SchemaMismatch { .. }));
}
