use crate::models::YearSelection;
use anyhow::Result;
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix cells that spreadsheet software would evaluate as formulas.
fn sanitize(cell: &str) -> Cow<'_, str> {
    if cell.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save an assembled year as tidy CSV: `year,indicator,country,value`.
pub fn save_csv<P: AsRef<Path>>(sel: &YearSelection, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["year", "indicator", "country", "value"])?;
    for series in sel.series() {
        for p in &series.points {
            wtr.serialize((
                sanitize(&sel.year),
                sanitize(&series.indicator),
                sanitize(&p.country),
                p.value,
            ))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save an assembled year as pretty JSON.
pub fn save_json<P: AsRef<Path>>(sel: &YearSelection, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(sel)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
