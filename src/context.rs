//! Everything the server needs, loaded once at startup and shared read-only.

use crate::assemble::{self, FERTILITY, GDP_GROWTH, LITERACY, Sources};
use crate::config::DataSources;
use crate::error::{DataError, YearNotFound};
use crate::loader;
use crate::models::{FilteredTable, IndicatorTable, YearSelection};
use crate::page;
use crate::stats::{self, Summary};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub allow_list: Vec<String>,
    pub fertility: IndicatorTable,
    pub literacy: IndicatorTable,
    /// Literacy restricted to the allow-list; its years populate the year selector.
    pub literacy_allow: FilteredTable,
    pub gdp: FilteredTable,
    /// The raw GDP file as an HTML table.
    pub gdp_table_html: String,
}

impl AppContext {
    /// Read and parse all indicator files. Any failure is fatal to startup.
    pub fn load(src: &DataSources) -> Result<Self, DataError> {
        let layout = &src.layout;
        let fertility = loader::load_with_countries(
            src.path_of(&src.fertility),
            &src.fertility.country_column,
            layout,
        )?;
        let literacy = loader::load_with_countries(
            src.path_of(&src.literacy),
            &src.literacy.country_column,
            layout,
        )?;
        let literacy_allow = loader::load_filtered(
            src.path_of(&src.literacy),
            &src.literacy.country_column,
            &src.allow_list,
            layout,
        )?;
        let gdp_path = src.path_of(&src.gdp);
        let gdp = loader::load_filtered(&gdp_path, &src.gdp.country_column, &src.allow_list, layout)?;
        let gdp_table_html = page::table_html(&loader::read_raw(&gdp_path)?);

        log::info!(
            "data loaded from {}: {} years selectable",
            src.data_dir.display(),
            literacy_allow.years.len()
        );
        Ok(Self {
            allow_list: src.allow_list.clone(),
            fertility,
            literacy,
            literacy_allow,
            gdp,
            gdp_table_html,
        })
    }

    /// Year labels offered to the user, in file order.
    pub fn years(&self) -> &[String] {
        &self.literacy_allow.years
    }

    pub fn sources(&self) -> Sources<'_> {
        Sources {
            gdp: &self.gdp,
            literacy_allow: &self.literacy_allow,
            literacy: &self.literacy,
            fertility: &self.fertility,
            allow_list: &self.allow_list,
        }
    }

    pub fn select(&self, year: &str) -> Result<YearSelection, YearNotFound> {
        assemble::assemble(self.sources(), year)
    }

    /// Summaries of every loaded table for `year`.
    pub fn summaries(&self, year: &str) -> Result<Vec<Summary>, YearNotFound> {
        Ok(vec![
            stats::year_summary(&self.gdp.series, year, GDP_GROWTH)?,
            stats::year_summary(&self.literacy.series, year, LITERACY)?,
            stats::year_summary(&self.fertility.series, year, FERTILITY)?,
        ])
    }
}
