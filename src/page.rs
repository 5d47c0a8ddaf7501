//! HTML for the results page.

use crate::models::RawTable;

/// Escape text for HTML element content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render a raw table with a leading row-number column.
pub fn table_html(table: &RawTable) -> String {
    let mut out = String::from("<table class=\"dataframe\" border=\"1\">\n<thead>\n<tr><th></th>");
    for h in &table.headers {
        out.push_str(&format!("<th>{}</th>", escape(h)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for (i, row) in table.rows.iter().enumerate() {
        out.push_str(&format!("<tr><th>{i}</th>"));
        for cell in row {
            out.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

/// What the results page shows.
#[derive(Debug, Clone, Copy)]
pub struct PageContent<'a> {
    pub years: &'a [String],
    pub selected: Option<&'a str>,
    /// Pre-rendered table markup.
    pub table_html: &'a str,
    /// Pre-rendered chart bundle markup.
    pub charts_html: Option<&'a str>,
}

const STYLE: &str = "body{font-family:sans-serif;margin:1.5em}\
figure.chart{display:inline-block;margin:0.5em}\
.table-wrap{max-height:28em;overflow:auto;margin-top:1.5em}\
table.dataframe{border-collapse:collapse;font-size:12px}\
table.dataframe td,table.dataframe th{padding:2px 6px}";

pub fn results_page(content: PageContent<'_>) -> String {
    let mut options = String::new();
    for y in content.years {
        let sel = if content.selected == Some(y.as_str()) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{0}\"{sel}>{0}</option>",
            escape(y)
        ));
    }
    let charts = content
        .charts_html
        .map(|c| format!("<section class=\"charts\">\n{c}</section>\n"))
        .unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Indicators by year</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Literacy, fertility and GDP growth</h1>\n\
         <form method=\"post\" action=\"/hurun\">\n\
         <label for=\"year\">Year</label>\n\
         <select id=\"year\" name=\"the_region_selected\">{options}</select>\n\
         <input type=\"submit\" value=\"Show charts\">\n</form>\n\
         {charts}<div class=\"table-wrap\">\n{table}</div>\n</body>\n</html>\n",
        table = content.table_html,
    )
}

/// Minimal page for a failed request.
pub fn error_page(status: u16, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Error {status}</title>\n\
         </head>\n<body>\n<h1>Error {status}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back</a></p>\n</body>\n</html>\n",
        escape(message)
    )
}
