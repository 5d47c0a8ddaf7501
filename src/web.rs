//! HTTP surface: the year selector page, the results page, and a health probe.
//!
//! | Route          | Response                                      |
//! |----------------|-----------------------------------------------|
//! | `GET /`        | year selector plus the GDP table              |
//! | `POST /hurun`  | the four charts for the posted year           |
//! | `GET /healthz` | `{"ok": true, "years": <n>}`                  |

use crate::charts::ChartBundle;
use crate::config::ServerConfig;
use crate::context::AppContext;
use crate::error::{ChartError, YearNotFound};
use crate::page::{self, PageContent};
use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Name of the form field carrying the selected year.
pub const YEAR_FIELD: &str = "the_region_selected";

#[derive(Debug)]
pub struct AppState {
    pub ctx: AppContext,
    pub chart_size: (u32, u32),
}

#[derive(Debug, Deserialize)]
struct YearForm {
    the_region_selected: Option<String>,
}

/// Request failures, each mapped to one status code.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    YearNotFound(YearNotFound),
    Chart(ChartError),
    Internal(String),
}

impl From<YearNotFound> for AppError {
    fn from(e: YearNotFound) -> Self {
        AppError::YearNotFound(e)
    }
}

impl From<ChartError> for AppError {
    fn from(e: ChartError) -> Self {
        match e {
            ChartError::Render(msg) => AppError::Internal(msg),
            empty @ ChartError::Empty { .. } => AppError::Chart(empty),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::YearNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Chart(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::BadRequest(m) | AppError::Internal(m) => m.clone(),
            AppError::YearNotFound(e) => e.to_string(),
            AppError::Chart(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            log::error!("{status}: {message}");
        } else {
            log::warn!("{status}: {message}");
        }
        (status, Html(page::error_page(status.as_u16(), &message))).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/hurun", post(select_year))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Bind `cfg.socket_addr()` and serve until the process ends.
pub async fn serve(ctx: AppContext, cfg: &ServerConfig) -> anyhow::Result<()> {
    let addr = cfg.socket_addr();
    let state = Arc::new(AppState {
        ctx,
        chart_size: cfg.chart_size,
    });
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    log::info!("listening on http://{addr}");
    axum::serve(listener, router(state))
        .await
        .context("server failed")?;
    Ok(())
}

async fn index(State(st): State<Arc<AppState>>) -> Html<String> {
    Html(page::results_page(PageContent {
        years: st.ctx.years(),
        selected: None,
        table_html: &st.ctx.gdp_table_html,
        charts_html: None,
    }))
}

async fn select_year(
    State(st): State<Arc<AppState>>,
    Form(form): Form<YearForm>,
) -> Result<Html<String>, AppError> {
    let year = form
        .the_region_selected
        .map(|y| y.trim().to_string())
        .filter(|y| !y.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("missing form field '{YEAR_FIELD}'")))?;
    log::info!("charts requested for {year}");

    // assembly and rendering are CPU-bound
    let worker = Arc::clone(&st);
    let y = year.clone();
    let bundle = tokio::task::spawn_blocking(move || -> Result<ChartBundle, AppError> {
        let sel = worker.ctx.select(&y)?;
        let (w, h) = worker.chart_size;
        Ok(ChartBundle::render(&sel, w, h)?)
    })
    .await
    .map_err(|e| AppError::Internal(format!("render task failed: {e}")))??;

    let charts = bundle.to_html();
    Ok(Html(page::results_page(PageContent {
        years: st.ctx.years(),
        selected: Some(year.as_str()),
        table_html: &st.ctx.gdp_table_html,
        charts_html: Some(&charts),
    })))
}

async fn healthz(State(st): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({"ok": true, "years": st.ctx.years().len()}))
}
