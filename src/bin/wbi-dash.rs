use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use wbi_dash::charts::{self, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use wbi_dash::{AppContext, DataSources, ServerConfig, TableLayout, logging, storage, web};

#[derive(Parser, Debug)]
#[command(
    name = "wbi-dash",
    version,
    about = "Serve or render GDP growth, literacy and adolescent fertility charts by year"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct GlobalArgs {
    /// Directory holding pregrant.csv, literacy.csv and "GDP per person.csv".
    #[arg(long, global = true, env = "WBI_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
    /// Accept any header between the metadata columns as a year label.
    #[arg(long, global = true, default_value_t = false)]
    lenient_schema: bool,
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    /// Directory for the daily <YYYY-MM-DD>.log file.
    #[arg(long, global = true, env = "WBI_LOG_DIR", default_value = "log")]
    log_dir: PathBuf,
    /// Log to stderr only.
    #[arg(long, global = true, default_value_t = false)]
    no_log_file: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web dashboard.
    Serve(ServeArgs),
    /// List the selectable years.
    Years,
    /// Write the charts for one year to files.
    Render(RenderArgs),
    /// Print per-indicator summary statistics for one year.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct ChartSize {
    /// Width of each chart (default 900).
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Height of each chart (default 500).
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
}

#[derive(Args, Debug)]
struct ServeArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 9999)]
    port: u16,
    #[command(flatten)]
    size: ChartSize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ImageFormat {
    Svg,
    Png,
}

impl ImageFormat {
    fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Year label as it appears in the CSV headers (e.g. 2015).
    #[arg(short, long)]
    year: String,
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    #[arg(long, value_enum, default_value_t = ImageFormat::Svg)]
    format: ImageFormat,
    /// Also save the assembled series (.csv or .json by extension).
    #[arg(long)]
    export: Option<PathBuf>,
    #[command(flatten)]
    size: ChartSize,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[arg(short, long)]
    year: String,
}

/// File stems of the charts, in `charts::build_charts` order.
const CHART_FILES: [&str; 4] = ["gdp_growth", "literacy_vs_gdp", "literacy_map", "fertility_map"];

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_dir = (!cli.global.no_log_file).then_some(cli.global.log_dir.as_path());
    logging::init(&cli.global.log_level, log_dir)?;
    let ctx = load(&cli.global)?;
    match cli.cmd {
        Command::Serve(args) => cmd_serve(ctx, args).await,
        Command::Years => {
            for y in ctx.years() {
                println!("{y}");
            }
            Ok(())
        }
        Command::Render(args) => cmd_render(&ctx, args),
        Command::Stats(args) => cmd_stats(&ctx, &args.year),
    }
}

fn load(global: &GlobalArgs) -> Result<AppContext> {
    let mut sources = DataSources::in_dir(&global.data_dir);
    if global.lenient_schema {
        sources.layout = TableLayout::lenient();
    }
    AppContext::load(&sources)
        .with_context(|| format!("loading indicator files from {}", global.data_dir.display()))
}

async fn cmd_serve(ctx: AppContext, args: ServeArgs) -> Result<()> {
    let cfg = ServerConfig {
        host: args.host,
        port: args.port,
        chart_size: (args.size.width, args.size.height),
    };
    web::serve(ctx, &cfg).await
}

fn cmd_render(ctx: &AppContext, args: RenderArgs) -> Result<()> {
    let sel = ctx.select(&args.year)?;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for (chart, stem) in charts::build_charts(&sel)?.iter().zip(CHART_FILES) {
        let path = args
            .out_dir
            .join(format!("{stem}_{}.{}", sel.year, args.format.extension()));
        charts::save_chart(chart, &path, args.size.width, args.size.height)?;
        eprintln!("Wrote chart to {}", path.display());
    }

    if let Some(path) = args.export.as_deref() {
        export(&sel, path)?;
    }
    Ok(())
}

fn export(sel: &wbi_dash::YearSelection, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("csv")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => storage::save_csv(sel, path)?,
        "json" => storage::save_json(sel, path)?,
        other => anyhow::bail!("unsupported export format: {}", other),
    }
    eprintln!("Saved series for {} to {}", sel.year, path.display());
    Ok(())
}

fn cmd_stats(ctx: &AppContext, year: &str) -> Result<()> {
    for s in ctx.summaries(year)? {
        println!(
            "{} | {}  count={} missing={}  min={} max={} mean={} median={}",
            s.year,
            s.indicator,
            s.count,
            s.missing,
            fmt_opt(s.min),
            fmt_opt(s.max),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }
    Ok(())
}
