//! Log setup: `<timestamp> - <target> - <LEVEL> - <message>` lines on stderr,
//! mirrored into a per-day file when a log directory is given.
//!
//! `RUST_LOG` overrides the level passed to [`init`].

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writes every line to stderr and, if open, to the day's log file.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        if let Some(f) = self.file.as_mut() {
            f.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(f) = self.file.as_mut() {
            f.flush()?;
        }
        Ok(())
    }
}

/// `<dir>/<YYYY-MM-DD>.log`, opened for append.
fn open_day_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir).with_context(|| format!("creating log dir {}", dir.display()))?;
    let path = dir.join(format!("{}.log", chrono::Local::now().format("%Y-%m-%d")));
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Install the global logger. Call once, before anything logs.
pub fn init(level: &str, log_dir: Option<&Path>) -> Result<()> {
    let file = log_dir.map(open_day_file).transpose()?;
    Builder::from_env(Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(Tee { file })))
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
