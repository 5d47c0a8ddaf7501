//! Startup configuration: where the data files are and how the server listens.

use crate::models::{TableLayout, default_allow_list};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// One indicator file and the header of its country column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub file: String,
    pub country_column: String,
}

impl SourceFile {
    pub fn new(file: &str, country_column: &str) -> Self {
        Self {
            file: file.to_string(),
            country_column: country_column.to_string(),
        }
    }
}

/// The three indicator files, read once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSources {
    pub data_dir: PathBuf,
    /// Adolescent fertility rate.
    pub fertility: SourceFile,
    /// Female literacy rate.
    pub literacy: SourceFile,
    /// GDP per person growth.
    pub gdp: SourceFile,
    pub layout: TableLayout,
    pub allow_list: Vec<String>,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            fertility: SourceFile::new("pregrant.csv", "Country"),
            literacy: SourceFile::new("literacy.csv", "Country Name"),
            gdp: SourceFile::new("GDP per person.csv", "Country Name"),
            layout: TableLayout::default(),
            allow_list: default_allow_list(),
        }
    }
}

impl DataSources {
    /// Default file names, looked up in `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn path_of(&self, src: &SourceFile) -> PathBuf {
        self.data_dir.join(&src.file)
    }
}

/// Listening address of the web server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Size of each rendered chart, in pixels.
    pub chart_size: (u32, u32),
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 9999,
            chart_size: (crate::charts::DEFAULT_WIDTH, crate::charts::DEFAULT_HEIGHT),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
