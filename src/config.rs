//! Environment-driven configuration.
//!
//! Values come from the process environment (a `.env` file is loaded in
//! `main`). Everything has a default, so the tool runs unconfigured.

use std::path::PathBuf;

/// Where and how reports get persisted.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the report files land in.
    pub report_dir: PathBuf,
    /// File name of the text report.
    pub report_file: String,
    /// Also write a dated JSON copy of the structured report.
    pub json_copy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            report_dir: PathBuf::from("archivos_red"),
            report_file: "informacion_red.txt".to_string(),
            json_copy: false,
        }
    }
}

impl Config {
    /// Read `REPORT_DIR`, `REPORT_FILE` and `REPORT_JSON` from the
    /// environment, falling back to the defaults.
    pub fn from_env() -> Config {
        let defaults = Config::default();
        let config = Config {
            report_dir: std::env::var("REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
            report_file: std::env::var("REPORT_FILE").unwrap_or(defaults.report_file),
            json_copy: std::env::var("REPORT_JSON")
                .map(|v| env_flag(&v))
                .unwrap_or(defaults.json_copy),
        };
        log::debug!("config: {config:?}");
        config
    }

    /// Full path of the text report.
    pub fn report_path(&self) -> PathBuf {
        self.report_dir.join(&self.report_file)
    }
}

fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
