//! Text rendering and persistence of network reports.
//!
//! The text layout is a stable contract: other tooling parses these files,
//! so the labels and line order must not change.

use crate::config::Config;
use crate::error::SubnetError;
use crate::processing::NetworkReport;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Render the report in its persisted text form, newline-terminated.
pub fn render_report(report: &NetworkReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dirección de Red: {}", report.network_address);
    let _ = writeln!(out, "Dirección de Broadcast: {}", report.broadcast_address);
    let _ = writeln!(
        out,
        "Número de saltos en la subred: {}",
        report.addresses_per_subnet
    );
    let _ = writeln!(out, "Direcciones IP disponibles en cada subred:");
    for row in &report.subnets {
        let _ = writeln!(out, "Subred {}: {}", row.index, row.subnet.addr);
        let _ = writeln!(out, "  Rango de direcciones IP: {}", row.range_text());
        let _ = writeln!(out, "  Número de hosts: {}", row.host_count);
    }
    out
}

/// Write the text report (and, when configured, a dated JSON copy).
/// Returns the path of the text file.
pub fn write_report(report: &NetworkReport, config: &Config) -> Result<PathBuf, SubnetError> {
    std::fs::create_dir_all(&config.report_dir).map_err(|source| SubnetError::Io {
        path: config.report_dir.clone(),
        source,
    })?;

    let path = config.report_path();
    std::fs::write(&path, render_report(report)).map_err(|source| SubnetError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("report for {} written to {}", report.network, path.display());

    if config.json_copy {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let json_path = config.report_dir.join(format!("informacion_red_{date}.json"));
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&json_path, json).map_err(|source| SubnetError::Io {
            path: json_path.clone(),
            source,
        })?;
        log::info!("JSON copy written to {}", json_path.display());
    }

    Ok(path)
}

/// Read a persisted report back as raw text.
pub fn read_report(path: &Path) -> Result<String, SubnetError> {
    if !path.exists() {
        return Err(SubnetError::NotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| SubnetError::Io {
        path: path.to_path_buf(),
        source,
    })
}
