pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;

use models::Ipv4;
use processing::NetworkReport;

/// Compute the full report for a base address, prefix and requested
/// subnet count. One-stop entry point for callers that do not need the
/// intermediate plan.
///
/// ```
/// let report = subnet_planner::plan_network("192.168.1.0", 24, 4).unwrap();
/// assert_eq!(report.subnet_count, 4);
/// assert_eq!(report.subnets[0].host_count, 62);
/// ```
pub fn plan_network(
    addr_text: &str,
    mask: u8,
    requested: u64,
) -> Result<NetworkReport, SubnetError> {
    let base = Ipv4::from_parts(addr_text, mask)?;
    let plan = processing::plan_split(base, requested)?;
    processing::build_report(&plan)
}
