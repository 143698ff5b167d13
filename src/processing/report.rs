//! Assembling the structured subnet report.
//!
//! [`build_report`] turns a [`SubnetPlan`] into the rows the console and
//! file renderers consume. Renderers never recompute addresses.

use crate::error::SubnetError;
use crate::models::{Ipv4, SubnetPlan};
use crate::processing::enumerate_subnets;
use serde::Serialize;
use std::net::Ipv4Addr;

/// One subnet's facts, in enumeration order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRow {
    /// 1-based display index.
    pub index: usize,
    /// The subnet block.
    pub subnet: Ipv4,
    /// Broadcast address of the block.
    pub broadcast: Ipv4Addr,
    /// First usable host, absent for /31 and /32 blocks.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, absent for /31 and /32 blocks.
    pub last_host: Option<Ipv4Addr>,
    /// Usable host count, clamped to 0.
    pub host_count: u64,
}

impl SubnetRow {
    /// The usable range as `"first - last"`, or `"-"` when there is none.
    pub fn range_text(&self) -> String {
        match (self.first_host, self.last_host) {
            (Some(first), Some(last)) => format!("{first} - {last}"),
            _ => "-".to_string(),
        }
    }
}

/// The full report: overall summary plus one row per subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkReport {
    /// The original network, normalized.
    pub network: Ipv4,
    /// Network address of the whole range.
    pub network_address: Ipv4Addr,
    /// Broadcast address of the whole range.
    pub broadcast_address: Ipv4Addr,
    /// Prefix length of each subnet.
    pub subnet_mask: u8,
    /// How many subnets the range was split into.
    pub subnet_count: u64,
    /// Addresses per subnet under the new mask.
    pub addresses_per_subnet: u64,
    /// Per-subnet rows, increasing address order.
    pub subnets: Vec<SubnetRow>,
}

/// Compute the report for a plan. Ordering follows the plan's enumeration.
pub fn build_report(plan: &SubnetPlan) -> Result<NetworkReport, SubnetError> {
    let subnets = enumerate_subnets(plan)?;
    log::info!("building report: {plan}");

    let rows = subnets
        .into_iter()
        .enumerate()
        .map(|(i, subnet)| {
            let range = subnet.host_range();
            SubnetRow {
                index: i + 1,
                subnet,
                broadcast: subnet.broadcast_address(),
                first_host: range.map(|(first, _)| first),
                last_host: range.map(|(_, last)| last),
                host_count: subnet.host_count(),
            }
        })
        .collect();

    Ok(NetworkReport {
        network: plan.network,
        network_address: plan.network.network_address(),
        broadcast_address: plan.network.broadcast_address(),
        subnet_mask: plan.subnet_mask,
        subnet_count: plan.subnet_count,
        addresses_per_subnet: plan.subnet_size(),
        subnets: rows,
    })
}
