//! Integration tests for subnet-planner
//!
//! These tests verify the complete workflow from planning a split to
//! persisting and reading back the report.

use subnet_planner::config::Config;
use subnet_planner::models::Ipv4;
use subnet_planner::output::{read_report, render_report, write_report};
use subnet_planner::processing::{build_report, enumerate_subnets, plan_split};
use subnet_planner::{plan_network, SubnetError};

fn temp_config(tag: &str) -> Config {
    Config {
        report_dir: std::env::temp_dir().join(format!(
            "subnet-planner-it-{tag}-{pid}",
            pid = std::process::id()
        )),
        ..Config::default()
    }
}

#[test]
fn test_full_workflow_four_subnets() {
    let report = plan_network("192.168.1.0", 24, 4).expect("planning failed");

    assert_eq!(report.subnet_mask, 26, "4 subnets of a /24 need 2 extra bits");
    assert_eq!(report.subnet_count, 4);
    assert_eq!(report.addresses_per_subnet, 64);

    let config = temp_config("workflow");
    let path = write_report(&report, &config).expect("write failed");
    let content = read_report(&path).expect("read-back failed");

    let expected = "\
Dirección de Red: 192.168.1.0
Dirección de Broadcast: 192.168.1.255
Número de saltos en la subred: 64
Direcciones IP disponibles en cada subred:
Subred 1: 192.168.1.0
  Rango de direcciones IP: 192.168.1.1 - 192.168.1.62
  Número de hosts: 62
Subred 2: 192.168.1.64
  Rango de direcciones IP: 192.168.1.65 - 192.168.1.126
  Número de hosts: 62
Subred 3: 192.168.1.128
  Rango de direcciones IP: 192.168.1.129 - 192.168.1.190
  Número de hosts: 62
Subred 4: 192.168.1.192
  Rango de direcciones IP: 192.168.1.193 - 192.168.1.254
  Número de hosts: 62
";
    assert_eq!(content, expected);

    std::fs::remove_dir_all(&config.report_dir).ok();
}

#[test]
fn test_host_address_is_normalized_without_split() {
    let report = plan_network("10.0.0.5", 8, 0).expect("planning failed");

    assert_eq!(report.network_address.to_string(), "10.0.0.0");
    assert_eq!(report.broadcast_address.to_string(), "10.255.255.255");
    assert_eq!(report.addresses_per_subnet, 16777216);
    assert_eq!(report.subnet_count, 1);
    assert_eq!(report.subnets[0].subnet, Ipv4::new("10.0.0.0/8").unwrap());

    let text = render_report(&report);
    assert!(text.contains("Número de saltos en la subred: 16777216\n"));
    assert!(text.contains("Subred 1: 10.0.0.0\n"));
}

#[test]
fn test_partition_tiles_the_range() {
    let base = Ipv4::new("192.0.2.0/24").unwrap();
    let plan = plan_split(base, 16).unwrap();
    let subnets = enumerate_subnets(&plan).unwrap();

    assert_eq!(subnets.len(), 16);
    let mut expected = u32::from(base.network_address());
    for subnet in &subnets {
        assert_eq!(u32::from(subnet.network_address()), expected);
        expected = u32::from(subnet.broadcast_address()) + 1;
    }
    assert_eq!(expected, u32::from(base.broadcast_address()) + 1);
}

#[test]
fn test_rejected_inputs() {
    assert!(matches!(
        plan_network("300.1.1.1", 24, 4),
        Err(SubnetError::AddressFormat { .. })
    ));
    assert!(matches!(
        plan_network("192.168.1.0", 33, 1),
        Err(SubnetError::PrefixRange { len: 33 })
    ));
    // 300 subnets of a /24 would need 9 extra bits.
    assert!(matches!(
        plan_network("192.168.1.0", 24, 300),
        Err(SubnetError::AddressSpaceExhausted { .. })
    ));
}

#[test]
fn test_report_overwritten_by_new_computation() {
    let config = temp_config("overwrite");

    let first = build_report(&plan_split(Ipv4::new("10.1.0.0/16").unwrap(), 2).unwrap()).unwrap();
    let path = write_report(&first, &config).expect("first write failed");

    let second = build_report(&plan_split(Ipv4::new("10.2.0.0/16").unwrap(), 4).unwrap()).unwrap();
    let path2 = write_report(&second, &config).expect("second write failed");
    assert_eq!(path, path2, "reports share the configured path");

    let content = read_report(&path).expect("read-back failed");
    assert!(content.starts_with("Dirección de Red: 10.2.0.0\n"));
    assert!(!content.contains("10.1.0.0"));

    std::fs::remove_dir_all(&config.report_dir).ok();
}

#[test]
fn test_point_to_point_split_has_no_hosts() {
    let report = plan_network("10.0.0.0", 30, 2).expect("planning failed");
    assert_eq!(report.subnet_mask, 31);
    assert_eq!(report.subnets.len(), 2);
    for row in &report.subnets {
        assert_eq!(row.host_count, 0);
        assert_eq!(row.range_text(), "-");
    }

    // /30 itself keeps its two hosts.
    let report = plan_network("10.0.0.0", 30, 0).expect("planning failed");
    assert_eq!(report.subnets[0].host_count, 2);
}
