//! Colored console rendering of plans and reports.

use crate::models::SubnetPlan;
use crate::processing::NetworkReport;
use colored::Colorize;

/// Print the full report to the console, mirroring the persisted layout.
pub fn print_report(report: &NetworkReport) {
    println!(
        "{} {}",
        "Dirección de Red:".blue(),
        report.network_address
    );
    println!(
        "{} {}",
        "Dirección de Broadcast:".blue(),
        report.broadcast_address
    );
    println!(
        "{} {}",
        "Número de saltos en la subred:".blue(),
        report.addresses_per_subnet
    );
    println!("{}", "Direcciones IP disponibles en cada subred:".blue());
    for row in &report.subnets {
        println!("Subred {}: {}", row.index, row.subnet.addr);
        println!("  Rango de direcciones IP: {}", row.range_text());
        println!("  Número de hosts: {}", row.host_count);
    }
}

/// Print the plan summary shown on redisplay.
pub fn print_summary(plan: &SubnetPlan) {
    println!();
    println!(
        "Nueva máscara de subred para {} subredes: {}",
        plan.subnet_count,
        format!("/{}", plan.subnet_mask).green()
    );
    println!("Nueva dirección de red: {}", plan.network.network_address());
    println!(
        "Nueva dirección de Broadcast: {}",
        plan.network.broadcast_address()
    );
    println!("Número de saltos en cada subred: {}", plan.subnet_size());
}

/// Print an error with the shared accent.
pub fn print_error(message: &str) {
    println!("{} {}", "Error:".on_red(), message);
}
