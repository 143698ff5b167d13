//! Interactive console menu.
//!
//! Drives the plan → report → persist workflow from stdin prompts. The
//! most recent successful computation lives in an explicit [`Session`]
//! passed through the loop, so redisplay works until it is replaced.

use crate::config::Config;
use crate::error::SubnetError;
use crate::models::{Ipv4, SubnetPlan, MAX_LENGTH};
use crate::output::{read_report, write_report};
use crate::output::terminal;
use crate::processing::{build_report, plan_split};
use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

lazy_static! {
    // Accepts "a.b.c.d", "a.b.c.d/len" and "a.b.c.d len".
    static ref NETWORK_RE: Regex =
        Regex::new(r"^\s*(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})(?:\s*[/\s]\s*(\d{1,3}))?\s*$")
            .expect("Invalid Regex?");
}

/// Most recent successful computation, kept for redisplay.
#[derive(Default)]
pub struct Session {
    /// The last accepted split plan.
    pub plan: Option<SubnetPlan>,
    /// Where its report was persisted.
    pub report_path: Option<PathBuf>,
}

/// Run the menu until the user exits or stdin closes.
pub fn run_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::default();

    loop {
        print_banner();
        let Some(option) = prompt(&mut lines, "Ingrese la opción deseada: ")? else {
            break;
        };
        match option.trim() {
            "1" => {
                if let Err(e) = create_network_info(&mut lines, &mut session, config) {
                    log::warn!("network info request rejected: {e}");
                    terminal::print_error(&e.to_string());
                }
            }
            "2" => show_network_info(&session),
            "3" => {
                println!("Saliendo del programa.");
                break;
            }
            other => {
                println!(
                    "Opción no válida: {other}. Por favor, ingrese una opción válida."
                );
            }
        }
    }
    Ok(())
}

fn print_banner() {
    println!();
    println!("{}", "*******************".blue());
    println!("{}", "MENÚ PRINCIPAL".blue());
    println!("{}", "*******************".blue());
    println!("1. Crear Información de Red");
    println!("2. Mostrar Información de Red");
    println!("3. Salir");
}

/// Option 1: read the parameters, run the engine, persist the report.
fn create_network_info(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    session: &mut Session,
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    let line = required(prompt(
        lines,
        "Ingrese la dirección IP base (ej. 192.168.1.0 o 192.168.1.0/24): ",
    )?)?;
    let (addr_text, parsed_mask) = parse_network_input(&line)?;

    let mask = match parsed_mask {
        Some(mask) => mask,
        None => {
            let line = required(prompt(
                lines,
                "Ingrese la máscara de subred en formato prefijo (ej. 24): ",
            )?)?;
            parse_prefix(&line)?
        }
    };
    let base = Ipv4::from_parts(&addr_text, mask)?;

    let line = required(prompt(lines, "Ingrese la cantidad de subredes deseadas: ")?)?;
    let requested: u64 = line
        .trim()
        .parse()
        .map_err(|_| format!("`{}` no es una cantidad válida de subredes", line.trim()))?;

    let plan = plan_split(base, requested)?;
    let report = build_report(&plan)?;
    let path = write_report(&report, config)?;

    println!(
        "Información de red creada y guardada en el archivo: {}",
        path.display().to_string().green()
    );
    session.plan = Some(plan);
    session.report_path = Some(path);
    Ok(())
}

/// Option 2: read the persisted report back and print it with a summary.
fn show_network_info(session: &Session) {
    let (Some(plan), Some(path)) = (&session.plan, &session.report_path) else {
        println!("No se ha creado información de red. Por favor, seleccione la opción 1 primero.");
        return;
    };
    match read_report(path) {
        Ok(content) => {
            println!();
            print!("{content}");
            terminal::print_summary(plan);
        }
        Err(e) => {
            log::warn!("report read-back failed: {e}");
            terminal::print_error(&e.to_string());
        }
    }
}

/// Extract the address text and optional prefix from a base-network line.
fn parse_network_input(line: &str) -> Result<(String, Option<u8>), SubnetError> {
    let caps = NETWORK_RE
        .captures(line)
        .ok_or_else(|| SubnetError::AddressFormat {
            text: line.trim().to_string(),
        })?;
    let addr_text = caps[1].to_string();
    let mask = match caps.get(2) {
        Some(m) => Some(check_prefix(m.as_str().parse::<u16>().expect("digits"))?),
        None => None,
    };
    Ok((addr_text, mask))
}

fn parse_prefix(line: &str) -> Result<u8, Box<dyn Error>> {
    let len: u16 = line
        .trim()
        .trim_start_matches('/')
        .parse()
        .map_err(|_| format!("`{}` no es un prefijo válido", line.trim()))?;
    Ok(check_prefix(len)?)
}

fn check_prefix(len: u16) -> Result<u8, SubnetError> {
    if len > MAX_LENGTH as u16 {
        Err(SubnetError::PrefixRange { len })
    } else {
        Ok(len as u8)
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    print!("{label}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn required(line: Option<String>) -> Result<String, Box<dyn Error>> {
    line.ok_or_else(|| "entrada terminada".into())
}
