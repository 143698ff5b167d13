// Keep main.rs minimal, it cannot carry tests.

use std::error::Error;
use subnet_planner::config::Config;
use subnet_planner::menu;

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env();
    menu::run_menu(&config)?;

    log::info!("#End main()");
    Ok(())
}
