use clap::Parser;
use claim_deadlines::utils::{logger, validation};
use claim_deadlines::{calculate_deadlines, render_report, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting claim-deadlines CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let service_date = match validation::parse_service_date(&config.service_date) {
        Ok(date) => date,
        Err(e) => {
            tracing::error!("Rejected service_date {:?}: {}", config.service_date, e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    tracing::debug!("Service date parsed: {}", service_date);

    let deadlines = calculate_deadlines(service_date);
    print!("{}", render_report(service_date, &deadlines));
}
