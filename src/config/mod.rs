use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "claim-deadlines")]
#[command(about = "Calculate court deadlines given the claim served date.")]
pub struct CliConfig {
    #[arg(help = "Date the claim was served in YYYY-MM-DD format")]
    pub service_date: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
