use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use wealthrank::cli::countries::CountryList;
use wealthrank::core::ComparisonRequest;
use wealthrank::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliCountryList {
    Residence,
    Target,
}

impl From<CliCountryList> for CountryList {
    fn from(value: CliCountryList) -> Self {
        match value {
            CliCountryList::Residence => CountryList::Residence,
            CliCountryList::Target => CountryList::Target,
        }
    }
}

impl From<Commands> for wealthrank::AppCommand {
    fn from(cmd: Commands) -> wealthrank::AppCommand {
        match cmd {
            Commands::Serve { host, port } => wealthrank::AppCommand::Serve { host, port },
            Commands::Compare {
                residence,
                currency,
                net_worth,
            } => wealthrank::AppCommand::Compare(ComparisonRequest {
                currency,
                net_worth: serde_json::Value::String(net_worth),
                residence,
            }),
            Commands::Countries { list } => wealthrank::AppCommand::Countries(list.into()),
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Run the HTTP API
    Serve {
        /// Address to bind, overrides the config file
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },
    /// Rank a net worth against every target country
    Compare {
        /// Country of residence, as a name or ISO code
        #[arg(short, long)]
        residence: String,
        /// Currency the net worth is expressed in
        #[arg(long)]
        currency: String,
        /// Net worth amount
        #[arg(short, long, allow_hyphen_values = true)]
        net_worth: String,
    },
    /// List selectable countries grouped by continent
    Countries {
        #[arg(value_enum)]
        list: CliCountryList,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => match cli.config_path.as_deref() {
            Some(path) => wealthrank::cli::setup::setup_at_path(path),
            None => wealthrank::cli::setup::setup(),
        },
        Some(cmd) => wealthrank::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
