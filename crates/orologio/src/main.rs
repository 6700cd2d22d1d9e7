mod commands;
mod render;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "orologio",
    version,
    about = "A multi-timezone wall-clock display for your terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Run the live wall-clock display
    Start {
        /// Enable file logging (~/.config/orologio/logs/)
        #[arg(long)]
        log: bool,
    },
    /// Print every configured clock once and exit
    List,
    /// Inspect or reset the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the active configuration as JSON
    Show,
    /// Print the compiled-in default configuration
    Default,
    /// Print the path of the configuration file
    Path,
    /// Delete the stored configuration (reverts to the default)
    Reset,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start { log } => commands::start::execute(log),
        Commands::List => commands::list::execute(),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Default => commands::config::default(),
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Reset => commands::config::reset(),
        },
    }
}
