use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::handle_replay_command;
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal budget tracker for a single month",
    long_about = "Tally keeps a list of income and expense items and shows the \
                  available budget, the totals and how much of your income \
                  each expense takes."
)]
struct Cli {
    /// Directory for settings and logs (defaults to the platform config dir)
    #[arg(long, global = true, env = "TALLY_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run a CSV script of add/delete rows and print the resulting budget
    Replay {
        /// Script file (rows: `add,<inc|exp>,<description>,<amount>` or `delete,<handle>`)
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the current settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::resolve(cli.config_dir)?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            // The TUI owns the terminal, so logs go to a file
            paths.ensure_directories()?;
            let log_file = paths.log_file();
            logging::init(LogTarget::File(&log_file), &settings.log_filter)?;

            tally::tui::run_tui(settings)?;
        }

        Commands::Replay { file, json } => {
            logging::init(LogTarget::Stderr, &settings.log_filter)?;
            handle_replay_command(&settings, &file, json)?;
        }

        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                println!("Wrote settings to {}", paths.settings_file().display());
            }
        }

        Commands::Config => {
            println!("Tally Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!(
                "Settings saved:   {}",
                if paths.is_initialized() { "yes" } else { "no (using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Tick rate (ms):   {}", settings.tick_rate_ms);
            println!("  Log filter:       {}", settings.log_filter);
            println!("  Default category: {}", settings.default_category);
        }
    }

    Ok(())
}
