use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bankbook_cli::cli::{handle_account_command, AccountCommands};
use bankbook_cli::config::{paths::BankbookPaths, settings::Settings};
use bankbook_cli::storage::Storage;

/// Environment variable holding the diagnostic log filter
const LOG_ENV: &str = "BANKBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "bankbook",
    author = "Kaylee Beyene",
    version,
    about = "Single-user account ledger",
    long_about = "Bankbook keeps a small ledger of savings and current accounts in \
                  flat files. Open accounts, deposit and withdraw with minimum \
                  balance rules, and review each account's transaction history."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Account(AccountCommands),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    // Failed operations are reported, not turned into a non-zero exit.
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = BankbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            let mut storage = Storage::new(paths, &settings)?;
            storage.load_all()?;
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Bankbook at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'bankbook open --help' to open your first account.");
        }
        Some(Commands::Config) => {
            println!("Bankbook Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Accounts file:    {}", paths.accounts_file().display());
            println!("Counter file:     {}", paths.counter_file().display());
            println!("Transaction log:  {}", paths.transaction_log().display());
            println!();
            println!("Settings:");
            println!("  Account prefix:   {}", settings.account_prefix);
            println!("  Counter seed:     {}", settings.counter_seed);
            println!("  Counter mode:     {:?}", settings.counter_mode);
            println!(
                "  Savings minimum:  {}",
                settings.savings_minimum_balance.format_with_currency(&settings.currency)
            );
            println!(
                "  Current minimum:  {}",
                settings.current_minimum_balance.format_with_currency(&settings.currency)
            );
            println!("  PIN length:       {}", settings.credential_length);
            println!(
                "  Opening minimum:  {}",
                if settings.enforce_opening_minimum {
                    "enforced"
                } else {
                    "not enforced"
                }
            );
        }
        None => {
            println!("Bankbook - single-user account ledger");
            println!();
            println!("Run 'bankbook --help' for usage information.");
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
