use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use modequill::config::Config;
use modequill::document::template::template_hints;
use modequill::store::error::ModeStoreError;
use modequill::store::locate::{resolve_storage, PlatformLocator};
use modequill::store::ModeStore;
use modequill::ui::menu::run_menu;
use modequill::ui::print_mode_list;

/// Exit status when an operation fails.
const EXIT_FAILURE: u8 = 1;
/// Exit status when the state database cannot be found.
const EXIT_STORAGE_NOT_FOUND: u8 = 2;

/// ModeQuill - manage Cursor's custom modes
#[derive(Parser)]
#[command(name = "modequill")]
#[command(version)]
#[command(about = "Manage the custom modes stored in Cursor's state database", long_about = None)]
struct Cli {
    /// Path to state.vscdb (found automatically when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Action to run; starts the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show stored modes
    List {
        /// Only show custom (non built-in) modes
        #[arg(long)]
        custom: bool,
    },
    /// Print one mode as JSON
    Get {
        /// Mode id
        id: String,
    },
    /// Export a mode to a JSON file
    Export {
        /// Mode id
        id: String,
        /// Output file
        file: PathBuf,
    },
    /// Import a mode from a JSON file, replacing any mode with the same id
    Import {
        /// Input file
        file: PathBuf,
        /// Id to give the imported mode
        #[arg(long)]
        mode_id: Option<String>,
    },
    /// Delete a custom mode
    Delete {
        /// Mode id
        id: String,
    },
    /// Write a mode template to start from
    Template {
        /// Output file (default from config: mode_template.json)
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::load();

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let storage_missing = e
                .downcast_ref::<ModeStoreError>()
                .is_some_and(ModeStoreError::is_storage_missing);
            if storage_missing {
                ExitCode::from(EXIT_STORAGE_NOT_FOUND)
            } else {
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}

fn run(cli: Cli, config: &Config) -> Result<()> {
    // Templates need no database.
    let command = match cli.command {
        Some(Command::Template { file }) => return write_template(file, config),
        command => command,
    };

    let path = resolve_storage(cli.db.as_deref(), config, &PlatformLocator)?;
    let store = ModeStore::with_config(&path, config)?;
    eprintln!("Using database: {}", store.path().display());

    let Some(command) = command else {
        let stdin = io::stdin();
        return run_menu(&store, config, stdin.lock(), io::stdout())
            .context("Interactive menu failed");
    };

    match command {
        Command::List { custom } => {
            let modes = store.list(!custom)?;
            print_mode_list(&mut io::stdout(), &modes)?;
        }
        Command::Get { id } => {
            let entry = store.get_entry(&id)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Command::Export { id, file } => {
            let mode = store.export(&id, &file)?;
            println!(
                "Mode '{}' exported to {}",
                mode.display_name(),
                file.display()
            );
        }
        Command::Import { file, mode_id } => {
            let imported = store.import(&file, mode_id.as_deref())?;
            println!(
                "Mode '{}' {} with id {}",
                imported.mode.display_name(),
                imported.outcome,
                imported.mode.id
            );
        }
        Command::Delete { id } => {
            store.delete(&id)?;
            println!("Mode '{}' deleted", id);
        }
        Command::Template { file } => write_template(file, config)?,
    }

    Ok(())
}

fn write_template(file: Option<PathBuf>, config: &Config) -> Result<()> {
    let file = file.unwrap_or_else(|| PathBuf::from(&config.template_file));
    ModeStore::create_template(&file)?;
    println!("Template written to {}", file.display());
    for hint in template_hints() {
        println!("{}", hint);
    }
    Ok(())
}
