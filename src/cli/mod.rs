pub mod dates;
pub mod records;
pub mod stats;

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use records::{
    print_categories, print_change, print_entries, print_export, print_recent, EntriesCommand,
};
use stats::{process_stats_command, StatsCommand};
use tracing::{debug, level_filters::LevelFilter};

use crate::{
    app::App,
    error::ActionError,
    locale::Locale,
    storage::key_value::FileStore,
    utils::{
        clock::DefaultClock,
        dir::{create_application_default_path, ensure_dir},
        logging::{enable_logging, CLI_PREFIX},
    },
};

const DEFAULT_RECENT: usize = 30;

#[derive(Parser, Debug)]
#[command(name = "taplog", version, long_about = None)]
#[command(about = "Record what you are doing with a single tap and see where the time goes", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(
        long,
        global = true,
        help = "Application directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(long, global = true, default_value_t = Locale::Zh, help = "Language of messages and default categories")]
    locale: Locale,
    #[arg(long, global = true, help = "Enable logging")]
    log: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Record that you are doing CATEGORY now")]
    Tap { category: String },
    #[command(about = "Delete a record by its id")]
    Remove { id: String },
    #[command(about = "Show the most recent records")]
    Recent {
        #[arg(short, long, default_value_t = DEFAULT_RECENT)]
        limit: usize,
    },
    #[command(about = "List categories")]
    Categories {},
    #[command(about = "Add a category in front of the list")]
    AddCategory { name: String },
    #[command(about = "Summarize a day, month or quarter")]
    Stats {
        #[command(flatten)]
        command: StatsCommand,
    },
    #[command(about = "List raw records of a day, month or quarter together with their ids")]
    Entries {
        #[command(flatten)]
        command: EntriesCommand,
    },
    #[command(about = "Export every record as CSV")]
    Export {
        #[arg(long, help = "Directory to write the file into. Defaults to the current directory")]
        out: Option<PathBuf>,
        #[arg(long, help = "Print CSV to stdout instead of writing a file")]
        stdout: bool,
    },
    #[command(about = "Delete all records and restore default categories")]
    Clear {
        #[arg(long, help = "Confirm that everything should be deleted")]
        yes: bool,
    },
}

pub fn run_cli() -> Result<ExitCode> {
    let args = Args::parse();

    let app_dir = args
        .dir
        .map_or_else(create_application_default_path, ensure_dir)?;

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;
    debug!("Using {app_dir:?}");

    let store = FileStore::new(app_dir.join("data"))?;
    let mut app = App::load(store, Box::new(DefaultClock), args.locale);
    let locale = app.locale();
    app.subscribe(move |change, _| print_change(change, locale, &Local));

    let result = match args.commands {
        Commands::Tap { category } => app.add_log(&category).map(|_| ()),
        Commands::Remove { id } => {
            app.remove_log(&id);
            Ok(())
        }
        Commands::Recent { limit } => {
            print_recent(app.state().logs.recent(limit), locale, &Local);
            Ok(())
        }
        Commands::Categories {} => {
            print_categories(app.state().categories.list());
            Ok(())
        }
        Commands::AddCategory { name } => app.add_category(&name).map(|_| ()),
        Commands::Stats { command } => {
            process_stats_command(&app, command)?;
            Ok(())
        }
        Commands::Entries { command } => {
            print_entries(&app, command)?;
            Ok(())
        }
        Commands::Export { out, stdout } => match app.export(&Local) {
            Ok(file) => {
                print_export(&file, out, stdout, locale)?;
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Clear { yes } => {
            if yes {
                app.clear_all();
            } else {
                println!("{}", locale.strings().clear_confirm);
                println!("taplog clear --yes");
            }
            Ok(())
        }
    };

    Ok(report(result, locale))
}

/// Action errors are expected, they are shown to the user instead of being treated as failures
/// of the program.
fn report(result: Result<(), ActionError>, locale: Locale) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Action rejected: {e}");
            eprintln!("{}", locale.describe(&e));
            ExitCode::FAILURE
        }
    }
}
