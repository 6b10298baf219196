/*!
# Moodlog - A Mood-Tagged Diary

Command-line front end for moodlog. It parses arguments, loads configuration,
opens the entry store and runs one operation against it.

## Usage

```text
moodlog [OPTIONS] <COMMAND>

Commands:
  list    List all entries, most recent first
  show    Show a single entry
  new     Write a new entry
  edit    Change an existing entry
  delete  Delete an entry

Options:
  -v, --verbose                 Print verbose output
      --log-format <FORMAT>     Log output format: text or json
```

## Configuration

- `MOODLOG_DB`: The SQLite database file (defaults to "~/.moodlog/journal.db")
- `MOODLOG_LOG_FORMAT`: `text` or `json` log lines on stderr
- `RUST_LOG`: Overrides the log filter
*/

use clap::Parser;
use moodlog::cli::{CliArgs, Command};
use moodlog::config::{Config, LogFormat};
use moodlog::constants::{DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use moodlog::display::{render_detail, render_row};
use moodlog::entry::now;
use moodlog::errors::AppResult;
use moodlog::ops;
use moodlog::store::EntryStore;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::EnvFilter;

/// Sets up the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the level implied by `--verbose`.
fn init_logging(format: LogFormat, verbose: bool) {
    let default_level = if verbose { "debug" } else { DEFAULT_LOG_LEVEL };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.log_format.unwrap_or(config.log_format), args.verbose);

    let correlation_id = uuid::Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Opens the store named by `config` and executes `command` against it.
fn run(command: Command, config: &Config) -> AppResult<()> {
    debug!("Command: {:?}", command);
    config.validate()?;

    info!("Opening entry store");
    let store = EntryStore::open(&config.db_path)?;

    match command {
        Command::List { json } => {
            let entries = ops::list_entries(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else if entries.is_empty() {
                println!("No entries yet");
            } else {
                let now = now();
                for entry in &entries {
                    println!("{}", render_row(entry, now));
                }
            }
        }
        Command::Show { id, json } => {
            let entry = ops::show_entry(&store, id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&entry)?);
            } else {
                println!("{}", render_detail(&entry));
            }
        }
        Command::New {
            title,
            content,
            mood,
            at,
        } => {
            let input = Command::new_entry(&title, &content, &mood, at.as_deref())?;
            let entry = ops::create_entry(&store, input)?;
            if let Some(id) = entry.id {
                println!("Created entry {}", id);
            }
        }
        Command::Edit {
            id,
            title,
            content,
            mood,
        } => {
            let changes =
                Command::entry_changes(title.as_deref(), content.as_deref(), mood.as_deref())?;
            if changes.is_empty() {
                debug!("Edit of entry {} changes no fields", id);
            }
            ops::edit_entry(&store, id, changes)?;
            println!("Updated entry {}", id);
        }
        Command::Delete { id } => {
            if ops::delete_entry(&store, id)? == 0 {
                println!("No entry with id {}", id);
            } else {
                println!("Deleted entry {}", id);
            }
        }
    }

    Ok(())
}
