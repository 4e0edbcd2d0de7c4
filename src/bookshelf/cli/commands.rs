//! # CLI Layer
//!
//! The only place that knows about terminal I/O, exit codes and logging setup.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data dir, load config and open the shelf
//! 3. **API Dispatch**: Call the matching `ShelfApi` method
//! 4. **Output Formatting**: Turn each `CmdResult` into terminal output
//!
//! `config`, `init` and `help` never open the shelf, so they keep working when
//! the saved data cannot be read.

use super::render::{print_messages, render_config, render_shelf};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BookCommands, Cli,
    Commands, CoreCommands, MiscCommands,
};
use bookshelf::api::{self, CmdMessage, CmdResult, ConfigAction, ShelfApi, ShelfPaths};
use bookshelf::error::{Result, ShelfError};
use bookshelf::init::{initialize, paths_from_env};
use bookshelf::model::{BookId, NewBook};
use bookshelf::render::ShelfView;
use bookshelf::store::fs::FileStore;
use bookshelf::store::KeyValueStore;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives are read from here; `--verbose` overrides it.
pub const LOG_ENV: &str = "SHELF_LOG";

struct AppContext {
    api: ShelfApi<FileStore>,
    color: Option<bool>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_logging(cli.verbose);

    let paths = paths_from_env()?;
    debug!(data_dir = %paths.data_dir.display(), "resolved data directory");

    // Commands that work without the shelf
    if let Some(Commands::Misc(cmd)) = &cli.command {
        match cmd {
            MiscCommands::Config { key, value } => {
                return handle_config(&paths, key.clone(), value.clone())
            }
            MiscCommands::Init => return handle_init(&paths),
            MiscCommands::Help { command } => return handle_help(command.clone()),
        }
    }

    let mut ctx = init_context(paths)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add {
                author,
                year,
                complete,
                title,
            } => handle_add(&mut ctx, title.join(" "), author, year, complete),
            CoreCommands::List => handle_list(&mut ctx),
            CoreCommands::Search { query } => handle_search(&mut ctx, query.join(" ")),
        },
        Some(Commands::Book(cmd)) => match cmd {
            BookCommands::Complete { ids } => {
                handle_each(&mut ctx, ids, |api, id| api.mark_complete(id))
            }
            BookCommands::Undo { ids } => {
                handle_each(&mut ctx, ids, |api, id| api.mark_incomplete(id))
            }
            BookCommands::Remove { ids } => {
                handle_each(&mut ctx, ids, |api, id| api.remove_book(id))
            }
        },
        Some(Commands::Misc(_)) => Ok(()),
        None => handle_list(&mut ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn init_context(paths: ShelfPaths) -> Result<AppContext> {
    let ctx = initialize(paths)?;
    Ok(AppContext {
        api: ctx.api,
        color: ctx.config.color.as_override(),
    })
}

fn parse_ids(ids: &[String]) -> Result<Vec<BookId>> {
    ids.iter()
        .map(|raw| {
            raw.parse::<BookId>()
                .map_err(|_| ShelfError::Api(format!("Invalid book id: {}", raw)))
        })
        .collect()
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    author: String,
    year: String,
    complete: bool,
) -> Result<()> {
    let result = ctx
        .api
        .add_book(NewBook::new(title, author, year, complete))?;
    print_result(&result, ctx.color);
    Ok(())
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    print_result(&result, ctx.color);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    let result = ctx.api.filter_books(&query)?;
    print_result(&result, ctx.color);
    Ok(())
}

/// What a multi-id command produced before it finished or failed.
struct BatchOutcome {
    messages: Vec<CmdMessage>,
    view: Option<ShelfView>,
    error: Option<ShelfError>,
}

/// Runs `op` once per id, stopping at the first error. Ids handled before the
/// error are already saved, so their messages are kept.
fn apply_each<S, F>(api: &mut ShelfApi<S>, ids: &[BookId], mut op: F) -> BatchOutcome
where
    S: KeyValueStore,
    F: FnMut(&mut ShelfApi<S>, BookId) -> Result<CmdResult>,
{
    let mut outcome = BatchOutcome {
        messages: Vec::new(),
        view: None,
        error: None,
    };
    for &id in ids {
        match op(api, id) {
            Ok(result) => {
                outcome.messages.extend(result.messages);
                if result.view.is_some() {
                    outcome.view = result.view;
                }
            }
            Err(e) => {
                outcome.error = Some(e);
                break;
            }
        }
    }
    outcome
}

/// Messages are printed together, the shelf once.
fn handle_each<F>(ctx: &mut AppContext, ids: Vec<String>, op: F) -> Result<()>
where
    F: FnMut(&mut ShelfApi<FileStore>, BookId) -> Result<CmdResult>,
{
    let ids = parse_ids(&ids)?;
    let outcome = apply_each(&mut ctx.api, &ids, op);

    print_messages(&outcome.messages, ctx.color);
    if let Some(view) = outcome.view {
        print!("{}", render_shelf(&view, ctx.color));
    }
    match outcome.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn handle_config(paths: &ShelfPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = api::config(paths, action)?;
    let color = result.config.as_ref().and_then(|c| c.color.as_override());

    print_messages(&result.messages, color);
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, color));
        }
    }
    Ok(())
}

fn handle_init(paths: &ShelfPaths) -> Result<()> {
    let result = api::init(paths)?;
    print_messages(&result.messages, None);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(&name),
        None => print_grouped_help(),
    }
    Ok(())
}

fn print_result(result: &CmdResult, color: Option<bool>) {
    print_messages(&result.messages, color);
    if let Some(view) = &result.view {
        print!("{}", render_shelf(view, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::config::ShelfConfig;
    use bookshelf::store::memory::InMemoryStore;

    fn shelf_with(titles: &[&str]) -> (ShelfApi<InMemoryStore>, Vec<BookId>) {
        let mut api = ShelfApi::open(InMemoryStore::new(), &ShelfConfig::default()).unwrap();
        let ids = titles
            .iter()
            .map(|title| {
                let result = api
                    .add_book(NewBook::new(*title, "Herbert", "1965", false))
                    .unwrap();
                result.affected_books[0].id
            })
            .collect();
        (api, ids)
    }

    #[test]
    fn apply_each_collects_every_result() {
        let (mut api, ids) = shelf_with(&["Dune", "Emma"]);

        let outcome = apply_each(&mut api, &ids, |api, id| api.mark_complete(id));

        assert!(outcome.error.is_none());
        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.view.unwrap().complete.len(), 2);
    }

    #[test]
    fn apply_each_keeps_messages_from_before_a_failure() {
        let (mut api, ids) = shelf_with(&["Dune", "Emma", "Ubik"]);

        let mut calls = 0;
        let outcome = apply_each(&mut api, &ids, |api, id| {
            calls += 1;
            if calls == 2 {
                api.persistence().store().set_simulate_write_error(true);
            }
            api.remove_book(id)
        });

        assert!(matches!(outcome.error, Some(ShelfError::Store(_))));
        assert_eq!(outcome.messages.len(), 1);
        assert!(outcome.messages[0].content.contains("Dune"));
        assert_eq!(outcome.view.unwrap().len(), 2);
        assert_eq!(calls, 2);
    }

    #[test]
    fn parse_ids_accepts_padded_numbers() {
        let ids = parse_ids(&["1700000000000".to_string(), " 42 ".to_string()]).unwrap();
        assert_eq!(ids, vec![BookId(1_700_000_000_000), BookId(42)]);
    }

    #[test]
    fn parse_ids_rejects_garbage() {
        let err = parse_ids(&["12".to_string(), "dune".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid book id: dune"));
    }
}
