use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep track of the books you read and the ones you want to", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Core,
    Book,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Core => "Core Commands:",
            CommandGroup::Book => "Per-Book Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "list" | "search" => Some(CommandGroup::Core),
            "complete" | "undo" | "remove" => Some(CommandGroup::Book),
            "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Core, CommandGroup::Book, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("shelf {version}\n"));
    output.push_str("Keep track of the books you read and the ones you want to\n");
    output.push('\n');
    output.push_str("Usage: shelf [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");
    output.push('\n');
    output.push_str("Environment:\n");
    output.push_str("  SHELF_HOME       Directory holding the shelf (default: platform data dir)\n");
    output.push_str("  SHELF_LOG        Log filter, e.g. debug or bookshelf=info\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a specific subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Core(c)) => match c {
            CoreCommands::Add { .. } => "add",
            CoreCommands::List => "list",
            CoreCommands::Search { .. } => "search",
        },
        Some(Commands::Book(c)) => match c {
            BookCommands::Complete { .. } => "complete",
            BookCommands::Undo { .. } => "undo",
            BookCommands::Remove { .. } => "remove",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init => "init",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name || subcmd.get_all_aliases().any(|a| a == name) {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Book(BookCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Add a book to the shelf
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Author of the book
        #[arg(short, long)]
        author: String,

        /// Year of publication, stored as typed
        #[arg(short, long)]
        year: String,

        /// Add straight to the read shelf
        #[arg(short, long)]
        complete: bool,

        /// Title words (joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// List both shelves
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show books whose title contains the query (case-sensitive)
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Query words (joined with spaces; empty shows everything)
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Mark books as read
    #[command(alias = "done", display_order = 10)]
    Complete {
        /// Ids of the books
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Move books back to the to-read shelf
    #[command(display_order = 11)]
    Undo {
        /// Ids of the books
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Remove books from the shelf
    #[command(alias = "rm", display_order = 12)]
    Remove {
        /// Ids of the books
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (storage-key, on-corrupt, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    #[command(display_order = 31)]
    Init,

    /// Print help for shelf or a subcommand
    #[command(display_order = 32)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}
