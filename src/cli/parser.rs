use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for studylog
#[derive(Parser)]
#[command(
    name = "studylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small study logbook: record sessions, summarize hours by date and subject, export to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path (useful for tests or a second logbook)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (user configuration is neither read nor written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryKind {
    Date,
    Subject,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and an empty log file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a study session
    Add {
        /// Subject studied
        subject: String,

        /// Duration in hours (e.g. 1.5)
        #[arg(allow_negative_numbers = true)]
        duration: String,

        /// Free-text description
        #[arg(default_value = "")]
        description: String,

        /// Date of the session (YYYY-MM-DD); today when omitted or invalid
        #[arg(long, short)]
        date: Option<String>,
    },

    /// List all study sessions with their numbers
    List,

    /// Edit a study session by number
    Edit {
        /// Session number as shown by `list`
        position: usize,

        #[arg(long, help = "New subject")]
        subject: Option<String>,

        #[arg(long, allow_negative_numbers = true, help = "New duration in hours")]
        duration: Option<String>,

        #[arg(long, help = "New description")]
        description: Option<String>,
    },

    /// Delete a study session by number
    Del {
        /// Session number as shown by `list`
        position: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show total hours grouped by date or by subject
    Summary {
        #[arg(long, value_enum, default_value = "date")]
        by: SummaryKind,
    },

    /// Export all study sessions to StudyExport_<today>.<ext>
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE", help = "Write to FILE instead of the dated file")]
        out: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the log file
    Backup {
        #[arg(long = "to", value_name = "FILE")]
        to: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the activity log
    Log {
        #[arg(long = "print", help = "Print the activity log")]
        print: bool,
    },

    /// Start the interactive menu
    Menu,
}
