use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
/// CLI application to track student attendance in a CSV roster
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: keep a CSV roster of students and mark who is present",
    long_about = None
)]
pub struct Cli {
    /// Override the students file (useful for tests or a custom roster)
    #[arg(global = true, long = "roster", value_name = "FILE")]
    pub roster: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive menu is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the students file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// List the students of the roster
    List,

    /// Mark attendance interactively and save it
    Mark {
        /// Re-mark only the student with this id (as shown by `list`)
        #[arg(long = "student", value_name = "ID", help = "Mark a single student by id")]
        student: Option<usize>,

        #[arg(long = "no-save", help = "Do not write the result back to the students file")]
        no_save: bool,
    },

    /// Add a student to the roster
    Add {
        /// First name
        first_name: String,

        /// Last name
        last_name: String,
    },

    /// Rename a student
    Edit {
        old_first_name: String,
        old_last_name: String,
        new_first_name: String,
        new_last_name: String,
    },

    /// Export the roster with its attendance
    Export {
        /// Output file (default: the students file itself)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without confirmation")]
        force: bool,
    },

    /// Build a new attendance list from scratch with guided prompts
    Build {
        /// Where to save the list (default: the students file)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },

    /// Create a backup copy of the students file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite the destination without confirmation")]
        force: bool,
    },
}
