//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--user <name>`: Sign headers with this user name
//! - `--email <addr>`: Sign headers with this email

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// stdheader - Insert and refresh 42-style file headers
#[derive(Parser, Debug)]
#[command(name = "stdheader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// User name for the header (overrides config and $USER)
    #[arg(long, global = true, value_name = "NAME")]
    pub user: Option<String>,

    /// Email for the header (overrides config)
    #[arg(long, global = true, value_name = "ADDR")]
    pub email: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Insert a header, or refresh the existing one
    #[command(
        name = "insert",
        long_about = "Insert a header at the top of each file, or refresh it.\n\n\
            Files that already carry a valid header get their filename, author and \
            'Updated' row refreshed; the creation row is kept. Files without a header \
            get a fresh one followed by a blank line. A header whose frame is intact \
            but whose fields cannot be read is replaced by a fresh one.\n\n\
            Files in languages without a comment style are reported and skipped.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Add headers to every C file in a project
    stdheader insert src/*.c include/*.h

    # Preview the result without touching the file
    stdheader insert main.c --dry-run

    # Force a language when the extension is ambiguous
    stdheader insert notes.txt --language markdown"
    )]
    Insert {
        /// Files to stamp
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Language id to use instead of detecting it from the path
        #[arg(long, short = 'l', value_name = "ID")]
        language: Option<String>,

        /// Print the resulting text instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Refresh existing headers only
    #[command(
        name = "update",
        long_about = "Refresh the header of each file that already has a valid one.\n\n\
            This is the save hook: files without a header, with a malformed header, \
            or in an unsupported language are left untouched.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Refresh after editing
    stdheader update src/ft_split.c

    # From an editor save hook, silently
    stdheader -q update \"$FILE\""
    )]
    Update {
        /// Files to refresh
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Language id to use instead of detecting it from the path
        #[arg(long, short = 'l', value_name = "ID")]
        language: Option<String>,

        /// Print the resulting text instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the decoded header of a file
    #[command(
        name = "show",
        after_help = "\
WORKFLOW EXAMPLES:
    # Human-readable fields
    stdheader show main.c

    # Machine-readable output
    stdheader show main.c --json"
    )]
    Show {
        /// File to read
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fail if any file lacks a valid header
    #[command(
        name = "check",
        long_about = "Report the header status of each file.\n\n\
            Prints one line per file and exits non-zero when any file has no header, \
            a malformed header, or is in an unsupported language.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Gate a commit on headers being present
    stdheader check $(git diff --cached --name-only -- '*.c' '*.h')"
    )]
    Check {
        /// Files to check
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// List supported language ids
    #[command(name = "languages")]
    Languages,

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "Get, set, or list configuration values.\n\n\
            Configuration is stored in ~/.stdheader/config.toml, or the file named \
            by STDHEADER_CONFIG. Keys: username, email.",
        after_help = "\
WORKFLOW EXAMPLES:
    # List all configuration values
    stdheader config list

    # Get a specific value
    stdheader config get username

    # Set a value
    stdheader config set email jdoe@student.42.fr"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    stdheader completion bash >> ~/.bashrc

    # Zsh
    stdheader completion zsh > ~/.zfunc/_stdheader

    # Fish
    stdheader completion fish > ~/.config/fish/completions/stdheader.fish

    # PowerShell
    stdheader completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
