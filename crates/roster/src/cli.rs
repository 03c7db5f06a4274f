//! Clap derive structures for the `roster` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use roster_core::ColumnKey;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// roster -- browse a paginated user listing from the command line
#[derive(Debug, Parser)]
#[command(
    name = "roster",
    version,
    about = "Query a paginated user listing from the command line",
    long_about = "Fetches one page of users at a time from a dummyjson-compatible\n\
        REST API, with the same sorting and filtering as roster-tui.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// API root URL (overrides the config file)
    #[arg(long, short = 'u', env = "ROSTER_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Config file path
    #[arg(long, short = 'c', env = "ROSTER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ROSTER_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one user id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print one page of users
    #[command(alias = "ls")]
    List(ListArgs),

    /// Inspect or create the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Sort column (e.g. age, lastName, country)
    #[arg(long, short = 's')]
    pub sort: Option<ColumnKey>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Column the filter text applies to
    #[arg(long, default_value = "firstName")]
    pub filter_field: ColumnKey,

    /// Filter text; empty means no filter
    #[arg(long, short = 'f', default_value = "")]
    pub filter: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Print the effective config (file, environment, and flags merged)
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_parses_column_keys_case_insensitively() {
        let cli = Cli::try_parse_from([
            "roster", "list", "--sort", "AGE", "--desc", "--filter-field", "lastName",
            "--filter", "Doe", "--page", "3",
        ])
        .expect("valid args");
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.sort, Some(ColumnKey::Age));
        assert!(args.desc);
        assert_eq!(args.filter_field, ColumnKey::LastName);
        assert_eq!(args.filter, "Doe");
        assert_eq!(args.page, 3);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(Cli::try_parse_from(["roster", "list", "--page", "0"]).is_err());
    }

    #[test]
    fn desc_requires_sort() {
        assert!(Cli::try_parse_from(["roster", "list", "--desc"]).is_err());
    }
}
