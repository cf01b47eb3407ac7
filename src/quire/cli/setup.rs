use clap::{Parser, Subcommand};
use quire::config::Overrides;
use quire::sort::SortPolicy;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("QUIRE_GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("QUIRE_COMMIT_DATE");
    const IS_RELEASE: &str = env!("QUIRE_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "quire", bin_name = "quire", version = get_version())]
#[command(about = "Browse a directory of markdown writing by category", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to scan (default: current directory)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub dir: Option<PathBuf>,

    /// Descend into subdirectories (default)
    #[arg(short, long, global = true, overrides_with = "no_recursive", help_heading = "Options")]
    pub recursive: bool,

    /// Only scan the top level of the directory
    #[arg(long, global = true, overrides_with = "recursive", help_heading = "Options")]
    pub no_recursive: bool,

    /// Sort order: date_desc, date_asc, title, word_count
    #[arg(short, long, global = true, value_name = "NAME", help_heading = "Options")]
    pub sort: Option<String>,

    /// Editor command used by `open`
    #[arg(short, long, global = true, value_name = "CMD", help_heading = "Options")]
    pub editor: Option<String>,

    /// Read settings from this file instead of the default location
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        conflicts_with = "no_config",
        help_heading = "Options"
    )]
    pub config: Option<PathBuf>,

    /// Ignore the config file
    #[arg(long, global = true, help_heading = "Options")]
    pub no_config: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        let recursive = if self.no_recursive {
            Some(false)
        } else if self.recursive {
            Some(true)
        } else {
            None
        };
        Overrides {
            directory: self.dir.clone(),
            recursive,
            sort: self.sort.as_deref().map(SortPolicy::from_name),
            editor: self.editor.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List documents grouped by category (default)
    #[command(alias = "ls")]
    List,

    /// Show documents with their header fields
    View {
        /// Indexes (e.g. 1, 3, 2-5), filenames or titles
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,

        /// Show a condensed preview of each body
        #[arg(long)]
        peek: bool,
    },

    /// Open a document in the editor
    Open {
        /// Index, filename or title
        selector: String,
    },

    /// Print absolute paths of documents
    Path {
        /// Indexes (e.g. 1, 3, 2-5), filenames or titles
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Export document metadata as JSON
    Export {
        /// Write to FILE instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show effective settings, or set a value in the config file
    Config {
        /// Setting name (directory, recursive, sort, editor)
        key: Option<String>,

        /// New value to store
        value: Option<String>,
    },

    /// Browse interactively: refresh, re-sort, view and open documents
    Browse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("quire").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        let overrides = cli.overrides();
        assert!(overrides.recursive.is_none());
        assert!(overrides.sort.is_none());
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["view", "2-3", "notes", "--dir", "/tmp/w", "--sort", "title"]);
        match &cli.command {
            Some(Commands::View { selectors, peek }) => {
                assert_eq!(selectors, &vec!["2-3".to_string(), "notes".to_string()]);
                assert!(!peek);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        let overrides = cli.overrides();
        assert_eq!(overrides.directory, Some(PathBuf::from("/tmp/w")));
        assert_eq!(overrides.sort, Some(SortPolicy::Title));
    }

    #[test]
    fn recursion_flags_last_one_wins() {
        assert_eq!(parse(&["--no-recursive"]).overrides().recursive, Some(false));
        assert_eq!(parse(&["-r"]).overrides().recursive, Some(true));
        assert_eq!(
            parse(&["--no-recursive", "--recursive"]).overrides().recursive,
            Some(true)
        );
    }

    #[test]
    fn unknown_sort_falls_back() {
        let cli = parse(&["--sort", "size"]);
        assert_eq!(cli.overrides().sort, Some(SortPolicy::DateDesc));
    }

    #[test]
    fn config_and_no_config_conflict() {
        let res = Cli::try_parse_from(["quire", "--config", "a.json", "--no-config"]);
        assert!(res.is_err());
    }

    #[test]
    fn view_requires_selector() {
        assert!(Cli::try_parse_from(["quire", "view"]).is_err());
    }
}
