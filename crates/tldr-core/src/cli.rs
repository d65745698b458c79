use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::category::Platform;
use crate::color::Color;

/// Show tldr pages for shell commands
#[derive(Parser, Debug)]
#[command(name = "tldr")]
#[command(about = "A simple tldr client that implements offline caching", long_about = None)]
#[command(arg_required_else_help = true)]
#[command(after_help = "\
EXAMPLES:
  tldr tar                       Page for tar
  tldr git commit                Page for git-commit
  tldr cache init                Clone the offline mirror")]
#[command(after_long_help = "\
LOOKUP ORDER:
  Pages are searched in the categories common, <platform>, <other platform>.
  The offline mirror is tried first; the network is used only when no
  category has the page locally. The first match wins.

OFFLINE MIRROR:
  `tldr cache init` clones the upstream page repository with git into
  ~/.tldr/cache/tldr (or --cache-dir). `tldr cache update` pulls it,
  `tldr cache delete` removes it.

EXAMPLES:
  tldr tar                       Page for tar
  tldr git commit                Page for git-commit
  tldr --platform osx top        Prefer macOS pages over Linux ones
  tldr cache init                Clone the offline mirror")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Platform preferred after `common` (linux or osx)
    #[arg(long, global = true, value_name = "PLATFORM")]
    pub platform: Option<Platform>,

    /// Directory holding the offline mirror
    #[arg(long, global = true, value_name = "DIR", env = "TLDR_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Base URL pages are fetched from when not in the offline mirror
    #[arg(long, global = true, value_name = "URL", env = "TLDR_BASE_URL", hide = true)]
    pub base_url: Option<String>,

    /// When to emphasize headings with terminal escape sequences.
    ///
    /// Emphasis is emitted by default even when stdout is not a terminal.
    #[arg(long, global = true, value_name = "WHEN", default_value = "always")]
    pub color: Color,

    /// Diagnostics written to stderr. RUST_LOG takes precedence when set.
    #[arg(long, global = true, value_name = "LEVEL", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// View a tldr page
    View {
        /// Command name; multiple words are joined with '-'
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },

    /// Manage the offline tldr cache
    #[command(arg_required_else_help = true)]
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheAction {
    /// Initialize an offline tldr cache
    Init,
    /// Update the offline tldr cache
    Update,
    /// Delete the offline tldr cache
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

const SUBCOMMANDS: &[&str] = &["view", "cache", "help"];
const VALUE_OPTIONS: &[&str] = &[
    "--platform",
    "--cache-dir",
    "--base-url",
    "--color",
    "--log-level",
];

/// Insert `view` before the first positional argument unless it already names
/// a subcommand, so `tldr git commit` means `tldr view git commit`.
pub fn insert_default_command<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let mut i = 0;
    while i < args.len() {
        let arg = args[i];
        if VALUE_OPTIONS.contains(&arg) {
            i += 2;
        } else if arg.starts_with('-') {
            i += 1;
        } else {
            break;
        }
    }

    let mut out = args.to_vec();
    if i < args.len() && !SUBCOMMANDS.contains(&args[i]) {
        out.insert(i, "view");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_inserted() {
        assert_eq!(insert_default_command(&["tar"]), vec!["view", "tar"]);
        assert_eq!(
            insert_default_command(&["git", "commit"]),
            vec!["view", "git", "commit"]
        );
    }

    #[test]
    fn test_known_subcommands_untouched() {
        assert_eq!(
            insert_default_command(&["cache", "init"]),
            vec!["cache", "init"]
        );
        assert_eq!(insert_default_command(&["view", "tar"]), vec!["view", "tar"]);
        assert_eq!(insert_default_command(&["help"]), vec!["help"]);
        assert!(insert_default_command(&[]).is_empty());
    }

    #[test]
    fn test_default_command_skips_options() {
        assert_eq!(
            insert_default_command(&["--platform", "osx", "top"]),
            vec!["--platform", "osx", "view", "top"]
        );
        assert_eq!(
            insert_default_command(&["--color=never", "tar"]),
            vec!["--color=never", "view", "tar"]
        );
        assert_eq!(insert_default_command(&["--help"]), vec!["--help"]);
    }

    #[test]
    fn test_parse_view_words() {
        let cli = Cli::try_parse_from(["tldr", "view", "git", "commit"]).unwrap();
        match cli.command {
            Command::View { words } => assert_eq!(words, vec!["git", "commit"]),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.color, Color::Always);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_parse_cache_actions() {
        for (word, action) in [
            ("init", CacheAction::Init),
            ("update", CacheAction::Update),
            ("delete", CacheAction::Delete),
        ] {
            let cli = Cli::try_parse_from(["tldr", "cache", word]).unwrap();
            match cli.command {
                Command::Cache { action: parsed } => assert_eq!(parsed, action),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn test_parse_global_options_after_words() {
        let cli = Cli::try_parse_from(["tldr", "view", "top", "--platform", "osx"]).unwrap();
        assert_eq!(cli.platform, Some(Platform::Osx));
    }

    #[test]
    fn test_parse_rejects_bad_platform() {
        let err = Cli::try_parse_from(["tldr", "view", "top", "--platform", "beos"]).unwrap_err();
        assert!(err.to_string().contains("Invalid platform: beos"));
    }
}
