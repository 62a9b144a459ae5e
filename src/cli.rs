use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Config;

/// walkdel - Walk a directory tree and list or delete matching files
#[derive(Parser, Debug)]
#[command(name = "walkdel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to walk
    #[arg(long, default_value = ".", value_name = "PATH")]
    pub root: PathBuf,

    /// Only match files with this extension, leading dot included (e.g. .log)
    #[arg(long, default_value = "", hide_default_value = true, value_name = "EXT")]
    pub ext: String,

    /// List matching files (the default unless -del is given)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        value_name = "BOOL"
    )]
    pub list: bool,

    /// Skip files smaller than this many bytes
    #[arg(long, default_value_t = 0, value_name = "BYTES")]
    pub size: u64,

    /// Delete matching files instead of listing them
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        value_name = "BOOL"
    )]
    pub del: bool,

    /// Append deletion records to this file instead of stdout
    #[arg(long, default_value = "", hide_default_value = true, value_name = "PATH")]
    pub log: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Resolve the parsed flags into a run configuration.
    pub fn to_config(&self) -> Config {
        let config = Config::new(&self.root)
            .with_extension(&self.ext)
            .with_min_size(self.size)
            .with_list(self.list)
            .with_delete(self.del);

        if self.log.is_empty() {
            config
        } else {
            config.with_log_file(&self.log)
        }
    }
}

/// Rewrite single-dash long flags (`-root x`, `-ext=.go`) into the
/// double-dash form clap parses.
///
/// Only names the command declares are rewritten, so short flags such as
/// `-v` or `-vv` and flag values are left alone. Nothing after `--` is touched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let command = Cli::command();
    let mut longs: Vec<&str> = command.get_arguments().filter_map(|a| a.get_long()).collect();
    longs.extend(["help", "version"]);

    let mut normalized = Vec::new();
    let mut passthrough = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();

        if index > 0 && !passthrough {
            if let Some(text) = arg.to_str() {
                if text == "--" {
                    passthrough = true;
                } else if let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) {
                    let name = rest.split('=').next().unwrap_or(rest);
                    if name.len() > 1 && longs.contains(&name) {
                        normalized.push(OsString::from(format!("-{}", text)));
                        continue;
                    }
                }
            }
        }

        normalized.push(arg);
    }

    normalized
}
