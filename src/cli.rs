//! Top-level CLI wrapper: reserved options, help/version short-circuit,
//! and the program entry point.

use std::env;
use std::path::Path;

use tracing::debug;

use crate::command::Command;
use crate::opt::{Opt, OptMap};

pub const OPT_CONFIG_NAME: &str = "config";
pub const OPT_CONFIG_ALIAS: &str = "c";
pub const OPT_CONFIG_DESC: &str =
    "Specify the configuration file to use. Supported formats: JSON, YAML, TOML.";

pub const OPT_HELP_NAME: &str = "help";
pub const OPT_HELP_ALIAS: &str = "h";
pub const OPT_HELP_DESC: &str = "Display a list of available commands and global options.";

pub const OPT_VERSION_NAME: &str = "version";
pub const OPT_VERSION_ALIAS: &str = "v";
pub const OPT_VERSION_DESC: &str = "Show the version of the CLI tool.";
pub const OPT_VERSION_VALUE: &str = "1.0.0";

/// Which path a [`Cli::run_from`] call took.
///
/// Every path prints to stdout and returns normally; the outcome exists so
/// hosts and tests can observe the dispatch without capturing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A handler was invoked.
    Handled,
    /// Usage was rendered because the resolved node has no handler.
    Usage,
    /// `--help`/`-h` short-circuited to the root usage.
    Help,
    /// `--version`/`-v` printed the version line.
    Version,
    /// Resolution failed; the diagnostic and usage were printed.
    Failed,
}

/// Owns the root command and the version string shown by `--version`.
#[derive(Debug)]
pub struct Cli {
    /// Root of the command tree, named after the running executable.
    pub command: Command,
    /// Shown as `Version: <value>` by the version flag.
    pub version: String,
    exec_name: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// A CLI whose root command has no handler: running it without
    /// arguments renders the root usage.
    ///
    /// The root command is named after the running executable and carries
    /// the reserved `help` and `version` options.
    pub fn new() -> Self {
        let exec_name = exec_name();
        let mut root = Command::new(&exec_name);
        root.add_option(OPT_HELP_NAME, Opt::new(OPT_HELP_ALIAS, OPT_HELP_DESC));
        root.add_option(
            OPT_VERSION_NAME,
            Opt::new(OPT_VERSION_ALIAS, OPT_VERSION_DESC).with_default(OPT_VERSION_VALUE),
        );
        Self {
            command: root,
            version: String::new(),
            exec_name,
        }
    }

    /// A CLI with `handler` as the root command's default action.
    pub fn with_handler(handler: impl Fn(&Command, &OptMap) + 'static) -> Self {
        let mut cli = Self::new();
        cli.command.set_handler(handler);
        cli
    }

    /// Stores the version string printed by `--version`/`-v`.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = version.into();
    }

    /// Display name of the running executable.
    pub fn exec_name(&self) -> &str {
        &self.exec_name
    }

    /// Parses the process arguments (skipping the executable path) and
    /// dispatches. See [`Cli::run_from`].
    pub fn run(&self) {
        let args: Vec<String> = env::args().skip(1).collect();
        self.run_from(&args);
    }

    /// Dispatches `args` against the command tree.
    ///
    /// Zero arguments invoke the root handler (or render root usage). An
    /// exact `--help`/`-h` token anywhere renders root usage before any
    /// other parsing; failing that, an exact `--version`/`-v` token prints
    /// the version line. Otherwise the resolver walks the tree with a
    /// shallow copy of the root's option map: the map is fresh per run but
    /// the option records inside it are shared, so value mutations land in
    /// the originals.
    pub fn run_from(&self, args: &[String]) -> RunOutcome {
        if args.is_empty() {
            return match &self.command.handler {
                Some(handler) => {
                    handler(&self.command, &self.command.options);
                    RunOutcome::Handled
                }
                None => {
                    self.command.show_usage();
                    RunOutcome::Usage
                }
            };
        }

        if has_exact_flag(args, OPT_HELP_NAME, OPT_HELP_ALIAS) {
            self.command.show_usage();
            return RunOutcome::Help;
        }

        if has_exact_flag(args, OPT_VERSION_NAME, OPT_VERSION_ALIAS) {
            println!("Version: {}", self.version);
            return RunOutcome::Version;
        }

        let mut opts: OptMap = self.command.options.clone();
        match self.command.resolve(&mut opts, args) {
            Ok(resolved) => match &resolved.handler {
                Some(handler) => {
                    debug!(command = %resolved.name, "invoking handler");
                    handler(resolved, &opts);
                    RunOutcome::Handled
                }
                None => {
                    resolved.show_usage();
                    RunOutcome::Usage
                }
            },
            Err(err) => {
                println!("{}\n", err);
                println!("{}", err.usage());
                RunOutcome::Failed
            }
        }
    }
}

/// File name of the running executable, falling back to the crate name
/// when argv is empty (e.g. under some test harnesses).
fn exec_name() -> String {
    env::args()
        .next()
        .as_deref()
        .and_then(|path| Path::new(path).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// True if any token is exactly `--name` or `-alias`.
fn has_exact_flag(args: &[String], name: &str, alias: &str) -> bool {
    let long = format!("--{}", name);
    let short = format!("-{}", alias);
    args.iter().any(|arg| *arg == long || *arg == short)
}
