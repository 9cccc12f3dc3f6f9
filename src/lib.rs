//! cmdtree: command-tree argument parsing and dispatch.
//!
//! A host program declares a tree of named subcommands, each with its own
//! flags and options, and [`Cli::run`] parses the process arguments into an
//! invocation of the matching command's handler. Options declared on an
//! ancestor stay visible (and overridable) in every descendant scope, usage
//! text is generated per node, and [`print_table`] renders aligned tabular
//! output for handlers.
//!
//! ```
//! use cmdtree::{Cli, Command, Opt};
//!
//! let mut cli = Cli::with_handler(|_cmd, _opts| println!("no sub command"));
//! cli.set_version("1.0.0");
//!
//! let mut list = Command::new("list");
//! list.usage = "List the configuration.".to_string();
//! list.add_option("local", Opt::flag("l", "Only list local entries."));
//! list.set_handler(|_cmd, opts| {
//!     let local = opts["local"].borrow().present;
//!     println!("list (local: {})", local);
//! });
//! cli.command.add_command(list);
//!
//! cli.run_from(&["list".to_string(), "--local".to_string()]);
//! ```

pub mod cli;
pub mod command;
pub mod errors;
pub mod opt;
pub mod table;
pub mod usage;
pub mod util;

pub use cli::{Cli, RunOutcome};
pub use command::{Command, Handler};
pub use errors::{ParseError, ParseResult};
pub use opt::{Opt, OptMap, SharedOpt};
pub use table::{format_table, print_table};
