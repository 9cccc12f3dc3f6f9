//! Command tree nodes and the argument resolver.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, instrument};

use crate::cli::{OPT_CONFIG_ALIAS, OPT_CONFIG_DESC, OPT_CONFIG_NAME};
use crate::errors::{ParseError, ParseResult};
use crate::opt::{Opt, OptMap, SharedOpt};

/// Handler invoked for the resolved command node.
///
/// Receives the node itself plus the accumulated option set: every ancestor
/// option merged down the descent path, with the node's own declarations
/// taking precedence on name collisions.
pub type Handler = Box<dyn Fn(&Command, &OptMap)>;

/// A node in the command tree.
///
/// Commands form a tree rooted at [`crate::cli::Cli`]'s root command.
/// Children are looked up by exact name, first match in declaration order;
/// sibling name uniqueness is the builder's responsibility and is not
/// enforced here.
pub struct Command {
    /// Node name. Empty only for the root.
    pub name: String,
    /// One-line description for hosts to surface; not rendered by
    /// [`Command::usage_string`].
    pub usage: String,
    /// Invoked when resolution ends at this node. Without one, resolution
    /// renders this node's usage instead.
    pub handler: Option<Handler>,
    /// The node's own declared options.
    pub options: OptMap,
    /// Child commands, in declaration order.
    pub children: Vec<Command>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            handler: None,
            options: OptMap::new(),
            children: Vec::new(),
        }
    }

    pub fn set_handler(&mut self, handler: impl Fn(&Command, &OptMap) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Declares an option under `name`. A same-named earlier declaration is
    /// replaced.
    pub fn add_option(&mut self, name: impl Into<String>, opt: Opt) {
        self.options.insert(name.into(), opt.shared());
    }

    /// Appends a child command. Declaration order is preserved for lookup
    /// and usage display.
    pub fn add_command(&mut self, child: Command) {
        self.children.push(child);
    }

    /// Shared handle to an option declared on this node.
    pub fn option(&self, name: &str) -> Option<SharedOpt> {
        self.options.get(name).map(Rc::clone)
    }

    /// Installs the reserved `--config`/`-c` placeholder option on this
    /// node. Wiring it to actual file loading is the host's business.
    pub fn set_default_config_option(&mut self) {
        self.add_option(OPT_CONFIG_NAME, Opt::new(OPT_CONFIG_ALIAS, OPT_CONFIG_DESC));
    }

    /// Resolves `args` against this node, returning the command the walk
    /// ends at.
    ///
    /// Scans tokens left to right. Dash-prefixed tokens are matched against
    /// this node's own options (`--name` against names, `-a` against
    /// aliases) and may consume a following value token. The first bare
    /// token names a child command: the child's options are merged into
    /// `opts` (child entries overwrite inherited ones) and the walk descends
    /// into the child with the remaining tokens, never returning to this
    /// node's scan. Option value mutations go through the shared records, so
    /// they stay visible in every map holding them.
    #[instrument(level = "debug", skip(self, opts), fields(command = %self.name))]
    pub fn resolve<'a>(&'a self, opts: &mut OptMap, args: &[String]) -> ParseResult<&'a Command> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            if arg.starts_with('-') {
                let found = self.find_option(arg).ok_or_else(|| ParseError::UnknownOption {
                    token: arg.clone(),
                    usage: self.usage_string(),
                })?;
                let mut opt = found.borrow_mut();
                opt.present = true;

                if !opt.is_flag {
                    if arg.matches('=').count() == 1 {
                        if let Some((_, value)) = arg.split_once('=') {
                            opt.value = value.to_string();
                        }
                    } else if i + 1 < args.len() {
                        // The next token fills the value slot. A
                        // dash-prefixed token still consumes the slot but
                        // leaves the value unset.
                        if !args[i + 1].starts_with('-') {
                            opt.value = args[i + 1].clone();
                        }
                        i += 1;
                    }
                }
                debug!(token = %arg, value = %opt.value, "matched option");
            } else {
                let child = self
                    .children
                    .iter()
                    .find(|c| c.name == *arg)
                    .ok_or_else(|| ParseError::UnknownSubcommand {
                        token: arg.clone(),
                        usage: self.usage_string(),
                    })?;

                debug!(child = %child.name, "descending into sub command");
                for (name, opt) in &child.options {
                    opts.insert(name.clone(), Rc::clone(opt));
                }
                return child.resolve(opts, &args[i + 1..]);
            }

            i += 1;
        }

        Ok(self)
    }

    /// Matches a dash-prefixed token against this node's own options.
    ///
    /// `--name[=..]` is looked up by name, `-alias[=..]` by alias (first
    /// match in map order wins). A bare `--` or `-` matches nothing.
    fn find_option(&self, arg: &str) -> Option<&SharedOpt> {
        if let Some(rest) = arg.strip_prefix("--") {
            let name = rest.split('=').next().unwrap_or_default();
            if name.is_empty() {
                return None;
            }
            self.options.get(name)
        } else if let Some(rest) = arg.strip_prefix('-') {
            let alias = rest.split('=').next().unwrap_or_default();
            if alias.is_empty() {
                return None;
            }
            self.options.values().find(|o| o.borrow().alias == alias)
        } else {
            None
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("handler", &self.handler.is_some())
            .field("options", &self.options)
            .field("children", &self.children)
            .finish()
    }
}
