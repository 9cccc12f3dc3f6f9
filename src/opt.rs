//! Option records: named flags and value-taking options.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared handle to an option record.
///
/// Options are shared mutable cells: the same record is reachable through
/// its owning command's map and through every inherited map built during
/// resolution, so a value set while walking the tree is visible to the
/// handler and to ancestors alike.
pub type SharedOpt = Rc<RefCell<Opt>>;

/// Option name -> shared record. BTreeMap keeps iteration deterministic
/// (lexicographic by name), which the usage renderer relies on.
pub type OptMap = BTreeMap<String, SharedOpt>;

/// A single command-line option.
///
/// The name is the key in the owning command's [`OptMap`]; names are unique
/// per command, aliases are not (first match in map order wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opt {
    /// Single-character alias, matched against `-x` tokens. May be empty.
    pub alias: String,
    /// Current value. Mutated in place during resolution.
    pub value: String,
    /// Shown in the usage Options section.
    pub description: String,
    /// True for presence flags that never consume a value token.
    pub is_flag: bool,
    /// Set when a token matched this option during resolution, so handlers
    /// can tell a passed flag from a declared-but-absent one.
    pub present: bool,
}

impl Opt {
    /// A value-taking option (`--name value`, `--name=value`).
    pub fn new(alias: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// A presence flag: matched tokens never consume a following value.
    pub fn flag(alias: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            is_flag: true,
            ..Self::new(alias, description)
        }
    }

    /// Sets the default value the option carries before any token overrides it.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Wraps the record in its shared handle.
    pub fn shared(self) -> SharedOpt {
        Rc::new(RefCell::new(self))
    }
}
