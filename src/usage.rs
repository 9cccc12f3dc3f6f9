//! Usage text rendering for command nodes.

use itertools::Itertools;

use crate::command::Command;

impl Command {
    /// Renders this node's usage text: a synopsis line, a blank line, and
    /// an aligned `Options:` section.
    ///
    /// The synopsis lists every declared option as `[--name|-a]`,
    /// `[--name]`, or `[-a]` (lexicographic by name), then the child
    /// commands as `[child1|child2]` in declaration order, skipping
    /// empty-named ones. Options lines pad the name to the widest declared
    /// name so descriptions line up.
    pub fn usage_string(&self) -> String {
        let mut out = format!("Usage: {}", self.name);

        for (name, opt) in &self.options {
            let opt = opt.borrow();
            if !name.is_empty() && !opt.alias.is_empty() {
                out.push_str(&format!(" [--{}|-{}]", name, opt.alias));
            } else if !name.is_empty() {
                out.push_str(&format!(" [--{}]", name));
            } else if !opt.alias.is_empty() {
                out.push_str(&format!(" [-{}]", opt.alias));
            }
        }

        if self.children.iter().any(|c| !c.name.is_empty()) {
            let names = self
                .children
                .iter()
                .filter(|c| !c.name.is_empty())
                .map(|c| c.name.as_str())
                .join("|");
            out.push_str(&format!(" [{}]", names));
        }

        out.push_str("\n\nOptions:\n");

        // Width of the longest "name:" label across this node's options.
        let width = self
            .options
            .keys()
            .map(|name| name.len() + 1)
            .max()
            .unwrap_or(0);
        for (name, opt) in &self.options {
            out.push_str(&format!(
                "  {:<width$} {}\n",
                format!("{}:", name),
                opt.borrow().description,
            ));
        }

        out
    }

    /// Prints the usage text to stdout.
    pub fn show_usage(&self) {
        println!("{}", self.usage_string());
    }
}
