//! The parsed command chain.
//!
//! A [`ParsedCommand`] is one node of a strictly linear chain: each node owns
//! at most one nested sub-command. Nodes are built by the parser and are
//! read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// One level of a parsed command line.
///
/// Flags and arguments belong to the node that was current when they were
/// read, which is the nearest preceding bare word (or the anonymous root when
/// they precede every bare word).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    name: String,
    #[serde(serialize_with = "serialize_flags")]
    flags: BTreeSet<u8>,
    args: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_command: Option<Box<Self>>,
}

impl ParsedCommand {
    /// Creates a node named after a bare word.
    pub(crate) fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        name.clone_into(&mut self.name);
    }

    pub(crate) fn insert_flag(&mut self, flag: u8) {
        self.flags.insert(flag);
    }

    /// Stores `values` under `key`, replacing any earlier list for that key.
    pub(crate) fn insert_arg(&mut self, key: &str, values: Vec<String>) {
        self.args.insert(key.to_owned(), values);
    }

    pub(crate) fn attach(&mut self, child: Self) {
        self.sub_command = Some(Box::new(child));
    }

    /// Returns the command name, empty when the line held no bare word.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the flags attached to this node.
    #[must_use]
    pub const fn flags(&self) -> &BTreeSet<u8> {
        &self.flags
    }

    /// Reports whether `flag` was given on this node.
    #[must_use]
    pub fn has_flag(&self, flag: u8) -> bool {
        self.flags.contains(&flag)
    }

    /// Returns every argument attached to this node.
    #[must_use]
    pub const fn args(&self) -> &BTreeMap<String, Vec<String>> {
        &self.args
    }

    /// Returns the values given for `key` on this node.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&[String]> {
        self.args.get(key).map(Vec::as_slice)
    }

    /// Returns the chained sub-command, if any.
    #[must_use]
    pub fn sub_command(&self) -> Option<&Self> {
        self.sub_command.as_deref()
    }

    /// Iterates over this node followed by each nested sub-command.
    #[must_use]
    pub const fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of nodes in the chain starting at this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Names along the chain, root first.
    #[must_use]
    pub fn path(&self) -> Vec<&str> {
        self.chain().map(Self::name).collect()
    }

    /// Returns the last node of the chain.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        self.chain().last().unwrap_or(self)
    }

    /// Reports whether the node carries no name, flags, arguments, or
    /// sub-command.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.flags.is_empty()
            && self.args.is_empty()
            && self.sub_command.is_none()
    }

    fn write_tokens(&self, out: &mut Vec<String>) {
        if !self.name.is_empty() {
            out.push(self.name.clone());
        }
        if !self.flags.is_empty() {
            let bundled: String = self.flags.iter().copied().map(char::from).collect();
            out.push(format!("-{bundled}"));
        }
        for (key, values) in &self.args {
            out.push(format!("{key}={}", values.join(",")));
        }
    }
}

/// Renders the chain in canonical form: flags bundled and sorted, arguments
/// sorted by key, sub-commands in order. Parsing the rendering yields an
/// equal chain.
impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();
        for node in self.chain() {
            node.write_tokens(&mut tokens);
        }
        f.write_str(&tokens.join(" "))
    }
}

/// Iterator over a command chain, root first.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ParsedCommand>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ParsedCommand;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.sub_command();
        Some(current)
    }
}

fn serialize_flags<S>(flags: &BTreeSet<u8>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(flags.len()))?;
    for flag in flags {
        seq.serialize_element(&char::from(*flag))?;
    }
    seq.end()
}
