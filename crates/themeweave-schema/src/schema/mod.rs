//! Schema trees.
//!
//! A [`Schema`] is an immutable tree of [`Token`] leaves and named groups.
//! It is built once from a [`Definition`] (or a dynamic document via
//! [`Schema::from_value`]) and then shared read-only; cloning is cheap.

mod definition;


use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::token::Token;

pub use definition::{Definition, SchemaBuilder};

/// Separator between segments of a token path.
pub const PATH_SEPARATOR: char = '.';

/// Fields of a group, in declaration order.
pub type Group = IndexMap<String, SchemaNode>;

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Token(Token),
    Group(Group),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    root: Arc<Group>,
}

impl Schema {
    pub(crate) fn from_root(root: Group) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Build a schema from top-level entries with no shared fragments.
    pub fn new<I, K>(entries: I) -> Result<Self, themeweave_common::SchemaError>
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        entries
            .into_iter()
            .fold(SchemaBuilder::new(), |builder, (key, def)| builder.entry(key, def))
            .build()
    }

    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Dot paths of every token, depth-first in declaration order.
    pub fn token_paths(&self) -> Vec<String> {
        self.tokens().into_iter().map(|(path, _)| path).collect()
    }

    /// Every token paired with its dot path, depth-first.
    pub fn tokens(&self) -> Vec<(String, &Token)> {
        let mut out = Vec::new();
        collect_tokens(&self.root, "", &mut out);
        out
    }

    /// The token at `path`, or `None` if the path is missing or names a group.
    pub fn token_at(&self, path: &str) -> Option<&Token> {
        match self.node_at(path)? {
            SchemaNode::Token(token) => Some(token),
            SchemaNode::Group(_) => None,
        }
    }

    pub fn node_at(&self, path: &str) -> Option<&SchemaNode> {
        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = match node {
                SchemaNode::Group(group) => group.get(segment)?,
                SchemaNode::Token(_) => return None,
            };
        }
        Some(node)
    }

    /// Number of tokens in the tree.
    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    /// True when the tree holds no tokens, even if it has empty groups.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared defaults shaped like the schema.
    ///
    /// Groups with no defaults anywhere beneath them are omitted.
    pub fn defaults(&self) -> Value {
        Value::Object(collect_defaults(&self.root))
    }
}

pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}{PATH_SEPARATOR}{key}")
    }
}

fn collect_tokens<'a>(group: &'a Group, prefix: &str, out: &mut Vec<(String, &'a Token)>) {
    for (key, node) in group {
        let path = join_path(prefix, key);
        match node {
            SchemaNode::Token(token) => out.push((path, token)),
            SchemaNode::Group(children) => collect_tokens(children, &path, out),
        }
    }
}

fn collect_defaults(group: &Group) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, node) in group {
        match node {
            SchemaNode::Token(token) => {
                if let Some(default) = token.default_value() {
                    out.insert(key.clone(), default.clone());
                }
            }
            SchemaNode::Group(children) => {
                let nested = collect_defaults(children);
                if !nested.is_empty() {
                    out.insert(key.clone(), Value::Object(nested));
                }
            }
        }
    }
    out
}
