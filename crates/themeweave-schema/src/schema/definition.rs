//! Schema definitions and construction.
//!
//! A [`Definition`] is the unchecked input to schema construction. Reuse is
//! expressed through named fragments: an [`Definition::Include`] node is
//! replaced by the fragment registered under that name. Expansion keeps the
//! chain of fragments currently being expanded; meeting one of them again is
//! a cycle.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use themeweave_common::{SchemaError, TokenKind};
use tracing::debug;

use super::{join_path, Group, Schema, SchemaNode, PATH_SEPARATOR};
use crate::token::Token;
use crate::values::validate_value;

const FRAGMENTS_KEY: &str = "$fragments";
const INCLUDE_KEY: &str = "$include";
const ROOT_PATH: &str = "(root)";

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Token(Token),
    Group(IndexMap<String, Definition>),
    Include(String),
}

impl Definition {
    pub fn group<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Definition)>,
        K: Into<String>,
    {
        Definition::Group(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn include(name: impl Into<String>) -> Self {
        Definition::Include(name.into())
    }
}

impl From<Token> for Definition {
    fn from(token: Token) -> Self {
        Definition::Token(token)
    }
}

/// Collects top-level entries and shared fragments, then builds a [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    entries: IndexMap<String, Definition>,
    fragments: HashMap<String, Definition>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, key: impl Into<String>, definition: impl Into<Definition>) -> Self {
        self.entries.insert(key.into(), definition.into());
        self
    }

    pub fn fragment(mut self, name: impl Into<String>, definition: impl Into<Definition>) -> Self {
        self.fragments.insert(name.into(), definition.into());
        self
    }

    /// Expand fragments, check keys and defaults, and freeze the tree.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut expanding = Vec::new();
        let root = expand_group(&self.entries, "", &self.fragments, &mut expanding)?;
        let schema = Schema::from_root(root);
        debug!(tokens = schema.len(), "schema built");
        Ok(schema)
    }
}

fn expand_group(
    entries: &IndexMap<String, Definition>,
    path: &str,
    fragments: &HashMap<String, Definition>,
    expanding: &mut Vec<String>,
) -> Result<Group, SchemaError> {
    let mut group = Group::with_capacity(entries.len());
    for (key, child) in entries {
        if key.is_empty() || key.contains(PATH_SEPARATOR) {
            return Err(SchemaError::InvalidKey {
                path: display_path(path),
                key: key.clone(),
            });
        }
        let child_path = join_path(path, key);
        let node = expand(child, &child_path, fragments, expanding)?;
        group.insert(key.clone(), node);
    }
    Ok(group)
}

fn expand(
    definition: &Definition,
    path: &str,
    fragments: &HashMap<String, Definition>,
    expanding: &mut Vec<String>,
) -> Result<SchemaNode, SchemaError> {
    match definition {
        Definition::Token(token) => checked_token(token, path).map(SchemaNode::Token),
        Definition::Group(entries) => {
            expand_group(entries, path, fragments, expanding).map(SchemaNode::Group)
        }
        Definition::Include(name) => {
            if expanding.iter().any(|active| active == name) {
                return Err(SchemaError::Cycle {
                    path: display_path(path),
                });
            }
            let fragment = fragments
                .get(name)
                .ok_or_else(|| SchemaError::UnknownFragment {
                    name: name.clone(),
                    path: display_path(path),
                })?;
            expanding.push(name.clone());
            let node = expand(fragment, path, fragments, expanding);
            expanding.pop();
            node
        }
    }
}

fn checked_token(token: &Token, path: &str) -> Result<Token, SchemaError> {
    match token.default_value() {
        None => Ok(token.clone()),
        Some(default) => validate_value(token.kind(), default)
            .map(|normalized| token.clone().replace_default(normalized))
            .map_err(|message| SchemaError::InvalidDefault {
                path: path.to_string(),
                message,
            }),
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path.to_string()
    }
}

impl Schema {
    /// Build a schema from a dynamic definition document.
    ///
    /// An object whose `kind` names a token kind is a token and may also carry
    /// `default` and `description`. An object whose only key is `$include`
    /// refers to a fragment declared under the top-level `$fragments` key.
    /// Every other object is a group; anything that is not an object is an
    /// error.
    pub fn from_value(document: &Value) -> Result<Schema, SchemaError> {
        let Value::Object(map) = document else {
            return Err(SchemaError::InvalidNode {
                path: ROOT_PATH.into(),
            });
        };

        let mut builder = SchemaBuilder::new();
        for (key, child) in map {
            if key == FRAGMENTS_KEY {
                let Value::Object(fragments) = child else {
                    return Err(SchemaError::InvalidNode {
                        path: FRAGMENTS_KEY.into(),
                    });
                };
                for (name, fragment) in fragments {
                    let path = join_path(FRAGMENTS_KEY, name);
                    builder = builder.fragment(name.clone(), parse_definition(fragment, &path)?);
                }
                continue;
            }
            builder = builder.entry(key.clone(), parse_definition(child, key)?);
        }
        builder.build()
    }
}

fn parse_definition(value: &Value, path: &str) -> Result<Definition, SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::InvalidNode { path: path.into() });
    };

    if let Some(kind) = map
        .get("kind")
        .and_then(Value::as_str)
        .and_then(TokenKind::from_name)
    {
        return parse_token(kind, map, path).map(Definition::Token);
    }

    if let Some(include) = map.get(INCLUDE_KEY) {
        return match (include.as_str(), map.len()) {
            (Some(name), 1) => Ok(Definition::include(name)),
            _ => Err(SchemaError::InvalidNode { path: path.into() }),
        };
    }

    let mut entries = IndexMap::with_capacity(map.len());
    for (key, child) in map {
        let child_path = join_path(path, key);
        entries.insert(key.clone(), parse_definition(child, &child_path)?);
    }
    Ok(Definition::Group(entries))
}

fn parse_token(kind: TokenKind, map: &Map<String, Value>, path: &str) -> Result<Token, SchemaError> {
    let mut token = Token::new(kind);
    for (field, value) in map {
        match (field.as_str(), value) {
            ("kind", _) => {}
            ("default", Value::Null) => {}
            ("default", default) => token = token.with_default(default.clone()),
            ("description", Value::String(text)) => token = token.with_description(text.clone()),
            _ => {
                return Err(SchemaError::InvalidTokenField {
                    path: path.into(),
                    field: field.clone(),
                })
            }
        }
    }
    Ok(token)
}
