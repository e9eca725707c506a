//! Compression method definitions
//!
//! The known methods and their aliases live in `compression_methods.toml`,
//! which is embedded at build time and parsed once on first use.

use std::collections::HashMap;
use lazy_static::lazy_static;
use crate::errors::{ArchiveError, ArchiveResult};

lazy_static! {
    static ref METHOD_DEFINITIONS: MethodDefinitions = {
        let content = include_str!("../../compression_methods.toml");
        MethodDefinitions::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse compression method definitions: {}", e);
                MethodDefinitions::default()
            })
    };
}

/// A single compression method entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    /// Canonical lookup key (the TOML table name)
    pub key: String,
    /// Lowercase names that resolve to this method
    pub aliases: Vec<String>,
}

/// Table of compression methods keyed by canonical name
#[derive(Debug, Default)]
pub struct MethodDefinitions {
    methods: Vec<MethodDefinition>,
    // Maps every lowercase alias to an index into `methods`
    alias_index: HashMap<String, usize>,
}

impl MethodDefinitions {
    /// Parse method definitions from a TOML string
    pub fn from_str(content: &str) -> ArchiveResult<Self> {
        let toml_value: toml::Value = content.parse()?;

        let table = toml_value.get("methods")
            .and_then(|v| v.as_table())
            .ok_or_else(|| ArchiveError::ConfigError("Missing [methods] table".to_string()))?;

        let mut defs = MethodDefinitions::default();

        for (key, entry) in table {
            let mut aliases = vec![key.to_lowercase()];
            if let Some(list) = entry.get("aliases").and_then(|v| v.as_array()) {
                for alias in list.iter().filter_map(|v| v.as_str()) {
                    let alias = alias.to_lowercase();
                    if !aliases.contains(&alias) {
                        aliases.push(alias);
                    }
                }
            }

            let index = defs.methods.len();
            for alias in &aliases {
                if let Some(existing) = defs.alias_index.insert(alias.clone(), index) {
                    return Err(ArchiveError::ConfigError(format!(
                        "Alias '{}' is declared by both '{}' and '{}'",
                        alias, defs.methods[existing].key, key
                    )));
                }
            }

            defs.methods.push(MethodDefinition {
                key: key.clone(),
                aliases,
            });
        }

        Ok(defs)
    }

    /// Resolve a name or alias (case-insensitive) to its definition
    pub fn resolve(&self, name: &str) -> Option<&MethodDefinition> {
        let name = name.trim().to_lowercase();
        self.alias_index.get(&name).map(|&i| &self.methods[i])
    }

    /// All definitions, in table order
    pub fn all(&self) -> &[MethodDefinition] {
        &self.methods
    }
}

/// Look up a method by name or alias in the embedded table
pub fn resolve_method(name: &str) -> Option<&'static MethodDefinition> {
    METHOD_DEFINITIONS.resolve(name)
}

/// All methods in the embedded table
pub fn all_methods() -> &'static [MethodDefinition] {
    METHOD_DEFINITIONS.all()
}
