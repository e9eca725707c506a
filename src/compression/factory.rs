//! Factory for creating compression strategies

use log::debug;
use crate::errors::{ArchiveError, ArchiveResult};
use super::methods::{all_methods, resolve_method, MethodDefinition};
use super::strategy::CompressionStrategy;
use super::zip::ZipCompression;
use super::rar::RarCompression;

/// Factory for creating compression strategies
pub struct CompressionFactory;

impl CompressionFactory {
    /// Get a strategy by name or alias (case-insensitive)
    pub fn get_strategy_by_name(name: &str) -> ArchiveResult<Box<dyn CompressionStrategy>> {
        let definition = resolve_method(name)
            .ok_or_else(|| ArchiveError::UnknownCompression(name.to_string()))?;

        debug!("Resolved compression name '{}' to '{}'", name, definition.key);
        Self::create_builtin(&definition.key)
            .ok_or_else(|| ArchiveError::UnknownCompression(name.to_string()))
    }

    /// Get all available compression strategies
    pub fn get_available_strategies() -> Vec<Box<dyn CompressionStrategy>> {
        Self::get_available_methods()
            .into_iter()
            .map(|(_, strategy)| strategy)
            .collect()
    }

    /// Get every method table entry that has a built-in strategy, paired with it
    ///
    /// Entries without a strategy are skipped, so anything listed here can
    /// also be selected by name.
    pub fn get_available_methods() -> Vec<(&'static MethodDefinition, Box<dyn CompressionStrategy>)> {
        all_methods()
            .iter()
            .filter_map(|def| Self::create_builtin(&def.key).map(|strategy| (def, strategy)))
            .collect()
    }

    fn create_builtin(key: &str) -> Option<Box<dyn CompressionStrategy>> {
        match key {
            "zip" => Some(Box::new(ZipCompression)),
            "rar" => Some(Box::new(RarCompression)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_name_and_alias() {
        assert_eq!(CompressionFactory::get_strategy_by_name("zip").unwrap().name(), "ZIP");
        assert_eq!(CompressionFactory::get_strategy_by_name("PKZIP").unwrap().name(), "ZIP");
        assert_eq!(CompressionFactory::get_strategy_by_name("rar").unwrap().name(), "RAR");
    }

    #[test]
    fn test_unknown_name() {
        match CompressionFactory::get_strategy_by_name("lzma") {
            Err(ArchiveError::UnknownCompression(name)) => assert_eq!(name, "lzma"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(s) => panic!("unexpected strategy: {}", s.name()),
        }
    }

    #[test]
    fn test_every_table_entry_has_a_strategy() {
        assert_eq!(CompressionFactory::get_available_methods().len(), all_methods().len());
        for def in all_methods() {
            for alias in &def.aliases {
                assert!(CompressionFactory::get_strategy_by_name(alias).is_ok(), "alias {}", alias);
            }
        }
    }

    #[test]
    fn test_available_strategies() {
        let mut names: Vec<&str> = CompressionFactory::get_available_strategies()
            .iter()
            .map(|s| s.name())
            .collect();
        names.sort();
        assert_eq!(names, vec!["RAR", "ZIP"]);
    }
}
