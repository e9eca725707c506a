//! Compression strategies for archiving files
//!
//! This module implements strategies for handling different compression methods.

mod strategy;
mod zip;
mod rar;
mod factory;
pub mod methods;

pub use strategy::CompressionStrategy;
pub use zip::ZipCompression;
pub use rar::RarCompression;
pub use factory::CompressionFactory;
pub use methods::MethodDefinition;
