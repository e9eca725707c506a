//! Tests for the conditional-dispatch storage

extern crate std;

use crate::compression::{RarCompression, ZipCompression};
use crate::errors::ArchiveError;
use crate::storage::{CompressionMethod, FileStorage, PlainFileStorage};

use super::test_utils::sample_files;

#[test]
fn test_plain_zip_then_rar() {
    let mut storage = PlainFileStorage::new(CompressionMethod::Zip);
    for file in sample_files() {
        storage.add_file(file).unwrap();
    }
    std::assert_eq!(storage.archive().to_string(), "Compressing 2 files using ZIP.");

    storage.set_compression_method(CompressionMethod::Rar);
    std::assert_eq!(storage.method(), CompressionMethod::Rar);
    std::assert_eq!(storage.archive().to_string(), "Compressing 2 files using RAR.");
    std::assert_eq!(storage.file_count(), 2);
}

#[test]
fn test_plain_matches_strategy_storage() {
    let mut plain = PlainFileStorage::new(CompressionMethod::Zip);
    let mut strategy = FileStorage::new(Box::new(ZipCompression));
    for file in sample_files() {
        plain.add_file(file).unwrap();
        strategy.add_file(file).unwrap();
    }
    std::assert_eq!(plain.archive(), strategy.archive());
}

#[test]
fn test_plain_uses_strategy_names() {
    let mut plain = PlainFileStorage::new(CompressionMethod::Rar);
    let mut strategy = FileStorage::new(Box::new(RarCompression));
    plain.add_file("a.txt").unwrap();
    strategy.add_file("a.txt").unwrap();
    std::assert_eq!(plain.archive(), strategy.archive());

    plain.set_compression_method(CompressionMethod::Zip);
    strategy.set_compression_strategy(Box::new(ZipCompression));
    std::assert_eq!(plain.archive(), strategy.archive());
}

#[test]
fn test_parse_method() {
    std::assert_eq!("zip".parse::<CompressionMethod>().unwrap(), CompressionMethod::Zip);
    std::assert_eq!("DEFLATE".parse::<CompressionMethod>().unwrap(), CompressionMethod::Zip);
    std::assert_eq!("rar".parse::<CompressionMethod>().unwrap(), CompressionMethod::Rar);
    std::assert!(matches!(
        "gzip".parse::<CompressionMethod>(),
        Err(ArchiveError::UnknownCompression(_))
    ));
}

#[test]
fn test_method_display_round_trips() {
    for method in [CompressionMethod::Zip, CompressionMethod::Rar] {
        std::assert_eq!(method.to_string().parse::<CompressionMethod>().unwrap(), method);
    }
}
