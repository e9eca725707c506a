//! Tests for the file list

extern crate std;

use crate::errors::ArchiveError;
use crate::storage::FileList;

#[test]
fn test_count_follows_additions() {
    let mut list = FileList::new();
    std::assert!(list.is_empty());

    for n in 1..=25 {
        list.add(format!("file{}.txt", n)).unwrap();
        std::assert_eq!(list.len(), n);
    }
}

#[test]
fn test_insertion_order_and_duplicates() {
    let mut list = FileList::new();
    list.add("b.txt").unwrap();
    list.add("a.txt").unwrap();
    list.add("b.txt").unwrap();

    std::assert_eq!(list.files(), &["b.txt", "a.txt", "b.txt"]);
}

#[test]
fn test_empty_name_rejected() {
    let mut list = FileList::new();
    std::assert!(matches!(list.add(""), Err(ArchiveError::InvalidArgument(_))));
    std::assert!(matches!(list.add("   "), Err(ArchiveError::InvalidArgument(_))));
    std::assert_eq!(list.len(), 0);
}
