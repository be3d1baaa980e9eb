use dirsim::compare::DirectoryComparer;
use dirsim::scanner::{Lister, ListerConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_subdirectories_are_not_compared() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    fs::write(a.path().join("top.bin"), "ABC").unwrap();
    fs::create_dir(a.path().join("nested")).unwrap();
    fs::write(a.path().join("nested").join("deep.bin"), "ABC").unwrap();
    fs::write(b.path().join("other.bin"), "ABC").unwrap();

    let comparison = DirectoryComparer::with_defaults()
        .compare(a.path(), b.path(), 50.0)
        .unwrap();

    assert_eq!(comparison.summary.files_a, 1);
    assert_eq!(comparison.classification.identical.len(), 1);
    assert_eq!(comparison.classification.identical[0].name_a(), "top.bin");
}

#[test]
fn test_empty_directories() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();

    let comparison = DirectoryComparer::with_defaults()
        .compare(a.path(), b.path(), 50.0)
        .unwrap();

    assert!(comparison.classification.is_empty());
    assert!(comparison.assignment.is_empty());
    assert_eq!(comparison.summary.pairs_compared, 0);
}

#[test]
fn test_one_side_empty() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    fs::write(a.path().join("z.bin"), "z").unwrap();
    fs::write(a.path().join("y.bin"), "y").unwrap();

    let comparison = DirectoryComparer::new(
        dirsim::compare::CompareConfig::default().with_sorted_listing(true),
    )
    .compare(a.path(), b.path(), 0.0)
    .unwrap();

    assert_eq!(
        comparison.assignment.only_a,
        vec!["y.bin".to_string(), "z.bin".to_string()]
    );
    assert!(comparison.assignment.only_b.is_empty());
}

#[test]
fn test_same_directory_on_both_sides() {
    let a = tempdir().unwrap();
    fs::write(a.path().join("one.bin"), "111").unwrap();
    fs::write(a.path().join("two.bin"), "222").unwrap();

    let comparison = DirectoryComparer::with_defaults()
        .compare(a.path(), a.path(), 50.0)
        .unwrap();

    // Each file is identical to itself, nothing else overlaps
    assert_eq!(comparison.classification.identical.len(), 2);
    assert!(comparison.classification.similar.is_empty());
    for pair in &comparison.classification.identical {
        assert_eq!(pair.name_a(), pair.name_b());
    }
}

#[test]
fn test_listing_order_is_used_for_unmatched() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();
    for name in ["c.bin", "a.bin", "b.bin"] {
        fs::write(a.path().join(name), name).unwrap();
    }

    let listed: Vec<String> = Lister::new(a.path(), ListerConfig::default())
        .list()
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();

    let comparison = DirectoryComparer::with_defaults()
        .compare(a.path(), b.path(), 0.0)
        .unwrap();

    assert_eq!(comparison.assignment.only_a, listed);
}
