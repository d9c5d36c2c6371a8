//! Integration tests for the index wrappers over realistic record shapes.

use arbor_common::{ArborError, IndexConfig, TreeConfig};
use arbor_index::{CompositeIndex, CompositeKey, Index};

/// A file-catalog style record: path, size in bytes, modification stamp.
#[derive(Debug, Clone, PartialEq)]
struct FileEntry {
    path: String,
    size: u64,
    mtime: i64,
}

fn entry(path: &str, size: u64, mtime: i64) -> FileEntry {
    FileEntry {
        path: path.to_string(),
        size,
        mtime,
    }
}

fn sample_entries() -> Vec<FileEntry> {
    vec![
        entry("/etc/hosts", 220, 1_700_000_000),
        entry("/var/log/syslog", 1_048_576, 1_700_000_500),
        entry("/home/ada/notes.txt", 4_096, 1_700_001_000),
        entry("/home/ada/thesis.pdf", 2_097_152, 1_700_002_000),
        entry("/usr/bin/cc", 819_200, 1_699_000_000),
    ]
}

// =============================================================================
// Single-attribute index
// =============================================================================

#[test]
fn path_index_roundtrip() {
    let mut index: Index<FileEntry, String> = Index::new(|e: &FileEntry| e.path.clone());
    for e in sample_entries() {
        index.insert(e).unwrap();
    }

    assert_eq!(index.len(), 5);
    let hit = index.find(&"/home/ada/notes.txt".to_string()).unwrap();
    assert_eq!(hit.size, 4_096);
    assert!(index.find(&"/home/ada/missing".to_string()).is_none());
}

#[test]
fn size_index_range_queries() {
    let mut index: Index<FileEntry, u64> = Index::new(|e: &FileEntry| e.size);
    for e in sample_entries() {
        index.insert(e).unwrap();
    }

    // Everything from 4 KiB to 1 MiB, ascending by size.
    let mid = index.range_search(&4_096, &1_048_576);
    let sizes: Vec<u64> = mid.iter().map(|e| e.size).collect();
    assert_eq!(sizes, vec![4_096, 819_200, 1_048_576]);
}

#[test]
fn predicate_scan_over_records() {
    let mut index: Index<FileEntry, String> = Index::new(|e: &FileEntry| e.path.clone());
    for e in sample_entries() {
        index.insert(e).unwrap();
    }

    let in_home = index.find_if(|e| e.path.starts_with("/home/"));
    assert_eq!(in_home.len(), 2);
    assert!(in_home.iter().all(|e| e.path.starts_with("/home/")));
}

#[test]
fn update_reindexes_under_new_key() {
    let mut index: Index<FileEntry, String> = Index::new(|e: &FileEntry| e.path.clone());
    let mut ids = Vec::new();
    for e in sample_entries() {
        ids.push(index.insert(e).unwrap());
    }

    // Rename: the entry must move to its new key.
    index
        .update(ids[2], entry("/home/ada/notes.md", 4_096, 1_700_003_000))
        .unwrap();
    assert!(index.find(&"/home/ada/notes.txt".to_string()).is_none());
    assert_eq!(
        index.find(&"/home/ada/notes.md".to_string()).unwrap().mtime,
        1_700_003_000
    );
    assert_eq!(index.len(), 5);
}

#[test]
fn removed_entries_stay_out_of_scans() {
    let mut index: Index<FileEntry, u64> = Index::new(|e: &FileEntry| e.size);
    for e in sample_entries() {
        index.insert(e).unwrap();
    }
    index.remove(&819_200);

    assert_eq!(index.len(), 4);
    assert!(index.range_search(&0, &u64::MAX).iter().all(|e| e.size != 819_200));
    assert!(index.find_if(|_| true).iter().all(|e| e.size != 819_200));
    // The row is still addressable by id, just unindexed.
    assert_eq!(index.record_count(), 5);
}

#[test]
fn with_config_reserves_capacity() {
    let config = IndexConfig {
        tree: TreeConfig {
            initial_node_capacity: 16,
        },
        initial_record_capacity: 16,
    };
    let mut index: Index<FileEntry, u64> = Index::with_config(&config, |e: &FileEntry| e.size);
    for e in sample_entries() {
        index.insert(e).unwrap();
    }
    assert_eq!(index.len(), 5);
}

// =============================================================================
// Composite index
// =============================================================================

#[test]
fn composite_index_orders_lexicographically() {
    // Key: (directory, size) -- all entries in one directory cluster
    // together, ordered by size within it.
    let mut index: CompositeIndex<FileEntry, (String, u64)> = CompositeIndex::new(|e: &FileEntry| {
        let dir = e.path.rsplit_once('/').map(|(d, _)| d).unwrap_or("");
        CompositeKey::new((dir.to_string(), e.size))
    });
    for e in sample_entries() {
        index.insert(e).unwrap();
    }

    let home = index.range_search(
        &CompositeKey::new(("/home/ada".to_string(), 0)),
        &CompositeKey::new(("/home/ada".to_string(), u64::MAX)),
    );
    let sizes: Vec<u64> = home.iter().map(|e| e.size).collect();
    assert_eq!(sizes, vec![4_096, 2_097_152]);
}

#[test]
fn composite_duplicate_needs_full_key_match() {
    let mut index: CompositeIndex<FileEntry, (u64, i64)> =
        CompositeIndex::new(|e: &FileEntry| CompositeKey::new((e.size, e.mtime)));
    index.insert(entry("/a", 100, 1)).unwrap();
    // Same size, different mtime: distinct composite key.
    index.insert(entry("/b", 100, 2)).unwrap();

    let err = index.insert(entry("/c", 100, 1)).unwrap_err();
    assert!(matches!(err, ArborError::DuplicateKey));
    assert_eq!(index.len(), 2);
}

#[test]
fn composite_find_by_each_component() {
    let mut index: CompositeIndex<FileEntry, (u64, i64)> =
        CompositeIndex::new(|e: &FileEntry| CompositeKey::new((e.size, e.mtime)));
    for e in sample_entries() {
        index.insert(e).unwrap();
    }

    let by_size = index.find_by_component::<0>(&4_096);
    assert_eq!(by_size.len(), 1);
    assert_eq!(by_size[0].path, "/home/ada/notes.txt");

    let by_mtime = index.find_by_component::<1>(&1_699_000_000);
    assert_eq!(by_mtime.len(), 1);
    assert_eq!(by_mtime[0].path, "/usr/bin/cc");
}

#[test]
fn composite_key_prefix_match_groups_components() {
    let a = CompositeKey::new(("/home/ada".to_string(), 4_096u64));
    let b = CompositeKey::new(("/home/ada".to_string(), 2_097_152u64));
    let c = CompositeKey::new(("/usr/bin".to_string(), 4_096u64));

    assert!(a.matches_prefix::<1>(&b));
    assert!(!a.matches_prefix::<2>(&b));
    assert!(!a.matches_prefix::<1>(&c));
}

#[test]
fn composite_update_moves_entry() {
    let mut index: CompositeIndex<FileEntry, (String, i64)> =
        CompositeIndex::new(|e: &FileEntry| CompositeKey::new((e.path.clone(), e.mtime)));
    let id = index.insert(entry("/tmp/a", 10, 100)).unwrap();

    index.update(id, entry("/tmp/a", 10, 200)).unwrap();
    assert!(index
        .find(&CompositeKey::new(("/tmp/a".to_string(), 100)))
        .is_none());
    assert_eq!(
        index
            .find(&CompositeKey::new(("/tmp/a".to_string(), 200)))
            .unwrap()
            .size,
        10
    );
}

// =============================================================================
// Multi-value semantics via composite keying
// =============================================================================

#[test]
fn tiebreaker_component_allows_equal_user_keys() {
    // The tree holds one value per key; records sharing a size are made
    // unique by appending the record id the store will assign.
    #[derive(Debug, Clone)]
    struct Sized {
        size: u64,
        seq: u64,
    }

    let mut index: CompositeIndex<Sized, (u64, u64)> =
        CompositeIndex::new(|r: &Sized| CompositeKey::new((r.size, r.seq)));
    for seq in 0..10 {
        index.insert(Sized { size: 4_096, seq }).unwrap();
    }
    assert_eq!(index.len(), 10);

    let all = index.range_search(
        &CompositeKey::new((4_096, 0)),
        &CompositeKey::new((4_096, u64::MAX)),
    );
    assert_eq!(all.len(), 10);
}
