//! End-to-end scanner tests over corpora written to a temp directory.
//!
//! Each test lays out `<category>/<file>` documents on disk, initializes a
//! `Scanner` from them and checks ranked results through the public API.

use cvscan::{Algorithm, DocumentId, ScanConfig, ScanError, Scanner};
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &[u8]) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn config() -> ScanConfig {
    ScanConfig {
        worker_threads: Some(4),
        ..Default::default()
    }
}

/// Scanner initialized over the files in `docs`
fn scanner_over(docs: &[(&str, &[u8])]) -> (Scanner, TempDir) {
    let dir = TempDir::new().unwrap();
    for (rel, contents) in docs {
        write(dir.path(), rel, contents);
    }
    let scanner = Scanner::new(config()).unwrap();
    scanner.initialize(dir.path()).unwrap();
    (scanner, dir)
}

/// Scanner initialized over the shared demo CV corpus
fn demo_scanner() -> (Scanner, TempDir) {
    let dir = TempDir::new().unwrap();
    demo_data::write_corpus(dir.path()).unwrap();
    let scanner = Scanner::new(config()).unwrap();
    scanner.initialize(dir.path()).unwrap();
    (scanner, dir)
}

// ============================================================
// Basic ranking
// ============================================================

#[test]
fn ranks_documents_by_occurrence_count() {
    let (scanner, _dir) = scanner_over(&[
        ("IT/doc1.txt", b"java developer"),
        ("IT/doc2.txt", b"java java java"),
        ("IT/doc3.txt", b"python"),
    ]);

    for algorithm in Algorithm::ALL {
        let report = scanner.search_exact(&["java"], algorithm, 5).unwrap();
        assert_eq!(
            report.pairs(),
            vec![("IT/doc2.txt", 3), ("IT/doc1.txt", 1)],
            "{algorithm} ranking"
        );
        assert_eq!(report.documents_scanned, 3);
    }
}

#[test]
fn three_document_java_scenario() {
    let (scanner, _dir) = scanner_over(&[
        ("IT/doc1.txt", b"software engineer with java skills"),
        ("IT/doc2.txt", b"java developer java java"),
        ("IT/doc3.txt", b"no relevant terms here"),
    ]);

    let report = scanner.search_exact(&["java"], Algorithm::Kmp, 5).unwrap();
    assert_eq!(report.pairs(), vec![("IT/doc2.txt", 3), ("IT/doc1.txt", 1)]);
    assert_eq!(report.documents_scanned, 3);
}

#[test]
fn unreadable_document_is_absent_but_others_are_searched() {
    let (scanner, _dir) = scanner_over(&[
        ("IT/good.txt", b"python python"),
        ("IT/broken.pdf", &[0xff, 0xfe, 0x00, 0xc3]),
        ("HR/other.txt", b"python"),
    ]);

    assert_eq!(scanner.document_ids().len(), 2);
    let report = scanner.search_exact(&["python"], Algorithm::BoyerMoore, 10).unwrap();
    assert_eq!(report.pairs(), vec![("IT/good.txt", 2), ("HR/other.txt", 1)]);
}

#[test]
fn keyword_longer_than_every_document_matches_nothing() {
    let (scanner, _dir) = scanner_over(&[("IT/a.txt", b"go"), ("IT/b.txt", b"rust")]);
    for algorithm in Algorithm::ALL {
        let report = scanner
            .search_exact(&["a keyword longer than any document"], algorithm, 5)
            .unwrap();
        assert!(report.matches.is_empty());
    }
}

#[test]
fn search_requires_initialized_corpus() {
    let scanner = Scanner::new(config()).unwrap();
    assert!(matches!(
        scanner.search_exact(&["java"], Algorithm::AhoCorasick, 5),
        Err(ScanError::NotInitialized)
    ));

    // A corpus root with no documents leaves the cache unsearchable
    let empty = TempDir::new().unwrap();
    std::fs::create_dir(empty.path().join("IT")).unwrap();
    let stats = scanner.initialize(empty.path()).unwrap();
    assert_eq!(stats.loaded, 0);
    assert!(matches!(
        scanner.search_exact(&["java"], Algorithm::Kmp, 5),
        Err(ScanError::NotInitialized)
    ));
}

#[test]
fn reinitialize_replaces_corpus() {
    let (scanner, _first) = scanner_over(&[("IT/old.txt", b"java")]);
    let second = TempDir::new().unwrap();
    write(second.path(), "HR/new.txt", b"java java");

    scanner.initialize(second.path()).unwrap();
    let report = scanner.search_exact(&["java"], Algorithm::Kmp, 5).unwrap();
    assert_eq!(report.pairs(), vec![("HR/new.txt", 2)]);
}

#[test]
fn failed_reinitialize_keeps_previous_corpus() {
    let (scanner, _dir) = scanner_over(&[("IT/kept.txt", b"java")]);
    assert!(scanner.initialize(Path::new("/nonexistent/corpus/root")).is_err());
    let report = scanner.search_exact(&["java"], Algorithm::Kmp, 5).unwrap();
    assert_eq!(report.pairs(), vec![("IT/kept.txt", 1)]);
}

// ============================================================
// Demo corpus
// ============================================================

#[test]
fn demo_corpus_loads_every_cv() {
    let dir = TempDir::new().unwrap();
    let written = demo_data::write_corpus(dir.path()).unwrap();
    let scanner = Scanner::new(config()).unwrap();
    let stats = scanner.initialize(dir.path()).unwrap();
    assert_eq!(stats.loaded, written);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.categories, 4);
}

#[test]
fn demo_single_keyword_counts_substrings() {
    let (scanner, _dir) = demo_scanner();
    // "JavaScript" contains "Java"
    let report = scanner.search_exact(&["Java"], Algorithm::Kmp, 10).unwrap();
    assert_eq!(
        report.pairs(),
        vec![
            ("ENGINEERING/10001.txt", 4),
            ("ENGINEERING/10002.txt", 2),
            ("DATA/20002.txt", 1),
            ("HR/40001.txt", 1),
        ]
    );
}

#[test]
fn demo_all_algorithms_agree() {
    let (scanner, _dir) = demo_scanner();
    let keyword_sets: &[&[&str]] = &[
        &["Java"],
        &["Java", "Python"],
        &["SQL", "Spark", "Engineer"],
        &["e", "en", "ng"],
        &["nothing like this"],
    ];

    for &keywords in keyword_sets {
        let kmp = scanner.search_exact(keywords, Algorithm::Kmp, 10).unwrap();
        for algorithm in [Algorithm::BoyerMoore, Algorithm::AhoCorasick] {
            let other = scanner.search_exact(keywords, algorithm, 10).unwrap();
            assert_eq!(kmp.matches, other.matches, "{algorithm} disagrees with KMP on {keywords:?}");
        }
    }
}

#[test]
fn demo_multi_keyword_ties_break_by_document_id() {
    let (scanner, _dir) = demo_scanner();
    let report = scanner.search_exact(&["Java", "Python"], Algorithm::AhoCorasick, 10).unwrap();
    assert_eq!(
        report.pairs(),
        vec![
            ("ENGINEERING/10001.txt", 4),
            ("ENGINEERING/10002.txt", 4),
            ("DATA/20001.txt", 3),
            ("HR/40001.txt", 2),
            ("DATA/20002.txt", 1),
        ]
    );
}

#[test]
fn demo_limit_keeps_the_top_prefix() {
    let (scanner, _dir) = demo_scanner();
    let full = scanner.search_exact(&["Java", "Python"], Algorithm::Kmp, 10).unwrap();
    for limit in 1..=full.matches.len() {
        let limited = scanner.search_exact(&["Java", "Python"], Algorithm::Kmp, limit).unwrap();
        assert_eq!(limited.matches, full.matches[..limit]);
    }
    assert!(full.matches.windows(2).all(|w| w[0].count >= w[1].count));
    assert!(full.matches.iter().all(|m| m.count > 0));
}

#[test]
fn demo_case_sensitivity_is_configurable() {
    let (scanner, dir) = demo_scanner();
    assert!(scanner.search_exact(&["java"], Algorithm::Kmp, 10).unwrap().matches.is_empty());

    let insensitive = Scanner::new(ScanConfig {
        case_sensitive: false,
        ..config()
    })
    .unwrap();
    insensitive.initialize(dir.path()).unwrap();
    let report = insensitive.search_exact(&["java"], Algorithm::BoyerMoore, 10).unwrap();
    assert_eq!(report.matches.len(), 4);
    assert_eq!(report.pairs()[0], ("ENGINEERING/10001.txt", 4));
}

#[test]
fn demo_fuzzy_tolerates_typos() {
    let (scanner, _dir) = demo_scanner();
    let report = scanner.search_fuzzy(&["Pythn"], 1, 10).unwrap();
    assert_eq!(
        report.pairs(),
        vec![("DATA/20001.txt", 2), ("ENGINEERING/10002.txt", 1), ("HR/40001.txt", 1)]
    );
    assert!(scanner.search_fuzzy(&["Pythn"], 0, 10).unwrap().matches.is_empty());
}

#[test]
fn demo_summary_parses_cv_sections() {
    let (scanner, _dir) = demo_scanner();
    let summary = scanner.summary(&DocumentId::from("ENGINEERING/10001.txt")).unwrap();
    assert_eq!(summary.skills, vec!["Java", "Spring Boot", "PostgreSQL", "Docker"]);
    assert_eq!(summary.jobs[0].position, "Java Developer");
    assert_eq!(summary.jobs[1].end, "Present");
    assert_eq!(summary.education.len(), 1);
    assert_eq!(summary.education[0].institution, "Institut Teknologi Bandung");
    assert_eq!(summary.education[0].degree, "Informatics");
}
