use curation_core::{
    CorpusEntry, CurationEngine, CurationResult, FrontMatter, LastUpdate, Snapshot,
};

fn corpus() -> Vec<CorpusEntry> {
    vec![
        CorpusEntry {
            id: "math/linear-algebra/svd".into(),
            title: "Singular Value Decomposition".to_string(),
            description: None,
            permalink: "/docs/math/linear-algebra/svd".to_string(),
            front_matter: Some(FrontMatter {
                description: Some("Factorizing matrices.".to_string()),
                ..FrontMatter::default()
            }),
        },
        CorpusEntry {
            id: "storage-engines/lsm/compaction".into(),
            title: "Compaction Strategies".to_string(),
            description: Some("How LSM trees reclaim space.".to_string()),
            permalink: "/docs/storage-engines/lsm/compaction".to_string(),
            front_matter: Some(FrontMatter {
                reading_time: Some(8),
                last_update: Some(LastUpdate {
                    date: Some("2026-02-14".to_string()),
                }),
                ..FrontMatter::default()
            }),
        },
    ]
}

#[test]
fn golden_feed_serialization() {
    let snapshot = Snapshot::new(corpus());
    let result = CurationEngine::default().curate(&snapshot, 3);

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    // Key order check: entries before curation metadata, contract field
    // order inside an entry
    let entries_pos = json_str.find("\"entries\":").expect("missing entries key");
    let curation_pos = json_str.find("\"curation\":").expect("missing curation key");
    assert!(entries_pos < curation_pos, "entries should precede curation metadata");

    let title_pos = json_str.find("\"title\":").unwrap();
    let link_pos = json_str.find("\"link\":").unwrap();
    let category_pos = json_str.find("\"category\":").unwrap();
    let reading_pos = json_str.find("\"readingTime\":").unwrap();

    assert!(title_pos < link_pos);
    assert!(link_pos < category_pos);
    assert!(category_pos < reading_pos);

    // Snapshot check (freeze contract)
    const EXPECTED_JSON: &str = r#"{
      "entries": [
        {
          "title": "Compaction Strategies",
          "description": "How LSM trees reclaim space.",
          "link": "/docs/storage-engines/lsm/compaction",
          "category": "Storage Engines",
          "date": "2026-02-14",
          "readingTime": 8
        },
        {
          "title": "Singular Value Decomposition",
          "description": "Factorizing matrices.",
          "link": "/docs/math/linear-algebra/svd",
          "category": "Math",
          "date": "",
          "readingTime": 5
        }
      ],
      "curation": {
        "requested": 3,
        "documents_considered": 2,
        "documents_eligible": 2,
        "documents_returned": 2,
        "dates_defaulted": 1
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String =
        EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();

    assert_eq!(
        normalized_actual, normalized_expected,
        "JSON structure mismatch against golden snapshot"
    );

    // Roundtrip check
    let deserialized: CurationResult =
        serde_json::from_str(&json_str).expect("deserialization failed");

    assert_eq!(deserialized.entries.len(), 2);
    assert_eq!(deserialized.entries[0].category, "Storage Engines");
    assert_eq!(deserialized.entries[1].date, "");
    assert_eq!(deserialized.curation.degraded, None);
    assert_eq!(deserialized, result);
}

#[test]
fn golden_feed_is_deterministic_across_snapshot_clones() {
    let snapshot1 = Snapshot::new(corpus());
    let snapshot2 = snapshot1.clone();

    let engine = CurationEngine::default();
    let json1 = serde_json::to_string_pretty(&engine.curate(&snapshot1, 3)).unwrap();
    let json2 = serde_json::to_string_pretty(&engine.curate(&snapshot2, 3)).unwrap();

    assert_eq!(json1, json2, "curated feed is not deterministic");
}
