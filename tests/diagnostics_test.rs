/// Diagnostics integration tests
mod utils;

use utils::{factories::RawJobFactory, helpers};

#[test]
fn stats_describe_the_enrichment() {
    let service = helpers::build_test_service();
    let raw = RawJobFactory::complete().build();
    let record = service.normalize(&raw).unwrap();

    let stats = service.diff_stats(&raw, &record);

    for added in ["remote_type", "skills", "categories", "salary_min", "requirements"] {
        assert!(
            stats.fields_added.iter().any(|f| f == added),
            "expected '{}' in {:?}",
            added,
            stats.fields_added
        );
    }
    // false is not a value worth reporting
    assert!(!stats.fields_added.iter().any(|f| f == "salary_is_estimated"));

    assert!(stats.fields_modified.iter().any(|f| f == "title"));
    assert!(stats.fields_modified.iter().any(|f| f == "description"));
    assert!(stats.fields_modified.iter().any(|f| f == "posted_date"));
    assert!(!stats.fields_modified.iter().any(|f| f == "company"));
    assert!(!stats.fields_modified.iter().any(|f| f == "source_url"));

    assert_eq!(stats.skills_extracted_count, 2);
    assert_eq!(stats.categories_extracted_count, 1);
}

#[test]
fn quality_improvement_compares_against_raw_score() {
    let service = helpers::build_test_service();
    let raw = RawJobFactory::complete().build();
    let record = service.normalize(&raw).unwrap();

    let stats = service.diff_stats(&raw, &record);

    assert!((service.score_raw(&raw) - 0.60).abs() < 1e-9);
    assert!((stats.quality_improvement - 0.25).abs() < 1e-9);
    assert!(stats.report().contains("Quality improvement: +0.25"));
}

#[test]
fn empty_record_changes_nothing_of_note() {
    let service = helpers::build_test_service();
    let raw = RawJobFactory::minimal().build();
    let record = service.normalize(&raw).unwrap();

    let stats = service.diff_stats(&raw, &record);

    assert!(stats.fields_modified.is_empty());
    assert_eq!(stats.quality_improvement, 0.0);
    assert_eq!(stats.skills_extracted_count, 0);
}
