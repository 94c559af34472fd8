/// Batch normalization integration tests
///
/// Cover index correspondence, per-record failure isolation and
/// cancellation on the blocking worker pool.
mod utils;

use job_normalizer_lib::{AppError, BatchItem, NormalizationConfigBuilder};
use tokio_util::sync::CancellationToken;
use utils::{factories::RawJobFactory, helpers};

#[tokio::test]
async fn output_matches_input_order() {
    let service = helpers::build_test_service();
    let raws: Vec<_> = (0..50)
        .map(|i| {
            RawJobFactory::new()
                .with_title(&format!("analyst {}", i))
                .with_external_id(&i.to_string())
                .build()
        })
        .collect();

    let items = service.batch_normalize(raws).await;

    assert_eq!(items.len(), 50);
    for (i, item) in items.iter().enumerate() {
        let record = item.normalized().expect("every record should normalize");
        assert_eq!(record.title, format!("Analyst {}", i));
        assert_eq!(record.external_id, Some(i.to_string()));
    }
}

#[tokio::test]
async fn failing_record_does_not_affect_siblings() {
    let config = NormalizationConfigBuilder::new()
        .max_field_length(200)
        .build()
        .unwrap();
    let service = helpers::build_service_with_config(&config);

    let oversized = RawJobFactory::new()
        .with_title("Oversized")
        .with_description(&"word ".repeat(100))
        .build();
    let raws = vec![
        RawJobFactory::new().with_title("first").build(),
        oversized.clone(),
        RawJobFactory::new().with_title("third").build(),
    ];

    let items = service.batch_normalize(raws).await;

    assert_eq!(items.len(), 3);
    assert_eq!(items[0].normalized().map(|r| r.title.as_str()), Some("First"));
    assert_eq!(items[2].normalized().map(|r| r.title.as_str()), Some("Third"));

    match &items[1] {
        BatchItem::PassedThrough { raw, error } => {
            assert_eq!(raw, &oversized);
            assert!(matches!(error, AppError::NormalizationError(_)));
        }
        other => panic!("expected pass-through, got {:?}", other),
    }

    // Pass-through slots serialize as the untouched raw mapping
    assert_eq!(items[1].to_mapping(), oversized.to_mapping());
}

#[tokio::test]
async fn cancelled_before_start_keeps_every_raw_record() {
    let service = helpers::build_test_service();
    let token = CancellationToken::new();
    token.cancel();

    let raws = vec![
        RawJobFactory::complete().build(),
        RawJobFactory::minimal().build(),
    ];
    let items = service
        .batch_normalize_with_cancellation(raws.clone(), token)
        .await;

    assert_eq!(items.len(), 2);
    for (item, raw) in items.iter().zip(raws) {
        assert_eq!(item, &BatchItem::Cancelled { raw });
    }
}

#[tokio::test]
async fn uncancelled_token_normalizes_everything() {
    let service = helpers::build_test_service();
    let items = service
        .batch_normalize_with_cancellation(
            vec![RawJobFactory::complete().build()],
            CancellationToken::new(),
        )
        .await;

    assert!(items.iter().all(BatchItem::is_normalized));
}

#[test]
fn batch_runs_from_synchronous_code() {
    let service = helpers::build_test_service();
    let items = tokio_test::block_on(
        service.batch_normalize(vec![RawJobFactory::complete().build()]),
    );

    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].normalized().map(|r| r.title.as_str()),
        Some("Senior Rust Developer")
    );
}

#[tokio::test]
async fn batch_agrees_with_single_normalization() {
    let service = helpers::build_test_service();
    let raw = RawJobFactory::complete().build();

    let single = service.normalize(&raw).unwrap();
    let batch = service.batch_normalize(vec![raw]).await;

    assert_eq!(batch, vec![BatchItem::Normalized(single)]);
}
