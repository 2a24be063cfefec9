mod common;

use common::setup_test_context;
use golf_league::error::CoreError;
use golf_league::model::{GolferRecord, RangeFilter};
use golf_league::service;
use golf_league::storage::Storage;
use serde_json::{Map, json};

#[tokio::test]
async fn test3_unknown_golfer_is_not_found() {
    let ctx = setup_test_context();
    let err = service::load_golfer_stats(&ctx.engine, &ctx.storage, "Nobody", None)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    // Known golfer with nothing in range is not an error.
    let filter = RangeFilter {
        start_year: Some(2030),
        ..RangeFilter::default()
    };
    let stats = service::load_golfer_stats(&ctx.engine, &ctx.storage, "Al Pine", Some(&filter))
        .await
        .unwrap();
    assert!(stats.scores.is_empty());
}

#[tokio::test]
async fn test3_new_week_then_report_is_empty() {
    let ctx = setup_test_context();
    let mut fields = Map::new();
    fields.insert("2021 Wk 4".to_string(), json!(""));
    let result = service::add_week(&ctx.storage, &fields).await.unwrap();
    assert_eq!(result.matched_count, 5);
    assert_eq!(result.modified_count, 5);

    let meta = service::load_metadata(&ctx.engine, &ctx.storage).await.unwrap();
    assert_eq!(meta.latest_week, "4");

    let report = service::load_league_report(&ctx.engine, &ctx.storage, 2021, 4)
        .await
        .unwrap();
    assert!(report.flight_map.is_empty());
    assert_eq!(report.summary.low_net, "?");
}

#[tokio::test]
async fn test3_record_score_updates_existing_field() {
    let ctx = setup_test_context();
    let result = service::record_score(&ctx.storage, "Cy Press", "2021 WK 3", 37)
        .await
        .unwrap();
    assert_eq!(result.modified_count, 1);

    let cy = ctx.storage.fetch_one_record("Cy Press").await.unwrap().unwrap();
    assert_eq!(cy.fields().get("2021 Wk 3"), Some(&json!(37)));
    assert!(cy.fields().get("2021 WK 3").is_none());

    let report = service::load_league_report(&ctx.engine, &ctx.storage, 2021, 3)
        .await
        .unwrap();
    let entry = report.flight_map.get("Cy Press").unwrap();
    assert_eq!(entry.handicap, 2);
    assert_eq!(entry.net, 35);
    assert_eq!(report.flight_map.len(), 5);
}

#[tokio::test]
async fn test3_record_score_for_a_new_week_uses_canonical_key() {
    let ctx = setup_test_context();
    service::record_score(&ctx.storage, "Di Vot", "2021 WK 4", 50)
        .await
        .unwrap();
    let di = ctx.storage.fetch_one_record("Di Vot").await.unwrap().unwrap();
    assert_eq!(di.fields().get("2021 Wk 4"), Some(&json!(50)));

    service::record_score(&ctx.storage, "Di Vot", "2019 wk 9", 60)
        .await
        .unwrap();
    let di = ctx.storage.fetch_one_record("Di Vot").await.unwrap().unwrap();
    assert_eq!(di.fields().get("2019 WK 9"), Some(&json!(60)));
}

#[tokio::test]
async fn test3_record_score_rejects_bad_input() {
    let ctx = setup_test_context();
    let err = service::record_score(&ctx.storage, "Nobody", "2021 Wk 3", 40)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));

    let err = service::record_score(&ctx.storage, "Al Pine", "yesterday", 40)
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));
}

#[tokio::test]
async fn test3_remove_week() {
    let ctx = setup_test_context();
    let result = service::remove_week(&ctx.storage, &["2021 Wk 3".to_string()])
        .await
        .unwrap();
    assert_eq!(result.modified_count, 5);

    let meta = service::load_metadata(&ctx.engine, &ctx.storage).await.unwrap();
    assert_eq!(meta.latest_week, "2");

    let err = service::remove_week(&ctx.storage, &["Names".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));
    assert!(
        ctx.storage
            .fetch_one_record("Al Pine")
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test3_add_golfer() {
    let ctx = setup_test_context();
    let result = service::add_golfer(&ctx.storage, GolferRecord::new("Fay Way"))
        .await
        .unwrap();
    assert_eq!(result.inserted_count, 1);

    let err = service::add_golfer(&ctx.storage, GolferRecord::new("Fay Way"))
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));

    let nameless = GolferRecord::from_fields(Map::new()).with_field("2021 Wk 1", 40);
    let err = service::add_golfer(&ctx.storage, nameless).await.unwrap_err();
    assert!(matches!(err, CoreError::Parse(_)));

    let all = service::load_all_records(&ctx.storage).await.unwrap();
    assert_eq!(all.len(), 6);
    assert_eq!(
        serde_json::to_value(&all[5]).unwrap(),
        json!({"Names": "Fay Way"})
    );
}
