// =============================================================================
// INTEGRATION TESTS - POLL CYCLE, SUCCESS PATHS
// Verifies notification fan-out and cursor movement
// =============================================================================

use crate::common::{engine_with, statuses_payload, RecordingBot, ScriptedApi};
use serde_json::json;

#[tokio::test]
async fn test_each_record_notified_in_api_order() {
    let api = ScriptedApi::new();
    let bot = RecordingBot::new();
    api.push_ok(statuses_payload(
        &[("Algo sprint", "approved"), ("Final project", "rejected")],
        2000,
    ))
    .await;

    let mut engine = engine_with(api.clone(), bot.clone(), 1500);
    let sent = engine.run_cycle().await.unwrap();

    assert_eq!(sent, 2);
    let messages = bot.sent().await;
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Status changed for \"Algo sprint\"."));
    assert!(messages[1].starts_with("Status changed for \"Final project\"."));
    assert_eq!(engine.cursor(), 2000);

    // The request window started at the old cursor
    assert_eq!(api.calls().await, vec![1500]);
}

#[tokio::test]
async fn test_empty_window_sends_nothing_but_advances_cursor() {
    let api = ScriptedApi::new();
    let bot = RecordingBot::new();
    api.push_ok(statuses_payload(&[], 1700)).await;

    let mut engine = engine_with(api, bot.clone(), 1500);
    let sent = engine.run_cycle().await.unwrap();

    assert_eq!(sent, 0);
    assert!(bot.sent().await.is_empty());
    assert_eq!(engine.cursor(), 1700);
}

#[tokio::test]
async fn test_approved_homework_end_to_end() {
    let api = ScriptedApi::new();
    let bot = RecordingBot::new();
    api.push_ok(statuses_payload(&[("Proj1", "approved")], 1600))
        .await;

    let mut engine = engine_with(api, bot.clone(), 1000);
    engine.run_cycle().await.unwrap();

    assert_eq!(
        bot.sent().await,
        vec![
            "Status changed for \"Proj1\". Работа проверена: ревьюеру всё понравилось. Ура!"
                .to_string()
        ]
    );
    assert_eq!(engine.cursor(), 1600);
}

#[tokio::test]
async fn test_legacy_wrapped_response_accepted() {
    let api = ScriptedApi::new();
    let bot = RecordingBot::new();
    api.push_ok(json!([statuses_payload(&[("Proj1", "reviewing")], 1600)]))
        .await;

    let mut engine = engine_with(api, bot.clone(), 1000);
    let sent = engine.run_cycle().await.unwrap();

    assert_eq!(sent, 1);
    assert_eq!(engine.cursor(), 1600);
}

#[tokio::test]
async fn test_cursor_repeats_across_consecutive_cycles() {
    let api = ScriptedApi::new();
    let bot = RecordingBot::new();
    api.push_ok(statuses_payload(&[], 1600)).await;
    api.push_ok(statuses_payload(&[], 1900)).await;

    let mut engine = engine_with(api.clone(), bot, 1000);
    engine.run_cycle().await.unwrap();
    engine.run_cycle().await.unwrap();

    // Second request starts where the first response left off
    assert_eq!(api.calls().await, vec![1000, 1600]);
    assert_eq!(engine.cursor(), 1900);
}
