//! Engine driver tests on a paused tokio clock

use std::time::Duration;

use tetric::engine::{self, EngineConfig, EngineError, EngineHandle};
use tetric::types::{GameStatus, Intent};
use tokio::time;
use tokio_test::assert_ok;

const TICK: Duration = Duration::from_millis(500);

fn config(seed: u64) -> EngineConfig {
    EngineConfig::default().with_seed(seed).with_tick_interval(TICK)
}

/// Let the engine task drain its queue
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

async fn drop_until_game_over(handle: &EngineHandle) {
    for _ in 0..60 {
        assert_ok!(handle.send(Intent::HardDrop).await);
    }
    settle().await;
    assert_eq!(handle.snapshot().status, GameStatus::GameOver);
}

#[tokio::test(start_paused = true)]
async fn engine_gravity_follows_tick_interval() {
    let handle = engine::spawn(config(1));
    assert_ok!(handle.send(Intent::StartGame).await);
    settle().await;
    assert_eq!(handle.snapshot().active.unwrap().position.row, 0);

    time::sleep(Duration::from_millis(499)).await;
    settle().await;
    assert_eq!(handle.snapshot().active.unwrap().position.row, 0);

    time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(handle.snapshot().active.unwrap().position.row, 1);

    time::sleep(TICK).await;
    settle().await;
    assert_eq!(handle.snapshot().active.unwrap().position.row, 2);

    assert_ok!(handle.shutdown().await);
}

#[tokio::test(start_paused = true)]
async fn engine_intents_are_applied_in_order() {
    let handle = engine::spawn(config(2));
    assert_ok!(handle.send(Intent::StartGame).await);
    assert_ok!(handle.send(Intent::MoveLeft).await);
    assert_ok!(handle.send(Intent::MoveLeft).await);
    assert_ok!(handle.send(Intent::HardDrop).await);

    let state = handle.shutdown().await.unwrap();
    assert_eq!(state.pieces_locked(), 1);
    assert_eq!(state.board().filled_count(), 4);
    // Locked two columns left of spawn.
    assert!(state.board().is_filled(19, 2) || state.board().is_filled(18, 2));
    assert!(!state.board().is_filled(19, 1) && !state.board().is_filled(18, 1));
}

#[tokio::test(start_paused = true)]
async fn engine_try_send_reports_full_queue() {
    let mut cfg = config(7);
    cfg.command_buffer = 1;
    let handle = engine::spawn(cfg);

    // The engine task cannot drain the queue until this task yields.
    assert_ok!(handle.try_send(Intent::StartGame));
    assert!(matches!(handle.try_send(Intent::HardDrop), Err(EngineError::Busy)));

    settle().await;
    assert_ok!(handle.try_send(Intent::HardDrop));

    let state = handle.shutdown().await.unwrap();
    assert_eq!(state.pieces_locked(), 1);
}

#[tokio::test(start_paused = true)]
async fn engine_game_over_stops_gravity() {
    let handle = engine::spawn(config(3));
    assert_ok!(handle.send(Intent::StartGame).await);
    drop_until_game_over(&handle).await;

    let over = handle.snapshot();
    time::sleep(TICK * 10).await;
    settle().await;

    assert_eq!(handle.snapshot(), over);
    assert!(over.active.is_none());

    let state = handle.shutdown().await.unwrap();
    assert_eq!(state.status(), GameStatus::GameOver);
}

#[tokio::test(start_paused = true)]
async fn engine_replay_restarts_gravity() {
    let handle = engine::spawn(config(4));
    assert_ok!(handle.send(Intent::StartGame).await);
    drop_until_game_over(&handle).await;

    time::sleep(Duration::from_millis(1234)).await;
    assert_ok!(handle.send(Intent::StartGame).await);
    settle().await;

    let snap = handle.snapshot();
    assert_eq!(snap.status, GameStatus::Running);
    assert_eq!(snap.episode_id, 1);
    assert_eq!(snap.pieces_locked, 0);
    assert_eq!(snap.active.unwrap().position.row, 0);

    // A full period from the replay, not from the old timer.
    time::sleep(Duration::from_millis(499)).await;
    settle().await;
    assert_eq!(handle.snapshot().active.unwrap().position.row, 0);
    time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(handle.snapshot().active.unwrap().position.row, 1);

    assert_ok!(handle.shutdown().await);
}

#[tokio::test(start_paused = true)]
async fn engine_subscribers_see_every_change() {
    let handle = engine::spawn(config(5));
    let mut rx = handle.subscribe();

    assert_ok!(handle.send(Intent::StartGame).await);
    assert_ok!(rx.changed().await);
    assert!(rx.borrow_and_update().playable());

    // Rejected intent publishes nothing.
    assert_ok!(handle.send(Intent::StartGame).await);
    settle().await;
    assert!(!rx.has_changed().unwrap());

    assert_ok!(rx.changed().await);
    assert_eq!(rx.borrow_and_update().active.unwrap().position.row, 1);

    assert_ok!(handle.shutdown().await);
}

#[tokio::test]
async fn engine_writes_json_lines_event_log() {
    let path = std::env::temp_dir().join(format!("tetric-events-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let handle = engine::spawn(
        config(6)
            .with_tick_interval(Duration::from_secs(60))
            .with_event_log(path.clone()),
    );
    assert_ok!(handle.send(Intent::StartGame).await);
    assert_ok!(handle.send(Intent::HardDrop).await);
    assert_ok!(handle.shutdown().await);

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let types: Vec<&str> = records.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(types, ["intent", "status", "intent", "lock"]);

    assert_eq!(records[0]["intent"], "startGame");
    assert_eq!(records[1]["status"], "running");
    assert_eq!(records[2]["applied"], true);
    assert_eq!(records[3]["pieces_locked"], 1);
    assert!(records[3]["kind"].is_string());
    assert_eq!(records[3]["episode"], 0);
}
