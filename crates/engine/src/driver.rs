//! Engine driver: a single task owning the game state.
//!
//! Intents arrive on a bounded mpsc channel, gravity comes from a tokio interval.
//! Each event runs to completion before the next one is admitted, and every event
//! that changes the game publishes a fresh snapshot on a watch channel.

use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

use crate::config::EngineConfig;
use crate::core::{GameState, RenderSnapshot};
use crate::error::EngineError;
use crate::event_log::{EventLog, LogRecord};
use crate::types::{GameStatus, Intent};

/// Running engine instance.
pub struct EngineHandle {
    intents: mpsc::Sender<Intent>,
    snapshots: watch::Receiver<RenderSnapshot>,
    task: JoinHandle<GameState>,
}

impl EngineHandle {
    /// Queue an intent, waiting for buffer space
    pub async fn send(&self, intent: Intent) -> Result<(), EngineError> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| EngineError::Stopped)
    }

    /// Queue an intent without waiting (for synchronous hosts)
    pub fn try_send(&self, intent: Intent) -> Result<(), EngineError> {
        match self.intents.try_send(intent) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(EngineError::Busy),
            Err(TrySendError::Closed(_)) => Err(EngineError::Stopped),
        }
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> RenderSnapshot {
        *self.snapshots.borrow()
    }

    /// Receiver notified after every state change
    pub fn subscribe(&self) -> watch::Receiver<RenderSnapshot> {
        self.snapshots.clone()
    }

    /// Close the intent channel, wait for the engine to drain it, return the final state
    pub async fn shutdown(self) -> Result<GameState, EngineError> {
        let Self { intents, task, .. } = self;
        drop(intents);
        Ok(task.await?)
    }
}

/// Start an engine task on the current tokio runtime
pub fn spawn(config: EngineConfig) -> EngineHandle {
    let (intent_tx, intent_rx) = mpsc::channel::<Intent>(config.command_buffer.max(1));

    let state = GameState::new(config.seed);
    let (snapshot_tx, snapshot_rx) = watch::channel(state.snapshot());
    let log = config.event_log_path.clone().map(EventLog::spawn);

    let engine = Engine {
        state,
        tick_interval: config.tick_interval,
        gravity: None,
        gravity_episode: 0,
        log,
        snapshots: snapshot_tx,
    };
    let task = tokio::spawn(engine.run(intent_rx));

    EngineHandle {
        intents: intent_tx,
        snapshots: snapshot_rx,
        task,
    }
}

struct Engine {
    state: GameState,
    tick_interval: Duration,
    /// Present only while the game is running.
    gravity: Option<Interval>,
    /// Episode the current gravity timer belongs to.
    gravity_episode: u32,
    log: Option<EventLog>,
    snapshots: watch::Sender<RenderSnapshot>,
}

impl Engine {
    async fn run(mut self, mut intents: mpsc::Receiver<Intent>) -> GameState {
        loop {
            tokio::select! {
                // Intents win ties with gravity.
                biased;

                maybe = intents.recv() => match maybe {
                    Some(intent) => self.on_intent(intent),
                    None => break,
                },
                _ = next_gravity(&mut self.gravity) => self.on_tick(),
            }
        }

        if let Some(log) = self.log.take() {
            log.close().await;
        }
        self.state
    }

    fn on_intent(&mut self, intent: Intent) {
        let before = self.state.status();
        let applied = self.state.apply(intent);

        if let Some(log) = &self.log {
            log.record(LogRecord::Intent {
                ts: log.elapsed_ms(),
                episode: self.state.episode_id(),
                intent,
                applied,
            });
        }

        self.after_event(before, applied);
    }

    fn on_tick(&mut self) {
        let before = self.state.status();
        let changed = self.state.tick();
        self.after_event(before, changed);
    }

    fn after_event(&mut self, before: GameStatus, changed: bool) {
        let lock = self.state.take_last_event();

        if let Some(log) = &self.log {
            let ts = log.elapsed_ms();
            let episode = self.state.episode_id();
            if let Some(event) = &lock {
                log.record(LogRecord::lock(
                    ts,
                    episode,
                    event,
                    self.state.pieces_locked(),
                    self.state.lines_cleared(),
                ));
            }
            if self.state.status() != before {
                log.record(LogRecord::Status {
                    ts,
                    episode,
                    status: self.state.status(),
                });
            }
        }

        self.sync_gravity();

        if changed {
            self.snapshots.send_replace(self.state.snapshot());
        }
    }

    /// Keep the gravity timer alive exactly while the current episode is running
    fn sync_gravity(&mut self) {
        if !self.state.is_running() {
            self.gravity = None;
            return;
        }

        let episode = self.state.episode_id();
        if self.gravity.is_some() && self.gravity_episode == episode {
            return;
        }

        let mut interval = time::interval_at(Instant::now() + self.tick_interval, self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.gravity = Some(interval);
        self.gravity_episode = episode;
    }
}

async fn next_gravity(gravity: &mut Option<Interval>) {
    match gravity {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn config() -> EngineConfig {
        EngineConfig::default()
            .with_seed(7)
            .with_tick_interval(Duration::from_millis(500))
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_is_not_started() {
        let handle = spawn(config());
        let snap = handle.snapshot();
        assert_eq!(snap.status, GameStatus::NotStarted);
        assert!(snap.active.is_none());
        assert_ok!(handle.shutdown().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_gravity_before_start() {
        let handle = spawn(config());
        time::sleep(Duration::from_secs(5)).await;
        let state = handle.shutdown().await.unwrap();
        assert_eq!(state.status(), GameStatus::NotStarted);
        assert!(state.active().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_publishes_snapshot() {
        let handle = spawn(config());
        let mut rx = handle.subscribe();

        assert_ok!(handle.send(Intent::StartGame).await);
        assert_ok!(rx.changed().await);

        let snap = *rx.borrow_and_update();
        assert_eq!(snap.status, GameStatus::Running);
        assert_eq!(snap.active.unwrap().position.row, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_drains_queued_intents() {
        let handle = spawn(config());
        assert_ok!(handle.try_send(Intent::StartGame));
        assert_ok!(handle.try_send(Intent::HardDrop));
        let state = handle.shutdown().await.unwrap();
        assert_eq!(state.status(), GameStatus::Running);
        assert_eq!(state.pieces_locked(), 1);
    }
}
