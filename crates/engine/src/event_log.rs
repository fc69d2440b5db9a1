//! JSON-lines event log.
//!
//! Records are queued on an unbounded channel and appended to the log file by a
//! dedicated task, so the game loop never waits on disk. One JSON object per line.

use std::path::PathBuf;

use arrayvec::ArrayVec;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::core::LockEvent;
use crate::types::{GameStatus, Intent, PieceKind, BOARD_ROWS};

/// One line of the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    Intent {
        ts: u64,
        episode: u32,
        intent: Intent,
        applied: bool,
    },
    Lock {
        ts: u64,
        episode: u32,
        kind: PieceKind,
        row: i8,
        col: i8,
        rows_cleared: ArrayVec<usize, BOARD_ROWS>,
        pieces_locked: u32,
        lines_cleared: u32,
    },
    Status {
        ts: u64,
        episode: u32,
        status: GameStatus,
    },
}

impl LogRecord {
    pub fn lock(ts: u64, episode: u32, event: &LockEvent, pieces_locked: u32, lines_cleared: u32) -> Self {
        LogRecord::Lock {
            ts,
            episode,
            kind: event.kind,
            row: event.position.row,
            col: event.position.col,
            rows_cleared: event.rows_cleared.clone(),
            pieces_locked,
            lines_cleared,
        }
    }
}

/// Handle to the background log writer
pub struct EventLog {
    tx: mpsc::UnboundedSender<LogRecord>,
    writer: JoinHandle<()>,
    started: Instant,
}

impl EventLog {
    /// Start the writer task appending to `path`
    ///
    /// If the file cannot be opened, logging is disabled with a diagnostic on stderr.
    pub fn spawn(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<LogRecord>();
        let writer = tokio::spawn(write_records(path, rx));
        Self {
            tx,
            writer,
            started: Instant::now(),
        }
    }

    /// Milliseconds since the log was opened
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    pub fn record(&self, record: LogRecord) {
        let _ = self.tx.send(record);
    }

    /// Flush outstanding records and stop the writer
    pub async fn close(self) {
        drop(self.tx);
        let _ = self.writer.await;
    }
}

async fn write_records(path: PathBuf, mut rx: mpsc::UnboundedReceiver<LogRecord>) {
    let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[Engine] event log disabled ({}): {}", path.display(), e);
            return;
        }
    };

    let mut buf: Vec<u8> = Vec::with_capacity(256);

    while let Some(record) = rx.recv().await {
        buf.clear();
        if serde_json::to_writer(&mut buf, &record).is_err() {
            continue;
        }
        buf.push(b'\n');
        if file.write_all(&buf).await.is_err() {
            break;
        }
    }

    let _ = file.flush().await;
}
