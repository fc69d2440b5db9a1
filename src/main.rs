//! Terminal Tetris runner.
//!
//! The engine runs on a tokio runtime; this thread polls crossterm for keys,
//! forwards intents and redraws whenever the engine publishes a new snapshot.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::runtime::Runtime;

use tetric::engine::{self, EngineConfig, EngineError, EngineHandle};
use tetric::input::{handle_key_event, should_quit};
use tetric::term::{Canvas, GameView, TerminalRenderer, Viewport};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let config = EngineConfig::from_env();
    let rt = Runtime::new()?;
    let handle = {
        let _guard = rt.enter();
        engine::spawn(config)
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &handle);

    // Always try to restore terminal state.
    let _ = term.exit();

    let shutdown = rt.block_on(handle.shutdown());
    result?;
    shutdown?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, handle: &EngineHandle) -> Result<()> {
    let view = GameView::default();
    let mut snapshots = handle.subscribe();
    let mut canvas = Canvas::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty || snapshots.has_changed().unwrap_or(false) {
            let snap = *snapshots.borrow_and_update();
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut canvas);
            term.draw(&canvas)?;
            dirty = false;
        }

        if !event::poll(FRAME)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(intent) = handle_key_event(key) {
                    match handle.try_send(intent) {
                        Ok(()) | Err(EngineError::Busy) => {}
                        Err(e) => return Err(e.into()),
                    }
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
