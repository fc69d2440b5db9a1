//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, shapes, rotation, bag and
//! collision. It is a single-owner state machine with one transition per event:
//!
//! - [`GameState::tick`]: one gravity step
//! - [`GameState::apply`]: one player intent
//!
//! Both re-check collision against the current board and position before committing
//! anything, and both are no-ops unless the game is running (except `StartGame`).

use arrayvec::ArrayVec;

use crate::board::{Board, ClearedRows};
use crate::collision::collides;
use crate::rng::Bag;
use crate::rotation::rotate;
use crate::shape::Shape;
use crate::snapshot::{self, ActiveSnapshot, RenderSnapshot};
use crate::types::{GameStatus, Intent, PieceKind, Position, BOARD_ROWS, SPAWN_POSITION};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl Tetromino {
    /// Create a tetromino with the given shape at the spawn position
    pub fn spawn(kind: PieceKind, shape: Shape) -> Self {
        Self {
            kind,
            shape,
            position: SPAWN_POSITION,
        }
    }

    /// Same piece at another position
    pub fn at(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Check if the piece overlaps walls or locked cells
    pub fn collides(&self, board: &Board) -> bool {
        collides(self.position, &self.shape, board)
    }

    /// Lowest position reachable by moving straight down
    pub fn landing_position(&self, board: &Board) -> Position {
        let mut position = self.position;
        while !collides(position.offset(1, 0), &self.shape, board) {
            position = position.offset(1, 0);
        }
        position
    }
}

/// Content of the hold slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeldPiece {
    pub kind: PieceKind,
    /// Orientation at the time it was held
    pub shape: Shape,
}

/// Emitted after every lock (consumed by observers such as the event log)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Row the piece rested on when it locked
    pub position: Position,
    /// Removed rows, ascending
    pub rows_cleared: ClearedRows,
    /// The follow-up spawn collided
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    status: GameStatus,
    board: Board,
    active: Option<Tetromino>,
    hold: Option<HeldPiece>,
    can_hold: bool,
    bag: Bag,
    /// Seed the current episode's bag was created from.
    seed: u64,
    /// Monotonic episode id (increments on replay).
    episode_id: u32,
    pieces_locked: u32,
    lines_cleared: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed, waiting for `StartGame`
    pub fn new(seed: u64) -> Self {
        Self {
            status: GameStatus::NotStarted,
            board: Board::new(),
            active: None,
            hold: None,
            can_hold: true,
            bag: Bag::new(seed),
            seed,
            episode_id: 0,
            pieces_locked: 0,
            lines_cleared: 0,
            last_event: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (tests, puzzles, benchmarks)
    ///
    /// Bypasses the rules: edits here can leave full rows that no lock will clear.
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Replace the active piece while running (setup hook for tests and tooling)
    ///
    /// Returns false if the game is not running or the piece collides.
    #[doc(hidden)]
    pub fn replace_active(&mut self, piece: Tetromino) -> bool {
        if !self.is_running() || piece.collides(&self.board) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold.map(|h| h.kind)
    }

    pub fn held(&self) -> Option<HeldPiece> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a player intent
    ///
    /// Returns true if the state changed. Rejected intents (blocked moves, hold
    /// already used, anything but `StartGame` while not running) return false.
    pub fn apply(&mut self, intent: Intent) -> bool {
        if intent == Intent::StartGame {
            return self.start();
        }
        if !self.is_running() {
            return false;
        }

        match intent {
            Intent::MoveLeft => self.try_shift(0, -1),
            Intent::MoveRight => self.try_shift(0, 1),
            Intent::SoftDrop => self.try_shift(1, 0),
            Intent::Rotate => self.try_rotate(),
            Intent::HardDrop => self.hard_drop(),
            Intent::Hold => self.hold(),
            Intent::StartGame => false,
        }
    }

    /// One gravity step: move down, or lock and spawn the next piece
    ///
    /// Returns true if the state changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.active.is_none() {
            return false;
        }

        if self.try_shift(1, 0) {
            return true;
        }

        self.lock_active();
        true
    }

    /// Start from the home screen or replay after game over
    fn start(&mut self) -> bool {
        match self.status {
            GameStatus::Running => false,
            GameStatus::NotStarted => {
                self.begin_episode();
                true
            }
            GameStatus::GameOver => {
                let seed = self.bag.fork_seed();
                let next_episode = self.episode_id.wrapping_add(1);
                *self = Self::new(seed);
                self.episode_id = next_episode;
                self.begin_episode();
                true
            }
        }
    }

    fn begin_episode(&mut self) {
        self.board.clear();
        self.active = None;
        self.hold = None;
        self.can_hold = true;
        self.pieces_locked = 0;
        self.lines_cleared = 0;
        self.last_event = None;
        self.status = GameStatus::Running;
        self.spawn_next();
    }

    /// Try to move the active piece by the given deltas
    fn try_shift(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.at(active.position.offset(d_row, d_col));
        if moved.collides(&self.board) {
            return false;
        }

        self.active = Some(moved);
        true
    }

    /// Rotate clockwise in place; rejected if the result collides (no kicks)
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = Tetromino {
            shape: rotate(&active.shape),
            ..active
        };
        if rotated.collides(&self.board) {
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Drop to the lowest legal row and lock immediately
    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        self.active = Some(active.at(active.landing_position(&self.board)));
        self.lock_active();
        true
    }

    /// Swap active piece with hold slot
    fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let stored = HeldPiece {
            kind: active.kind,
            shape: active.shape,
        };
        let (shape, kind) = match self.hold.replace(stored) {
            Some(previous) => (previous.shape, previous.kind),
            None => self.bag.next(),
        };

        self.can_hold = false;
        self.install(Tetromino::spawn(kind, shape));
        true
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.shape, active.position);
        let rows_cleared = self.board.clear_lines();

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.lines_cleared = self.lines_cleared.wrapping_add(rows_cleared.len() as u32);

        let spawned = self.spawn_next();

        self.last_event = Some(LockEvent {
            kind: active.kind,
            position: active.position,
            rows_cleared,
            game_over: !spawned,
        });
    }

    /// Draw the next piece from the bag and install it at spawn
    fn spawn_next(&mut self) -> bool {
        let (shape, kind) = self.bag.next();
        if !self.install(Tetromino::spawn(kind, shape)) {
            return false;
        }
        self.can_hold = true;
        true
    }

    /// Install a piece as the active one, or end the game if it collides
    fn install(&mut self, piece: Tetromino) -> bool {
        if piece.collides(&self.board) {
            self.active = None;
            self.status = GameStatus::GameOver;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Where the active piece would come to rest if hard-dropped
    pub fn ghost_position(&self) -> Option<Position> {
        let active = self.active?;
        Some(active.landing_position(&self.board))
    }

    /// Fill a caller-owned snapshot (allocation-free)
    pub fn snapshot_into(&self, out: &mut RenderSnapshot) {
        let ghost = self.ghost_position();
        snapshot::render_grid(&self.board, self.active.as_ref(), ghost, &mut out.grid);

        out.hold = self.hold_piece();
        out.status = self.status;
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_row = ghost.map(|p| p.row);
        out.can_hold = self.can_hold;
        out.episode_id = self.episode_id;
        out.pieces_locked = self.pieces_locked;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let mut s = RenderSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Rows that are currently full (always empty between events)
    pub fn full_rows(&self) -> ArrayVec<usize, BOARD_ROWS> {
        (0..BOARD_ROWS)
            .filter(|&row| self.board.is_row_full(row))
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
