//! Game state management for the Connect Four GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::{AppConfig, MAX_DIFFICULTY};
use crate::error::{ConfigError, EngineError, MoveError, PlayError};
use crate::rules::{check_win_at, scan_outcome, winning_line, GameOutcome, WIN_LENGTH};
use crate::{AIEngine, Board, MoveResult, Piece, Pos};

/// Deepest search used for hints, which run on the UI thread
pub const HINT_MAX_DEPTH: u8 = 4;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Piece },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE {
            human_color: Piece::Red,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Piece,
    pub outcome: GameOutcome,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    /// Columns played, in order. Red always moved first.
    pub move_history: Vec<usize>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub suggested_column: Option<usize>,
    pub message: Option<String>,

    /// Position the game started from
    start: Board,
    difficulty: u8,
}

impl GameState {
    /// New game starting from `board`. Red moves first, so the side to move
    /// follows from the piece count.
    pub fn new(mode: GameMode, board: Board, difficulty: u8) -> Self {
        Self {
            board: board.clone(),
            mode,
            current_turn: turn_for(&board),
            outcome: scan_outcome(&board),
            last_move: None,
            winning_line: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            suggested_column: None,
            message: None,
            start: board,
            difficulty: difficulty.clamp(1, MAX_DIFFICULTY),
        }
    }

    /// New PvE game built from the application settings
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let mode = GameMode::PvE {
            human_color: config.human_plays,
        };
        Ok(Self::new(mode, config.new_board()?, config.difficulty))
    }

    /// Start over from the starting position
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.current_turn = turn_for(&self.start);
        self.outcome = scan_outcome(&self.start);
        self.last_move = None;
        self.winning_line = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.suggested_column = None;
        self.message = None;
        info!(mode = ?self.mode, "new game");
    }

    /// Start a new game in another mode
    pub fn restart(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    #[inline]
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Set AI search depth, clamped to 1..=MAX_DIFFICULTY
    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.difficulty = difficulty.clamp(1, MAX_DIFFICULTY);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human drop into `col`
    pub fn try_drop(&mut self, col: usize) -> Result<(), PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(PlayError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(PlayError::NotYourTurn);
        }

        self.execute_move(col)?;
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, col: usize) -> Result<Pos, MoveError> {
        let color = self.current_turn;
        let pos = self.board.drop_piece(col, color).inspect_err(|err| {
            warn!(?color, col, %err, "move rejected");
        })?;

        self.move_history.push(col);
        self.last_move = Some(pos);
        self.suggested_column = None;
        self.message = None;

        self.outcome = if check_win_at(&self.board, pos) {
            self.winning_line = winning_line(&self.board, pos);
            GameOutcome::Win(color)
        } else {
            scan_outcome(&self.board)
        };

        info!(?color, col, row = pos.row, outcome = ?self.outcome, "piece dropped");

        if !self.outcome.is_over() {
            self.current_turn = color.opponent();
        }
        Ok(pos)
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let board = self.board.clone();
        let color = self.current_turn;
        let engine = AIEngine::with_depth(self.difficulty);

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking and play its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;

        match result {
            Ok(move_result) => {
                self.last_ai_result = Some(move_result);
                if let Err(err) = self.execute_move(move_result.column) {
                    self.message = Some(format!("AI move rejected: {err}"));
                }
            }
            Err(err) => {
                warn!(%err, "AI could not move");
                self.message = Some(format!("AI could not find a move: {err}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request a column suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let engine = AIEngine::with_depth(self.difficulty.min(HINT_MAX_DEPTH));
        match engine.get_move_with_stats(&self.board, self.current_turn) {
            Ok(result) => {
                self.suggested_column = Some(result.column);
                self.last_ai_result = Some(result);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Undo last move (last two in PvE, so the human is to move again)
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        let keep = self.move_history.len() - undo_count;
        let moves: Vec<usize> = self.move_history[..keep].to_vec();
        self.reset();
        self.replay(moves);
    }

    /// Replay columns from the starting position
    fn replay(&mut self, moves: Vec<usize>) {
        for col in moves {
            if self.is_game_over() {
                break;
            }
            if let Err(err) = self.execute_move(col) {
                self.message = Some(err.to_string());
                break;
            }
        }
    }
}

fn turn_for(board: &Board) -> Piece {
    if board.piece_count() % 2 == 0 {
        Piece::Red
    } else {
        Piece::Yellow
    }
}
