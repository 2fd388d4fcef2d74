//! AI turn execution
//!
//! The search itself is synchronous and CPU bound. [`compute_ai_move`] runs it
//! on the calling thread; [`compute_ai_move_task`] waits out the pacing delay
//! and then moves the search onto tokio's blocking pool so the async front
//! end stays responsive. [`play_ai_turn`] ties that to a [`Session`].

use std::time::{Duration, Instant};

use chess_engine::{search_best_move, Board, Color, Move};
use tracing::{debug, info, warn};

use super::resource::AIDifficulty;
use crate::game::error::{GameError, GameResult};
use crate::game::session::Session;

/// AI move with engine statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AIMove {
    pub mv: Move,
    pub score: i32,
    pub depth: u32,
    pub nodes_searched: u64,
    pub cutoffs: u64,
    pub thinking_time: f32,
}

/// Statistics of the last AI move, for display
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AIStatistics {
    pub last_score: i32,
    pub last_depth: u32,
    pub last_nodes: u64,
    pub thinking_time: f32,
    pub moves_played: u32,
}

impl AIStatistics {
    pub fn record(&mut self, ai_move: &AIMove) {
        self.last_score = ai_move.score;
        self.last_depth = ai_move.depth;
        self.last_nodes = ai_move.nodes_searched;
        self.thinking_time = ai_move.thinking_time;
        self.moves_played += 1;
    }
}

/// Search `board` for `color` at the difficulty's depth
///
/// # Returns
///
/// `None` when `color` has no legal move.
pub fn compute_ai_move(board: &Board, color: Color, difficulty: AIDifficulty) -> Option<AIMove> {
    let depth = difficulty.depth();
    let start = Instant::now();

    debug!("[AI] Searching for {} at depth {}", color, depth);
    let outcome = search_best_move(board, color, depth);
    let elapsed = start.elapsed().as_secs_f32();

    let Some(mv) = outcome.best_move else {
        warn!("[AI] No legal move for {}", color);
        return None;
    };

    info!("[AI] Best Move: {} -> {}", mv.from, mv.to);
    info!(
        "[AI] Evaluation: Score={} | Depth={} | Nodes={} | Cutoffs={} | Time={:.2}s",
        outcome.score, depth, outcome.nodes, outcome.cutoffs, elapsed
    );

    Some(AIMove {
        mv,
        score: outcome.score,
        depth,
        nodes_searched: outcome.nodes,
        cutoffs: outcome.cutoffs,
        thinking_time: elapsed,
    })
}

/// Wait `delay`, then search on the blocking pool
///
/// # Errors
///
/// - [`GameError::AiTask`] if the blocking task panicked or was cancelled
/// - [`GameError::GameOver`] if `color` has no legal move
pub async fn compute_ai_move_task(
    board: Board,
    color: Color,
    difficulty: AIDifficulty,
    delay: Duration,
) -> GameResult<AIMove> {
    info!(
        "[AI] AI Color: {} | Difficulty: {} | Delay: {}ms",
        color,
        difficulty,
        delay.as_millis()
    );

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let result = tokio::task::spawn_blocking(move || compute_ai_move(&board, color, difficulty))
        .await
        .map_err(|e| GameError::AiTask {
            message: e.to_string(),
        })?;

    result.ok_or(GameError::GameOver {
        status: chess_engine::game_status(&board, color),
    })
}

/// Play the AI's move if it is the AI's turn
///
/// # Returns
///
/// The applied move, or `None` when it wasn't the AI's turn.
///
/// # Examples
///
/// ```rust,ignore
/// session.move_piece(sq("e2"), sq("e4"), None)?;
/// let reply = play_ai_turn(&mut session, Duration::from_millis(500), &mut stats).await?;
/// ```
pub async fn play_ai_turn(
    session: &mut Session,
    delay: Duration,
    stats: &mut AIStatistics,
) -> GameResult<Option<Move>> {
    if !session.is_ai_turn() {
        return Ok(None);
    }

    let color = session.side_to_move();
    let difficulty = session.ai_config().difficulty;
    let ai_move = compute_ai_move_task(*session.board(), color, difficulty, delay).await?;

    let mv = session.apply_ai_move(&ai_move)?;
    stats.record(&ai_move);
    Ok(Some(mv))
}
