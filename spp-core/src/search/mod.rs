//! This module contains local search operators and the descent procedure which combines them.

use crate::models::{Cost, Instance, Solution};

mod exchange_zero_one;
pub use self::exchange_zero_one::ZeroOneExchange;

mod exchange_one_one;
pub use self::exchange_one_one::OneOneExchange;

mod exchange_two_one;
pub use self::exchange_two_one::TwoOneExchange;

mod descent;
pub use self::descent::*;

/// Specifies behavior of a local search move operator which explores a neighborhood of the
/// solution and applies an improving move if one exists.
pub trait MoveOperator {
    /// Tries to find a move which strictly increases the objective and applies it to the solution.
    /// When `is_deep` is set, the whole neighborhood is scanned and the best move is applied,
    /// otherwise the first improving move is taken. Returns true if the solution was changed.
    fn try_apply(&self, instance: &Instance, solution: &mut Solution, is_deep: bool) -> bool;
}

/// Selects the first move (`is_deep` is false) or the move with the largest gain, preferring the
/// earliest one on ties.
fn select_move<M>(mut moves: impl Iterator<Item = (Cost, M)>, is_deep: bool) -> Option<M> {
    if is_deep {
        moves
            .fold(None, |best: Option<(Cost, M)>, (gain, candidate)| match best {
                Some((best_gain, _)) if best_gain >= gain => best,
                _ => Some((gain, candidate)),
            })
            .map(|(_, candidate)| candidate)
    } else {
        moves.next().map(|(_, candidate)| candidate)
    }
}
