use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, Cell, Marker};
use crate::engine::errors::EngineError;
use crate::engine::strategy::Strategy;
use crate::engine::RandomSource;
use crate::eval::at_risk_cell;

/// Выбор клетки компьютером. Приоритет строгий:
///   1. закрыть линию, где у соперника две клетки и третья свободна;
///   2. центр, если свободен;
///   3. случайная свободная клетка.
///
/// Своих выигрышных линий компьютер не ищет.
pub fn choose_move<R: RandomSource>(
    board: &Board,
    own: Marker,
    opponent: Marker,
    rng: &mut R,
) -> Result<Cell, EngineError> {
    if own == opponent {
        return Err(EngineError::Internal("маркеры сторон совпадают"));
    }

    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(EngineError::BoardFull);
    }

    if let Some(cell) = at_risk_cell(board, opponent) {
        return Ok(cell);
    }

    if board.is_empty_cell(Cell::CENTER) {
        return Ok(Cell::CENTER);
    }

    let idx = rng.below(empty.len()).min(empty.len() - 1);
    Ok(empty[idx])
}

/// Соперник в Tic-Tac-Toe с фиксированными маркерами на матч.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockingOpponent {
    pub own: Marker,
    pub opponent: Marker,
}

impl BlockingOpponent {
    pub fn new(own: Marker) -> Self {
        Self {
            own,
            opponent: own.other(),
        }
    }
}

impl Strategy for BlockingOpponent {
    type View = Board;
    type Action = Cell;

    fn choose<R: RandomSource>(&self, board: &Board, rng: &mut R) -> Result<Cell, EngineError> {
        choose_move(board, self.own, self.opponent, rng)
    }
}
