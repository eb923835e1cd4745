use crate::domain::board::Cell;
use crate::domain::participant::Side;

use thiserror::Error;

/// Ошибки движка: нарушение контракта между фронтом и ядром.
/// Пользовательский ввод сюда не доходит – его проверяет фронт.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Матч уже завершён")]
    MatchComplete,

    #[error("Раунд не активен")]
    RoundNotInProgress,

    #[error("Раунд уже идёт")]
    RoundInProgress,

    #[error("Сейчас не ход стороны {0:?}")]
    NotYourTurn(Side),

    #[error("Клетка {0} уже занята")]
    CellOccupied(Cell),

    #[error("На доске нет свободных клеток")]
    BoardFull,

    #[error("Раздача уже завершена")]
    RoundResolved,

    #[error("Сейчас не ход игрока")]
    NotPlayerTurn,

    #[error("Сейчас не ход дилера")]
    NotDealerTurn,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
