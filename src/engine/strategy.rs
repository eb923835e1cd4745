use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Стратегия компьютерного соперника.
///
/// `View` – что соперник видит (ничего для RPS, доска для Tic-Tac-Toe,
/// своя рука для дилера), `Action` – что он выбирает.
pub trait Strategy {
    type View: ?Sized;
    type Action;

    fn choose<R: RandomSource>(
        &self,
        view: &Self::View,
        rng: &mut R,
    ) -> Result<Self::Action, EngineError>;
}
