use crate::domain::board::{Board, Cell, Marker};

/// Восемь выигрышных линий: строки, столбцы, диагонали.
/// Порядок важен: блокировка ищет первую опасную линию.
pub const WINNING_LINES: [[u8; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

fn line_cells(line: &[u8; 3]) -> impl Iterator<Item = Cell> + '_ {
    line.iter().filter_map(|i| Cell::new(*i))
}

/// Есть ли линия, целиком занятая `marker`.
pub fn is_won(board: &Board, marker: Marker) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line_cells(line).all(|c| board.get(c) == Some(marker)))
}

/// Свободных клеток не осталось.
pub fn is_full(board: &Board) -> bool {
    Cell::all().all(|c| !board.is_empty_cell(c))
}

/// Победивший маркер, если он есть.
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::X, Marker::O]
        .into_iter()
        .find(|m| is_won(board, *m))
}

/// Итог раунда на доске: `Some(Some(m))` – победа `m`,
/// `Some(None)` – ничья, `None` – раунд продолжается.
pub fn round_result(board: &Board) -> Option<Option<Marker>> {
    match winner(board) {
        Some(m) => Some(Some(m)),
        None if is_full(board) => Some(None),
        None => None,
    }
}

/// Свободная клетка первой линии, где у `marker` ровно две клетки,
/// а третья пустая.
pub fn at_risk_cell(board: &Board, marker: Marker) -> Option<Cell> {
    WINNING_LINES.iter().find_map(|line| {
        let cells: Vec<Cell> = line_cells(line).collect();
        let owned = cells.iter().filter(|c| board.get(**c) == Some(marker)).count();
        let empty: Vec<Cell> = cells
            .iter()
            .copied()
            .filter(|c| board.is_empty_cell(*c))
            .collect();

        match (owned, empty.as_slice()) {
            (2, [free]) => Some(*free),
            _ => None,
        }
    })
}
