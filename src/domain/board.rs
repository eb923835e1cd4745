use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Маркер Tic-Tac-Toe.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Маркер соперника.
    pub const fn other(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

impl FromStr for Marker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Marker::X),
            "o" | "O" => Ok(Marker::O),
            other => Err(format!("Invalid marker: {other}")),
        }
    }
}

/// Номер клетки 1..=9 (слева направо, сверху вниз).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Cell(u8);

impl Cell {
    pub const CENTER: Cell = Cell(5);

    pub fn new(index: u8) -> Option<Cell> {
        (1..=9).contains(&index).then_some(Cell(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Cell> {
        (1..=9).map(Cell)
    }

    fn slot(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Cell::new)
            .ok_or_else(|| format!("Invalid cell: {s}"))
    }
}

/// Доска 3x3. Проверки выигрыша живут в `eval::board`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Marker>; 9],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, cell: Cell) -> Option<Marker> {
        self.cells[cell.slot()]
    }

    pub fn is_empty_cell(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Поставить маркер. Возвращает false, если клетка уже занята.
    pub fn place(&mut self, cell: Cell, marker: Marker) -> bool {
        let slot = &mut self.cells[cell.slot()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(marker);
        true
    }

    /// Свободные клетки по возрастанию номера.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|c| self.is_empty_cell(*c)).collect()
    }

    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|c| **c == Some(marker)).count()
    }

    /// Содержимое по порядку 1..9 (для DTO/рендера).
    pub fn cells(&self) -> &[Option<Marker>; 9] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells = [None; 9];
    }
}
