use serde::{Deserialize, Serialize};

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry<E> {
    pub index: u32,
    pub event: E,
}

/// История матча/раздачи: только добавление, порядок вставки сохраняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct History<E> {
    entries: Vec<HistoryEntry<E>>,
}

impl<E> History<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, event: E) {
        let index = self.entries.len() as u32;
        self.entries.push(HistoryEntry { index, event });
    }

    pub fn entries(&self) -> &[HistoryEntry<E>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().map(|e| &e.event)
    }

    pub fn last(&self) -> Option<&E> {
        self.entries.last().map(|e| &e.event)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for History<E> {
    fn default() -> Self {
        Self::new()
    }
}
