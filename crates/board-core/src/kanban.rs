//! Kanban Board
//!
//! Columns of cards, the geometric insertion-point search used while a card
//! is dragged, and the atomic move that applies it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

pub type CardId = u32;
pub type ColumnId = u32;

/// A draggable unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub tag: String,
    pub due: String,
}

impl Card {
    pub fn new(id: CardId, title: impl Into<String>, tag: impl Into<String>, due: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tag: tag.into(),
            due: due.into(),
        }
    }
}

/// A kanban column holding an ordered list of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cards: Vec<Card>,
    /// Count shown in the column header. Only `Board::recompute_counts`
    /// writes it, so it may lag behind `cards` while a drag is live.
    pub count: usize,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id,
            title: title.into(),
            cards,
            count: 0,
        }
    }
}

/// Vertical extent of a rendered card, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardBox {
    pub id: CardId,
    pub top: f64,
    pub height: f64,
}

impl CardBox {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where a moved card lands inside its new column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertionPoint {
    /// Immediately before the given card
    Before(CardId),
    /// After every existing card
    End,
}

/// Pick the card the dragged one should be inserted before.
///
/// The winner is the card whose midpoint lies below the pointer and closest
/// to it. Ties keep the first card in container order. The dragged card
/// itself may still be listed in `boxes`; it is skipped.
pub fn compute_insertion_point(boxes: &[CardBox], pointer_y: f64, dragged: Option<CardId>) -> InsertionPoint {
    let mut closest: Option<(f64, CardId)> = None;
    for candidate in boxes.iter().filter(|b| Some(b.id) != dragged) {
        let offset = pointer_y - candidate.midpoint();
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, candidate.id));
        }
    }
    closest.map_or(InsertionPoint::End, |(_, id)| InsertionPoint::Before(id))
}

/// All kanban columns, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Build a board, rejecting column or card ids that appear twice, and
    /// set the initial counts.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut column_ids = HashSet::new();
        for column in &columns {
            if !column_ids.insert(column.id) {
                return Err(BoardError::DuplicateColumn(column.id));
            }
        }
        let mut seen = HashSet::new();
        for card in columns.iter().flat_map(|c| c.cards.iter()) {
            if !seen.insert(card.id) {
                return Err(BoardError::DuplicateCard(card.id));
            }
        }
        let mut board = Self { columns };
        board.recompute_counts();
        Ok(board)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// (column index, position) of a card
    fn locate(&self, card: CardId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(ci, column)| {
            column.cards.iter().position(|c| c.id == card).map(|pos| (ci, pos))
        })
    }

    pub fn column_of(&self, card: CardId) -> Option<ColumnId> {
        self.locate(card).map(|(ci, _)| self.columns[ci].id)
    }

    pub fn contains_card(&self, card: CardId) -> bool {
        self.locate(card).is_some()
    }

    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// Move `card` into `column` at `point`.
    ///
    /// All lookups happen before the board is touched, so an error leaves it
    /// unchanged. Returns whether the card actually changed place.
    pub fn apply_insertion(&mut self, column: ColumnId, point: InsertionPoint, card: CardId) -> Result<bool> {
        let target = self
            .columns
            .iter()
            .position(|c| c.id == column)
            .ok_or(BoardError::UnknownColumn(column))?;
        let (source, position) = self.locate(card).ok_or(BoardError::UnknownCard(card))?;

        if point == InsertionPoint::Before(card) {
            return Ok(false);
        }
        if let InsertionPoint::Before(anchor) = point {
            if !self.columns[target].cards.iter().any(|c| c.id == anchor) {
                return Err(BoardError::UnknownCard(anchor));
            }
        }

        let moving = self.columns[source].cards.remove(position);
        let dest = &mut self.columns[target].cards;
        let index = match point {
            InsertionPoint::Before(anchor) => dest.iter().position(|c| c.id == anchor).unwrap_or(dest.len()),
            InsertionPoint::End => dest.len(),
        };
        dest.insert(index, moving);

        Ok(!(source == target && index == position))
    }

    /// Sync every column's displayed count with its content
    pub fn recompute_counts(&mut self) {
        for column in &mut self.columns {
            column.count = column.cards.len();
        }
    }
}
