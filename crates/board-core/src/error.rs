//! Board Errors
//!
//! Every fallible controller operation reports one of these.

use thiserror::Error;

use crate::kanban::{CardId, ColumnId};

/// Errors raised by the dashboard controller and its parts
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("unknown card {0}")]
    UnknownCard(CardId),

    #[error("unknown column {0}")]
    UnknownColumn(ColumnId),

    #[error("unknown task {0}")]
    UnknownTask(u32),

    #[error("unknown toggle indicator {0}")]
    UnknownIndicator(u32),

    #[error("'{option}' is not a member of the {group} group")]
    UnknownOption { group: &'static str, option: String },

    #[error("card {active} is already being dragged")]
    DragInProgress { active: CardId },

    #[error("card id {0} appears more than once on the board")]
    DuplicateCard(CardId),

    #[error("column id {0} appears more than once on the board")]
    DuplicateColumn(ColumnId),

    #[error("{list} item id {id} appears more than once")]
    DuplicateItem { list: &'static str, id: u32 },

    #[error("selection group '{0}' has no options")]
    EmptyGroup(&'static str),

    #[error("invalid dashboard config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
