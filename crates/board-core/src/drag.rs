//! Drag Session
//!
//! At most one card is being moved at any instant.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::kanban::CardId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    subject: Option<CardId>,
    faded: bool,
}

impl DragSession {
    pub fn begin(&mut self, card: CardId) -> Result<()> {
        if let Some(active) = self.subject {
            return Err(BoardError::DragInProgress { active });
        }
        self.subject = Some(card);
        self.faded = false;
        Ok(())
    }

    /// Mark the subject as faded if `card` is still the one being dragged.
    /// A deferred fade for an already finished drag returns false.
    pub fn fade(&mut self, card: CardId) -> bool {
        if self.subject == Some(card) {
            self.faded = true;
            true
        } else {
            false
        }
    }

    /// Clear the session, returning the card that was being dragged
    pub fn end(&mut self) -> Option<CardId> {
        self.faded = false;
        self.subject.take()
    }

    pub fn subject(&self) -> Option<CardId> {
        self.subject
    }

    pub fn is_active(&self) -> bool {
        self.subject.is_some()
    }

    pub fn is_faded(&self, card: CardId) -> bool {
        self.faded && self.subject == Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_subject() {
        let mut session = DragSession::default();
        session.begin(3).unwrap();
        assert!(matches!(session.begin(4), Err(BoardError::DragInProgress { active: 3 })));
        assert_eq!(session.subject(), Some(3));
    }

    #[test]
    fn test_stale_fade_is_ignored() {
        let mut session = DragSession::default();
        session.begin(3).unwrap();
        assert_eq!(session.end(), Some(3));
        assert!(!session.fade(3));
        assert!(!session.is_faded(3));
    }

    #[test]
    fn test_end_restores_opacity() {
        let mut session = DragSession::default();
        session.begin(8).unwrap();
        assert!(session.fade(8));
        assert!(session.is_faded(8));
        session.end();
        assert!(!session.is_faded(8));
        assert!(!session.is_active());
        assert_eq!(session.end(), None);
    }
}
