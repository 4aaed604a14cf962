//! Dashboard Configuration
//!
//! Timing constants and a few behaviour switches. Every field has a default,
//! so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_ASSISTANT_REPLY: &str = "Thanks for your message! I'm still learning, but I can help you organize your tasks, suggest priorities, and remind you of upcoming deadlines.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Lifetime of a user-posted notification before it slides out
    pub notification_ttl_ms: u32,
    /// Entrance delay step between seeded notifications
    pub notification_stagger_ms: u32,
    /// Delay before the assistant answers a message
    pub assistant_reply_delay_ms: u32,
    /// Deferral before a picked-up card is faded
    pub drag_fade_delay_ms: u32,
    /// Opacity of the card while it is being dragged
    pub dragged_card_opacity: f64,
    /// Let notifications present at load expire like posted ones
    pub expire_seeded_notifications: bool,
    /// Canned assistant answer
    pub assistant_reply: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 3000,
            notification_stagger_ms: 200,
            assistant_reply_delay_ms: 500,
            drag_fade_delay_ms: 0,
            dragged_card_opacity: 0.4,
            expire_seeded_notifications: false,
            assistant_reply: DEFAULT_ASSISTANT_REPLY.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.notification_ttl_ms, 3000);
        assert_eq!(config.assistant_reply_delay_ms, 500);
    }

    #[test]
    fn test_partial_override() {
        let config = DashboardConfig::from_json(r#"{"notification_ttl_ms": 1200, "expire_seeded_notifications": true}"#).unwrap();
        assert_eq!(config.notification_ttl_ms, 1200);
        assert!(config.expire_seeded_notifications);
        assert_eq!(config.notification_stagger_ms, 200);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = DashboardConfig::from_json("{ notification_ttl_ms: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid dashboard config"));
    }
}
