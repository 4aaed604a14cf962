//! Theme Switch

use serde::{Deserialize, Serialize};

const MOON_ICON: &str = "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z";
const SHIELD_ICON: &str = "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value of the `data-theme` attribute
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// SVG path of the toggle button icon
    pub fn icon_path(self) -> &'static str {
        match self {
            Theme::Light => SHIELD_ICON,
            Theme::Dark => MOON_ICON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme.as_str(), "light");
        assert!(theme.toggled().is_dark());
        assert_eq!(theme.toggled().toggled(), theme);
        assert_ne!(theme.icon_path(), theme.toggled().icon_path());
    }
}
