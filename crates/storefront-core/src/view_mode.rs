use serde::{Deserialize, Serialize};

/// How densely the renderer lays out the catalog.
///
/// Decided once when the output context is known (configuration or a
/// command-line flag) and read by the renderer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every column: id, category, model, brand, color, storage, price.
    #[default]
    Full,
    /// Model, storage and price only, for narrow terminals.
    Compact,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Full => write!(f, "full"),
            ViewMode::Compact => write!(f, "compact"),
        }
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(ViewMode::Full),
            "compact" => Ok(ViewMode::Compact),
            other => Err(format!("unknown view mode '{other}'; expected full or compact")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("full".parse::<ViewMode>(), Ok(ViewMode::Full));
        assert_eq!("compact".parse::<ViewMode>(), Ok(ViewMode::Compact));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "mobile".parse::<ViewMode>().unwrap_err();
        assert!(err.contains("mobile"));
    }

    #[test]
    fn display_matches_parse() {
        assert_eq!(ViewMode::Compact.to_string(), "compact");
        assert_eq!(ViewMode::Full.to_string().parse(), Ok(ViewMode::Full));
    }
}
