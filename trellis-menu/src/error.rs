//! Error types for menu configuration and context wiring.
use thiserror::Error;

/// Errors raised while configuring or wiring a menu.
///
/// Item derivations themselves never fail; these surface only at the edges
/// (loading configuration, or rendering an item outside of a menu).
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("{0} rendered outside of a menu context")]
    MissingContext(&'static str),
    #[error("invalid class prefix {0:?}: expected ASCII letters, digits, '-' or '_'")]
    InvalidPrefix(String),
    #[error("menu configuration could not be parsed: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::MenuError;

    #[test]
    fn messages_name_the_problem() {
        let missing = MenuError::MissingContext("MenuItem");
        assert_eq!(
            missing.to_string(),
            "MenuItem rendered outside of a menu context"
        );
        let prefix = MenuError::InvalidPrefix("a b".into());
        assert!(prefix.to_string().contains("\"a b\""));
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let menu_err = MenuError::from(err);
        assert!(matches!(menu_err, MenuError::Config(_)));
    }
}
