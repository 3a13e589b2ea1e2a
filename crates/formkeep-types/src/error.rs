//! Error types for form presentation.

use thiserror::Error;

use crate::player::PlayerId;

/// Errors surfaced by a host form backend.
///
/// Every variant is terminal for a show call: the presenter forwards
/// backend errors verbatim and never retries them. A canceled form is
/// not an error -- see `PresentOutcome`.
#[derive(Debug, Error)]
pub enum PresentError {
    /// The host primitive rejected the presentation.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// The host has no such player connected.
    #[error("player {0} is not connected")]
    PlayerNotFound(PlayerId),

    /// The host rejected a structurally invalid descriptor.
    #[error("invalid form: {0}")]
    InvalidForm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_error_display() {
        let err = PresentError::Backend {
            message: "engine shutting down".to_string(),
        };
        assert_eq!(err.to_string(), "backend error: engine shutting down");

        let err = PresentError::InvalidForm("action form has no buttons".to_string());
        assert_eq!(err.to_string(), "invalid form: action form has no buttons");
    }

    #[test]
    fn test_player_not_found_names_the_player() {
        let player = PlayerId::new();
        let err = PresentError::PlayerNotFound(player);
        assert!(err.to_string().contains(&player.to_string()));
    }
}
