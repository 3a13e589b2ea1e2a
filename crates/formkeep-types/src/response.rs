//! Presentation outcomes.
//!
//! A show call either fails at the host level (`PresentError`) or ends
//! in a `PresentOutcome`: the player submitted the form, or the host
//! canceled it for one of a closed set of reasons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why the host canceled a presentation without a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// The player's interface cannot currently accept a new form.
    UserBusy,
    /// The player dismissed the form without submitting.
    UserClosed,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::UserBusy => write!(f, "user_busy"),
            CancelReason::UserClosed => write!(f, "user_closed"),
        }
    }
}

/// Terminal result of one presentation attempt.
///
/// `R` is the kind-specific submission payload. A cancellation is a
/// normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentOutcome<R> {
    Submitted(R),
    Canceled(CancelReason),
}

impl<R> PresentOutcome<R> {
    /// True for a busy cancellation -- the only outcome a forced form
    /// retries on.
    pub fn is_busy(&self) -> bool {
        matches!(self, PresentOutcome::Canceled(CancelReason::UserBusy))
    }

    pub fn submitted(&self) -> Option<&R> {
        match self {
            PresentOutcome::Submitted(payload) => Some(payload),
            PresentOutcome::Canceled(_) => None,
        }
    }

    pub fn into_submitted(self) -> Option<R> {
        match self {
            PresentOutcome::Submitted(payload) => Some(payload),
            PresentOutcome::Canceled(_) => None,
        }
    }
}

/// Payload of a submitted action form: the pressed button's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub selection: u32,
}

/// Payload of a submitted message form: 0 for `button1`, 1 for `button2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub selection: u32,
}

/// Payload of a submitted modal form: one value per element, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalResponse {
    pub values: Vec<ModalValue>,
}

/// A single submitted modal value.
///
/// Untagged so a value array serializes the way hosts log it:
/// `[true, 3.0, "text"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModalValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_busy_only_for_busy_cancellation() {
        let busy: PresentOutcome<ActionResponse> =
            PresentOutcome::Canceled(CancelReason::UserBusy);
        let closed: PresentOutcome<ActionResponse> =
            PresentOutcome::Canceled(CancelReason::UserClosed);
        let submitted = PresentOutcome::Submitted(ActionResponse { selection: 0 });

        assert!(busy.is_busy());
        assert!(!closed.is_busy());
        assert!(!submitted.is_busy());
    }

    #[test]
    fn test_submitted_accessors() {
        let outcome = PresentOutcome::Submitted(MessageResponse { selection: 1 });
        assert_eq!(outcome.submitted().map(|r| r.selection), Some(1));
        assert_eq!(outcome.into_submitted().map(|r| r.selection), Some(1));

        let canceled: PresentOutcome<MessageResponse> =
            PresentOutcome::Canceled(CancelReason::UserClosed);
        assert!(canceled.submitted().is_none());
    }

    #[test]
    fn test_cancel_reason_display() {
        assert_eq!(CancelReason::UserBusy.to_string(), "user_busy");
        assert_eq!(CancelReason::UserClosed.to_string(), "user_closed");
    }

    #[test]
    fn test_modal_values_serialize_untagged() {
        let values = vec![
            ModalValue::Bool(true),
            ModalValue::Number(3.0),
            ModalValue::Text("steve".to_string()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[true,3.0,"steve"]"#);
    }

    #[test]
    fn test_modal_values_deserialize_untagged() {
        let values: Vec<ModalValue> = serde_json::from_str(r#"[false,0.5,"hi"]"#).unwrap();
        assert_eq!(values[0], ModalValue::Bool(false));
        assert_eq!(values[1], ModalValue::Number(0.5));
        assert_eq!(values[2], ModalValue::Text("hi".to_string()));
    }
}
