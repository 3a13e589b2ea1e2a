//! FormBackend trait definition.
//!
//! This is the unmodified host primitive for putting a form in front of
//! a player. Uses native async fn in traits (RPITIT, Rust 2024 edition);
//! `BoxFormBackend` provides the object-safe wrapper.

use formkeep_types::error::PresentError;
use formkeep_types::form::{ActionForm, MessageForm, ModalForm};
use formkeep_types::player::PlayerId;
use formkeep_types::response::{ActionResponse, MessageResponse, ModalResponse, PresentOutcome};

/// Trait for host form backends.
///
/// One method per form kind; the kinds differ only in the payload shape
/// of their outcome. A `Canceled` outcome is a normal return -- `Err` is
/// reserved for host-level faults, which callers must not retry.
///
/// Implementations live in formkeep-infra (e.g., `InMemoryHost`) or in
/// the embedding host's engine glue.
pub trait FormBackend: Send + Sync {
    /// Short backend name for log attribution (e.g., "memory").
    fn name(&self) -> &str;

    /// Put an action form in front of the player.
    fn show_action(
        &self,
        player: PlayerId,
        form: &ActionForm,
    ) -> impl std::future::Future<Output = Result<PresentOutcome<ActionResponse>, PresentError>> + Send;

    /// Put a message form in front of the player.
    fn show_message(
        &self,
        player: PlayerId,
        form: &MessageForm,
    ) -> impl std::future::Future<Output = Result<PresentOutcome<MessageResponse>, PresentError>> + Send;

    /// Put a modal form in front of the player.
    fn show_modal(
        &self,
        player: PlayerId,
        form: &ModalForm,
    ) -> impl std::future::Future<Output = Result<PresentOutcome<ModalResponse>, PresentError>> + Send;
}
