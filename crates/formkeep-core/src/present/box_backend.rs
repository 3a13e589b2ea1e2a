//! BoxFormBackend -- object-safe dynamic dispatch wrapper for FormBackend.
//!
//! 1. Define an object-safe `FormBackendDyn` trait with boxed futures
//! 2. Blanket-impl `FormBackendDyn` for all `T: FormBackend`
//! 3. `BoxFormBackend` wraps `Box<dyn FormBackendDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use formkeep_types::error::PresentError;
use formkeep_types::form::{ActionForm, MessageForm, ModalForm};
use formkeep_types::player::PlayerId;
use formkeep_types::response::{ActionResponse, MessageResponse, ModalResponse, PresentOutcome};

use super::backend::FormBackend;

/// Object-safe version of [`FormBackend`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn FormBackendDyn`).
/// A blanket implementation is provided for all types implementing `FormBackend`.
pub trait FormBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn show_action_boxed<'a>(
        &'a self,
        player: PlayerId,
        form: &'a ActionForm,
    ) -> Pin<Box<dyn Future<Output = Result<PresentOutcome<ActionResponse>, PresentError>> + Send + 'a>>;

    fn show_message_boxed<'a>(
        &'a self,
        player: PlayerId,
        form: &'a MessageForm,
    ) -> Pin<Box<dyn Future<Output = Result<PresentOutcome<MessageResponse>, PresentError>> + Send + 'a>>;

    fn show_modal_boxed<'a>(
        &'a self,
        player: PlayerId,
        form: &'a ModalForm,
    ) -> Pin<Box<dyn Future<Output = Result<PresentOutcome<ModalResponse>, PresentError>> + Send + 'a>>;
}

/// Blanket implementation: any `FormBackend` automatically implements `FormBackendDyn`.
impl<T: FormBackend> FormBackendDyn for T {
    fn name(&self) -> &str {
        FormBackend::name(self)
    }

    fn show_action_boxed<'a>(
        &'a self,
        player: PlayerId,
        form: &'a ActionForm,
    ) -> Pin<Box<dyn Future<Output = Result<PresentOutcome<ActionResponse>, PresentError>> + Send + 'a>>
    {
        Box::pin(self.show_action(player, form))
    }

    fn show_message_boxed<'a>(
        &'a self,
        player: PlayerId,
        form: &'a MessageForm,
    ) -> Pin<Box<dyn Future<Output = Result<PresentOutcome<MessageResponse>, PresentError>> + Send + 'a>>
    {
        Box::pin(self.show_message(player, form))
    }

    fn show_modal_boxed<'a>(
        &'a self,
        player: PlayerId,
        form: &'a ModalForm,
    ) -> Pin<Box<dyn Future<Output = Result<PresentOutcome<ModalResponse>, PresentError>> + Send + 'a>>
    {
        Box::pin(self.show_modal(player, form))
    }
}

/// Type-erased form backend.
///
/// Wraps any `FormBackend` implementation behind dynamic dispatch, so a
/// presenter can hold whichever backend the host wires in at runtime.
///
/// Since `FormBackend` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxFormBackend` provides equivalent methods that delegate
/// to the inner `FormBackendDyn` trait object.
pub struct BoxFormBackend {
    inner: Box<dyn FormBackendDyn + Send + Sync>,
}

impl BoxFormBackend {
    /// Wrap a concrete `FormBackend` in a type-erased box.
    pub fn new<T: FormBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    /// Short backend name for log attribution.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Put an action form in front of the player.
    pub async fn show_action(
        &self,
        player: PlayerId,
        form: &ActionForm,
    ) -> Result<PresentOutcome<ActionResponse>, PresentError> {
        self.inner.show_action_boxed(player, form).await
    }

    /// Put a message form in front of the player.
    pub async fn show_message(
        &self,
        player: PlayerId,
        form: &MessageForm,
    ) -> Result<PresentOutcome<MessageResponse>, PresentError> {
        self.inner.show_message_boxed(player, form).await
    }

    /// Put a modal form in front of the player.
    pub async fn show_modal(
        &self,
        player: PlayerId,
        form: &ModalForm,
    ) -> Result<PresentOutcome<ModalResponse>, PresentError> {
        self.inner.show_modal_boxed(player, form).await
    }
}
