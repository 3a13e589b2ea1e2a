//! Retry-while-busy presentation decorator.
//!
//! Wraps any `FormBackend` and re-issues a show call while the target
//! player's interface reports busy, provided the descriptor opted in via
//! its `force` flag. Everything else -- submissions, closes, busy
//! without force, backend errors -- passes straight through.

use std::future::Future;

use tokio_util::sync::CancellationToken;

use formkeep_types::error::PresentError;
use formkeep_types::form::{ActionForm, MessageForm, ModalForm};
use formkeep_types::player::PlayerId;
use formkeep_types::response::{ActionResponse, MessageResponse, ModalResponse, PresentOutcome};

use super::box_backend::BoxFormBackend;
use super::policy::RetryPolicy;

/// Presents forms through a wrapped backend, retrying busy outcomes.
///
/// Each call runs an independent retry loop over call-local state only;
/// concurrent calls (same player or not) never interact. A forced call
/// suspends until the player's interface frees up, the backend fails, or
/// the optional attempt cap / cancellation token stops the loop.
pub struct ResilientPresenter {
    backend: BoxFormBackend,
    policy: RetryPolicy,
    cancel: Option<CancellationToken>,
}

impl ResilientPresenter {
    /// Wrap a backend with the default policy (one-second delay, no cap).
    pub fn new(backend: BoxFormBackend) -> Self {
        Self {
            backend,
            policy: RetryPolicy::default(),
            cancel: None,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Stop waiting between retries once `cancel` fires. The call then
    /// returns the busy outcome it last observed instead of an error.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Name of the wrapped backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Show an action form, retrying while busy if `form.force` is set.
    pub async fn show_action(
        &self,
        player: PlayerId,
        form: &ActionForm,
    ) -> Result<PresentOutcome<ActionResponse>, PresentError> {
        self.run(player, form.force, "action", || {
            self.backend.show_action(player, form)
        })
        .await
    }

    /// Show a message form, retrying while busy if `form.force` is set.
    pub async fn show_message(
        &self,
        player: PlayerId,
        form: &MessageForm,
    ) -> Result<PresentOutcome<MessageResponse>, PresentError> {
        self.run(player, form.force, "message", || {
            self.backend.show_message(player, form)
        })
        .await
    }

    /// Show a modal form, retrying while busy if `form.force` is set.
    pub async fn show_modal(
        &self,
        player: PlayerId,
        form: &ModalForm,
    ) -> Result<PresentOutcome<ModalResponse>, PresentError> {
        self.run(player, form.force, "modal", || {
            self.backend.show_modal(player, form)
        })
        .await
    }

    /// Drive one show call to a terminal outcome.
    ///
    /// Loop state is the attempt count and the latest backend outcome,
    /// nothing shared. Backend errors propagate via `?` untouched.
    async fn run<R, F, Fut>(
        &self,
        player: PlayerId,
        force: bool,
        kind: &'static str,
        attempt: F,
    ) -> Result<PresentOutcome<R>, PresentError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<PresentOutcome<R>, PresentError>>,
    {
        let mut attempts: u32 = 0;
        loop {
            let outcome = attempt().await?;
            attempts += 1;

            if !(force && outcome.is_busy()) {
                return Ok(outcome);
            }

            if let Some(max) = self.policy.max_attempts
                && attempts >= max.get()
            {
                tracing::debug!(
                    backend = self.backend.name(),
                    %player,
                    kind,
                    attempts,
                    "Attempt budget spent, returning busy outcome"
                );
                return Ok(outcome);
            }

            tracing::debug!(
                backend = self.backend.name(),
                %player,
                kind,
                attempts,
                delay_ms = self.policy.delay.as_millis() as u64,
                "Player interface busy, retrying"
            );

            match &self.cancel {
                Some(cancel) => {
                    tokio::select! {
                        () = cancel.cancelled() => return Ok(outcome),
                        () = tokio::time::sleep(self.policy.delay) => {}
                    }
                }
                None => tokio::time::sleep(self.policy.delay).await,
            }
        }
    }
}
