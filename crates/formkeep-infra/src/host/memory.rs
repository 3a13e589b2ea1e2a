//! In-memory scripted form backend.
//!
//! `InMemoryHost` implements `FormBackend` against per-player scripts
//! instead of a real engine: tests and embedders queue the outcomes a
//! player will produce, mark the player's interface busy for a number of
//! show calls, or inject faults. Cloning the host shares the underlying
//! player table, so one handle can keep scripting while another is boxed
//! into a presenter.

use std::collections::VecDeque;
use std::sync::Arc;

use dashmap::DashMap;

use formkeep_core::present::backend::FormBackend;
use formkeep_types::error::PresentError;
use formkeep_types::form::{ActionForm, MessageForm, ModalForm};
use formkeep_types::player::PlayerId;
use formkeep_types::response::{
    ActionResponse, CancelReason, MessageResponse, ModalResponse, PresentOutcome,
};

/// Scripted state for one connected player.
///
/// A show call consumes, in order: the busy counter, then a queued
/// fault, then the kind's outcome queue. An empty queue plays as the
/// player closing the form.
#[derive(Debug, Default)]
struct PlayerScript {
    /// Show calls left that report a busy interface.
    busy_attempts: u32,
    /// Faults injected ahead of any scripted outcome.
    faults: VecDeque<PresentError>,
    action: VecDeque<PresentOutcome<ActionResponse>>,
    message: VecDeque<PresentOutcome<MessageResponse>>,
    modal: VecDeque<PresentOutcome<ModalResponse>>,
    /// Total show calls observed for this player.
    attempts: u64,
}

/// In-memory `FormBackend` driven by per-player scripts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    players: Arc<DashMap<PlayerId, PlayerScript>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            players: Arc::new(DashMap::new()),
        }
    }

    /// Register a player. Show calls for unregistered players fail with
    /// `PlayerNotFound`.
    pub fn connect(&self, player: PlayerId) {
        self.players.entry(player).or_default();
    }

    /// Drop the player and any remaining script.
    pub fn disconnect(&self, player: PlayerId) {
        self.players.remove(&player);
    }

    /// Make the player's next `n` show calls report a busy interface.
    pub fn set_busy_for(&self, player: PlayerId, n: u32) {
        if let Some(mut script) = self.players.get_mut(&player) {
            script.busy_attempts = n;
        }
    }

    /// Inject a fault, consumed ahead of any scripted outcome.
    pub fn fail_next(&self, player: PlayerId, error: PresentError) {
        if let Some(mut script) = self.players.get_mut(&player) {
            script.faults.push_back(error);
        }
    }

    pub fn queue_action(&self, player: PlayerId, outcome: PresentOutcome<ActionResponse>) {
        if let Some(mut script) = self.players.get_mut(&player) {
            script.action.push_back(outcome);
        }
    }

    pub fn queue_message(&self, player: PlayerId, outcome: PresentOutcome<MessageResponse>) {
        if let Some(mut script) = self.players.get_mut(&player) {
            script.message.push_back(outcome);
        }
    }

    pub fn queue_modal(&self, player: PlayerId, outcome: PresentOutcome<ModalResponse>) {
        if let Some(mut script) = self.players.get_mut(&player) {
            script.modal.push_back(outcome);
        }
    }

    /// Total show calls observed for the player so far.
    pub fn attempts(&self, player: PlayerId) -> u64 {
        self.players.get(&player).map(|s| s.attempts).unwrap_or(0)
    }

    /// Advance the player's script by one show call.
    fn advance<R>(
        &self,
        player: PlayerId,
        pop: impl FnOnce(&mut PlayerScript) -> Option<PresentOutcome<R>>,
    ) -> Result<PresentOutcome<R>, PresentError> {
        let mut script = self
            .players
            .get_mut(&player)
            .ok_or(PresentError::PlayerNotFound(player))?;
        script.attempts += 1;

        if script.busy_attempts > 0 {
            script.busy_attempts -= 1;
            tracing::debug!(%player, "Scripted busy interface");
            return Ok(PresentOutcome::Canceled(CancelReason::UserBusy));
        }
        if let Some(error) = script.faults.pop_front() {
            return Err(error);
        }
        Ok(pop(&mut *script).unwrap_or(PresentOutcome::Canceled(CancelReason::UserClosed)))
    }
}

impl FormBackend for InMemoryHost {
    fn name(&self) -> &str {
        "memory"
    }

    async fn show_action(
        &self,
        player: PlayerId,
        form: &ActionForm,
    ) -> Result<PresentOutcome<ActionResponse>, PresentError> {
        if form.buttons.is_empty() {
            return Err(PresentError::InvalidForm(
                "action form has no buttons".to_string(),
            ));
        }
        self.advance(player, |script| script.action.pop_front())
    }

    async fn show_message(
        &self,
        player: PlayerId,
        _form: &MessageForm,
    ) -> Result<PresentOutcome<MessageResponse>, PresentError> {
        self.advance(player, |script| script.message.pop_front())
    }

    async fn show_modal(
        &self,
        player: PlayerId,
        form: &ModalForm,
    ) -> Result<PresentOutcome<ModalResponse>, PresentError> {
        if form.elements.is_empty() {
            return Err(PresentError::InvalidForm(
                "modal form has no elements".to_string(),
            ));
        }
        self.advance(player, |script| script.modal.pop_front())
    }
}
