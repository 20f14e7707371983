//! # Wizard Sessions
//!
//! Live wizard controllers, one per session, keyed by a numeric id. Ids are
//! handed out in increasing order and never reused within a process.
//!
//! The registry is bounded. When it is full, opening a session evicts the
//! oldest finished (`Submitted`) one; if none is finished the request is
//! refused with [`FashionError::SessionLimit`].

use fashionos_core::{FashionError, WizardController, WizardPhase};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Session identifier.
pub type WizardId = u64;

/// Registry shared between handlers and submission tasks.
pub type SharedRegistry = Arc<RwLock<WizardRegistry>>;

/// All live wizard sessions.
#[derive(Debug, Default)]
pub struct WizardRegistry {
    wizards: BTreeMap<WizardId, WizardController>,
    next_id: WizardId,
    /// 0 means unbounded.
    max_sessions: usize,
}

impl WizardRegistry {
    /// Unbounded registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding at most `max_sessions` sessions (0 disables the cap).
    #[must_use]
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            max_sessions,
            ..Self::default()
        }
    }

    /// Wrap a registry for sharing.
    #[must_use]
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Open a new session with an empty draft.
    pub fn create(&mut self) -> Result<WizardId, FashionError> {
        if self.is_full() {
            let finished = self
                .wizards
                .iter()
                .find(|(_, w)| w.phase() == WizardPhase::Submitted)
                .map(|(id, _)| *id);
            match finished {
                Some(old) => {
                    self.wizards.remove(&old);
                    tracing::debug!(wizard_id = old, "Evicted submitted wizard");
                }
                None => return Err(FashionError::SessionLimit(self.max_sessions)),
            }
        }

        self.next_id = self.next_id.saturating_add(1);
        let id = self.next_id;
        self.wizards.insert(id, WizardController::new());
        Ok(id)
    }

    fn is_full(&self) -> bool {
        self.max_sessions != 0 && self.wizards.len() >= self.max_sessions
    }

    pub fn get(&self, id: WizardId) -> Result<&WizardController, FashionError> {
        self.wizards.get(&id).ok_or(FashionError::WizardNotFound(id))
    }

    pub fn get_mut(&mut self, id: WizardId) -> Result<&mut WizardController, FashionError> {
        self.wizards
            .get_mut(&id)
            .ok_or(FashionError::WizardNotFound(id))
    }

    /// Discard a session.
    pub fn remove(&mut self, id: WizardId) -> Result<WizardController, FashionError> {
        self.wizards
            .remove(&id)
            .ok_or(FashionError::WizardNotFound(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.wizards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wizards.is_empty()
    }
}
