// SPDX-License-Identifier: Apache-2.0

//! Client-side spin sessions.
//!
//! A [`SelectionSession`] remembers which issues were already shown under the
//! active [`FilterMode`] and picks uniformly among the rest. Once everything
//! has been shown the next spin resets the session instead of selecting.
//! Failures are recorded as a notice and never end the session.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::SelectionError;
use crate::model::{Issue, IssueKey};
use crate::ranking::{FilterMode, RankedSets};

/// Notice surfaced when every issue in the ranked set has been shown.
pub const EXHAUSTED_NOTICE: &str = "All issues have been shown. Starting over!";

/// Result of a single spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinOutcome {
    /// A not-yet-shown issue was picked.
    Selected(Issue),
    /// Everything had been shown; the shown-set was cleared and nothing picked.
    Exhausted,
    /// Selection failed; the message is also stored as the session notice.
    Failed(String),
}

/// Ephemeral per-viewer selection state.
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    mode: FilterMode,
    shown: HashSet<IssueKey>,
    current: Option<Issue>,
    notice: Option<String>,
}

impl SelectionSession {
    /// Starts an empty session under `mode`.
    #[must_use]
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Active filter mode.
    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Issue currently on display, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Issue> {
        self.current.as_ref()
    }

    /// Message from the last spin (exhaustion notice or error), if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Number of issues shown since the last reset.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    /// Returns true if the issue was already shown in this session.
    #[must_use]
    pub fn was_shown(&self, issue: &Issue) -> bool {
        self.shown.contains(&issue.key())
    }

    /// Switches the filter mode.
    ///
    /// A different mode starts a new session: the shown-set, current issue
    /// and notice are cleared. Re-selecting the active mode changes nothing.
    pub fn set_mode(&mut self, mode: FilterMode) {
        if mode == self.mode {
            return;
        }
        debug!(from = %self.mode, to = %mode, "Switching filter mode");
        self.mode = mode;
        self.shown.clear();
        self.current = None;
        self.notice = None;
    }

    /// Picks the next issue from the ranked set of the active mode.
    ///
    /// Errors are caught and recorded as the session notice, so a later spin
    /// can always be attempted.
    pub fn spin(&mut self, sets: Option<&RankedSets>, rng: &mut fastrand::Rng) -> SpinOutcome {
        match self.try_spin(sets, rng) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "Spin failed");
                let message = err.to_string();
                self.notice = Some(message.clone());
                SpinOutcome::Failed(message)
            }
        }
    }

    /// Fallible core of [`spin`](Self::spin).
    ///
    /// Never returns [`SpinOutcome::Failed`].
    pub fn try_spin(
        &mut self,
        sets: Option<&RankedSets>,
        rng: &mut fastrand::Rng,
    ) -> Result<SpinOutcome, SelectionError> {
        self.notice = None;

        let ranked = sets.ok_or(SelectionError::NotLoaded)?.get(self.mode);
        let eligible: Vec<&Issue> = ranked
            .iter()
            .filter(|issue| !self.shown.contains(&issue.key()))
            .collect();

        if eligible.is_empty() {
            debug!(shown = self.shown.len(), "All issues shown, resetting session");
            self.shown.clear();
            self.notice = Some(EXHAUSTED_NOTICE.to_string());
            return Ok(SpinOutcome::Exhausted);
        }

        let picked = eligible[rng.usize(..eligible.len())].clone();
        self.shown.insert(picked.key());
        self.current = Some(picked.clone());

        debug!(
            id = picked.id,
            repo = %picked.repository.full_name,
            remaining = eligible.len() - 1,
            "Selected issue"
        );

        Ok(SpinOutcome::Selected(picked))
    }
}
