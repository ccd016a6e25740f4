//! Per-request state machine
//!
//! Deterministic finite state machine for one grounded-response request.
//! Terminal states self-loop; every other (state, event) pair either has a
//! unique next state or is an error.

use serde::{Deserialize, Serialize};

use crate::errors::{PolicyError, Result};

/// Request processing states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestState {
    /// Query accepted, nothing run yet
    Received,

    /// Moderation gate passed
    Moderated,

    /// Corpus scan finished (result may be empty)
    Retrieved,

    /// Generation request assembled
    PromptBuilt,

    /// Backend call in flight
    Dispatched,

    /// Backend returned text (terminal)
    Succeeded,

    /// Backend failed; fallback produced (terminal)
    Failed,

    /// Moderation violation; request never dispatched (terminal)
    Rejected,
}

/// Events that drive request transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEvent {
    /// Moderator found no violation
    ModerationPassed,

    /// Moderator flagged the query
    ModerationBlocked,

    /// Retriever finished scanning the corpus
    RetrievalComplete,

    /// Prompt builder produced the generation request
    PromptReady,

    /// Backend invocation started
    DispatchIssued,

    /// Backend returned text and usage
    BackendSucceeded,

    /// Backend returned an error
    BackendFailed,
}

impl RequestState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestState::Succeeded | RequestState::Failed | RequestState::Rejected
        )
    }

    /// Attempt a transition
    ///
    /// Valid transitions:
    /// 1. Received    → Moderated   (ModerationPassed)
    /// 2. Received    → Rejected    (ModerationBlocked)
    /// 3. Moderated   → Retrieved   (RetrievalComplete)
    /// 4. Retrieved   → PromptBuilt (PromptReady)
    /// 5. PromptBuilt → Dispatched  (DispatchIssued)
    /// 6. Dispatched  → Succeeded   (BackendSucceeded)
    /// 7. Dispatched  → Failed      (BackendFailed)
    /// 8. terminal    → terminal    (self-loop)
    pub fn transition(&self, event: RequestEvent) -> Result<RequestState> {
        use RequestEvent::*;
        use RequestState::*;

        let next = match (self, event) {
            (Received, ModerationPassed) => Moderated,
            (Received, ModerationBlocked) => Rejected,

            (Moderated, RetrievalComplete) => Retrieved,

            (Retrieved, PromptReady) => PromptBuilt,

            (PromptBuilt, DispatchIssued) => Dispatched,

            (Dispatched, BackendSucceeded) => Succeeded,
            (Dispatched, BackendFailed) => Failed,

            // Terminal states (self-loops)
            (Succeeded, _) => Succeeded,
            (Failed, _) => Failed,
            (Rejected, _) => Rejected,

            (from, event) => {
                return Err(PolicyError::InvalidTransition {
                    from: format!("{from:?}"),
                    to: format!("(via {event:?})"),
                    reason: format!("No valid transition from {from:?} on {event:?}"),
                });
            }
        };

        Ok(next)
    }

    /// Events valid from this state
    pub fn valid_events(&self) -> Vec<RequestEvent> {
        use RequestEvent::*;
        use RequestState::*;

        match self {
            Received => vec![ModerationPassed, ModerationBlocked],
            Moderated => vec![RetrievalComplete],
            Retrieved => vec![PromptReady],
            PromptBuilt => vec![DispatchIssued],
            Dispatched => vec![BackendSucceeded, BackendFailed],
            Succeeded | Failed | Rejected => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state = RequestState::Received;
        for event in [
            RequestEvent::ModerationPassed,
            RequestEvent::RetrievalComplete,
            RequestEvent::PromptReady,
            RequestEvent::DispatchIssued,
            RequestEvent::BackendSucceeded,
        ] {
            state = state.transition(event).unwrap();
        }
        assert_eq!(state, RequestState::Succeeded);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_violation_is_terminal_before_retrieval() {
        let state = RequestState::Received
            .transition(RequestEvent::ModerationBlocked)
            .unwrap();
        assert_eq!(state, RequestState::Rejected);
        assert!(state.is_terminal());
        // Self-loop: further events stay rejected
        assert_eq!(
            state.transition(RequestEvent::RetrievalComplete).unwrap(),
            RequestState::Rejected
        );
    }

    #[test]
    fn test_backend_failure_path() {
        let state = RequestState::Dispatched
            .transition(RequestEvent::BackendFailed)
            .unwrap();
        assert_eq!(state, RequestState::Failed);
    }

    #[test]
    fn test_invalid_transition_rejected() {
        let result = RequestState::Received.transition(RequestEvent::BackendSucceeded);
        assert!(matches!(result, Err(PolicyError::InvalidTransition { .. })));
    }

    #[test]
    fn test_valid_events_cover_non_terminal_states() {
        assert_eq!(RequestState::Received.valid_events().len(), 2);
        assert!(RequestState::Succeeded.valid_events().is_empty());
    }
}
