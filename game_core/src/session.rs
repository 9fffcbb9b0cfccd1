//! Session state machine
//!
//! `Idle` until the first start, `Running` while points are played,
//! `Ended` once a side reaches the win score. Only `Running` advances
//! physics.

use crate::Side;

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Ended,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Restart,
    Win(Side),
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Session finite state machine
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    winner: Option<Side>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            winner: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Get current state as string (for JS interop)
    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_ended(&self) -> bool {
        self.state == SessionState::Ended
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// `"Player wins!"` or `"AI wins!"` once the session has ended
    pub fn winner_message(&self) -> Option<String> {
        self.winner.map(|side| format!("{} wins!", side.label()))
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                self.winner = match action {
                    SessionAction::Win(side) => Some(side),
                    SessionAction::Start | SessionAction::Restart => None,
                };
                log::info!("session {:?} -> {:?} ({:?})", from_state, next_state, action);
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => {
                log::warn!("session rejected {:?} in state {:?}", action, from_state);
                TransitionResult {
                    success: false,
                    from_state,
                    to_state: from_state,
                    action,
                }
            }
        }
    }

    /// Parse a UI action name (for easier JS interop)
    pub fn parse_action(action: &str) -> Option<SessionAction> {
        match action {
            "START" => Some(SessionAction::Start),
            "RESTART" => Some(SessionAction::Restart),
            _ => None,
        }
    }

    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        match (self.state, action) {
            (SessionState::Idle, SessionAction::Start) => Some(SessionState::Running),
            (SessionState::Ended, SessionAction::Restart) => Some(SessionState::Running),
            (SessionState::Running, SessionAction::Win(_)) => Some(SessionState::Ended),
            _ => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
