//! Playback session state machine

use std::fmt;
use thiserror::Error;

/// Playback states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Running,
}

impl PlaybackState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackOutcome {
    /// Every token was emitted
    Completed,
    /// Stopped or superseded before the end
    Cancelled,
    /// The output device reported an error
    Faulted,
}

impl PlaybackOutcome {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for PlaybackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: PlaybackState,
    pub action: String,
}

/// Run state of a single playback.
///
/// State machine:
///   IDLE -> RUNNING (start)
///   RUNNING -> RUNNING (advance)
///   RUNNING -> IDLE (finish)
///
/// A finished session is not restarted; the next run gets a new session.
#[derive(Debug)]
pub struct PlaybackSession {
    generation: u64,
    total: usize,
    position: usize,
    state: PlaybackState,
    outcome: Option<PlaybackOutcome>,
}

impl PlaybackSession {
    /// Create an idle session for a run of `total` tokens
    pub fn new(generation: u64, total: usize) -> Self {
        Self {
            generation,
            total,
            position: 0,
            state: PlaybackState::Idle,
            outcome: None,
        }
    }

    /// Generation id of the run owning this session
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tokens emitted so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Tokens in the run
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get the current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// How the run ended, once finished
    pub fn outcome(&self) -> Option<PlaybackOutcome> {
        self.outcome
    }

    /// Check if currently running
    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// Transition from IDLE to RUNNING
    pub fn start(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PlaybackState::Idle || self.outcome.is_some() {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start playback".to_string(),
            });
        }
        self.state = PlaybackState::Running;
        Ok(())
    }

    /// Record one emitted token
    pub fn advance(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != PlaybackState::Running {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "advance playback".to_string(),
            });
        }
        self.position = (self.position + 1).min(self.total);
        Ok(())
    }

    /// Transition from RUNNING to IDLE
    pub fn finish(&mut self, outcome: PlaybackOutcome) -> Result<(), InvalidStateTransition> {
        if self.state != PlaybackState::Running {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "finish playback".to_string(),
            });
        }
        self.state = PlaybackState::Idle;
        self.outcome = Some(outcome);
        Ok(())
    }
}
