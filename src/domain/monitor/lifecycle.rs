use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Polling,
    TornDown,
}

/// `Uninitialized -> Polling -> TornDown`, with `Uninitialized -> TornDown`
/// allowed for monitors that never started. Torn down is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Lifecycle { state: LifecycleState::Uninitialized }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_polling(&self) -> bool {
        self.state == LifecycleState::Polling
    }

    pub fn start(&mut self) -> Result<()> {
        self.transition(LifecycleState::Polling)
    }

    pub fn tear_down(&mut self) -> Result<()> {
        self.transition(LifecycleState::TornDown)
    }

    fn transition(&mut self, to: LifecycleState) -> Result<()> {
        use LifecycleState::*;

        match (self.state, to) {
            (Uninitialized, Polling) | (Uninitialized, TornDown) | (Polling, TornDown) => {
                log::debug!("Monitor lifecycle {:?} -> {:?}", self.state, to);
                self.state = to;
                Ok(())
            }
            (from, to) => Err(Error::LifecycleError { from, to }),
        }
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::new()
    }
}
