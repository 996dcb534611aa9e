//! Early-stopping decision procedure

/// Observed run condition after an epoch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopState {
    /// The last epoch improved on the best validation AUC
    Improving,
    /// No improvement yet, patience not exhausted
    Plateauing,
    /// Patience exhausted; terminal — no further epochs execute
    Stopped,
}

/// Plateau-aware stopping policy
///
/// Consumes one `improved` flag per epoch. An improvement resets the stall
/// counter; a stall increments it, and reaching `patience` consecutive
/// stalls (with stopping enabled) is terminal. A disabled policy still
/// tracks stalls but never stops.
pub struct EarlyStoppingPolicy {
    enabled: bool,
    patience: usize,
    stall_counter: usize,
    state: StopState,
}

impl EarlyStoppingPolicy {
    /// Create a policy with the given patience
    pub fn new(enabled: bool, patience: usize) -> Self {
        Self { enabled, patience, stall_counter: 0, state: StopState::Improving }
    }

    /// Fold in one epoch's improvement flag
    ///
    /// `Stopped` is sticky: once reached, further observations are ignored.
    pub fn observe(&mut self, improved: bool) -> StopState {
        if self.state == StopState::Stopped {
            return StopState::Stopped;
        }

        if improved {
            self.stall_counter = 0;
            self.state = StopState::Improving;
        } else {
            self.stall_counter += 1;
            self.state = if self.enabled && self.stall_counter >= self.patience {
                StopState::Stopped
            } else {
                StopState::Plateauing
            };
        }
        self.state
    }

    /// Current state
    pub fn state(&self) -> StopState {
        self.state
    }

    /// Consecutive epochs without improvement
    pub fn stall_counter(&self) -> usize {
        self.stall_counter
    }

    /// Configured patience
    pub fn patience(&self) -> usize {
        self.patience
    }

    /// Whether the terminal state has been reached
    pub fn is_stopped(&self) -> bool {
        self.state == StopState::Stopped
    }
}
