use crate::TransitionState;
use crate::timer::TimerSlot;

/// Serializes `next`/`prev` transitions.
///
/// The gate is locked before a commit and released by whichever comes first:
/// - a completion signal for the transitioning property ([`TransitionGate::on_transition_end`])
/// - the fallback timer, armed for the transition duration ([`TransitionGate::poll`])
///
/// The fallback guarantees release when no completion signal ever arrives (reduced motion,
/// interrupted animation, renderer without transitions).
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionGate {
    locked: bool,
    fallback: TimerSlot,
}

impl TransitionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TransitionState {
        if self.locked {
            TransitionState::Locked
        } else {
            TransitionState::Idle
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Locks the gate and arms the fallback unlock.
    ///
    /// Returns `false` (and changes nothing) if the gate is already locked.
    pub fn lock(&mut self, now_ms: u64, fallback_ms: u64) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        self.fallback.arm(now_ms.saturating_add(fallback_ms), ());
        true
    }

    /// Pushes the fallback deadline out while locked, e.g. when a delayed animation starts.
    pub fn extend(&mut self, now_ms: u64, fallback_ms: u64) {
        if self.locked {
            self.fallback.arm(now_ms.saturating_add(fallback_ms), ());
        }
    }

    pub fn unlock(&mut self) {
        self.locked = false;
        self.fallback.cancel();
    }

    /// Handles a completion signal. Only `expected` releases the gate; transitions of other
    /// properties on the same element are ignored.
    ///
    /// Returns `true` if the gate was released.
    pub fn on_transition_end(&mut self, property: &str, expected: &str) -> bool {
        if !self.locked || property != expected {
            return false;
        }
        self.unlock();
        true
    }

    pub fn fallback_due(&self) -> Option<u64> {
        self.fallback.due()
    }

    /// Fires the fallback unlock if it is due. Returns `true` if the gate was released.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if self.fallback.take_due(now_ms).is_none() {
            return false;
        }
        ctrace!(now_ms, "TransitionGate: fallback unlock");
        self.locked = false;
        true
    }

    /// Cancels the fallback timer and releases the gate.
    pub fn cancel(&mut self) {
        self.unlock();
    }
}
