/// A cancellable deferred continuation.
///
/// The controller owns one slot per kind of deferred work. Arming a slot supersedes whatever it
/// held before, so each slot has at most one live handle. Slots are fired by the controller's
/// `tick(now_ms)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerSlot<T = ()> {
    armed: Option<(u64, T)>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<T: Copy> TimerSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, due_ms: u64, payload: T) {
        self.armed = Some((due_ms, payload));
    }

    /// Returns `true` if a pending handle was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.armed.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn due(&self) -> Option<u64> {
        self.armed.map(|(due, _)| due)
    }

    pub fn payload(&self) -> Option<T> {
        self.armed.map(|(_, payload)| payload)
    }

    /// Disarms and returns `(due_ms, payload)` if the slot is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: u64) -> Option<(u64, T)> {
        match self.armed {
            Some((due, _)) if due <= now_ms => self.armed.take(),
            _ => None,
        }
    }
}
