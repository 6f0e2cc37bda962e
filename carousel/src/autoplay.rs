use crate::AutoplayState;
use crate::timer::TimerSlot;

/// Periodic auto-advance.
///
/// Holds at most one live timer. `start` always replaces the previous one, and `rearm` restarts
/// the period from the latest interaction so advances never stack on a stale schedule.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoplayScheduler {
    state: AutoplayState,
    period_ms: u64,
    timer: TimerSlot,
}

impl AutoplayScheduler {
    pub fn new(period_ms: u64) -> Self {
        Self {
            state: AutoplayState::Stopped,
            period_ms: period_ms.max(1),
            timer: TimerSlot::new(),
        }
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    pub fn next_due(&self) -> Option<u64> {
        self.timer.due()
    }

    /// Clears any existing timer and arms a fresh one.
    pub fn start(&mut self, now_ms: u64) {
        self.state = AutoplayState::Running;
        self.timer.arm(now_ms.saturating_add(self.period_ms), ());
    }

    pub fn set_period_ms(&mut self, period_ms: u64) {
        self.period_ms = period_ms.max(1);
    }

    /// Clears the timer and stops. There is no implicit resume.
    pub fn pause(&mut self) {
        self.state = AutoplayState::Stopped;
        self.timer.cancel();
    }

    /// Hover-pause: suspends a running schedule so [`AutoplayScheduler::resume`] can pick it up.
    ///
    /// Returns `true` if autoplay was running.
    pub fn suspend(&mut self) -> bool {
        if self.state != AutoplayState::Running {
            return false;
        }
        self.state = AutoplayState::Paused;
        self.timer.cancel();
        true
    }

    /// Restarts a hover-paused schedule with a full period. Returns `true` if it was paused.
    pub fn resume(&mut self, now_ms: u64) -> bool {
        if self.state != AutoplayState::Paused {
            return false;
        }
        self.start(now_ms);
        true
    }

    /// Restarts the period from `now_ms` if running.
    pub fn rearm(&mut self, now_ms: u64) {
        if self.is_running() {
            self.timer.arm(now_ms.saturating_add(self.period_ms), ());
        }
    }

    /// Reports a due advance and arms the next period.
    ///
    /// Returns the due time of the fired tick.
    pub fn poll(&mut self, now_ms: u64) -> Option<u64> {
        if !self.is_running() {
            return None;
        }
        let (due, ()) = self.timer.take_due(now_ms)?;
        self.timer.arm(due.saturating_add(self.period_ms), ());
        Some(due)
    }

    /// Moves a deadline that is already behind `now_ms` to the next period boundary after it,
    /// keeping the phase. Returns the number of periods skipped.
    pub fn skip_missed(&mut self, now_ms: u64) -> u64 {
        let Some(due) = self.timer.due() else {
            return 0;
        };
        if due > now_ms {
            return 0;
        }
        let skipped = (now_ms - due) / self.period_ms + 1;
        self.timer
            .arm(due.saturating_add(skipped.saturating_mul(self.period_ms)), ());
        skipped
    }

    pub fn cancel(&mut self) {
        self.pause();
    }
}
