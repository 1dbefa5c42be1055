use std::time::Duration;

/// Remembers when the user last touched the widget.
///
/// Timestamps are durations on the host's monotonic clock (time since
/// mount). The detector does nothing on its own; the controller polls it.
#[derive(Clone, Debug)]
pub struct IdleDetector {
    last_interaction_at: Duration,
    reported_idle: bool,
}

impl IdleDetector {
    pub fn new(now: Duration) -> Self {
        Self {
            last_interaction_at: now,
            reported_idle: false,
        }
    }

    pub fn note_interaction(&mut self, now: Duration) {
        self.last_interaction_at = self.last_interaction_at.max(now);
        self.reported_idle = false;
    }

    pub fn last_interaction_at(&self) -> Duration {
        self.last_interaction_at
    }

    pub fn idle_for(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last_interaction_at)
    }

    pub fn is_idle(&self, now: Duration, threshold: Duration) -> bool {
        self.idle_for(now) >= threshold
    }

    /// Like `is_idle`, but returns `true` only on the Active -> Idle edge.
    pub fn poll(&mut self, now: Duration, threshold: Duration) -> bool {
        let idle = self.is_idle(now, threshold);
        let fired = idle && !self.reported_idle;
        self.reported_idle = idle;
        fired
    }
}
