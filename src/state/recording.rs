//! The mock recording timer.

/// Shortest answer, in seconds, that may be submitted.
pub const MIN_RECORDING_SECONDS: u32 = 3;

/// Seconds counted while a recording overlay is open.
///
/// There is no audio; each tick of the UI clock adds one second while the
/// timer is live. One timer exists per recording session and it is dropped
/// with its overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingTimer {
    seconds: u32,
    live: bool,
}

impl RecordingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting. Restarting keeps the seconds already recorded.
    pub fn start(&mut self) {
        self.live = true;
    }

    /// Adds one second if live.
    pub fn tick(&mut self) {
        if self.live {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    /// Stops counting and returns the recorded seconds. Idempotent.
    pub fn stop(&mut self) -> u32 {
        self.live = false;
        self.seconds
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Whether anything was recorded in this session.
    pub fn has_recorded(&self) -> bool {
        self.seconds > 0
    }

    pub fn is_submittable(&self) -> bool {
        self.seconds >= MIN_RECORDING_SECONDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_while_live() {
        let mut timer = RecordingTimer::new();
        timer.tick();
        assert_eq!(timer.seconds(), 0);

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.stop(), 2);

        timer.tick();
        assert_eq!(timer.seconds(), 2);
    }

    #[test]
    fn restart_accumulates() {
        let mut timer = RecordingTimer::new();
        timer.start();
        timer.tick();
        timer.stop();
        timer.start();
        timer.tick();
        assert_eq!(timer.stop(), 2);
        assert!(timer.has_recorded());
    }

    #[test]
    fn submittable_from_three_seconds() {
        let mut timer = RecordingTimer::new();
        timer.start();
        timer.tick();
        timer.tick();
        assert!(timer.has_recorded());
        assert!(!timer.is_submittable());

        timer.tick();
        assert!(timer.is_submittable());
    }
}
