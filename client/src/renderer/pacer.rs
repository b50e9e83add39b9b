use std::time::{Duration, Instant};

/// Throttles the redraw loop to a fixed frame interval.
pub struct FramePacer {
    target_interval: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_interval: Duration) -> Self {
        Self {
            target_interval,
            last_frame: None,
        }
    }

    /// Sleeps out whatever is left of the current frame's time slot. The
    /// first call never sleeps.
    pub fn pace(&mut self) {
        if let Some(last_frame) = self.last_frame {
            let elapsed = last_frame.elapsed();

            if elapsed < self.target_interval {
                spin_sleep::sleep(self.target_interval - elapsed);
            }
        }

        self.last_frame = Some(Instant::now());
    }
}
