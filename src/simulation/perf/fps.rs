use std::collections::VecDeque;

/// Frames kept in the sliding window
pub const FPS_SAMPLES: usize = 60;

/// Sliding-window frame-rate estimate over the last [`FPS_SAMPLES`] frames.
#[derive(Clone, Debug, Default)]
pub struct FpsCounter {
    frame_times: VecDeque<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(FPS_SAMPLES + 1),
        }
    }

    /// Record a frame boundary at `now_ms`.
    pub fn record_frame(&mut self, now_ms: f64) {
        self.frame_times.push_back(now_ms);
        while self.frame_times.len() > FPS_SAMPLES {
            self.frame_times.pop_front();
        }
    }

    /// `(samples - 1) * 1000 / span_ms`; 0 until two frames with a positive span exist.
    pub fn current_fps(&self) -> f32 {
        let (Some(first), Some(last)) = (self.frame_times.front(), self.frame_times.back()) else {
            return 0.0;
        };
        if self.frame_times.len() < 2 {
            return 0.0;
        }
        let span = last - first;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.frame_times.len() - 1) as f64 * 1000.0 / span) as f32
    }

    pub fn samples(&self) -> usize {
        self.frame_times.len()
    }

    pub fn clear(&mut self) {
        self.frame_times.clear();
    }
}
