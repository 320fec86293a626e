//! Frame pacing
//!
//! FPS cap selection plus the wait loop run at the end of every frame.

use serde::{Deserialize, Serialize};

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Cycle to next value
    pub fn next(self) -> Self {
        match self {
            FpsLimit::Fps30 => FpsLimit::Fps60,
            FpsLimit::Fps60 => FpsLimit::Unlocked,
            FpsLimit::Unlocked => FpsLimit::Fps30,
        }
    }

    /// Cycle to previous value
    pub fn prev(self) -> Self {
        match self {
            FpsLimit::Fps30 => FpsLimit::Unlocked,
            FpsLimit::Fps60 => FpsLimit::Fps30,
            FpsLimit::Unlocked => FpsLimit::Fps60,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Tracks the start of the current frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    frame_start: f64,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self { frame_start: 0.0 }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = macroquad::prelude::get_time();
    }

    /// Block until the frame has lasted `limit`'s frame time
    pub fn wait(&self, limit: FpsLimit) {
        use macroquad::prelude::get_time;

        let Some(target_frame_time) = limit.frame_time() else { return };
        if get_time() - self.frame_start >= target_frame_time {
            return;
        }

        // Native: sleep for the bulk, then spin for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002;
            while get_time() - self.frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - self.frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: the browser paces frames
        #[cfg(target_arch = "wasm32")]
        {
            let _ = target_frame_time;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_cycle_round_trips() {
        for limit in [FpsLimit::Fps30, FpsLimit::Fps60, FpsLimit::Unlocked] {
            assert_eq!(limit.next().prev(), limit);
        }
        assert_eq!(FpsLimit::Unlocked.next(), FpsLimit::Fps30);
    }

    #[test]
    fn test_frame_time() {
        assert!(FpsLimit::Unlocked.frame_time().is_none());
        let t = FpsLimit::Fps60.frame_time().unwrap_or_default();
        assert!((t - 1.0 / 60.0).abs() < 1e-9);
    }
}
