//! Frame-rate sampling and quality stepping.

use instant::Instant;
use std::time::Duration;

use crate::constants::*;
use crate::device::QualityLevel;
use crate::timer::elapsed_between;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceSample {
    pub fps: f32,
    pub frame_time_ms: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PerformanceGrade {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl PerformanceGrade {
    pub fn from_fps(fps: f32) -> Self {
        if fps >= 58.0 {
            PerformanceGrade::Excellent
        } else if fps >= 50.0 {
            PerformanceGrade::Good
        } else if fps >= 30.0 {
            PerformanceGrade::Fair
        } else {
            PerformanceGrade::Poor
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityChange {
    StepDown(QualityLevel),
    StepUp(QualityLevel),
}

impl QualityChange {
    pub fn level(self) -> QualityLevel {
        match self {
            QualityChange::StepDown(level) | QualityChange::StepUp(level) => level,
        }
    }
}

/// Emitted once per sampling window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub sample: PerformanceSample,
    pub change: Option<QualityChange>,
}

#[derive(Debug)]
pub struct PerformanceGovernor {
    target_fps: f32,
    ceiling: QualityLevel,
    quality: QualityLevel,
    fps: f32,
    last_frame: Option<Instant>,
    window_start: Option<Instant>,
    window_frames: u32,
    slow_samples: u32,
    fast_samples: u32,
}

impl PerformanceGovernor {
    /// `ceiling` is the capability-derived tier; the governor starts there
    /// and never steps above it.
    pub fn new(target_fps: f32, ceiling: QualityLevel) -> Self {
        let target_fps = if target_fps.is_finite() && target_fps > 0.0 {
            target_fps
        } else {
            TARGET_FPS
        };
        Self {
            target_fps,
            ceiling,
            quality: ceiling,
            fps: target_fps,
            last_frame: None,
            window_start: None,
            window_frames: 0,
            slow_samples: 0,
            fast_samples: 0,
        }
    }

    pub fn target_fps(&self) -> f32 {
        self.target_fps
    }

    pub fn quality(&self) -> QualityLevel {
        self.quality
    }

    pub fn ceiling(&self) -> QualityLevel {
        self.ceiling
    }

    /// Rolling estimate from the last completed window.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn last_frame(&self) -> Option<Instant> {
        self.last_frame
    }

    pub fn is_acceptable(&self) -> bool {
        self.fps >= self.target_fps * ACCEPTABLE_FPS_RATIO
    }

    pub fn grade(&self) -> PerformanceGrade {
        PerformanceGrade::from_fps(self.fps)
    }

    /// Call once per animation frame. Returns a report when a window of
    /// `SAMPLE_FRAMES` frames or `SAMPLE_WINDOW` wall time closes.
    pub fn record_frame(&mut self, now: Instant) -> Option<FrameReport> {
        self.last_frame = Some(now);
        let start = *self.window_start.get_or_insert(now);
        self.window_frames += 1;

        let elapsed = elapsed_between(now, start);
        if self.window_frames < SAMPLE_FRAMES && elapsed < SAMPLE_WINDOW {
            return None;
        }
        // the first frame only opens the window
        let intervals = self.window_frames.saturating_sub(1);
        self.window_start = Some(now);
        self.window_frames = 1;
        if intervals == 0 || elapsed == Duration::ZERO {
            return None;
        }

        let frame_time_ms = elapsed.as_secs_f32() * 1000.0 / intervals as f32;
        self.fps = 1000.0 / frame_time_ms;
        let sample = PerformanceSample {
            fps: self.fps,
            frame_time_ms,
        };
        let change = self.adjust();
        Some(FrameReport { sample, change })
    }

    fn adjust(&mut self) -> Option<QualityChange> {
        if !self.is_acceptable() {
            self.fast_samples = 0;
            self.slow_samples += 1;
            if self.slow_samples >= STEP_DOWN_AFTER_SAMPLES {
                self.slow_samples = 0;
                if let Some(lower) = self.quality.step_down() {
                    log::info!("[perf] {:.1} fps, quality {} -> {}", self.fps, self.quality, lower);
                    self.quality = lower;
                    return Some(QualityChange::StepDown(lower));
                }
            }
        } else if self.fps >= self.target_fps * STEP_UP_FPS_RATIO {
            self.slow_samples = 0;
            self.fast_samples += 1;
            if self.fast_samples >= STEP_UP_AFTER_SAMPLES {
                self.fast_samples = 0;
                if let Some(higher) = self.quality.step_up().filter(|q| *q <= self.ceiling) {
                    log::info!("[perf] {:.1} fps, quality {} -> {}", self.fps, self.quality, higher);
                    self.quality = higher;
                    return Some(QualityChange::StepUp(higher));
                }
            }
        } else {
            self.slow_samples = 0;
            self.fast_samples = 0;
        }
        None
    }

    /// Forget timing history; quality returns to the ceiling.
    pub fn reset(&mut self) {
        *self = Self::new(self.target_fps, self.ceiling);
    }
}
