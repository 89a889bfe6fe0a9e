use std::time::Duration;

// Shared tuning constants for the card engine. The web front-end and the
// simulator read these directly; nothing here is platform specific.

// Tilt
pub const DESKTOP_MAX_ROTATION_DEG: f32 = 35.0;
pub const MOBILE_MAX_ROTATION_DEG: f32 = 20.0;
pub const DESKTOP_MAX_TRANSLATE_PX: f32 = 12.0;
pub const MOBILE_MAX_TRANSLATE_PX: f32 = 6.0;
pub const ROTATION_FALLOFF_EXPONENT: f32 = 0.7; // fromCenter^k shapes the edge boost
pub const ROTATION_INTENSITY_BASE: f32 = 0.8;
pub const ROTATION_INTENSITY_SPAN: f32 = 0.4; // base + span => 1.2 at the corners
pub const INTERACTIVE_BASE_SCALE: f32 = 1.02;
pub const SCALE_FROM_CENTER: f32 = 0.06;
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Free spin flourish
pub const SPIN_DAMPING: f32 = 0.92;
pub const SPIN_PULL: f32 = 0.08;
pub const SPIN_COMPLETE_VELOCITY: f32 = 0.5; // deg per step

// Effect shaping
pub const FALLOFF_FLOOR: f32 = 0.3; // intensity multiplier at the very edge
pub const FALLOFF_SPAN: f32 = 0.7;
pub const GRADIENT_OPACITY_SCALE: f32 = 0.6;
pub const GRADIENT_OPACITY_MIN: f32 = 0.4;
pub const GRADIENT_OPACITY_MAX: f32 = 0.7;
pub const SPARKLE_OPACITY_SCALE: f32 = 0.7;
pub const SPARKLE_OPACITY_MIN: f32 = 0.5;
pub const SPARKLE_OPACITY_MAX: f32 = 0.8;
pub const SPARKLE_TRAVEL: f32 = 0.5; // sparkles move half as far as the gradient

// Back face compensation
pub const BACK_GRADIENT_PULL: f32 = 0.9;
pub const BACK_SPARKLE_PULL: f32 = 0.8;
pub const BACK_GRADIENT_OPACITY_BOOST: f32 = 1.1;
pub const BACK_SPARKLE_OPACITY_BOOST: f32 = 1.05;
pub const BACK_INTENSITY_BOOST: f32 = 1.1;

// Card lifecycle
pub const DEFAULT_ANIMATION_SPEED: Duration = Duration::from_millis(600);
pub const MAX_ANIMATION_SPEED: Duration = Duration::from_secs(5);
pub const DECAY_STEPS: u32 = 10;
pub const DECAY_DURATION: Duration = Duration::from_millis(300);
pub const TOUCH_HOLD_BOOST: f32 = 1.2;
pub const MAX_HOLOGRAPHIC_INTENSITY: f32 = 2.0;

// Touch arbitration
pub const HOLD_DELAY: Duration = Duration::from_millis(150);
pub const MOVE_THRESHOLD_PX: f32 = 10.0;
pub const TAP_TIME_THRESHOLD: Duration = Duration::from_millis(300);
pub const PREVENT_MOUSE_DELAY: Duration = Duration::from_millis(100);

// Device classification
pub const LOW_END_MEMORY_GB: f32 = 2.0;
pub const LOW_END_CORES: u32 = 2;

// Frame pacing
pub const TARGET_FPS: f32 = 60.0;
pub const SAMPLE_FRAMES: u32 = 60;
pub const SAMPLE_WINDOW: Duration = Duration::from_secs(1);
pub const ACCEPTABLE_FPS_RATIO: f32 = 0.8;
pub const STEP_UP_FPS_RATIO: f32 = 0.95;
pub const STEP_DOWN_AFTER_SAMPLES: u32 = 2;
pub const STEP_UP_AFTER_SAMPLES: u32 = 3;
