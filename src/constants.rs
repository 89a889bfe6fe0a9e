/// DOM contract between the wasm front-end and the card markup/CSS.
///
/// The stylesheet reads the custom properties below; the class names are
/// toggled on the `.holo-card` element itself.
// Cards are discovered once at startup by this selector
pub const CARD_SELECTOR: &str = ".holo-card";

// Overlay custom properties
pub const VAR_GRADIENT_X: &str = "--holo-gradient-x";
pub const VAR_GRADIENT_Y: &str = "--holo-gradient-y";
pub const VAR_SPARKLE_X: &str = "--holo-sparkle-x";
pub const VAR_SPARKLE_Y: &str = "--holo-sparkle-y";
pub const VAR_GRADIENT_OPACITY: &str = "--holo-gradient-opacity";
pub const VAR_SPARKLE_OPACITY: &str = "--holo-sparkle-opacity";
pub const VAR_INTENSITY: &str = "--holo-intensity";

// State classes
pub const CLASS_FLIPPED: &str = "is-flipped";
pub const CLASS_ANIMATING: &str = "is-animating";
pub const CLASS_HOVERING: &str = "is-hovering";
pub const QUALITY_CLASS_PREFIX: &str = "quality-";

// Per-card configuration attributes
pub const ATTR_ANIMATION_SPEED: &str = "data-animation-speed";
pub const ATTR_ENABLE_FLIP: &str = "data-enable-flip";
pub const ATTR_HOLO_STYLE: &str = "data-holo-style";
pub const ATTR_PREVENT_DOUBLE_CLICK: &str = "data-prevent-double-click";

// Resting transform channels fed to the spring: rotateX, rotateY, scale
pub const REST_ROTATE_X: f32 = 0.0;
pub const REST_ROTATE_Y: f32 = 0.0;
pub const REST_SCALE: f32 = 1.0;

// Below this the post-leave fade is treated as finished
pub const FADE_EPSILON: f32 = 1e-3;
