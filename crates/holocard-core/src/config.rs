use std::time::Duration;

use crate::constants::{DEFAULT_ANIMATION_SPEED, MAX_ANIMATION_SPEED};
use crate::error::ConfigError;
use crate::style::HoloStyle;

/// Per-card behavior switches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardConfig {
    /// Length of the flip transition.
    pub animation_speed: Duration,
    pub enable_flip: bool,
    pub style: HoloStyle,
    /// Drop synthetic mouse events that trail a touch.
    pub prevent_double_click: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            animation_speed: DEFAULT_ANIMATION_SPEED,
            enable_flip: true,
            style: HoloStyle::Basic,
            prevent_double_click: true,
        }
    }
}

/// Raw attribute values as found on the card element.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardAttributes<'a> {
    pub animation_speed_ms: Option<&'a str>,
    pub enable_flip: Option<&'a str>,
    pub style: Option<&'a str>,
    pub prevent_double_click: Option<&'a str>,
}

impl CardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_speed.is_zero() {
            return Err(ConfigError::ZeroAnimationSpeed);
        }
        if self.animation_speed > MAX_ANIMATION_SPEED {
            return Err(ConfigError::AnimationSpeedTooLong(self.animation_speed));
        }
        Ok(())
    }

    /// Build a config from markup attributes. Unparseable values keep their
    /// default (with a warning); parseable but out-of-range values are
    /// reported.
    pub fn from_attributes(attrs: CardAttributes<'_>) -> Result<Self, ConfigError> {
        let mut config = CardConfig::default();
        if let Some(raw) = attrs.animation_speed_ms {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.animation_speed = Duration::from_millis(ms),
                Err(_) => log::warn!("[config] ignoring animation speed {:?}", raw),
            }
        }
        if let Some(raw) = attrs.enable_flip {
            config.enable_flip = parse_flag(raw, config.enable_flip);
        }
        if let Some(raw) = attrs.style {
            config.style = HoloStyle::from_name(raw);
        }
        if let Some(raw) = attrs.prevent_double_click {
            config.prevent_double_click = parse_flag(raw, config.prevent_double_click);
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        // a bare attribute (`data-enable-flip`) reads as an empty string
        "" | "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        other => {
            log::warn!("[config] ignoring flag value {:?}", other);
            default
        }
    }
}
