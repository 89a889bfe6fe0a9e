use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Holographic overlay presets. Each carries the base intensity the effect
/// math scales by distance from the card center.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HoloStyle {
    #[default]
    Basic,
    Cosmic,
    Rainbow,
    Aurora,
    Secret,
    Galaxy,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown holographic style {0:?}")]
pub struct UnknownStyle(pub String);

impl HoloStyle {
    pub const ALL: [HoloStyle; 6] = [
        HoloStyle::Basic,
        HoloStyle::Cosmic,
        HoloStyle::Rainbow,
        HoloStyle::Aurora,
        HoloStyle::Secret,
        HoloStyle::Galaxy,
    ];

    pub const fn base_intensity(self) -> f32 {
        match self {
            HoloStyle::Basic => 1.0,
            HoloStyle::Cosmic => 1.2,
            HoloStyle::Rainbow => 1.1,
            HoloStyle::Aurora => 0.9,
            HoloStyle::Secret => 1.3,
            HoloStyle::Galaxy => 1.4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HoloStyle::Basic => "basic",
            HoloStyle::Cosmic => "cosmic",
            HoloStyle::Rainbow => "rainbow",
            HoloStyle::Aurora => "aurora",
            HoloStyle::Secret => "secret",
            HoloStyle::Galaxy => "galaxy",
        }
    }

    /// Lenient lookup used for markup attributes: anything unrecognized
    /// renders as `Basic`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: UnknownStyle| {
            log::debug!("[style] {}, using basic", e);
            HoloStyle::Basic
        })
    }
}

impl FromStr for HoloStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        HoloStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStyle(trimmed.to_owned()))
    }
}

impl fmt::Display for HoloStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_case_insensitively() {
        assert_eq!("Galaxy".parse::<HoloStyle>(), Ok(HoloStyle::Galaxy));
        assert_eq!(" aurora ".parse::<HoloStyle>(), Ok(HoloStyle::Aurora));
    }

    #[test]
    fn unknown_name_falls_back_to_basic() {
        assert!("prismatic".parse::<HoloStyle>().is_err());
        assert_eq!(HoloStyle::from_name("prismatic"), HoloStyle::Basic);
    }
}
