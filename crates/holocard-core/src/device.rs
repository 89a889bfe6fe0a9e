//! One-shot device capability profiling and the quality ladder it seeds.

use std::cell::OnceCell;
use std::fmt;

use crate::constants::{LOW_END_CORES, LOW_END_MEMORY_GB};
use crate::error::ProbeError;
use crate::pointer::TransformConfig;
use crate::spring::SpringPreset;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    Fine,
    Coarse,
    None,
}

/// Immutable snapshot of what the host can do, taken once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceCapabilities {
    pub touch_support: bool,
    pub pointer: PointerType,
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub supports_blend_modes: bool,
    pub supports_3d_transforms: bool,
    pub supports_backdrop_filter: bool,
    pub device_memory_gb: Option<f32>,
    pub hardware_concurrency: Option<u32>,
    pub is_low_end_device: bool,
}

impl DeviceCapabilities {
    /// Used when there is no environment to inspect, and field by field when
    /// an individual probe fails. Assumes the cheapest rendering path.
    pub const SAFE_DEFAULT: DeviceCapabilities = DeviceCapabilities {
        touch_support: false,
        pointer: PointerType::Fine,
        reduced_motion: false,
        high_contrast: false,
        supports_blend_modes: false,
        supports_3d_transforms: false,
        supports_backdrop_filter: false,
        device_memory_gb: None,
        hardware_concurrency: None,
        is_low_end_device: true,
    };

    pub fn quality_ceiling(&self) -> QualityLevel {
        if self.reduced_motion {
            QualityLevel::Minimal
        } else if self.is_low_end_device {
            QualityLevel::Low
        } else if self.touch_support || self.pointer == PointerType::Coarse {
            QualityLevel::Medium
        } else {
            QualityLevel::High
        }
    }

    pub fn transform_config(&self) -> TransformConfig {
        let base = if self.touch_support || self.pointer == PointerType::Coarse {
            TransformConfig::mobile()
        } else {
            TransformConfig::desktop()
        };
        base.with_reduced_motion(self.reduced_motion || !self.supports_3d_transforms)
    }
}

impl Default for DeviceCapabilities {
    fn default() -> Self {
        Self::SAFE_DEFAULT
    }
}

pub fn is_low_end(device_memory_gb: Option<f32>, hardware_concurrency: Option<u32>) -> bool {
    device_memory_gb.map_or(false, |gb| gb <= LOW_END_MEMORY_GB)
        || hardware_concurrency.map_or(false, |cores| cores <= LOW_END_CORES)
}

/// Host environment queries. Each probe fails independently; the profiler
/// never lets one failure blank out the whole record.
pub trait DeviceProbe {
    fn max_touch_points(&self) -> Result<u32, ProbeError>;
    fn media_matches(&self, query: &str) -> Result<bool, ProbeError>;
    fn supports_css(&self, property: &str, value: &str) -> Result<bool, ProbeError>;
    fn device_memory_gb(&self) -> Result<Option<f32>, ProbeError>;
    fn hardware_concurrency(&self) -> Result<Option<u32>, ProbeError>;
}

/// Owns the one-time capability snapshot. Construct one per app and pass
/// it where it is needed.
#[derive(Debug, Default)]
pub struct DeviceProfiler {
    caps: OnceCell<DeviceCapabilities>,
}

fn probe_or<T: fmt::Debug>(name: &str, result: Result<T, ProbeError>, fallback: T) -> T {
    result.unwrap_or_else(|e| {
        log::debug!("[device] {} probe failed ({}), using {:?}", name, e, fallback);
        fallback
    })
}

impl DeviceProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile on first call, return the cached record afterwards. Later
    /// probes are ignored.
    pub fn capabilities(&self, probe: Option<&dyn DeviceProbe>) -> &DeviceCapabilities {
        self.caps.get_or_init(|| {
            let caps = match probe {
                Some(p) => Self::inspect(p),
                None => DeviceCapabilities::SAFE_DEFAULT,
            };
            log::info!("[device] {:?}", caps);
            caps
        })
    }

    pub fn cached(&self) -> Option<&DeviceCapabilities> {
        self.caps.get()
    }

    pub fn inspect(probe: &dyn DeviceProbe) -> DeviceCapabilities {
        let safe = DeviceCapabilities::SAFE_DEFAULT;
        let touch_points = probe_or("touch", probe.max_touch_points(), 0);
        let coarse = probe_or("pointer", probe.media_matches("(pointer: coarse)"), false);
        let fine = probe_or("pointer", probe.media_matches("(pointer: fine)"), !coarse);
        let pointer = match (fine, coarse) {
            (true, _) => PointerType::Fine,
            (false, true) => PointerType::Coarse,
            (false, false) => PointerType::None,
        };
        let device_memory_gb = probe_or("memory", probe.device_memory_gb(), None);
        let hardware_concurrency = probe_or("cores", probe.hardware_concurrency(), None);

        DeviceCapabilities {
            touch_support: touch_points > 0 || pointer == PointerType::Coarse,
            pointer,
            reduced_motion: probe_or(
                "reduced-motion",
                probe.media_matches("(prefers-reduced-motion: reduce)"),
                safe.reduced_motion,
            ),
            high_contrast: probe_or(
                "contrast",
                probe.media_matches("(prefers-contrast: more)"),
                safe.high_contrast,
            ),
            supports_blend_modes: probe_or(
                "blend",
                probe.supports_css("mix-blend-mode", "color-dodge"),
                safe.supports_blend_modes,
            ),
            supports_3d_transforms: probe_or(
                "transform-3d",
                probe.supports_css("transform-style", "preserve-3d"),
                safe.supports_3d_transforms,
            ),
            supports_backdrop_filter: probe_or(
                "backdrop",
                probe.supports_css("backdrop-filter", "blur(1px)"),
                safe.supports_backdrop_filter,
            ),
            device_memory_gb,
            hardware_concurrency,
            is_low_end_device: is_low_end(device_memory_gb, hardware_concurrency),
        }
    }
}

/// Rendering tiers, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityLevel {
    Minimal,
    Low,
    Medium,
    High,
}

/// What the view layer may render at a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualityProfile {
    pub sparkles: bool,
    pub complex_blend_modes: bool,
    pub overlay_layers: u8,
    pub spring: SpringPreset,
}

impl QualityLevel {
    pub fn profile(self) -> QualityProfile {
        match self {
            QualityLevel::Minimal => QualityProfile {
                sparkles: false,
                complex_blend_modes: false,
                overlay_layers: 1,
                spring: SpringPreset::Quick,
            },
            QualityLevel::Low => QualityProfile {
                sparkles: false,
                complex_blend_modes: false,
                overlay_layers: 1,
                spring: SpringPreset::Responsive,
            },
            QualityLevel::Medium => QualityProfile {
                sparkles: true,
                complex_blend_modes: false,
                overlay_layers: 2,
                spring: SpringPreset::Holographic,
            },
            QualityLevel::High => QualityProfile {
                sparkles: true,
                complex_blend_modes: true,
                overlay_layers: 3,
                spring: SpringPreset::Smooth,
            },
        }
    }

    pub fn step_down(self) -> Option<QualityLevel> {
        match self {
            QualityLevel::Minimal => None,
            QualityLevel::Low => Some(QualityLevel::Minimal),
            QualityLevel::Medium => Some(QualityLevel::Low),
            QualityLevel::High => Some(QualityLevel::Medium),
        }
    }

    pub fn step_up(self) -> Option<QualityLevel> {
        match self {
            QualityLevel::Minimal => Some(QualityLevel::Low),
            QualityLevel::Low => Some(QualityLevel::Medium),
            QualityLevel::Medium => Some(QualityLevel::High),
            QualityLevel::High => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            QualityLevel::Minimal => "minimal",
            QualityLevel::Low => "low",
            QualityLevel::Medium => "medium",
            QualityLevel::High => "high",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
