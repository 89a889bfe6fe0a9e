// Device capability profiling and the quality ladder.

use holocard_core::*;
use std::cell::Cell;

struct FakeProbe {
    touch_points: Result<u32, ProbeError>,
    coarse: Result<bool, ProbeError>,
    fine: Result<bool, ProbeError>,
    reduced_motion: Result<bool, ProbeError>,
    css: Result<bool, ProbeError>,
    memory: Result<Option<f32>, ProbeError>,
    cores: Result<Option<u32>, ProbeError>,
    calls: Cell<u32>,
}

impl FakeProbe {
    fn desktop(memory: f32, cores: u32) -> Self {
        Self {
            touch_points: Ok(0),
            coarse: Ok(false),
            fine: Ok(true),
            reduced_motion: Ok(false),
            css: Ok(true),
            memory: Ok(Some(memory)),
            cores: Ok(Some(cores)),
            calls: Cell::new(0),
        }
    }
}

impl DeviceProbe for FakeProbe {
    fn max_touch_points(&self) -> Result<u32, ProbeError> {
        self.calls.set(self.calls.get() + 1);
        self.touch_points.clone()
    }
    fn media_matches(&self, query: &str) -> Result<bool, ProbeError> {
        match query {
            "(pointer: coarse)" => self.coarse.clone(),
            "(pointer: fine)" => self.fine.clone(),
            "(prefers-reduced-motion: reduce)" => self.reduced_motion.clone(),
            _ => Ok(false),
        }
    }
    fn supports_css(&self, _property: &str, _value: &str) -> Result<bool, ProbeError> {
        self.css.clone()
    }
    fn device_memory_gb(&self) -> Result<Option<f32>, ProbeError> {
        self.memory.clone()
    }
    fn hardware_concurrency(&self) -> Result<Option<u32>, ProbeError> {
        self.cores.clone()
    }
}

#[test]
fn low_end_classification() {
    let low = DeviceProfiler::inspect(&FakeProbe::desktop(1.0, 2));
    assert!(low.is_low_end_device);
    let high = DeviceProfiler::inspect(&FakeProbe::desktop(8.0, 8));
    assert!(!high.is_low_end_device);

    assert!(is_low_end(Some(2.0), Some(16)));
    assert!(is_low_end(Some(16.0), Some(2)));
    assert!(!is_low_end(None, None));
}

#[test]
fn no_environment_yields_safe_default() {
    let profiler = DeviceProfiler::new();
    assert_eq!(profiler.capabilities(None), &DeviceCapabilities::SAFE_DEFAULT);
    assert_eq!(
        DeviceCapabilities::SAFE_DEFAULT.quality_ceiling(),
        QualityLevel::Low
    );
}

#[test]
fn profiling_is_idempotent() {
    let profiler = DeviceProfiler::new();
    let first = FakeProbe::desktop(8.0, 8);
    let second = FakeProbe::desktop(1.0, 1);
    let a = *profiler.capabilities(Some(&first as &dyn DeviceProbe));
    let b = *profiler.capabilities(Some(&second as &dyn DeviceProbe));
    assert_eq!(a, b);
    assert_eq!(first.calls.get(), 1);
    assert_eq!(second.calls.get(), 0);
    assert!(profiler.cached().is_some());
}

#[test]
fn one_failing_probe_does_not_blank_the_record() {
    let probe = FakeProbe {
        touch_points: Err(ProbeError::Unavailable("navigator.maxTouchPoints")),
        coarse: Err(ProbeError::Failed {
            probe: "matchMedia",
            message: "SecurityError".into(),
        }),
        fine: Err(ProbeError::Unavailable("matchMedia")),
        reduced_motion: Ok(true),
        css: Ok(true),
        memory: Err(ProbeError::Unavailable("navigator.deviceMemory")),
        cores: Ok(Some(12)),
        calls: Cell::new(0),
    };
    let caps = DeviceProfiler::inspect(&probe);
    assert!(!caps.touch_support);
    assert_eq!(caps.pointer, PointerType::Fine);
    assert!(caps.reduced_motion);
    assert!(caps.supports_blend_modes);
    assert!(caps.supports_3d_transforms);
    assert_eq!(caps.device_memory_gb, None);
    assert_eq!(caps.hardware_concurrency, Some(12));
    assert!(!caps.is_low_end_device);
    assert_eq!(caps.quality_ceiling(), QualityLevel::Minimal);
    assert!(caps.transform_config().reduced_motion);
}

#[test]
fn touch_devices_get_mobile_tilt_and_medium_ceiling() {
    let mut probe = FakeProbe::desktop(4.0, 8);
    probe.touch_points = Ok(5);
    probe.coarse = Ok(true);
    probe.fine = Ok(false);
    let caps = DeviceProfiler::inspect(&probe);
    assert!(caps.touch_support);
    assert_eq!(caps.pointer, PointerType::Coarse);
    assert_eq!(caps.quality_ceiling(), QualityLevel::Medium);
    assert_eq!(
        caps.transform_config().max_rotation_deg,
        MOBILE_MAX_ROTATION_DEG
    );
}

#[test]
fn quality_profiles_shed_layers_as_they_step_down() {
    let mut level = QualityLevel::High;
    let mut layers = level.profile().overlay_layers;
    while let Some(lower) = level.step_down() {
        assert!(lower.profile().overlay_layers <= layers);
        layers = lower.profile().overlay_layers;
        level = lower;
    }
    assert_eq!(level, QualityLevel::Minimal);
    assert!(!level.profile().sparkles);
    assert!(QualityLevel::High.profile().complex_blend_modes);
}

#[test]
fn failed_fine_query_defers_to_the_coarse_answer() {
    let mut probe = FakeProbe::desktop(4.0, 8);
    probe.coarse = Ok(true);
    probe.fine = Err(ProbeError::Unavailable("matchMedia"));
    let caps = DeviceProfiler::inspect(&probe);
    assert_eq!(caps.pointer, PointerType::Coarse);
    assert!(caps.touch_support);
    assert_eq!(caps.quality_ceiling(), QualityLevel::Medium);
}
