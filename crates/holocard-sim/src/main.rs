//! Replays scripted card interactions through `holocard-core` on a virtual
//! clock and logs what the web front-end would paint.
//!
//! ```text
//! holocard-sim [--scenario sweep|flip|tap|hold|quality|all] [--style NAME]
//!              [--mobile] [--speed MS] [--frame-ms MS]
//! ```
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use glam::{Vec2, Vec3};
use holocard_core::{
    CardConfig, CardController, ControllerEvent, EffectDescriptor, PerformanceGovernor,
    QualityLevel, Rect, Routed, Spring, SpringPreset, TouchConfig, TransformConfig, TARGET_FPS,
};
use instant::Instant;

const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 420.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scenario {
    Sweep,
    Flip,
    Tap,
    Hold,
    Quality,
}

impl Scenario {
    const ALL: [Scenario; 5] = [
        Scenario::Sweep,
        Scenario::Flip,
        Scenario::Tap,
        Scenario::Hold,
        Scenario::Quality,
    ];

    fn parse(name: &str) -> anyhow::Result<Vec<Scenario>> {
        Ok(match name {
            "sweep" => vec![Scenario::Sweep],
            "flip" => vec![Scenario::Flip],
            "tap" => vec![Scenario::Tap],
            "hold" => vec![Scenario::Hold],
            "quality" => vec![Scenario::Quality],
            "all" => Scenario::ALL.to_vec(),
            other => bail!("unknown scenario {:?}", other),
        })
    }
}

#[derive(Debug)]
struct Options {
    scenarios: Vec<Scenario>,
    config: CardConfig,
    transform: TransformConfig,
    frame: Duration,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut scenarios = Scenario::ALL.to_vec();
    let mut style = None;
    let mut speed = None;
    let mut mobile = false;
    let mut frame_ms = 16u64;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| anyhow!("{} needs a value", flag));
        match arg.as_str() {
            "--scenario" => scenarios = Scenario::parse(&value("--scenario")?)?,
            "--style" => style = Some(value("--style")?),
            "--speed" => speed = Some(value("--speed")?),
            "--frame-ms" => {
                frame_ms = value("--frame-ms")?
                    .parse()
                    .context("--frame-ms expects milliseconds")?
            }
            "--mobile" => mobile = true,
            other => bail!("unknown argument {:?}", other),
        }
    }
    if frame_ms == 0 {
        bail!("--frame-ms must be positive");
    }

    let config = CardConfig::from_attributes(holocard_core::CardAttributes {
        animation_speed_ms: speed.as_deref(),
        style: style.as_deref(),
        ..Default::default()
    })?;
    let transform = if mobile {
        TransformConfig::mobile()
    } else {
        TransformConfig::desktop()
    };
    Ok(Options {
        scenarios,
        config,
        transform,
        frame: Duration::from_millis(frame_ms),
    })
}

/// One card on a virtual clock, stepped at a fixed frame interval.
struct Session {
    controller: CardController,
    spring: Spring<Vec3>,
    start: Instant,
    now: Instant,
    frame: Duration,
    events: Vec<ControllerEvent>,
}

impl Session {
    fn new(opts: &Options) -> Self {
        let mut controller = CardController::new(opts.config, opts.transform, TouchConfig::default());
        controller.set_bounds(BOUNDS);
        let start = Instant::now();
        Self {
            controller,
            spring: Spring::new(Vec3::new(0.0, 0.0, 1.0), SpringPreset::Holographic),
            start,
            now: start,
            frame: opts.frame,
            events: Vec::new(),
        }
    }

    fn at_ms(&self) -> u128 {
        (self.now - self.start).as_millis()
    }

    /// Run frames until `duration` has passed. Returns the last effect.
    fn run(&mut self, duration: Duration) -> Option<EffectDescriptor> {
        let end = self.now + duration;
        let mut last = None;
        while self.now < end {
            self.now += self.frame;
            last = self.frame_once();
        }
        last
    }

    fn frame_once(&mut self) -> Option<EffectDescriptor> {
        self.events.clear();
        self.controller.tick(self.now, &mut self.events);
        for ev in &self.events {
            log::info!("  t={:>5}ms {:?}", self.at_ms(), ev);
        }
        let effect = self.controller.sample_effect();
        let target = effect.map_or(Vec3::new(0.0, 0.0, 1.0), |e| {
            Vec3::new(e.transform.rotate_x, e.transform.rotate_y, e.transform.scale)
        });
        self.spring.set_target(target);
        self.spring.step();
        effect
    }

    fn log_effect(&self, label: &str, effect: Option<&EffectDescriptor>) {
        let v = self.spring.value();
        match effect {
            Some(e) => log::info!(
                "  t={:>5}ms {:<10} gradient=({:5.1},{:5.1}) opacity={:.3}/{:.3} intensity={:.3} spring=({:6.2},{:6.2},{:.3})",
                self.at_ms(),
                label,
                e.gradient_position.x,
                e.gradient_position.y,
                e.gradient_opacity,
                e.sparkle_opacity,
                e.intensity,
                v.x,
                v.y,
                v.z
            ),
            None => log::info!(
                "  t={:>5}ms {:<10} no effect, decay={:.3} spring=({:6.2},{:6.2},{:.3})",
                self.at_ms(),
                label,
                self.controller.card().decay_level(),
                v.x,
                v.y,
                v.z
            ),
        }
    }
}

fn sweep(opts: &Options) {
    let mut s = Session::new(opts);
    s.controller.pointer_enter(s.now);
    let steps = 8;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let client = BOUNDS.center() + Vec2::new(BOUNDS.width, BOUNDS.height) * (t - 0.5);
        s.controller.pointer_move(client, s.now);
        let effect = s.run(opts.frame * 4);
        s.log_effect(&format!("move {}/{}", i, steps), effect.as_ref());
    }
    s.controller.pointer_leave(s.now);
    for _ in 0..4 {
        let effect = s.run(Duration::from_millis(90));
        s.log_effect("leave", effect.as_ref());
    }
}

fn flip(opts: &Options) {
    let mut s = Session::new(opts);
    s.controller.pointer_enter(s.now);
    s.controller.pointer_move(Vec2::new(220.0, 120.0), s.now);
    let effect = s.run(opts.frame);
    s.log_effect("hover", effect.as_ref());

    log::info!("  t={:>5}ms click -> {:?}", s.at_ms(), s.controller.click(s.now));
    s.run(opts.frame * 2);
    log::info!("  t={:>5}ms click -> {:?}", s.at_ms(), s.controller.click(s.now));
    let effect = s.run(opts.config.animation_speed);
    s.log_effect("back face", effect.as_ref());
    log::info!("  flipped={}", s.controller.card().state().is_flipped);
}

fn tap(opts: &Options) {
    let mut s = Session::new(opts);
    let p = BOUNDS.center();
    s.controller.touch_start(p, s.now);
    s.run(Duration::from_millis(80));
    let gesture = s.controller.touch_end(p, s.now);
    log::info!("  t={:>5}ms touchend -> {:?}", s.at_ms(), gesture.map(|g| g.kind));

    // browsers synthesize mouse events shortly after the touch ends
    s.run(Duration::from_millis(30));
    let routed = [
        s.controller.pointer_enter(s.now),
        s.controller.pointer_move(p, s.now),
        s.controller.click(s.now),
    ];
    log::info!("  t={:>5}ms synthetic mouse -> {:?}", s.at_ms(), routed);
    if routed.contains(&Routed::Handled) {
        log::warn!("  synthetic mouse input reached the card");
    }
    s.run(opts.config.animation_speed);
    log::info!("  flipped={}", s.controller.card().state().is_flipped);
}

fn hold(opts: &Options) {
    let mut s = Session::new(opts);
    let p = BOUNDS.center() + Vec2::new(40.0, -60.0);
    s.controller.touch_start(p, s.now);
    let effect = s.run(opts.frame);
    s.log_effect("press", effect.as_ref());
    let effect = s.run(Duration::from_millis(200));
    s.log_effect("hold", effect.as_ref());
    log::info!("  boost={:.2}", s.controller.card().hold_boost());
    let gesture = s.controller.touch_end(p, s.now);
    log::info!("  t={:>5}ms touchend -> {:?}", s.at_ms(), gesture.map(|g| g.kind));
}

fn quality(opts: &Options) {
    let start = Instant::now();
    let mut governor = PerformanceGovernor::new(TARGET_FPS, QualityLevel::High);
    let mut now = start;
    // a stall in the middle drives a step down, recovery steps back up
    let phases = [(16u64, 120u32), (45, 90), (16, 400)];
    for (frame_ms, frames) in phases {
        for _ in 0..frames {
            if let Some(report) = governor.record_frame(now) {
                log::info!(
                    "  t={:>5}ms fps={:5.1} grade={:?} quality={}{}",
                    (now - start).as_millis(),
                    report.sample.fps,
                    governor.grade(),
                    governor.quality(),
                    report
                        .change
                        .map(|c| format!(" ({:?})", c))
                        .unwrap_or_default()
                );
            }
            now += Duration::from_millis(frame_ms);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args(std::env::args().skip(1))?;
    log::info!(
        "style={} speed={:?} frame={:?} max_rotation={}deg",
        opts.config.style,
        opts.config.animation_speed,
        opts.frame,
        opts.transform.max_rotation_deg
    );
    for scenario in &opts.scenarios {
        log::info!("--- {:?}", scenario);
        match scenario {
            Scenario::Sweep => sweep(&opts),
            Scenario::Flip => flip(&opts),
            Scenario::Tap => tap(&opts),
            Scenario::Hold => hold(&opts),
            Scenario::Quality => quality(&opts),
        }
    }
    Ok(())
}
