use crate::constants::{CLASS_ANIMATING, CLASS_FLIPPED, CLASS_HOVERING, FADE_EPSILON};
use crate::dom;
use crate::paint;
use glam::Vec3;
use holocard_core::{
    CardController, ControllerEvent, EffectDescriptor, PerformanceGovernor, QualityLevel,
    QualityProfile, Spring,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-card view state the loop keeps between frames.
pub struct CardView {
    pub element: web::HtmlElement,
    pub controller: Rc<RefCell<CardController>>,
    pub spring: Spring<Vec3>,
    // last live effect, replayed at decreasing opacity while the leave ramp runs
    last_effect: Option<EffectDescriptor>,
    overlay_visible: bool,
    events: Vec<ControllerEvent>,
}

impl CardView {
    pub fn new(
        element: web::HtmlElement,
        controller: Rc<RefCell<CardController>>,
        profile: &QualityProfile,
    ) -> Self {
        Self {
            element,
            controller,
            spring: Spring::new(paint::REST, profile.spring),
            last_effect: None,
            overlay_visible: false,
            events: Vec::new(),
        }
    }

    fn frame(&mut self, now: Instant, profile: &QualityProfile) {
        let (effect, state, decay) = {
            let mut ctrl = self.controller.borrow_mut();
            ctrl.set_bounds(dom::element_rect(&self.element));
            self.events.clear();
            ctrl.tick(now, &mut self.events);
            let effect = ctrl.sample_effect();
            (effect, *ctrl.card().state(), ctrl.card().decay_level())
        };
        for ev in self.events.drain(..) {
            log::debug!("[frame] {:?}", ev);
        }

        dom::toggle_class(&self.element, CLASS_FLIPPED, state.is_flipped);
        dom::toggle_class(&self.element, CLASS_ANIMATING, state.is_animating);
        dom::toggle_class(&self.element, CLASS_HOVERING, state.is_hovering);

        self.spring.set_target(paint::transform_target(effect.as_ref()));
        let settled = self.spring.step();
        if effect.is_none() && decay <= FADE_EPSILON && settled && !self.overlay_visible {
            return;
        }

        let transform = paint::smoothed_transform(self.spring.value(), effect.as_ref());
        dom::set_style(&self.element, "transform", &transform.to_css());

        match (effect, self.last_effect) {
            (Some(live), _) => {
                for (name, value) in paint::overlay_vars(&live, 1.0, profile) {
                    dom::set_style(&self.element, name, &value);
                }
                self.last_effect = Some(live);
                self.overlay_visible = true;
            }
            (None, Some(last)) if decay > FADE_EPSILON => {
                let fade = decay / last.intensity.min(1.0).max(FADE_EPSILON);
                for (name, value) in paint::overlay_vars(&last, fade, profile) {
                    dom::set_style(&self.element, name, &value);
                }
            }
            _ => {
                if self.overlay_visible {
                    for (name, value) in paint::cleared_vars() {
                        dom::set_style(&self.element, name, &value);
                    }
                }
                self.overlay_visible = false;
                self.last_effect = None;
            }
        }
    }
}

pub struct FrameContext {
    pub cards: Vec<CardView>,
    pub governor: PerformanceGovernor,
}

impl FrameContext {
    pub fn new(cards: Vec<CardView>, governor: PerformanceGovernor) -> Self {
        let ctx = Self { cards, governor };
        ctx.apply_quality(ctx.governor.quality());
        ctx
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        if let Some(report) = self.governor.record_frame(now) {
            log::debug!(
                "[frame] {:.1} fps ({:.2} ms) {:?}",
                report.sample.fps,
                report.sample.frame_time_ms,
                self.governor.grade()
            );
            if let Some(change) = report.change {
                self.apply_quality(change.level());
                let preset = change.level().profile().spring;
                for view in &mut self.cards {
                    view.spring.set_config(preset);
                }
            }
        }
        let profile = self.governor.quality().profile();
        for view in &mut self.cards {
            view.frame(now, &profile);
        }
    }

    fn apply_quality(&self, level: QualityLevel) {
        let class = paint::quality_class(level);
        for view in &self.cards {
            dom::replace_quality_class(&view.element, &class);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
