#![cfg(target_arch = "wasm32")]
use holocard_core::{
    CardConfig, CardController, DeviceProbe, DeviceProfiler, PerformanceGovernor, TouchConfig, TARGET_FPS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod paint;
mod probe;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("holocard-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn card_config(el: &web::Element) -> CardConfig {
    let raw = dom::read_attributes(el);
    CardConfig::from_attributes(raw.as_card_attributes()).unwrap_or_else(|e| {
        log::warn!("[init] {}; using defaults", e);
        CardConfig::default()
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let profiler = DeviceProfiler::new();
    let browser = probe::BrowserProbe::new(window.clone());
    let caps = *profiler.capabilities(Some(&browser as &dyn DeviceProbe));
    let ceiling = caps.quality_ceiling();
    let transform = caps.transform_config();
    let governor = PerformanceGovernor::new(TARGET_FPS, ceiling);
    let profile = governor.quality().profile();

    let elements = dom::find_cards(&document);
    if elements.is_empty() {
        log::info!("no {} elements found", constants::CARD_SELECTOR);
        return Ok(());
    }

    let mut views = Vec::with_capacity(elements.len());
    for element in elements {
        let config = card_config(&element);
        dom::ensure_focusable(&element);
        let controller = Rc::new(RefCell::new(CardController::new(
            config,
            transform,
            TouchConfig::default(),
        )));
        events::wire_card(&events::CardWiring {
            element: element.clone(),
            controller: controller.clone(),
            contact: Rc::new(RefCell::new(input::ContactTracker::default())),
        });
        views.push(frame::CardView::new(element, controller, &profile));
    }
    log::info!("[init] {} card(s), quality ceiling {}", views.len(), ceiling);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(views, governor)));
    frame::start_loop(frame_ctx);
    Ok(())
}
