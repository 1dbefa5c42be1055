#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod mount;
mod style;

thread_local! {
    // widget mounted by `start` when the page provides the default container
    static AUTO_MOUNTED: RefCell<Option<mount::Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    let has_default = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::DEFAULT_MOUNT_ID))
        .is_some();
    if has_default {
        match mount::mount(constants::DEFAULT_MOUNT_ID, hero_core::WidgetConfig::default()) {
            Ok(m) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(m)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    }
    Ok(())
}

/// Handle for hosts that mount widgets themselves.
#[wasm_bindgen]
pub struct HeroName {
    inner: Option<mount::Mounted>,
}

#[wasm_bindgen]
impl HeroName {
    #[wasm_bindgen(constructor)]
    pub fn new(element_id: &str) -> Result<HeroName, JsValue> {
        mount::mount(element_id, hero_core::WidgetConfig::default())
            .map(|m| HeroName { inner: Some(m) })
            .map_err(|e| {
                log::error!("mount error: {:?}", e);
                JsValue::from_str(&e.to_string())
            })
    }

    pub fn unmount(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }
}

/// Tear down the widget `start` mounted, if any.
#[wasm_bindgen]
pub fn unmount_default() {
    AUTO_MOUNTED.with(|slot| slot.borrow_mut().take());
}
