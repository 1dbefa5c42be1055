use crate::constants::{
    CHAR_CLASS, FIRST_NAME_CLASS, GHOST_CURSOR_CLASS, LAST_NAME_CLASS, LAST_NAME_WRAPPER_CLASS,
};
use crate::dom::{self, Interval, Listener};
use crate::events::{self, InputWiring};
use crate::frame::{self, AnimationLoop, Clock, FrameContext, WidgetElements};
use hero_core::{WidgetConfig, WidgetController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// A live widget. Everything it registered with the browser is torn down
/// when this is dropped.
pub struct Mounted {
    element_id: String,
    frame_loop: Option<AnimationLoop>,
    timers: Vec<Interval>,
    listeners: Vec<Listener>,
    elements: Rc<WidgetElements>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.take();
        self.timers.clear();
        self.listeners.clear();
        self.elements.remove();
        log::info!("[mount] #{} unmounted", self.element_id);
    }
}

fn build_elements(
    document: &web::Document,
    container: web::Element,
    config: &WidgetConfig,
) -> anyhow::Result<WidgetElements> {
    let original = container.inner_html();
    container.set_inner_html("");
    fill_container(document, container.clone(), config).map_err(|e| {
        container.set_inner_html(&original);
        e
    })
}

fn fill_container(
    document: &web::Document,
    container: web::Element,
    config: &WidgetConfig,
) -> anyhow::Result<WidgetElements> {
    let first_name = dom::create_child(document, &container, "div", FIRST_NAME_CLASS)?;
    let mut chars = Vec::with_capacity(config.char_count());
    for c in config.name.chars() {
        let span = dom::create_child(document, &first_name, "span", CHAR_CLASS)?;
        span.set_text_content(Some(&c.to_string()));
        chars.push(span);
    }
    let last_name_wrapper =
        dom::create_child(document, &container, "div", LAST_NAME_WRAPPER_CLASS)?;
    let last_name = dom::create_child(document, &last_name_wrapper, "span", LAST_NAME_CLASS)?;
    let ghost = dom::create_child(document, &container, "div", GHOST_CURSOR_CLASS)?;
    Ok(WidgetElements {
        container,
        first_name,
        chars,
        last_name_wrapper,
        last_name,
        ghost,
    })
}

pub fn mount(element_id: &str, config: WidgetConfig) -> anyhow::Result<Mounted> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;

    let clock = Clock::start();
    let idle_poll_ms = config.idle_poll_interval.as_millis() as u32;
    let language_ms = config.language_period.as_millis() as u32;
    let controller = WidgetController::new(config, clock.now())?;
    let elements = Rc::new(build_elements(&document, container, controller.config())?);
    let controller = Rc::new(RefCell::new(controller));

    // from here on a failed step drops `mounted`, which restores the container
    let mut mounted = Mounted {
        element_id: element_id.to_string(),
        frame_loop: None,
        timers: Vec::new(),
        listeners: Vec::new(),
        elements: elements.clone(),
    };

    // layout may not be ready yet; the idle poll measures again
    let rect = dom::widget_rect(&elements.container);
    controller.borrow_mut().set_bounds(rect.bounds());

    let wiring = InputWiring {
        controller: controller.clone(),
        elements: elements.clone(),
        clock,
    };
    mounted.listeners = events::wire_pointer_handlers(&wiring)?;
    mounted.listeners.extend(events::wire_char_hover(&wiring)?);
    mounted.listeners.push(events::wire_resize(&wiring)?);

    mounted.timers.push({
        let w = wiring.clone();
        Interval::new(idle_poll_ms, move || {
            let mut ctl = w.controller.borrow_mut();
            if ctl.bounds().is_none() {
                ctl.set_bounds(dom::widget_rect(&w.elements.container).bounds());
            }
            ctl.poll_idle(w.clock.now());
        })?
    });
    mounted.timers.push({
        let ctl = controller.clone();
        Interval::new(language_ms, move || {
            ctl.borrow_mut().cycle_language();
        })?
    });

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        controller.clone(),
        elements,
        clock,
    )));
    mounted.frame_loop = Some(frame::start_loop(frame_ctx));

    {
        let ctl = controller.borrow();
        log::info!(
            "[mount] #{} name={} variants={} measured={}",
            element_id,
            ctl.config().name,
            ctl.config().languages.len(),
            ctl.bounds().is_some()
        );
    }

    Ok(mounted)
}
