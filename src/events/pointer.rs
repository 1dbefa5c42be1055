use crate::dom::{self, Listener};
use crate::frame::{Clock, WidgetElements};
use crate::input;
use hero_core::WidgetController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub controller: Rc<RefCell<WidgetController>>,
    pub elements: Rc<WidgetElements>,
    pub clock: Clock,
}

pub fn wire_pointer_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![wire_pointermove(w)?, wire_pointerleave(w)?])
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(&w.elements.container, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let now = w2.clock.now();
        let rect = dom::widget_rect(&w2.elements.container);
        let mut ctl = w2.controller.borrow_mut();
        ctl.set_bounds(rect.bounds());
        match input::pointer_offset(ev.client_x() as f32, ev.client_y() as f32, &rect) {
            Some(offset) => ctl.on_pointer_move(now, offset),
            None => ctl.on_interaction(now),
        }
    })
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::new(&w.elements.container, "pointerleave", move |_ev: web::Event| {
        let now = w2.clock.now();
        w2.controller.borrow_mut().on_pointer_leave(now);
    })
}

/// Per-character hover; `pointerenter`/`pointerleave` do not bubble, so each
/// span reports only itself.
pub fn wire_char_hover(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    let mut out = Vec::with_capacity(w.elements.chars.len() * 2);
    for (i, span) in w.elements.chars.iter().enumerate() {
        let enter = w.clone();
        out.push(Listener::new(span, "pointerenter", move |_ev: web::Event| {
            let now = enter.clock.now();
            enter.controller.borrow_mut().on_char_hover(now, Some(i));
        })?);
        let leave = w.clone();
        out.push(Listener::new(span, "pointerleave", move |_ev: web::Event| {
            let now = leave.clock.now();
            leave.controller.borrow_mut().on_char_hover(now, None);
        })?);
    }
    Ok(out)
}

/// Re-measure the widget whenever the window resizes.
pub fn wire_resize(w: &InputWiring) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let w2 = w.clone();
    Listener::new(&window, "resize", move |_ev: web::Event| {
        let rect = dom::widget_rect(&w2.elements.container);
        w2.controller.borrow_mut().set_bounds(rect.bounds());
    })
}
