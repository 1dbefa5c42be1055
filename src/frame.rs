use crate::dom;
use crate::style;
use hero_core::{RenderFrame, WidgetController};
use instant::{Duration, Instant};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic time since mount, shared by every driver of one widget.
#[derive(Clone, Copy)]
pub struct Clock(Instant);

impl Clock {
    pub fn start() -> Self {
        Clock(Instant::now())
    }

    #[inline]
    pub fn now(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Elements the widget created inside its container.
pub struct WidgetElements {
    pub container: web::Element,
    pub first_name: web::HtmlElement,
    pub chars: Vec<web::HtmlElement>,
    pub last_name_wrapper: web::HtmlElement,
    pub last_name: web::HtmlElement,
    pub ghost: web::HtmlElement,
}

impl WidgetElements {
    pub fn remove(&self) {
        self.first_name.remove();
        self.last_name_wrapper.remove();
        self.ghost.remove();
        _ = self.container.remove_attribute("style");
    }
}

pub struct FrameContext {
    pub controller: Rc<RefCell<WidgetController>>,
    pub elements: Rc<WidgetElements>,
    pub clock: Clock,
    last_highlight: Option<Option<usize>>,
    last_language: Option<usize>,
}

impl FrameContext {
    pub fn new(
        controller: Rc<RefCell<WidgetController>>,
        elements: Rc<WidgetElements>,
        clock: Clock,
    ) -> Self {
        Self {
            controller,
            elements,
            clock,
            last_highlight: None,
            last_language: None,
        }
    }

    pub fn frame(&mut self) {
        let now = self.clock.now();
        let rf = self.controller.borrow_mut().frame(now);
        self.paint(&rf);
    }

    fn paint(&mut self, rf: &RenderFrame) {
        let el = &self.elements;
        dom::set_style_if_changed(&el.container, &style::container_style(rf));
        dom::set_style_if_changed(&el.ghost, &style::ghost_cursor_style(rf));

        let highlighted = rf.highlight.char_index;
        if self.last_highlight != Some(highlighted) {
            for (i, span) in el.chars.iter().enumerate() {
                dom::set_style_if_changed(span, &style::char_style(i, highlighted));
            }
            self.last_highlight = Some(highlighted);
        }

        let (shown, lang_style) = style::language_view(rf);
        if self.last_language != Some(shown) {
            let text = self
                .controller
                .borrow()
                .language_variant(shown)
                .map(str::to_owned);
            el.last_name.set_text_content(text.as_deref());
            self.last_language = Some(shown);
        }
        dom::set_style_if_changed(&el.last_name, &lang_style);
    }
}

/// `requestAnimationFrame` loop. Dropping it cancels the pending frame and
/// releases the self-referencing callback.
pub struct AnimationLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        pending_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));
    AnimationLoop { pending, tick }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}
