use crate::input::WidgetRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn widget_rect(el: &web::Element) -> WidgetRect {
    let rect = el.get_bounding_client_rect();
    WidgetRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

pub fn create_child(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Only touches the DOM when the value changed.
#[inline]
pub fn set_style_if_changed(el: &web::Element, style: &str) {
    if el.get_attribute("style").as_deref() != Some(style) {
        _ = el.set_attribute("style", style);
    }
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("listen {}: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// `setInterval` timer cleared on drop.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, handler: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback,
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setInterval: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
