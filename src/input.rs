use hero_core::{Bounds, PointerOffset};

/// Widget bounding box in client (CSS px) coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct WidgetRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl WidgetRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.bounds().has_area()
    }
}

/// Pointer position relative to the widget centre, or `None` while the
/// widget has no layout or the event carries garbage coordinates.
#[inline]
pub fn pointer_offset(client_x: f32, client_y: f32, rect: &WidgetRect) -> Option<PointerOffset> {
    if !rect.is_measured() {
        return None;
    }
    let offset = glam::Vec2::new(client_x, client_y) - rect.center();
    offset.is_finite().then_some(offset)
}
