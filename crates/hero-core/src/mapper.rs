use crate::constants::{MAGNET_FACTOR, MAX_ROTATION_DEG};
use glam::Vec2;

/// Pointer position minus widget centre, in layout units.
pub type PointerOffset = Vec2;

/// Measured widget size. Absent until the host reports a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Radius used to normalise tilt: half of the smaller side.
    pub fn tilt_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }
}

/// Spring targets derived from one offset sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicsTargets {
    pub translate: Vec2,
    /// Degrees. `x` rotates about the horizontal axis, `y` about the vertical one.
    pub tilt: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPhysicsMapper {
    pub magnet_factor: f32,
    pub max_rotation_deg: f32,
}

impl Default for PointerPhysicsMapper {
    fn default() -> Self {
        Self {
            magnet_factor: MAGNET_FACTOR,
            max_rotation_deg: MAX_ROTATION_DEG,
        }
    }
}

impl PointerPhysicsMapper {
    /// Map an offset to translation and tilt targets.
    ///
    /// Translation is linear and unbounded; the spring ceiling limits it.
    /// Tilt normalises by `Bounds::tilt_radius`, clamps each axis to
    /// [-1, 1] and scales to `max_rotation_deg`. Moving right gives a
    /// negative rotation about the vertical axis, moving down a positive one
    /// about the horizontal axis, so the side under the pointer dips away.
    pub fn map(&self, offset: PointerOffset, bounds: Bounds) -> PhysicsTargets {
        let translate = offset * self.magnet_factor;
        let radius = bounds.tilt_radius();
        if !bounds.has_area() || !offset.is_finite() {
            return PhysicsTargets {
                translate,
                tilt: Vec2::ZERO,
            };
        }
        let x_pct = (offset.x / radius).clamp(-1.0, 1.0);
        let y_pct = (offset.y / radius).clamp(-1.0, 1.0);
        PhysicsTargets {
            translate,
            tilt: Vec2::new(y_pct * self.max_rotation_deg, -x_pct * self.max_rotation_deg),
        }
    }
}
