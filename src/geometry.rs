/// Shared geometric and color primitives used across canvas and editor modules.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CanvasBounds {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalizes a drag from any direction into a valid box. Zero-area
    /// boxes are permitted; a click without a drag commits a degenerate
    /// shape rather than failing.
    pub fn from_corners(a: CanvasPoint, b: CanvasPoint) -> Self {
        let width = i64::from(a.x.max(b.x)) - i64::from(a.x.min(b.x));
        let height = i64::from(a.y.max(b.y)) - i64::from(a.y.min(b.y));
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
        }
    }

    /// Symmetric outward expansion, used for the focus highlight box.
    pub fn expanded(self, margin: u32) -> Self {
        let margin_i = i32::try_from(margin).unwrap_or(i32::MAX);
        Self {
            x: self.x.saturating_sub(margin_i),
            y: self.y.saturating_sub(margin_i),
            width: self.width.saturating_add(margin.saturating_mul(2)),
            height: self.height.saturating_add(margin.saturating_mul(2)),
        }
    }

    pub fn contains(&self, point: CanvasPoint) -> bool {
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        i64::from(point.x) >= i64::from(self.x)
            && i64::from(point.x) < right
            && i64::from(point.y) >= i64::from(self.y)
            && i64::from(point.y) < bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}
