//! Drawing-surface collaborator
//!
//! The game decides what and when to draw; the surface owns how. The
//! trait mirrors the handful of 2D-canvas primitives the scene needs:
//! filled rects (axis-aligned and rotated), filled circles, stroked
//! polylines, gradient paints and a glow (shadow blur) per shape.

use glam::Vec2;

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(...)` string for canvas fill/stroke styles
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Fill styles for shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Linear gradient between two points, stops at fractions of the span
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Vec<(f32, Color)>,
    },
    /// Radial gradient between two circles (canvas-style focal form)
    Radial {
        start: Vec2,
        start_radius: f32,
        end: Vec2,
        end_radius: f32,
        stops: Vec<(f32, Color)>,
    },
}

/// Glow applied around a shape (canvas shadow blur)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Color,
}

/// Primitive draw operations the scene painter is written against
pub trait DrawSurface {
    /// Surface dimensions in drawing units
    fn size(&self) -> (f32, f32);

    /// Axis-aligned filled rectangle from its top-left corner
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);

    /// Filled rectangle rotated about its center. Paint coordinates
    /// are in the rectangle's local frame, origin at its center.
    fn fill_rotated_rect(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        paint: &Paint,
        glow: Option<Glow>,
    );

    /// Filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, glow: Option<Glow>);

    /// Open polyline stroked with round caps
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color);
}

/// A recorded draw operation, payload trimmed to what assertions need
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect {
        origin: Vec2,
        size: Vec2,
    },
    RotatedRect {
        center: Vec2,
        size: Vec2,
        rotation: f32,
        glow: Option<Glow>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        glow: Option<Glow>,
    },
    Polyline {
        points: usize,
        width: f32,
    },
}

/// Surface that records commands instead of drawing. Backs the native
/// headless build and the renderer tests.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
            .count()
    }

    pub fn rotated_rects(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::RotatedRect { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, _paint: &Paint) {
        self.commands.push(DrawCmd::Rect { origin, size });
    }

    fn fill_rotated_rect(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        _paint: &Paint,
        glow: Option<Glow>,
    ) {
        self.commands.push(DrawCmd::RotatedRect {
            center,
            size,
            rotation,
            glow,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _paint: &Paint, glow: Option<Glow>) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            glow,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, _color: Color) {
        self.commands.push(DrawCmd::Polyline {
            points: points.len(),
            width,
        });
    }
}
