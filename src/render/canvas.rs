//! 2D canvas backend for the drawing surface (wasm only)

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::surface::{Color, DrawSurface, Glow, Paint};

/// Draws through a `CanvasRenderingContext2d`. Dimensions follow the
/// canvas element and are refreshed by the shell on resize.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        Self { ctx, width, height }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Set the context fill style for a paint. Gradient construction
    /// can fail on degenerate radii; fall back to the first stop.
    fn set_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.css()),
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                for (offset, color) in stops {
                    let _ = gradient.add_color_stop(*offset, &color.css());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                start,
                start_radius,
                end,
                end_radius,
                stops,
            } => {
                match self.ctx.create_radial_gradient(
                    start.x as f64,
                    start.y as f64,
                    *start_radius as f64,
                    end.x as f64,
                    end.y as f64,
                    *end_radius as f64,
                ) {
                    Ok(gradient) => {
                        for (offset, color) in stops {
                            let _ = gradient.add_color_stop(*offset, &color.css());
                        }
                        self.ctx.set_fill_style_canvas_gradient(&gradient);
                    }
                    Err(_) => {
                        if let Some((_, color)) = stops.first() {
                            self.ctx.set_fill_style_str(&color.css());
                        }
                    }
                }
            }
        }
    }

    fn apply_glow(&self, glow: Option<Glow>) {
        if let Some(glow) = glow {
            self.ctx.set_shadow_blur(glow.blur as f64);
            self.ctx.set_shadow_color(&glow.color.css());
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.set_fill(paint);
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_rotated_rect(
        &mut self,
        center: Vec2,
        size: Vec2,
        rotation: f32,
        paint: &Paint,
        glow: Option<Glow>,
    ) {
        self.ctx.save();
        let _ = self.ctx.translate(center.x as f64, center.y as f64);
        let _ = self.ctx.rotate(rotation as f64);
        self.apply_glow(glow);
        // Paint is already in the rect's local frame
        self.set_fill(paint);
        self.ctx.fill_rect(
            (-size.x / 2.0) as f64,
            (-size.y / 2.0) as f64,
            size.x as f64,
            size.y as f64,
        );
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, glow: Option<Glow>) {
        self.ctx.save();
        self.apply_glow(glow);
        self.set_fill(paint);
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Color) {
        if points.len() < 2 {
            return;
        }
        self.ctx.save();
        self.ctx.set_line_width(width as f64);
        self.ctx.set_line_cap("round");
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x as f64, points[0].y as f64);
        for point in &points[1..] {
            self.ctx.line_to(point.x as f64, point.y as f64);
        }
        self.ctx.stroke();
        self.ctx.restore();
    }
}
