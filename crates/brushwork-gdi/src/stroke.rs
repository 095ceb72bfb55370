//! Pen strokes: lines, rectangle outlines, curves and polylines.
//!
//! Strokes are built from blits of the default sprites. Axis-aligned strokes
//! become filled rectangles; diagonal ones become a soft line sprite rotated
//! about the start point. Dashed strokes are split into independent solid
//! pieces.

use brushwork_engine::coords::{Rect, Vec2};

use crate::curve::{self, DEFAULT_SEGMENTS};
use crate::error::DrawError;
use crate::graphics::Graphics;
use crate::pen::{DashStyle, Pen};

/// Dash pitch in multiples of the pen width.
pub const DASH_PITCH_FACTOR: f32 = 6.0;
/// Gap at the end of every pitch.
pub const DASH_GAP: f32 = 2.0;

/// One solid piece of a dashed stroke, measured along the stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DashSpan {
    pub offset: f32,
    pub len: f32,
}

/// Splits a stroke of length `total` into dashes.
///
/// Dashes start every `6 × pen_width` and are `2` units shorter than the
/// pitch, but never shorter than half the pitch, so hairline pens still
/// draw. The last one is truncated at `total`.
pub fn dash_spans(total: f32, pen_width: f32) -> Vec<DashSpan> {
    let pitch = pen_width * DASH_PITCH_FACTOR;
    if pitch <= 0.0 || total <= 0.0 {
        return Vec::new();
    }
    let dash = (pitch - DASH_GAP).max(pitch * 0.5);
    let count = (total / pitch).ceil() as usize;
    (0..count)
        .map(|k| {
            let offset = k as f32 * pitch;
            DashSpan { offset, len: dash.min(total - offset) }
        })
        .filter(|s| s.len > 0.0)
        .collect()
}

/// Filled rectangle covering a horizontal or vertical line.
///
/// Vertical strokes extend past the lower endpoint by the pen width;
/// horizontal ones do not.
pub fn axis_aligned_stroke_rect(from: Vec2, to: Vec2, width: f32) -> Rect {
    if from.x == to.x {
        let (top, bottom) = if from.y < to.y { (from.y, to.y) } else { (to.y, from.y) };
        Rect::new(from.x, top, width, bottom - top + width)
    } else {
        let (left, right) = if from.x < to.x { (from.x, to.x) } else { (to.x, from.x) };
        Rect::new(left, from.y, right - left, width)
    }
}

/// The rectangles making up a rectangle outline, top, right, bottom, left.
///
/// Solid vertical sides are shortened by `2 × width` so corners are covered
/// once. The bottom side needs `height > 1`, the left side `width > 1`.
pub fn outline_sides(rect: Rect, width: f32, dash: DashStyle) -> Vec<Rect> {
    let r = rect.normalized();
    let (x, y, w, h) = (r.x(), r.y(), r.width(), r.height());
    let has_bottom = h > 1.0;
    let has_left = w > 1.0;

    let mut sides = Vec::with_capacity(4);
    match dash {
        DashStyle::Solid => {
            let inner = h - width * 2.0;
            sides.push(Rect::new(x, y, w, width));
            sides.push(Rect::new(x + w - width, y + width, width, inner));
            if has_bottom {
                sides.push(Rect::new(x, y + h - width, w, width));
            }
            if has_left {
                sides.push(Rect::new(x, y + width, width, inner));
            }
        }
        DashStyle::Dash => {
            for s in dash_spans(w, width) {
                sides.push(Rect::new(x + s.offset, y, s.len, width));
                if has_bottom {
                    sides.push(Rect::new(x + s.offset, y + h - width, s.len, width));
                }
            }
            for s in dash_spans(h, width) {
                sides.push(Rect::new(x + w - width, y + s.offset, width, s.len));
                if has_left {
                    sides.push(Rect::new(x, y + s.offset, width, s.len));
                }
            }
        }
    }
    sides.retain(|r| !r.is_empty());
    sides
}

impl Graphics<'_> {
    /// Straight line. Transparent pens and zero-length lines draw nothing.
    pub fn draw_line(&mut self, pen: &Pen, from: Vec2, to: Vec2) {
        if pen.color.is_transparent() {
            return;
        }
        if from == to {
            self.report(DrawError::Degenerate { op: "draw_line" });
            return;
        }
        self.stroke_segment(pen, from, to);
    }

    /// Rectangle outline. Skipped for transparent pens and when outlines are
    /// suppressed.
    pub fn draw_rectangle(&mut self, pen: &Pen, rect: Rect) {
        if self.config.no_rects || pen.color.is_transparent() {
            return;
        }
        if self.config.line_primitives {
            let max = rect.max();
            let corners = [
                rect.origin,
                Vec2::new(max.x, rect.origin.y),
                max,
                Vec2::new(rect.origin.x, max.y),
            ]
            .map(|p| self.resolve(p));
            for i in 0..4 {
                self.surface.line(corners[i], corners[(i + 1) % 4], pen.color);
            }
            return;
        }
        let sides: Vec<Rect> = outline_sides(rect, pen.width, pen.dash_style)
            .into_iter()
            .map(|r| self.resolve_rect(r))
            .collect();
        let white = self.resources.assets.white;
        self.blit_resolved(white, pen.color, &sides, None);
    }

    /// Bezier curve through `points`, flattened at the default resolution.
    pub fn draw_curve(&mut self, pen: &Pen, points: &[Vec2]) {
        self.draw_curve_segments(pen, points, DEFAULT_SEGMENTS);
    }

    pub fn draw_curve_segments(&mut self, pen: &Pen, points: &[Vec2], segments: usize) {
        match points {
            [] | [_] => self.report(DrawError::Degenerate { op: "draw_curve" }),
            [a, b] => self.draw_line(pen, *a, *b),
            _ => {
                if pen.color.is_transparent() {
                    return;
                }
                for pair in curve::flatten(points, segments).windows(2) {
                    if pair[0] != pair[1] {
                        self.stroke_segment(pen, pair[0], pair[1]);
                    }
                }
            }
        }
    }

    /// Open polyline of 1px line primitives; pen width and dash are ignored.
    pub fn draw_polygon(&mut self, pen: &Pen, points: &[Vec2]) {
        if points.len() < 2 {
            self.report(DrawError::Degenerate { op: "draw_polygon" });
            return;
        }
        if pen.color.is_transparent() {
            return;
        }
        let resolved: Vec<Vec2> = points.iter().map(|p| self.resolve(*p)).collect();
        for pair in resolved.windows(2) {
            self.surface.line(pair[0], pair[1], pen.color);
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn stroke_segment(&mut self, pen: &Pen, from: Vec2, to: Vec2) {
        if self.config.line_primitives {
            let (a, b) = (self.resolve(from), self.resolve(to));
            self.surface.line(a, b, pen.color);
            return;
        }

        if from.x != to.x && from.y != to.y {
            let delta = to - from;
            let angle = delta.y.atan2(delta.x).to_degrees();
            let origin = self.resolve(from);
            let pieces: Vec<Rect> = match pen.dash_style {
                DashStyle::Solid => vec![Rect::from_origin_size(origin, Vec2::new(delta.length(), pen.width))],
                DashStyle::Dash => dash_spans(delta.length(), pen.width)
                    .into_iter()
                    .map(|s| Rect::new(origin.x + s.offset, origin.y, s.len, pen.width))
                    .collect(),
            };
            let sprite = self.resources.assets.smooth_line;
            self.blit_resolved(sprite, pen.color, &pieces, Some((angle, origin)));
            return;
        }

        let rect = axis_aligned_stroke_rect(from, to, pen.width);
        let vertical = from.x == to.x;
        let pieces: Vec<Rect> = match pen.dash_style {
            DashStyle::Solid => vec![rect],
            DashStyle::Dash if vertical => dash_spans(rect.height(), pen.width)
                .into_iter()
                .map(|s| Rect::new(rect.x(), rect.y() + s.offset, pen.width, s.len))
                .collect(),
            DashStyle::Dash => dash_spans(rect.width(), pen.width)
                .into_iter()
                .map(|s| Rect::new(rect.x() + s.offset, rect.y(), s.len, pen.width))
                .collect(),
        };
        let pieces: Vec<Rect> = pieces.into_iter().map(|r| self.resolve_rect(r)).collect();
        let white = self.resources.assets.white;
        self.blit_resolved(white, pen.color, &pieces, None);
    }
}
