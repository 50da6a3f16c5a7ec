//! Paper-plane silhouette geometry.

use crate::raster::Vertex;

/// How fractional vertex offsets are snapped to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexRounding {
    /// Drop the fraction, toward zero. Matches the shipped icon pixel for pixel.
    #[default]
    Truncate,
    /// Snap to the nearest pixel.
    Round,
}

impl VertexRounding {
    fn snap(self, value: f64) -> i32 {
        match self {
            VertexRounding::Truncate => value.trunc() as i32,
            VertexRounding::Round => value.round() as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_vertex(self) -> Vertex {
        (self.x as f64, self.y as f64)
    }
}

/// The five points the three panels and two creases are built from.
///
/// The plane points right and is symmetric about the horizontal centre line
/// at its wing tips; the fold sits slightly above centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneGlyph {
    pub nose: Point,
    pub upper_tip: Point,
    pub lower_tip: Point,
    pub fold_top: Point,
    pub fold_tail: Point,
}

// Offsets as fractions of the scale constant.
const NOSE_REACH: f64 = 0.78;
const WING_SPAN: f64 = 0.50;
const FOLD_X: f64 = 0.06;
const FOLD_TOP_Y: f64 = 0.04;
const FOLD_TAIL_Y: f64 = 0.26;

impl PlaneGlyph {
    /// Lay the glyph out around `center` with scale constant `scale`.
    ///
    /// Each offset magnitude is snapped on its own before being added to or
    /// subtracted from the centre.
    pub fn new(center: Point, scale: f64, rounding: VertexRounding) -> Self {
        let offset = |factor: f64| rounding.snap(scale * factor);
        let (cx, cy) = (center.x, center.y);

        Self {
            nose: Point::new(cx + offset(NOSE_REACH), cy),
            upper_tip: Point::new(cx - offset(NOSE_REACH), cy - offset(WING_SPAN)),
            lower_tip: Point::new(cx - offset(NOSE_REACH), cy + offset(WING_SPAN)),
            fold_top: Point::new(cx - offset(FOLD_X), cy - offset(FOLD_TOP_Y)),
            fold_tail: Point::new(cx - offset(FOLD_X), cy + offset(FOLD_TAIL_Y)),
        }
    }

    /// Glyph for a square canvas of edge `size`, centred.
    pub fn for_canvas(size: u32, scale: f64, rounding: VertexRounding) -> Self {
        let half = (size / 2) as i32;
        Self::new(Point::new(half, half), scale, rounding)
    }

    pub fn upper_wing(&self) -> [Vertex; 3] {
        [self.nose.to_vertex(), self.upper_tip.to_vertex(), self.fold_top.to_vertex()]
    }

    pub fn lower_body(&self) -> [Vertex; 3] {
        [self.nose.to_vertex(), self.fold_top.to_vertex(), self.fold_tail.to_vertex()]
    }

    pub fn tail_fin(&self) -> [Vertex; 3] {
        [self.fold_top.to_vertex(), self.lower_tip.to_vertex(), self.fold_tail.to_vertex()]
    }

    /// Crease segments, in drawing order.
    pub fn creases(&self) -> [(Vertex, Vertex); 2] {
        [
            (self.nose.to_vertex(), self.fold_top.to_vertex()),
            (self.fold_top.to_vertex(), self.fold_tail.to_vertex()),
        ]
    }
}
