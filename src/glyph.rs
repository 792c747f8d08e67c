use egui::{pos2, Color32, Pos2, Rect, Shape, Stroke};

use crate::ZoomAction;

/// Side of the square coordinate space glyph strokes are defined in.
pub const GLYPH_VIEWBOX: f32 = 24.;

/// Stroke width in glyph space.
pub const GLYPH_STROKE_WIDTH: f32 = 2.;

const VERTICAL: [Pos2; 2] = [pos2(12., 4.), pos2(12., 20.)];
const HORIZONTAL: [Pos2; 2] = [pos2(4., 12.), pos2(20., 12.)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Plus,
    Minus,
}

impl From<ZoomAction> for Glyph {
    fn from(action: ZoomAction) -> Self {
        match action {
            ZoomAction::In => Glyph::Plus,
            ZoomAction::Out => Glyph::Minus,
        }
    }
}

impl Glyph {
    /// Strokes in glyph space. Minus is the horizontal stroke of plus alone.
    pub fn strokes(self) -> &'static [[Pos2; 2]] {
        match self {
            Glyph::Plus => &[VERTICAL, HORIZONTAL],
            Glyph::Minus => &[HORIZONTAL],
        }
    }

    /// Shapes drawing the glyph scaled into `rect`.
    ///
    /// Every stroke is a line segment plus a filled circle at both ends, which
    /// gives the round caps egui's line segments lack.
    pub fn shapes(self, rect: Rect, color: Color32) -> Vec<Shape> {
        let scale = rect.width().min(rect.height()) / GLYPH_VIEWBOX;
        let width = GLYPH_STROKE_WIDTH * scale;
        let to_screen = |p: Pos2| rect.min + p.to_vec2() * scale;

        let strokes = self.strokes();
        let mut res = Vec::with_capacity(strokes.len() * 3);
        for [a, b] in strokes {
            let (a, b) = (to_screen(*a), to_screen(*b));
            res.push(Shape::line_segment([a, b], Stroke::new(width, color)));
            res.push(Shape::circle_filled(a, width / 2., color));
            res.push(Shape::circle_filled(b, width / 2., color));
        }
        res
    }
}
