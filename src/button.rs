use egui::{
    epaint::CircleShape, vec2, Color32, CursorIcon, Pos2, Rect, Response, Sense, Shape, Stroke,
    Ui, Widget, WidgetInfo, WidgetType,
};

use crate::{Glyph, OverlayConfig, ZoomAction};

/// Circle and glyph placement of a button occupying `rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    pub center: Pos2,
    pub radius: f32,
    /// Square the glyph is drawn into, half the button diameter.
    pub glyph_rect: Rect,
}

impl ButtonGeometry {
    pub fn new(rect: Rect) -> Self {
        let diameter = rect.width().min(rect.height());
        let glyph_side = diameter / 2.;
        Self {
            center: rect.center(),
            radius: diameter / 2.,
            glyph_rect: Rect::from_center_size(rect.center(), vec2(glyph_side, glyph_side)),
        }
    }
}

/// One round zoom button. Check [`Response::clicked`] on the returned
/// response to find out whether it was activated.
#[derive(Debug, Clone, Copy)]
pub struct ZoomButton {
    action: ZoomAction,
    size: f32,
    glyph_color: Color32,
    button_color: Color32,
}

impl ZoomButton {
    pub fn new(action: ZoomAction, config: &OverlayConfig) -> Self {
        Self {
            action,
            size: config.effective_size(),
            glyph_color: config.glyph_color,
            button_color: config.button_color,
        }
    }

    /// Shapes for the button placed at `rect`, circle first, glyph on top.
    pub fn shapes(&self, rect: Rect) -> Vec<Shape> {
        let geometry = ButtonGeometry::new(rect);
        let mut res: Vec<Shape> = vec![CircleShape {
            center: geometry.center,
            radius: geometry.radius,
            fill: self.button_color,
            stroke: Stroke::NONE,
        }
        .into()];
        res.extend(Glyph::from(self.action).shapes(geometry.glyph_rect, self.glyph_color));
        res
    }
}

impl Widget for ZoomButton {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, self.action.label()));

        if ui.is_rect_visible(rect) {
            ui.painter().extend(self.shapes(rect));
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

#[cfg(test)]
mod tests {
    use egui::pos2;

    use super::*;

    #[test]
    fn geometry_follows_size() {
        for size in [1., 40., 60., 333.] {
            let rect = Rect::from_min_size(pos2(10., 20.), vec2(size, size));
            let g = ButtonGeometry::new(rect);
            assert_eq!(g.radius * 2., size);
            assert_eq!(g.glyph_rect.size(), vec2(size / 2., size / 2.));
            assert_eq!(g.glyph_rect.center(), rect.center());
        }
    }

    #[test]
    fn circle_is_filled_with_button_color() {
        let cfg = OverlayConfig::default().with_button_color(Color32::from_rgb(0xee, 0xee, 0xee));
        let button = ZoomButton::new(ZoomAction::In, &cfg);
        let shapes = button.shapes(Rect::from_min_size(Pos2::ZERO, vec2(40., 40.)));

        match &shapes[0] {
            Shape::Circle(c) => {
                assert_eq!(c.fill, Color32::from_rgb(0xee, 0xee, 0xee));
                assert_eq!(c.radius, 20.);
            }
            other => panic!("expected circle, got {other:?}"),
        }
    }

    #[test]
    fn zoom_in_draws_plus_and_zoom_out_draws_minus() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(40., 40.));
        let cfg = OverlayConfig::default();
        let lines = |action| {
            ZoomButton::new(action, &cfg)
                .shapes(rect)
                .iter()
                .filter(|s| matches!(s, Shape::LineSegment { .. }))
                .count()
        };
        assert_eq!(lines(ZoomAction::In), 2);
        assert_eq!(lines(ZoomAction::Out), 1);
    }

    #[test]
    fn negative_size_renders_degenerate() {
        let cfg = OverlayConfig::default().with_size(-10.);
        let button = ZoomButton::new(ZoomAction::Out, &cfg);
        assert_eq!(button.size, 0.);
    }
}
