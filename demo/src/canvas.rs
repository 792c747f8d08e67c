use egui::{Color32, Id, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};
use egui_zoom_overlay::ZoomController;
use petgraph::{stable_graph::StableGraph, Undirected};
use rand::Rng;

const ZOOM_STEP: f32 = 0.1;
const MIN_ZOOM: f32 = 0.1;
const MAX_ZOOM: f32 = 10.;
const NODE_RADIUS: f32 = 6.;
const SPREAD: f32 = 200.;

pub type DemoGraph = StableGraph<Pos2, (), Undirected>;

/// Pan and zoom of the demo canvas. Zoom steps keep the canvas center in place.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub zoom: f32,
    pub pan: Vec2,
    rect: Rect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.,
            pan: Vec2::ZERO,
            rect: Rect::NOTHING,
        }
    }
}

impl Viewport {
    fn canvas_to_screen(&self, pos: Pos2) -> Pos2 {
        (pos.to_vec2() * self.zoom + self.pan).to_pos2()
    }

    /// Zooms by `delta` (relative), compensating pan so the canvas center stays put.
    fn zoom_by(&mut self, delta: f32) {
        let new_zoom = (self.zoom * (1. + delta)).clamp(MIN_ZOOM, MAX_ZOOM);
        let center = self.rect.center().to_vec2();
        let graph_center = (center - self.pan) / self.zoom;
        self.pan += graph_center * self.zoom - graph_center * new_zoom;
        self.zoom = new_zoom;
        log::debug!("demo canvas: zoom {:.2}", self.zoom);
    }
}

impl ZoomController for Viewport {
    fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    fn zoom_out(&mut self) {
        self.zoom_by(-ZOOM_STEP);
    }
}

pub fn generate_graph(nodes: usize, edges: usize) -> DemoGraph {
    let mut rng = rand::rng();
    let mut g = DemoGraph::default();
    let idxs: Vec<_> = (0..nodes)
        .map(|_| {
            g.add_node(Pos2::new(
                rng.random_range(-SPREAD..SPREAD),
                rng.random_range(-SPREAD..SPREAD),
            ))
        })
        .collect();
    if idxs.is_empty() {
        return g;
    }
    for _ in 0..edges {
        let a = idxs[rng.random_range(0..idxs.len())];
        let b = idxs[rng.random_range(0..idxs.len())];
        if a != b {
            g.add_edge(a, b, ());
        }
    }
    g
}

/// Draws the graph through `viewport`; dragging the background pans.
pub fn show(ui: &mut Ui, id: Id, g: &DemoGraph, viewport: &mut Viewport) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
    if viewport.rect == Rect::NOTHING {
        viewport.pan = response.rect.center().to_vec2();
    }
    viewport.rect = response.rect;
    if response.dragged() {
        viewport.pan += response.drag_delta();
    }

    let stroke = Stroke::new(1., ui.visuals().weak_text_color());
    let fill = ui.visuals().widgets.inactive.fg_stroke.color;
    let mut shapes = Vec::with_capacity(g.node_count() + g.edge_count());
    for e in g.edge_indices() {
        if let Some((a, b)) = g.edge_endpoints(e) {
            shapes.push(Shape::line_segment(
                [viewport.canvas_to_screen(g[a]), viewport.canvas_to_screen(g[b])],
                stroke,
            ));
        }
    }
    for n in g.node_indices() {
        shapes.push(Shape::circle_filled(
            viewport.canvas_to_screen(g[n]),
            NODE_RADIUS * viewport.zoom,
            fill,
        ));
    }
    painter.extend(shapes);
    painter.text(
        response.rect.left_top() + Vec2::splat(8.),
        egui::Align2::LEFT_TOP,
        format!("{id:?} zoom {:.2}", viewport.zoom),
        egui::FontId::monospace(12.),
        Color32::GRAY,
    );
}
