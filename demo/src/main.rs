use std::sync::{Arc, Mutex, PoisonError};

use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::{Color32, Context, Id};
use egui_zoom_overlay::{
    canvas_context, OverlayConfig, OverlayError, SharedZoomController, ZoomOverlay,
};

mod canvas;

use canvas::{DemoGraph, Viewport};

const NODE_COUNT: usize = 40;
const EDGE_COUNT: usize = 60;

pub struct DemoApp {
    g: DemoGraph,
    canvas_id: Id,
    viewport: Arc<Mutex<Viewport>>,
    config: OverlayConfig,
}

impl DemoApp {
    fn new(cc: &CreationContext<'_>) -> Self {
        let canvas_id = Id::new("demo_canvas");
        let viewport = Arc::new(Mutex::new(Viewport::default()));
        canvas_context::provide(
            &cc.egui_ctx,
            canvas_id,
            SharedZoomController::from_arc(viewport.clone()),
        );

        Self {
            g: canvas::generate_graph(NODE_COUNT, EDGE_COUNT),
            canvas_id,
            viewport,
            config: OverlayConfig::default(),
        }
    }

    fn side_panel(&mut self, ctx: &Context) {
        egui::SidePanel::right("overlay_settings").show(ctx, |ui| {
            ui.heading("Overlay");
            ui.add(egui::Slider::new(&mut self.config.size, 16.0..=96.0).text("size"));
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut self.config.glyph_color);
                ui.label("glyph");
            });
            ui.horizontal(|ui| {
                ui.color_edit_button_srgba(&mut self.config.button_color);
                ui.label("button");
            });
            if ui.button("reset").clicked() {
                self.config = OverlayConfig::default();
            }
            ui.separator();
            if ui.button("dark buttons").clicked() {
                self.config = self
                    .config
                    .with_glyph_color(Color32::BLACK)
                    .with_button_color(Color32::from_rgb(0xee, 0xee, 0xee));
            }
        });
    }
}

impl App for DemoApp {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.side_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            {
                let mut viewport = self.viewport.lock().unwrap_or_else(PoisonError::into_inner);
                canvas::show(ui, self.canvas_id, &self.g, &mut viewport);
            }

            let shown: Result<_, OverlayError> = ZoomOverlay::new(self.config)
                .with_id(self.canvas_id.with("zoom_overlay"))
                .show_in_canvas(ui, self.canvas_id);
            // the controller is registered in `DemoApp::new`
            if let Err(err) = shown {
                panic!("zoom overlay is not wired to the canvas: {err}");
            }
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    run_native(
        "zoom_overlay_demo",
        NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
