use egui::{pos2, vec2, Id, Rect, Response, Ui, UiBuilder};

use crate::{
    canvas_context, dispatch, events::Event, events::PayloadZoomRequest, EventSink,
    OverlayConfig, OverlayError, ZoomAction, ZoomButton, ZoomController,
};

/// Distance of the overlay from the right and bottom edges of the host rect.
pub const OVERLAY_MARGIN: f32 = 10.;

/// Spacing kept around each button inside the overlay.
pub const BUTTON_MARGIN: f32 = 5.;

const DEFAULT_ID: &str = "egui_zoom_overlay";

/// Where the overlay and its buttons end up for a given host rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLayout {
    pub container: Rect,
    pub zoom_in: Rect,
    pub zoom_out: Rect,
}

impl OverlayLayout {
    /// Stacks the zoom in button above the zoom out button in the bottom-right
    /// corner of `host`.
    pub fn compute(host: Rect, size: f32) -> Self {
        let slot = size + 2. * BUTTON_MARGIN;
        let bottom_right = pos2(host.right() - OVERLAY_MARGIN, host.bottom() - OVERLAY_MARGIN);
        let container = Rect::from_min_max(bottom_right - vec2(slot, 2. * slot), bottom_right);

        let zoom_in = Rect::from_min_size(
            container.min + vec2(BUTTON_MARGIN, BUTTON_MARGIN),
            vec2(size, size),
        );
        let zoom_out = zoom_in.translate(vec2(0., slot));

        Self {
            container,
            zoom_in,
            zoom_out,
        }
    }
}

/// What the overlay did this frame.
#[derive(Debug, Clone)]
pub struct OverlayResponse {
    pub zoom_in: Response,
    pub zoom_out: Response,
    pub layout: OverlayLayout,
    /// Action sent to the controller this frame, if a button was activated.
    pub action: Option<ZoomAction>,
}

/// Zoom in / zoom out buttons floating over the bottom-right corner of a canvas.
///
/// The overlay keeps no state between frames. Each activated button results in
/// exactly one call to the [`ZoomController`] of the canvas; zoom level, step
/// size and limits stay with the controller.
///
/// The buttons are drawn into the layer of the `ui` passed to `show`, so show
/// the overlay after the canvas: later widgets of a layer paint over and take
/// clicks before the earlier ones, wherever that layer ends up (panel, window).
///
/// ```no_run
/// # use egui_zoom_overlay::{ZoomController, ZoomOverlay, OverlayConfig};
/// # struct Canvas { zoom: f32 }
/// # impl ZoomController for Canvas {
/// #     fn zoom_in(&mut self) { self.zoom *= 1.1 }
/// #     fn zoom_out(&mut self) { self.zoom /= 1.1 }
/// # }
/// # fn ui(ui: &mut egui::Ui, canvas: &mut Canvas) {
/// ZoomOverlay::new(OverlayConfig::default().with_size(32.)).show(ui, canvas);
/// # }
/// ```
pub struct ZoomOverlay<'a> {
    config: OverlayConfig,
    id: Id,
    events_sink: Option<&'a dyn EventSink>,
}

impl Default for ZoomOverlay<'_> {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl<'a> ZoomOverlay<'a> {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            id: Id::new(DEFAULT_ID),
            events_sink: None,
        }
    }

    /// Id salt of the overlay. Needs to be distinct for every canvas showing one.
    pub fn with_id(mut self, id: impl std::hash::Hash) -> Self {
        self.id = Id::new(id);
        self
    }

    /// Publishes an [`Event::ZoomRequest`] for every activation.
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }

    /// Shows the overlay over the rect of `ui` and sends activations to `controller`.
    pub fn show(self, ui: &mut Ui, controller: &mut dyn ZoomController) -> OverlayResponse {
        let res = self.render(ui);
        if let Some(action) = res.action {
            dispatch(action, controller);
            self.publish(action);
        }
        res
    }

    /// Shows the overlay using the controller registered for `canvas_id` with
    /// [`canvas_context::provide`].
    ///
    /// Fails without drawing anything when the canvas has not registered a controller.
    pub fn show_in_canvas(
        self,
        ui: &mut Ui,
        canvas_id: Id,
    ) -> Result<OverlayResponse, OverlayError> {
        let controller = canvas_context::resolve(ui.ctx(), canvas_id)?;
        let res = self.render(ui);
        if let Some(action) = res.action {
            controller.dispatch(action);
            self.publish(action);
        }
        Ok(res)
    }

    fn render(&self, ui: &mut Ui) -> OverlayResponse {
        self.warn_on_invalid_size(ui);

        let host = ui.max_rect();
        let layout = OverlayLayout::compute(host, self.config.effective_size());
        let zoom_in = ZoomButton::new(ZoomAction::In, &self.config);
        let zoom_out = ZoomButton::new(ZoomAction::Out, &self.config);

        // a child ui does not move the host's cursor, the canvas layout is left untouched
        let mut overlay_ui = ui.new_child(
            UiBuilder::new()
                .id_salt(self.id)
                .max_rect(layout.container),
        );
        let zoom_in = overlay_ui.put(layout.zoom_in, zoom_in);
        let zoom_out = overlay_ui.put(layout.zoom_out, zoom_out);

        let action = if zoom_in.clicked() {
            Some(ZoomAction::In)
        } else if zoom_out.clicked() {
            Some(ZoomAction::Out)
        } else {
            None
        };

        OverlayResponse {
            zoom_in,
            zoom_out,
            layout,
            action,
        }
    }

    fn publish(&self, action: ZoomAction) {
        if let Some(sink) = self.events_sink {
            sink.send(Event::ZoomRequest(PayloadZoomRequest { action }));
        }
    }

    /// Logs an invalid size once for every run of frames it stays invalid.
    ///
    /// Returns whether a warning was logged this frame.
    fn warn_on_invalid_size(&self, ui: &Ui) -> bool {
        let key = self.id.with("invalid_size_warned");
        let Err(err) = self.config.validate() else {
            ui.data_mut(|data| data.remove::<bool>(key));
            return false;
        };
        let already_warned = ui.data_mut(|data| {
            let warned = data.get_temp::<bool>(key).unwrap_or(false);
            data.insert_temp(key, true);
            warned
        });
        if !already_warned {
            log::warn!("zoom overlay {:?}: {err}, buttons collapse to zero size", self.id);
        }
        !already_warned
    }
}
