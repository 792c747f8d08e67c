//! Registry that lets a canvas expose its zoom controller to overlays drawn on
//! top of it without the application wiring the two together.
//!
//! Controllers are kept in egui's temporary context data, keyed by the canvas
//! id, so lookups are scoped to one canvas and never fall back to another.

use egui::{Context, Id};

use crate::{OverlayError, SharedZoomController};

const KEY_PREFIX: &str = "egui_zoom_overlay_controller";

fn key(canvas_id: Id) -> Id {
    Id::new(KEY_PREFIX).with(canvas_id)
}

/// Registers `controller` as the zoom capability of the canvas `canvas_id`.
///
/// Replaces a previously registered controller for the same canvas.
pub fn provide(ctx: &Context, canvas_id: Id, controller: SharedZoomController) {
    log::trace!("zoom overlay: controller provided for canvas {canvas_id:?}");
    ctx.data_mut(|data| data.insert_temp(key(canvas_id), controller));
}

/// Looks up the controller registered for `canvas_id`.
pub fn resolve(ctx: &Context, canvas_id: Id) -> Result<SharedZoomController, OverlayError> {
    ctx.data(|data| data.get_temp::<SharedZoomController>(key(canvas_id)))
        .ok_or(OverlayError::ControllerUnavailable { canvas_id })
}

/// Removes the controller registered for `canvas_id`, if any.
pub fn revoke(ctx: &Context, canvas_id: Id) {
    log::trace!("zoom overlay: controller revoked for canvas {canvas_id:?}");
    ctx.data_mut(|data| data.remove::<SharedZoomController>(key(canvas_id)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZoomController;

    struct Noop;

    impl ZoomController for Noop {
        fn zoom_in(&mut self) {}
        fn zoom_out(&mut self) {}
    }

    #[test]
    fn resolve_without_provide_fails() {
        let ctx = Context::default();
        let canvas_id = Id::new("canvas");
        let err = resolve(&ctx, canvas_id).unwrap_err();
        assert_eq!(err, OverlayError::ControllerUnavailable { canvas_id });
    }

    #[test]
    fn lookup_is_scoped_to_canvas_id() {
        let ctx = Context::default();
        provide(&ctx, Id::new("a"), SharedZoomController::new(Noop));

        assert!(resolve(&ctx, Id::new("a")).is_ok());
        assert!(resolve(&ctx, Id::new("b")).is_err());

        revoke(&ctx, Id::new("a"));
        assert!(resolve(&ctx, Id::new("a")).is_err());
    }
}
