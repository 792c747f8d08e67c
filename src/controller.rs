use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Zoom capability owned by the canvas the overlay sits on.
///
/// Step size and any min/max clamping are up to the implementor. Both methods
/// must be safe to call repeatedly and at any time the overlay is shown.
pub trait ZoomController {
    fn zoom_in(&mut self);
    fn zoom_out(&mut self);
}

/// Zoom request produced by activating one of the overlay buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoomAction {
    In,
    Out,
}

impl ZoomAction {
    pub fn label(self) -> &'static str {
        match self {
            ZoomAction::In => "Zoom in",
            ZoomAction::Out => "Zoom out",
        }
    }
}

/// Issues exactly one controller call for the action.
pub fn dispatch(action: ZoomAction, controller: &mut dyn ZoomController) {
    log::debug!("zoom overlay: dispatching {action:?}");
    match action {
        ZoomAction::In => controller.zoom_in(),
        ZoomAction::Out => controller.zoom_out(),
    }
}

/// Controller handle that can be stored in the egui context and shared with
/// the canvas that owns it.
#[derive(Clone)]
pub struct SharedZoomController(Arc<Mutex<dyn ZoomController + Send>>);

impl SharedZoomController {
    pub fn new<C: ZoomController + Send + 'static>(controller: C) -> Self {
        Self(Arc::new(Mutex::new(controller)))
    }

    /// Wraps a controller the canvas keeps its own handle to.
    pub fn from_arc<C: ZoomController + Send + 'static>(controller: Arc<Mutex<C>>) -> Self {
        Self(controller)
    }

    pub(crate) fn dispatch(&self, action: ZoomAction) {
        // poisoned only by a panicking controller call, the controller stays callable
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        dispatch(action, &mut *guard);
    }
}

impl std::fmt::Debug for SharedZoomController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedZoomController").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        zoom_in: usize,
        zoom_out: usize,
    }

    impl ZoomController for Counter {
        fn zoom_in(&mut self) {
            self.zoom_in += 1;
        }

        fn zoom_out(&mut self) {
            self.zoom_out += 1;
        }
    }

    #[test]
    fn dispatch_maps_action_to_single_call() {
        let mut c = Counter::default();
        dispatch(ZoomAction::In, &mut c);
        assert_eq!((c.zoom_in, c.zoom_out), (1, 0));

        dispatch(ZoomAction::Out, &mut c);
        assert_eq!((c.zoom_in, c.zoom_out), (1, 1));
    }

    #[test]
    fn dispatch_is_not_debounced() {
        let mut c = Counter::default();
        for _ in 0..3 {
            dispatch(ZoomAction::In, &mut c);
        }
        assert_eq!((c.zoom_in, c.zoom_out), (3, 0));
    }

    #[test]
    fn shared_controller_reaches_the_same_instance() {
        let inner = Arc::new(Mutex::new(Counter::default()));
        let shared = SharedZoomController::from_arc(inner.clone());
        shared.clone().dispatch(ZoomAction::Out);
        shared.dispatch(ZoomAction::Out);

        let c = inner.lock().unwrap();
        assert_eq!((c.zoom_in, c.zoom_out), (0, 2));
    }
}
