use egui::Id;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// No zoom controller was provided for the canvas the overlay was asked to attach to.
    #[error("no zoom controller registered for canvas {canvas_id:?}")]
    ControllerUnavailable { canvas_id: Id },

    #[error("button size must be a positive finite number, got {0}")]
    InvalidSize(f32),

    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },
}
