//! Round zoom in / zoom out buttons drawn over the bottom-right corner of an
//! egui canvas.
//!
//! The overlay only draws and reports activations. Zooming itself is done by
//! the canvas through the [`ZoomController`] it hands to the overlay, either
//! directly with [`ZoomOverlay::show`] or by registering it with
//! [`canvas_context::provide`] and calling [`ZoomOverlay::show_in_canvas`].

mod button;
mod config;
mod controller;
mod error;
mod glyph;
mod overlay;

pub mod canvas_context;
pub mod events;

pub use self::button::{ButtonGeometry, ZoomButton};
pub use self::config::{
    format_hex_color, parse_hex_color, OverlayConfig, DEFAULT_BUTTON_COLOR, DEFAULT_GLYPH_COLOR,
    DEFAULT_SIZE,
};
pub use self::controller::{dispatch, SharedZoomController, ZoomAction, ZoomController};
pub use self::error::OverlayError;
pub use self::events::EventSink;
pub use self::glyph::{Glyph, GLYPH_STROKE_WIDTH, GLYPH_VIEWBOX};
pub use self::overlay::{
    OverlayLayout, OverlayResponse, ZoomOverlay, BUTTON_MARGIN, OVERLAY_MARGIN,
};
