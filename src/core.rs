//! Core types and capability traits for the widget layer.

use embassy_time::Instant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use thiserror_no_std::Error;

use crate::widgets::Widget;

/// A sampled 2D touch point in display pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: u16,
    pub y: u16,
}

impl TouchPoint {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}

/// Result of offering a touch point to a widget or a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResult {
    /// The point fell inside a widget; its update ran (or, for a debounced
    /// button, was deliberately ignored). Dispatch stops here.
    Handled,
    /// The point fell outside; offer it to the next widget.
    NotHandled,
}

/// User hook bound to a widget at construction.
///
/// Invoked synchronously with the touch point and the widget itself on
/// every accepted touch, before the widget's own value update runs. The
/// hook may read or mutate the widget through the `&mut Widget`. The
/// returned bool is passed through to no one — the library assigns it no
/// meaning.
pub type TouchHook = fn(TouchPoint, &mut Widget) -> bool;

/// Display extent in pixels.
///
/// Widgets that derive travel limits from the screen edge (the fader) take
/// this at construction instead of assuming a fixed panel. The reference
/// resolution is 240x320.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayBounds {
    pub width: u16,
    pub height: u16,
}

impl DisplayBounds {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Errors surfaced at widget construction.
///
/// The touch and draw paths are total over their (clamped) input domain;
/// only construction can reject geometry the widget could not render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// Bounding box has a zero-length side
    #[error("widget bounding box has zero area")]
    ZeroArea,

    /// Fader travel bounds collapse at this display width
    #[error("fader travel collapses at display width {width}")]
    NoTravel {
        /// Display width the bounds were derived from
        width: u16,
    },

    /// Fader too short to hold its thumb
    #[error("fader height {height} leaves no thumb")]
    TooShort {
        /// Widget height in pixels
        height: u32,
    },

    /// Knob face too small to plot an indicator
    #[error("knob radius {radius} too small for an indicator")]
    KnobTooSmall {
        /// Radius derived from the bounding box
        radius: u32,
    },
}

/// Trait for any widget that can render itself.
pub trait Drawable {
    /// Full, idempotent render of the widget's current state. Safe to call
    /// at any time; the same internal state produces the same pixels.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Bounding box of this widget.
    fn bounds(&self) -> Rectangle;
}

/// Trait for widgets that respond to touch points.
pub trait Touchable {
    /// Check if a point is within this widget's bounds.
    fn contains_point(&self, point: TouchPoint) -> bool;

    /// Offer a touch point. On a hit this runs the bound hook and the
    /// widget's incremental update before returning — hit-testing and
    /// mutation are deliberately coupled; there is no peek mode.
    fn handle_touch<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        point: TouchPoint,
        now: Instant,
        display: &mut D,
    ) -> Result<TouchResult, D::Error>;
}

/// On-demand touch sampler, implemented by hardware drivers out of crate
/// (e.g. an I2C capacitive controller such as the FT6336U).
///
/// Yields at most one point per poll, in display pixel coordinates. No
/// multi-touch, no pressure.
pub trait TouchSource {
    type Error;

    /// Sample the controller once. `Ok(None)` means no finger down.
    fn poll(&mut self) -> Result<Option<TouchPoint>, Self::Error>;
}
