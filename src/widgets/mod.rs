//! Widget kinds and the shared dispatch machinery.
//!
//! The draw contract is generic over the display (`DrawTarget` is a type
//! parameter), which makes the [`Drawable`] trait not object-safe. The
//! closed [`Widget`] enum is the pragmatic alternative: groups own plain
//! `Widget` values and every dispatch site matches exhaustively over the
//! four kinds.

pub mod button;
pub mod fader;
pub mod knob;
pub mod sketch;

pub use button::Button;
pub use fader::Fader;
pub use knob::Knob;
pub use sketch::Sketch;

use embassy_time::Instant;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::core::{Drawable, TouchHook, TouchPoint, TouchResult, Touchable, WidgetError};
use crate::styling;

/// State shared by every widget kind: fixed geometry, the enable flag, the
/// bound hook and an optional controlled-widget link.
pub struct WidgetCore {
    bounds: Rectangle,
    enabled: bool,
    hook: TouchHook,
    child: Option<usize>,
}

impl WidgetCore {
    pub(crate) fn new(bounds: Rectangle, hook: TouchHook) -> Result<Self, WidgetError> {
        if bounds.size.width == 0 || bounds.size.height == 0 {
            return Err(WidgetError::ZeroArea);
        }
        Ok(Self {
            bounds,
            enabled: true,
            hook,
            child: None,
        })
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Index of a widget this one controls, within the owning group.
    pub fn child(&self) -> Option<usize> {
        self.child
    }

    pub fn set_child(&mut self, child: Option<usize>) {
        self.child = child;
    }

    pub(crate) fn hook(&self) -> TouchHook {
        self.hook
    }
}

/// A concrete widget. Insertion into a [`WidgetGroup`] is by value.
///
/// [`WidgetGroup`]: crate::group::WidgetGroup
pub enum Widget {
    Button(Button),
    Fader(Fader),
    Sketch(Sketch),
    Knob(Knob),
}

impl Widget {
    fn core(&self) -> &WidgetCore {
        match self {
            Widget::Button(w) => &w.core,
            Widget::Fader(w) => &w.core,
            Widget::Sketch(w) => &w.core,
            Widget::Knob(w) => &w.core,
        }
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        match self {
            Widget::Button(w) => &mut w.core,
            Widget::Fader(w) => &mut w.core,
            Widget::Sketch(w) => &mut w.core,
            Widget::Knob(w) => &mut w.core,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.core().is_enabled()
    }

    /// Disabled widgets ignore touch but still draw.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.core_mut().set_enabled(enabled);
    }

    pub fn child(&self) -> Option<usize> {
        self.core().child()
    }

    pub fn set_child(&mut self, child: Option<usize>) {
        self.core_mut().set_child(child);
    }

    /// Fill the widget's screen region with the background color.
    ///
    /// Groups call this for every member on teardown; it is also the way to
    /// blank a single widget before redrawing a different one in its place.
    pub fn clear<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.core()
            .bounds()
            .into_styled(PrimitiveStyle::with_fill(styling::BACKGROUND))
            .draw(display)
    }
}

impl Drawable for Widget {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        match self {
            Widget::Button(w) => w.draw(display),
            Widget::Fader(w) => w.draw(display),
            Widget::Sketch(w) => w.draw(display),
            Widget::Knob(w) => w.draw(display),
        }
    }

    fn bounds(&self) -> Rectangle {
        self.core().bounds()
    }
}

impl Touchable for Widget {
    fn contains_point(&self, point: TouchPoint) -> bool {
        self.core().bounds().contains(point.to_point())
    }

    fn handle_touch<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        point: TouchPoint,
        now: Instant,
        display: &mut D,
    ) -> Result<TouchResult, D::Error> {
        if !self.is_enabled() || !self.contains_point(point) {
            return Ok(TouchResult::NotHandled);
        }

        // The button's debounce gates both the hook and the toggle; a
        // rejected touch still counts as a hit so dispatch stops scanning.
        if let Widget::Button(b) = self
            && !b.accept(now)
        {
            return Ok(TouchResult::Handled);
        }

        let hook = self.core().hook();
        hook(point, self);

        match self {
            Widget::Button(w) => w.update(point, display)?,
            Widget::Fader(w) => w.update(point, display)?,
            Widget::Sketch(w) => w.update(point, display)?,
            Widget::Knob(w) => w.update(point, display)?,
        }
        Ok(TouchResult::Handled)
    }
}

impl From<Button> for Widget {
    fn from(w: Button) -> Self {
        Self::Button(w)
    }
}

impl From<Fader> for Widget {
    fn from(w: Fader) -> Self {
        Self::Fader(w)
    }
}

impl From<Sketch> for Widget {
    fn from(w: Sketch) -> Self {
        Self::Sketch(w)
    }
}

impl From<Knob> for Widget {
    fn from(w: Knob) -> Self {
        Self::Knob(w)
    }
}

/// Horizontal run of `len` pixels starting at (x, y).
pub(crate) fn hline<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    x: i32,
    y: i32,
    len: i32,
    color: Rgb565,
) -> Result<(), D::Error> {
    if len <= 0 {
        return Ok(());
    }
    Line::new(Point::new(x, y), Point::new(x + len - 1, y))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
}

/// Vertical run of `len` pixels starting at (x, y).
pub(crate) fn vline<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    x: i32,
    y: i32,
    len: i32,
    color: Rgb565,
) -> Result<(), D::Error> {
    if len <= 0 {
        return Ok(());
    }
    Line::new(Point::new(x, y), Point::new(x, y + len - 1))
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
}

/// Filled disc of the given radius centered on `center`.
pub(crate) fn filled_circle<D: DrawTarget<Color = Rgb565>>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) -> Result<(), D::Error> {
    Circle::with_center(center, 2 * radius + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}
