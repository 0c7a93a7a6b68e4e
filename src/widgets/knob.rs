//! Rotary knob driven by the trig lookup tables.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::core::{Drawable, TouchHook, TouchPoint, WidgetError};
use crate::styling;
use crate::theta::{ThetaMode, theta};
use crate::trig::{COS21, SIN21, rescale};
use crate::widgets::{WidgetCore, filled_circle};

const BORDER: i32 = 2;

/// Rotary control. A touch on the face resolves to a trig-table index; the
/// sine/cosine magnitudes place an indicator dot on the circle, on the
/// vertical half the touch came from. Only the previous dot is erased
/// between touches.
pub struct Knob {
    pub(crate) core: WidgetCore,
    color: Rgb565,
    radius: u32,
    prev_plot: Option<Point>,
}

impl Knob {
    /// Construction normalizes the bounding box to the square inscribing
    /// the knob circle, centered along the longer dimension.
    pub fn new(bounds: Rectangle, hook: TouchHook, color: Rgb565) -> Result<Self, WidgetError> {
        let Rectangle { top_left, size } = bounds;
        let (w, h) = (size.width, size.height);
        let side = w.min(h);
        let radius = side / 2;
        if radius < 2 * BORDER as u32 {
            return Err(WidgetError::KnobTooSmall { radius });
        }
        let top_left = if w > h {
            Point::new(top_left.x + ((w - h) / 2) as i32, top_left.y)
        } else {
            Point::new(top_left.x, top_left.y + ((h - w) / 2) as i32)
        };
        Ok(Self {
            core: WidgetCore::new(Rectangle::new(top_left, Size::new(side, side)), hook)?,
            color,
            radius,
            prev_plot: None,
        })
    }

    /// Face radius in pixels, stable after construction.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Rest-position indicator: vertically centered at the right edge.
    fn rest_dot(&self) -> Point {
        let Rectangle { top_left, size } = self.core.bounds();
        Point::new(
            top_left.x + size.width as i32 - 2 * BORDER,
            top_left.y + self.radius as i32,
        )
    }

    pub(crate) fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        point: TouchPoint,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let Rectangle { top_left, size } = self.core.bounds();
        let r = self.radius as i32;
        let side = size.width as i32;
        // Diameter available to the indicator, inset from the face outline.
        let d = 2 * r - 3 * BORDER;

        // Keep the resolved index inside the table's defined half.
        let x = (point.x as i32).max(top_left.x + r / 2);
        let clamped = TouchPoint::new(x as u16, point.y);
        let index = theta(clamped, self, ThetaMode::Index) as usize;
        let xplot = rescale(SIN21[index] as i32, 128, d);
        let yplot = rescale(COS21[index] as i32, 128, d);

        match self.prev_plot {
            Some(prev) => filled_circle(display, prev, BORDER as u32, styling::BACKGROUND)?,
            // First touch: the rest-position dot is what's on screen.
            None => filled_circle(display, self.rest_dot(), BORDER as u32, styling::BACKGROUND)?,
        }

        let xplot = xplot + top_left.x + BORDER;
        // The touch's vertical half selects which half of the face the
        // indicator occupies.
        let yplot = if point.y as i32 - r > top_left.y {
            yplot + top_left.y - BORDER
        } else {
            top_left.y + side + BORDER - yplot
        };
        let plot = Point::new(xplot, yplot);
        self.prev_plot = Some(plot);
        filled_circle(display, plot, BORDER as u32, self.color)
    }
}

impl Drawable for Knob {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let r = self.radius;
        let face = Rectangle::new(self.core.bounds().top_left, Size::new(2 * r, 2 * r));
        RoundedRectangle::with_equal_corners(face, Size::new(r, r))
            .into_styled(PrimitiveStyle::with_stroke(styling::OUTLINE, 1))
            .draw(display)?;
        filled_circle(display, self.rest_dot(), BORDER as u32, self.color)
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}
