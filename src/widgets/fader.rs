//! Horizontal fader: a 1-D value dragged along a two-line track.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::core::{DisplayBounds, Drawable, TouchHook, TouchPoint, WidgetError};
use crate::styling;
use crate::widgets::{WidgetCore, hline};

const BORDER: i32 = 2;

/// Thumb width in pixels. Travel bounds keep the thumb on screen.
const THUMB_WIDTH: i32 = 60;

/// Horizontal fader. The value is the thumb's left edge in pixel space,
/// confined so the thumb center stays within `[min, max]`.
///
/// Track geometry assumes the fader spans the full display width at
/// origin x = 0, as the reference hardware renders it; an offset fader
/// leaves stale track pixels.
pub struct Fader {
    pub(crate) core: WidgetCore,
    color: Rgb565,
    value: i32,
    prev_value: i32,
    thumb_height: u32,
    min: i32,
    max: i32,
}

impl Fader {
    pub fn new(
        bounds: Rectangle,
        screen: DisplayBounds,
        hook: TouchHook,
        color: Rgb565,
    ) -> Result<Self, WidgetError> {
        let core = WidgetCore::new(bounds, hook)?;
        if bounds.size.height <= 2 * BORDER as u32 {
            return Err(WidgetError::TooShort {
                height: bounds.size.height,
            });
        }
        let min = THUMB_WIDTH / 2 + BORDER;
        let max = screen.width as i32 - (THUMB_WIDTH / 2 + BORDER);
        if min >= max {
            return Err(WidgetError::NoTravel {
                width: screen.width,
            });
        }
        let value = bounds.top_left.x + BORDER;
        Ok(Self {
            core,
            color,
            value,
            prev_value: value,
            thumb_height: bounds.size.height - 2 * BORDER as u32,
            min,
            max,
        })
    }

    /// Current thumb left edge in pixel space.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Lowest allowed thumb center.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Highest allowed thumb center.
    pub fn max(&self) -> i32 {
        self.max
    }

    fn thumb(&self, value: i32) -> Rectangle {
        Rectangle::new(
            Point::new(value, self.core.bounds().top_left.y + BORDER),
            Size::new(THUMB_WIDTH as u32, self.thumb_height),
        )
    }

    pub(crate) fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        point: TouchPoint,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let x = point.x as i32;
        let y = self.core.bounds().top_left.y;
        let h = self.core.bounds().size.height as i32;

        // Track span to restore under the old thumb, capped at the high end
        // of the travel.
        let track_min = self.prev_value.max(self.min);
        let track_w = if track_min + THUMB_WIDTH < self.max {
            THUMB_WIDTH
        } else {
            self.max - track_min
        };

        // Center the thumb on the touch inside the travel, snap at the ends.
        self.value = if x > self.min {
            if x < self.max {
                x - THUMB_WIDTH / 2
            } else {
                self.max - THUMB_WIDTH / 2
            }
        } else {
            BORDER
        };

        self.thumb(self.prev_value)
            .into_styled(PrimitiveStyle::with_stroke(styling::BACKGROUND, 1))
            .draw(display)?;
        hline(display, track_min, y + h / 3, track_w, styling::OUTLINE)?;
        hline(display, track_min, y + 2 * h / 3, track_w, styling::OUTLINE)?;
        hline(display, self.value, y + h / 3, THUMB_WIDTH, styling::BACKGROUND)?;
        hline(
            display,
            self.value,
            y + 2 * h / 3,
            THUMB_WIDTH,
            styling::BACKGROUND,
        )?;
        self.thumb(self.value)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(display)?;

        self.prev_value = self.value;
        Ok(())
    }
}

impl Drawable for Fader {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let y = self.core.bounds().top_left.y;
        let h = self.core.bounds().size.height as i32;

        hline(display, self.min, y + h / 3, self.max - self.min, styling::OUTLINE)?;
        hline(
            display,
            self.min,
            y + 2 * h / 3,
            self.max - self.min,
            styling::OUTLINE,
        )?;
        self.thumb(self.value)
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(display)?;
        // Blank the track where it crosses the thumb interior.
        hline(
            display,
            self.value + 1,
            y + h / 3,
            THUMB_WIDTH - 2,
            styling::BACKGROUND,
        )?;
        hline(
            display,
            self.value + 1,
            y + 2 * h / 3,
            THUMB_WIDTH - 2,
            styling::BACKGROUND,
        )
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}
