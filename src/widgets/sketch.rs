//! Free-draw sketch pad.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::core::{Drawable, TouchHook, TouchPoint, WidgetError};
use crate::styling;
use crate::widgets::{WidgetCore, filled_circle, hline, vline};

/// Bordered canvas that accumulates pen dots wherever it is touched.
/// Append-only: nothing is erased until the next full draw repaints the
/// canvas.
pub struct Sketch {
    pub(crate) core: WidgetCore,
    color: Rgb565,
}

impl Sketch {
    pub fn new(bounds: Rectangle, hook: TouchHook, color: Rgb565) -> Result<Self, WidgetError> {
        Ok(Self {
            core: WidgetCore::new(bounds, hook)?,
            color,
        })
    }

    pub(crate) fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        point: TouchPoint,
        display: &mut D,
    ) -> Result<(), D::Error> {
        filled_circle(display, point.to_point(), styling::PEN_RADIUS, self.color)
    }
}

impl Drawable for Sketch {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let Rectangle { top_left, size } = self.core.bounds();
        let (w, h) = (size.width as i32, size.height as i32);

        self.core
            .bounds()
            .into_styled(PrimitiveStyle::with_stroke(styling::OUTLINE, 1))
            .draw(display)?;
        Rectangle::new(
            Point::new(top_left.x + 1, top_left.y + 1),
            Size::new(size.width.saturating_sub(2), size.height.saturating_sub(2)),
        )
        .into_styled(PrimitiveStyle::with_fill(styling::CANVAS))
        .draw(display)?;

        // Crosshair reference grid: 8 ticks along each mid line. Horizontal
        // ticks assume the pad spans the full display width at x = 0, as
        // the reference hardware renders it.
        let x0 = top_left.x + w / 2;
        let y0 = top_left.y + h / 2;
        let (xi, yi) = (w / 8, h / 8);
        let (x_tick, y_tick) = (w / 16, h / 16);
        for i in 0..8 {
            hline(display, i * xi, y0, x_tick, styling::OUTLINE)?;
            vline(display, x0, top_left.y + i * yi, y_tick, styling::OUTLINE)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Touchable;
    use crate::testutil::Canvas;
    use crate::widgets::Widget;
    use embassy_time::Instant;

    fn noop(_: TouchPoint, _: &mut Widget) -> bool {
        false
    }

    fn sketch() -> Sketch {
        Sketch::new(
            Rectangle::new(Point::zero(), Size::new(240, 160)),
            noop,
            styling::HIGHLIGHT,
        )
        .unwrap()
    }

    #[test]
    fn draw_renders_border_canvas_and_grid() {
        let mut canvas = Canvas::new(240, 320);
        sketch().draw(&mut canvas).unwrap();

        assert_eq!(canvas.pixel(0, 0), styling::OUTLINE);
        assert_eq!(canvas.pixel(239, 159), styling::OUTLINE);
        assert_eq!(canvas.pixel(50, 50), styling::CANVAS);
        // First horizontal tick on the mid line, first vertical tick on the
        // mid column.
        assert_eq!(canvas.pixel(0, 80), styling::OUTLINE);
        assert_eq!(canvas.pixel(120, 0), styling::OUTLINE);
        assert_eq!(canvas.pixel(120, 25), styling::OUTLINE);
    }

    #[test]
    fn touches_accumulate_pen_dots() {
        let mut canvas = Canvas::new(240, 320);
        let mut w = Widget::Sketch(sketch());
        match &w {
            Widget::Sketch(s) => s.draw(&mut canvas).unwrap(),
            _ => unreachable!(),
        }
        let now = Instant::from_millis(0);

        w.handle_touch(TouchPoint::new(40, 40), now, &mut canvas)
            .unwrap();
        w.handle_touch(TouchPoint::new(90, 90), now, &mut canvas)
            .unwrap();

        // Both dots present: nothing erased between touches.
        assert_eq!(canvas.pixel(40, 40), styling::HIGHLIGHT);
        assert_eq!(canvas.pixel(90, 90), styling::HIGHLIGHT);
        // A full redraw clears the marks.
        match &w {
            Widget::Sketch(s) => s.draw(&mut canvas).unwrap(),
            _ => unreachable!(),
        }
        assert_eq!(canvas.pixel(40, 40), styling::CANVAS);
        assert_eq!(canvas.pixel(90, 90), styling::CANVAS);
    }
}
