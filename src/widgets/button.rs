//! Toggle button with a debounced touch gate.

use embassy_time::{Duration, Instant};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::core::{Drawable, TouchHook, TouchPoint, WidgetError};
use crate::styling;
use crate::widgets::WidgetCore;

/// Minimum spacing between accepted touches. A held finger streams samples
/// far faster than this; without the gate a single press would toggle the
/// state once per sample.
const DEBOUNCE: Duration = Duration::from_millis(400);

/// Two-state toggle. Every accepted touch flips the state and recolors the
/// border: highlight when on, background when off. The fill is drawn once
/// by [`draw`](Drawable::draw) and never repainted on toggle.
pub struct Button {
    pub(crate) core: WidgetCore,
    color: Rgb565,
    state: bool,
    last_accepted: Option<Instant>,
}

impl Button {
    pub fn new(bounds: Rectangle, hook: TouchHook, color: Rgb565) -> Result<Self, WidgetError> {
        Ok(Self {
            core: WidgetCore::new(bounds, hook)?,
            color,
            state: false,
            last_accepted: None,
        })
    }

    pub fn is_on(&self) -> bool {
        self.state
    }

    /// Debounce gate. Accepts and stamps when the previously accepted touch
    /// is at least [`DEBOUNCE`] old; the first touch is always accepted.
    /// Rejected touches do not refresh the window.
    pub(crate) fn accept(&mut self, now: Instant) -> bool {
        if let Some(prev) = self.last_accepted
            && now < prev + DEBOUNCE
        {
            return false;
        }
        self.last_accepted = Some(now);
        true
    }

    pub(crate) fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        _point: TouchPoint,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.state = !self.state;
        let border = if self.state {
            styling::HIGHLIGHT
        } else {
            styling::BACKGROUND
        };
        self.core
            .bounds()
            .into_styled(PrimitiveStyle::with_stroke(border, 1))
            .draw(display)
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let Rectangle { top_left, size } = self.core.bounds();
        // Fill inset by 1 px but sized 1 px larger than the inset leaves,
        // exactly as the reference hardware renders it.
        Rectangle::new(
            Point::new(top_left.x + 1, top_left.y + 1),
            Size::new(size.width - 1, size.height - 1),
        )
        .into_styled(PrimitiveStyle::with_fill(self.color))
        .draw(display)?;
        self.core
            .bounds()
            .into_styled(PrimitiveStyle::with_stroke(styling::BACKGROUND, 1))
            .draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.core.bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TouchResult, Touchable};
    use crate::testutil::Canvas;
    use crate::widgets::Widget;

    fn noop(_: TouchPoint, _: &mut Widget) -> bool {
        false
    }

    fn is_on(w: &Widget) -> bool {
        match w {
            Widget::Button(b) => b.is_on(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn debounce_scenario() {
        let mut canvas = Canvas::new(64, 32);
        let mut w = Widget::Button(
            Button::new(
                Rectangle::new(Point::zero(), Size::new(40, 20)),
                noop,
                styling::OUTLINE,
            )
            .unwrap(),
        );
        let touch = TouchPoint::new(20, 10);

        // First touch at tick 0 toggles on and lights the border.
        let r = w
            .handle_touch(touch, Instant::from_millis(0), &mut canvas)
            .unwrap();
        assert_eq!(r, TouchResult::Handled);
        assert!(is_on(&w));
        assert_eq!(canvas.pixel(0, 0), styling::HIGHLIGHT);

        // 100 ms later: inside the window, hit but ignored.
        let r = w
            .handle_touch(touch, Instant::from_millis(100), &mut canvas)
            .unwrap();
        assert_eq!(r, TouchResult::Handled);
        assert!(is_on(&w));
        assert_eq!(canvas.pixel(0, 0), styling::HIGHLIGHT);

        // 500 ms: window elapsed, toggles back off.
        w.handle_touch(touch, Instant::from_millis(500), &mut canvas)
            .unwrap();
        assert!(!is_on(&w));
        assert_eq!(canvas.pixel(0, 0), styling::BACKGROUND);
    }

    #[test]
    fn rejected_touch_does_not_refresh_window() {
        let mut b = Button::new(
            Rectangle::new(Point::zero(), Size::new(40, 20)),
            noop,
            styling::OUTLINE,
        )
        .unwrap();

        assert!(b.accept(Instant::from_millis(0)));
        // A stream of rejected samples must not push the window forward.
        assert!(!b.accept(Instant::from_millis(150)));
        assert!(!b.accept(Instant::from_millis(300)));
        assert!(b.accept(Instant::from_millis(400)));
    }

    #[test]
    fn draw_renders_fill_inside_background_border() {
        let mut canvas = Canvas::new(64, 32);
        let b = Button::new(
            Rectangle::new(Point::new(2, 2), Size::new(40, 20)),
            noop,
            styling::HIGHLIGHT,
        )
        .unwrap();
        b.draw(&mut canvas).unwrap();

        // Border pixels stay background, the interior carries the fill.
        assert_eq!(canvas.pixel(2, 2), styling::BACKGROUND);
        assert_eq!(canvas.pixel(41, 21), styling::BACKGROUND);
        assert_eq!(canvas.pixel(3, 3), styling::HIGHLIGHT);
        assert_eq!(canvas.pixel(20, 12), styling::HIGHLIGHT);
        // The fill overreach: one px inside the right/bottom border line.
        assert_eq!(canvas.pixel(40, 12), styling::HIGHLIGHT);
    }

    #[test]
    fn hook_runs_only_on_accepted_touches() {
        use core::sync::atomic::{AtomicUsize, Ordering};
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        fn count(_: TouchPoint, _: &mut Widget) -> bool {
            CALLS.fetch_add(1, Ordering::Relaxed);
            true
        }

        let mut canvas = Canvas::new(64, 32);
        let mut w = Widget::Button(
            Button::new(
                Rectangle::new(Point::zero(), Size::new(40, 20)),
                count,
                styling::OUTLINE,
            )
            .unwrap(),
        );
        let touch = TouchPoint::new(5, 5);

        w.handle_touch(touch, Instant::from_millis(0), &mut canvas)
            .unwrap();
        w.handle_touch(touch, Instant::from_millis(50), &mut canvas)
            .unwrap();
        w.handle_touch(touch, Instant::from_millis(900), &mut canvas)
            .unwrap();
        assert_eq!(CALLS.load(Ordering::Relaxed), 2);
    }
}
