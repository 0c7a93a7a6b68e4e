//! Ordered, owned widget collections.

use embassy_time::Instant;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::Vec;
use log::{debug, trace};

use crate::core::{Drawable, TouchPoint, TouchResult, Touchable};
use crate::widgets::Widget;

/// An ordered collection of widgets, typically one per screen or mode.
///
/// Insertion order is draw order and hit-test priority: `dispatch` stops at
/// the first member containing the point, so overlapping widgets resolve to
/// whichever was added first (members are normally laid out disjoint).
///
/// The group owns its members. Tearing it down goes through
/// [`clear`](WidgetGroup::clear), which blanks each member's screen region
/// before the group is dropped.
///
/// # Type Parameters
/// - `N`: maximum number of widgets (compile-time constant)
pub struct WidgetGroup<const N: usize> {
    widgets: Vec<Widget, N>,
}

impl<const N: usize> WidgetGroup<N> {
    pub const fn new() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }

    /// Append a widget to the tail.
    ///
    /// # Returns
    /// - `Ok(index)`: the widget's index within the group
    /// - `Err(widget)`: the group is full; the widget is handed back
    pub fn add(&mut self, widget: Widget) -> Result<usize, Widget> {
        self.widgets.push(widget)?;
        Ok(self.widgets.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget(&self, index: usize) -> Option<&Widget> {
        self.widgets.get(index)
    }

    /// Mutable access to a member, e.g. to resolve a widget's
    /// [`child`](Widget::child) link after dispatch.
    pub fn widget_mut(&mut self, index: usize) -> Option<&mut Widget> {
        self.widgets.get_mut(index)
    }

    /// Full render of every member in insertion order. No early exit.
    pub fn draw_all<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        for widget in &self.widgets {
            widget.draw(display)?;
        }
        Ok(())
    }

    /// Offer a touch point to the members in insertion order, stopping at
    /// the first hit. The hit widget's hook and incremental update run
    /// before this returns.
    pub fn dispatch<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        point: TouchPoint,
        now: Instant,
        display: &mut D,
    ) -> Result<TouchResult, D::Error> {
        for (index, widget) in self.widgets.iter_mut().enumerate() {
            if widget.handle_touch(point, now, display)? == TouchResult::Handled {
                trace!("touch ({}, {}) handled by widget {}", point.x, point.y, index);
                return Ok(TouchResult::Handled);
            }
        }
        Ok(TouchResult::NotHandled)
    }

    /// Tear the group down, blanking each member's screen region in
    /// insertion order.
    pub fn clear<D: DrawTarget<Color = Rgb565>>(self, display: &mut D) -> Result<(), D::Error> {
        debug!("clearing widget group ({} widgets)", self.widgets.len());
        for widget in &self.widgets {
            widget.clear(display)?;
        }
        Ok(())
    }
}

impl<const N: usize> Default for WidgetGroup<N> {
    fn default() -> Self {
        Self::new()
    }
}
