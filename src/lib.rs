//! Retained-mode touch widget layer for embedded displays.
//!
//! panelkit renders a small set of interactive widgets — button, fader,
//! sketch pad, rotary knob — through any `embedded-graphics` `DrawTarget`
//! and dispatches touch points to whichever widget occupies that screen
//! region, invoking a user-bound hook on every accepted touch.
//!
//! It is `#![no_std]` and allocator-free: widget collections are backed by
//! `heapless`, and everything runs synchronously on a single control thread.
//! The host loop polls a [`TouchSource`], forwards each sample to
//! [`WidgetGroup::dispatch`], and the full update+redraw sequence completes
//! before the call returns.

#![cfg_attr(not(test), no_std)]

pub mod core;
pub mod group;
pub mod styling;
pub mod theta;
pub mod trig;
pub mod widgets;

#[cfg(test)]
mod testutil;

// Re-export commonly used items
pub use crate::core::{
    DisplayBounds, Drawable, TouchHook, TouchPoint, TouchResult, TouchSource, Touchable,
    WidgetError,
};
pub use crate::group::WidgetGroup;
pub use crate::theta::{ThetaMode, theta};
pub use crate::widgets::{Button, Fader, Knob, Sketch, Widget};
