//! Reference palette for the widget layer.
//!
//! RGB565 constants matching the colors the reference hardware renders.
//! Widgets take their accent color at construction; the background, outline
//! and highlight roles are fixed so that erase-by-overdraw stays coherent
//! across the whole screen.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Screen background. Erased regions are filled with this.
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

/// Outlines, fader tracks and the sketch grid.
pub const OUTLINE: Rgb565 = Rgb565::WHITE;

/// Border of a toggled-on button (0xF81B).
pub const HIGHLIGHT: Rgb565 = Rgb565::new(31, 0, 27);

/// Sketch canvas fill (0x18E3).
pub const CANVAS: Rgb565 = Rgb565::new(3, 7, 3);

/// Radius of the sketch pen dot, in pixels.
pub const PEN_RADIUS: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_values_match_reference() {
        assert_eq!(HIGHLIGHT.into_storage(), 0xF81B);
        assert_eq!(CANVAS.into_storage(), 0x18E3);
        assert_eq!(BACKGROUND.into_storage(), 0x0000);
        assert_eq!(OUTLINE.into_storage(), 0xFFFF);
    }
}
