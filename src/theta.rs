//! Angle resolver for radial widgets.
//!
//! Maps a touch point relative to a knob's face into either a trig-table
//! index or a resolved angle byte. The tables span a half rotation; the
//! angle byte covers the full rotation by reflecting (`255 - theta`) when
//! the touch lies in the upper half of the face.

use crate::core::{Drawable, TouchPoint};
use crate::trig::{ACOS21, ASIN21, TRIG_LEN, rescale};
use crate::widgets::Knob;

/// What [`theta`] should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThetaMode {
    /// The x-based table index, 0..[`TRIG_LEN`].
    Index,
    /// The resolved angle byte, 0..=255 over a full rotation.
    Angle,
}

/// Resolve a touch point against a knob's face.
///
/// The point's offset from the face origin selects one of two regions:
/// inside the radius along x, the arc-sine table applies (reflected across
/// the horizontal axis for the upper half); at or beyond it, the arc-cosine
/// table applies to the y offset with no reflection. Points exactly on the
/// region boundary resolve via whichever branch the comparison favors —
/// deterministic, not symmetric. Out-of-range offsets clamp the table index
/// rather than erroring.
pub fn theta(point: TouchPoint, knob: &Knob, mode: ThetaMode) -> u8 {
    let origin = knob.bounds().top_left;
    let r = knob.radius() as i32;
    let x_rel = point.x as i32 - origin.x;
    let y_rel = point.y as i32 - origin.y;

    match mode {
        ThetaMode::Index => table_index(x_rel, r),
        ThetaMode::Angle => {
            if x_rel < r {
                let angle = ASIN21[table_index(x_rel, r) as usize];
                if y_rel < r { 255 - angle } else { angle }
            } else {
                ACOS21[table_index(y_rel, r) as usize]
            }
        }
    }
}

/// Rescale an axis offset in `[0, 2r)` onto the table domain, clamped.
fn table_index(rel: i32, r: i32) -> u8 {
    rescale(rel.max(0), 2 * r, TRIG_LEN as i32).clamp(0, TRIG_LEN as i32 - 1) as u8
}
