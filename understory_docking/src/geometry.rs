// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box helpers and visibility predicates.
//!
//! All boxes are [`Rect`]s in page coordinates with `y` growing downwards. Boxes
//! captured at different scroll offsets are only comparable once they have been
//! [translated](translate) into the same frame.

use kurbo::{Rect, Vec2};

/// Builds a box from its origin and size.
#[must_use]
#[inline]
pub fn bounds(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width, y + height)
}

/// Shifts a box by `(dx, dy)`.
#[must_use]
#[inline]
pub fn translate(rect: Rect, dx: f64, dy: f64) -> Rect {
    rect + Vec2::new(dx, dy)
}

/// Returns `true` if any vertical slice of `rect` lies inside `viewport`.
///
/// Both comparisons are strict: a box that merely touches an edge of the
/// viewport is not visible.
#[must_use]
pub fn is_partially_visible(rect: Rect, viewport: Rect) -> bool {
    rect.y0 < viewport.y1 && rect.y1 > viewport.y0
}

/// Returns `true` if the top edge of `rect` is inside `viewport`.
///
/// The near edge is inclusive, so a box flush with the top of the viewport
/// counts as visible. When `bounded` is set the box must also start above the
/// bottom of the viewport; window viewports skip that clause.
#[must_use]
pub fn is_top_completely_visible(rect: Rect, viewport: Rect, bounded: bool) -> bool {
    rect.y0 >= viewport.y0 && (!bounded || rect.y0 < viewport.y1)
}

/// Returns `true` if the bottom edge of `rect` is inside `viewport`.
///
/// Mirror image of [`is_top_completely_visible`].
#[must_use]
pub fn is_bottom_completely_visible(rect: Rect, viewport: Rect, bounded: bool) -> bool {
    rect.y1 <= viewport.y1 && (!bounded || rect.y1 > viewport.y0)
}
