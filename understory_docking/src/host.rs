// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the docking engine and the host's element tree.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Rect, Vec2};

use crate::types::{OffsetSides, Position, PositionCss};

/// Geometry queries and style writes the docking engine needs from its host.
///
/// All boxes are in page coordinates, that is, including the window scroll.
/// The engine never caches anything it reads through this trait, so hosts can
/// answer from live layout.
pub trait DockingHost {
    /// Opaque, cheap handle to an element.
    type Element: Copy + Eq + Hash + Debug;

    /// Returns `true` while `element` is attached to a live environment.
    fn is_connected(&self, element: Self::Element) -> bool;

    /// Border box of `element`.
    fn box_of(&self, element: Self::Element) -> Rect;

    /// Box of the document body.
    fn body_box(&self) -> Rect;

    /// The visible window area.
    fn window_box(&self) -> Rect;

    /// Current window scroll offsets.
    fn window_scroll(&self) -> Vec2;

    /// Nearest positioned ancestor of `element`, if any.
    fn offset_parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// Returns `true` if `descendant` is strictly inside `ancestor`.
    fn contains(&self, ancestor: Self::Element, descendant: Self::Element) -> bool;

    /// Computed `position` of `element`.
    fn position(&self, element: Self::Element) -> Position;

    /// Offset properties explicitly set on `element`.
    fn offset_sides(&self, element: Self::Element) -> OffsetSides;

    /// Writes `css` to `element`, removing any offset it leaves unset.
    fn apply_position(&mut self, element: Self::Element, css: &PositionCss);

    /// Removes `position` and all four offset properties from `element`.
    fn clear_position(&mut self, element: Self::Element);

    /// Adds a class to `element`.
    fn add_class(&mut self, element: Self::Element, class: &str);

    /// Removes a class from `element`.
    fn remove_class(&mut self, element: Self::Element, class: &str);

    /// Sets or clears the docked marker on `element`.
    ///
    /// While docked the marker carries the element's pre-dock box. It exists
    /// for external styling and tooling and is never read back.
    fn set_marker(&mut self, element: Self::Element, marker: Option<Rect>);
}
