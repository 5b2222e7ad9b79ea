// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value types shared by the docking modules.

use core::fmt;
use core::str::FromStr;

use kurbo::{Rect, Vec2};

use crate::geometry;

/// Edge of the viewport an element can be docked to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DockingMode {
    /// Pin the element to the top edge of the viewport.
    Top,
    /// Pin the element to the bottom edge of the viewport.
    Bottom,
}

impl DockingMode {
    /// Returns the configuration keyword for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for DockingMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(ParseError::UnknownMode),
        }
    }
}

/// The CSS `position` scheme of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Position {
    /// Normal flow.
    #[default]
    Static,
    /// Offset from the normal-flow position.
    Relative,
    /// Positioned against the offset ancestor.
    Absolute,
    /// Positioned against the window.
    Fixed,
    /// Sticky positioning.
    Sticky,
}

impl Position {
    /// Returns the CSS keyword for this scheme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Self::Static),
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            "fixed" => Ok(Self::Fixed),
            "sticky" => Ok(Self::Sticky),
            _ => Err(ParseError::UnknownPosition),
        }
    }
}

/// Error returned when parsing a docking keyword fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not `"top"` or `"bottom"`.
    UnknownMode,
    /// The string is not a recognized CSS `position` keyword.
    UnknownPosition,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode => f.write_str("unknown docking mode, expected `top` or `bottom`"),
            Self::UnknownPosition => f.write_str("unknown CSS position keyword"),
        }
    }
}

impl core::error::Error for ParseError {}

bitflags::bitflags! {
    /// The CSS offset properties that are explicitly set on an element.
    ///
    /// Only presence matters: restoring an element writes exactly the
    /// properties it had before docking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct OffsetSides: u8 {
        /// `left` is set.
        const LEFT   = 0b0001;
        /// `right` is set.
        const RIGHT  = 0b0010;
        /// `top` is set.
        const TOP    = 0b0100;
        /// `bottom` is set.
        const BOTTOM = 0b1000;
    }
}

/// Resolved CSS positioning for an element.
///
/// An offset that is `None` is left unset when applied.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PositionCss {
    /// The `position` property.
    pub position: Position,
    /// The `left` property.
    pub left: Option<f64>,
    /// The `top` property.
    pub top: Option<f64>,
    /// The `right` property.
    pub right: Option<f64>,
    /// The `bottom` property.
    pub bottom: Option<f64>,
}

impl PositionCss {
    /// Creates a positioning record with every offset unset.
    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            left: None,
            top: None,
            right: None,
            bottom: None,
        }
    }
}

/// How an element's position should change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Morph {
    /// Drop explicit positioning and return to normal flow.
    Static,
    /// Position against the offset ancestor.
    Absolute(PositionCss),
    /// Position against the window.
    Fixed(PositionCss),
}

impl Morph {
    /// Wraps `css` in the variant matching its `position` scheme.
    ///
    /// Anything other than [`Position::Fixed`] is treated as absolute.
    #[must_use]
    pub fn positioned(css: PositionCss) -> Self {
        match css.position {
            Position::Fixed => Self::Fixed(css),
            _ => Self::Absolute(css),
        }
    }
}

/// Where an element sat before it was docked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriorPosition {
    /// Which offset properties were explicitly set.
    pub sides: OffsetSides,
    /// The original `position` scheme.
    pub position: Position,
    /// Scroll-adjusted x of the element box when docking began.
    pub x: f64,
    /// Scroll-adjusted y of the element box when docking began.
    pub y: f64,
}

impl PriorPosition {
    /// Returns `true` if `left` was set before docking.
    #[must_use]
    pub fn has_left_css(&self) -> bool {
        self.sides.contains(OffsetSides::LEFT)
    }

    /// Returns `true` if `right` was set before docking.
    #[must_use]
    pub fn has_right_css(&self) -> bool {
        self.sides.contains(OffsetSides::RIGHT)
    }

    /// Returns `true` if `top` was set before docking.
    #[must_use]
    pub fn has_top_css(&self) -> bool {
        self.sides.contains(OffsetSides::TOP)
    }

    /// Returns `true` if `bottom` was set before docking.
    #[must_use]
    pub fn has_bottom_css(&self) -> bool {
        self.sides.contains(OffsetSides::BOTTOM)
    }

    /// Rebuilds the pre-dock box from the stored origin and the element's
    /// current size.
    #[must_use]
    pub fn original_box(&self, size: Rect) -> Rect {
        geometry::bounds(self.x, self.y, size.width(), size.height())
    }
}

/// Scroll state of a container acting as the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportScroll<E> {
    /// The scrolling container.
    pub element: E,
    /// Current scroll offsets (`x` = left, `y` = top).
    pub offsets: Vec2,
}

/// The region an element is kept visible in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollableViewport<E> {
    /// Viewport box in page coordinates.
    pub bounds: Rect,
    /// Present when a scroll container, not the window, is the viewport.
    pub scroll: Option<ViewportScroll<E>>,
}

impl<E> ScrollableViewport<E> {
    /// A viewport with no scroll tracking, such as the window.
    #[must_use]
    pub const fn fixed(bounds: Rect) -> Self {
        Self {
            bounds,
            scroll: None,
        }
    }

    /// A viewport formed by a scroll container.
    #[must_use]
    pub const fn scrolling(bounds: Rect, element: E, offsets: Vec2) -> Self {
        Self {
            bounds,
            scroll: Some(ViewportScroll { element, offsets }),
        }
    }

    /// Returns `true` when the docked position has to follow the container's
    /// scroll.
    #[must_use]
    pub fn is_adaptive(&self) -> bool {
        self.scroll.is_some()
    }

    /// Scroll offsets of the tracked container, or zero.
    #[must_use]
    pub fn scroll_offsets(&self) -> Vec2 {
        self.scroll.as_ref().map_or(Vec2::ZERO, |s| s.offsets)
    }

    /// The viewport bounds shifted into the scroll-adjusted frame.
    #[must_use]
    pub fn scrolled_bounds(&self) -> Rect {
        self.bounds + self.scroll_offsets()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip_through_from_str() {
        for mode in [DockingMode::Top, DockingMode::Bottom] {
            assert_eq!(mode.as_str().parse::<DockingMode>(), Ok(mode));
        }
        assert_eq!("absolute".parse::<Position>(), Ok(Position::Absolute));
        assert_eq!("left".parse::<DockingMode>(), Err(ParseError::UnknownMode));
        assert_eq!("inherit".parse::<Position>(), Err(ParseError::UnknownPosition));
    }

    #[test]
    fn positioned_picks_variant_from_scheme() {
        let fixed = PositionCss::new(Position::Fixed);
        assert_eq!(Morph::positioned(fixed), Morph::Fixed(fixed));

        let absolute = PositionCss::new(Position::Absolute);
        assert_eq!(Morph::positioned(absolute), Morph::Absolute(absolute));
    }

    #[test]
    fn prior_position_flags_follow_sides() {
        let prior = PriorPosition {
            sides: OffsetSides::LEFT | OffsetSides::BOTTOM,
            position: Position::Absolute,
            x: 1.0,
            y: 2.0,
        };
        assert!(prior.has_left_css());
        assert!(!prior.has_right_css());
        assert!(!prior.has_top_css());
        assert!(prior.has_bottom_css());
        assert_eq!(
            prior.original_box(Rect::new(50.0, 50.0, 60.0, 80.0)),
            Rect::new(1.0, 2.0, 11.0, 32.0)
        );
    }

    #[test]
    fn scrolled_bounds_add_container_offsets() {
        let window = ScrollableViewport::<u32>::fixed(Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!window.is_adaptive());
        assert_eq!(window.scrolled_bounds(), window.bounds);

        let container = ScrollableViewport::scrolling(
            Rect::new(0.0, 10.0, 100.0, 110.0),
            7_u32,
            Vec2::new(0.0, 30.0),
        );
        assert!(container.is_adaptive());
        assert_eq!(container.scrolled_bounds(), Rect::new(0.0, 40.0, 100.0, 140.0));
    }
}
