// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a docked element should sit.
//!
//! Pinning an element to a viewport edge means writing a CSS offset, and that
//! offset is measured from whatever frame the element is positioned against.
//! [`derive_context`] gathers the boxes that decide the frame; [`dock_to_top`]
//! and [`dock_to_bottom`] turn them into a vertical offset. The cases are tried
//! in this order:
//!
//! 1. No tracked scroll: the window is the viewport, use `fixed`.
//! 2. Tracked scroll, no offset parent: `absolute` against the body.
//! 3. The offset parent is the scroll container: offset by its scroll.
//! 4. The offset parent is inside the scroll container: measure from the parent.
//! 5. The offset parent is outside the scroll container: measure from the body.
//!
//! Only the vertical axis is computed. Horizontal offsets are carried over from
//! the pre-dock box by the caller.

use kurbo::{Rect, Vec2};

use crate::host::DockingHost;
use crate::types::{DockingMode, Position, ScrollableViewport};

/// Boxes and relationships that select a docking frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionContext {
    /// Box of the offset parent, if the element has one.
    pub offset_parent_box: Option<Rect>,
    /// Box of the document body.
    pub body_box: Rect,
    /// The visible window area.
    pub window_box: Rect,
    /// Current window scroll.
    pub window_scroll: Vec2,
    /// Viewport bounds, not scroll-adjusted.
    pub viewport: Rect,
    /// Scroll offsets of the tracked container, if any.
    pub viewport_scroll: Option<Vec2>,
    /// The offset parent is the scroll container.
    pub offset_parent_is_scroll: bool,
    /// The offset parent sits inside the scroll container.
    pub scroll_contains_offset_parent: bool,
}

impl PositionContext {
    /// Box the element's CSS offsets are measured from.
    #[must_use]
    pub fn offset_box(&self) -> Rect {
        self.offset_parent_box.unwrap_or(self.body_box)
    }
}

/// A resolved docking target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DockingLocation {
    /// Pinned to the top edge with CSS `top: top_y`.
    Top {
        /// Positioning scheme to use.
        position: Position,
        /// Value for the `top` property.
        top_y: f64,
    },
    /// Pinned to the bottom edge with CSS `bottom: bottom_y`.
    Bottom {
        /// Positioning scheme to use.
        position: Position,
        /// Value for the `bottom` property.
        bottom_y: f64,
    },
}

impl DockingLocation {
    /// The edge this target pins to.
    #[must_use]
    pub fn edge(&self) -> DockingMode {
        match self {
            Self::Top { .. } => DockingMode::Top,
            Self::Bottom { .. } => DockingMode::Bottom,
        }
    }
}

/// Reads the frame-selecting geometry for `element` from the host.
pub fn derive_context<H: DockingHost>(
    host: &H,
    element: H::Element,
    viewport: &ScrollableViewport<H::Element>,
) -> PositionContext {
    let offset_parent = host.offset_parent(element);
    let (offset_parent_is_scroll, scroll_contains_offset_parent) =
        match (&viewport.scroll, offset_parent) {
            (Some(scroll), Some(parent)) => {
                let is_scroll = parent == scroll.element;
                // A container cannot contain itself.
                (is_scroll, !is_scroll && host.contains(scroll.element, parent))
            }
            _ => (false, false),
        };

    PositionContext {
        offset_parent_box: offset_parent.map(|parent| host.box_of(parent)),
        body_box: host.body_box(),
        window_box: host.window_box(),
        window_scroll: host.window_scroll(),
        viewport: viewport.bounds,
        viewport_scroll: viewport.scroll.as_ref().map(|s| s.offsets),
        offset_parent_is_scroll,
        scroll_contains_offset_parent,
    }
}

/// Target that pins the element's top to the top of the viewport.
#[must_use]
pub fn dock_to_top(context: &PositionContext) -> DockingLocation {
    let Some(scroll) = context.viewport_scroll else {
        return DockingLocation::Top {
            position: Position::Fixed,
            top_y: context.viewport.y0 - context.window_box.y0,
        };
    };

    let top_y = match context.offset_parent_box {
        None => context.viewport.y0 - context.body_box.y0,
        Some(_) if context.offset_parent_is_scroll => scroll.y,
        Some(parent) if context.scroll_contains_offset_parent => context.viewport.y0 - parent.y0,
        Some(_) => context.viewport.y0 - context.body_box.y0,
    };
    DockingLocation::Top {
        position: Position::Absolute,
        top_y,
    }
}

/// Target that pins the element's bottom to the bottom of the viewport.
#[must_use]
pub fn dock_to_bottom(context: &PositionContext) -> DockingLocation {
    let Some(scroll) = context.viewport_scroll else {
        return DockingLocation::Bottom {
            position: Position::Fixed,
            bottom_y: context.window_box.y1 - context.viewport.y1,
        };
    };

    let bottom_y = match context.offset_parent_box {
        None => context.body_box.y1 - context.viewport.y1,
        // Scrolling the container down moves `bottom: 0` up with the content,
        // so the offset has to go negative by the same amount.
        Some(_) if context.offset_parent_is_scroll => -scroll.y,
        Some(parent) if context.scroll_contains_offset_parent => parent.y1 - context.viewport.y1,
        Some(parent) => {
            // `bottom` is measured from the unscrolled parent, so drop the
            // window scroll before rising to the viewport's bottom edge.
            let client_top = parent.y0 - context.window_scroll.y;
            client_top + (context.window_box.y1 - context.viewport.y1)
        }
    };
    DockingLocation::Bottom {
        position: Position::Absolute,
        bottom_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::bounds;

    fn window_context() -> PositionContext {
        PositionContext {
            offset_parent_box: None,
            body_box: bounds(0.0, 0.0, 1000.0, 3000.0),
            window_box: bounds(0.0, 0.0, 1000.0, 1000.0),
            window_scroll: Vec2::ZERO,
            viewport: bounds(0.0, 100.0, 1000.0, 600.0),
            viewport_scroll: None,
            offset_parent_is_scroll: false,
            scroll_contains_offset_parent: false,
        }
    }

    fn scrolling_context(offset_parent_box: Option<Rect>) -> PositionContext {
        PositionContext {
            offset_parent_box,
            viewport_scroll: Some(Vec2::new(0.0, 30.0)),
            ..window_context()
        }
    }

    #[test]
    fn window_viewport_uses_fixed() {
        let context = window_context();
        assert_eq!(
            dock_to_top(&context),
            DockingLocation::Top {
                position: Position::Fixed,
                top_y: 100.0
            }
        );
        assert_eq!(
            dock_to_bottom(&context),
            DockingLocation::Bottom {
                position: Position::Fixed,
                bottom_y: 300.0
            }
        );
    }

    #[test]
    fn no_offset_parent_measures_from_body() {
        let mut context = scrolling_context(None);
        context.body_box = bounds(0.0, 8.0, 1000.0, 2000.0);
        assert_eq!(
            dock_to_top(&context),
            DockingLocation::Top {
                position: Position::Absolute,
                top_y: 92.0
            }
        );
        assert_eq!(
            dock_to_bottom(&context),
            DockingLocation::Bottom {
                position: Position::Absolute,
                bottom_y: 1308.0
            }
        );
    }

    #[test]
    fn offset_parent_is_scroll_uses_scroll_top_directly() {
        let mut context = scrolling_context(Some(bounds(0.0, 100.0, 1000.0, 600.0)));
        context.offset_parent_is_scroll = true;
        assert_eq!(
            dock_to_top(&context),
            DockingLocation::Top {
                position: Position::Absolute,
                top_y: 30.0
            }
        );
        assert_eq!(
            dock_to_bottom(&context),
            DockingLocation::Bottom {
                position: Position::Absolute,
                bottom_y: -30.0
            }
        );
    }

    #[test]
    fn is_scroll_wins_over_contained() {
        let mut context = scrolling_context(Some(bounds(0.0, 250.0, 1000.0, 100.0)));
        context.offset_parent_is_scroll = true;
        context.scroll_contains_offset_parent = true;
        assert_eq!(
            dock_to_top(&context),
            DockingLocation::Top {
                position: Position::Absolute,
                top_y: 30.0
            }
        );
    }

    #[test]
    fn contained_offset_parent_measures_from_parent() {
        let mut context = scrolling_context(Some(bounds(0.0, 40.0, 1000.0, 1500.0)));
        context.scroll_contains_offset_parent = true;
        assert_eq!(
            dock_to_top(&context),
            DockingLocation::Top {
                position: Position::Absolute,
                top_y: 60.0
            }
        );
        assert_eq!(
            dock_to_bottom(&context),
            DockingLocation::Bottom {
                position: Position::Absolute,
                bottom_y: 840.0
            }
        );
    }

    #[test]
    fn outside_offset_parent_corrects_for_window_scroll() {
        let mut context = scrolling_context(Some(bounds(0.0, 500.0, 1000.0, 100.0)));
        context.window_scroll = Vec2::new(0.0, 200.0);
        assert_eq!(
            dock_to_top(&context),
            DockingLocation::Top {
                position: Position::Absolute,
                top_y: 100.0
            }
        );
        assert_eq!(
            dock_to_bottom(&context),
            DockingLocation::Bottom {
                position: Position::Absolute,
                bottom_y: 600.0
            }
        );
    }
}
