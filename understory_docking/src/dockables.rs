// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The docking decision.
//!
//! An element is either in its original layout position or docked. Which one is
//! decided by whether a [`PriorPosition`] is stored in its [`DockingState`]:
//! entering docking stores one, restoring clears it.
//!
//! Three boxes take part in each decision: the element's current box, the
//! viewport, and the pre-dock box of a docked element. The last one may have
//! been captured at a different scroll offset than the other two, so every box
//! is compared in the scroll-adjusted frame, i.e. shifted by the tracked
//! container's current scroll.

use kurbo::Rect;

use crate::config::ContextualFade;
use crate::geometry;
use crate::host::DockingHost;
use crate::positions::{self, DockingLocation, PositionContext};
use crate::state::DockingState;
use crate::types::{DockingMode, Morph, Position, PositionCss, PriorPosition, ScrollableViewport};

/// Which edges of a box are fully inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeVisibility {
    /// The top edge is visible.
    pub top: bool,
    /// The bottom edge is visible.
    pub bottom: bool,
}

impl EdgeVisibility {
    /// Tests both edges of `rect` against `viewport`.
    ///
    /// `bounded` selects the stricter test used for scroll containers, see
    /// [`geometry::is_top_completely_visible`].
    #[must_use]
    pub fn of(rect: Rect, viewport: Rect, bounded: bool) -> Self {
        Self {
            top: geometry::is_top_completely_visible(rect, viewport, bounded),
            bottom: geometry::is_bottom_completely_visible(rect, viewport, bounded),
        }
    }

    /// Returns `true` when both edges are visible.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.top && self.bottom
    }
}

/// Starts fading the element in.
pub fn appear<H: DockingHost>(host: &mut H, element: H::Element, fade: &ContextualFade<H>) {
    host.add_class(element, fade.transition_class());
    host.remove_class(element, fade.fade_out_class());
    host.add_class(element, fade.fade_in_class());
    fade.fire_show(element);
}

/// Starts fading the element out.
pub fn disappear<H: DockingHost>(host: &mut H, element: H::Element, fade: &ContextualFade<H>) {
    host.add_class(element, fade.transition_class());
    host.remove_class(element, fade.fade_in_class());
    host.add_class(element, fade.fade_out_class());
    fade.fire_hide(element);
}

fn capture_prior<H: DockingHost>(host: &H, element: H::Element, rect: Rect) -> PriorPosition {
    PriorPosition {
        sides: host.offset_sides(element),
        position: host.position(element),
        x: rect.x0,
        y: rect.y0,
    }
}

/// Stores `rect` as the pre-dock position unless one is already stored.
pub fn store_prior_if_none<H: DockingHost>(
    host: &H,
    element: H::Element,
    rect: Rect,
    state: &mut DockingState,
) {
    if state.prior_position().is_none() {
        state.set_prior_position(capture_prior(host, element, rect));
    }
}

/// Picks the edge to dock to, if any.
///
/// Both edges can be hidden at once when the element is taller than the
/// viewport. The edge the element was last docked to then wins, falling back
/// to the top.
fn docking_location(
    context: &PositionContext,
    state: &DockingState,
    visibility: EdgeVisibility,
) -> Option<DockingLocation> {
    let can_dock = |mode: DockingMode, visible: bool| !visible && state.has_mode(mode);

    if state.last_edge() == Some(DockingMode::Bottom)
        && can_dock(DockingMode::Bottom, visibility.bottom)
    {
        Some(positions::dock_to_bottom(context))
    } else if can_dock(DockingMode::Top, visibility.top) {
        Some(positions::dock_to_top(context))
    } else if can_dock(DockingMode::Bottom, visibility.bottom) {
        Some(positions::dock_to_bottom(context))
    } else {
        None
    }
}

/// Builds the morph that moves an element to `location`.
///
/// Horizontal offsets are kept from `original_box`, measured against the
/// offset parent (or the body) for whichever of `left`/`right` was set.
#[must_use]
pub fn docking_morph(
    context: &PositionContext,
    location: DockingLocation,
    prior: &PriorPosition,
    original_box: Rect,
) -> Morph {
    let offset_box = context.offset_box();
    let left = prior
        .has_left_css()
        .then_some(original_box.x0 - offset_box.x0);
    let right = prior
        .has_right_css()
        .then_some(offset_box.x1 - original_box.x1);

    let css = match location {
        DockingLocation::Top { position, top_y } => PositionCss {
            position,
            left,
            top: Some(top_y),
            right,
            bottom: None,
        },
        DockingLocation::Bottom { position, bottom_y } => PositionCss {
            position,
            left,
            top: None,
            right,
            bottom: Some(bottom_y),
        },
    };
    Morph::positioned(css)
}

/// Builds the morph that returns an element to where it was before docking.
///
/// The prior position and the docked marker are dropped whatever the outcome.
/// Elements that were neither `static` nor `absolute` cannot be restored
/// automatically and yield `None`.
pub fn revert_to_original<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    original_box: Rect,
    viewport: &ScrollableViewport<H::Element>,
    state: &mut DockingState,
) -> Option<Morph> {
    let prior = state.clear_prior_position()?;
    host.set_marker(element, None);

    match prior.position {
        Position::Static => Some(Morph::Static),
        Position::Absolute => {
            let offset_parent = host.offset_parent(element);
            let offset_box =
                offset_parent.map_or_else(|| host.body_box(), |parent| host.box_of(parent));

            // The pre-dock box includes the container scroll. A parent that is
            // the container already scrolls its content, so only other parents
            // need it taken back out.
            let parent_is_scroll = matches!(
                (&viewport.scroll, offset_parent),
                (Some(scroll), Some(parent)) if scroll.element == parent
            );
            let scroll_y = if parent_is_scroll {
                0.0
            } else {
                viewport.scroll_offsets().y
            };

            Some(Morph::Absolute(PositionCss {
                position: Position::Absolute,
                left: prior
                    .has_left_css()
                    .then_some(original_box.x0 - offset_box.x0),
                top: prior
                    .has_top_css()
                    .then_some(original_box.y0 - scroll_y - offset_box.y0),
                right: prior
                    .has_right_css()
                    .then_some(offset_box.x1 - original_box.x1),
                bottom: prior
                    .has_bottom_css()
                    .then_some(offset_box.y1 - original_box.y1),
            }))
        }
        other => {
            tracing::debug!(?element, position = other.as_str(), "cannot restore position");
            None
        }
    }
}

/// Decides how the element should move for the current geometry.
///
/// - Original: dock if an edge is hidden and a mode for it is configured,
///   storing the pre-dock position first.
/// - Docked: restore once the pre-dock box is fully visible again. Otherwise,
///   for scroll-tracked viewports, follow the viewport without touching the
///   stored position; window viewports stay put.
pub fn get_morph<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    viewport: &ScrollableViewport<H::Element>,
    state: &mut DockingState,
) -> Option<Morph> {
    let adaptive = viewport.is_adaptive();
    let viewport_bounds = viewport.scrolled_bounds();
    let current_box = host.box_of(element) + viewport.scroll_offsets();

    let Some(prior) = state.prior_position().copied() else {
        let visibility = EdgeVisibility::of(current_box, viewport_bounds, adaptive);
        tracing::trace!(?element, ?visibility, "evaluating undocked element");

        let context = positions::derive_context(host, element, viewport);
        let location = docking_location(&context, state, visibility)?;
        let prior = capture_prior(host, element, current_box);
        state.set_prior_position(prior);
        state.set_last_edge(location.edge());
        tracing::debug!(?element, edge = location.edge().as_str(), "docking");
        return Some(docking_morph(&context, location, &prior, current_box));
    };

    let original_box = prior.original_box(current_box);
    let visibility = EdgeVisibility::of(original_box, viewport_bounds, adaptive);
    tracing::trace!(?element, ?visibility, "evaluating docked element");

    if visibility.is_complete() {
        tracing::debug!(?element, "restoring original position");
        revert_to_original(host, element, original_box, viewport, state)
    } else if adaptive {
        let context = positions::derive_context(host, element, viewport);
        let location = docking_location(&context, state, visibility)?;
        state.set_last_edge(location.edge());
        Some(docking_morph(&context, location, &prior, original_box))
    } else {
        None
    }
}

/// Builds the morph back to the pre-dock position, visible or not.
pub fn get_morph_to_original<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    viewport: &ScrollableViewport<H::Element>,
    state: &mut DockingState,
) -> Option<Morph> {
    let prior = state.prior_position().copied()?;
    let original_box = prior.original_box(host.box_of(element));
    revert_to_original(host, element, original_box, viewport, state)
}
