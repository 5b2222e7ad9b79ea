// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_docking --heading-base-level=0

//! Understory Docking: keep an element reachable while its viewport scrolls.
//!
//! A toolbar or panel that would scroll out of view is *docked*: repositioned
//! against the top or bottom edge of its viewport. Once the viewport scrolls back
//! far enough for the original position to be fully visible again, the element is
//! restored to its original layout.
//!
//! This crate is the headless decision engine. It does not own elements, layout,
//! or event dispatch. Hosts are expected to:
//! - Implement [`DockingHost`] over their element tree, answering geometry queries
//!   and applying the style writes the engine asks for.
//! - Create a [`Dockable`] (or attach to a [`DockingRegistry`]) for each element.
//! - Call [`Dockable::refresh`] from scroll and resize handlers, after anything
//!   else that moves the element for the same event.
//!
//! The core pieces are:
//! - [`positions`]: where a docked element should sit, for window viewports and
//!   for scroll containers with any relationship to the element's offset parent.
//! - [`dockables`]: the original/docked state machine that produces a [`Morph`].
//! - [`Dockable`]: the operation surface (`refresh`, `reset`, forced docking and
//!   restoring) plus contextual fading.
//!
//! Only the vertical axis is managed. Horizontal offsets are preserved.
//!
//! ## Minimal example
//!
//! Pinning an element inside a scroll container that is also its offset parent
//! only needs the container's scroll:
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_docking::geometry::bounds;
//! use understory_docking::positions::{DockingLocation, PositionContext, dock_to_top};
//! use understory_docking::Position;
//!
//! let context = PositionContext {
//!     offset_parent_box: Some(bounds(0.0, 100.0, 800.0, 400.0)),
//!     body_box: bounds(0.0, 0.0, 800.0, 2000.0),
//!     window_box: bounds(0.0, 0.0, 800.0, 600.0),
//!     window_scroll: Vec2::ZERO,
//!     viewport: bounds(0.0, 100.0, 800.0, 400.0),
//!     viewport_scroll: Some(Vec2::new(0.0, 30.0)),
//!     offset_parent_is_scroll: true,
//!     scroll_contains_offset_parent: false,
//! };
//!
//! assert_eq!(
//!     dock_to_top(&context),
//!     DockingLocation::Top { position: Position::Absolute, top_y: 30.0 }
//! );
//! ```
//!
//! ## Diagnostics
//!
//! Transitions are reported through `tracing` at `debug` level and visibility
//! evaluations at `trace` level. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod dockable;
pub mod dockables;
pub mod geometry;
mod host;
pub mod positions;
mod registry;
mod state;
mod types;

pub use config::{ContextualFade, DockingCallback, DockingConfig, LazyContext, LazyViewport};
pub use dockable::Dockable;
pub use host::DockingHost;
pub use registry::DockingRegistry;
pub use state::{DockingModes, DockingState};
pub use types::{
    DockingMode, Morph, OffsetSides, ParseError, Position, PositionCss, PriorPosition,
    ScrollableViewport, ViewportScroll,
};
