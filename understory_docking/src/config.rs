// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied docking configuration.
//!
//! ```rust
//! # use understory_docking::{DockingConfig, DockingHost, DockingMode};
//! # fn build<H: DockingHost + 'static>() -> DockingConfig<H> {
//! DockingConfig::new()
//!     .with_modes(&[DockingMode::Top])
//!     .on_docked(|element| {
//!         let _ = element;
//!     })
//! # }
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use kurbo::Rect;

use crate::host::DockingHost;
use crate::state::DockingModes;
use crate::types::{DockingMode, ScrollableViewport};

/// Callback invoked with the element a docking event concerns.
pub type DockingCallback<E> = Box<dyn Fn(E)>;

/// Computes the viewport an element should stay visible in.
pub type LazyViewport<H> =
    Box<dyn Fn(&H, <H as DockingHost>::Element) -> ScrollableViewport<<H as DockingHost>::Element>>;

/// Computes the box of the region a docked element belongs to.
pub type LazyContext<H> = Box<dyn Fn(&H, <H as DockingHost>::Element) -> Option<Rect>>;

/// Docking configuration for one element.
pub struct DockingConfig<H: DockingHost> {
    modes: DockingModes,
    lazy_viewport: Option<LazyViewport<H>>,
    contextual: Option<ContextualFade<H>>,
    on_docked: Option<DockingCallback<H::Element>>,
    on_undocked: Option<DockingCallback<H::Element>>,
}

impl<H: DockingHost> DockingConfig<H> {
    /// Creates a configuration with the defaults:
    /// - modes: top, then bottom
    /// - viewport: the host window, without scroll tracking
    /// - no contextual fade and no callbacks
    #[must_use]
    pub fn new() -> Self {
        Self {
            modes: DockingModes::from_slice(&[DockingMode::Top, DockingMode::Bottom]),
            lazy_viewport: None,
            contextual: None,
            on_docked: None,
            on_undocked: None,
        }
    }

    /// Sets the edges the element may dock to.
    #[must_use]
    pub fn with_modes(mut self, modes: &[DockingMode]) -> Self {
        self.modes = DockingModes::from_slice(modes);
        self
    }

    /// Sets how the viewport is computed.
    #[must_use]
    pub fn with_lazy_viewport(
        mut self,
        lazy_viewport: impl Fn(&H, H::Element) -> ScrollableViewport<H::Element> + 'static,
    ) -> Self {
        self.lazy_viewport = Some(Box::new(lazy_viewport));
        self
    }

    /// Enables fading the docked element with its context.
    #[must_use]
    pub fn with_contextual(mut self, contextual: ContextualFade<H>) -> Self {
        self.contextual = Some(contextual);
        self
    }

    /// Sets the callback fired after the element docks.
    #[must_use]
    pub fn on_docked(mut self, callback: impl Fn(H::Element) + 'static) -> Self {
        self.on_docked = Some(Box::new(callback));
        self
    }

    /// Sets the callback fired after the element undocks.
    #[must_use]
    pub fn on_undocked(mut self, callback: impl Fn(H::Element) + 'static) -> Self {
        self.on_undocked = Some(Box::new(callback));
        self
    }

    /// Initial docking modes.
    #[must_use]
    pub fn modes(&self) -> &[DockingMode] {
        &self.modes
    }

    /// Contextual fade settings, if enabled.
    #[must_use]
    pub fn contextual(&self) -> Option<&ContextualFade<H>> {
        self.contextual.as_ref()
    }

    /// Evaluates the viewport for `element`.
    pub fn viewport(&self, host: &H, element: H::Element) -> ScrollableViewport<H::Element> {
        match &self.lazy_viewport {
            Some(lazy) => lazy(host, element),
            None => ScrollableViewport::fixed(host.window_box()),
        }
    }

    pub(crate) fn fire_docked(&self, element: H::Element) {
        if let Some(callback) = &self.on_docked {
            callback(element);
        }
    }

    pub(crate) fn fire_undocked(&self, element: H::Element) {
        if let Some(callback) = &self.on_undocked {
            callback(element);
        }
    }
}

impl<H: DockingHost> Default for DockingConfig<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: DockingHost> fmt::Debug for DockingConfig<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockingConfig")
            .field("modes", &self.modes)
            .field("lazy_viewport", &self.lazy_viewport.is_some())
            .field("contextual", &self.contextual)
            .field("on_docked", &self.on_docked.is_some())
            .field("on_undocked", &self.on_undocked.is_some())
            .finish()
    }
}

/// Fades a docked element in and out with the visibility of a related region.
pub struct ContextualFade<H: DockingHost> {
    fade_in_class: String,
    fade_out_class: String,
    transition_class: String,
    lazy_context: LazyContext<H>,
    on_show: Option<DockingCallback<H::Element>>,
    on_shown: Option<DockingCallback<H::Element>>,
    on_hide: Option<DockingCallback<H::Element>>,
    on_hidden: Option<DockingCallback<H::Element>>,
}

impl<H: DockingHost> ContextualFade<H> {
    /// Creates fade settings from the three class names and the context lookup.
    #[must_use]
    pub fn new(
        fade_in_class: impl Into<String>,
        fade_out_class: impl Into<String>,
        transition_class: impl Into<String>,
        lazy_context: impl Fn(&H, H::Element) -> Option<Rect> + 'static,
    ) -> Self {
        Self {
            fade_in_class: fade_in_class.into(),
            fade_out_class: fade_out_class.into(),
            transition_class: transition_class.into(),
            lazy_context: Box::new(lazy_context),
            on_show: None,
            on_shown: None,
            on_hide: None,
            on_hidden: None,
        }
    }

    /// Fired when a fade in starts.
    #[must_use]
    pub fn on_show(mut self, callback: impl Fn(H::Element) + 'static) -> Self {
        self.on_show = Some(Box::new(callback));
        self
    }

    /// Fired when a fade in finishes.
    #[must_use]
    pub fn on_shown(mut self, callback: impl Fn(H::Element) + 'static) -> Self {
        self.on_shown = Some(Box::new(callback));
        self
    }

    /// Fired when a fade out starts.
    #[must_use]
    pub fn on_hide(mut self, callback: impl Fn(H::Element) + 'static) -> Self {
        self.on_hide = Some(Box::new(callback));
        self
    }

    /// Fired when a fade out finishes.
    #[must_use]
    pub fn on_hidden(mut self, callback: impl Fn(H::Element) + 'static) -> Self {
        self.on_hidden = Some(Box::new(callback));
        self
    }

    /// Class added while fading in.
    #[must_use]
    pub fn fade_in_class(&self) -> &str {
        &self.fade_in_class
    }

    /// Class added while fading out.
    #[must_use]
    pub fn fade_out_class(&self) -> &str {
        &self.fade_out_class
    }

    /// Class that enables the fade transition.
    #[must_use]
    pub fn transition_class(&self) -> &str {
        &self.transition_class
    }

    /// Evaluates the context box for `element`.
    pub fn context(&self, host: &H, element: H::Element) -> Option<Rect> {
        (self.lazy_context)(host, element)
    }

    pub(crate) fn fire_show(&self, element: H::Element) {
        fire(self.on_show.as_ref(), element);
    }

    pub(crate) fn fire_shown(&self, element: H::Element) {
        fire(self.on_shown.as_ref(), element);
    }

    pub(crate) fn fire_hide(&self, element: H::Element) {
        fire(self.on_hide.as_ref(), element);
    }

    pub(crate) fn fire_hidden(&self, element: H::Element) {
        fire(self.on_hidden.as_ref(), element);
    }
}

fn fire<E>(callback: Option<&DockingCallback<E>>, element: E) {
    if let Some(callback) = callback {
        callback(element);
    }
}

impl<H: DockingHost> fmt::Debug for ContextualFade<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextualFade")
            .field("fade_in_class", &self.fade_in_class)
            .field("fade_out_class", &self.fade_out_class)
            .field("transition_class", &self.transition_class)
            .finish_non_exhaustive()
    }
}
