// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The operations a host invokes on a docking element.

use core::fmt;

use crate::config::DockingConfig;
use crate::dockables;
use crate::geometry;
use crate::host::DockingHost;
use crate::positions::{self, DockingLocation, PositionContext};
use crate::state::DockingState;
use crate::types::{DockingMode, Morph, PositionCss, PriorPosition, ScrollableViewport};

/// An element managed by the docking engine: its handle, configuration, and
/// state.
///
/// Every operation runs to completion synchronously. If the host also moves the
/// element in response to the same scroll (dragging, for example), that has to
/// happen before [`Dockable::refresh`] reads the element box.
pub struct Dockable<H: DockingHost> {
    element: H::Element,
    config: DockingConfig<H>,
    state: DockingState,
}

impl<H: DockingHost> Dockable<H> {
    /// Starts managing `element` in its original position.
    #[must_use]
    pub fn new(element: H::Element, config: DockingConfig<H>) -> Self {
        let state = DockingState::new(config.modes());
        Self {
            element,
            config,
            state,
        }
    }

    /// The managed element.
    #[must_use]
    pub fn element(&self) -> H::Element {
        self.element
    }

    /// The element's configuration.
    #[must_use]
    pub fn config(&self) -> &DockingConfig<H> {
        &self.config
    }

    /// The element's docking state.
    #[must_use]
    pub fn state(&self) -> &DockingState {
        &self.state
    }

    /// Re-evaluates docking for the current geometry.
    ///
    /// Does nothing while the element is detached from a live environment.
    pub fn refresh(&mut self, host: &mut H) {
        refresh(host, self.element, &self.config, &mut self.state);
    }

    /// Forces the element back to its original position, then re-evaluates.
    ///
    /// Does nothing unless the element is docked.
    pub fn reset(&mut self, host: &mut H) {
        if !self.state.is_docked() {
            return;
        }
        let (element, config, state) = (self.element, &self.config, &mut self.state);
        state.set_docked(false);

        let viewport = config.viewport(host, element);
        if let Some(morph) = dockables::get_morph_to_original(host, element, &viewport, state) {
            match morph {
                Morph::Static => morph_to_static(host, element, config, state),
                Morph::Absolute(css) => morph_to_coord(host, element, config, state, &css),
                Morph::Fixed(_) => {}
            }
        }

        state.set_visible(true);
        if let Some(fade) = config.contextual() {
            host.remove_class(element, fade.fade_in_class());
            host.remove_class(element, fade.fade_out_class());
            host.remove_class(element, fade.transition_class());
            fade.fire_show(element);
        }
        tracing::debug!(?element, "reset");

        refresh(host, element, config, state);
    }

    /// Returns `true` while the element is docked.
    #[must_use]
    pub fn is_docked(&self) -> bool {
        self.state.is_docked()
    }

    /// The edges the element may dock to.
    #[must_use]
    pub fn modes(&self) -> &[DockingMode] {
        self.state.modes()
    }

    /// Replaces the edges the element may dock to.
    pub fn set_modes(&mut self, modes: &[DockingMode]) {
        self.state.set_modes(modes);
    }

    /// The position stored when the current docking episode began.
    #[must_use]
    pub fn initial_position(&self) -> Option<&PriorPosition> {
        self.state.prior_position()
    }

    /// Docks the element to the top of its viewport whatever its visibility.
    pub fn force_dock_to_top(&mut self, host: &mut H) {
        self.force_dock_with(host, positions::dock_to_top);
    }

    /// Docks the element to the bottom of its viewport whatever its visibility.
    pub fn force_dock_to_bottom(&mut self, host: &mut H) {
        self.force_dock_with(host, positions::dock_to_bottom);
    }

    fn force_dock_with(&mut self, host: &mut H, dock: fn(&PositionContext) -> DockingLocation) {
        let (element, config, state) = (self.element, &self.config, &mut self.state);
        if !host.is_connected(element) {
            return;
        }

        let viewport = config.viewport(host, element);
        let current_box = host.box_of(element) + viewport.scroll_offsets();
        // An element that is already docked keeps its first prior position.
        dockables::store_prior_if_none(host, element, current_box, state);
        let Some(prior) = state.prior_position().copied() else {
            return;
        };

        let context = positions::derive_context(host, element, &viewport);
        let location = dock(&context);
        state.set_last_edge(location.edge());
        tracing::debug!(?element, edge = location.edge().as_str(), "forced docking");

        let original_box = prior.original_box(current_box);
        let morph = dockables::docking_morph(&context, location, &prior, original_box);
        apply_morph(host, element, config, state, &viewport, morph);
        state.set_docked(true);
        debug_assert!(state.is_consistent(), "docked element lost its prior position");
    }

    /// Returns the element to its original position whatever its visibility.
    pub fn force_restore(&mut self, host: &mut H) {
        let (element, config, state) = (self.element, &self.config, &mut self.state);
        let viewport = config.viewport(host, element);
        let morph = dockables::get_morph_to_original(host, element, &viewport, state);
        state.set_docked(false);
        tracing::debug!(?element, "forced restore");
        if let Some(morph) = morph {
            apply_morph(host, element, config, state, &viewport, morph);
        }
    }

    /// Forgets the original position without moving the element.
    ///
    /// For hosts that repositioned the element themselves. The element counts
    /// as undocked afterwards.
    pub fn clear_original(&mut self) {
        self.state.clear_prior_position();
        self.state.set_docked(false);
    }

    /// Reports that a fade transition on the element ended.
    pub fn transition_finished(&mut self, host: &mut H) {
        let Some(fade) = self.config.contextual() else {
            return;
        };
        host.remove_class(self.element, fade.transition_class());
        if self.state.is_visible() {
            fade.fire_shown(self.element);
        } else {
            fade.fire_hidden(self.element);
        }
    }
}

impl<H: DockingHost> fmt::Debug for Dockable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dockable")
            .field("element", &self.element)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

fn refresh<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    config: &DockingConfig<H>,
    state: &mut DockingState,
) {
    if !host.is_connected(element) {
        tracing::trace!(?element, "skipping refresh of detached element");
        return;
    }

    let viewport = config.viewport(host, element);
    if state.prior_position().is_some() {
        update_visibility(host, element, config, state, &viewport, false);
    }

    if let Some(morph) = dockables::get_morph(host, element, &viewport, state) {
        apply_morph(host, element, config, state, &viewport, morph);
    } else if state.is_docked() && state.prior_position().is_none() {
        // The restore step gave up on this element; it stays where it is but
        // is no longer docked.
        state.set_docked(false);
        config.fire_undocked(element);
    }
    debug_assert!(state.is_consistent(), "docked element lost its prior position");
}

fn apply_morph<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    config: &DockingConfig<H>,
    state: &mut DockingState,
    viewport: &ScrollableViewport<H::Element>,
    morph: Morph,
) {
    match morph {
        Morph::Static => morph_to_static(host, element, config, state),
        Morph::Absolute(css) => {
            // Adaptive docking moves between absolute positions while docked.
            if state.is_docked() {
                update_visibility(host, element, config, state, viewport, true);
            }
            morph_to_coord(host, element, config, state, &css);
        }
        Morph::Fixed(css) => {
            update_visibility(host, element, config, state, viewport, true);
            morph_to_coord(host, element, config, state, &css);
        }
    }
}

fn morph_to_static<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    config: &DockingConfig<H>,
    state: &mut DockingState,
) {
    state.set_docked(false);
    host.clear_position(element);
    config.fire_undocked(element);
}

fn morph_to_coord<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    config: &DockingConfig<H>,
    state: &mut DockingState,
    css: &PositionCss,
) {
    // With adaptive docking `fixed` is not the only docked scheme, so the
    // stored prior position decides.
    let marker = state
        .prior_position()
        .map(|prior| prior.original_box(host.box_of(element)));
    let docked = marker.is_some();
    state.set_docked(docked);
    host.apply_position(element, css);
    host.set_marker(element, marker);
    if docked {
        config.fire_docked(element);
    } else {
        config.fire_undocked(element);
    }
}

fn update_visibility<H: DockingHost>(
    host: &mut H,
    element: H::Element,
    config: &DockingConfig<H>,
    state: &mut DockingState,
    viewport: &ScrollableViewport<H::Element>,
    morphing_to_docked: bool,
) {
    let Some(fade) = config.contextual() else {
        return;
    };
    let Some(context_box) = fade.context(host, element) else {
        return;
    };

    let visible = geometry::is_partially_visible(context_box, viewport.bounds);
    if visible == state.is_visible() {
        return;
    }
    state.set_visible(visible);
    tracing::trace!(?element, visible, "context visibility changed");

    if morphing_to_docked && !visible {
        // The context was never on screen while docked, so skip the fade.
        host.remove_class(element, fade.fade_in_class());
        host.add_class(element, fade.fade_out_class());
        fade.fire_hide(element);
    } else if visible {
        dockables::appear(host, element, fade);
    } else {
        dockables::disappear(host, element, fade);
    }
}
