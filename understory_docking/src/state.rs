// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element docking state.

use smallvec::SmallVec;

use crate::types::{DockingMode, PriorPosition};

/// Inline storage for the configured modes; there are only two.
pub type DockingModes = SmallVec<[DockingMode; 2]>;

/// Mutable record kept for each docked-capable element.
///
/// The presence of a [`PriorPosition`] is what makes an element docked as far
/// as the decision logic is concerned; `docked` mirrors it for hosts and is
/// only ever `true` while a prior position is stored.
#[derive(Clone, Debug, PartialEq)]
pub struct DockingState {
    docked: bool,
    visible: bool,
    prior: Option<PriorPosition>,
    modes: DockingModes,
    last_edge: Option<DockingMode>,
}

impl DockingState {
    /// Creates the state for a freshly attached element.
    #[must_use]
    pub fn new(modes: &[DockingMode]) -> Self {
        let mut state = Self {
            docked: false,
            visible: true,
            prior: None,
            modes: DockingModes::new(),
            last_edge: None,
        };
        state.set_modes(modes);
        state
    }

    /// Returns `true` while the element is docked.
    #[must_use]
    pub fn is_docked(&self) -> bool {
        self.docked
    }

    /// Sets the docked flag.
    pub fn set_docked(&mut self, docked: bool) {
        self.docked = docked;
    }

    /// Returns `true` while the contextual region is considered visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets the contextual visibility flag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The position stored when the current docking episode began.
    #[must_use]
    pub fn prior_position(&self) -> Option<&PriorPosition> {
        self.prior.as_ref()
    }

    /// Stores the pre-dock position.
    pub fn set_prior_position(&mut self, prior: PriorPosition) {
        self.prior = Some(prior);
    }

    /// Drops the pre-dock position, returning it.
    pub fn clear_prior_position(&mut self) -> Option<PriorPosition> {
        self.prior.take()
    }

    /// Configured docking modes, in configuration order.
    #[must_use]
    pub fn modes(&self) -> &[DockingMode] {
        &self.modes
    }

    /// Replaces the docking modes. Repeated modes are kept once.
    pub fn set_modes(&mut self, modes: &[DockingMode]) {
        self.modes.clear();
        for &mode in modes {
            if !self.modes.contains(&mode) {
                self.modes.push(mode);
            }
        }
    }

    /// Returns `true` if `mode` is configured.
    #[must_use]
    pub fn has_mode(&self, mode: DockingMode) -> bool {
        self.modes.contains(&mode)
    }

    /// The edge this element was most recently docked to.
    #[must_use]
    pub fn last_edge(&self) -> Option<DockingMode> {
        self.last_edge
    }

    /// Records the edge the element is being docked to.
    pub fn set_last_edge(&mut self, edge: DockingMode) {
        self.last_edge = Some(edge);
    }

    /// Returns `true` if `docked` implies a stored prior position.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        !self.docked || self.prior.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OffsetSides, Position};

    #[test]
    fn new_state_is_undocked_and_visible() {
        let state = DockingState::new(&[DockingMode::Top, DockingMode::Bottom]);
        assert!(!state.is_docked());
        assert!(state.is_visible());
        assert!(state.prior_position().is_none());
        assert_eq!(state.modes(), &[DockingMode::Top, DockingMode::Bottom]);
        assert_eq!(state.last_edge(), None);
        assert!(state.is_consistent());
    }

    #[test]
    fn set_modes_drops_repeats_and_keeps_order() {
        let mut state = DockingState::new(&[]);
        state.set_modes(&[DockingMode::Bottom, DockingMode::Top, DockingMode::Bottom]);
        assert_eq!(state.modes(), &[DockingMode::Bottom, DockingMode::Top]);
        assert!(state.has_mode(DockingMode::Top));
    }

    #[test]
    fn docked_without_prior_is_inconsistent() {
        let mut state = DockingState::new(&[DockingMode::Top]);
        state.set_docked(true);
        assert!(!state.is_consistent());

        state.set_prior_position(PriorPosition {
            sides: OffsetSides::empty(),
            position: Position::Static,
            x: 0.0,
            y: 0.0,
        });
        assert!(state.is_consistent());
        assert!(state.clear_prior_position().is_some());
        assert!(state.clear_prior_position().is_none());
    }
}
