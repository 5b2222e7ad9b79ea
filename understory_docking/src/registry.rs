// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena of docking elements keyed by element handle.

use core::fmt;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::config::DockingConfig;
use crate::dockable::Dockable;
use crate::host::DockingHost;

/// Holds a [`Dockable`] for every element the host has attached.
///
/// Hosts typically keep one registry per window and call
/// [`DockingRegistry::refresh_all`] from their scroll and resize handlers.
pub struct DockingRegistry<H: DockingHost> {
    entries: HashMap<H::Element, Dockable<H>>,
}

impl<H: DockingHost> DockingRegistry<H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Starts managing `element`, replacing any previous registration.
    pub fn attach(&mut self, element: H::Element, config: DockingConfig<H>) -> &mut Dockable<H> {
        let dockable = Dockable::new(element, config);
        match self.entries.entry(element) {
            Entry::Occupied(mut entry) => {
                entry.insert(dockable);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(dockable),
        }
    }

    /// Stops managing `element`, returning its final state.
    pub fn detach(&mut self, element: H::Element) -> Option<Dockable<H>> {
        self.entries.remove(&element)
    }

    /// The entry for `element`, if attached.
    #[must_use]
    pub fn get(&self, element: H::Element) -> Option<&Dockable<H>> {
        self.entries.get(&element)
    }

    /// Mutable access to the entry for `element`, if attached.
    pub fn get_mut(&mut self, element: H::Element) -> Option<&mut Dockable<H>> {
        self.entries.get_mut(&element)
    }

    /// Refreshes every attached element.
    pub fn refresh_all(&mut self, host: &mut H) {
        for dockable in self.entries.values_mut() {
            dockable.refresh(host);
        }
    }

    /// Number of attached elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no element is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: DockingHost> Default for DockingRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: DockingHost> fmt::Debug for DockingRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DockingRegistry")
            .field("entries", &self.entries)
            .finish()
    }
}
