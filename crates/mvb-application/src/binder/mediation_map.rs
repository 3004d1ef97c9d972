//! Mediation Map
//!
//! Exclusive store of active view → mediator associations. A view appears at
//! most once. Views are held weakly: the host owns them, the map only
//! remembers which mediator belongs to which live view.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use mvb_domain::error::{Error, Result};
use mvb_domain::ports::{Mediator, View, ViewRef};
use mvb_domain::value_objects::{TypeKey, ViewId};

/// One mediated view
pub struct MediationEntry {
    view: Weak<dyn View>,
    view_type: TypeKey,
    mediator_type: TypeKey,
    mediator: Box<dyn Mediator>,
}

impl MediationEntry {
    /// The mediated view, if the host still holds it
    pub fn view(&self) -> Option<ViewRef> {
        self.view.upgrade()
    }

    pub fn view_type(&self) -> TypeKey {
        self.view_type
    }

    pub fn mediator_type(&self) -> TypeKey {
        self.mediator_type
    }

    pub fn mediator(&self) -> &dyn Mediator {
        self.mediator.as_ref()
    }

    pub fn mediator_mut(&mut self) -> &mut dyn Mediator {
        self.mediator.as_mut()
    }

    /// Take ownership of the mediator, consuming the entry
    pub fn into_mediator(self) -> Box<dyn Mediator> {
        self.mediator
    }
}

impl std::fmt::Debug for MediationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediationEntry")
            .field("view_type", &self.view_type)
            .field("mediator_type", &self.mediator_type)
            .field("view_alive", &(self.view.strong_count() > 0))
            .finish()
    }
}

/// Registry of currently mediated views
#[derive(Debug, Default)]
pub struct MediationMap {
    entries: HashMap<ViewId, MediationEntry>,
}

impl MediationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `mediator` with `view`
    ///
    /// Fails when the view already has a mediator; callers check
    /// [`contains`](Self::contains) first.
    pub fn add(
        &mut self,
        view: &ViewRef,
        mediator_type: TypeKey,
        mediator: Box<dyn Mediator>,
    ) -> Result<()> {
        let id = ViewId::of(view);
        if self.entries.contains_key(&id) {
            return Err(Error::binding(format!(
                "View {} ({}) already has a mediator",
                id,
                view.view_type().name()
            )));
        }

        self.entries.insert(
            id,
            MediationEntry {
                view: Arc::downgrade(view),
                view_type: view.view_type(),
                mediator_type,
                mediator,
            },
        );
        Ok(())
    }

    /// Remove and return the entry for `view`, `None` when unmapped
    pub fn remove(&mut self, view: &ViewRef) -> Option<MediationEntry> {
        self.entries.remove(&ViewId::of(view))
    }

    pub fn get(&self, view: &ViewRef) -> Option<&MediationEntry> {
        self.entries.get(&ViewId::of(view))
    }

    pub fn get_mut(&mut self, view: &ViewRef) -> Option<&mut MediationEntry> {
        self.entries.get_mut(&ViewId::of(view))
    }

    pub fn contains(&self, view: &ViewRef) -> bool {
        self.contains_id(ViewId::of(view))
    }

    pub fn contains_id(&self, id: ViewId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &MediationEntry)> {
        self.entries.iter().map(|(id, entry)| (*id, entry))
    }

    pub fn view_ids(&self) -> Vec<ViewId> {
        self.entries.keys().copied().collect()
    }

    /// Remove entries whose view the host dropped without a DESTROYED trigger
    pub fn take_orphans(&mut self) -> Vec<MediationEntry> {
        let orphaned: Vec<ViewId> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.view.strong_count() == 0)
            .map(|(id, _)| *id)
            .collect();

        orphaned
            .into_iter()
            .filter_map(|id| self.entries.remove(&id))
            .collect()
    }
}
