use parking_lot::Mutex;
use std::sync::Arc;

use crate::error::Result;
use crate::selection::Selection;
use crate::session::DiffSession;
use crate::session::EditSet;
use crate::source::EditSource;

/// A [`DiffSession`] that can be cloned and used from several threads.
///
/// All clones share one selection behind a single lock. Every keep/skip call and every output
/// that depends on the selection takes that lock; the edit set is read without it.
#[derive(Clone)]
pub struct SharedDiffSession {
    set: Arc<EditSet>,
    selection: Arc<Mutex<Selection>>,
    differ: Arc<dyn EditSource + Send + Sync>,
}

impl std::fmt::Debug for SharedDiffSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedDiffSession")
            .field("set", &self.set)
            .field("selection", &*self.selection.lock())
            .finish_non_exhaustive()
    }
}

impl From<DiffSession> for SharedDiffSession {
    fn from(session: DiffSession) -> Self {
        session.into_shared()
    }
}

impl SharedDiffSession {
    pub(crate) fn from_parts(
        set: Arc<EditSet>,
        selection: Selection,
        differ: Arc<dyn EditSource + Send + Sync>,
    ) -> Self {
        Self {
            set,
            selection: Arc::new(Mutex::new(selection)),
            differ,
        }
    }

    pub fn edit_set(&self) -> &EditSet {
        &self.set
    }

    pub fn total_edits(&self) -> usize {
        self.set.edits().len()
    }

    pub fn group_count(&self) -> usize {
        self.set.groups().len()
    }

    /// A copy of the current selection.
    pub fn selection(&self) -> Selection {
        self.selection.lock().clone()
    }

    pub fn kept_count(&self) -> usize {
        self.selection.lock().kept_count()
    }

    pub fn is_kept(&self, index: usize) -> bool {
        self.selection.lock().is_kept(index)
    }

    pub fn keep_all(&self) {
        self.selection.lock().keep_all();
    }

    pub fn skip_all(&self) {
        self.selection.lock().skip_all();
    }

    pub fn keep_edit(&self, index: usize) -> bool {
        self.selection.lock().keep(index)
    }

    pub fn skip_edit(&self, index: usize) -> bool {
        self.selection.lock().skip(index)
    }

    /// Keeps a whole group under one lock, so no other caller observes it half-kept.
    pub fn keep_group(&self, index: usize) -> bool {
        let Some(group) = self.set.groups().get(index) else {
            return false;
        };
        let mut selection = self.selection.lock();
        for idx in group.indices() {
            selection.keep(idx);
        }
        true
    }

    pub fn skip_group(&self, index: usize) -> bool {
        let Some(group) = self.set.groups().get(index) else {
            return false;
        };
        let mut selection = self.selection.lock();
        for idx in group.indices() {
            selection.skip(idx);
        }
        true
    }

    pub fn unified_all(&self) -> Result<String> {
        self.set
            .unified_for(self.differ.as_ref(), 0..self.total_edits())
    }

    pub fn unified_edit(&self, index: usize) -> Result<String> {
        self.set.unified_for(self.differ.as_ref(), [index])
    }

    pub fn unified_group(&self, index: usize) -> Result<String> {
        let group = self.set.group(index)?;
        self.set.unified_for(self.differ.as_ref(), group.indices())
    }

    pub fn unified_kept(&self) -> Result<String> {
        let selection = self.selection.lock();
        self.set.unified_for(self.differ.as_ref(), selection.iter())
    }

    pub fn modified_kept(&self) -> Result<String> {
        let selection = self.selection.lock();
        self.set.apply_for(self.differ.as_ref(), selection.iter())
    }
}
