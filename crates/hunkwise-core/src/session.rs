use std::sync::Arc;

use crate::edit::Edit;
use crate::error::DiffError;
use crate::error::Result;
use crate::group::EditGroup;
use crate::group::group_edits;
use crate::selection::Selection;
use crate::shared::SharedDiffSession;
use crate::source::EditSource;
use crate::source::LineDiff;
use crate::source::LineDiffOptions;

/// The immutable half of a session: both texts, their edits and the group partition.
///
/// Computed once; nothing here changes afterwards, so it can be shared freely.
#[derive(Clone, Debug)]
pub struct EditSet {
    path: String,
    source: String,
    changed: String,
    edits: Vec<Edit>,
    groups: Vec<EditGroup>,
}

impl EditSet {
    pub fn compute(
        path: impl Into<String>,
        source: impl Into<String>,
        changed: impl Into<String>,
        differ: &dyn EditSource,
    ) -> Self {
        let path = path.into();
        let source = source.into();
        let changed = changed.into();
        let edits = differ.compute(&path, &source, &changed);
        let groups = group_edits(&edits);
        log::debug!("{path}: {} edits in {} groups", edits.len(), groups.len());
        Self {
            path,
            source,
            changed,
            edits,
            groups,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn changed(&self) -> &str {
        &self.changed
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn groups(&self) -> &[EditGroup] {
        &self.groups
    }

    /// Header path for the original side, `a/<path>`.
    pub fn old_path(&self) -> String {
        format!("a/{}", self.path)
    }

    /// Header path for the changed side, `b/<path>`.
    pub fn new_path(&self) -> String {
        format!("b/{}", self.path)
    }

    pub fn edit(&self, index: usize) -> Result<&Edit> {
        self.edits.get(index).ok_or(DiffError::EditIndex {
            index,
            len: self.edits.len(),
        })
    }

    pub fn group(&self, index: usize) -> Result<&EditGroup> {
        self.groups.get(index).ok_or(DiffError::GroupIndex {
            index,
            len: self.groups.len(),
        })
    }

    /// Unified diff of the edits at `indices`, which must be valid and ascending.
    pub(crate) fn unified_for(
        &self,
        differ: &dyn EditSource,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<String> {
        let edits = self.pick(indices)?;
        differ.unified(&self.old_path(), &self.new_path(), &self.source, &edits)
    }

    pub(crate) fn apply_for(
        &self,
        differ: &dyn EditSource,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<String> {
        let edits = self.pick(indices)?;
        differ.apply(&self.source, &edits).inspect_err(|err| {
            log::debug!(
                "{}: applying {} edits failed: {err}",
                self.path,
                edits.len()
            );
        })
    }

    fn pick(&self, indices: impl IntoIterator<Item = usize>) -> Result<Vec<&Edit>> {
        indices.into_iter().map(|idx| self.edit(idx)).collect()
    }
}

/// Edits for one (source, changed) pair plus a mutable keep/skip selection.
///
/// Outputs come in two flavors: unfiltered (`unified_all`, `unified_edit`, `unified_group`)
/// and gated by the selection (`unified_kept`, `modified_kept`).
///
/// ```
/// use hunkwise_core::DiffSession;
///
/// let mut session = DiffSession::new("abc.txt", "a\nb\nc\n", "a\nX\nc\n");
/// assert_eq!(session.total_edits(), 1);
/// session.keep_all();
/// assert_eq!(session.modified_kept().unwrap(), "a\nX\nc\n");
/// ```
#[derive(Clone)]
pub struct DiffSession {
    set: Arc<EditSet>,
    selection: Selection,
    differ: Arc<dyn EditSource + Send + Sync>,
}

impl std::fmt::Debug for DiffSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiffSession")
            .field("set", &self.set)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl DiffSession {
    /// Diffs `source` against `changed` line by line with default options.
    pub fn new(
        path: impl Into<String>,
        source: impl Into<String>,
        changed: impl Into<String>,
    ) -> Self {
        Self::with_edit_source(path, source, changed, Arc::new(LineDiff::new()))
    }

    pub fn with_options(
        path: impl Into<String>,
        source: impl Into<String>,
        changed: impl Into<String>,
        options: LineDiffOptions,
    ) -> Self {
        Self::with_edit_source(
            path,
            source,
            changed,
            Arc::new(LineDiff::with_options(options)),
        )
    }

    /// Uses a custom backend for computing, serializing and applying edits.
    pub fn with_edit_source(
        path: impl Into<String>,
        source: impl Into<String>,
        changed: impl Into<String>,
        differ: Arc<dyn EditSource + Send + Sync>,
    ) -> Self {
        let set = EditSet::compute(path, source, changed, differ.as_ref());
        let selection = Selection::new(set.edits().len());
        Self {
            set: Arc::new(set),
            selection,
            differ,
        }
    }

    pub fn edit_set(&self) -> &EditSet {
        &self.set
    }

    pub fn path(&self) -> &str {
        self.set.path()
    }

    pub fn source(&self) -> &str {
        self.set.source()
    }

    pub fn changed(&self) -> &str {
        self.set.changed()
    }

    /// `a/<path>`, the old-side header of unified output.
    pub fn old_path(&self) -> String {
        self.set.old_path()
    }

    /// `b/<path>`, the new-side header of unified output.
    pub fn new_path(&self) -> String {
        self.set.new_path()
    }

    pub fn edits(&self) -> &[Edit] {
        self.set.edits()
    }

    pub fn groups(&self) -> &[EditGroup] {
        self.set.groups()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Number of edits, regardless of selection.
    pub fn total_edits(&self) -> usize {
        self.set.edits().len()
    }

    pub fn kept_count(&self) -> usize {
        self.selection.kept_count()
    }

    pub fn is_kept(&self, index: usize) -> bool {
        self.selection.is_kept(index)
    }

    pub fn keep_all(&mut self) {
        self.selection.keep_all();
    }

    pub fn skip_all(&mut self) {
        self.selection.skip_all();
    }

    /// Keeps one edit. Returns `false` for an out-of-range index.
    pub fn keep_edit(&mut self, index: usize) -> bool {
        self.selection.keep(index)
    }

    /// Skips one edit. Returns `false` for an out-of-range index.
    pub fn skip_edit(&mut self, index: usize) -> bool {
        self.selection.skip(index)
    }

    /// Keeps every edit of a group. An unknown group is ignored and reported as `false`.
    pub fn keep_group(&mut self, index: usize) -> bool {
        let Some(group) = self.set.groups().get(index) else {
            return false;
        };
        for idx in group.indices() {
            self.selection.keep(idx);
        }
        true
    }

    /// Skips every edit of a group. An unknown group is ignored and reported as `false`.
    pub fn skip_group(&mut self, index: usize) -> bool {
        let Some(group) = self.set.groups().get(index) else {
            return false;
        };
        for idx in group.indices() {
            self.selection.skip(idx);
        }
        true
    }

    pub fn group_count(&self) -> usize {
        self.set.groups().len()
    }

    /// Unified diff of every edit.
    pub fn unified_all(&self) -> Result<String> {
        self.set
            .unified_for(self.differ.as_ref(), 0..self.total_edits())
    }

    /// Unified diff of a single edit, for previewing it in isolation.
    pub fn unified_edit(&self, index: usize) -> Result<String> {
        self.set.unified_for(self.differ.as_ref(), [index])
    }

    /// Unified diff of one group, regardless of selection.
    pub fn unified_group(&self, index: usize) -> Result<String> {
        let group = self.set.group(index)?;
        self.set.unified_for(self.differ.as_ref(), group.indices())
    }

    /// Unified diff of the kept edits only.
    pub fn unified_kept(&self) -> Result<String> {
        self.set
            .unified_for(self.differ.as_ref(), self.selection.iter())
    }

    /// The source text with only the kept edits applied.
    pub fn modified_kept(&self) -> Result<String> {
        self.set
            .apply_for(self.differ.as_ref(), self.selection.iter())
    }

    /// Converts into a handle that can be cloned across threads, sharing one selection.
    pub fn into_shared(self) -> SharedDiffSession {
        SharedDiffSession::from_parts(self.set, self.selection, self.differ)
    }
}
