use std::ops::Range;

use crate::edit::Edit;

/// A run of edits judged contiguous by [`group_edits`].
///
/// Groups always cover a non-empty, contiguous range of edit indices.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EditGroup {
    range: Range<usize>,
}

impl EditGroup {
    fn starting_at(index: usize) -> Self {
        Self {
            range: index..index + 1,
        }
    }

    pub fn first(&self) -> usize {
        self.range.start
    }

    pub fn last(&self) -> usize {
        self.range.end - 1
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }

    /// Edit indices in ascending order.
    pub fn indices(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// Partitions an ordered edit list into groups of adjacent edits.
///
/// An edit joins the current group when its end line equals the previous edit's end line or
/// is exactly one past it. Only end lines are compared, so a long edit absorbs a following edit
/// wherever that one starts.
pub fn group_edits(edits: &[Edit]) -> Vec<EditGroup> {
    let mut groups: Vec<EditGroup> = Vec::new();
    let mut current: Option<EditGroup> = None;
    let mut previous_end: Option<usize> = None;

    for (idx, edit) in edits.iter().enumerate() {
        let end = edit.end_line();
        let adjacent = matches!(previous_end, Some(prev) if end == prev || end == prev + 1);
        if adjacent {
            if let Some(group) = current.as_mut() {
                group.range.end = idx + 1;
            }
        } else if let Some(done) = current.replace(EditGroup::starting_at(idx)) {
            groups.push(done);
        }
        previous_end = Some(end);
    }
    groups.extend(current);
    groups
}
