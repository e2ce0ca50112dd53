use std::collections::BTreeSet;

/// The set of edit indices kept for filtered output.
///
/// Indices are always within `0..total` and iterate in ascending order. A new selection is
/// empty; nothing changes it except explicit keep/skip calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    kept: BTreeSet<usize>,
    total: usize,
}

impl Selection {
    pub fn new(total: usize) -> Self {
        Self {
            kept: BTreeSet::new(),
            total,
        }
    }

    /// Number of selectable edits.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn kept_count(&self) -> usize {
        self.kept.len()
    }

    pub fn is_kept(&self, index: usize) -> bool {
        self.kept.contains(&index)
    }

    fn is_valid(&self, index: usize) -> bool {
        index < self.total
    }

    /// Marks `index` as kept. Returns `false` (and changes nothing) for an invalid index.
    pub fn keep(&mut self, index: usize) -> bool {
        if !self.is_valid(index) {
            return false;
        }
        if self.kept.insert(index) {
            log::trace!("keep edit {index}");
        }
        true
    }

    /// Marks `index` as skipped. Returns `false` (and changes nothing) for an invalid index.
    pub fn skip(&mut self, index: usize) -> bool {
        if !self.is_valid(index) {
            return false;
        }
        if self.kept.remove(&index) {
            log::trace!("skip edit {index}");
        }
        true
    }

    pub fn keep_all(&mut self) {
        self.kept = (0..self.total).collect();
    }

    pub fn skip_all(&mut self) {
        self.kept.clear();
    }

    /// Kept indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.kept.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let sel = Selection::new(3);
        assert_eq!(sel.total(), 3);
        assert_eq!(sel.kept_count(), 0);
    }

    #[test]
    fn keep_is_idempotent() {
        let mut sel = Selection::new(3);
        assert!(sel.keep(1));
        let once = sel.clone();
        assert!(sel.keep(1));
        assert_eq!(sel, once);
        assert_eq!(sel.kept_count(), 1);
    }

    #[test]
    fn skip_of_unkept_index_is_valid_noop() {
        let mut sel = Selection::new(3);
        assert!(sel.skip(2));
        assert_eq!(sel.kept_count(), 0);
    }

    #[test]
    fn invalid_indices_are_rejected() {
        let mut sel = Selection::new(2);
        assert!(!sel.keep(2));
        assert!(!sel.skip(7));
        assert_eq!(sel.kept_count(), 0);

        let mut empty = Selection::new(0);
        assert!(!empty.keep(0));
        assert!(!empty.skip(0));
    }

    #[test]
    fn iterates_in_ascending_order() {
        let mut sel = Selection::new(10);
        for idx in [7, 2, 9, 2, 0] {
            sel.keep(idx);
        }
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![0, 2, 7, 9]);
    }

    #[test]
    fn keep_all_and_skip_all() {
        let mut sel = Selection::new(4);
        sel.keep_all();
        sel.keep_all();
        assert_eq!(sel.kept_count(), 4);
        sel.skip_all();
        assert_eq!(sel.kept_count(), 0);
    }
}
