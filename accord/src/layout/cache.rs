//! Per-call measurement memo.
//!
//! Stores (node path, proposal) -> Size answers and the per-child sizes a stack
//! computed while answering its own size query, so the render pass can reuse them.
//! A memo lives inside one [`LayoutContext`](super::LayoutContext) and is dropped
//! with it: nothing carries over between independent layout calls.

use std::collections::HashMap;

use crate::primitives::{ProposedSize, Size};

/// Key for a memoized size answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey {
    /// Path-based ID of the node (rolling hash of its position in the tree).
    pub path_id: u64,
    /// Bit pattern of the proposal.
    pub proposal: (u64, u64),
}

impl MemoKey {
    #[inline]
    pub fn new(path_id: u64, proposed: ProposedSize) -> Self {
        Self { path_id, proposal: proposed.key() }
    }
}

/// A stack's distribution for one proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    pub proposal: ProposedSize,
    /// The size the stack reported for `proposal`.
    pub size: Size,
    /// Final size of every child, in child order.
    pub child_sizes: Vec<Size>,
}

#[derive(Debug, Default)]
pub struct MeasureMemo {
    sizes: HashMap<MemoKey, Size>,
    stacks: HashMap<u64, Vec<StackLayout>>,
    hits: u64,
    misses: u64,
}

impl MeasureMemo {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&mut self, key: MemoKey) -> Option<Size> {
        match self.sizes.get(&key) {
            Some(size) => {
                self.hits += 1;
                Some(*size)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    #[inline]
    pub fn insert(&mut self, key: MemoKey, size: Size) {
        self.sizes.insert(key, size);
    }

    /// Remember a stack distribution, replacing any earlier one for the same proposal.
    pub fn record_stack(&mut self, path_id: u64, layout: StackLayout) {
        let entries = self.stacks.entry(path_id).or_default();
        let key = layout.proposal.key();
        entries.retain(|e| e.proposal.key() != key);
        entries.push(layout);
    }

    /// Make the distribution recorded for `proposed` the most recent one.
    pub fn touch_stack(&mut self, path_id: u64, proposed: ProposedSize) {
        let Some(entries) = self.stacks.get_mut(&path_id) else {
            return;
        };
        let key = proposed.key();
        if let Some(pos) = entries.iter().position(|e| e.proposal.key() == key) {
            let entry = entries.remove(pos);
            entries.push(entry);
        }
    }

    /// Most recent distribution of the stack at `path_id` that reported `size`.
    pub fn stack_for_size(&self, path_id: u64, size: Size) -> Option<&StackLayout> {
        self.stacks.get(&path_id)?.iter().rev().find(|e| e.size == size)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// (hits, misses) of size lookups.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(proposal: ProposedSize, size: Size) -> StackLayout {
        StackLayout { proposal, size, child_sizes: vec![size] }
    }

    #[test]
    fn test_memo_insert_get() {
        let mut memo = MeasureMemo::new();
        let key = MemoKey::new(1, ProposedSize::new(Some(500.0), None));
        memo.insert(key, Size::new(200.0, 150.0));

        assert_eq!(memo.get(key), Some(Size::new(200.0, 150.0)));
        assert_eq!(memo.stats(), (1, 0));
    }

    #[test]
    fn test_memo_miss_on_different_proposal() {
        let mut memo = MeasureMemo::new();
        memo.insert(MemoKey::new(1, ProposedSize::new(Some(500.0), None)), Size::ZERO);

        assert_eq!(memo.get(MemoKey::new(1, ProposedSize::new(Some(400.0), None))), None);
        assert_eq!(memo.get(MemoKey::new(2, ProposedSize::new(Some(500.0), None))), None);
        assert_eq!(memo.stats(), (0, 2));
    }

    #[test]
    fn test_stack_entry_replaced_for_same_proposal() {
        let mut memo = MeasureMemo::new();
        let p = ProposedSize::new(Some(100.0), Some(10.0));
        memo.record_stack(7, stack(p, Size::new(50.0, 10.0)));
        memo.record_stack(7, stack(p, Size::new(60.0, 10.0)));

        assert!(memo.stack_for_size(7, Size::new(50.0, 10.0)).is_none());
        assert!(memo.stack_for_size(7, Size::new(60.0, 10.0)).is_some());
    }

    #[test]
    fn test_stack_lookup_by_reported_size() {
        let mut memo = MeasureMemo::new();
        memo.record_stack(7, stack(ProposedSize::new(Some(0.0), None), Size::new(0.0, 5.0)));
        memo.record_stack(7, stack(ProposedSize::new(Some(80.0), None), Size::new(80.0, 5.0)));

        let hit = memo.stack_for_size(7, Size::new(80.0, 5.0)).unwrap();
        assert_eq!(hit.proposal.width, Some(80.0));
        assert!(memo.stack_for_size(8, Size::new(80.0, 5.0)).is_none());
    }

    #[test]
    fn test_touch_promotes_matching_proposal() {
        let mut memo = MeasureMemo::new();
        let a = ProposedSize::new(Some(100.0), Some(10.0));
        let b = ProposedSize::new(Some(120.0), Some(10.0));
        let size = Size::new(90.0, 10.0);
        memo.record_stack(7, StackLayout { proposal: a, size, child_sizes: vec![Size::new(30.0, 10.0)] });
        memo.record_stack(7, StackLayout { proposal: b, size, child_sizes: vec![Size::new(60.0, 10.0)] });
        assert_eq!(memo.stack_for_size(7, size).map(|l| l.proposal), Some(b));

        memo.touch_stack(7, a);
        assert_eq!(memo.stack_for_size(7, size).map(|l| l.child_sizes[0]), Some(Size::new(30.0, 10.0)));

        // Unknown path or proposal is a no-op.
        memo.touch_stack(8, a);
        memo.touch_stack(7, ProposedSize::UNSPECIFIED);
        assert_eq!(memo.stack_for_size(7, size).map(|l| l.proposal), Some(a));
    }
}
