//! Layout context threaded through both passes of one layout call.
//!
//! The LayoutContext carries:
//! - The configuration and text measurer for the call
//! - Path tracking, giving every node a stable ID that is identical in the size
//!   pass and the render pass
//! - The per-call measurement memo
//!
//! Parents reach their children only through [`LayoutContext::measure`],
//! [`LayoutContext::arrange`] and [`LayoutContext::alignment_of`], which enter the
//! child's path scope and leave it again on every exit path.

use crate::alignment::AlignmentId;
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::primitives::{ProposedSize, Size};

use super::cache::{MeasureMemo, MemoKey, StackLayout};
use super::text::TextMeasurer;
use super::view::View;

/// FNV-1a prime for path hashing.
const FNV_PRIME: u64 = 0x100000001b3;
/// FNV-1a offset basis.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;

pub struct LayoutContext<'a> {
    config: &'a LayoutConfig,
    measurer: &'a dyn TextMeasurer,
    memo: MeasureMemo,

    /// Path-based ID of the node currently being visited.
    path_id: u64,

    /// Enclosing (path_id, name) pairs, restored by exit().
    path_stack: Vec<(u64, &'static str)>,

    current_name: &'static str,
}

impl<'a> LayoutContext<'a> {
    pub fn new(config: &'a LayoutConfig, measurer: &'a dyn TextMeasurer) -> Self {
        Self {
            config,
            measurer,
            memo: MeasureMemo::new(),
            path_id: FNV_OFFSET,
            path_stack: Vec::with_capacity(16),
            current_name: "root",
        }
    }

    #[inline]
    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    #[inline]
    pub fn measurer(&self) -> &'a dyn TextMeasurer {
        self.measurer
    }

    /// Path-based ID of the current node.
    #[inline]
    pub fn path_id(&self) -> u64 {
        self.path_id
    }

    /// Nesting depth of the current node below the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path_stack.len()
    }

    /// Name the current node was entered under.
    #[inline]
    pub fn node_name(&self) -> &'static str {
        self.current_name
    }

    pub fn memo(&self) -> &MeasureMemo {
        &self.memo
    }

    /// Enter a child scope. Siblings are told apart by `index`.
    pub fn enter_indexed(&mut self, name: &'static str, index: usize) {
        self.path_stack.push((self.path_id, self.current_name));
        self.path_id = self
            .path_id
            .wrapping_mul(FNV_PRIME)
            .wrapping_add(hash_str(name))
            .wrapping_mul(FNV_PRIME)
            .wrapping_add(index as u64);
        self.current_name = name;
    }

    /// Exit the current scope, restoring the parent's path_id and name.
    pub fn exit(&mut self) {
        let (path_id, name) = self.path_stack.pop().unwrap_or((FNV_OFFSET, "root"));
        self.path_id = path_id;
        self.current_name = name;
    }

    /// Run `f` inside the scope of child `index`.
    #[inline]
    pub fn with_child<R>(&mut self, name: &'static str, index: usize, f: impl FnOnce(&mut Self) -> R) -> R {
        self.enter_indexed(name, index);
        let result = f(self);
        self.exit();
        result
    }

    /// Ask child `index` for its size under `proposed`.
    pub fn measure<V: View + ?Sized>(
        &mut self,
        name: &'static str,
        index: usize,
        child: &V,
        proposed: ProposedSize,
    ) -> Result<Size> {
        self.with_child(name, index, |cx| cx.measure_current(child, proposed))
    }

    /// Render child `index` at a size it previously reported.
    pub fn arrange<V: View + ?Sized>(
        &mut self,
        name: &'static str,
        index: usize,
        child: &V,
        canvas: &mut dyn Canvas,
        size: Size,
    ) -> Result<()> {
        self.with_child(name, index, |cx| child.render(cx, canvas, size))
    }

    /// Ask child `index` for a custom value of `id` at `size`.
    pub fn alignment_of<V: View + ?Sized>(
        &mut self,
        name: &'static str,
        index: usize,
        child: &V,
        id: AlignmentId,
        size: Size,
    ) -> Result<Option<f32>> {
        self.with_child(name, index, |cx| child.custom_alignment(id, size, cx))
    }

    /// Measure `view` as the node at the current path.
    pub(crate) fn measure_current<V: View + ?Sized>(&mut self, view: &V, proposed: ProposedSize) -> Result<Size> {
        if !self.config.memoize {
            return view.size(proposed, self);
        }

        let key = MemoKey::new(self.path_id, proposed);
        if let Some(size) = self.memo.get(key) {
            tracing::trace!(node = self.current_name, ?proposed, ?size, "memo hit");
            // A stack answering from the memo must render the split of this proposal.
            self.memo.touch_stack(self.path_id, proposed);
            return Ok(size);
        }

        let size = view.size(proposed, self)?;
        self.memo.insert(key, size);
        Ok(size)
    }

    pub(crate) fn record_stack(&mut self, layout: StackLayout) {
        self.memo.record_stack(self.path_id, layout);
    }

    pub(crate) fn stack_for_size(&self, size: Size) -> Option<&StackLayout> {
        self.memo.stack_for_size(self.path_id, size)
    }
}

/// Simple string hash for path IDs.
#[inline]
fn hash_str(s: &str) -> u64 {
    let mut hash: u64 = FNV_OFFSET;
    for byte in s.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
