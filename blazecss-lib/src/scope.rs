//! Scope operations and the algebra that folds a stack of them into one selector.

use crate::selector::{Refinement, Selector};
use serde::{Deserialize, Serialize};

/// How a nested block's selector combines with its enclosing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeOp {
    /// The block's selector is a direct child of the enclosing one.
    ChildOf(Selector),
    /// The block's selector is a descendant of the enclosing one.
    DescendantOf(Selector),
    /// The selector becomes the outermost ancestor of whatever the
    /// enclosing context resolves to.
    RootedAt(Selector),
    /// Discards this entry and the `n - 1` entries enclosing it.
    PopLevels(usize),
    /// Attaches predicates to the enclosing selector (or `*` at top level).
    RefineSelf(Refinement),
}

/// A stack of scope operations, innermost first.
///
/// Stored outermost-first internally so that entering a nested block is a
/// plain `push`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeStack {
    ops: Vec<ScopeOp>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { ops: Vec::new() }
    }

    /// Builds a stack from operations listed innermost first.
    pub fn from_innermost(ops: impl IntoIterator<Item = ScopeOp>) -> Self {
        let mut ops: Vec<ScopeOp> = ops.into_iter().collect();
        ops.reverse();
        ScopeStack { ops }
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns a new stack with `op` as the innermost entry.
    pub fn entered(&self, op: ScopeOp) -> ScopeStack {
        let mut ops = Vec::with_capacity(self.ops.len() + 1);
        ops.extend(self.ops.iter().cloned());
        ops.push(op);
        ScopeStack { ops }
    }

    /// Operations innermost first.
    pub fn iter(&self) -> impl Iterator<Item = &ScopeOp> {
        self.ops.iter().rev()
    }

    /// Resolves the stack into a single selector.
    ///
    /// # Panics
    ///
    /// Panics when nothing is left to resolve, either because the stack is
    /// empty or because a `PopLevels` runs past the end of the stack.
    pub fn merge(&self) -> Selector {
        match self.try_merge() {
            Some(selector) => selector,
            None => panic!("cannot resolve a selector from an empty scope stack: {:?}", self),
        }
    }

    /// Like [`ScopeStack::merge`] but returns `None` instead of panicking.
    pub fn try_merge(&self) -> Option<Selector> {
        // Walk innermost to outermost. Every non-pop entry with anything after
        // it needs its tail to resolve, so a pop that runs off the end of the
        // stack leaves the whole stack unresolvable.
        let ops: Vec<&ScopeOp> = self.iter().collect();
        let mut chain: Vec<&ScopeOp> = Vec::with_capacity(ops.len());
        let mut i = 0;
        while i < ops.len() {
            match ops[i] {
                ScopeOp::PopLevels(n) => {
                    i = i.saturating_add((*n).max(1));
                    if i >= ops.len() {
                        return None;
                    }
                }
                op => {
                    chain.push(op);
                    i += 1;
                }
            }
        }

        // Fold outermost first. The last entry of `chain` had an empty tail.
        let mut acc: Option<Selector> = None;
        for op in chain.into_iter().rev() {
            acc = Some(match (op, acc) {
                (ScopeOp::ChildOf(s), None)
                | (ScopeOp::DescendantOf(s), None)
                | (ScopeOp::RootedAt(s), None) => s.clone(),
                (ScopeOp::ChildOf(s), Some(outer)) => Selector::child(outer, s.clone()),
                (ScopeOp::DescendantOf(s), Some(outer)) => Selector::descendant(outer, s.clone()),
                (ScopeOp::RootedAt(s), Some(outer)) => Selector::descendant(s.clone(), outer),
                (ScopeOp::RefineSelf(r), None) => Selector::universal().refined(r),
                (ScopeOp::RefineSelf(r), Some(outer)) => outer.refined(r),
                (ScopeOp::PopLevels(_), _) => unreachable!("pops never enter the chain"),
            });
        }
        acc
    }
}
