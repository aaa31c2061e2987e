//! Caller-supplied access to a tree.
//!
//! The printer never owns or mutates nodes. It only asks an adapter for a
//! node's children and its label, so any tree representation can be drawn
//! without implementing traits on foreign types.
use std::marker::PhantomData;

pub trait TreeAdapter {
    type Node;

    /// Ordered children; `None` entries are skipped by the layout.
    fn children(&self, node: &Self::Node) -> Vec<Option<Self::Node>>;

    fn label(&self, node: &Self::Node) -> String;
}

/// Adapter built from two closures.
///
/// ```
/// use boxtree::{FnAdapter, RenderOptions, Color, TreePrinter};
///
/// // implicit binary tree over 0..5
/// let adapter = FnAdapter::new(
///     |i: &usize| vec![Some(2 * i + 1), Some(2 * i + 2)]
///         .into_iter()
///         .map(|c| c.filter(|c| *c < 5))
///         .collect(),
///     |i: &usize| i.to_string(),
/// );
/// let printer = TreePrinter::new(adapter, RenderOptions::default().with_color(Color::None));
/// assert!(printer.render(&0, 0).unwrap().starts_with("  "));
/// ```
pub struct FnAdapter<N, C, L> {
    children: C,
    label: L,
    _node: PhantomData<fn(&N)>,
}

impl<N, C, L> FnAdapter<N, C, L>
where
    C: Fn(&N) -> Vec<Option<N>>,
    L: Fn(&N) -> String,
{
    pub fn new(children: C, label: L) -> Self {
        Self {
            children,
            label,
            _node: PhantomData,
        }
    }
}

impl<N, C, L> TreeAdapter for FnAdapter<N, C, L>
where
    C: Fn(&N) -> Vec<Option<N>>,
    L: Fn(&N) -> String,
{
    type Node = N;

    fn children(&self, node: &N) -> Vec<Option<N>> {
        (self.children)(node)
    }

    fn label(&self, node: &N) -> String {
        (self.label)(node)
    }
}

impl<A: TreeAdapter + ?Sized> TreeAdapter for &A {
    type Node = A::Node;

    fn children(&self, node: &Self::Node) -> Vec<Option<Self::Node>> {
        (**self).children(node)
    }

    fn label(&self, node: &Self::Node) -> String {
        (**self).label(node)
    }
}
