use compact_str::CompactString;

/// Read-only view of one weighted item in the hierarchy handed to the placer.
///
/// The placer never inspects `item`; it is cloned into the emitted boxes so the
/// caller can map placements back to its own data.
pub trait WeightedNode {
    type Item: Clone;

    /// Relative weight. Anything that is not a finite value `> 0` is invisible.
    fn size(&self) -> f64;

    fn label(&self) -> &str;

    fn item(&self) -> &Self::Item;

    /// Ordered children, empty for leaves.
    fn children(&self) -> &[Self]
    where
        Self: Sized;

    fn is_leaf(&self) -> bool
    where
        Self: Sized,
    {
        self.children().is_empty()
    }
}

/// Owned hierarchy node, the default `WeightedNode` implementation.
#[derive(Debug, Clone)]
pub struct TreeMapNode<T> {
    pub size: f64,
    pub label: CompactString,
    pub item: T,
    pub children: Vec<TreeMapNode<T>>,
}

impl<T> TreeMapNode<T> {
    pub fn new(size: f64, label: &str, item: T, children: Vec<TreeMapNode<T>>) -> Self {
        Self {
            size,
            label: CompactString::new(label),
            item,
            children,
        }
    }

    pub fn leaf(size: f64, label: &str, item: T) -> Self {
        Self::new(size, label, item, Vec::new())
    }

    /// A container whose size is the sum of its visible children.
    pub fn branch(label: &str, item: T, children: Vec<TreeMapNode<T>>) -> Self {
        let size = children
            .iter()
            .map(|c| c.size)
            .filter(|&s| is_visible(s))
            .sum();
        Self::new(size, label, item, children)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeMapNode::count).sum::<usize>()
    }
}

impl<T: Clone> WeightedNode for TreeMapNode<T> {
    type Item = T;

    fn size(&self) -> f64 {
        self.size
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn item(&self) -> &T {
        &self.item
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Whether a weight takes part in layout. NaN fails the comparison and is dropped too.
pub fn is_visible(size: f64) -> bool {
    size > 0.0 && size.is_finite()
}

/// Drop invisible nodes and order the rest by descending size.
///
/// The sort is stable, so equal sizes keep their source order. Callers should not
/// rely on that: tie order is not part of the layout contract.
pub fn visible_sorted<N: WeightedNode>(nodes: &[N]) -> Vec<&N> {
    let mut sorted: Vec<&N> = nodes.iter().filter(|n| is_visible(n.size())).collect();
    sorted.sort_by(|a, b| b.size().total_cmp(&a.size()));
    sorted
}
