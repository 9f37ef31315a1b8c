/// BoundingVolumeHierarchy: incremental binary AABB tree for culling.
///
/// Nodes live in a flat `Vec` and refer to each other by `u32` index.
/// The root is always index 0. The tree only grows: each insertion after
/// the first appends two leaves and rewrites one existing leaf in place as
/// the branch above them, so after N insertions there are `2N - 1` nodes
/// and indices never move.
///
/// Placement is greedy. While descending, every branch on the path is
/// grown to enclose the new box *before* the final position is known, and
/// the child whose center is closer (L1 distance) to the new box is chosen,
/// with ties going right. There is no rebalancing: a degenerate insertion
/// order gives a degenerate tree.

use crate::camera::{Frustum, FrustumTest};
use crate::geometry::AABB;
use crate::galaxy3d::Engine;
use crate::galaxy3d::log::LogSeverity;

/// Index of the root node in the flat node array.
pub const ROOT: u32 = 0;

/// A node of the hierarchy.
///
/// Accessors that only make sense for one kind (`left`, `right`,
/// `element_id`) and `parent` on the root panic when misused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BvhNode {
    Branch {
        left: u32,
        right: u32,
        /// Encloses both children
        aabb: AABB,
        parent: Option<u32>,
    },
    Leaf {
        element_id: u32,
        aabb: AABB,
        parent: Option<u32>,
    },
}

impl BvhNode {
    /// Leaf with no parent yet
    pub fn leaf(aabb: AABB, element_id: u32) -> Self {
        BvhNode::Leaf { element_id, aabb, parent: None }
    }

    /// Branch over two existing nodes; its box encloses both of theirs.
    pub fn branch(nodes: &[BvhNode], left: u32, right: u32, parent: Option<u32>) -> Self {
        let aabb = nodes[left as usize].aabb().encapsulate(nodes[right as usize].aabb());
        BvhNode::Branch { left, right, aabb, parent }
    }

    pub fn is_root(&self) -> bool {
        self.parent_index().is_none()
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, BvhNode::Branch { .. })
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_branch()
    }

    pub fn aabb(&self) -> &AABB {
        match self {
            BvhNode::Branch { aabb, .. } | BvhNode::Leaf { aabb, .. } => aabb,
        }
    }

    fn aabb_mut(&mut self) -> &mut AABB {
        match self {
            BvhNode::Branch { aabb, .. } | BvhNode::Leaf { aabb, .. } => aabb,
        }
    }

    /// Element id of a leaf. Panics on a branch.
    pub fn element_id(&self) -> u32 {
        match self {
            BvhNode::Leaf { element_id, .. } => *element_id,
            BvhNode::Branch { .. } => panic!("element_id() called on a branch node"),
        }
    }

    /// Left child of a branch. Panics on a leaf.
    pub fn left(&self) -> u32 {
        match self {
            BvhNode::Branch { left, .. } => *left,
            BvhNode::Leaf { .. } => panic!("left() called on a leaf node"),
        }
    }

    /// Right child of a branch. Panics on a leaf.
    pub fn right(&self) -> u32 {
        match self {
            BvhNode::Branch { right, .. } => *right,
            BvhNode::Leaf { .. } => panic!("right() called on a leaf node"),
        }
    }

    /// Parent index. Panics on the root.
    pub fn parent(&self) -> u32 {
        self.parent_index().expect("parent() called on the root node")
    }

    /// Parent index, `None` for the root
    pub fn parent_index(&self) -> Option<u32> {
        match self {
            BvhNode::Branch { parent, .. } | BvhNode::Leaf { parent, .. } => *parent,
        }
    }
}

/// Array-backed BVH over element AABBs.
#[derive(Debug, Clone, Default)]
pub struct BoundingVolumeHierarchy {
    nodes: Vec<BvhNode>,
}

/// Short-hand alias
pub type Bvh = BoundingVolumeHierarchy;

impl BoundingVolumeHierarchy {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Empty tree with room for `elements` insertions without reallocating
    pub fn with_capacity(elements: usize) -> Self {
        Self { nodes: Vec::with_capacity((2 * elements).saturating_sub(1)) }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of inserted elements
    pub fn leaf_count(&self) -> usize {
        self.nodes.len().div_ceil(2)
    }

    /// Node at `index`. Panics when out of range.
    pub fn node_at(&self, index: u32) -> &BvhNode {
        assert!(
            (index as usize) < self.nodes.len(),
            "node index {} out of range (node_count = {})",
            index,
            self.nodes.len()
        );
        &self.nodes[index as usize]
    }

    /// All nodes in index order
    pub fn nodes(&self) -> &[BvhNode] {
        &self.nodes
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1usize)];
        while let Some((index, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            if let BvhNode::Branch { left, right, .. } = self.nodes[index as usize] {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
        }
        deepest
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Placement cost of `aabb` under `node`: L1 distance between centers.
    pub fn cost(node: &BvhNode, aabb: &AABB) -> f32 {
        node.aabb().center_distance_l1(aabb)
    }

    /// Add an element.
    ///
    /// Never fails. Negative extent components are clamped to zero (and a
    /// warning is logged) so every stored box has non-negative extents.
    pub fn insert(&mut self, aabb: AABB, element_id: u32) {
        let aabb = if aabb.has_valid_extents() {
            aabb
        } else {
            crate::engine_warn!("galaxy3d::Bvh",
                "element {} has invalid extents {:?}, clamping to zero",
                element_id, aabb.extents);
            aabb.clamped()
        };

        if self.nodes.is_empty() {
            self.nodes.push(BvhNode::leaf(aabb, element_id));
            return;
        }

        assert!(
            self.nodes.len() + 2 <= u32::MAX as usize,
            "BVH node count would overflow u32 indices"
        );

        let mut index = ROOT;
        let mut depth = 1;
        loop {
            let node = self.nodes[index as usize];
            match node {
                BvhNode::Branch { left, right, aabb: bounds, .. } => {
                    *self.nodes[index as usize].aabb_mut() = bounds.encapsulate(&aabb);

                    let left_cost = Self::cost(&self.nodes[left as usize], &aabb);
                    let right_cost = Self::cost(&self.nodes[right as usize], &aabb);
                    index = if left_cost < right_cost { left } else { right };
                    depth += 1;
                }
                BvhNode::Leaf { element_id: existing_id, aabb: existing_aabb, parent } => {
                    let left = self.nodes.len() as u32;
                    let right = left + 1;
                    self.nodes.push(BvhNode::Leaf {
                        element_id: existing_id,
                        aabb: existing_aabb,
                        parent: Some(index),
                    });
                    self.nodes.push(BvhNode::Leaf {
                        element_id,
                        aabb,
                        parent: Some(index),
                    });
                    self.nodes[index as usize] = BvhNode::branch(&self.nodes, left, right, parent);

                    if Engine::is_enabled(LogSeverity::Trace) {
                        crate::engine_trace!("galaxy3d::Bvh",
                            "inserted element {} as node {} (split node {}, depth {})",
                            element_id, right, index, depth + 1);
                    }
                    return;
                }
            }
        }
    }

    /// Element ids of every leaf reachable from `start` through nodes whose
    /// box strictly overlaps `target`. Pre-order, left before right.
    ///
    /// Panics if the tree is empty or `start` is out of range.
    pub fn traverse(&self, start: u32, target: &AABB) -> Vec<u32> {
        self.traverse_with(start, target, |_, _| {})
    }

    /// Same as `traverse`, calling `visitor(index, node)` for every visited
    /// node that overlaps `target` (e.g. to draw the boxes being hit).
    pub fn traverse_with<F>(&self, start: u32, target: &AABB, mut visitor: F) -> Vec<u32>
    where
        F: FnMut(u32, &BvhNode),
    {
        assert!(!self.nodes.is_empty(), "traverse() called on an empty BVH");
        assert!(
            (start as usize) < self.nodes.len(),
            "traverse start {} out of range (node_count = {})",
            start,
            self.nodes.len()
        );

        let mut results = Vec::new();
        self.traverse_recursive(start, target, &mut results, &mut visitor);
        results
    }

    fn traverse_recursive<F>(&self, index: u32, target: &AABB, results: &mut Vec<u32>, visitor: &mut F)
    where
        F: FnMut(u32, &BvhNode),
    {
        let node = &self.nodes[index as usize];
        if !node.aabb().intersects(target) {
            return;
        }
        visitor(index, node);

        match *node {
            BvhNode::Leaf { element_id, .. } => results.push(element_id),
            BvhNode::Branch { left, right, .. } => {
                self.traverse_recursive(left, target, results, visitor);
                self.traverse_recursive(right, target, results, visitor);
            }
        }
    }

    /// Append the ids of every element whose box is (potentially) inside
    /// the frustum. An empty tree yields nothing.
    ///
    /// Subtrees fully inside the frustum are collected without further
    /// plane tests.
    pub fn query_frustum(&self, frustum: &Frustum, results: &mut Vec<u32>) {
        if self.nodes.is_empty() {
            return;
        }
        self.query_frustum_recursive(ROOT, frustum, results);
    }

    fn query_frustum_recursive(&self, index: u32, frustum: &Frustum, results: &mut Vec<u32>) {
        let node = &self.nodes[index as usize];
        match frustum.classify_aabb(node.aabb()) {
            FrustumTest::Outside => {}
            FrustumTest::Inside => self.collect_all(index, results),
            FrustumTest::Partial => match *node {
                BvhNode::Leaf { element_id, .. } => results.push(element_id),
                BvhNode::Branch { left, right, .. } => {
                    self.query_frustum_recursive(left, frustum, results);
                    self.query_frustum_recursive(right, frustum, results);
                }
            },
        }
    }

    /// Collect every element below `index` (no tests).
    fn collect_all(&self, index: u32, results: &mut Vec<u32>) {
        match self.nodes[index as usize] {
            BvhNode::Leaf { element_id, .. } => results.push(element_id),
            BvhNode::Branch { left, right, .. } => {
                self.collect_all(left, results);
                self.collect_all(right, results);
            }
        }
    }
}

impl Extend<(AABB, u32)> for BoundingVolumeHierarchy {
    fn extend<I: IntoIterator<Item = (AABB, u32)>>(&mut self, iter: I) {
        for (aabb, element_id) in iter {
            self.insert(aabb, element_id);
        }
    }
}

impl FromIterator<(AABB, u32)> for BoundingVolumeHierarchy {
    fn from_iter<I: IntoIterator<Item = (AABB, u32)>>(iter: I) -> Self {
        let mut bvh = Self::new();
        bvh.extend(iter);
        bvh
    }
}

#[cfg(test)]
#[path = "bvh_tests.rs"]
mod tests;
