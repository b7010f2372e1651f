#![forbid(unsafe_code)]

//! Random tree generation.
//!
//! Used by the command-line tool and by benchmarks and property tests that
//! need many differently shaped trees. Pass a seeded RNG for reproducible
//! output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tree::{NodeId, Tree};

/// Shape parameters for [`random_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTreeConfig {
    /// Maximum number of levels, counting the root. Zero behaves like 1.
    pub layers: usize,
    /// Upper bound (inclusive) on the children of any node.
    pub max_children: usize,
    /// Node values are drawn from `0..=max_value`.
    pub max_value: u32,
}

impl Default for RandomTreeConfig {
    fn default() -> Self {
        Self {
            layers: 4,
            max_children: 3,
            max_value: 999,
        }
    }
}

/// Build a random tree of integers.
///
/// Every node above the last layer gets between zero and `max_children`
/// children, so the tree may end early.
pub fn random_tree<R: Rng + ?Sized>(rng: &mut R, config: &RandomTreeConfig) -> Tree<u32> {
    let mut tree = Tree::new(rng.gen_range(0..=config.max_value));
    let root = tree.root();
    grow(&mut tree, root, 1, rng, config);
    treedraw_render::debug!(
        nodes = tree.len(),
        height = tree.height(root),
        "generated random tree"
    );
    tree
}

/// [`random_tree`] driven by a [`StdRng`] seeded with `seed`.
pub fn seeded_random_tree(seed: u64, config: &RandomTreeConfig) -> Tree<u32> {
    random_tree(&mut StdRng::seed_from_u64(seed), config)
}

fn grow<R: Rng + ?Sized>(
    tree: &mut Tree<u32>,
    node: NodeId,
    layer: usize,
    rng: &mut R,
    config: &RandomTreeConfig,
) {
    if layer >= config.layers {
        return;
    }
    let count = rng.gen_range(0..=config.max_children);
    for _ in 0..count {
        let child = tree.add_child(node, rng.gen_range(0..=config.max_value));
        grow(tree, child, layer + 1, rng, config);
    }
}

/// Build a complete tree where every non-leaf node has exactly `children`
/// children, each labeled with `value`.
pub fn full_tree<V: Clone>(value: V, layers: usize, children: usize) -> Tree<V> {
    let mut tree = Tree::new(value.clone());
    let mut frontier = vec![tree.root()];
    for _ in 1..layers {
        let mut next = Vec::with_capacity(frontier.len() * children);
        for node in frontier {
            for _ in 0..children {
                next.push(tree.add_child(node, value.clone()));
            }
        }
        frontier = next;
    }
    tree
}

/// Number of nodes in a [`full_tree`] with the given shape.
#[must_use]
pub fn full_tree_len(layers: usize, children: usize) -> usize {
    (0..layers).map(|level| children.pow(level as u32)).sum()
}
