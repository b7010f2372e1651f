#![forbid(unsafe_code)]

//! Property-based tests for tree layout.
//!
//! 1. Every diagram is rectangular: all rows have the canvas width.
//! 2. Rendering the same tree twice gives identical output.
//! 3. A node with one child has odd width and a straight vertical link.
//! 4. A node with several children gets a connector row with turn glyphs at
//!    its ends, one junction per child and one under the parent.
//! 5. Child subtrees appear unchanged (apart from their link glyph) at
//!    offsets that center the narrower of value and children.

use proptest::prelude::*;
use treedraw::tree::{NodeId, Tree};
use treedraw::{Canvas, layout};
use treedraw_render::canvas::BLANK;

// ── Helpers ─────────────────────────────────────────────────────────────

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z0-9]{1,9}",
        1 => ("[a-z]{1,5}", "[a-z]{0,7}").prop_map(|(a, b)| format!("{a}\n{b}")),
    ]
}

/// A tree of up to `max_nodes` nodes; node `i` hangs off a parent chosen
/// among nodes `0..i`.
fn tree_strategy(max_nodes: usize) -> impl Strategy<Value = Tree<String>> {
    proptest::collection::vec((any::<prop::sample::Index>(), label_strategy()), 0..max_nodes)
        .prop_flat_map(|nodes| {
            label_strategy().prop_map(move |root| {
                let mut tree = Tree::new(root);
                for (i, (parent, label)) in nodes.iter().enumerate() {
                    let parent = tree.ids().nth(parent.index(i + 1)).unwrap();
                    tree.add_child(parent, label.clone());
                }
                tree
            })
        })
}

/// A root with exactly `n` child subtrees.
fn fan_strategy(min: usize, max: usize) -> impl Strategy<Value = Tree<String>> {
    (label_strategy(), proptest::collection::vec(tree_strategy(5), min..=max)).prop_map(
        |(root, subtrees)| {
            let mut tree = Tree::new(root);
            let root = tree.root();
            for sub in subtrees {
                graft(&mut tree, root, &sub, sub.root());
            }
            tree
        },
    )
}

fn graft(tree: &mut Tree<String>, parent: NodeId, from: &Tree<String>, node: NodeId) {
    let id = tree.add_child(parent, from.value(node).clone());
    for &child in from.children(node) {
        graft(tree, id, from, child);
    }
}

fn value_size(tree: &Tree<String>, id: NodeId) -> (i32, i32) {
    let (w, h) = Canvas::from_text(tree.value(id)).dimensions();
    (w as i32, h as i32)
}

/// Row `y` as rendered: blank cells read as spaces.
fn row(canvas: &Canvas, y: i32) -> Vec<char> {
    (0..canvas.width() as i32)
        .map(|x| match canvas.get(x, y).unwrap() {
            BLANK => ' ',
            c => c,
        })
        .collect()
}

/// Check that `child` sits in `canvas` at (`x`, `y`), ignoring the cell at
/// `skip` where the parent's link glyph overwrites it.
fn assert_placed(canvas: &Canvas, child: &Canvas, x: i32, y: i32, skip: (i32, i32)) -> Result<(), TestCaseError> {
    for cy in 0..child.height() as i32 {
        for cx in 0..child.width() as i32 {
            if (x + cx, y + cy) == skip {
                continue;
            }
            prop_assert_eq!(canvas.get(x + cx, y + cy), child.get(cx, cy), "cell ({}, {})", cx, cy);
        }
    }
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Shape and repeatability
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn diagram_is_rectangular(tree in tree_strategy(24)) {
        let canvas = layout(&tree, tree.root());
        let text = canvas.render();
        let rows: Vec<&str> = text.split('\n').collect();
        prop_assert_eq!(rows.len(), canvas.height());
        for r in rows {
            prop_assert_eq!(r.chars().count(), canvas.width());
        }
    }

    #[test]
    fn rendering_is_repeatable(tree in tree_strategy(24)) {
        prop_assert_eq!(tree.to_string(), tree.to_string());
        prop_assert_eq!(tree.clone().to_string(), tree.to_string());
    }

    #[test]
    fn every_subtree_lays_out(tree in tree_strategy(24)) {
        for id in tree.ids() {
            let canvas = layout(&tree, id);
            let (val_w, val_h) = value_size(&tree, id);
            prop_assert!(canvas.width() as i32 >= val_w + 2);
            prop_assert!(canvas.height() as i32 >= val_h + 2);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. One child
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn single_child_link_is_straight(tree in fan_strategy(1, 1)) {
        let root = tree.root();
        let canvas = layout(&tree, root);
        let (val_w, val_h) = value_size(&tree, root);
        let w = canvas.width() as i32;
        prop_assert_eq!(w % 2, 1);

        let center = w / 2;
        prop_assert_eq!(canvas.get(center, val_h + 1), Some('┬'));
        prop_assert_eq!(canvas.get(center, val_h + 2), Some('│'));
        prop_assert_eq!(canvas.get(center, val_h + 3), Some('┴'));
        // The link is the only thing on the pipe row.
        let pipe: String = row(&canvas, val_h + 2).into_iter().collect();
        prop_assert_eq!(pipe.trim(), "│");

        let value_x = (w - val_w) / 2;
        prop_assert_eq!(canvas.get(value_x - 1, 0), Some('╭'));
        prop_assert_eq!(canvas.get(value_x + val_w, val_h + 1), Some('╯'));

        let child_id = tree.child(root, 0).unwrap();
        let child = layout(&tree, child_id);
        let child_x = (w - child.width() as i32) / 2;
        assert_placed(&canvas, &child, child_x, val_h + 3, (center, val_h + 3))?;
    }
}

#[test]
fn indented_pipe_row_holds_only_the_link() {
    let mut tree = Tree::new("7".to_string());
    tree.add_child(tree.root(), "hello".to_string());
    let canvas = layout(&tree, tree.root());
    let pipe: String = row(&canvas, 3).into_iter().collect();
    assert_eq!(pipe, "   │   ");
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Several children
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn connector_row_links_every_child(tree in fan_strategy(2, 5)) {
        let root = tree.root();
        let canvas = layout(&tree, root);
        let (_, val_h) = value_size(&tree, root);
        let n = tree.children(root).len();
        let center = canvas.width() as i32 / 2;

        let links = row(&canvas, val_h + 2);
        let used: Vec<(usize, char)> = links.iter().copied().enumerate().filter(|&(_, c)| c != ' ').collect();
        prop_assert_eq!(used.first().map(|p| p.1), Some('╭'));
        prop_assert_eq!(used.last().map(|p| p.1), Some('╮'));
        // The run between the turns is unbroken.
        prop_assert_eq!(used.len(), used.last().unwrap().0 - used.first().unwrap().0 + 1);

        let count = |c: char| links.iter().filter(|&&x| x == c).count();
        prop_assert_eq!(count('┬') + count('┼'), n - 2);
        prop_assert_eq!(count('┴') + count('┼'), 1);
        let under_parent = links[center as usize];
        prop_assert!(under_parent == '┴' || under_parent == '┼', "got {:?}", under_parent);
        prop_assert_eq!(canvas.get(center, val_h + 1), Some('┬'));

        // One ┴ per child on the row under the connector, at the same columns
        // as the turns and junctions above it.
        let below = row(&canvas, val_h + 3);
        for (x, c) in used {
            let is_child = c == '╭' || c == '╮' || c == '┬' || c == '┼';
            prop_assert_eq!(below[x] == '┴', is_child, "column {}", x);
        }
    }

    #[test]
    fn narrower_side_is_centered(tree in fan_strategy(2, 4)) {
        let root = tree.root();
        let canvas = layout(&tree, root);
        let (val_w, val_h) = value_size(&tree, root);
        let w = canvas.width() as i32;

        let children: Vec<Canvas> = tree.children(root).iter().map(|&c| layout(&tree, c)).collect();
        let mut lefts = Vec::new();
        let mut strip = 0;
        for (i, child) in children.iter().enumerate() {
            let cw = child.width() as i32;
            let last = i + 1 == children.len();
            let left = if last && (strip + cw) % 2 == 0 { strip + 1 } else { strip };
            lefts.push(left);
            strip = left + cw + i32::from(!last);
        }
        prop_assert_eq!(strip % 2, 1);

        if val_w + 2 > strip {
            prop_assert_eq!(w, val_w + 2);
        } else {
            prop_assert_eq!(w, strip);
        }
        let shift = (w - strip) / 2;
        let value_x = (w - val_w) / 2;
        prop_assert_eq!(canvas.get(value_x - 1, 0), Some('╭'));
        prop_assert_eq!(canvas.get(value_x + val_w, 0), Some('╮'));

        for (child, left) in children.iter().zip(lefts) {
            let x = left + shift;
            let link = (x + child.width() as i32 / 2, val_h + 3);
            assert_placed(&canvas, child, x, val_h + 3, link)?;
        }
    }
}

#[test]
fn shifted_connector_row_starts_at_first_child() {
    let mut tree = Tree::new("abcdefghij".to_string());
    tree.add_child(tree.root(), "a".to_string());
    tree.add_child(tree.root(), "b".to_string());
    let canvas = layout(&tree, tree.root());
    let links: String = row(&canvas, 3).into_iter().collect();
    assert_eq!(links, "   ╭──┴╮    ");
}
