#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use rayon::prelude::*;

use super::*;
use crate::test_support::{group, name, num, nums, pair, sum, TestKind};
use crate::{rewrite_list, support, update};

type Node = SyntaxNode<TestKind>;

fn int(node: &Node) -> i64 {
    support::int(node, 0)
}

/// `Group(head: 0, items: [1, 2, 3], tail: Sum(4, 5))`
fn sample() -> Node {
    SyntaxNode::new_root(group(num(0), Some(nums(&[1, 2, 3])), Some(sum(num(4), num(5)))))
}

#[test]
fn test_root_has_no_parent() {
    let root = sample();
    assert!(root.is_root());
    assert!(root.parent().is_none());
    assert!(root.root().ptr_eq(&root));
    assert_eq!(root.ancestors().count(), 0);
}

#[test]
fn test_child_materializes_once() {
    let root = sample();
    let first = root.child(0).unwrap();
    let second = root.child(0).unwrap();
    assert!(first.ptr_eq(&second));
    assert_eq!(first, second);
    assert!(first.green().ptr_eq(root.green().slot(0).unwrap()));
}

#[test]
fn test_child_of_absent_slot_is_none() {
    let root = SyntaxNode::new_root(group(num(0), None, None));
    assert!(root.child(1).is_none());
    assert!(root.child(2).is_none());
    assert!(root.list(1).is_empty());
    assert_eq!(root.child_nodes().count(), 1);
}

#[test]
fn test_separate_roots_are_not_identical() {
    let green = sum(num(1), num(2));
    let left = SyntaxNode::new_root(green.clone());
    let right = SyntaxNode::new_root(green);
    assert!(!left.ptr_eq(&right));
    assert!(left.is_equivalent_to(&right));
    assert!(!left.child(0).unwrap().ptr_eq(&right.child(0).unwrap()));
}

#[test]
fn test_parent_links() {
    let root = sample();
    let tail = root.child(2).unwrap();
    let four = tail.child(0).unwrap();
    assert!(tail.parent().unwrap().ptr_eq(&root));
    assert!(four.parent().unwrap().ptr_eq(&tail));
    assert_eq!(four.slot_index(), 0);
    assert_eq!(four.list_index(), None);

    let ancestors: Vec<TestKind> = four.ancestors().map(|node| node.kind()).collect();
    assert_eq!(ancestors, vec![TestKind::Sum, TestKind::Group]);
}

#[test]
fn test_list_elements_hang_off_owner() {
    let root = sample();
    let items = root.list(1);
    let second = items.element(1);
    assert!(second.parent().unwrap().ptr_eq(&root));
    assert_eq!(second.slot_index(), 1);
    assert_eq!(second.list_index(), Some(1));
    assert!(second.ancestors().all(|node| !node.kind().is_list()));
}

#[test]
fn test_handle_outlives_tree_handles() {
    let leaf = {
        let root = sample();
        root.child(2).unwrap().child(1).unwrap()
    };
    assert_eq!(int(&leaf), 5);
    assert_eq!(leaf.root().kind(), TestKind::Group);
    assert_eq!(leaf.ancestors().count(), 2);
}

#[test]
fn test_child_at_flattens_lists() {
    let root = sample();
    assert_eq!(root.green().slot_count(), 5);
    let kinds: Vec<TestKind> = (0..5).map(|index| root.child_at(index).kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TestKind::Num,
            TestKind::Num,
            TestKind::Num,
            TestKind::Num,
            TestKind::Sum,
        ]
    );
    assert!(root.child_at(2).ptr_eq(&root.list(1).element(1)));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_child_at_out_of_range_panics() {
    sample().child_at(5);
}

#[test]
fn test_child_nodes_match_child_at() {
    let root = sample();
    let children: Vec<Node> = root.child_nodes().collect();
    assert_eq!(children.len(), root.green().slot_count());
    for (index, child) in children.iter().enumerate() {
        assert!(child.ptr_eq(&root.child_at(index)));
    }
}

#[test]
fn test_descendant_nodes_pre_order() {
    let root = sample();
    let kinds: Vec<TestKind> = root.descendant_nodes().map(|node| node.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            TestKind::Num,
            TestKind::Num,
            TestKind::Num,
            TestKind::Num,
            TestKind::Sum,
            TestKind::Num,
            TestKind::Num,
        ]
    );
    assert_eq!(root.descendant_nodes_and_self().count(), 8);
    assert!(root.descendant_nodes_and_self().next().unwrap().ptr_eq(&root));
}

#[test]
fn test_contains() {
    let root = sample();
    let tail = root.child(2).unwrap();
    let five = tail.child(1).unwrap();
    let head = root.child(0).unwrap();
    assert!(root.contains(&five));
    assert!(tail.contains(&five));
    assert!(five.contains(&five));
    assert!(!head.contains(&five));
    assert!(!five.contains(&tail));

    let other = SyntaxNode::new_root(root.green().clone());
    assert!(!other.contains(&five));
}

#[test]
fn test_list_node_contains_its_elements() {
    let root = sample();
    let list = root.child(1).unwrap();
    assert!(list.kind().is_list());
    for element in list.descendant_nodes() {
        assert!(list.contains(&element));
        assert!(root.contains(&element));
    }
    assert!(list.contains(&list));
    assert!(!list.contains(&root));
    assert!(!list.contains(&root.child(0).unwrap()));
    assert!(!list.contains(&root.child(2).unwrap().child(0).unwrap()));

    let standalone = NodeList::<Node>::from_green(nums(&[7, 8]));
    let list_root = standalone.syntax().unwrap();
    assert!(standalone.iter().all(|element| list_root.contains(&element)));
}

#[test]
fn test_find_ancestor_or_self() {
    let root = sample();
    let five = root.child(2).unwrap().child(1).unwrap();
    let sum = five
        .find_ancestor_or_self(|node| node.kind() == TestKind::Sum)
        .unwrap();
    assert!(sum.ptr_eq(&root.child(2).unwrap()));
    let itself = five
        .first_ancestor_or_self::<Node>(|node| node.kind() == TestKind::Num)
        .unwrap();
    assert!(itself.ptr_eq(&five));
    assert!(five.find_ancestor_or_self(|node| node.kind() == TestKind::Pair).is_none());
}

#[test]
fn test_concurrent_materialization_yields_one_child() {
    let root = SyntaxNode::new_root(GreenNode::list((0..64).map(num)));
    let seen: Vec<Vec<Node>> = (0..16)
        .into_par_iter()
        .map(|_| root.child_nodes().collect())
        .collect();
    for attempt in &seen[1..] {
        for (a, b) in attempt.iter().zip(&seen[0]) {
            assert!(a.ptr_eq(b));
        }
    }
    // Later reads still see the installed wrappers.
    for (index, node) in seen[0].iter().enumerate() {
        assert!(node.ptr_eq(&root.child(index).unwrap()));
    }
}

#[test]
fn test_node_list_accessors() {
    let root = sample();
    let items = root.list(1);
    assert_eq!(items.len(), 3);
    assert_eq!(int(&items.first().unwrap()), 1);
    assert_eq!(int(&items.last().unwrap()), 3);
    assert!(items.get(3).is_none());
    assert!(items.get(1).unwrap().ptr_eq(&items.element(1)));

    let forward: Vec<i64> = items.iter().map(|node| int(&node)).collect();
    let backward: Vec<i64> = items.iter().rev().map(|node| int(&node)).collect();
    assert_eq!(forward, vec![1, 2, 3]);
    assert_eq!(backward, vec![3, 2, 1]);
    assert_eq!(items.iter().len(), 3);

    let mut iter = items.iter();
    iter.next();
    iter.next_back();
    assert_eq!(iter.len(), 1);
    assert_eq!(int(&iter.next().unwrap()), 2);
    assert!(iter.next().is_none());
    assert!(iter.next_back().is_none());
}

#[test]
fn test_node_list_identity() {
    let root = sample();
    assert_eq!(root.list(1), root.list(1));
    assert_ne!(root.list(1), SyntaxNode::new_root(root.green().clone()).list(1));
    assert_eq!(NodeList::<Node>::empty(), NodeList::default());
    assert!(NodeList::<Node>::empty().first().is_none());
}

#[test]
#[should_panic(expected = "list index 3 out of range")]
fn test_node_list_out_of_range_panics() {
    sample().list(1).element(3);
}

#[test]
fn test_list_as_root() {
    let list: NodeList<Node> = NodeList::from_green(nums(&[7, 8]));
    let eight = list.element(1);
    assert_eq!(int(&eight), 8);
    assert!(eight.parent().unwrap().ptr_eq(list.syntax().unwrap()));
}

#[test]
fn test_update_unchanged_returns_self() {
    let root = SyntaxNode::new_root(pair(name("x"), Some(num(1))));
    let same = update(
        &root,
        vec![root.child(0), root.child(1)],
        root.payload().to_vec(),
    );
    assert!(same.ptr_eq(&root));
}

#[test]
fn test_update_empty_list_matches_absent_slot() {
    let root = SyntaxNode::new_root(group(num(0), None, None));
    let empty = SyntaxNode::new_root(nums(&[]));
    let same = update(&root, vec![root.child(0), Some(empty), None], Vec::new());
    assert!(same.ptr_eq(&root));

    // Emptying a populated list yields the same tree as leaving it out.
    let full = sample();
    let emptied = rewrite_list(&full.list(1), |_| None);
    let rebuilt = update(
        &full,
        vec![full.child(0), emptied.syntax().cloned(), full.child(2)],
        Vec::new(),
    );
    assert!(rebuilt.green().slot(1).is_none());
    assert!(rebuilt.is_equivalent_to(&SyntaxNode::new_root(group(
        num(0),
        None,
        Some(sum(num(4), num(5)))
    ))));
}

#[test]
fn test_update_builds_new_root() {
    let root = SyntaxNode::new_root(pair(name("x"), Some(num(1))));
    let replacement = SyntaxNode::new_root(num(2));
    let updated = update(&root, vec![root.child(0), Some(replacement)], Vec::new());

    assert!(!updated.ptr_eq(&root));
    assert!(updated.is_root());
    assert!(updated
        .green()
        .slot(0)
        .unwrap()
        .ptr_eq(root.green().slot(0).unwrap()));
    assert_eq!(int(&updated.child(1).unwrap()), 2);

    let cleared = update(&root, vec![root.child(0), None], Vec::new());
    assert!(cleared.child(1).is_none());
}

#[test]
fn test_replace_with_rebuilds_spine() {
    let root = sample();
    let four = root.child(2).unwrap().child(0).unwrap();
    let edited = four.replace_with(num(40));

    assert!(edited.is_root());
    let new_tail = edited.child(2).unwrap();
    assert_eq!(int(&new_tail.child(0).unwrap()), 40);
    // Off-path subtrees are shared.
    assert!(edited.green().slot(0).unwrap().ptr_eq(root.green().slot(0).unwrap()));
    assert!(edited.green().slot(1).unwrap().ptr_eq(root.green().slot(1).unwrap()));
    assert!(new_tail
        .green()
        .slot(1)
        .unwrap()
        .ptr_eq(root.child(2).unwrap().green().slot(1).unwrap()));
    // The old tree is untouched.
    assert_eq!(int(&four), 4);
}

#[test]
fn test_replace_with_inside_list() {
    let root = sample();
    let edited = root.list(1).element(1).replace_with(num(20));
    let items: Vec<i64> = edited.list(1).iter().map(|node| int(&node)).collect();
    assert_eq!(items, vec![1, 20, 3]);

    let old_items = root.green().slot(1).unwrap();
    let new_items = edited.green().slot(1).unwrap();
    assert!(new_items.slot(0).unwrap().ptr_eq(old_items.slot(0).unwrap()));
    assert!(new_items.slot(2).unwrap().ptr_eq(old_items.slot(2).unwrap()));
}

#[test]
fn test_rewrite_list_unchanged_returns_same_list() {
    let root = sample();
    let items = root.list(1);
    let rewritten = rewrite_list(&items, |node| Some(node.clone()));
    assert_eq!(rewritten, items);
}

#[test]
fn test_rewrite_list_shares_prefix() {
    let root = sample();
    let items = root.list(1);
    let rewritten = rewrite_list(&items, |node| {
        if int(node) == 2 {
            Some(SyntaxNode::new_root(num(200)))
        } else {
            Some(node.clone())
        }
    });

    assert_ne!(rewritten, items);
    let values: Vec<i64> = rewritten.iter().map(|node| int(&node)).collect();
    assert_eq!(values, vec![1, 200, 3]);
    let old = items.green().unwrap();
    let new = rewritten.green().unwrap();
    assert!(new.slot(0).unwrap().ptr_eq(old.slot(0).unwrap()));
    assert!(new.slot(2).unwrap().ptr_eq(old.slot(2).unwrap()));
}

#[test]
fn test_rewrite_list_drops_none() {
    let root = sample();
    let rewritten = rewrite_list(&root.list(1), |node| {
        (int(node) % 2 == 1).then(|| node.clone())
    });
    let values: Vec<i64> = rewritten.iter().map(|node| int(&node)).collect();
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn test_rewrite_empty_list() {
    let empty = NodeList::<Node>::empty();
    let rewritten = rewrite_list(&empty, |_| unreachable!());
    assert_eq!(rewritten, empty);
}

#[test]
fn test_deep_descendants() {
    let mut green = num(0);
    for value in 1..20_000 {
        green = pair(num(value), Some(green));
    }
    let root = SyntaxNode::new_root(green);
    assert_eq!(root.descendant_nodes().count(), 2 * 20_000 - 2);
    let deepest = root.descendant_nodes().last().unwrap();
    assert_eq!(int(&deepest), 0);
    assert_eq!(deepest.ancestors().count(), 19_999);
}
