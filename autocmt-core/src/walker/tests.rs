//! Tests for commentable node discovery

use super::*;
use crate::test_support::FakeNode;
use std::path::Path;

#[test]
fn test_empty_tree() {
    let root = FakeNode::root("a.cpp", vec![]);
    assert!(commentable_nodes(root).is_empty());
}

#[test]
fn test_prototype_skipped() {
    let root = FakeNode::root(
        "a.cpp",
        vec![
            FakeNode::function("add", 3).prototype(),
            FakeNode::function("add", 5),
        ],
    );

    let found = commentable_nodes(root);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location().line, 5);
}

#[test]
fn test_other_kinds_skipped() {
    let root = FakeNode::root(
        "a.cpp",
        vec![FakeNode::other("Counter", 1, vec![FakeNode::other("value", 2, vec![])])],
    );
    assert!(commentable_nodes(root).is_empty());
}

#[test]
fn test_pre_order_traversal() {
    // A class definition whose methods are nested below it; the class is not
    // commentable, the methods are, and a free function follows the class
    let root = FakeNode::root(
        "a.cpp",
        vec![
            FakeNode::other(
                "Counter",
                1,
                vec![
                    FakeNode::method("Counter", "get", 2),
                    FakeNode::method("Counter", "set", 3),
                ],
            ),
            FakeNode::function("main", 6),
        ],
    );

    let names: Vec<String> = commentable_nodes(root)
        .iter()
        .map(|node| node.spelling())
        .collect();
    assert_eq!(names, vec!["get", "set", "main"]);
}

#[test]
fn test_definitions_nested_in_definitions_are_found() {
    // A local class inside a function body still has its methods visited
    let root = FakeNode::root(
        "a.cpp",
        vec![FakeNode::function("run", 1)
            .with_children(vec![FakeNode::method("Local", "step", 3)])],
    );

    let names: Vec<String> = commentable_nodes(root)
        .iter()
        .map(|node| node.spelling())
        .collect();
    assert_eq!(names, vec!["run", "step"]);
}

#[test]
fn test_file_filter_excludes_other_files() {
    let root = FakeNode::root(
        "main.cpp",
        vec![
            FakeNode::function("from_header", 10).in_file("util.h"),
            FakeNode::function("local", 4),
        ],
    );

    let found = commentable_nodes_in_file(root, Path::new("main.cpp"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].spelling(), "local");
}

#[test]
fn test_file_filter_is_exact_path_equality() {
    let root = FakeNode::root("src/main.cpp", vec![FakeNode::function("f", 1)]);

    assert!(commentable_nodes_in_file(root.clone(), Path::new("main.cpp")).is_empty());
    assert_eq!(
        commentable_nodes_in_file(root, Path::new("src/main.cpp")).len(),
        1
    );
}
