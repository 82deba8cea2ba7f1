//! Self-adjusting binary search tree over dictionary words.
//!
//! Every node holds one distinct word together with the number of times it
//! was inserted. Accesses (insert, delete and even [`SplayTree::get`]) splay
//! the touched key, or the last node on its search path, to the root, which
//! gives amortized `O(log n)` cost per operation. A single operation can
//! still walk `O(n)` nodes.
//!
//! Each node exclusively owns its children. Rotations move boxed subtrees
//! between nodes; nothing is shared and there are no parent pointers.
//!
//! ```
//! use splaydict::spelling::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! for word in ["paris", "pari", "parish", "london"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(tree.get("paris"), 1);
//! assert_eq!(tree.similar_words("paris", 1), vec!["pari", "paris", "parish"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::spelling::levenshtein::LevenshteinMatcher;

type Link = Option<Box<SplayNode>>;

struct SplayNode {
    key: String,
    count: u32,
    left: Link,
    right: Link,
}

impl SplayNode {
    fn new(key: String) -> Box<Self> {
        Box::new(SplayNode {
            key,
            count: 1,
            left: None,
            right: None,
        })
    }
}

/// A key that lies within the requested edit distance of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarEntry<'a> {
    pub key: &'a str,
    pub count: u32,
    pub distance: usize,
}

/// Splay tree mapping words to occurrence counts.
#[derive(Default)]
pub struct SplayTree {
    root: Link,
    len: usize,
}

impl SplayTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        SplayTree { root: None, len: 0 }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Key currently at the root, i.e. the most recently splayed one.
    pub fn root_key(&self) -> Option<&str> {
        self.root.as_ref().map(|node| node.key.as_str())
    }

    /// Insert one occurrence of `key` and return its updated count.
    ///
    /// A key that is already present has its count incremented; no second
    /// node is created. Either way the key ends up at the root.
    pub fn insert(&mut self, key: &str) -> u32 {
        let Some(mut root) = splay(self.root.take(), key) else {
            self.root = Some(SplayNode::new(key.to_owned()));
            self.len += 1;
            return 1;
        };

        let node = match key.cmp(root.key.as_str()) {
            Ordering::Equal => {
                root.count = root.count.saturating_add(1);
                let count = root.count;
                self.root = Some(root);
                return count;
            }
            Ordering::Less => {
                let mut node = SplayNode::new(key.to_owned());
                node.left = root.left.take();
                node.right = Some(root);
                node
            }
            Ordering::Greater => {
                let mut node = SplayNode::new(key.to_owned());
                node.right = root.right.take();
                node.left = Some(root);
                node
            }
        };

        self.root = Some(node);
        self.len += 1;
        1
    }

    /// Remove `key` from the tree. Returns `false` when the key was absent,
    /// in which case only the shape of the tree changes.
    pub fn delete(&mut self, key: &str) -> bool {
        let (root, removed) = delete_node(self.root.take(), key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Occurrence count of `key`, or 0 when absent.
    ///
    /// This splays the tree on `key`, so lookups reshape the tree even though
    /// they never change its keys or counts.
    pub fn get(&mut self, key: &str) -> u32 {
        self.root = splay(self.root.take(), key);
        match &self.root {
            Some(root) if root.key == key => root.count,
            _ => 0,
        }
    }

    /// Shorthand for `get(key) > 0`. Splays like [`SplayTree::get`].
    pub fn contains(&mut self, key: &str) -> bool {
        self.get(key) > 0
    }

    /// All keys within `threshold` edits of `query`, in ascending order.
    ///
    /// Walks the whole tree without restructuring it.
    pub fn similar_words(&self, query: &str, threshold: usize) -> Vec<String> {
        self.similar_entries(query, threshold)
            .into_iter()
            .map(|entry| entry.key.to_owned())
            .collect()
    }

    /// Like [`SplayTree::similar_words`] but keeps counts and distances.
    pub fn similar_entries(&self, query: &str, threshold: usize) -> Vec<SimilarEntry<'_>> {
        let matcher = LevenshteinMatcher::new(query);

        self.iter()
            .filter_map(|(key, count)| {
                matcher
                    .distance_threshold(key, threshold)
                    .map(|distance| SimilarEntry {
                        key,
                        count,
                        distance,
                    })
            })
            .collect()
    }

    /// In-order listing of every key.
    pub fn traverse(&self) -> Vec<&str> {
        self.keys().collect()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// `(key, count)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Sum of all occurrence counts.
    pub fn total_count(&self) -> u64 {
        self.iter().map(|(_, count)| u64::from(count)).sum()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&SplayNode, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 1)));

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()]
                .into_iter()
                .flatten()
            {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    /// Drop every node.
    pub fn clear(&mut self) {
        // Iterative so that degenerate (path-shaped) trees cannot overflow the stack.
        let mut stack: Vec<Box<SplayNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl Drop for SplayTree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for SplayTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<S: AsRef<str>> Extend<S> for SplayTree {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SplayTree {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tree = SplayTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a SplayTree {
    type Item = (&'a str, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over `(key, count)` pairs.
pub struct Iter<'a> {
    stack: Vec<&'a SplayNode>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a SplayNode>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a SplayNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((node.key.as_str(), node.count))
    }
}

/// Which grandchild the search continued into below a pending frame.
#[derive(Debug, Clone, Copy)]
enum Descent {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

/// A node and the child on the search path, both detached from the
/// grandchild that is being splayed further down.
struct Frame {
    node: Box<SplayNode>,
    child: Box<SplayNode>,
    descent: Descent,
}

/// Splay the subtree rooted at `link` on `key`.
///
/// This is the recursive zig / zig-zig / zig-zag formulation in which every
/// level splays its grandchild first and then rotates on the way back up.
/// The recursion is unrolled onto a heap-allocated frame stack because a
/// tree grown from sorted input is a single path.
fn splay(link: Link, key: &str) -> Link {
    let mut frames: Vec<Frame> = Vec::new();
    let mut current = link;

    let mut result = loop {
        let Some(mut node) = current else {
            break None;
        };

        let frame = match key.cmp(node.key.as_str()) {
            Ordering::Equal => break Some(node),
            Ordering::Less => {
                let Some(mut child) = node.left.take() else {
                    break Some(node);
                };
                match key.cmp(child.key.as_str()) {
                    Ordering::Equal => {
                        node.left = Some(child);
                        break Some(rotate_right(node));
                    }
                    Ordering::Less => {
                        current = child.left.take();
                        Frame {
                            node,
                            child,
                            descent: Descent::LeftLeft,
                        }
                    }
                    Ordering::Greater => {
                        current = child.right.take();
                        Frame {
                            node,
                            child,
                            descent: Descent::LeftRight,
                        }
                    }
                }
            }
            Ordering::Greater => {
                let Some(mut child) = node.right.take() else {
                    break Some(node);
                };
                match key.cmp(child.key.as_str()) {
                    Ordering::Equal => {
                        node.right = Some(child);
                        break Some(rotate_left(node));
                    }
                    Ordering::Less => {
                        current = child.left.take();
                        Frame {
                            node,
                            child,
                            descent: Descent::RightLeft,
                        }
                    }
                    Ordering::Greater => {
                        current = child.right.take();
                        Frame {
                            node,
                            child,
                            descent: Descent::RightRight,
                        }
                    }
                }
            }
        };

        frames.push(frame);
    };

    while let Some(Frame {
        mut node,
        mut child,
        descent,
    }) = frames.pop()
    {
        let subtree = result.take();
        let top = match descent {
            Descent::LeftLeft => {
                // zig-zig: rotate the grandparent first, then the parent
                child.left = subtree;
                node.left = Some(child);
                let node = rotate_right(node);
                if node.left.is_some() {
                    rotate_right(node)
                } else {
                    node
                }
            }
            Descent::LeftRight => {
                // zig-zag
                child.right = subtree;
                if child.right.is_some() {
                    child = rotate_left(child);
                }
                node.left = Some(child);
                rotate_right(node)
            }
            Descent::RightLeft => {
                child.left = subtree;
                if child.left.is_some() {
                    child = rotate_right(child);
                }
                node.right = Some(child);
                rotate_left(node)
            }
            Descent::RightRight => {
                child.right = subtree;
                node.right = Some(child);
                let node = rotate_left(node);
                if node.right.is_some() {
                    rotate_left(node)
                } else {
                    node
                }
            }
        };
        result = Some(top);
    }

    result
}

/// Promote the left child. A node without a left child is returned as is.
fn rotate_right(mut node: Box<SplayNode>) -> Box<SplayNode> {
    match node.left.take() {
        Some(mut pivot) => {
            node.left = pivot.right.take();
            pivot.right = Some(node);
            pivot
        }
        None => node,
    }
}

/// Promote the right child. A node without a right child is returned as is.
fn rotate_left(mut node: Box<SplayNode>) -> Box<SplayNode> {
    match node.right.take() {
        Some(mut pivot) => {
            node.right = pivot.left.take();
            pivot.left = Some(node);
            pivot
        }
        None => node,
    }
}

fn delete_node(link: Link, key: &str) -> (Link, bool) {
    let Some(mut root) = splay(link, key) else {
        return (None, false);
    };

    if root.key != key {
        return (Some(root), false);
    }

    let replacement = match (root.left.take(), root.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            // Successor moves into the root; it has no left child, so the
            // nested delete always takes a single-child branch.
            let (min_key, min_count) = leftmost(&right);
            let min_key = min_key.to_owned();
            let (rest, _) = delete_node(Some(right), &min_key);

            root.key = min_key;
            root.count = min_count;
            root.left = Some(left);
            root.right = rest;
            Some(root)
        }
    };

    (replacement, true)
}

fn leftmost(mut node: &SplayNode) -> (&str, u32) {
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    (node.key.as_str(), node.count)
}
