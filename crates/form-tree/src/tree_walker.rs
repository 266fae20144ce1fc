//! Container traversal
//!
//! [`Children`] walks the direct children of a container. [`Descendants`]
//! walks the whole subtree depth-first in pre-order: each element is
//! followed by its own subtree before its next sibling. The container the
//! walk starts from is not yielded.
//!
//! Both borrow the tree, so the tree can not be edited while a walk is in
//! progress. Collect the handles first when an edit depends on a walk.

use std::slice;

use crate::{ElementId, FormResult, FormTree};

/// Direct children of a container
#[derive(Debug, Clone)]
pub struct Children<'a> {
    inner: slice::Iter<'a, ElementId>,
}

impl Iterator for Children<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Children<'_> {}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

/// Pre-order walk of a subtree.
///
/// Keeps one slice iterator per open container on an explicit stack, so
/// depth is bounded by heap memory rather than the call stack.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    tree: &'a FormTree,
    stack: Vec<slice::Iter<'a, ElementId>>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(&id) => {
                    let children = self.tree.child_slice(id);
                    if !children.is_empty() {
                        self.stack.push(children.iter());
                    }
                    return Some(id);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FormTree {
    /// Iterate over the direct children of an element.
    ///
    /// Fields and unknown handles have no children. Every call starts a
    /// fresh walk over the current child order.
    pub fn children(&self, element: ElementId) -> Children<'_> {
        Children {
            inner: self.child_slice(element).iter(),
        }
    }

    /// Iterate over every element below `element`, in pre-order
    pub fn descendants(&self, element: ElementId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![self.child_slice(element).iter()],
        }
    }

    /// Check if an element is a container, whether or not it has children yet
    pub fn has_children(&self, element: ElementId) -> bool {
        self.get(element)
            .and_then(|node| node.as_container())
            .is_some()
    }

    /// First element below `root` with the given id
    pub fn get_element_by_id(&self, root: ElementId, id: &str) -> Option<ElementId> {
        self.descendants(root)
            .find(|&e| self.get(e).is_some_and(|node| node.id == id))
    }

    /// Every element below `root` with the given name, in traversal order
    pub fn get_elements_by_name(&self, root: ElementId, name: &str) -> Vec<ElementId> {
        self.descendants(root)
            .filter(|&e| self.get(e).is_some_and(|node| node.name == name))
            .collect()
    }

    /// `element` and its subtree with every node after its descendants,
    /// siblings in child order
    pub(crate) fn post_order(&self, element: ElementId) -> FormResult<Vec<ElementId>> {
        self.node(element)?;

        let mut order = Vec::new();
        let mut stack = vec![(element, self.child_slice(element).iter())];
        while let Some((_, children)) = stack.last_mut() {
            match children.next() {
                Some(&child) => stack.push((child, self.child_slice(child).iter())),
                None => {
                    if let Some((id, _)) = stack.pop() {
                        order.push(id);
                    }
                }
            }
        }
        Ok(order)
    }

    fn child_slice(&self, element: ElementId) -> &[ElementId] {
        self.get(element)
            .and_then(|node| node.as_container())
            .map(|data| data.children())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use crate::{ContainerKind, ElementId, FieldType, FormTree};

    /// form [ a, group [ b1, b2 ], c ]
    fn sample() -> (FormTree, ElementId, Vec<ElementId>) {
        let mut tree = FormTree::new();
        let form = tree.create_container(ContainerKind::Form, "form").unwrap();
        let a = tree.create_field(FieldType::Text, "a").unwrap();
        let group = tree.create_container(ContainerKind::Group, "group").unwrap();
        let b1 = tree.create_field(FieldType::Text, "b1").unwrap();
        let b2 = tree.create_field(FieldType::Text, "b2").unwrap();
        let c = tree.create_field(FieldType::Text, "c").unwrap();

        tree.add_element(form, a).unwrap();
        tree.add_element(form, group).unwrap();
        tree.add_element(group, b1).unwrap();
        tree.add_element(group, b2).unwrap();
        tree.add_element(form, c).unwrap();

        (tree, form, vec![a, group, b1, b2, c])
    }

    #[test]
    fn test_children_shallow() {
        let (tree, form, ids) = sample();
        let children: Vec<_> = tree.children(form).collect();
        assert_eq!(children, vec![ids[0], ids[1], ids[4]]);
        assert_eq!(tree.children(form).len(), 3);
        assert_eq!(tree.children(ids[0]).count(), 0);
    }

    #[test]
    fn test_descendants_pre_order() {
        let (tree, form, ids) = sample();
        let walked: Vec<_> = tree.descendants(form).collect();
        assert_eq!(walked, ids);
    }

    #[test]
    fn test_descendants_restartable() {
        let (tree, form, _) = sample();
        let first: Vec<_> = tree.descendants(form).collect();
        let second: Vec<_> = tree.descendants(form).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_post_order() {
        let (tree, form, ids) = sample();
        let order = tree.post_order(form).unwrap();
        assert_eq!(order, vec![ids[0], ids[2], ids[3], ids[1], ids[4], form]);
    }

    #[test]
    fn test_has_children_is_capability() {
        let mut tree = FormTree::new();
        let empty = tree.create_container(ContainerKind::Fieldset, "empty").unwrap();
        let field = tree.create_field(FieldType::Checkbox, "agree").unwrap();

        assert!(tree.has_children(empty));
        assert!(!tree.has_children(field));
    }
}
