//! Container Operations
//!
//! Structural edits (addElement, removeChild, insertBefore) and top-down
//! propagation of freeze state.
//!
//! Every edit updates the child list of the container and the parent handle
//! of the element together, so an element is listed by exactly the container
//! its handle points to, or by none.

use crate::{ContainerData, ElementId, FormError, FormResult, FormTree, NodeData};

impl FormTree {
    /// Append an element to a container.
    ///
    /// An element already in this container moves to the end. An element
    /// owned by another container is taken away from it.
    pub fn add_element(&mut self, container: ElementId, element: ElementId) -> FormResult<ElementId> {
        self.container(container)?;
        self.node(element)?;
        self.check_acyclic(container, element)?;

        self.detach(element);
        self.container_mut(container)?.children.push(element);
        self.node_mut(element)?.container = Some(container);

        tracing::debug!("Appended {} to {}", element, container);
        Ok(element)
    }

    /// Remove a direct child from a container.
    ///
    /// The element becomes unattached; its own children stay with it. A
    /// field target owns nothing, so every element is reported as not found.
    pub fn remove_child(&mut self, container: ElementId, element: ElementId) -> FormResult<ElementId> {
        self.node(container)?;
        let node = self.node(element)?;
        if node.container != Some(container) {
            return Err(FormError::not_found(format!(
                "Element with name '{}' was not found",
                node.name
            )));
        }
        let name = node.name.clone();

        let data = self.container_mut(container)?;
        let Some(pos) = data.position(element) else {
            tracing::error!(
                "Element {} points to {} but is not among its children",
                element,
                container
            );
            return Err(FormError::not_found(format!(
                "Element with name '{}' was not found",
                name
            )));
        };
        data.children.remove(pos);
        self.node_mut(element)?.container = None;

        tracing::debug!("Removed {} from {}", element, container);
        Ok(element)
    }

    /// Insert an element before a direct child of a container.
    ///
    /// Without a reference this is [`add_element`](Self::add_element). A
    /// reference that is not a direct child, including any reference when
    /// the target is a field, is reported as not found.
    pub fn insert_before(
        &mut self,
        container: ElementId,
        element: ElementId,
        reference: Option<ElementId>,
    ) -> FormResult<ElementId> {
        let Some(reference) = reference else {
            return self.add_element(container, element);
        };

        let listed = self
            .node(container)?
            .as_container()
            .is_some_and(|data| data.position(reference).is_some());
        let ref_node = self.node(reference)?;
        if ref_node.container != Some(container) || !listed {
            return Err(FormError::not_found(format!(
                "Reference element with name '{}' was not found",
                ref_node.name
            )));
        }
        self.node(element)?;

        // Detaching and reinserting the reference itself keeps its position
        if element == reference {
            return Ok(element);
        }
        self.check_acyclic(container, element)?;

        self.detach(element);
        let data = self.container_mut(container)?;
        let Some(pos) = data.position(reference) else {
            return Err(FormError::not_found(format!(
                "Reference element {} was not found",
                reference
            )));
        };
        data.children.insert(pos, element);
        self.node_mut(element)?.container = Some(container);

        tracing::debug!("Inserted {} before {} in {}", element, reference, container);
        Ok(element)
    }

    /// Direct children of a container, in order
    pub fn elements(&self, container: ElementId) -> FormResult<&[ElementId]> {
        Ok(self.container(container)?.children())
    }

    /// Number of direct children
    pub fn count(&self, container: ElementId) -> FormResult<usize> {
        Ok(self.container(container)?.children.len())
    }

    /// Freeze or unfreeze an element and everything below it.
    ///
    /// Descendants are updated before the element itself. `None` only reads
    /// the current state.
    pub fn toggle_frozen(&mut self, element: ElementId, freeze: Option<bool>) -> FormResult<bool> {
        let Some(freeze) = freeze else {
            return Ok(self.node(element)?.frozen);
        };
        for id in self.post_order(element)? {
            self.node_mut(id)?.frozen = freeze;
        }
        tracing::debug!("Set frozen={} on {} and its descendants", freeze, element);
        Ok(freeze)
    }

    /// Same as [`toggle_frozen`](Self::toggle_frozen) for the flag that keeps
    /// frozen values in submitted output.
    pub fn persistent_freeze(
        &mut self,
        element: ElementId,
        persistent: Option<bool>,
    ) -> FormResult<bool> {
        let Some(persistent) = persistent else {
            return Ok(self.node(element)?.persistent_freeze);
        };
        for id in self.post_order(element)? {
            self.node_mut(id)?.persistent_freeze = persistent;
        }
        tracing::debug!(
            "Set persistent_freeze={} on {} and its descendants",
            persistent,
            element
        );
        Ok(persistent)
    }

    /// Take an element out of whatever container owns it
    fn detach(&mut self, element: ElementId) {
        let Some(parent) = self.container_of(element) else {
            return;
        };
        if let Ok(data) = self.container_mut(parent) {
            if let Some(pos) = data.position(element) {
                data.children.remove(pos);
            }
        }
        if let Ok(node) = self.node_mut(element) {
            node.container = None;
        }
    }

    /// Reject edits that would make a container its own descendant
    fn check_acyclic(&self, container: ElementId, element: ElementId) -> FormResult<()> {
        let mut current = Some(container);
        while let Some(id) = current {
            if id == element {
                return Err(FormError::invalid(format!(
                    "Element with name '{}' can not be placed inside itself",
                    self.node(element)?.name
                )));
            }
            current = self.container_of(id);
        }
        Ok(())
    }

    pub(crate) fn container(&self, id: ElementId) -> FormResult<&ContainerData> {
        let node = self.node(id)?;
        node.as_container().ok_or_else(|| {
            FormError::invalid(format!("Element with name '{}' is not a container", node.name))
        })
    }

    fn container_mut(&mut self, id: ElementId) -> FormResult<&mut ContainerData> {
        let node = self.node_mut(id)?;
        match &mut node.data {
            NodeData::Container(data) => Ok(data),
            NodeData::Field(_) => Err(FormError::invalid(format!(
                "Element with name '{}' is not a container",
                node.name
            ))),
        }
    }
}
