//! Form tree (arena-based allocation)
//!
//! Owns every element of one form together with the id registry used to
//! generate collision-free ids for them.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::{
    ContainerData, ContainerKind, Element, ElementId, FieldType, FormError, FormResult,
    IdRegistry, NodeData, TreeConfig,
};

const NAME_ATTR: &str = "name";
const ID_ATTR: &str = "id";

/// Source of per-tree handle tags
static NEXT_TREE_TAG: AtomicU32 = AtomicU32::new(0);

/// Arena of form elements
#[derive(Debug)]
pub struct FormTree {
    /// Stamped into every handle this tree issues
    tag: u32,
    nodes: Vec<Element>,
    registry: IdRegistry,
    config: TreeConfig,
}

impl FormTree {
    /// Create an empty tree with the default id options
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            tag: NEXT_TREE_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
            registry: IdRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Create an unattached element.
    ///
    /// Without an explicit id one is generated from the name. Fails once the
    /// arena index no longer fits in a handle.
    pub fn create_element(
        &mut self,
        name: impl Into<String>,
        id: Option<&str>,
        data: NodeData,
    ) -> FormResult<ElementId> {
        let handle = self.handle_for(self.nodes.len())?;
        let mut element = Element::new(name.into(), data);
        element.id = self.claim_id(&element.name, id);
        tracing::debug!(
            "Created {} {} name='{}' id='{}'",
            element.data.type_name(),
            handle,
            element.name,
            element.id
        );
        self.nodes.push(element);
        Ok(handle)
    }

    /// Create an unattached field with a generated id
    pub fn create_field(
        &mut self,
        field_type: FieldType,
        name: impl Into<String>,
    ) -> FormResult<ElementId> {
        self.create_element(name, None, NodeData::Field(field_type))
    }

    /// Create an empty, unattached container with a generated id
    pub fn create_container(
        &mut self,
        kind: ContainerKind,
        name: impl Into<String>,
    ) -> FormResult<ElementId> {
        self.create_element(name, None, NodeData::Container(ContainerData::new(kind)))
    }

    /// Get an element by handle.
    ///
    /// Handles issued by another tree yield `None`.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        if id.tree != self.tag {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Number of elements in the arena, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every element in creation order
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, node)| {
                u32::try_from(i)
                    .ok()
                    .map(|index| (ElementId::new(self.tag, index), node))
            })
    }

    /// Owning container of an element
    pub fn container_of(&self, element: ElementId) -> Option<ElementId> {
        self.get(element).and_then(|e| e.container)
    }

    pub fn name(&self, element: ElementId) -> FormResult<&str> {
        Ok(&self.node(element)?.name)
    }

    /// Rename an element. Names are not required to be unique.
    pub fn set_name(&mut self, element: ElementId, name: impl Into<String>) -> FormResult<()> {
        self.node_mut(element)?.name = name.into();
        Ok(())
    }

    pub fn id(&self, element: ElementId) -> FormResult<&str> {
        Ok(&self.node(element)?.id)
    }

    /// Set an element's id.
    ///
    /// `None` generates a fresh id from the current name. An explicit id is
    /// recorded in the registry even if another element already uses it.
    pub fn set_id(&mut self, element: ElementId, id: Option<&str>) -> FormResult<()> {
        let name = self.node(element)?.name.clone();
        let id = self.claim_id(&name, id);
        self.node_mut(element)?.id = id;
        Ok(())
    }

    /// Read any attribute, including `name` and `id`
    pub fn attribute(&self, element: ElementId, attr: &str) -> FormResult<Option<&str>> {
        let node = self.node(element)?;
        Ok(match attr {
            NAME_ATTR => Some(node.name.as_str()),
            ID_ATTR => Some(node.id.as_str()),
            _ => node.attributes.get(attr).map(String::as_str),
        })
    }

    /// Set or clear an attribute.
    ///
    /// `name` and `id` are mandatory: clearing either fails and leaves the
    /// element unchanged, while setting them goes through
    /// [`set_name`](Self::set_name) and [`set_id`](Self::set_id).
    pub fn set_attribute(
        &mut self,
        element: ElementId,
        attr: &str,
        value: Option<&str>,
    ) -> FormResult<()> {
        self.node(element)?;
        match (attr, value) {
            (NAME_ATTR | ID_ATTR, None) => Err(FormError::invalid(format!(
                "Required attribute '{}' can not be removed",
                attr
            ))),
            (NAME_ATTR, Some(name)) => self.set_name(element, name),
            (ID_ATTR, Some(id)) => self.set_id(element, Some(id)),
            (_, Some(value)) => {
                self.node_mut(element)?
                    .attributes
                    .insert(attr.to_string(), value.to_string());
                Ok(())
            }
            (_, None) => {
                self.node_mut(element)?.attributes.remove(attr);
                Ok(())
            }
        }
    }

    pub fn remove_attribute(&mut self, element: ElementId, attr: &str) -> FormResult<()> {
        self.set_attribute(element, attr, None)
    }

    /// Id registry of this tree
    pub fn registry(&self) -> &IdRegistry {
        &self.registry
    }

    /// Forget every claimed id. Existing elements keep their ids.
    pub fn dispose_ids(&mut self) {
        self.registry.dispose();
    }

    fn claim_id(&mut self, name: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => {
                self.registry.store_id(id);
                id.to_string()
            }
            None => self.registry.generate_id(name, &self.config),
        }
    }

    fn handle_for(&self, len: usize) -> FormResult<ElementId> {
        let index = u32::try_from(len).map_err(|_| {
            FormError::invalid(format!("Form tree is full at {} elements", len))
        })?;
        Ok(ElementId::new(self.tag, index))
    }

    pub(crate) fn node(&self, id: ElementId) -> FormResult<&Element> {
        self.get(id)
            .ok_or_else(|| FormError::not_found(format!("Unknown element {}", id)))
    }

    pub(crate) fn node_mut(&mut self, id: ElementId) -> FormResult<&mut Element> {
        if id.tree != self.tag {
            return Err(FormError::not_found(format!("Unknown element {}", id)));
        }
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| FormError::not_found(format!("Unknown element {}", id)))
    }
}

impl Default for FormTree {
    fn default() -> Self {
        Self::new()
    }
}
