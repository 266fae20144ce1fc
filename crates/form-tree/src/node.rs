//! Form tree node
//!
//! An [`Element`] is one arena slot: identity, freeze state, the handle of
//! its owning container and a [`NodeData`] discriminator that tells fields
//! apart from containers.

use std::collections::BTreeMap;

use crate::ElementId;

/// Form tree node
#[derive(Debug, Clone)]
pub struct Element {
    /// Element name (mandatory, not unique)
    pub(crate) name: String,
    /// Element id (mandatory once created)
    pub(crate) id: String,
    /// Owning container, if attached
    pub(crate) container: Option<ElementId>,
    /// Rendered read-only with its current value
    pub(crate) frozen: bool,
    /// Frozen value is kept in submitted output
    pub(crate) persistent_freeze: bool,
    /// Attributes other than `name` and `id`
    pub(crate) attributes: BTreeMap<String, String>,
    /// Node-specific data
    pub(crate) data: NodeData,
}

impl Element {
    pub(crate) fn new(name: String, data: NodeData) -> Self {
        Self {
            name,
            id: String::new(),
            container: None,
            frozen: false,
            persistent_freeze: false,
            attributes: BTreeMap::new(),
            data,
        }
    }

    /// Element name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element id
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Owning container
    #[inline]
    pub fn container(&self) -> Option<ElementId> {
        self.container
    }

    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    #[inline]
    pub fn is_persistent_freeze(&self) -> bool {
        self.persistent_freeze
    }

    /// Non-identity attributes in name order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[inline]
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    /// Check if this node can own children
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self.data, NodeData::Container(_))
    }

    /// Get container data if this is a container
    #[inline]
    pub fn as_container(&self) -> Option<&ContainerData> {
        match &self.data {
            NodeData::Container(c) => Some(c),
            NodeData::Field(_) => None,
        }
    }

    /// Get the field type if this is a field
    #[inline]
    pub fn as_field(&self) -> Option<FieldType> {
        match &self.data {
            NodeData::Field(t) => Some(*t),
            NodeData::Container(_) => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Leaf form control
    Field(FieldType),
    /// Node owning an ordered list of children
    Container(ContainerData),
}

impl NodeData {
    /// Field type or container kind as a lowercase name
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Field(t) => t.as_str(),
            Self::Container(c) => c.kind.as_str(),
        }
    }
}

/// Container-specific data
#[derive(Debug, Clone, Default)]
pub struct ContainerData {
    pub kind: ContainerKind,
    pub(crate) children: Vec<ElementId>,
}

impl ContainerData {
    pub fn new(kind: ContainerKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Direct children in order
    #[inline]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub(crate) fn position(&self, child: ElementId) -> Option<usize> {
        self.children.iter().position(|&c| c == child)
    }
}

/// Kinds of container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerKind {
    #[default]
    Form,
    Fieldset,
    Group,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Fieldset => "fieldset",
            Self::Group => "group",
        }
    }
}

/// Kinds of leaf field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    Text,
    Password,
    Hidden,
    Checkbox,
    Radio,
    Select,
    Textarea,
    Button,
    Submit,
    Reset,
    Static,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Hidden => "hidden",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Textarea => "textarea",
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Static => "static",
        }
    }
}
