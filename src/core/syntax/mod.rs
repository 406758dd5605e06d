//! Generic syntax tree used by the collection extractor.
//!
//! The tree is an arena of ESTree-shaped nodes: every node has a kind (the
//! ESTree `type` string) and an ordered list of named fields. Children are
//! referenced by index, and parent links live in a side table instead of on
//! the nodes themselves, so the tree never forms an ownership cycle.
//!
//! Trees are produced by one of two front ends:
//! - `estree`: import of an ESTree JSON document emitted by an external parser
//! - `crate::core::parsers::module`: swc parse of TypeScript source, lowered to the same shape

pub mod estree;
pub mod walk;

pub use walk::{BACK_REFERENCE_FIELDS, walk};

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Leaf value stored directly in a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Textual form used when a literal is read as a static value.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Number(n) => n.to_string(),
            Scalar::String(s) => s.clone(),
        }
    }
}

/// Value of a named node field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Node(NodeId),
    List(Vec<Field>),
    Value(Scalar),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: String,
    fields: Vec<(String, Field)>,
}

/// Arena-backed syntax tree.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
    parents: Vec<Option<NodeId>>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn root(&self) -> NodeRef<'_> {
        self.node(self.root)
    }

    pub fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { tree: self, id }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Incremental constructor for a [`SyntaxTree`].
///
/// Children must be added before their parent; adding a node records it as
/// the parent of every node referenced from its fields.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<NodeData>,
    parents: Vec<Option<NodeId>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: impl Into<String>, fields: Vec<(String, Field)>) -> NodeId {
        let id = NodeId(self.nodes.len());
        for (_, field) in &fields {
            self.adopt(field, id);
        }
        self.nodes.push(NodeData {
            kind: kind.into(),
            fields,
        });
        self.parents.push(None);
        id
    }

    fn adopt(&mut self, field: &Field, parent: NodeId) {
        match field {
            Field::Node(child) => self.parents[child.0] = Some(parent),
            Field::List(items) => {
                for item in items {
                    self.adopt(item, parent);
                }
            }
            Field::Value(_) => {}
        }
    }

    pub fn finish(self, root: NodeId) -> SyntaxTree {
        SyntaxTree {
            nodes: self.nodes,
            parents: self.parents,
            root,
        }
    }
}

/// Small helper for building `(name, field)` pairs.
pub fn field(name: &str, value: Field) -> (String, Field) {
    (name.to_string(), value)
}

/// Borrowed handle to a node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SyntaxTree,
    id: NodeId,
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    pub fn kind(&self) -> &'a str {
        &self.data().kind
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind() == kind
    }

    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id.0]
    }

    /// All fields in their stored order.
    pub fn fields(&self) -> impl Iterator<Item = (&'a str, &'a Field)> + use<'a> {
        self.data()
            .fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn field(&self, name: &str) -> Option<&'a Field> {
        self.data()
            .fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Child node stored directly under `name`.
    pub fn child(&self, name: &str) -> Option<NodeRef<'a>> {
        match self.field(name)? {
            Field::Node(id) => Some(self.tree.node(*id)),
            _ => None,
        }
    }

    /// Node children of a list field, skipping holes and scalar entries.
    pub fn children(&self, name: &str) -> impl Iterator<Item = NodeRef<'a>> + use<'a> {
        let tree = self.tree;
        let items: &'a [Field] = match self.field(name) {
            Some(Field::List(items)) => items,
            _ => &[],
        };
        items.iter().filter_map(move |item| match item {
            Field::Node(id) => Some(tree.node(*id)),
            _ => None,
        })
    }

    /// Element `index` of a list field, if it is a node.
    pub fn child_at(&self, name: &str, index: usize) -> Option<NodeRef<'a>> {
        match self.field(name)? {
            Field::List(items) => match items.get(index)? {
                Field::Node(id) => Some(self.tree.node(*id)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Number of entries (holes included) in a list field.
    pub fn list_len(&self, name: &str) -> usize {
        match self.field(name) {
            Some(Field::List(items)) => items.len(),
            _ => 0,
        }
    }

    pub fn scalar(&self, name: &str) -> Option<&'a Scalar> {
        match self.field(name)? {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn str(&self, name: &str) -> Option<&'a str> {
        self.scalar(name).and_then(Scalar::as_str)
    }

    pub fn bool(&self, name: &str) -> bool {
        matches!(self.scalar(name), Some(Scalar::Bool(true)))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.tree.parents[self.id.0].map(|id| self.tree.node(id))
    }
}
