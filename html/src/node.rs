use std::fmt::{self, Display, Write};
use tracing::trace;

use crate::{is_void, render, Attributes, Render, RenderError, ValidationError};

/// A node without children: raw text when `tag` is empty, otherwise an
/// element holding a single text value (or nothing, for void elements).
///
/// The [`Default`] value has not been validated and fails to render.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct LeafNode {
    tag: String,
    value: String,
    attributes: Attributes,
}

/// An element owning a non-empty, ordered list of children
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct ParentNode {
    tag: String,
    children: Vec<Node>,
    attributes: Attributes,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Node {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl LeafNode {
    pub fn new(
        tag: impl Into<String>,
        value: impl Into<String>,
        attributes: Option<Attributes>,
    ) -> Result<Self, ValidationError> {
        let tag = tag.into();
        let value = value.into();
        let void = is_void(&tag);
        if value.is_empty() && !void {
            trace!(%tag, "rejected leaf node without a value");
            return Err(ValidationError::MissingValue);
        }
        if void && !value.is_empty() {
            trace!(%tag, "rejected void leaf node with a value");
            return Err(ValidationError::UnexpectedValue);
        }
        Ok(Self {
            tag,
            value,
            attributes: attributes.unwrap_or_default(),
        })
    }

    /// A tag-less node emitting `value` verbatim
    pub fn text(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new("", value, None)
    }
}

impl Render for LeafNode {
    fn render(&self) -> Result<String, RenderError> {
        let void = is_void(&self.tag);
        if self.value.is_empty() && !void {
            return Err(RenderError::MissingValue);
        }
        if self.tag.is_empty() {
            return Ok(self.value.clone());
        }

        let mut html = String::new();
        write!(
            html,
            "<{}{}>{}",
            self.tag,
            self.attributes.render()?,
            self.value
        )?;
        if !void {
            write!(html, "</{}>", self.tag)?;
        }
        Ok(html)
    }
}

impl Display for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeafNode({}, {}, {})", self.tag, self.value, self.attributes)
    }
}

impl ParentNode {
    pub fn new(
        tag: impl Into<String>,
        children: Vec<Node>,
        attributes: Option<Attributes>,
    ) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if tag.is_empty() || is_void(&tag) {
            trace!(%tag, "rejected parent node tag");
            return Err(ValidationError::InvalidTag);
        }
        if children.is_empty() {
            trace!(%tag, "rejected parent node without children");
            return Err(ValidationError::NoChildren);
        }
        Ok(Self {
            tag,
            children,
            attributes: attributes.unwrap_or_default(),
        })
    }
}

impl Render for ParentNode {
    fn render(&self) -> Result<String, RenderError> {
        if self.tag.is_empty() {
            return Err(RenderError::MissingTag);
        }
        if is_void(&self.tag) {
            return Err(RenderError::VoidTagNotAllowed);
        }
        if self.children.is_empty() {
            return Err(RenderError::NoChildren);
        }

        let mut html = String::new();
        write!(html, "<{}{}>", self.tag, self.attributes.render()?)?;
        for child in &self.children {
            html.push_str(&render(child)?);
        }
        write!(html, "</{}>", self.tag)?;
        Ok(html)
    }
}

impl Display for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParentNode({}, [", self.tag)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "], {})", self.attributes)
    }
}

impl Render for Node {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Node::Leaf(leaf) => leaf.render(),
            Node::Parent(parent) => parent.render(),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => Display::fmt(leaf, f),
            Node::Parent(parent) => Display::fmt(parent, f),
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(parent)
    }
}

#[cfg(test)]
#[test]
fn test_render_unvalidated_parent() {
    let void = ParentNode {
        tag: "img".to_string(),
        children: vec![LeafNode::text("no tags").unwrap().into()],
        attributes: Attributes::empty(),
    };
    assert_eq!(render(&void), Err(RenderError::VoidTagNotAllowed));

    let childless = ParentNode {
        tag: "div".to_string(),
        ..Default::default()
    };
    assert_eq!(render(&childless), Err(RenderError::NoChildren));

    let void_leaf = LeafNode {
        tag: "hr".to_string(),
        value: "rule".to_string(),
        attributes: Attributes::empty(),
    };
    assert_eq!(render(&void_leaf).as_deref(), Ok("<hr>rule"));
}
