use std::fmt;
use tracing::{span, trace, Level};

/// Attribute sets and their rendering
mod attributes;
mod error;
/// Leaf and parent nodes making up a renderable tree
mod node;
/// Classification of self-closing elements
mod void;

pub use attributes::Attributes;
pub use error::{RenderError, ValidationError};
pub use node::{LeafNode, Node, ParentNode};
pub use void::{is_void, VOID_TAG_NAMES};

/// Anything that can be turned into markup. The [`fmt::Display`] form of an
/// implementor is its description, not its markup.
pub trait Render: fmt::Display {
    fn render(&self) -> Result<String, RenderError>;

    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Renders a node and all of its descendants. Fails with the first error
/// encountered, in which case no partial output is returned.
pub fn render(node: &impl Render) -> Result<String, RenderError> {
    let span = span!(Level::TRACE, "Rendering node");
    let _enter = span.enter();
    node.render().inspect_err(|err| trace!(%err, "render failed"))
}

/// Returns the diagnostic description of a node
pub fn describe(node: &impl Render) -> String {
    node.describe()
}

#[doc(hidden)]
#[macro_export]
macro_rules! __attribute_text {
    ($text:ident) => {
        stringify!($text)
    };
    ($text:literal) => {
        $text
    };
}

/// Builds an [`Attributes`] set. Names and values may be identifiers or literals.
///
/// ```
/// let attributes = html::attributes!(href => "https://google.com", class => first);
/// assert_eq!(attributes.get("class"), Some("first"));
/// ```
#[macro_export]
macro_rules! attributes {
    ($($name:tt => $value:tt),* $(,)?) => {
        <$crate::Attributes as ::core::iter::FromIterator<(String, String)>>::from_iter([
            $((
                $crate::__attribute_text!($name).to_string(),
                $crate::__attribute_text!($value).to_string(),
            )),*
        ])
    };
}
