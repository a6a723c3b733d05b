use std::fmt;

/// Reasons a validating constructor rejects a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("leaf node needs a value unless it is self closing")]
    MissingValue,

    #[error("self closing tags shouldn't contain content")]
    UnexpectedValue,

    #[error("parent must contain a tag that is not self closing")]
    InvalidTag,

    #[error("parent must contain children")]
    NoChildren,
}

/// Reasons rendering a node fails. Apart from `Format`, these only occur for
/// nodes that were not built by the validating constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node missing value")]
    MissingValue,

    #[error("parent node missing tag")]
    MissingTag,

    #[error("parent node can't have a void tag")]
    VoidTagNotAllowed,

    #[error("parent node missing children")]
    NoChildren,

    #[error("could not write markup: {0}")]
    Format(#[from] fmt::Error),
}
