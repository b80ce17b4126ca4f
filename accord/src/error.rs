//! Layout error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A node was driven outside the measure-before-arrange protocol.
    ///
    /// Fatal: the tree is inconsistent and any output would be silently wrong.
    #[error("contract violation in {node}: {detail}")]
    ContractViolation { node: &'static str, detail: String },

    /// The tree asked for a layout the engine deliberately does not guess at.
    #[error("unsupported configuration in {node}: {detail}")]
    UnsupportedConfiguration { node: &'static str, detail: String },
}

impl LayoutError {
    pub(crate) fn contract(node: &'static str, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::warn!(node, %detail, "layout contract violation");
        LayoutError::ContractViolation { node, detail }
    }

    pub(crate) fn unsupported(node: &'static str, detail: impl Into<String>) -> Self {
        LayoutError::UnsupportedConfiguration { node, detail: detail.into() }
    }
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
