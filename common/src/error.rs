//! Error types for inventory lookups.

use thiserror::Error;

use crate::inventory::ObjectKind;

#[derive(Debug, Error)]
pub enum FindError {
    /// The path starts with `..`.
    #[error("cannot traverse up a tree: '{path}'")]
    UnsupportedOperation { path: String },

    /// A datacenter scoped lookup ran before a datacenter was set.
    #[error("please specify a datacenter")]
    NoDatacenterSpecified,

    #[error("{kind} '{path}' not found")]
    NotFound { kind: ObjectKind, path: String },

    #[error("path '{path}' resolves to multiple {kind}s")]
    Ambiguous { kind: ObjectKind, path: String },

    #[error("no default {kind} found")]
    DefaultNotSpecified { kind: ObjectKind, path: String },

    #[error("default {kind} resolves to multiple instances, please specify")]
    DefaultAmbiguous { kind: ObjectKind, path: String },

    /// Failure raised by the inventory client or the recurser.
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

impl FindError {
    /// Rewraps cardinality failures of a default lookup. Everything else passes through.
    pub fn into_default(self) -> Self {
        match self {
            FindError::NotFound { kind, path } => FindError::DefaultNotSpecified { kind, path },
            FindError::Ambiguous { kind, path } => FindError::DefaultAmbiguous { kind, path },
            other => other,
        }
    }

    pub fn is_default_error(&self) -> bool {
        matches!(
            self,
            FindError::DefaultNotSpecified { .. } | FindError::DefaultAmbiguous { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FindError>;
