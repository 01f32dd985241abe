use thiserror::Error;

/// Errors surfaced by the core crate.
///
/// Interaction itself never fails; only translating host-provided strings
/// (DOM attributes, key names) into typed values can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown target name: {0:?}")]
    UnknownTarget(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
