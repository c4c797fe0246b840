use thiserror::Error;

/// Errors surfaced while building or mounting a dialog.
///
/// Event handling never fails; these only come out of construction, `mount`
/// and configuration parsing.
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("invalid render target id `{0}`: use ASCII letters, digits, `-` or `_`")]
    InvalidRootId(String),

    #[error("an element with id `{0}` already exists in the document")]
    DuplicateRenderTarget(String),

    #[error("render target container `{0}` is not in the document")]
    MissingContainer(String),

    #[error("invalid dialog config: {0}")]
    Config(#[from] toml::de::Error),
}
