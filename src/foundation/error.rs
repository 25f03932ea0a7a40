/// Crate-wide result alias.
pub type TinyPlanetResult<T> = Result<T, TinyPlanetError>;

/// Errors surfaced at the boundary of the projection core.
///
/// The per-pixel math never fails; these variants cover configuration validation and the image
/// I/O collaborators that wrap the sampling loop.
#[derive(thiserror::Error, Debug)]
pub enum TinyPlanetError {
    /// Rejected configuration (non-positive scale, zero output size, non-finite values, ...).
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// The source image could not be read or decoded.
    #[error("source decode error: {0}")]
    Decode(String),

    /// The output image could not be encoded or written.
    #[error("output encode error: {0}")]
    Encode(String),

    /// Configuration (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with context attached by the caller.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TinyPlanetError {
    /// Build a [`TinyPlanetError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TinyPlanetError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TinyPlanetError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`TinyPlanetError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
