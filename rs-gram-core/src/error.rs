use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while configuring or building a gram sequence.
///
/// Both variants are fatal to the call that raised them: there is no
/// partial output, the caller gets either the full sequence or nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The requested window size is below 2. The sliding construction
	/// needs at least a pair of cursors, smaller windows are meaningless.
	#[error("window size must be >= 2, got {0}")]
	InvalidWindowSize(usize),

	/// A guard, null or separator value is not exactly one character.
	#[error("padding character must be a single character, got {0:?}")]
	InvalidPaddingChar(String),
}
