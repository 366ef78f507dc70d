use serde::{Deserialize, Serialize};

use super::padding::PaddingMode;
use super::{DEFAULT_GUARD_CHAR, DEFAULT_NULL_CHAR, DEFAULT_SEPARATOR, DEFAULT_WINDOW_SIZE};
use crate::error::{Error, Result};

/// Caller-facing configuration for gram generation and featurization.
///
/// `FeatureInput` contains both **windowing parameters** (window size,
/// boundary handling) and **formatting parameters** (the token separator).
///
/// # Responsibilities
/// - Hold the window size, guard/null characters and token separator
/// - Validate every mutation so invalid values never reach the generator
/// - Resolve the effective `PaddingMode` for a featurization
///
/// # Invariants
/// - `window_size` is always >= 2
/// - `guard_char`, `null_char` and `separator` are single characters
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FeatureInput {
	/// Whether boundary guards are added around each string.
	pub use_guards: bool,

	/// Number of characters per gram.
	window_size: usize,

	/// Boundary marker used when `use_guards` is set.
	guard_char: char,

	/// Filler for strings shorter than the window.
	null_char: char,

	/// Character joining a gram with its occurrence ordinal.
	separator: char,
}

impl Default for FeatureInput {
	fn default() -> Self {
		Self::new()
	}
}

impl FeatureInput {
	/// Creates a configuration with the default values: window size 3,
	/// no guards, `$` guard, `~` filler, `#` separator.
	pub fn new() -> Self {
		Self {
			use_guards: false,
			window_size: DEFAULT_WINDOW_SIZE,
			guard_char: DEFAULT_GUARD_CHAR,
			null_char: DEFAULT_NULL_CHAR,
			separator: DEFAULT_SEPARATOR,
		}
	}

	/// Returns the current window size.
	pub fn window_size(&self) -> usize {
		self.window_size
	}

	/// Returns the current guard character.
	pub fn guard_char(&self) -> char {
		self.guard_char
	}

	/// Returns the current null character.
	pub fn null_char(&self) -> char {
		self.null_char
	}

	/// Returns the current token separator.
	pub fn separator(&self) -> char {
		self.separator
	}

	/// Sets the window size.
	///
	/// # Errors
	/// Returns an error if `window_size < 2`.
	pub fn set_window_size(&mut self, window_size: usize) -> Result<()> {
		if window_size < 2 {
			return Err(Error::InvalidWindowSize(window_size));
		}
		self.window_size = window_size;
		Ok(())
	}

	/// Sets the guard character from a caller-supplied string.
	///
	/// Flag values arrive as strings; anything but exactly one character
	/// is rejected rather than silently truncated.
	///
	/// # Errors
	/// Returns an error unless `value` is a single character.
	pub fn set_guard_char(&mut self, value: &str) -> Result<()> {
		self.guard_char = Self::single_char(value)?;
		Ok(())
	}

	/// Sets the null character from a caller-supplied string.
	///
	/// # Errors
	/// Returns an error unless `value` is a single character.
	pub fn set_null_char(&mut self, value: &str) -> Result<()> {
		self.null_char = Self::single_char(value)?;
		Ok(())
	}

	/// Sets the token separator from a caller-supplied string.
	///
	/// # Errors
	/// Returns an error unless `value` is a single character.
	pub fn set_separator(&mut self, value: &str) -> Result<()> {
		self.separator = Self::single_char(value)?;
		Ok(())
	}

	/// Resolves the boundary handling for one featurization.
	///
	/// Guards take precedence; without them short strings fall back to
	/// null filling and longer strings are windowed as-is.
	pub fn padding_mode(&self) -> PaddingMode {
		if self.use_guards {
			PaddingMode::Guard(self.guard_char)
		} else {
			PaddingMode::Null(self.null_char)
		}
	}

	/// Extracts the single character of `value`.
	fn single_char(value: &str) -> Result<char> {
		let mut chars = value.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) => Ok(c),
			_ => Err(Error::InvalidPaddingChar(value.to_owned())),
		}
	}
}
