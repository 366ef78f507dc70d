//! Top-level module for the n-gram feature system.
//!
//! This module provides a character-level gram pipeline, including:
//! - Boundary handling policies (`PaddingMode`)
//! - A lazy sliding-window gram sequence (`GramSequence`)
//! - Occurrence-labelled feature tokens (`FeatureTokens`)
//! - A validated configuration surface (`FeatureInput`)

/// Caller-facing configuration for gram generation and featurization.
///
/// Holds the window size, boundary characters and token separator, and
/// validates every mutation so invalid values never reach the generator.
pub mod feature_input;

/// Occurrence-labelled feature tokens.
///
/// Wraps the gram sequence so repeated grams map to distinct feature
/// keys within one featurization.
pub mod featurizer;

/// Lazy sliding-window sequence of fixed-width grams (window `>= 2`).
///
/// Handles window-size validation, padding and left-to-right emission.
pub mod gram_sequence;

/// Boundary handling applied to a source string before windowing.
pub mod padding;

/// Default number of characters per gram.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Character used to represent emptiness for strings that are shorter
/// than the requested length of grams.
pub const DEFAULT_NULL_CHAR: char = '~';

/// Character marking the start and end of a string when guards are enabled.
pub const DEFAULT_GUARD_CHAR: char = '$';

/// Character joining a gram with its occurrence ordinal.
pub const DEFAULT_SEPARATOR: char = '#';
