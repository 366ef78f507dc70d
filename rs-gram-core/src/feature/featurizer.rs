use std::collections::HashMap;

use super::feature_input::FeatureInput;
use super::gram_sequence::GramSequence;
use super::padding::PaddingMode;
use crate::error::Result;

/// Occurrence-labelled gram sequence.
///
/// Wraps a [`GramSequence`] and pairs every gram with a 1-based ordinal
/// counting how many times that exact gram has been seen so far, so that
/// repeated grams map to distinct feature keys in a sparse encoding.
///
/// # Responsibilities
/// - Walk the underlying gram sequence in order
/// - Track per-gram occurrence counts local to this value
/// - Emit `{gram}{separator}{ordinal}` tokens
///
/// # Invariants
/// - The first occurrence of a gram is labelled 1
/// - The occurrence map lives and dies with this value; counts never
///   leak between featurizations
/// - Token order follows gram order; output is byte-identical across
///   repeated calls with the same arguments
#[derive(Debug)]
pub struct FeatureTokens {
	grams: GramSequence,
	counts: HashMap<String, usize>,
	separator: char,
}

impl FeatureTokens {
	/// Creates the feature token sequence for `source`.
	///
	/// # Errors
	/// Returns `Error::InvalidWindowSize` if `size < 2`.
	pub fn new(source: &str, size: usize, padding: &PaddingMode, separator: char) -> Result<Self> {
		let grams = GramSequence::new(source, size, padding)?;
		Ok(Self { grams, counts: HashMap::new(), separator })
	}

	/// Creates the feature token sequence for `source` under a validated
	/// configuration.
	///
	/// # Errors
	/// Propagates construction failures from the gram sequence.
	pub fn with_input(source: &str, input: &FeatureInput) -> Result<Self> {
		Self::new(source, input.window_size(), &input.padding_mode(), input.separator())
	}
}

impl Iterator for FeatureTokens {
	type Item = String;

	fn next(&mut self) -> Option<String> {
		let gram = self.grams.next()?;
		// Incremented before use, so the first occurrence is labelled 1
		let count = self.counts.entry(gram.clone()).or_insert(0);
		*count += 1;
		Some(format!("{}{}{}", gram, self.separator, count))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.grams.size_hint()
	}
}

impl ExactSizeIterator for FeatureTokens {}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::error::Error;

	fn tokens(source: &str, size: usize, padding: &PaddingMode) -> Vec<String> {
		FeatureTokens::new(source, size, padding, '#').unwrap().collect()
	}

	#[test]
	fn guarded_trigram_features() {
		assert_eq!(
			tokens("cat", 3, &PaddingMode::Guard('$')),
			vec!["$$c#1", "$ca#1", "cat#1", "at$#1", "t$$#1"]
		);
	}

	#[test]
	fn null_padded_short_source_feature() {
		assert_eq!(tokens("a", 3, &PaddingMode::Null('~')), vec!["a~~#1"]);
	}

	#[test]
	fn repeated_grams_get_distinct_ordinals() {
		assert_eq!(
			tokens("aaaa", 2, &PaddingMode::None),
			vec!["aa#1", "aa#2", "aa#3"]
		);
	}

	#[test]
	fn tokens_are_unique_within_one_featurization() {
		let all = tokens("banana", 2, &PaddingMode::Guard('$'));
		let distinct: HashSet<&String> = all.iter().collect();
		assert_eq!(distinct.len(), all.len());
	}

	#[test]
	fn ordinals_count_raw_gram_occurrences() {
		let raw: Vec<String> = GramSequence::new("banana", 2, &PaddingMode::None)
			.unwrap()
			.collect();
		for token in tokens("banana", 2, &PaddingMode::None) {
			let (gram, ordinal) = token.split_once('#').unwrap();
			let occurrences = raw.iter().filter(|g| *g == gram).count();
			assert!(ordinal.parse::<usize>().unwrap() <= occurrences);
		}
		// "an" and "na" both appear twice, so both #1 and #2 are emitted
		let all = tokens("banana", 2, &PaddingMode::None);
		assert!(all.contains(&"an#2".to_owned()));
		assert!(all.contains(&"na#2".to_owned()));
	}

	#[test]
	fn ordinals_reset_between_calls() {
		assert_eq!(tokens("aaaa", 2, &PaddingMode::None), tokens("aaaa", 2, &PaddingMode::None));
	}

	#[test]
	fn construction_failures_pass_through() {
		assert_eq!(
			FeatureTokens::new("cat", 1, &PaddingMode::None, '#').unwrap_err(),
			Error::InvalidWindowSize(1)
		);
	}

	#[test]
	fn separator_comes_from_the_caller() {
		let all: Vec<String> = FeatureTokens::new("aaa", 2, &PaddingMode::None, ':')
			.unwrap()
			.collect();
		assert_eq!(all, vec!["aa:1", "aa:2"]);
	}

	#[test]
	fn configured_featurization_matches_the_explicit_form() {
		let mut input = FeatureInput::new();
		input.use_guards = true;
		let configured: Vec<String> = FeatureTokens::with_input("cat", &input).unwrap().collect();
		assert_eq!(configured, tokens("cat", 3, &PaddingMode::Guard('$')));
	}
}
