use serde::{Deserialize, Serialize};

/// Boundary handling applied to a source string before windowing.
///
/// # Variants
/// - `None`: nothing is added; a source shorter than the window yields
///   no grams at all.
/// - `Guard(char)`: `window - 1` copies of the character are prepended
///   and appended, so the outermost grams encode start-of-string and
///   end-of-string context.
/// - `Null(char)`: right-pad applied only when the source is shorter
///   than the window, so exactly one gram (the whole padded string) is
///   produced; longer sources are windowed untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum PaddingMode {
	None,
	Guard(char),
	Null(char),
}

impl PaddingMode {
	/// Builds the padded character buffer for a source and window size.
	///
	/// Callers guarantee `size >= 2`; the gram sequence validates it
	/// before padding.
	pub(crate) fn pad(&self, source: &str, size: usize) -> Vec<char> {
		let chars: Vec<char> = source.chars().collect();
		match *self {
			PaddingMode::None => chars,
			PaddingMode::Guard(guard) => {
				let mut padded = vec![guard; size - 1];
				padded.extend(&chars);
				padded.extend(vec![guard; size - 1]);
				padded
			}
			PaddingMode::Null(null) => {
				let mut padded = chars;
				// Right-pad only, and only when the source cannot fill a window
				while padded.len() < size {
					padded.push(null);
				}
				padded
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn none_leaves_the_source_untouched() {
		assert_eq!(PaddingMode::None.pad("cat", 3), vec!['c', 'a', 't']);
		assert_eq!(PaddingMode::None.pad("", 3), Vec::<char>::new());
	}

	#[test]
	fn guard_pads_both_sides() {
		let padded: String = PaddingMode::Guard('$').pad("cat", 3).into_iter().collect();
		assert_eq!(padded, "$$cat$$");
	}

	#[test]
	fn guard_pads_the_empty_source() {
		let padded: String = PaddingMode::Guard('$').pad("", 3).into_iter().collect();
		assert_eq!(padded, "$$$$");
	}

	#[test]
	fn null_pads_short_sources_on_the_right() {
		let padded: String = PaddingMode::Null('~').pad("a", 3).into_iter().collect();
		assert_eq!(padded, "a~~");
	}

	#[test]
	fn null_leaves_long_enough_sources_untouched() {
		let padded: String = PaddingMode::Null('~').pad("cat", 3).into_iter().collect();
		assert_eq!(padded, "cat");
		let padded: String = PaddingMode::Null('~').pad("kitten", 3).into_iter().collect();
		assert_eq!(padded, "kitten");
	}
}
