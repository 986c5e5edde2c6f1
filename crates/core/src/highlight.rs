//! Split display text around case-insensitive occurrences of the query.
//!
//! Purely presentational: nothing here feeds back into matching, ranking or
//! selection. The query is compared literally, so characters such as `.` or
//! `(` carry no pattern meaning.

/// A run of the original text, either matching the query or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
	pub text: &'a str,
	pub matched: bool,
}

impl<'a> Segment<'a> {
	fn plain(text: &'a str) -> Self {
		Self {
			text,
			matched: false,
		}
	}

	fn matched(text: &'a str) -> Self {
		Self {
			text,
			matched: true,
		}
	}
}

/// Segment `text` on every non-overlapping, left-to-right occurrence of
/// `query`, ignoring case.
///
/// Segments borrow from `text` and keep its original casing; joining them
/// reproduces `text` exactly. An empty query yields `text` as a single
/// unmatched segment.
///
/// Case folding works per character, so a match can only start and end on a
/// character of `text`. The matcher lowercases whole strings instead, which
/// means a record with a multi-char lowercase such as `İ` can match `"i"` and
/// still render without a highlighted segment. Highlighting never affects
/// matching or ranking.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
	if text.is_empty() {
		return Vec::new();
	}
	if query.is_empty() {
		return vec![Segment::plain(text)];
	}

	let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
	let mut segments = Vec::new();
	let mut plain_start = 0;
	let mut cursor = 0;

	while cursor < text.len() {
		if let Some(end) = match_end(text, cursor, &needle) {
			if plain_start < cursor {
				segments.push(Segment::plain(&text[plain_start..cursor]));
			}
			segments.push(Segment::matched(&text[cursor..end]));
			cursor = end;
			plain_start = end;
		} else {
			cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
		}
	}

	if plain_start < text.len() {
		segments.push(Segment::plain(&text[plain_start..]));
	}
	segments
}

/// Byte offset where a match of `needle` starting at `start` ends.
///
/// `needle` holds lowercase chars. A character whose lowercase form straddles
/// the end of the needle does not count as a match.
fn match_end(text: &str, start: usize, needle: &[char]) -> Option<usize> {
	let mut matched = 0;
	for (offset, ch) in text[start..].char_indices() {
		for lower in ch.to_lowercase() {
			if needle.get(matched) != Some(&lower) {
				return None;
			}
			matched += 1;
		}
		if matched == needle.len() {
			return Some(start + offset + ch.len_utf8());
		}
	}
	None
}
