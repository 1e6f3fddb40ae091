use serde::Serialize;

use crate::comment_block::detect;
use crate::config::CommentSyntax;
use crate::config::Markers;

/// A snippet span dropped from a file, as 1-indexed inclusive line numbers of
/// the original content.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct RemovedSpan {
	/// Line holding the begin marker.
	pub start_line: usize,
	/// Line holding the end marker, or the last line when the span is
	/// unterminated.
	pub end_line: usize,
	/// False when the end of the content was reached before an end marker.
	pub terminated: bool,
}

/// Output of [`excise`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Excision {
	/// The content with every licensed span removed.
	pub content: String,
	/// Number of spans removed (not lines).
	pub removed: usize,
	/// The removed spans in the order they appeared.
	pub spans: Vec<RemovedSpan>,
}

impl Excision {
	/// Returns true if at least one span was removed.
	pub fn is_changed(&self) -> bool {
		self.removed > 0
	}
}

/// Whether the whole file should be deleted: its leading comment block
/// carries the license marker.
pub fn should_remove_file(content: &str, markers: &Markers, syntax: &CommentSyntax) -> bool {
	detect(content, syntax).is_some_and(|block| block.contains(&markers.license))
}

/// Remove every snippet span whose text contains the license marker.
///
/// A span starts at a line containing the begin marker and ends at the first
/// following line (the begin line included) containing the end marker. Spans
/// do not nest: a second begin marker inside an open span is ordinary content
/// and the first end marker closes the outer span. A span with no end marker
/// runs to the end of the content.
///
/// Content is split on `\n` only, so lines outside removed spans come back
/// byte-for-byte, `\r` included.
pub fn excise(content: &str, markers: &Markers) -> Excision {
	let lines: Vec<&str> = content.split('\n').collect();
	let mut kept = Vec::with_capacity(lines.len());
	let mut spans = Vec::new();
	let mut index = 0;

	while index < lines.len() {
		let line = lines[index];
		if !line.contains(markers.begin.as_str()) {
			kept.push(line);
			index += 1;
			continue;
		}

		let (end, terminated) = find_span_end(&lines, index, &markers.end);
		let span = &lines[index..=end];

		if span.join("\n").contains(markers.license.as_str()) {
			tracing::trace!(start = index + 1, end = end + 1, terminated, "dropping snippet");
			spans.push(RemovedSpan {
				start_line: index + 1,
				end_line: end + 1,
				terminated,
			});
		} else {
			kept.extend_from_slice(span);
		}

		index = end + 1;
	}

	if spans.is_empty() {
		return Excision {
			content: content.to_string(),
			removed: 0,
			spans,
		};
	}

	Excision {
		content: kept.join("\n"),
		removed: spans.len(),
		spans,
	}
}

/// Index of the line closing the span opened at `start`, and whether an end
/// marker was found at all.
fn find_span_end(lines: &[&str], start: usize, end_marker: &str) -> (usize, bool) {
	lines[start..]
		.iter()
		.position(|line| line.contains(end_marker))
		.map_or((lines.len() - 1, false), |offset| (start + offset, true))
}
