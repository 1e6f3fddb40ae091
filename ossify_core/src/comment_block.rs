use derive_more::Deref;

use crate::config::CommentSyntax;

/// The style of comment that opens a file.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CommentBlockKind {
	/// A single block comment (`/* ... */`).
	Block,
	/// A run of line comments (`// ...`), possibly interleaved with blank
	/// lines.
	Line,
}

/// The comment construct occupying the very first lines of a file.
///
/// Dereferences to the borrowed lines in their original form (untrimmed,
/// without the `\n` separator).
#[derive(Debug, Clone, Deref, Eq, PartialEq)]
pub struct CommentBlock<'a> {
	pub kind: CommentBlockKind,
	#[deref]
	pub lines: Vec<&'a str>,
}

impl CommentBlock<'_> {
	/// The block's lines joined with `\n`.
	pub fn text(&self) -> String {
		self.lines.join("\n")
	}

	/// Whether `needle` occurs anywhere in the block's text.
	pub fn contains(&self, needle: &str) -> bool {
		self.text().contains(needle)
	}
}

/// Find the leading comment block of `content`.
///
/// Surrounding whitespace of the whole content is ignored, so the block may
/// start after blank lines. A block comment runs until the first line
/// containing the close token, or to the end of the content when it is never
/// closed. A line-comment run keeps blank lines and stops before the first
/// line that is neither blank nor a line comment.
pub fn detect<'a>(content: &'a str, syntax: &CommentSyntax) -> Option<CommentBlock<'a>> {
	let lines: Vec<&str> = content.trim().split('\n').collect();
	let first = lines.first().copied()?.trim();

	if first.starts_with(syntax.block_open.as_str()) {
		let mut block = Vec::new();
		for line in lines {
			block.push(line);
			if line.contains(syntax.block_close.as_str()) {
				break;
			}
		}

		return Some(CommentBlock {
			kind: CommentBlockKind::Block,
			lines: block,
		});
	}

	if first.starts_with(syntax.line.as_str()) {
		let block = lines
			.into_iter()
			.take_while(|line| {
				let trimmed = line.trim();
				trimmed.is_empty() || trimmed.starts_with(syntax.line.as_str())
			})
			.collect();

		return Some(CommentBlock {
			kind: CommentBlockKind::Line,
			lines: block,
		});
	}

	None
}
