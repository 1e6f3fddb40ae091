use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

use crate::OssifyError;
use crate::OssifyResult;
use crate::config::CommentSyntax;
use crate::config::Markers;
use crate::config::OssifyConfig;
use crate::excise::RemovedSpan;
use crate::excise::excise;
use crate::excise::should_remove_file;

/// What should happen to a single file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RemovalDecision {
	/// Nothing licensed was found; no I/O is performed.
	KeepUnmodified,
	/// The leading comment block carries the license marker.
	DeleteFile,
	/// At least one licensed snippet was excised.
	Rewrite {
		/// The full new file content.
		content: String,
		/// Number of spans removed.
		removed: usize,
		/// The removed spans, in original line numbers.
		spans: Vec<RemovedSpan>,
	},
}

impl RemovalDecision {
	/// The outcome this decision produces once applied.
	pub fn outcome(&self) -> FileOutcome {
		match self {
			Self::KeepUnmodified => FileOutcome::Unchanged,
			Self::DeleteFile => FileOutcome::Removed,
			Self::Rewrite { removed, .. } => FileOutcome::SnippetsRemoved { count: *removed },
		}
	}
}

/// The per-file result handed to reporting.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FileOutcome {
	/// The file was (or, in dry-run mode, would be) deleted.
	Removed,
	/// `count` snippets were (or would be) removed.
	SnippetsRemoved { count: usize },
	/// The file holds no licensed content.
	Unchanged,
	/// The file could not be read, or the decision could not be applied.
	Error { message: String },
}

/// Original and rewritten content of a file, kept for diff output.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ContentChange {
	pub original: String,
	pub updated: String,
}

/// The full report for one processed file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FileReport {
	pub file: PathBuf,
	pub outcome: FileOutcome,
	/// When applying the decision failed, the outcome that was intended.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub intended: Option<FileOutcome>,
	/// Snippet spans removed from the file.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub spans: Vec<RemovedSpan>,
	/// Populated for rewrites when [`RunOptions::capture_changes`] is set.
	#[serde(skip)]
	pub change: Option<ContentChange>,
}

impl FileReport {
	fn new(file: &Path, outcome: FileOutcome) -> Self {
		Self {
			file: file.to_path_buf(),
			outcome,
			intended: None,
			spans: Vec::new(),
			change: None,
		}
	}
}

/// Options controlling how decisions are applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
	/// Compute and report every decision without touching the filesystem.
	pub dry_run: bool,
	/// Keep the original and rewritten content of every rewrite in its
	/// report.
	pub capture_changes: bool,
}

/// Decide what to do with `content`. The whole-file gate runs first; snippet
/// excision only runs when the gate does not fire.
pub fn decide(content: &str, markers: &Markers, syntax: &CommentSyntax) -> RemovalDecision {
	if should_remove_file(content, markers, syntax) {
		return RemovalDecision::DeleteFile;
	}

	let excision = excise(content, markers);
	if !excision.is_changed() {
		return RemovalDecision::KeepUnmodified;
	}

	RemovalDecision::Rewrite {
		content: excision.content,
		removed: excision.removed,
		spans: excision.spans,
	}
}

/// Apply `decision` to the file at `path`. In dry-run mode nothing is
/// written or deleted and the returned outcome is the one a real run would
/// produce.
pub fn apply(path: &Path, decision: &RemovalDecision, dry_run: bool) -> OssifyResult<FileOutcome> {
	let outcome = decision.outcome();
	if dry_run {
		return Ok(outcome);
	}

	match decision {
		RemovalDecision::KeepUnmodified => {}
		RemovalDecision::DeleteFile => {
			std::fs::remove_file(path).map_err(|e| write_error(path, &e))?;
		}
		RemovalDecision::Rewrite { content, .. } => {
			std::fs::write(path, content).map_err(|e| write_error(path, &e))?;
		}
	}

	Ok(outcome)
}

/// Read, decide and apply for a single file. Failures never escape: they
/// become an [`FileOutcome::Error`] report so the caller can keep going.
pub fn process_file(path: &Path, config: &OssifyConfig, options: RunOptions) -> FileReport {
	let content = match read_source(path, config.scan.max_file_size) {
		Ok(content) => content,
		Err(error) => {
			tracing::warn!(file = %path.display(), %error, "skipping unreadable file");
			return FileReport::new(
				path,
				FileOutcome::Error {
					message: error.to_string(),
				},
			);
		}
	};

	process_source(path, content, config, options)
}

/// Decide and apply for `content` already read from `path`. A failure to
/// apply keeps the would-be outcome in [`FileReport::intended`].
pub fn process_source(
	path: &Path,
	content: String,
	config: &OssifyConfig,
	options: RunOptions,
) -> FileReport {
	let decision = decide(&content, &config.markers, &config.comments);
	tracing::debug!(file = %path.display(), outcome = ?decision.outcome(), "decided");

	let mut report = match apply(path, &decision, options.dry_run) {
		Ok(outcome) => FileReport::new(path, outcome),
		Err(error) => {
			tracing::warn!(file = %path.display(), %error, "failed to apply decision");
			let mut report = FileReport::new(
				path,
				FileOutcome::Error {
					message: error.to_string(),
				},
			);
			report.intended = Some(decision.outcome());
			report
		}
	};

	if let RemovalDecision::Rewrite {
		content: updated,
		spans,
		..
	} = decision
	{
		report.spans = spans;
		if options.capture_changes {
			report.change = Some(ContentChange {
				original: content,
				updated,
			});
		}
	}

	report
}

/// Read a file as UTF-8, refusing files larger than `max_file_size`.
pub fn read_source(path: &Path, max_file_size: u64) -> OssifyResult<String> {
	let metadata = std::fs::metadata(path).map_err(|e| read_error(path, &e))?;
	if metadata.len() > max_file_size {
		return Err(OssifyError::FileTooLarge {
			path: path.display().to_string(),
			size: metadata.len(),
			limit: max_file_size,
		});
	}

	std::fs::read_to_string(path).map_err(|e| read_error(path, &e))
}

fn read_error(path: &Path, error: &std::io::Error) -> OssifyError {
	OssifyError::Read {
		path: path.display().to_string(),
		reason: error.to_string(),
	}
}

fn write_error(path: &Path, error: &std::io::Error) -> OssifyError {
	OssifyError::Write {
		path: path.display().to_string(),
		reason: error.to_string(),
	}
}
