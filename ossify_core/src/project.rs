use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use serde::Serialize;

use crate::OssifyError;
use crate::OssifyResult;
use crate::config::OssifyConfig;
use crate::config::ScanConfig;
use crate::engine::FileOutcome;
use crate::engine::FileReport;
use crate::engine::RunOptions;
use crate::engine::process_file;

/// Options for controlling which files are discovered under the root.
///
/// Use [`ScanOptions::from_config`] to construct from a [`ScanConfig`].
#[derive(Debug, Clone)]
pub struct ScanOptions {
	/// Glob patterns, matched against root-relative paths, selecting files.
	pub include_set: GlobSet,
	/// Gitignore-style patterns to exclude from scanning.
	pub exclude_patterns: Vec<String>,
	/// Whether to disable `.gitignore` integration.
	pub disable_gitignore: bool,
}

impl ScanOptions {
	/// Construct [`ScanOptions`] from the `[scan]` config section. Fails on
	/// an invalid `include` glob.
	pub fn from_config(config: &ScanConfig) -> OssifyResult<Self> {
		Ok(Self {
			include_set: build_glob_set(&config.include)?,
			exclude_patterns: config.exclude.clone(),
			disable_gitignore: config.disable_gitignore,
		})
	}
}

/// A per-file error recorded during a run.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FileError {
	pub file: PathBuf,
	pub message: String,
}

/// Aggregate counters and per-file results for one run. A single value is
/// threaded through the processing loop.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
	/// Whether the run was a dry run.
	pub dry_run: bool,
	/// Number of candidate files processed.
	pub files_scanned: usize,
	/// Files deleted because their leading comment carries the license.
	pub files_removed: usize,
	/// Files with at least one snippet removed.
	pub files_with_snippets_removed: usize,
	/// Total number of snippets removed across all files.
	pub snippets_removed: usize,
	/// One report per processed file, in processing order.
	pub reports: Vec<FileReport>,
	/// Per-file errors, including files that could not be discovered.
	pub errors: Vec<FileError>,
}

impl Summary {
	/// Fold a file report into the counters.
	pub fn record(&mut self, report: FileReport) {
		self.files_scanned += 1;

		match &report.outcome {
			FileOutcome::Removed => self.files_removed += 1,
			FileOutcome::SnippetsRemoved { count } => {
				self.files_with_snippets_removed += 1;
				self.snippets_removed += count;
			}
			FileOutcome::Unchanged => {}
			FileOutcome::Error { message } => {
				self.errors.push(FileError {
					file: report.file.clone(),
					message: message.clone(),
				});
			}
		}

		self.reports.push(report);
	}

	/// Returns true if no per-file errors were recorded.
	pub fn is_ok(&self) -> bool {
		self.errors.is_empty()
	}

	/// Reports of files that were (or would be) deleted or rewritten.
	pub fn changed(&self) -> impl Iterator<Item = &FileReport> {
		self.reports.iter().filter(|report| {
			matches!(
				report.outcome,
				FileOutcome::Removed | FileOutcome::SnippetsRemoved { .. }
			)
		})
	}
}

/// Process every candidate file under `root`, one at a time.
///
/// Only an invalid root or an invalid scan pattern aborts the run. Every
/// other failure is recorded in the returned [`Summary`] and processing
/// continues with the next file.
pub fn run(root: &Path, config: &OssifyConfig, options: RunOptions) -> OssifyResult<Summary> {
	if !root.is_dir() {
		return Err(OssifyError::InvalidRoot {
			path: root.display().to_string(),
		});
	}

	let mut summary = Summary {
		dry_run: options.dry_run,
		..Summary::default()
	};

	let scan_options = ScanOptions::from_config(&config.scan)?;
	let files = collect_files(root, &scan_options, &mut summary.errors)?;
	tracing::debug!(root = %root.display(), count = files.len(), "collected candidate files");

	for file in files {
		let report = process_file(&file, config, options);
		summary.record(report);
	}

	tracing::info!(
		dry_run = summary.dry_run,
		files_scanned = summary.files_scanned,
		files_removed = summary.files_removed,
		snippets_removed = summary.snippets_removed,
		errors = summary.errors.len(),
		"run complete"
	);

	Ok(summary)
}

/// Build a `GlobSet` from the `[scan] include` patterns.
fn build_glob_set(patterns: &[String]) -> OssifyResult<GlobSet> {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		let glob = Glob::new(pattern).map_err(|e| {
			OssifyError::ConfigParse(format!("invalid include pattern `{pattern}`: {e}"))
		})?;
		builder.add(glob);
	}
	builder
		.build()
		.map_err(|e| OssifyError::ConfigParse(format!("failed to build include rules: {e}")))
}

/// Build a `Gitignore` matcher from the `[scan] exclude` patterns.
fn build_exclude_matcher(root: &Path, patterns: &[String]) -> OssifyResult<Gitignore> {
	let mut builder = GitignoreBuilder::new(root);
	for pattern in patterns {
		builder.add_line(None, pattern).map_err(|e| {
			OssifyError::ConfigParse(format!("invalid exclude pattern `{pattern}`: {e}"))
		})?;
	}
	builder
		.build()
		.map_err(|e| OssifyError::ConfigParse(format!("failed to build exclude rules: {e}")))
}

/// Build a `Gitignore` matcher from the root's `.gitignore` file (if any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}

/// Collect candidate files under `root`, sorted for deterministic output.
///
/// Directories or entries that cannot be read are pushed onto `errors` and
/// skipped.
pub fn collect_files(
	root: &Path,
	options: &ScanOptions,
	errors: &mut Vec<FileError>,
) -> OssifyResult<Vec<PathBuf>> {
	let gitignore = if options.disable_gitignore {
		Gitignore::empty()
	} else {
		build_gitignore(root)
	};
	let custom_exclude = build_exclude_matcher(root, &options.exclude_patterns)?;

	let mut walker = Walker {
		root,
		include_set: &options.include_set,
		gitignore: &gitignore,
		custom_exclude: &custom_exclude,
		visited_dirs: HashSet::new(),
		ancestors: Vec::new(),
		files: Vec::new(),
		errors,
	};
	walker.walk_dir(root);

	let mut files = walker.files;
	files.sort();
	Ok(files)
}

struct Walker<'a> {
	root: &'a Path,
	include_set: &'a GlobSet,
	gitignore: &'a Gitignore,
	custom_exclude: &'a Gitignore,
	visited_dirs: HashSet<PathBuf>,
	/// Canonical paths of the directories on the current walk path.
	ancestors: Vec<PathBuf>,
	files: Vec<PathBuf>,
	errors: &'a mut Vec<FileError>,
}

impl Walker<'_> {
	fn record(&mut self, path: &Path, error: &OssifyError) {
		tracing::warn!(path = %path.display(), %error, "skipping path during discovery");
		self.errors.push(FileError {
			file: path.to_path_buf(),
			message: error.to_string(),
		});
	}

	fn walk_dir(&mut self, dir: &Path) {
		let canonical = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
		if self.ancestors.contains(&canonical) {
			let error = OssifyError::SymlinkCycle {
				path: dir.display().to_string(),
			};
			self.record(dir, &error);
			return;
		}
		if !self.visited_dirs.insert(canonical.clone()) {
			tracing::debug!(path = %dir.display(), "directory already visited through another path");
			return;
		}

		self.ancestors.push(canonical);
		self.walk_entries(dir);
		self.ancestors.pop();
	}

	fn walk_entries(&mut self, dir: &Path) {
		let entries = match std::fs::read_dir(dir) {
			Ok(entries) => entries,
			Err(e) => {
				self.record(dir, &OssifyError::Io(e));
				return;
			}
		};

		for entry in entries {
			let path = match entry {
				Ok(entry) => entry.path(),
				Err(e) => {
					self.record(dir, &OssifyError::Io(e));
					continue;
				}
			};

			let is_dir = path.is_dir();

			if self.gitignore.matched(&path, is_dir).is_ignore()
				|| self.custom_exclude.matched(&path, is_dir).is_ignore()
			{
				continue;
			}

			if is_dir {
				self.walk_dir(&path);
			} else if self.is_candidate(&path) {
				self.files.push(path);
			}
		}
	}

	fn is_candidate(&self, path: &Path) -> bool {
		path.is_file()
			&& path
				.strip_prefix(self.root)
				.is_ok_and(|rel_path| self.include_set.is_match(rel_path))
	}
}
