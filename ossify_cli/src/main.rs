use std::path::Path;
use std::process;

use clap::Parser;
use ossify_cli::OssifyCli;
use ossify_cli::OutputFormat;
use ossify_core::FileOutcome;
use ossify_core::FileReport;
use ossify_core::OssifyConfig;
use ossify_core::RunOptions;
use ossify_core::Summary;
use owo_colors::OwoColorize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = OssifyCli::parse();

	// Respect NO_COLOR env var, --no-color flag and non-terminal output.
	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stdout).is_some();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	match run(&args) {
		Ok(summary) if summary.is_ok() => {}
		Ok(_) => process::exit(1),
		Err(e) => {
			match e.downcast::<ossify_core::OssifyError>() {
				Ok(ossify_err) => {
					let report: miette::Report = (*ossify_err).into();
					eprintln!("{report:?}");
				}
				Err(e) => {
					eprintln!("{} {e}", colored!("error:", red));
				}
			}
			process::exit(2);
		}
	}
}

/// Log to stderr. `OSSIFY_LOG` takes an `EnvFilter` directive and overrides
/// the level picked from `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose {
		"ossify_core=debug"
	} else {
		"ossify_core=warn"
	};
	let filter =
		EnvFilter::try_from_env("OSSIFY_LOG").unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_ansi(use_color)
		.with_writer(std::io::stderr)
		.init();
}

fn load_config(args: &OssifyCli) -> Result<OssifyConfig, Box<dyn std::error::Error>> {
	let config = match &args.config {
		Some(path) => OssifyConfig::load_from(path)?,
		None => OssifyConfig::load_or_default(&args.directory)?,
	};
	Ok(config)
}

fn run(args: &OssifyCli) -> Result<Summary, Box<dyn std::error::Error>> {
	let root = &args.directory;
	let config = load_config(args)?;
	let options = RunOptions {
		dry_run: args.dry_run,
		capture_changes: args.diff,
	};

	if args.format == OutputFormat::Text {
		println!("Processing files in: {}", root.display());
		if args.dry_run {
			println!("{}", colored!("DRY RUN MODE - No changes will be made", yellow));
		}
		println!();
	}

	let summary = ossify_core::run(root, &config, options)?;

	match args.format {
		OutputFormat::Json => {
			println!("{}", serde_json::to_string_pretty(&summary)?);
		}
		OutputFormat::Text => print_text(args, root, &summary),
	}

	Ok(summary)
}

fn print_text(args: &OssifyCli, root: &Path, summary: &Summary) {
	if summary.files_scanned == 0 && summary.errors.is_empty() {
		println!("No matching files found in the specified directory");
		return;
	}

	println!("Found {} file(s)", summary.files_scanned);
	println!();

	let action_text = if summary.dry_run {
		"Would remove"
	} else {
		"Removed"
	};

	for report in summary.changed() {
		let rel = make_relative(&report.file, root);

		if args.verbose || summary.dry_run {
			match report.outcome {
				FileOutcome::Removed => println!("{action_text} file: {rel}"),
				FileOutcome::SnippetsRemoved { count } => {
					println!("{action_text} {count} snippet(s) from: {rel}");
				}
				FileOutcome::Unchanged | FileOutcome::Error { .. } => {}
			}
		}

		if args.verbose {
			print_spans(report);
		}

		if let Some(change) = &report.change {
			print_diff(&change.original, &change.updated);
		}
	}

	print_summary(root, summary);
}

fn print_spans(report: &FileReport) {
	for span in &report.spans {
		let suffix = if span.terminated {
			""
		} else {
			" (unterminated)"
		};
		println!("    lines {}-{}{suffix}", span.start_line, span.end_line);
	}
}

fn print_summary(root: &Path, summary: &Summary) {
	let verb = if summary.dry_run { "would be" } else { "were" };

	println!();
	println!("{}", colored!("Summary:", bold));
	println!("- {} files {verb} completely removed", summary.files_removed);
	println!(
		"- {} proprietary snippets {verb} removed from {} files",
		summary.snippets_removed, summary.files_with_snippets_removed
	);

	if !summary.errors.is_empty() {
		println!(
			"- {}",
			colored!(format!("{} errors occurred:", summary.errors.len()), red)
		);
		for error in &summary.errors {
			println!("  {}: {}", make_relative(&error.file, root), error.message);
		}
		for report in &summary.reports {
			if let Some(intended) = &report.intended {
				println!(
					"  {} was meant to be {}",
					make_relative(&report.file, root),
					describe(intended)
				);
			}
		}
	}

	if summary.dry_run {
		println!("\nRun without --dry-run to apply changes");
	}
}

fn describe(outcome: &FileOutcome) -> String {
	match outcome {
		FileOutcome::Removed => "removed".to_string(),
		FileOutcome::SnippetsRemoved { count } => format!("stripped of {count} snippet(s)"),
		FileOutcome::Unchanged => "left unchanged".to_string(),
		FileOutcome::Error { message } => message.clone(),
	}
}

/// Print a unified diff between two strings, colorized.
fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				print!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				print!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				print!("   {change}");
			}
		}
	}
	println!();
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
