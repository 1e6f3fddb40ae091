use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Remove proprietary-licensed code from a source tree.",
	long_about = "ossify removes code licensed under `LicenseRef-SEL` from a source tree.\n\nFiles \
	              whose leading comment block carries `SPDX-License-Identifier: LicenseRef-SEL` \
	              are deleted. Snippets fenced by `// SPDX-SnippetBegin` and `// \
	              SPDX-SnippetEnd` that carry the same identifier are cut out of the files that \
	              contain them.\n\nQuick start:\n  ossify crates --dry-run  Preview what would \
	              be removed\n  ossify crates            Remove it"
)]
pub struct OssifyCli {
	/// Directory containing the source tree to process.
	pub directory: PathBuf,

	/// Show what would be done without deleting or rewriting any file.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Show detailed output for each file.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Print a unified diff for every file whose snippets are (or would be)
	/// removed.
	#[arg(long, default_value_t = false)]
	pub diff: bool,

	/// Output format for the run summary. Use `text` for human-readable
	/// output or `json` for programmatic consumption.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Path to a config file. Defaults to `ossify.toml`, `.ossify.toml` or
	/// `.config/ossify.toml` in the processed directory.
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors and formatting.
	Text,
	/// JSON output for programmatic consumption. Includes every file report
	/// and the error list.
	Json,
}
