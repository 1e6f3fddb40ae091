use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::OssifyError;
use crate::OssifyResult;

/// License identifier that marks content as proprietary when it appears in a
/// file's leading comment block or inside a snippet.
pub const LICENSE_MARKER: &str = "SPDX-License-Identifier: LicenseRef-SEL";

/// Substring that opens a snippet span.
pub const SNIPPET_BEGIN_MARKER: &str = "// SPDX-SnippetBegin";

/// Substring that closes a snippet span.
pub const SNIPPET_END_MARKER: &str = "// SPDX-SnippetEnd";

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Glob used to select files when no `[scan] include` is configured.
pub const DEFAULT_INCLUDE_PATTERN: &str = "**/*.rs";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["ossify.toml", ".ossify.toml", ".config/ossify.toml"];

/// The three literal substrings the excision engine looks for.
///
/// ```toml
/// [markers]
/// license = "SPDX-License-Identifier: LicenseRef-SEL"
/// begin = "// SPDX-SnippetBegin"
/// end = "// SPDX-SnippetEnd"
/// ```
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Markers {
	/// Marks a comment block or snippet as proprietary.
	pub license: String,
	/// Opens a snippet span.
	pub begin: String,
	/// Closes a snippet span.
	pub end: String,
}

impl Default for Markers {
	fn default() -> Self {
		Self {
			license: LICENSE_MARKER.to_string(),
			begin: SNIPPET_BEGIN_MARKER.to_string(),
			end: SNIPPET_END_MARKER.to_string(),
		}
	}
}

/// Comment tokens used to recognise a file's leading comment block.
///
/// ```toml
/// [comments]
/// block_open = "/*"
/// block_close = "*/"
/// line = "//"
/// ```
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct CommentSyntax {
	pub block_open: String,
	pub block_close: String,
	pub line: String,
}

impl Default for CommentSyntax {
	fn default() -> Self {
		Self {
			block_open: "/*".to_string(),
			block_close: "*/".to_string(),
			line: "//".to_string(),
		}
	}
}

/// File selection settings.
///
/// ```toml
/// [scan]
/// include = ["**/*.rs"]
/// exclude = ["vendor/", "generated/"]
/// disable_gitignore = false
/// max_file_size = 10485760
/// ```
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
	/// Glob patterns, relative to the root, selecting candidate files.
	pub include: Vec<String>,
	/// Gitignore-style patterns excluded from scanning.
	pub exclude: Vec<String>,
	/// When true, the root `.gitignore` is not consulted.
	pub disable_gitignore: bool,
	/// Files larger than this are reported as errors and left untouched.
	pub max_file_size: u64,
}

impl Default for ScanConfig {
	fn default() -> Self {
		Self {
			include: vec![DEFAULT_INCLUDE_PATTERN.to_string()],
			exclude: Vec::new(),
			disable_gitignore: false,
			max_file_size: DEFAULT_MAX_FILE_SIZE,
		}
	}
}

/// Configuration loaded from an `ossify.toml` file. Every section is
/// optional; a missing file is equivalent to an empty one.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
pub struct OssifyConfig {
	#[serde(default)]
	pub markers: Markers,
	#[serde(default)]
	pub comments: CommentSyntax,
	#[serde(default)]
	pub scan: ScanConfig,
}

impl OssifyConfig {
	/// Resolve the first config file path that exists at `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> OssifyResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		Self::load_from(&config_path).map(Some)
	}

	/// Load and validate the config stored at `path`.
	pub fn load_from(path: &Path) -> OssifyResult<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::parse(&content)
	}

	/// Load the discovered config at `root` or fall back to the defaults.
	pub fn load_or_default(root: &Path) -> OssifyResult<Self> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	/// Parse and validate config text.
	pub fn parse(content: &str) -> OssifyResult<Self> {
		let config: Self =
			toml::from_str(content).map_err(|e| OssifyError::ConfigParse(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Reject empty tokens. An empty marker or comment token is a substring
	/// of every line.
	pub fn validate(&self) -> OssifyResult<()> {
		let tokens = [
			("markers.license", &self.markers.license),
			("markers.begin", &self.markers.begin),
			("markers.end", &self.markers.end),
			("comments.block_open", &self.comments.block_open),
			("comments.block_close", &self.comments.block_close),
			("comments.line", &self.comments.line),
		];

		for (key, value) in tokens {
			if value.is_empty() {
				return Err(OssifyError::ConfigParse(format!("`{key}` must not be empty")));
			}
		}

		Ok(())
	}
}
