use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum OssifyError {
	#[error(transparent)]
	#[diagnostic(code(ossify::io_error))]
	Io(#[from] std::io::Error),

	#[error("`{path}` is not a valid directory")]
	#[diagnostic(
		code(ossify::invalid_root),
		help("pass the path of an existing source directory, e.g. `ossify ./crates`")
	)]
	InvalidRoot { path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(ossify::config_parse),
		help("check that ossify.toml is valid TOML with [markers], [comments] and/or [scan] sections")
	)]
	ConfigParse(String),

	#[error("failed to read `{path}`: {reason}")]
	#[diagnostic(code(ossify::read_error))]
	Read { path: String, reason: String },

	#[error("failed to write `{path}`: {reason}")]
	#[diagnostic(code(ossify::write_error))]
	Write { path: String, reason: String },

	#[error("file too large: `{path}` is {size} bytes (limit: {limit} bytes)")]
	#[diagnostic(
		code(ossify::file_too_large),
		help("increase `max_file_size` under [scan] in ossify.toml or exclude this file")
	)]
	FileTooLarge { path: String, size: u64, limit: u64 },

	#[error("symlink cycle detected at: `{path}`")]
	#[diagnostic(
		code(ossify::symlink_cycle),
		help("remove the circular symlink or exclude this path")
	)]
	SymlinkCycle { path: String },
}

pub type OssifyResult<T> = Result<T, OssifyError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
