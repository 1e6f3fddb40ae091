//! `ossify_core` removes proprietary code from a source tree. Files whose
//! leading comment block carries the `SPDX-License-Identifier:
//! LicenseRef-SEL` marker are deleted outright, and snippets fenced by
//! `// SPDX-SnippetBegin` / `// SPDX-SnippetEnd` that carry the marker are
//! cut out of mixed files.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source file
//!   → Comment-block detector (finds the leading `/* */` block or `//` run)
//!   → Whole-file gate (license marker in that block → delete the file)
//!   → Snippet excision (drop every licensed begin/end span)
//!   → Mutator (delete, rewrite, or leave alone; nothing under dry run)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Marker literals, comment tokens and file selection, loaded
//!   from `ossify.toml`.
//! - [`comment_block`]: Leading comment block detection.
//! - [`excise`]: The whole-file gate and the snippet excision engine.
//! - [`project`]: File discovery and the sequential driver that accumulates
//!   a [`Summary`].
//!
//! ## Limitations
//!
//! Snippet spans do not nest. The first end marker after a begin marker
//! closes the span, whatever begin markers appear in between. Rewrites are
//! plain overwrites and are not atomic, and an interrupted run leaves the
//! files processed so far modified.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ossify_core::OssifyConfig;
//! use ossify_core::RunOptions;
//! use ossify_core::project::run;
//! use std::path::Path;
//!
//! let root = Path::new("crates");
//! let config = OssifyConfig::load_or_default(root).unwrap();
//! let options = RunOptions {
//!     dry_run: true,
//!     ..RunOptions::default()
//! };
//!
//! let summary = run(root, &config, options).unwrap();
//! println!(
//!     "{} file(s) and {} snippet(s) would be removed",
//!     summary.files_removed, summary.snippets_removed
//! );
//! ```

pub use comment_block::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use excise::*;
pub use project::*;

pub mod comment_block;
pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod excise;
pub mod project;

#[cfg(test)]
mod __fixtures;
