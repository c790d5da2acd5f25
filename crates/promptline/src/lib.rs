//! Building blocks for the `zprompt` binary: working-directory
//! abbreviation, git branch lookup and the prompt expression builders
//! that assemble the final `PROMPT`/`RPROMPT` definition line.

pub mod builder;
pub mod color;
pub mod context;
pub mod git;
pub mod path;

pub use builder::{
    Builder,
    PromptExpr,
    render_prompt,
};
pub use color::ColorPair;
pub use context::RenderContext;
pub use git::{
    BranchStatus,
    current_branch,
};

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a render. Anything recoverable (an unreadable
/// repository, a missing branch) degrades to placeholder text instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory to display cannot be represented as UTF-8.
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },
}
