use crate::Result;
use crate::context::RenderContext;
use crate::git::{
    self,
    BranchStatus,
};
use crate::path;

/// One string-producing step of the prompt pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builder {
    /// `%n@%m`, expanded to user and host by zsh itself.
    UserHost,
    /// Abbreviated working directory.
    WorkingDir,
    /// Colorized branch name, or a placeholder outside a repository.
    GitBranch,
    /// `%%`, expanded to the prompt mark by zsh itself.
    PromptMark,
}

impl Builder {
    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        match self {
            Self::UserHost => Ok("%n@%m".to_owned()),
            Self::WorkingDir => path::abbreviate(&ctx.cwd, &ctx.home),
            Self::GitBranch => Ok(branch_segment(ctx)),
            Self::PromptMark => Ok("%%".to_owned()),
        }
    }
}

fn branch_segment(ctx: &RenderContext) -> String {
    match git::current_branch(&ctx.cwd) {
        BranchStatus::Named(name) => ctx.git_color.paint(&name),
        BranchStatus::Unreadable => ctx.git_color.paint("?"),
        BranchStatus::Absent => "no git".to_owned(),
    }
}

/// A shell variable assignment assembled from an ordered list of builders.
#[derive(Debug, Clone)]
pub struct PromptExpr {
    name: &'static str,
    builders: Vec<Builder>,
}

impl PromptExpr {
    /// The left-hand prompt: user and host, working directory, git
    /// branch, prompt mark.
    pub fn primary() -> Self {
        Self {
            name: "PROMPT",
            builders: vec![
                Builder::UserHost,
                Builder::WorkingDir,
                Builder::GitBranch,
                Builder::PromptMark,
            ],
        }
    }

    /// The right-hand prompt, kept empty to clear any inherited value.
    pub fn secondary() -> Self {
        Self {
            name: "RPROMPT",
            builders: Vec::new(),
        }
    }

    /// Render `NAME='segments'`. Segments are separated by single spaces
    /// and a non-empty body gets one trailing space before the closing
    /// quote. A failing builder aborts the whole render.
    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        let mut segments = Vec::with_capacity(self.builders.len());
        for builder in &self.builders {
            segments.push(builder.render(ctx)?);
        }

        let mut body = segments.join(" ");
        if !body.is_empty() {
            body.push(' ');
        }
        Ok(format!("{}='{}'", self.name, body))
    }
}

/// The full definition line: primary and secondary expressions separated
/// by a single space, ready to be `eval`ed by the shell.
pub fn render_prompt(ctx: &RenderContext) -> Result<String> {
    let primary = PromptExpr::primary().render(ctx)?;
    let secondary = PromptExpr::secondary().render(ctx)?;
    Ok(format!("{primary} {secondary}"))
}
