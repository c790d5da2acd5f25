use std::path::PathBuf;

use crate::color::ColorPair;

/// Color applied to the git branch segment of the prompt.
pub const GIT_BRANCH_COLOR: ColorPair = ColorPair::new(0, 42);

/// Inputs resolved once at startup and threaded through every builder.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub home: PathBuf,
    pub cwd: PathBuf,
    pub git_color: ColorPair,
}

impl RenderContext {
    pub fn new(home: PathBuf, cwd: PathBuf) -> Self {
        Self {
            home,
            cwd,
            git_color: GIT_BRANCH_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_branch_color() {
        let ctx = RenderContext::new(PathBuf::from("/home/alice"), PathBuf::from("/home/alice"));
        assert_eq!(ctx.git_color, ColorPair::new(0, 42));
    }
}
