use std::path::Path;

use git2::{
    ErrorCode,
    Repository,
};
use tracing::warn;

/// Outcome of the branch lookup for a directory.
///
/// The lookup itself never fails: abnormal repository states degrade to
/// [`BranchStatus::Unreadable`] so a prompt is always produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchStatus {
    /// No repository rooted at the directory.
    Absent,
    /// A repository exists but its branch cannot be determined.
    Unreadable,
    /// Short name of the checked-out branch.
    Named(String),
}

/// Read the checked-out branch of the repository rooted at `dir`.
///
/// Only the directory itself is inspected, not its ancestors. A missing
/// repository is an expected outcome and is not logged; every other
/// failure to resolve a branch name is.
pub fn current_branch(dir: &Path) -> BranchStatus {
    if !dir.exists() {
        return BranchStatus::Absent;
    }

    let repo = match Repository::open(dir) {
        Ok(repo) => repo,
        Err(err) if err.code() == ErrorCode::NotFound => return BranchStatus::Absent,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "cannot open repository");
            return BranchStatus::Unreadable;
        },
    };

    let head = match repo.head() {
        Ok(head) => head,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "cannot resolve HEAD");
            return BranchStatus::Unreadable;
        },
    };

    if !head.is_branch() {
        warn!(path = %dir.display(), "HEAD is not attached to a branch");
        return BranchStatus::Unreadable;
    }

    match head.shorthand() {
        Some(name) => BranchStatus::Named(name.to_owned()),
        None => {
            warn!(path = %dir.display(), "branch name is not valid UTF-8");
            BranchStatus::Unreadable
        },
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn commit_empty(repo: &Repository, message: &str) -> git2::Oid {
        let mut index = repo.index().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = git2::Signature::now("Test User", "test@example.com").unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[]).unwrap()
    }

    #[test]
    fn test_plain_directory_is_absent() {
        let dir = TempDir::new().unwrap();
        assert_eq!(current_branch(dir.path()), BranchStatus::Absent);
    }

    #[test]
    fn test_missing_directory_is_absent() {
        let dir = TempDir::new().unwrap();
        assert_eq!(current_branch(&dir.path().join("missing")), BranchStatus::Absent);
    }

    #[test]
    fn test_checked_out_branch_is_named() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        commit_empty(&repo, "initial");

        let expected = repo.head().unwrap().shorthand().unwrap().to_owned();
        assert_eq!(current_branch(dir.path()), BranchStatus::Named(expected));
    }

    #[test]
    fn test_feature_branch_is_named() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let oid = commit_empty(&repo, "initial");
        let commit = repo.find_commit(oid).unwrap();
        repo.branch("feature/x", &commit, false).unwrap();
        repo.set_head("refs/heads/feature/x").unwrap();

        assert_eq!(
            current_branch(dir.path()),
            BranchStatus::Named("feature/x".to_owned())
        );
    }

    #[test]
    fn test_unborn_head_is_unreadable() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();

        assert_eq!(current_branch(dir.path()), BranchStatus::Unreadable);
    }

    #[test]
    fn test_detached_head_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let oid = commit_empty(&repo, "initial");
        repo.set_head_detached(oid).unwrap();

        assert_eq!(current_branch(dir.path()), BranchStatus::Unreadable);
    }
}
