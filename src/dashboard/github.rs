//! GitHub link construction from the data-directory naming convention.
//!
//! Run artifacts live in a repo under one directory per branch; branch names
//! are sanitized for filesystem use and desanitized back into real branch
//! names when building URLs.

/// Branch name to filesystem-safe directory name: `/` becomes `__`.
pub fn sanitize_branch(branch: &str) -> String {
    branch.replace('/', "__")
}

/// Inverse of `sanitize_branch`.
pub fn desanitize_branch(sanitized: &str) -> String {
    sanitized.replace("__", "/")
}

/// Link to the branch's tree in the artifacts repo.
pub fn branch_tree_url(repo: &str, sanitized_branch: &str) -> String {
    format!(
        "https://github.com/{}/tree/{}",
        repo,
        desanitize_branch(sanitized_branch)
    )
}

/// Link to one run's log directory within the branch tree.
pub fn run_logs_url(repo: &str, sanitized_branch: &str, agent_id: &str, run: u32) -> String {
    format!(
        "https://github.com/{}/tree/{}/{}/run_{}/logs",
        repo,
        desanitize_branch(sanitized_branch),
        agent_id,
        run
    )
}
