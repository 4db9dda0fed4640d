// Inputs captured from real shell sessions, with the slices people took of them

/// `git status` output with untracked files
pub const GIT_STATUS: &str = "On branch dev-longcontexteval
Your branch is up to date with 'origin/dev-longcontexteval'.

Untracked files:
  (use \"git add <file>...\" to include in what will be committed)
\tbert24-base-v2.yaml
\tr_first50000.json
\tsrc/evals/items2000.json
\tsrc/evals/rewritten10.json

nothing added to commit but untracked files present (use \"git add\" to track)
";

/// Untracked files from GIT_STATUS, row spec `5:-2`, column spec `:`
pub const GIT_STATUS_UNTRACKED: &str = "bert24-base-v2.yaml
r_first50000.json
src/evals/items2000.json
src/evals/rewritten10.json
";

/// A long directory listing with padded columns
pub const LISTING: &str = ".rw-r--r-- 0 root      2024-11-14 20:59 .localized
drwxr-x--- - alexis    2024-11-25 16:29 alexis
drwxr-xr-x - oldalexis 2023-09-17 14:13 alexis_1
drwxrwxrwt - root      2024-11-21 12:25 Shared
";
