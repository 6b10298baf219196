use assert_cmd::Command;
use std::path::Path;

/// Creates a `Command` for the `moodlog` binary with a clean environment
/// pointing at `db_path`.
pub fn moodlog_command(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moodlog").expect("moodlog binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    cmd.env("MOODLOG_DB", db_path).env("RUST_LOG", "warn");
    cmd
}
