#![cfg(unix)]
mod common;
use common::{catalogue_cmd, stdout_of};
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const ECHO_ARGS: &str = "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\"; done\n";

fn install(dir: &Path, name: &str, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(name);
    fs::write(&path, script)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

/// A directory with a fake `curl` on it, and the PATH to use.
fn fake_curl(script: &str) -> Result<(TempDir, String), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    install(dir.path(), "curl", script)?;
    let path = format!(
        "{}:{}",
        dir.path().display(),
        std::env::var("PATH").unwrap_or_default()
    );
    Ok((dir, path))
}

fn run_with_path(path: &str, args: &[&str]) -> Command {
    let mut cmd = catalogue_cmd(args);
    cmd.env("PATH", path);
    cmd
}

#[test]
fn test_run_passes_tokens_to_curl() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl(ECHO_ARGS)?;
    let output = run_with_path(&path, &["run", "get-issue"]).output()?;
    let stdout = stdout_of(&output)?;
    let lines: Vec<&str> = stdout.trim_end().lines().collect();
    assert_eq!(
        lines,
        vec![
            "https://localhost/repos/octocat/hit/issues/42",
            "-H",
            "Accept: application/vnd.github.v3+json",
            "-H",
            "Custom: value",
            "-H",
            "X-Trace: 42",
            "--compress",
            "-XPOST",
        ]
    );
    Ok(())
}

#[test]
fn test_run_fills_placeholders_from_args() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl(ECHO_ARGS)?;
    let output = run_with_path(&path, &["run", "list-repos", "updated", "desc"]).output()?;
    let stdout = stdout_of(&output)?;
    assert!(stdout.contains("\n-G\n--data-urlencode\n'sort=updated'\n--data-urlencode\n'direction=desc'\n"));
    Ok(())
}

#[test]
fn test_run_prompts_for_missing_values() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl(ECHO_ARGS)?;
    let mut child = run_with_path(&path, &["run", "list-repos", "updated"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .ok_or("stdin not captured")?
        .write_all(b"asc\n")?;
    let stdout = stdout_of(&child.wait_with_output()?)?;
    assert!(stdout.starts_with("Enter {direction}: "));
    assert!(stdout.contains("'direction=asc'"));
    Ok(())
}

#[test]
fn test_run_endpoint_directly() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl(ECHO_ARGS)?;
    let output = run_with_path(&path, &["run", "issue", "7"]).output()?;
    let stdout = stdout_of(&output)?;
    // Globals bind {owner}; {number} comes from the argument.
    assert!(stdout.starts_with("https://localhost/repos/octocat/hit/issues/7\n"));
    assert!(stdout.contains("X-Trace: 7"));
    Ok(())
}

#[test]
fn test_run_prints_stderr_banner() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl("#!/bin/sh\necho body\necho progress >&2\n")?;
    let output = run_with_path(&path, &["run", "get-issue"]).output()?;
    let stdout = stdout_of(&output)?;
    assert_eq!(stdout, "body\n\n#### Stderr ####\nprogress\n\n");
    Ok(())
}

#[test]
fn test_run_curl_failure() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl("#!/bin/sh\necho 'could not resolve host' >&2\nexit 6\n")?;
    let output = run_with_path(&path, &["run", "get-issue"]).output()?;
    assert_eq!(output.status.code(), Some(6));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not resolve host"));
    Ok(())
}

#[test]
fn test_run_through_jq() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, path) = fake_curl("#!/bin/sh\necho '{\"id\": 42}'\n")?;
    install(dir.path(), "jq", "#!/bin/sh\necho filtered\ncat\n")?;
    let output = run_with_path(&path, &["run", "--jq", "get-issue"]).output()?;
    let stdout = stdout_of(&output)?;
    assert_eq!(stdout, "filtered\n{\"id\": 42}\n\n");
    Ok(())
}

#[test]
fn test_run_through_jq_with_large_response() -> Result<(), Box<dyn std::error::Error>> {
    let (dir, path) = fake_curl("#!/bin/sh\nhead -c 1200000 /dev/zero | tr '\\0' 'a'\n")?;
    install(dir.path(), "jq", "#!/bin/sh\ncat\n")?;
    let out_path = dir.path().join("stdout");
    let mut child = run_with_path(&path, &["run", "--jq", "get-issue"])
        .stdout(fs::File::create(&out_path)?)
        .stderr(Stdio::null())
        .spawn()?;

    let deadline = Instant::now() + Duration::from_secs(30);
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() > deadline {
            child.kill()?;
            return Err("hit run --jq did not finish".into());
        }
        thread::sleep(Duration::from_millis(50));
    };

    assert!(status.success());
    let stdout = fs::read_to_string(&out_path)?;
    assert_eq!(stdout.trim_end().len(), 1_200_000);
    assert!(stdout.trim_end().bytes().all(|b| b == b'a'));
    Ok(())
}

#[test]
fn test_run_unknown_name() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, path) = fake_curl(ECHO_ARGS)?;
    let output = run_with_path(&path, &["run", "nothing"]).output()?;
    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());
    Ok(())
}
