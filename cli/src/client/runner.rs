use crate::core::error::HitError;
use crate::core::logger::Logger;
use std::io::{self, BufRead, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

pub const CURL: &str = "curl";
pub const JQ: &str = "jq";

/// Runs a fully materialized curl command.
pub trait CommandRunner {
    fn run(&self, command: &[String]) -> Result<(), HitError>;
}

/// Spawns `curl`, optionally piping its output through `jq`, and prints what
/// came back.
pub struct CurlRunner {
    pub jq: bool,
}

impl CurlRunner {
    pub fn new(jq: bool) -> Self {
        Self { jq }
    }

    fn run_plain(&self, command: &[String]) -> Result<Output, HitError> {
        Command::new(CURL)
            .args(command)
            .output()
            .map_err(|e| HitError::Execution(format!("Failed to start {CURL}: {e}")))
    }

    fn run_piped(&self, command: &[String]) -> Result<Output, HitError> {
        let mut curl = Command::new(CURL)
            .args(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| HitError::Execution(format!("Failed to start {CURL}: {e}")))?;

        let curl_stdout = curl
            .stdout
            .take()
            .ok_or_else(|| HitError::Execution(format!("{CURL} stdout was not captured")))?;
        let jq = match Command::new(JQ)
            .stdin(Stdio::from(curl_stdout))
            .stdout(Stdio::piped())
            .spawn()
        {
            Ok(jq) => jq,
            Err(e) => {
                let _ = curl.kill();
                let _ = curl.wait();
                return Err(HitError::Execution(format!("Failed to start {JQ}: {e}")));
            }
        };

        // jq's output is drained while curl still writes into it.
        let jq_reader = thread::spawn(move || jq.wait_with_output());
        let curl_output = curl.wait_with_output();
        let jq_output = jq_reader
            .join()
            .map_err(|_| HitError::Execution(format!("{JQ} reader panicked")))?;

        let curl_output = curl_output?;
        check_status(CURL, &curl_output)?;
        let jq_output = jq_output?;
        check_status(JQ, &jq_output)?;

        Ok(Output {
            status: jq_output.status,
            stdout: jq_output.stdout,
            stderr: curl_output.stderr,
        })
    }
}

impl CommandRunner for CurlRunner {
    fn run(&self, command: &[String]) -> Result<(), HitError> {
        Logger::debug(&format!("Executing {CURL} {}", command.join(" ")));

        let output = if self.jq {
            self.run_piped(command)?
        } else {
            let output = self.run_plain(command)?;
            check_status(CURL, &output)?;
            output
        };

        println!("{}", String::from_utf8_lossy(&output.stdout));
        if !output.stderr.is_empty() {
            println!("#### Stderr ####");
            println!("{}", String::from_utf8_lossy(&output.stderr));
        }
        Ok(())
    }
}

fn check_status(program: &str, output: &Output) -> Result<(), HitError> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(HitError::Execution(format!(
        "{program} exited with {}: {}",
        output.status,
        stderr.trim()
    )))
}

/// Asks on the terminal for each missing placeholder value.
pub struct PromptValueSource;

impl crate::render::ValueSource for PromptValueSource {
    fn read(&self, placeholder: &str) -> String {
        print!("Enter {placeholder}: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut line) {
            Logger::debug(&format!("Failed to read {placeholder}: {e}"));
        }
        line.trim().to_string()
    }
}
