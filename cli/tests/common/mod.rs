#![allow(dead_code)]
use serde_json::Value;
use std::process::{Command, Output};

pub const CATALOGUE_DIR: &str = "tests/fixtures/catalogue";
pub const CATALOGUE_FILE: &str = "api-requests";

pub fn hit_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hit"))
}

/// `hit -d <catalogue> -f api-requests <args>`
pub fn catalogue_cmd(args: &[&str]) -> Command {
    let mut cmd = hit_cmd();
    cmd.args(["-d", CATALOGUE_DIR, "-f", CATALOGUE_FILE]).args(args);
    cmd
}

pub fn stdout_of(output: &Output) -> Result<String, Box<dyn std::error::Error>> {
    if !output.status.success() {
        return Err(format!(
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub fn json_subset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Object(exp_map), Value::Object(act_map)) => exp_map.iter().all(|(k, v)| {
            act_map
                .get(k)
                .map(|act_v| json_subset(v, act_v))
                .unwrap_or(false)
        }),
        (Value::Array(exp_arr), Value::Array(act_arr)) => {
            exp_arr.len() == act_arr.len()
                && exp_arr
                    .iter()
                    .zip(act_arr.iter())
                    .all(|(e, a)| json_subset(e, a))
        }
        (Value::String(s), _) if s == "{{*}}" => true,
        _ => expected == actual,
    }
}
