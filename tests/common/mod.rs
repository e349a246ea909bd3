#![allow(dead_code)]

pub mod file;

pub const ORIGINAL_RULE: &str = "SecurityEvent
| where EventID == 4625
| summarize count() by Account
| where count_ > 5";

pub const UPDATED_RULE: &str = "SecurityEvent
| where EventID == 4625 or EventID == 4771
| summarize count() by Account
| where count_ > 10
| project Account, count_";

/// Joins expected output lines the way the binary prints them.
pub fn output_of(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
