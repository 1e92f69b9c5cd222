use rebase_ops::Outcome;
use serde::Serialize;

#[derive(Serialize)]
struct SubmitOutput<'a> {
    task: &'a str,
    tx_hash: String,
}

#[derive(Serialize)]
struct ReadOutput<'a> {
    label: &'a str,
    value: &'a str,
}

/// Banner for a rebase run, shown only once both prices look like base-10
/// integers. Malformed arguments are left for validation to report instead
/// of being echoed back as if they were accepted.
pub fn rebase_banner(task: &str, args: &[String]) -> Option<String> {
    if task != "rebase" || args.len() != 2 {
        return None;
    }
    let integral = |arg: &String| !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit());
    if args.iter().all(integral) {
        Some(format!("Rebasing from {} to {}", args[0], args[1]))
    } else {
        None
    }
}

pub fn print_outcome(outcome: &Outcome, json: bool) {
    match outcome {
        Outcome::Submitted { task, tx_hash } => {
            if json {
                let out = SubmitOutput {
                    task,
                    tx_hash: tx_hash.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&out).unwrap());
            } else {
                println!("TX Hash: {}", tx_hash);
            }
        }
        Outcome::Read { label, value } => {
            if json {
                let out = ReadOutput { label, value };
                println!("{}", serde_json::to_string_pretty(&out).unwrap());
            } else {
                println!("{}: {}", label, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebase_banner_shows_both_prices() {
        let banner = rebase_banner("rebase", &["105".to_string(), "110".to_string()]);
        assert_eq!(banner.as_deref(), Some("Rebasing from 105 to 110"));
    }

    #[test]
    fn test_rebase_banner_skips_malformed_prices() {
        assert_eq!(
            rebase_banner("rebase", &["105".to_string(), "notanumber".to_string()]),
            None
        );
        assert_eq!(
            rebase_banner("rebase", &["-1".to_string(), "110".to_string()]),
            None
        );
        assert_eq!(rebase_banner("rebase", &["105".to_string()]), None);
        assert_eq!(
            rebase_banner("transfer", &["105".to_string(), "110".to_string()]),
            None
        );
    }

    #[test]
    fn test_submit_output_json_format() {
        let out = SubmitOutput {
            task: "rebase",
            tx_hash: "0xabc".to_string(),
        };
        let json = serde_json::to_string_pretty(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["task"], "rebase");
        assert_eq!(parsed["tx_hash"], "0xabc");
    }

    #[test]
    fn test_read_output_json_format() {
        let out = ReadOutput {
            label: "Total supply",
            value: "50000000000000000",
        };
        let json = serde_json::to_string_pretty(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["label"], "Total supply");
        assert_eq!(parsed["value"], "50000000000000000");
    }
}
