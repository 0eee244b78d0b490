//! Tests for the `planbook list` and `planbook inspect` commands

use std::path::PathBuf;
use std::process::Command;

fn planbook_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_planbook"))
}

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(planbook_binary())
        .args(args)
        .output()
        .expect("Failed to execute command");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
    )
}

#[test]
fn list_names_every_report() {
    let (ok, stdout) = run(&["list"]);
    assert!(ok);
    for id in ["clean-plan", "dingtalk", "paike"] {
        assert!(stdout.contains(id), "list should mention {}", id);
    }
    assert!(stdout.contains("sheets: 项目排期, 风险控制, 资源配置, 技术方案"));
}

#[test]
fn inspect_text_shows_merged_ranges() {
    let (ok, stdout) = run(&["inspect", "clean-plan"]);
    assert!(ok);
    assert!(stdout.contains("Merged:"));
    assert!(stdout.contains("A5:A6"));
    assert!(stdout.contains("A7:A8"));
    assert!(stdout.contains("A9:A10"));
}

#[test]
fn inspect_json_is_parseable() {
    let (ok, stdout) = run(&["inspect", "paike", "--format", "json"]);
    assert!(ok);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["id"], "paike");
    assert_eq!(value["sheets"][0], "项目排期");

    let spans = value["table"]["spans"].as_array().unwrap();
    let rows: Vec<(u64, u64)> = spans
        .iter()
        .map(|s| {
            (
                s["start_row"].as_u64().unwrap(),
                s["end_row"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(rows, vec![(0, 2), (3, 4), (6, 7), (8, 11)]);
    assert_eq!(spans[2]["label"], "第二阶段（续）\n智能匹配与方案草案生成");
    assert!(spans.iter().all(|span| span["label"] != "国庆假期"));
    assert_eq!(value["table"]["grid"].as_array().unwrap().len(), 13);
    assert_eq!(value["table"]["columns"][0], "group");
}

#[test]
fn inspect_dingtalk_has_no_merges() {
    let (ok, stdout) = run(&["inspect", "dingtalk"]);
    assert!(ok);
    assert!(stdout.ends_with("Merged: none\n"));
}

#[test]
fn no_subcommand_prints_banner() {
    let (ok, stdout) = run(&[]);
    assert!(ok);
    assert!(stdout.contains("planbook"));
    assert!(stdout.contains("--help"));
}
