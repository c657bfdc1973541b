use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for roadtrip with a clean environment
pub fn roadtrip() -> Command {
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env_remove("ROADTRIP_MAP").env_remove("ROADTRIP_LOG");
    cmd
}

/// Write a small map file: A-B-C in a line plus an isolated D
#[allow(dead_code)]
pub fn write_line_map(dir: &Path) -> PathBuf {
    let path = dir.join("line.toml");
    fs::write(
        &path,
        r#"
[[city]]
name = "A"
roads = [{ to = "B", miles = 10, interstate = "I1" }]

[[city]]
name = "B"
roads = [{ to = "C", miles = 5, interstate = "I2" }]

[[city]]
name = "D"
"#,
    )
    .unwrap();
    path
}
