//! End-to-end tests for the `lyricbook` binary
//!
//! Every run gets its own home directory so no user config leaks in.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn lyricbook(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lyricbook"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("LYRICBOOK_LOG")
        .output()
        .expect("Failed to run lyricbook")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_import_list_export() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");
    let catalog_arg = catalog.to_str().unwrap();

    let input = dir.path().join("lyrics.csv");
    std::fs::write(
        &input,
        "album,song,kor,zh\nThe Day,Freely,안녕,hi\nThe Day,Freely,,\nThe Day,Congratulations,좋아,good\n",
    )
    .unwrap();

    let output = lyricbook(
        dir.path(),
        &["--catalog", catalog_arg, "import", input.to_str().unwrap(), "--json"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["lines_imported"], 2);
    assert_eq!(report["rows_skipped"], 1);
    assert!(catalog.exists());

    let output = lyricbook(dir.path(), &["--catalog", catalog_arg, "list"]);
    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("The Day"));
    assert!(listing.contains("Congratulations - 1 lines"));

    let out = dir.path().join("out.csv");
    let output = lyricbook(
        dir.path(),
        &["--catalog", catalog_arg, "export", out.to_str().unwrap(), "--no-bom"],
    );
    assert!(output.status.success());
    let exported = std::fs::read_to_string(&out).unwrap();
    assert!(exported.starts_with("Album Title / 专辑名,Song Title / 歌曲名"));
    assert!(exported.contains("Freely"));
}

#[test]
fn test_dry_run_saves_nothing() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");

    let input = dir.path().join("lyrics.csv");
    std::fs::write(&input, "album,song,kor\nA,S,x\n").unwrap();

    let output = lyricbook(
        dir.path(),
        &[
            "--catalog",
            catalog.to_str().unwrap(),
            "import",
            input.to_str().unwrap(),
            "--dry-run",
        ],
    );
    assert!(output.status.success());
    assert!(stdout(&output).contains("+ album A"));
    assert!(!catalog.exists());
}

#[test]
fn test_missing_required_columns_fails() {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("catalog.json");

    let input = dir.path().join("bad.csv");
    std::fs::write(&input, "kor,zh\na,b\n").unwrap();

    let output = lyricbook(
        dir.path(),
        &["--catalog", catalog.to_str().unwrap(), "import", input.to_str().unwrap()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing required columns"));
    assert!(!catalog.exists());
}

#[test]
fn test_template_tsv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("blank.tsv");

    let output = lyricbook(
        dir.path(),
        &[
            "--catalog",
            dir.path().join("catalog.json").to_str().unwrap(),
            "template",
            out.to_str().unwrap(),
            "--fields",
            "vocabWord",
        ],
    );
    assert!(output.status.success());
    let bytes = std::fs::read(&out).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(
        text.trim_end(),
        "Album Title / 专辑名\tSong Title / 歌曲名\tVocab Word / 单词"
    );
}

#[test]
fn test_unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    let output = lyricbook(dir.path(), &["sync"]);
    assert!(!output.status.success());
}
