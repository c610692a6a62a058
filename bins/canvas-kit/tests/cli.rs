//! End-to-end tests for the canvas-kit binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs in an empty directory so no config file is picked up.
fn canvas_kit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("canvas-kit").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG").arg("--no-color");
    cmd
}

fn png_header(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data
}

#[test]
fn test_ratio_named() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["ratio", "1920", "1080", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"16:9\""))
        .stdout(predicate::str::contains("\"orientation\": \"landscape\""));
}

#[test]
fn test_ratio_decimal_fallback() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["ratio", "1200", "627"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.91:1"))
        .stdout(predicate::str::contains("LinkedIn Post"));
}

#[test]
fn test_ratio_rejects_zero_side() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["ratio", "1920", "0", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("label").not());
}

#[test]
fn test_presets_category() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["presets", "--category", "social"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Instagram Story"))
        .stdout(predicate::str::contains("A4 Portrait").not());
}

#[test]
fn test_presets_unknown_category() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["presets", "--category", "billboards"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E5002"));
}

#[test]
fn test_select_preset() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["select", "--category", "social", "--preset", "Instagram Story", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 1080"))
        .stdout(predicate::str::contains("\"height\": 1920"))
        .stdout(predicate::str::contains("\"label\": \"9:16\""))
        .stdout(predicate::str::contains("\"kind\": \"preset\""));
}

#[test]
fn test_select_preset_loose_name() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["select", "--category", "social", "--preset", "instagram post", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 1080"))
        .stdout(predicate::str::contains("\"label\": \"1:1\""))
        .stdout(predicate::str::contains("\"name\": \"Instagram Post\""));
}

#[test]
fn test_select_locked_edit() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["select", "--lock", "--set-width", "1280", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"height\": 720"))
        .stdout(predicate::str::contains("\"label\": \"Custom\""))
        .stdout(predicate::str::contains("\"ratio\": \"16:9\""));
}

#[test]
fn test_select_unknown_preset() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["select", "--category", "print", "--preset", "Instagram Post"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E5001"));
}

#[test]
fn test_select_rejects_invalid_input() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["select", "--set-width", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E5003"));
}

#[test]
fn test_select_uses_config_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("canvas-kit.toml"),
        "[canvas]\ndefault_width = 800\ndefault_height = 600\nmax_dimension = 1000\n",
    )
    .unwrap();

    canvas_kit(&dir)
        .args(["select", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 800"))
        .stdout(predicate::str::contains("\"label\": \"4:3\""));
}

#[test]
fn test_invalid_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".canvas-kit.toml"), "[canvas]\nmin_dimension = 0\n").unwrap();

    canvas_kit(&dir)
        .args(["ratio", "1", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("canvas.min_dimension"));
}

#[test]
fn test_palette_show() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["palette", "ocean", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#03045e"));
}

#[test]
fn test_palette_unknown() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir).args(["palette", "neon"]).assert().code(2);
}

#[test]
fn test_validate_profile_failure() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["validate-profile", "--name", "J", "--email", "ada@"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("display_name"))
        .stderr(predicate::str::contains("email"));
}

#[test]
fn test_validate_profile_success() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args([
            "validate-profile",
            "--name",
            "Ada Lovelace",
            "--password",
            "analytical1",
            "--confirm",
            "analytical1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile fields are valid"));
}

#[test]
fn test_validate_profile_password_needs_confirm() {
    let dir = TempDir::new().unwrap();
    canvas_kit(&dir)
        .args(["validate-profile", "--password", "analytical1"])
        .assert()
        .failure();
}

#[test]
fn test_avatar_check() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("me.png"), png_header(512, 512)).unwrap();

    canvas_kit(&dir)
        .args(["avatar", "me.png", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mime_type\": \"image/png\""));
}

#[test]
fn test_avatar_too_small() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tiny.png"), png_header(64, 64)).unwrap();

    canvas_kit(&dir)
        .args(["avatar", "tiny.png"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("E6003"));
}

#[test]
fn test_avatar_scan() {
    let dir = TempDir::new().unwrap();
    let avatars = dir.path().join("avatars");
    fs::create_dir(&avatars).unwrap();
    fs::write(avatars.join("good.png"), png_header(256, 256)).unwrap();
    fs::write(avatars.join("small.png"), png_header(32, 32)).unwrap();
    fs::write(avatars.join("notes.txt"), "not an image").unwrap();

    canvas_kit(&dir)
        .args(["avatar-scan", "avatars", "--json"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"total\": 2"))
        .stdout(predicate::str::contains("\"rejected\": 1"));
}
