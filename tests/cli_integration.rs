//! Integration tests for the VitalSeal CLI.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Passwords come from `VITALSEAL_PASSWORD` so nothing prompts, and each
//! test writes a `.vitalseal.toml` with a cheap iteration count.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: get a Command pointing at the vitalseal binary.
fn vitalseal() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vitalseal").expect("binary should exist");
    cmd.env_remove("VITALSEAL_PASSWORD").env_remove("VITALSEAL_LOG");
    cmd
}

/// Helper: a project directory with a fast KDF configuration.
fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    tmp.child(".vitalseal.toml")
        .write_str("kdf_iterations = 1000\n")
        .unwrap();
    tmp
}

fn seal(dir: &TempDir, text: &str, password: &str) -> String {
    let out = vitalseal()
        .args(["encrypt", text])
        .env("VITALSEAL_PASSWORD", password)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap().trim().to_string()
}

#[test]
fn help_flag_shows_usage() {
    vitalseal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Seal sensitive text and validate health profile records",
        ))
        .stdout(predicate::str::contains("encrypt"))
        .stdout(predicate::str::contains("decrypt"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("sanitize"))
        .stdout(predicate::str::contains("check-email"));
}

#[test]
fn version_flag_shows_version() {
    vitalseal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vitalseal"));
}

#[test]
fn no_args_shows_help() {
    vitalseal()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ---------------------------------------------------------------------------
// encrypt / decrypt
// ---------------------------------------------------------------------------

#[test]
fn encrypt_then_decrypt_roundtrip() {
    let dir = project();
    let sealed = seal(&dir, "systolic 138", "s3cret");

    vitalseal()
        .args(["decrypt", &sealed])
        .env("VITALSEAL_PASSWORD", "s3cret")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("systolic 138\n");
}

#[test]
fn encrypt_reads_piped_stdin() {
    let dir = project();
    let out = vitalseal()
        .arg("encrypt")
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(dir.path())
        .write_stdin("piped text")
        .output()
        .unwrap();
    assert!(out.status.success());
    let sealed = String::from_utf8(out.stdout).unwrap();

    vitalseal()
        .arg("decrypt")
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(dir.path())
        .write_stdin(sealed)
        .assert()
        .success()
        .stdout("piped text\n");
}

#[test]
fn piped_plaintext_keeps_trailing_newlines() {
    let dir = project();
    let out = vitalseal()
        .arg("encrypt")
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(dir.path())
        .write_stdin("line\n\n")
        .output()
        .unwrap();
    assert!(out.status.success());
    let sealed = String::from_utf8(out.stdout).unwrap();

    // decrypt prints the plaintext followed by one newline of its own
    vitalseal()
        .arg("decrypt")
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(dir.path())
        .write_stdin(sealed)
        .assert()
        .success()
        .stdout("line\n\n\n");
}

#[test]
fn decrypt_with_wrong_password_fails() {
    let dir = project();
    let sealed = seal(&dir, "heart rate 70", "right");

    vitalseal()
        .args(["decrypt", &sealed])
        .env("VITALSEAL_PASSWORD", "wrong")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_password_falls_back_to_default_with_warning() {
    let dir = project();
    let out = vitalseal()
        .args(["encrypt", "defaulted"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("configured default"));
    let sealed = String::from_utf8(out.stdout).unwrap();

    vitalseal()
        .args(["decrypt", sealed.trim()])
        .env("VITALSEAL_PASSWORD", "lstyle-default-key-2024")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("defaulted\n");
}

#[test]
fn malformed_sealed_message_is_reported() {
    let dir = project();
    vitalseal()
        .args(["decrypt", "AAAA"])
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed sealed message"));
}

#[test]
fn weak_kdf_config_is_rejected() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".vitalseal.toml")
        .write_str("kdf_iterations = 10\n")
        .unwrap();

    vitalseal()
        .args(["encrypt", "x"])
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("iterations"));
}

#[test]
fn config_dir_flag_is_honoured() {
    let dir = project();
    let elsewhere = TempDir::new().unwrap();
    let sealed = seal(&dir, "moved", "pw");

    vitalseal()
        .args(["decrypt", &sealed, "--config-dir"])
        .arg(dir.path())
        .env("VITALSEAL_PASSWORD", "pw")
        .current_dir(elsewhere.path())
        .assert()
        .success()
        .stdout("moved\n");
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_good_record() {
    let dir = project();
    let record = dir.child("record.json");
    record
        .write_str(r#"{"name":"Teresa","age":77,"height_cm":160,"weight_kg":58}"#)
        .unwrap();

    vitalseal()
        .args(["validate", "record.json"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Record is valid"));
}

#[test]
fn validate_reports_every_bad_field() {
    let dir = project();
    dir.child("record.json")
        .write_str(r#"{"name":"","age":10,"height_cm":170,"weight_kg":5}"#)
        .unwrap();

    vitalseal()
        .args(["validate", "record.json"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Name is required"))
        .stdout(predicate::str::contains("Age must be between 60 and 120 years"))
        .stdout(predicate::str::contains("Weight must be between 30 and 300 kg"))
        .stderr(predicate::str::contains("3 field(s) failed validation"));
}

#[test]
fn validate_json_output_from_stdin() {
    let dir = project();
    vitalseal()
        .args(["validate", "-", "--json"])
        .current_dir(dir.path())
        .write_stdin(r#"{"name":"Ot","age":65,"height_cm":180,"weight_kg":90,"heart_rate_bpm":250}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""valid": false"#))
        .stdout(predicate::str::contains(r#""field": "heart_rate_bpm""#));
}

#[test]
fn validate_uses_configured_bounds() {
    let tmp = TempDir::new().unwrap();
    tmp.child(".vitalseal.toml")
        .write_str("[bounds]\nage = { min = 18.0, max = 120.0 }\n")
        .unwrap();
    tmp.child("record.json")
        .write_str(r#"{"name":"Ona","age":30,"height_cm":165,"weight_kg":60}"#)
        .unwrap();

    vitalseal()
        .args(["validate", "record.json"])
        .current_dir(tmp.path())
        .assert()
        .success();
}

#[test]
fn validate_sanitize_flag_cleans_name_first() {
    let dir = project();
    dir.child("record.json")
        .write_str(r#"{"name":"DROP;","age":70,"height_cm":170,"weight_kg":70}"#)
        .unwrap();

    vitalseal()
        .args(["validate", "record.json"])
        .current_dir(dir.path())
        .assert()
        .success();

    vitalseal()
        .args(["validate", "record.json", "--sanitize"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Name is required"));
}

#[test]
fn validate_missing_file_fails() {
    let dir = project();
    vitalseal()
        .args(["validate", "nope.json"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read record"));
}

// ---------------------------------------------------------------------------
// sanitize / check-email
// ---------------------------------------------------------------------------

#[test]
fn sanitize_default_mode_strips_then_escapes() {
    vitalseal()
        .args(["sanitize", "<b>Anna</b>; DROP TABLE users"])
        .assert()
        .success()
        .stdout("&lt;b&gt;Anna&lt;/b&gt;  TABLE users\n");
}

#[test]
fn sanitize_html_mode_drops_the_piped_line_ending() {
    vitalseal()
        .args(["sanitize", "--mode", "html"])
        .write_stdin("<p>\n")
        .assert()
        .success()
        .stdout("&lt;p&gt;\n");
}

#[test]
fn validate_null_name_is_reported_not_a_parse_error() {
    let dir = project();
    vitalseal()
        .args(["validate", "-"])
        .current_dir(dir.path())
        .write_stdin(r#"{"name":null,"age":10,"height_cm":170,"weight_kg":5}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Name is required"))
        .stdout(predicate::str::contains("Age must be between 60 and 120 years"))
        .stderr(predicate::str::contains("3 field(s) failed validation"));
}

#[test]
fn sanitize_sql_mode() {
    vitalseal()
        .args(["sanitize", "--mode", "sql", "  x; drop  "])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn check_email_accepts_and_rejects() {
    vitalseal()
        .args(["check-email", "metge@clinica.cat"])
        .assert()
        .success();

    vitalseal()
        .args(["check-email", "metge@clinica"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a well-formed email address"));
}

#[test]
fn completions_for_bash() {
    vitalseal()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitalseal"));
}
