use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use passcrypt::cli::password::PASSWORD_ENV;
use passcrypt::config::paths::DATA_DIR_ENV;

fn run(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passcrypt").unwrap();
    cmd.env(DATA_DIR_ENV, data_dir.path())
        .env_remove(PASSWORD_ENV)
        .env_remove("RUST_LOG")
        .current_dir(data_dir.path());
    cmd
}

fn encrypt_text(data_dir: &TempDir, text: &str, password: &str) -> String {
    let output = run(data_dir)
        .args(["text", "encrypt", text, "--password", password])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn text_round_trip() {
    let dir = TempDir::new().unwrap();
    let sealed = encrypt_text(&dir, "hello world", "correct horse");
    assert!(sealed.len() >= 44);

    run(&dir)
        .args(["text", "decrypt", sealed.as_str(), "--password", "correct horse"])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn cli_output_opens_with_library() {
    let dir = TempDir::new().unwrap();
    let sealed = encrypt_text(&dir, "from the cli", "pw");

    assert_eq!(passcrypt::decrypt_text(&sealed, "pw").unwrap(), "from the cli");
}

#[test]
fn library_output_opens_with_cli() {
    let dir = TempDir::new().unwrap();
    let sealed = passcrypt::encrypt_text("from the library", "pw").unwrap();

    run(&dir)
        .args(["text", "decrypt", sealed.as_str()])
        .env(PASSWORD_ENV, "pw")
        .assert()
        .success()
        .stdout("from the library\n");
}

#[test]
fn text_from_stdin_is_trimmed() {
    let dir = TempDir::new().unwrap();
    let output = run(&dir)
        .args(["text", "encrypt"])
        .env(PASSWORD_ENV, "  pw  ")
        .write_stdin("  padded text \n")
        .output()
        .unwrap();
    assert!(output.status.success());
    let sealed = String::from_utf8(output.stdout).unwrap();

    assert_eq!(passcrypt::decrypt_text(sealed.trim(), "pw").unwrap(), "padded text");
}

#[test]
fn wrong_password_fails() {
    let dir = TempDir::new().unwrap();
    let sealed = encrypt_text(&dir, "hello world", "correct horse");

    let output = run(&dir)
        .args(["text", "decrypt", sealed.as_str(), "--password", "wrong"])
        .output()
        .unwrap();

    // A wrong key slips past the padding check about once in 256 tries
    if output.status.success() {
        assert_ne!(String::from_utf8_lossy(&output.stdout).trim(), "hello world");
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("wrong password or corrupted data"));
    }
}

#[test]
fn malformed_envelope_fails() {
    let dir = TempDir::new().unwrap();

    run(&dir)
        .args(["text", "decrypt", "definitely*not*base64", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed envelope"));

    run(&dir)
        .args(["text", "decrypt", "aGVsbG8=", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed envelope"));
}

#[test]
fn empty_inputs_rejected() {
    let dir = TempDir::new().unwrap();

    run(&dir)
        .args(["text", "encrypt", "hello", "--password", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password must not be empty"));

    run(&dir)
        .args(["text", "encrypt", "  ", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Text must not be empty"));
}

#[test]
fn save_writes_text_artifact() {
    let dir = TempDir::new().unwrap();

    run(&dir)
        .args(["text", "encrypt", "saved", "--password", "pw", "--save"])
        .assert()
        .success();

    let sealed = std::fs::read_to_string(dir.path().join("text_encode.txt")).unwrap();
    assert_eq!(passcrypt::decrypt_text(&sealed, "pw").unwrap(), "saved");
}

#[test]
fn file_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("blob.bin");
    let data: Vec<u8> = (0..10_000u32).map(|i| (i * 31 % 251) as u8).collect();
    std::fs::write(&input, &data).unwrap();

    run(&dir)
        .args(["file", "encrypt", "blob.bin", "--quiet"])
        .env(PASSWORD_ENV, "pw")
        .assert()
        .success()
        .stderr(predicate::str::contains("blob_encode.txt"));

    run(&dir)
        .args(["file", "decrypt", "blob_encode.txt", "--quiet"])
        .env(PASSWORD_ENV, "pw")
        .assert()
        .success();

    let restored = std::fs::read(dir.path().join("blob_encode_decode.txt")).unwrap();
    assert_eq!(restored, data);
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();

    run(&dir)
        .args(["file", "encrypt", "nope.txt", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn init_repairs_corrupt_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    run(&dir)
        .args(["text", "encrypt", "hi", "--password", "pw"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));

    run(&dir).arg("init").assert().success();

    run(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("KDF iterations: 100000"));
}

#[test]
fn init_and_config() {
    let dir = TempDir::new().unwrap();

    run(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    run(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("KDF iterations: 100000"))
        .stdout(predicate::str::contains("Initialized:    true"));
}
