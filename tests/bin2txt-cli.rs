#![cfg(feature = "bins")]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::*;
use std::process::Command;

#[fixture]
fn rom() -> assert_fs::NamedTempFile {
    let file = assert_fs::NamedTempFile::new("rom.bin").unwrap();
    file.write_binary(&[0x00, 0x4E, 0x45, 0x53, 0xFF]).unwrap();
    file
}

#[rstest]
fn hexdump(rom: assert_fs::NamedTempFile) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bin2txt")?;

    cmd.arg(rom.path());
    cmd.assert()
        .success()
        .stdout(predicate::eq("00\n4E\n45\n53\nFF\n"));

    Ok(())
}

#[test]
fn empty_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = assert_fs::NamedTempFile::new("empty.bin")?;
    file.write_binary(&[])?;

    Command::cargo_bin("bin2txt")?
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn every_byte_value() -> Result<(), Box<dyn std::error::Error>> {
    let data: Vec<u8> = (0..=255).rev().collect();
    let file = assert_fs::NamedTempFile::new("all.bin")?;
    file.write_binary(&data)?;

    let expected: String = data.iter().map(|b| format!("{b:02X}\n")).collect();
    Command::cargo_bin("bin2txt")?
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(expected));

    Ok(())
}

#[rstest]
fn repeated_runs_match(rom: assert_fs::NamedTempFile) -> Result<(), Box<dyn std::error::Error>> {
    let first = Command::cargo_bin("bin2txt")?.arg(rom.path()).output()?;
    let second = Command::cargo_bin("bin2txt")?.arg(rom.path()).output()?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[rstest]
#[case::no_args(&[])]
#[case::two_args(&["a.bin", "b.bin"])]
#[case::three_args(&["a.bin", "b.bin", "c.bin"])]
fn wrong_argument_count_prints_usage(
    #[case] args: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("bin2txt")?
        .args(args)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage:").and(predicate::str::contains("<INPUT>")));

    Ok(())
}

#[test]
fn missing_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let missing = dir.child("missing.bin");

    Command::cargo_bin("bin2txt")?
        .arg(missing.path())
        .assert()
        .code(1)
        .stdout(
            predicate::str::starts_with("Error opening file")
                .and(predicate::str::contains("missing.bin")),
        );

    Ok(())
}

#[rstest]
fn skip_leading_bytes(rom: assert_fs::NamedTempFile) -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("bin2txt")?
        .arg("--skip")
        .arg("3")
        .arg(rom.path())
        .assert()
        .success()
        .stdout(predicate::eq("53\nFF\n"));

    Command::cargo_bin("bin2txt")?
        .args(["-s", "100"])
        .arg(rom.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn ines_header_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let mut data = vec![0x4E, 0x45, 0x53, 0x1A];
    data.resize(16, 0x00);
    data.extend_from_slice(&[0x78, 0xD8]);

    let file = assert_fs::NamedTempFile::new("game.nes")?;
    file.write_binary(&data)?;

    Command::cargo_bin("bin2txt")?
        .arg("--ines")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("78\nD8\n"));

    Ok(())
}

#[rstest]
fn write_to_output_file(rom: assert_fs::NamedTempFile) -> Result<(), Box<dyn std::error::Error>> {
    let out = assert_fs::NamedTempFile::new("rom.txt")?;

    Command::cargo_bin("bin2txt")?
        .arg(rom.path())
        .arg("--output")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    out.assert("00\n4E\n45\n53\nFF\n");

    Ok(())
}

#[rstest]
fn verbose_logs_to_stderr(rom: assert_fs::NamedTempFile) -> Result<(), Box<dyn std::error::Error>> {
    Command::cargo_bin("bin2txt")?
        .arg("-v")
        .arg(rom.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::eq("00\n4E\n45\n53\nFF\n"))
        .stderr(predicate::str::contains("Converted 5 bytes"));

    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn read_error_after_open() -> Result<(), Box<dyn std::error::Error>> {
    // A directory opens fine on Linux but fails on the first read.
    let dir = assert_fs::TempDir::new()?;
    let input = dir.child("not_a_file");
    input.create_dir_all()?;

    Command::cargo_bin("bin2txt")?
        .arg(input.path())
        .assert()
        .code(1)
        .stdout(
            predicate::str::starts_with("Error converting file")
                .and(predicate::str::contains("not_a_file"))
                .and(predicate::str::contains("offset 0")),
        );

    Ok(())
}
