//! End-to-end tests for the command-line tools

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn tool(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

/// 1KB image with a known body and a wrong stored checksum
fn write_rom(path: &Path) -> Vec<u8> {
    let mut rom = vec![0u8; 0x400];
    rom[0x18E] = 0xDE;
    rom[0x18F] = 0xAD;
    rom[0x200..0x204].copy_from_slice(&[0x12, 0x34, 0x56, 0x78]);
    fs::write(path, &rom).unwrap();
    rom
}

#[test]
fn mdchksum_calculates_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    write_rom(&path);

    tool("mdchksum").arg(&path).assert().success().stdout("0x68ac\n");
    tool("mdchksum").arg("-c").arg(&path).assert().success().stdout("0x68ac\n");
}

#[test]
fn mdchksum_reads_stored_checksum() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    write_rom(&path);

    tool("mdchksum").arg("-r").arg(&path).assert().success().stdout("0xdead\n");
}

#[test]
fn mdchksum_reads_standard_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    let rom = write_rom(&path);

    tool("mdchksum").write_stdin(rom.clone()).assert().success().stdout("0x68ac\n");
    tool("mdchksum").arg("-r").arg("-").write_stdin(rom).assert().success().stdout("0xdead\n");
}

#[test]
fn mdchksum_fix_writes_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    let mut rom = write_rom(&path);

    let output = tool("mdchksum").arg("-f").arg(&path).output().unwrap();
    assert!(output.status.success());

    rom[0x18E] = 0x68;
    rom[0x18F] = 0xAC;
    assert_eq!(output.stdout, rom);
    // Source file untouched without -i
    assert_eq!(fs::read(&path).unwrap()[0x18E..0x190], [0xDE, 0xAD]);
}

#[test]
fn mdchksum_fix_in_place_then_check() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    write_rom(&path);

    tool("mdchksum").args(["-f", "-i"]).arg(&path).assert().success().stdout("");
    assert_eq!(fs::read(&path).unwrap()[0x18E..0x190], [0x68, 0xAC]);

    tool("mdchksum")
        .arg("-k")
        .arg(&path)
        .assert()
        .success()
        .stdout("Checksum OK: 0x68AC.\n");
}

#[test]
fn mdchksum_write_explicit_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    write_rom(&path);

    tool("mdchksum").args(["-i", "-w", "0x1234"]).arg(&path).assert().success();
    tool("mdchksum").arg("-r").arg(&path).assert().success().stdout("0x1234\n");

    tool("mdchksum").args(["-i", "-w", "4660"]).arg(&path).assert().success();
    tool("mdchksum").arg("-r").arg(&path).assert().success().stdout("0x1234\n");
}

#[test]
fn mdchksum_check_reports_and_fixes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    write_rom(&path);

    tool("mdchksum")
        .arg("-k")
        .arg(&path)
        .assert()
        .success()
        .stdout("Bad checksum: expected 0x68AC, found 0xDEAD.\n");

    tool("mdchksum")
        .args(["-k", "-i"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Bad checksum: expected 0x68AC, found 0xDEAD.\nChecksum fixed.\n");

    assert_eq!(fs::read(&path).unwrap()[0x18E..0x190], [0x68, 0xAC]);
}

#[test]
fn mdchksum_conflicting_modes_are_usage_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    let rom = write_rom(&path);

    for flags in [["-c", "-r"], ["-f", "-w1"], ["-r", "-k"]] {
        tool("mdchksum")
            .args(flags)
            .arg("-i")
            .arg(&path)
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Usage"));
    }
    assert_eq!(fs::read(&path).unwrap(), rom);
}

#[test]
fn mdchksum_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    tool("mdchksum")
        .arg(dir.path().join("missing.bin"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.bin"));
}

#[test]
fn mdchksum_declared_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    let mut rom = write_rom(&path);

    // Only the first word of the body is covered by the declared length
    rom[0x1A4..0x1A8].copy_from_slice(&0x202u32.to_be_bytes());
    fs::write(&path, &rom).unwrap();
    tool("mdchksum").args(["--size-from", "declared"]).arg(&path).assert().success().stdout("0x1234\n");
    tool("mdchksum").args(["--size-from", "actual"]).arg(&path).assert().success().stdout("0x68ac\n");

    rom[0x1A4..0x1A8].copy_from_slice(&0x800u32.to_be_bytes());
    fs::write(&path, &rom).unwrap();
    tool("mdchksum").args(["--size-from", "declared"]).arg(&path).assert().code(3);
}

#[test]
fn mdchksum_read_too_small() {
    tool("mdchksum").arg("-r").write_stdin(vec![0u8; 16]).assert().code(3);
}

#[test]
fn help_and_license_exit_zero() {
    for name in ["mdchksum", "mbitpad", "bin2hilo", "s128k", "smd2bin", "bin2smd"] {
        tool(name).arg("-?").assert().success().stdout(predicate::str::contains("Usage"));
        tool(name)
            .arg("-l")
            .assert()
            .success()
            .stderr(predicate::str::contains("All rights reserved."));
    }
}

#[test]
fn mbitpad_pads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    fs::write(&path, vec![0x5Au8; 100]).unwrap();

    tool("mbitpad").args(["-s", "1", "-c", "0"]).arg(&path).assert().success();

    let padded = fs::read(&path).unwrap();
    assert_eq!(padded.len(), 131072);
    assert!(padded[..100].iter().all(|&b| b == 0x5A));
    assert!(padded[100..].iter().all(|&b| b == 0x00));
}

#[test]
fn mbitpad_defaults_to_eight_mbit_of_ff() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    fs::write(&path, [0u8; 4]).unwrap();

    tool("mbitpad").arg(&path).assert().success();

    let padded = fs::read(&path).unwrap();
    assert_eq!(padded.len(), 0x100000);
    assert_eq!(padded[4], 0xFF);
}

#[test]
fn mbitpad_requires_file() {
    tool("mbitpad").assert().code(1).stderr(predicate::str::contains("Usage"));
    tool("mbitpad").args(["-c", "0x100", "x.bin"]).assert().code(1);
}

#[test]
fn bin2hilo_splits_and_requires_three_files() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("rom.bin");
    let high = dir.path().join("rom.hi");
    let low = dir.path().join("rom.lo");
    fs::write(&bin, [1, 2, 3, 4, 5]).unwrap();

    tool("bin2hilo").arg(&bin).arg(&high).assert().code(1);
    assert!(!high.exists());

    tool("bin2hilo").arg(&bin).arg(&high).arg(&low).assert().success();
    assert_eq!(fs::read(&high).unwrap(), vec![1, 3, 5]);
    assert_eq!(fs::read(&low).unwrap(), vec![2, 4]);
}

#[test]
fn s128k_splits_256k_into_four_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.bin");
    let input: Vec<u8> = (0..0x40000).map(|i: usize| (i % 253) as u8).collect();
    fs::write(&path, &input).unwrap();

    tool("s128k").arg(&path).assert().success();

    for n in 0..4 {
        let part = fs::read(dir.path().join(format!("game.bin.{n}"))).unwrap();
        assert_eq!(part.len(), 0x10000);
        let half = &input[(n / 2) * 0x20000..(n / 2 + 1) * 0x20000];
        let expected: Vec<u8> = half.iter().copied().skip(n % 2).step_by(2).collect();
        assert_eq!(part, expected, "part {n}");
    }
    assert!(!dir.path().join("game.bin.4").exists());
}

#[test]
fn s128k_requires_file() {
    tool("s128k").assert().code(1);
}

#[test]
fn smd2bin_converts_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let smd = dir.path().join("rom.smd");
    let bin = dir.path().join("rom.bin");

    let mut data = vec![0u8; 0x200];
    data.extend((0..0x2000).map(|i: usize| i as u8));
    data.extend(std::iter::repeat_n(0xFF, 0x2000));
    fs::write(&smd, &data).unwrap();

    tool("smd2bin").arg(&smd).assert().code(1);
    assert!(!bin.exists());

    tool("smd2bin").arg("-o").arg(&bin).arg(&smd).assert().success();
    let out = fs::read(&bin).unwrap();
    assert_eq!(out.len(), 0x4000);
    for (i, pair) in out.chunks(2).enumerate() {
        assert_eq!(pair, [i as u8, 0xFF]);
    }
}

#[test]
fn bin2smd_round_trips_through_smd2bin() {
    let dir = tempfile::tempdir().unwrap();
    let bin = dir.path().join("rom.bin");
    let smd = dir.path().join("rom.smd");
    let back = dir.path().join("back.bin");
    let input: Vec<u8> = (0..0x8000).map(|i: usize| (i * 13 % 256) as u8).collect();
    fs::write(&bin, &input).unwrap();

    for order in ["even", "odd"] {
        tool("bin2smd").args(["--first-half", order, "-o"]).arg(&smd).arg(&bin).assert().success();
        assert_eq!(fs::read(&smd).unwrap().len(), 0x200 + input.len());

        tool("smd2bin").args(["--first-half", order, "-o"]).arg(&back).arg(&smd).assert().success();
        assert_eq!(fs::read(&back).unwrap(), input);
    }
}

#[test]
fn mdchksum_license_still_runs_with_operands() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    write_rom(&path);

    tool("mdchksum")
        .arg("-l")
        .arg(&path)
        .assert()
        .success()
        .stdout("0x68ac\n")
        .stderr(predicate::str::contains("All rights reserved."));

    tool("mdchksum").args(["-l", "-f", "-i"]).arg(&path).assert().success();
    assert_eq!(fs::read(&path).unwrap()[0x18E..0x190], [0x68, 0xAC]);
}

#[test]
fn mdchksum_in_place_from_stdin_writes_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    let mut rom = write_rom(&path);

    let output = tool("mdchksum").args(["-f", "-i"]).write_stdin(rom.clone()).output().unwrap();
    assert!(output.status.success());

    rom[0x18E] = 0x68;
    rom[0x18F] = 0xAC;
    assert_eq!(output.stdout, rom);
}

#[cfg(unix)]
#[test]
fn mdchksum_in_place_follows_symlink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rom.bin");
    let link = dir.path().join("link.bin");
    write_rom(&path);
    std::os::unix::fs::symlink(&path, &link).unwrap();

    tool("mdchksum").args(["-f", "-i"]).arg(&link).assert().success();

    tool("mdchksum").arg("-r").arg(&path).assert().success().stdout("0x68ac\n");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
}

#[test]
fn smd2bin_truncated_header_is_short_read() {
    let dir = tempfile::tempdir().unwrap();
    let smd = dir.path().join("short.smd");
    let bin = dir.path().join("short.bin");
    fs::write(&smd, [0u8; 100]).unwrap();

    tool("smd2bin").arg("-o").arg(&bin).arg(&smd).assert().code(3);
}
