use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DIAGONAL: &str = "!comment\n\n.O\nO.\n";
const GLIDER: &str = "!Name: Glider\n!\n.O\n..O\nOOO\n";

fn cellgrid() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cellgrid"))
}

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().to_string()
}

fn path_in(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().to_string()
}

#[test]
fn test_compile_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "diagonal.cells", DIAGONAL.as_bytes());
    let output = path_in(&dir, "diagonal.bin");

    cellgrid()
        .args(["compile", &input, "-o", &output, "-n", "2"])
        .assert()
        .success();

    assert_eq!(vec![0x00, 0x01, 0x01, 0x00], fs::read(&output).unwrap());
}

#[test]
fn test_compile_stdin_to_stdout_with_offset() {
    cellgrid()
        .args(["compile", "-n", "4", "--offset-x", "1", "--offset-y", "1"])
        .write_stdin(DIAGONAL)
        .assert()
        .success()
        .stdout(vec![
            0, 0, 0, 0, //
            0, 0, 1, 0, //
            0, 1, 0, 0, //
            0, 0, 0, 0,
        ]);
}

#[test]
fn test_compile_hex() {
    cellgrid()
        .args(["compile", "-n", "2", "--hex"])
        .write_stdin(DIAGONAL)
        .assert()
        .success()
        .stdout("00000000  00 01 01 00\n");
}

#[test]
fn test_compile_rejects_dimension_before_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "diagonal.cells", DIAGONAL.as_bytes());
    let output = path_in(&dir, "diagonal.bin");

    cellgrid()
        .args(["compile", &input, "-o", &output, "-n", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("power of two"));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_compile_invalid_character_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "bad.cells", b".O\nO*\n");
    let output = path_in(&dir, "bad.bin");

    cellgrid()
        .args(["compile", &input, "-o", &output, "-n", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains(
            "invalid pattern character '*' at line 2, column 2",
        ));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_compile_bare_cr_line_endings() {
    cellgrid()
        .args(["compile", "-n", "2"])
        .write_stdin("!c\r.O\rO.\r")
        .assert()
        .success()
        .stdout(vec![0x00, 0x01, 0x01, 0x00]);
}

#[test]
fn test_hex_conflicts_with_output() {
    let dir = TempDir::new().unwrap();
    let output = path_in(&dir, "grid.bin");

    cellgrid()
        .args(["compile", "-n", "2", "--hex", "-o", &output])
        .write_stdin(DIAGONAL)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    cellgrid()
        .args(["random", "-n", "2", "--hex", "-o", &output])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_compile_strict() {
    // '*' sits outside a 2x2 grid: ignored unless --strict
    cellgrid()
        .args(["compile", "-n", "2"])
        .write_stdin(".O*\nO.\n")
        .assert()
        .success();

    cellgrid()
        .args(["compile", "-n", "2", "--strict"])
        .write_stdin(".O*\nO.\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid pattern character '*' at line 1, column 3",
        ));
}

#[test]
fn test_random_seeded() {
    let first = cellgrid()
        .args(["random", "-n", "16", "--seed", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(256, first.len());
    assert!(first.iter().all(|&b| b == 0x00 || b == 0x01));

    cellgrid()
        .args(["random", "-n", "16", "--seed", "9"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn test_random_file() {
    let dir = TempDir::new().unwrap();
    let output = path_in(&dir, "random.bin");

    cellgrid()
        .args(["random", "-n", "8", "-o", &output])
        .assert()
        .success();

    assert_eq!(64, fs::read(&output).unwrap().len());
}

#[test]
fn test_random_rejects_dimension() {
    cellgrid()
        .args(["random", "-n", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_decompile() {
    cellgrid()
        .args(["decompile"])
        .write_stdin(vec![0x00, 0x01, 0x01, 0x00])
        .assert()
        .success()
        .stdout(".O\nO.\n");
}

#[test]
fn test_decompile_rejects_size() {
    cellgrid()
        .args(["decompile"])
        .write_stdin(vec![0x00; 5])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "grid size is not a power of 4 (size = 5)",
        ));
}

#[test]
fn test_decompile_rejects_cell_byte() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "bad.bin", &[0x00, 0x01, 0x07, 0x00]);
    let output = path_in(&dir, "bad.cells");

    cellgrid()
        .args(["decompile", &input, "-o", &output])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid cell byte 0x07 at row 1, column 0",
        ));

    assert!(!Path::new(&output).exists());
}

#[test]
fn test_compile_decompile_roundtrip() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "glider.cells", GLIDER.as_bytes());
    let grid = path_in(&dir, "glider.bin");
    let output = path_in(&dir, "glider.cells.out");

    cellgrid()
        .args(["compile", &input, "-o", &grid, "-n", "4"])
        .assert()
        .success();
    cellgrid()
        .args(["decompile", &grid, "-o", &output])
        .assert()
        .success();

    assert_eq!(
        ".O..\n..O.\nOOO.\n....\n",
        fs::read_to_string(&output).unwrap()
    );
}

#[test]
fn test_inspect() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "glider.cells", GLIDER.as_bytes());
    let grid = path_in(&dir, "glider.bin");

    cellgrid()
        .args(["compile", &input, "-o", &grid, "-n", "8", "-x", "2", "-y", "3"])
        .assert()
        .success();

    cellgrid()
        .args(["inspect", &grid])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dimension: 8x8"))
        .stdout(predicate::str::contains("Population: 5"))
        .stdout(predicate::str::contains(
            "Bounding box: rows 3..=5, columns 2..=4 (3x3)",
        ));
}

#[test]
fn test_verbose_logs_to_stderr() {
    cellgrid()
        .args(["-vv", "compile", "-n", "2"])
        .write_stdin(DIAGONAL)
        .assert()
        .success()
        .stderr(predicate::str::contains("compiling pattern"));
}
