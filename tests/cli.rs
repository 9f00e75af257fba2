use std::fs::File;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn datalit() -> Command {
    Command::cargo_bin("datalit").unwrap()
}

#[test]
fn prints_indented_json() {
    datalit()
        .write_stdin("{:a, true }\n")
        .assert()
        .success()
        .stdout(concat!(
            "[\n",
            "  {\n",
            "    \"%k\": \"tuple\",\n",
            "    \"%v\": [\n",
            "      {\n",
            "        \"%k\": \"atom\",\n",
            "        \"%v\": \"a\"\n",
            "      },\n",
            "      {\n",
            "        \"%k\": \"bool\",\n",
            "        \"%v\": true\n",
            "      }\n",
            "    ]\n",
            "  }\n",
            "]\n",
        ));
}

#[test]
fn empty_input_prints_empty_array() {
    datalit()
        .write_stdin("# nothing\n")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn compact_output() {
    datalit()
        .arg("--compact")
        .write_stdin("%{}")
        .assert()
        .success()
        .stdout("[{\"%k\":\"map\",\"%v\":[]}]\n");
}

#[test]
fn lex_error_exits_with_one() {
    datalit()
        .write_stdin("truefalse\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("position 4"));
}

#[test]
fn parse_errors_exit_with_one() {
    for input in ["[1,]\n", "{}}\n", "[1, 2\n"] {
        datalit()
            .write_stdin(input)
            .assert()
            .code(1)
            .stdout("");
    }
}

#[test]
fn token_dump() {
    datalit()
        .arg("--tokens")
        .write_stdin("a: 1")
        .assert()
        .success()
        .stdout("KEY a: @2\nINTEGER 1 @4\nEOF <EOF> @5\n");
}

#[test]
fn reads_from_a_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.dl");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "[1_000]").unwrap();
    drop(file);

    datalit()
        .arg("--compact")
        .arg(&path)
        .assert()
        .success()
        .stdout("[{\"%k\":\"list\",\"%v\":[{\"%k\":\"int\",\"%v\":1000}]}]\n");
}

#[test]
fn wide_integers_print_exactly() {
    datalit()
        .arg("--compact")
        .write_stdin("99_999_999_999_999_999_999_999\n")
        .assert()
        .success()
        .stdout("[{\"%k\":\"int\",\"%v\":99999999999999999999999}]\n");
}

#[test]
fn missing_file_is_reported() {
    datalit()
        .arg("does/not/exist.dl")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}
