use assert_cmd::Command;
use predicates::prelude::*;

fn inidb(base_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("inidb").unwrap();
    cmd.arg("--base-dir").arg(base_dir);
    cmd
}

#[test]
fn write_then_read_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["write", "db.ini", "Players", "Alice", "100"])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["read", "db.ini", "Players", "Alice"])
        .assert()
        .success()
        .stdout("[true, 100]\n");
}

#[test]
fn raw_invoke_matches_the_subcommand_forms() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["invoke", "write|db.ini|Players|Alice|\"100\""])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["invoke", "read|db.ini|Players|Alice"])
        .assert()
        .success()
        .stdout("[true, 100]\n");
}

#[test]
fn invoke_with_custom_separator() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["invoke", "--separator", ",", "write,db.ini,main,key,\"a|b\""])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["read", "db.ini", "main", "key"])
        .assert()
        .success()
        .stdout("[true, a|b]\n");
}

#[test]
fn full_section_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["write", "db.ini", "Players", "Alice", "100"])
        .assert()
        .success();

    inidb(temp_dir.path())
        .args(["sections", "db.ini"])
        .assert()
        .success()
        .stdout("[\"Players\"]\n");

    inidb(temp_dir.path())
        .args(["delete-section", "db.ini", "Players"])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["sections", "db.ini"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn exists_tracks_the_file_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["exists", "db.ini"])
        .assert()
        .success()
        .stdout("false\n");

    inidb(temp_dir.path())
        .args(["write", "db.ini", "a", "b", "c"])
        .assert()
        .success();

    inidb(temp_dir.path())
        .args(["exists", "db.ini"])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["delete", "db.ini"])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["exists", "db.ini"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn insufficient_parameters_print_an_empty_response() {
    let temp_dir = tempfile::tempdir().unwrap();

    // Protocol errors are reported in-band as an empty response, not as a
    // process failure.
    inidb(temp_dir.path())
        .args(["invoke", "write|db.ini|Players"])
        .assert()
        .success()
        .stdout("\n");

    inidb(temp_dir.path())
        .args(["invoke", "frobnicate|db.ini"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn base64_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["encode", "hello world"])
        .assert()
        .success()
        .stdout("aGVsbG8gd29ybGQ=\n");

    inidb(temp_dir.path())
        .args(["decode", "aGVsbG8gd29ybGQ="])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn timestamp_is_wire_shaped() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .arg("timestamp")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[\d{4},\d{2},\d{2},\d{2},\d{2},\d{2}\]\n$").unwrap());
}

#[test]
fn database_files_are_plain_ini_on_disk() {
    let temp_dir = tempfile::tempdir().unwrap();

    inidb(temp_dir.path())
        .args(["write", "db.ini", "Players", "Alice", "100"])
        .assert()
        .success();

    let on_disk = std::fs::read_to_string(temp_dir.path().join("db.ini")).unwrap();
    assert_eq!(on_disk, "[Players]\nAlice=100\n");
}

#[test]
fn config_json_sets_the_starting_separator() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "separator": "," }"#,
    )
    .unwrap();

    inidb(temp_dir.path())
        .args(["invoke", "write,db.ini,main,key,\"v\""])
        .assert()
        .success()
        .stdout("true\n");

    inidb(temp_dir.path())
        .args(["invoke", "getseparator"])
        .assert()
        .success()
        .stdout(",\n");
}
