use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn single_node_scores_its_token() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.arg("tests/inputs/single.txt");

    cmd.assert().success().stdout("7\n");
}

#[test]
fn chain_stops_at_root() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.arg("tests/inputs/chain.txt");

    cmd.assert().success().stdout("5\n");
}

#[test]
fn descends_along_dominating_branches() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.arg("tests/inputs/deep_branch.txt");

    cmd.assert().success().stdout("10\n");
}

#[test]
fn reads_stdin_without_input_path() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.write_stdin("5\n1 2 3 4 5\n1 2\n1 3\n3 4\n4 5\n");

    cmd.assert().success().stdout("10\n");
}

#[test]
fn prints_scores_beyond_i64() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.write_stdin("2\n1 5000000000000000000\n1 2\n");

    cmd.assert().success().stdout("5000000000000000001\n");

    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.write_stdin("3\n9223372036854775807 9223372036854775807 9223372036854775807\n1 2\n1 3\n");

    cmd.assert().success().stdout("18446744073709551614\n");
}

#[test]
fn reports_missing_tokens() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.arg("tests/inputs/short_tokens.txt");

    cmd.assert()
        .failure()
        .stdout("")
        .stderr(str::contains("Expect 3 token value(s), found 2."));
}

#[test]
fn reports_extra_edges() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.arg("tests/inputs/extra_edge.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 2 edge(s), found 3."));
}

#[test]
fn reports_missing_file() {
    let mut cmd = Command::cargo_bin("peel_score").unwrap();
    cmd.arg("tests/inputs/no_such_file.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file"));
}
