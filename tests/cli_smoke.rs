use assert_cmd::Command;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("disc-similarity"));
    // Keep the user's environment out of the run
    cmd.env_remove("DISC_FEATURE_DE")
        .env_remove("DISC_FEATURE_NL")
        .env_remove("DISC_LOG");
    cmd
}

#[test]
fn help_exits_zero() {
    let output = cli()
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output).to_lowercase();
    assert!(text.contains("usage"));
    for flag in [
        "--sep",
        "--col-de",
        "--col-nl",
        "--encoding",
        "--feature-de",
        "--output",
    ] {
        assert!(text.contains(flag), "missing flag {flag}");
    }
}

#[test]
fn two_file_mode_writes_table() {
    let temp = tempdir().unwrap();
    let de = temp.path().join("de.txt");
    let nl = temp.path().join("nl.txt");
    let out = temp.path().join("out.tsv");
    fs::write(&de, "p\nt\n").unwrap();
    fs::write(&nl, "p\nd\n").unwrap();

    cli().arg(&de).arg(&nl).arg("-o").arg(&out).assert().success();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "PhonStrsDISC_DE\tPhonStrsDISC_NL\tsimi");
    assert!(!temp.path().join("out_skipped.log").exists());
}

#[test]
fn csv_mode_default_output_path() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("Wordlist.csv");
    fs::write(
        &input,
        "Word;PhonStrsDISC_DE;PhonStrsDISC_NL\nHase;'ha-z@;'ha-z@\nBett;'bEt;'bEt\n",
    )
    .unwrap();

    cli().arg(&input).assert().success();

    let out = temp.path().join("Wordlist_with_similarity.tsv");
    let text = fs::read_to_string(&out).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(header, "Word\tPhonStrsDISC_DE\tPhonStrsDISC_NL\tsimi");
    assert_eq!(text.lines().count(), 3);
}

#[test]
fn skipped_pairs_write_sidecar_log() {
    let temp = tempdir().unwrap();
    let de = temp.path().join("de.txt");
    let nl = temp.path().join("nl.txt");
    let out = temp.path().join("results.tsv");
    fs::write(&de, "p\nQ\nt\n").unwrap();
    fs::write(&nl, "p\nb\nd\n").unwrap();

    let assert = cli().arg(&de).arg(&nl).arg("-o").arg(&out).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("Log written to"), "stdout: {stdout}");

    let log = fs::read_to_string(temp.path().join("results_skipped.log")).unwrap();
    assert!(log.starts_with("1 word pair(s) returned NA"));
    assert!(log.contains("Row 2: DE='Q', NL='b'"));
}

#[test]
fn missing_column_fails() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("words.csv");
    fs::write(&input, "Word;DE;NL\nHase;haz@;haz@\n").unwrap();

    cli().arg(&input).assert().failure();
}

#[test]
fn bad_feature_table_fails() {
    let temp = tempdir().unwrap();
    let de = temp.path().join("de.txt");
    let nl = temp.path().join("nl.txt");
    let table = temp.path().join("feature_de.csv");
    fs::write(&de, "p\n").unwrap();
    fs::write(&nl, "p\n").unwrap();
    fs::write(&table, "symbol\texample\tvoiced\np\tPein\t0\n").unwrap();

    cli()
        .arg(&de)
        .arg(&nl)
        .arg("--feature-de")
        .arg(&table)
        .assert()
        .failure();
    assert!(!temp.path().join("de_with_similarity.tsv").exists());
}

#[test]
fn two_file_mode_reads_utf8_by_default() {
    let temp = tempdir().unwrap();
    let de = temp.path().join("de.txt");
    let nl = temp.path().join("nl.txt");
    let out = temp.path().join("results.tsv");
    fs::write(&de, "pä\n").unwrap();
    fs::write(&nl, "p\n").unwrap();

    cli().arg(&de).arg(&nl).arg("-o").arg(&out).assert().success();

    let log = fs::read_to_string(temp.path().join("results_skipped.log")).unwrap();
    assert!(log.contains("DE='pä'"), "log: {log}");
    assert!(log.contains("unknown DE chars: {'ä'}"), "log: {log}");
}

#[test]
fn two_file_mode_honours_explicit_latin1() {
    let temp = tempdir().unwrap();
    let de = temp.path().join("de.txt");
    let nl = temp.path().join("nl.txt");
    let out = temp.path().join("results.tsv");
    // "pä" in Latin-1
    fs::write(&de, [b'p', 0xE4, b'\n']).unwrap();
    fs::write(&nl, "p\n").unwrap();

    cli()
        .arg(&de)
        .arg(&nl)
        .arg("--encoding")
        .arg("latin-1")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let log = fs::read_to_string(temp.path().join("results_skipped.log")).unwrap();
    assert!(log.contains("unknown DE chars: {'ä'}"), "log: {log}");
}
