use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::{predicate, PredicateBooleanExt};

const INSTANCE: &str = r#"arg(a).
arg(b).
arg(c).
arg(d).
att(a,b).
att(b,a).
att(b,c).
att(c,d).
"#;

fn dungaf() -> Command {
    Command::cargo_bin("dungaf").unwrap()
}

#[test]
fn test_authors() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS")
        .map(|v| v.replace(':', ", "))
        .unwrap_or_else(|| "unknown authors".to_string());
    let expected = format!("{} {}\n{}\n", app_name, app_version, authors);
    dungaf()
        .args(["authors", "--logging-level", "off"])
        .assert()
        .success()
        .stdout(predicate::eq(expected.as_str()));
}

#[test]
fn test_semantics() {
    dungaf()
        .args(["semantics", "--logging-level", "off"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("[EE-AD,EE-CO,EE-GR,")
                .and(predicate::str::contains(",DS-SST]\n")),
        );
}

#[test]
fn test_semantics_names() {
    dungaf()
        .args(["semantics", "--names", "--logging-level", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PS preferred-sceptical\n"));
}

#[test]
fn test_check_ok() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.apx")?;
    file.write_str(INSTANCE)?;
    dungaf()
        .arg("check")
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "the argumentation framework has 4 argument(s) and 4 attack(s)",
        ));
    file.close()?;
    Ok(())
}

#[test]
fn test_check_missing_file() {
    dungaf()
        .args(["check", "-f", "/this/file/does/not/exist.apx"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("caused by"));
}

#[test]
fn test_compare() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.apx")?;
    file.write_str(INSTANCE)?;
    dungaf()
        .arg("compare")
        .arg("-f")
        .arg(file.path())
        .args(["-s", "GR,PR,stable", "--logging-level", "off"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "the *grounded* extension:\n[]\n2 *preferred* extensions:\n[a,c]\n[b,d]\n2 *stable* extensions:\n[a,c]\n[b,d]\n",
        ));
    file.close()?;
    Ok(())
}

#[test]
fn test_compare_unknown_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.apx")?;
    file.write_str(INSTANCE)?;
    dungaf()
        .arg("compare")
        .arg("-f")
        .arg(file.path())
        .args(["-s", "XY", "--logging-level", "off"])
        .assert()
        .failure();
    file.close()?;
    Ok(())
}

fn generate(args: &[&str]) -> assert_cmd::assert::Assert {
    dungaf()
        .arg("generate")
        .args(args)
        .args(["--logging-level", "off"])
        .assert()
}

#[test]
fn test_generate_is_reproducible() {
    let args = [
        "--min-args",
        "3",
        "--max-args",
        "6",
        "--min-atts",
        "2",
        "--max-atts",
        "8",
        "--seed",
        "42",
    ];
    let first = generate(&args).success().get_output().stdout.clone();
    let second = generate(&args).success().get_output().stdout.clone();
    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    let n_args = text.lines().filter(|l| l.starts_with("arg(")).count();
    let n_atts = text.lines().filter(|l| l.starts_with("att(")).count();
    assert!((3..=6).contains(&n_args));
    assert!((2..=8).contains(&n_atts));
}

#[test]
fn test_generate_with_pool() {
    generate(&[
        "--min-args",
        "2",
        "--max-args",
        "2",
        "--min-atts",
        "4",
        "--max-atts",
        "4",
        "--pool",
        "x,y",
    ])
    .success()
    .stdout(predicate::eq(
        "arg(x).\narg(y).\natt(x,x).\natt(x,y).\natt(y,x).\natt(y,y).\n",
    ));
}

#[test]
fn test_generate_too_many_attacks() {
    generate(&[
        "--min-args",
        "1",
        "--max-args",
        "2",
        "--min-atts",
        "5",
        "--max-atts",
        "6",
    ])
    .failure();
}

#[test]
fn test_generate_pool_too_small() {
    generate(&[
        "--min-args",
        "3",
        "--max-args",
        "3",
        "--min-atts",
        "0",
        "--max-atts",
        "0",
        "--pool",
        "a,b,a",
    ])
    .failure();
}

#[test]
fn test_generated_framework_is_readable() -> Result<(), Box<dyn std::error::Error>> {
    let output = generate(&[
        "--min-args",
        "5",
        "--max-args",
        "5",
        "--min-atts",
        "3",
        "--max-atts",
        "3",
        "--seed",
        "7",
    ])
    .success()
    .get_output()
    .stdout
    .clone();
    let file = NamedTempFile::new("generated.apx")?;
    file.write_str(&String::from_utf8(output)?)?;
    dungaf()
        .arg("check")
        .arg("-f")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "the argumentation framework has 5 argument(s) and 3 attack(s)",
        ));
    file.close()?;
    Ok(())
}

#[test]
fn test_generate_rejects_unreadable_labels() {
    generate(&[
        "--min-args",
        "2",
        "--max-args",
        "2",
        "--min-atts",
        "0",
        "--max-atts",
        "1",
        "--pool",
        "1x,2y",
    ])
    .failure()
    .stdout(predicate::str::contains("arg(").not());
}
