use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

const INSTANCE: &str = r#"arg(a).
arg(b).
arg(c).
arg(d).
att(a,b).
att(b,a).
att(b,c).
att(c,d).
"#;

const SELF_ATTACK_INSTANCE: &str = "arg(a).\natt(a,a).\n";

fn solve(
    instance: &str,
    problem: &str,
    arg: Option<&str>,
) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.apx")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("dungaf")?;
    cmd.arg("solve")
        .arg("-f")
        .arg(file.path())
        .arg("-p")
        .arg(problem)
        .arg("--logging-level")
        .arg("off");
    if let Some(a) = arg {
        cmd.arg("-a").arg(a);
    }
    let assert = cmd.assert();
    file.close()?;
    Ok(assert)
}

fn assert_answer(
    instance: &str,
    problem: &str,
    arg: Option<&str>,
    expected: &'static str,
) -> Result<(), Box<dyn std::error::Error>> {
    solve(instance, problem, arg)?
        .success()
        .stdout(predicate::eq(expected));
    Ok(())
}

#[test]
fn test_enumerate_admissible() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "EE-AD", None, "[[],[a],[a,c],[b],[b,d]]\n")
}

#[test]
fn test_enumerate_complete() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "EE-CO", None, "[[],[a,c],[b,d]]\n")
}

#[test]
fn test_enumerate_preferred() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "EE-PR", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_enumerate_stable() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "EE-ST", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_enumerate_semi_stable() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "EE-SST", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_single_grounded() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "SE-GR", None, "[]\n")
}

#[test]
fn test_single_ideal_and_eager() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "SE-ID", None, "[]\n")?;
    assert_answer(INSTANCE, "SE-EA", None, "[]\n")?;
    assert_answer(INSTANCE, "SE-PS", None, "[]\n")
}

#[test]
fn test_single_preferred_is_smallest() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "SE-PR", None, "[a,c]\n")
}

#[test]
fn test_single_stable_none() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(SELF_ATTACK_INSTANCE, "SE-ST", None, "NO\n")
}

#[test]
fn test_credulous_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "DC-PR", Some("a"), "YES\n")?;
    assert_answer(INSTANCE, "DC-ST", Some("d"), "YES\n")?;
    assert_answer(INSTANCE, "DC-GR", Some("a"), "NO\n")
}

#[test]
fn test_skeptical_acceptance() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "DS-PR", Some("a"), "NO\n")?;
    assert_answer(SELF_ATTACK_INSTANCE, "DS-ST", Some("a"), "YES\n")?;
    assert_answer(SELF_ATTACK_INSTANCE, "DC-ST", Some("a"), "NO\n")
}

#[test]
fn test_full_semantics_name() -> Result<(), Box<dyn std::error::Error>> {
    assert_answer(INSTANCE, "EE-preferred", None, "[[a,c],[b,d]]\n")
}

#[test]
fn test_missing_argument() -> Result<(), Box<dyn std::error::Error>> {
    solve(INSTANCE, "DC-PR", None)?.failure();
    Ok(())
}

#[test]
fn test_unknown_argument() -> Result<(), Box<dyn std::error::Error>> {
    solve(INSTANCE, "DS-PR", Some("z"))?.failure();
    Ok(())
}

#[test]
fn test_unknown_problem() -> Result<(), Box<dyn std::error::Error>> {
    solve(INSTANCE, "EE-XY", None)?.failure();
    solve(INSTANCE, "EEPR", None)?.failure();
    Ok(())
}

#[test]
fn test_syntax_error() -> Result<(), Box<dyn std::error::Error>> {
    solve("arg(a).\natt(a,b).\n", "EE-PR", None)?.failure();
    Ok(())
}
