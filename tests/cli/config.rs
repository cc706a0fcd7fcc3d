use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_config_file_is_discovered() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nguardrc.json",
        r#"{
  "sourceGlobs": ["web/**/*.vue"],
  "priorityTiers": { "high": ["publish"] },
  "reportFile": "i18n-report.json"
}"#,
    )?;
    test.write_file("web/Post.vue", "<button>Publish Post</button>")?;
    test.write_file("src/Cart.tsx", "<button>Checkout Now</button>")?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(1));
    let report = test.read_json("i18n-report.json")?;
    assert_eq!(report["summary"]["totalFiles"], 1);
    assert_eq!(report["highPriorityIssues"][0]["text"], "Publish Post");

    Ok(())
}

#[test]
fn test_config_from_nested_root() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nguardrc.json",
        r#"{ "ignoreTexts": ["Checkout Now"] }"#,
    )?;
    test.write_file("apps/shop/src/Cart.tsx", "<button>Checkout Now</button>")?;

    let output = test.command().args(["--root", "apps/shop"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let report = test.read_json("apps/shop/translation-check-report.json")?;
    assert_eq!(report["summary"]["totalEnglishTexts"], 0);

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory_cwd() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nguardrc.json",
        r#"{ "ignoreTexts": ["Checkout Now"] }"#,
    )?;
    test.write_file("apps/shop/src/Cart.tsx", "<button>Checkout Now</button>")?;

    let output = test
        .command()
        .current_dir(test.root().join("apps/shop"))
        .arg("-v")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("note: using config"));
    let report = test.read_json("apps/shop/translation-check-report.json")?;
    assert_eq!(report["summary"]["totalFiles"], 1);
    assert_eq!(report["summary"]["totalEnglishTexts"], 0);

    Ok(())
}

#[test]
fn test_explicit_config_flag() -> Result<()> {
    let test = CliTest::with_file("guard.json", r#"{ "reportFile": "custom.json" }"#)?;
    test.write_file("src/Form.tsx", "<button>Save Draft</button>")?;

    let output = test.command().args(["--config", "guard.json"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("custom.json").exists());

    Ok(())
}

#[test]
fn test_config_from_environment() -> Result<()> {
    let test = CliTest::with_file("guard.json", r#"{ "reportFile": "from-env.json" }"#)?;

    let output = test
        .command()
        .env("I18N_GUARD_CONFIG", "guard.json")
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.root().join("from-env.json").exists());

    Ok(())
}

#[test]
fn test_invalid_glob_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".i18nguardrc.json", r#"{ "excludeGlobs": ["src/[oops"] }"#)?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("excludeGlobs"));
    assert!(!test.root().join("translation-check-report.json").exists());

    Ok(())
}

#[test]
fn test_invalid_regex_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nguardrc.json",
        r#"{ "latinPatterns": [{ "name": "broken", "regex": "(unclosed" }] }"#,
    )?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("latinPatterns"));

    Ok(())
}

#[test]
fn test_malformed_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".i18nguardrc.json", "{ not json")?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_print_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--print-config").output()?;

    assert_eq!(output.status.code(), Some(0));
    let config: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(config["reportFile"], "translation-check-report.json");
    assert!(config["priorityTiers"]["high"].is_array());
    assert!(!test.root().join("translation-check-report.json").exists());

    Ok(())
}
