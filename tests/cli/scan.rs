use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/Button.tsx",
        r#"
export function Button() {
    return <button>{t('actions.submit')}</button>;
}
"#,
    )?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No high-priority hard-coded texts"));
    assert!(stdout(&output).contains("Report saved to"));

    let report = test.read_report()?;
    assert_eq!(report["summary"]["totalFiles"], 1);
    assert_eq!(report["summary"]["highPriorityIssues"], 0);
    assert_eq!(report["translationKeys"][0], "actions.submit");

    Ok(())
}

#[test]
fn test_high_priority_text_fails() -> Result<()> {
    let test = CliTest::with_file(
        "src/components/Cart.tsx",
        r#"
export function Cart() {
    return <button>Add to Cart</button>;
}
"#,
    )?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("HIGH (1)"));
    assert!(out.contains("--> src/components/Cart.tsx:3  \"Add to Cart\""));
    assert!(out.contains("1 high-priority hard-coded text"));

    let report = test.read_report()?;
    let finding = &report["highPriorityIssues"][0];
    assert_eq!(finding["text"], "Add to Cart");
    assert_eq!(finding["filePath"], "src/components/Cart.tsx");
    assert_eq!(finding["lineNumber"], 3);
    assert_eq!(finding["priority"], "high");
    assert_eq!(report["recommendations"][0]["priority"], "high");

    Ok(())
}

#[test]
fn test_medium_only_passes() -> Result<()> {
    let test = CliTest::with_file("src/Form.tsx", "<button>Save Draft</button>")?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    let report = test.read_report()?;
    assert_eq!(report["summary"]["mediumPriorityIssues"], 1);
    assert_eq!(report["mediumPriorityIssues"][0]["text"], "Save Draft");

    Ok(())
}

#[test]
fn test_arabic_text_is_reported() -> Result<()> {
    let test = CliTest::with_file(
        "src/Greeting.tsx",
        "const greeting = \"مرحبا بكم\";\n// تعليق عربي\n",
    )?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("ARABIC (2)"));

    let report = test.read_report()?;
    assert_eq!(report["summary"]["totalArabicTexts"], 2);
    assert_eq!(report["summary"]["filesWithArabicText"], 1);
    assert_eq!(report["arabicTexts"][0]["text"], "مرحبا بكم");
    assert_eq!(report["arabicTexts"][0]["script"], "arabic");
    assert_eq!(report["arabicTexts"][1]["lineNumber"], 2);
    assert_eq!(
        report["recommendations"][0]["message"],
        "Found 2 hard-coded Arabic texts"
    );

    Ok(())
}

#[test]
fn test_excluded_paths_are_skipped() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "<h1>Welcome Home</h1>")?;
    test.write_file("src/app.test.tsx", "<h1>Sign In</h1>")?;
    test.write_file("node_modules/pkg/src/index.js", "<h1>Checkout Now</h1>")?;
    test.write_file("src/__tests__/page.tsx", "<h1>Checkout Now</h1>")?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(1));
    let report = test.read_report()?;
    assert_eq!(report["summary"]["totalFiles"], 1);
    assert_eq!(report["summary"]["highPriorityIssues"], 1);
    assert_eq!(report["highPriorityIssues"][0]["filePath"], "src/app.tsx");

    Ok(())
}

#[test]
fn test_translation_cross_reference() -> Result<()> {
    let test = CliTest::with_file(
        "src/Page.tsx",
        "const a = t('home.title');\nconst b = t('home.missing');\n",
    )?;
    test.write_file(
        "locales/en.json",
        r#"{ "home": { "title": "Home", "subtitle": "Hi" } }"#,
    )?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("1 catalog file(s): 1 missing, 1 unused"));

    let report = test.read_report()?;
    assert_eq!(report["summary"]["catalogFiles"], 1);
    assert_eq!(report["missingTranslations"][0], "home.missing");
    assert_eq!(report["unusedTranslations"][0], "home.subtitle");

    Ok(())
}

#[test]
fn test_output_override() -> Result<()> {
    let test = CliTest::with_file("src/Form.tsx", "<button>Save Draft</button>")?;

    let output = test.command().args(["-o", "out.json"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(!test.root().join("translation-check-report.json").exists());
    let report = test.read_json("out.json")?;
    assert_eq!(report["summary"]["totalFiles"], 1);

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/src/Cart.tsx", "<button>Checkout Now</button>")?;

    let output = test.command().args(["--root", "web"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let report = test.read_json("web/translation-check-report.json")?;
    assert_eq!(report["highPriorityIssues"][0]["filePath"], "src/Cart.tsx");

    Ok(())
}

#[test]
fn test_unwritable_report_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/Form.tsx", "<button>Save Draft</button>")?;

    let output = test
        .command()
        .args(["-o", "missing/dir/report.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to write report"));

    Ok(())
}

#[test]
fn test_unreadable_file_warning() -> Result<()> {
    let test = CliTest::with_file("src/ok.ts", "const n = 1;")?;
    std::fs::write(test.root().join("src/bad.ts"), [0xff, 0xfe, 0x00])?;

    let output = test.run()?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains(
        "warning: 1 file(s) could not be read or parsed (use -v for details)"
    ));
    let report = test.read_report()?;
    assert_eq!(report["summary"]["totalFiles"], 2);
    assert_eq!(report["summary"]["unreadableFiles"], 1);

    let output = test.command().arg("-v").output()?;
    assert!(stderr(&output).contains("warning: src/bad.ts:"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Usage: i18n-guard [OPTIONS]"));
    assert!(out.contains("--root <ROOT>"));
    assert!(out.contains("--output <OUTPUT>"));

    Ok(())
}
