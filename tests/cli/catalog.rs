use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use super::CliTest;

const CARD_TSX: &str = r#"/**
 * The card widget.
 *
 * @lsComponent Card A bordered panel
 * @lsLink https://example.com/card
 * @lsImg
 */
export function Card() {
  return <div className="card"/>;
}
"#;

fn stdout_components(stdout: &[u8]) -> Vec<Value> {
    let text = String::from_utf8_lossy(stdout);
    let json_line = text.lines().next().expect("missing JSON dump");
    serde_json::from_str(json_line).expect("stdout dump is not valid JSON")
}

#[test]
fn test_end_to_end_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/Card.tsx", CARD_TSX)?;
    test.write_bytes("src/widgets/Card.png", b"png-bytes")?;
    test.write_file(
        "src/widgets/helper.tsx",
        "export function helper() { return 1; }\n",
    )?;

    let output = test.command().output()?;
    assert!(output.status.success(), "{:?}", output);

    let components = stdout_components(&output.stdout);
    assert_eq!(components.len(), 1);

    let card = &components[0];
    assert_eq!(card["name"], "Card");
    assert_eq!(card["description"], "A bordered panel");
    assert_eq!(card["link"], "https://example.com/card");

    let img = card["img"].as_str().unwrap();
    assert!(img.starts_with("generated/img/"), "{}", img);
    assert!(img.ends_with(".png"), "{}", img);

    // The copied asset exists under the build tree and kept its bytes.
    let asset = test.root().join("build").join(img);
    assert_eq!(std::fs::read(asset)?, b"png-bytes");

    // The document references the relocated path, not the source location.
    let html = std::fs::read_to_string(test.root().join("build/index.html"))?;
    assert!(html.contains("<h2>Card</h2>"));
    assert!(html.contains(img));
    assert!(!html.contains(&test.root().join("src").display().to_string()));

    Ok(())
}

#[test]
fn test_failed_copy_produces_no_document() -> Result<()> {
    let test = CliTest::new()?;
    // Bare @lsImg resolves to ./Broken.png, which does not exist.
    test.write_file(
        "src/widgets/Broken.tsx",
        "/**\n * @lsComponent Broken\n * @lsImg\n */\nexport function Broken() {}\n",
    )?;
    test.write_file(
        "src/widgets/Good.tsx",
        "/**\n * @lsComponent Good\n * @lsImg\n */\nexport function Good() {}\n",
    )?;
    test.write_bytes("src/widgets/Good.png", b"png-bytes")?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2), "{:?}", output);
    assert!(!test.root().join("build/index.html").exists());

    Ok(())
}

#[test]
fn test_write_failure_reports_and_keeps_assets() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/widgets/Card.tsx", CARD_TSX)?;
    test.write_bytes("src/widgets/Card.png", b"png-bytes")?;
    // Occupying the output path with a directory makes the final write
    // fail after relocation has already succeeded.
    std::fs::create_dir_all(test.root().join("build/index.html"))?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(1), "{:?}", output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write"), "{}", stderr);

    // Relocation finished before the write, so the copied asset stays in
    // the build tree and the dump reports the rewritten path.
    let components = stdout_components(&output.stdout);
    let img = components[0]["img"].as_str().unwrap();
    assert!(img.starts_with("generated/img/"), "{}", img);
    assert_eq!(std::fs::read(test.root().join("build").join(img))?, b"png-bytes");

    Ok(())
}

#[test]
fn test_marker_in_later_block_is_ignored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/widgets/One.tsx",
        "/** Prose only. */\n/** @lsComponent One */\nexport function One() {}\n",
    )?;
    test.write_file(
        "src/widgets/Two.tsx",
        "/** Prose only. */\n/** @lsComponent Two */\nexport function Two() {}\n",
    )?;

    let output = test.command().output()?;
    assert!(output.status.success(), "{:?}", output);

    let components = stdout_components(&output.stdout);
    assert!(components.is_empty());

    // An empty catalog still renders.
    let html = std::fs::read_to_string(test.root().join("build/index.html"))?;
    assert!(html.contains("<h1>Components</h1>"));
    assert!(!html.contains("<h2>"));

    Ok(())
}

#[test]
fn test_missing_template_aborts() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::remove_file(test.root().join("template.html"))?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2), "{:?}", output);
    assert!(!test.root().join("build").exists());

    Ok(())
}

#[test]
fn test_custom_pattern_and_build_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "lib/Badge.tsx",
        "/** @lsComponent */\nexport const Badge = () => <span/>;\n",
    )?;

    let output = test
        .command()
        .args(["--path", "./lib/**/*.tsx", "--build-dir", "dist"])
        .output()?;
    assert!(output.status.success(), "{:?}", output);

    let components = stdout_components(&output.stdout);
    assert_eq!(components.len(), 1);
    assert_eq!(components[0]["name"], "Badge");

    assert!(test.root().join("dist/index.html").exists());

    Ok(())
}
