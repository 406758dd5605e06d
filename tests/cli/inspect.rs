use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stderr, stdout};

#[test]
fn test_inspect_prints_all_exported_collections() -> Result<()> {
    let test = CliTest::with_content_project()?;

    let output = test.inspect_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let definitions: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        definitions,
        json!([
            {
                "name": "blogs",
                "loader": {
                    "type": "glob",
                    "pattern": "**/*.{md,mdx}",
                    "base": "./src/content/blogs"
                },
                "hasSchema": true,
                "fields": [
                    { "fieldName": "title", "type": "string", "isOptional": false },
                    { "fieldName": "pubDate", "type": "date", "isOptional": false },
                    {
                        "fieldName": "tags",
                        "type": "array",
                        "isOptional": true,
                        "arrayElementType": "string"
                    },
                    { "fieldName": "image.url", "type": "image", "isOptional": false },
                    { "fieldName": "image.alt", "type": "string", "isOptional": true }
                ]
            },
            {
                "name": "data",
                "loader": { "type": "file", "path": "./src/content/data.yml" },
                "hasSchema": false,
                "fields": []
            }
        ])
    );

    Ok(())
}

#[test]
fn test_inspect_does_not_need_schemas() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/content.config.ts", crate::CONTENT_CONFIG)?;

    let output = test.inspect_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_inspect_config_module_override() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "site/collections.ts",
        r#"
const notes = defineCollection({ loader: glob({ pattern: "*.md", base: "notes" }) });
export const collections = { journal: notes };
"#,
    )?;

    let output = test
        .inspect_command()
        .args(["--config-module", "site/collections.ts"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let definitions: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(definitions[0]["name"], json!("journal"));
    assert_eq!(definitions[0]["hasSchema"], json!(false));

    Ok(())
}

#[test]
fn test_inspect_missing_module_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.inspect_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read module"));

    Ok(())
}
