use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const OUTPUT: &str = ".embodi/cms.config.json";

#[test]
fn test_generate_writes_cms_config() -> Result<()> {
    let test = CliTest::with_content_project()?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let config = test.read_json(OUTPUT)?;
    assert!(config["updatedAt"].as_i64().is_some_and(|ts| ts > 0));
    assert_eq!(
        config["collections"],
        json!([
            {
                "name": "blogs",
                "displayName": "Blogs",
                "loader": {
                    "type": "glob",
                    "pattern": "**/*.{md,mdx}",
                    "base": "./src/content/blogs"
                },
                "formats": ["md", "mdx"],
                "schema": {
                    "$schema": "http://json-schema.org/draft-07/schema#",
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "pubDate": { "type": "string", "format": "date-time" },
                        "tags": { "type": "array", "items": { "type": "string" } },
                        "image.url": { "type": "string" },
                        "image.alt": { "type": "string" }
                    },
                    "required": ["title", "pubDate", "image"],
                    "additionalProperties": false
                }
            }
        ])
    );

    Ok(())
}

#[test]
fn test_generate_output_format() -> Result<()> {
    let test = CliTest::with_content_project()?;

    test.generate_command().output()?;

    let content = test.read_file(OUTPUT)?;
    assert!(content.starts_with("{\n  \"collections\": ["));
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_generate_prints_summary() -> Result<()> {
    let test = CliTest::with_content_project()?;

    let output = test.generate_command().output()?;
    let stdout = stdout(&output);
    assert!(stdout.contains("Generated 1 collection into"));
    assert!(stdout.contains("(1 skipped without glob loader)"));

    Ok(())
}

#[test]
fn test_generate_output_override() -> Result<()> {
    let test = CliTest::with_content_project()?;

    let output = test
        .generate_command()
        .args(["--output", "public/cms.json"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(test.root().join("public/cms.json").exists());
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".embodirc.json",
        r#"{ "configModule": "content/config.ts", "schemaDir": "schemas", "output": "cms.json" }"#,
    )?;
    test.write_file(
        "content/config.ts",
        r#"
const posts = defineCollection({
  loader: glob({ pattern: "*.md", base: "posts" }),
  schema: z.object({ title: z.string() }),
});
export const collections = { posts };
"#,
    )?;
    test.write_file(
        "schemas/posts.schema.json",
        r#"{ "type": "object", "properties": { "title": { "type": "string" } } }"#,
    )?;

    let output = test.generate_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let config = test.read_json("cms.json")?;
    assert_eq!(config["collections"][0]["formats"], json!(["md"]));
    assert_eq!(config["collections"][0]["displayName"], json!("Posts"));

    Ok(())
}

#[test]
fn test_generate_missing_schema_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/content.config.ts", crate::CONTENT_CONFIG)?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to read schema for collection `blogs`"));
    assert!(!test.root().join(OUTPUT).exists());

    Ok(())
}

#[test]
fn test_generate_schema_mismatch_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/content.config.ts", crate::CONTENT_CONFIG)?;
    test.write_file(
        ".astro/collections/blogs.schema.json",
        r#"{ "type": "object", "properties": { "title": { "type": "string" } } }"#,
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("path pubDate not found"));

    Ok(())
}

#[test]
fn test_generate_missing_export_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/content.config.ts",
        r#"export const other = { posts: defineCollection({}) };"#,
    )?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("collections export `collections` not found"));

    Ok(())
}

#[test]
fn test_generate_parse_error_names_module() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/content.config.ts", "export const collections = {")?;

    let output = test.generate_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("content.config.ts"));

    Ok(())
}
