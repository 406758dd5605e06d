use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use serde_json::Value;
use tempfile::TempDir;

mod generate;
mod init;
mod inspect;

const BIN_NAME: &str = "embodi";

pub const CONTENT_CONFIG: &str = r#"
import { glob, file } from "astro/loaders";
import { defineCollection, z } from "astro:content";

const blogsCollection = defineCollection({
  loader: glob({ pattern: "**/*.{md,mdx}", base: "./src/content/blogs" }),
  schema: ({ image }) =>
    z.object({
      title: z.string(),
      pubDate: z.date(),
      tags: z.array(z.string()).optional(),
      image: z.object({
        url: image(),
        alt: z.string().optional(),
      }),
    }),
});

const dataFile = defineCollection({
  loader: file("./src/content/data.yml"),
});

export const collections = {
  blogs: blogsCollection,
  data: dataFile,
};
"#;

pub const BLOGS_SCHEMA: &str = r##"{
  "$ref": "#/definitions/blogs",
  "definitions": {
    "blogs": {
      "type": "object",
      "properties": {
        "title": { "type": "string" },
        "pubDate": {
          "anyOf": [
            { "type": "string", "format": "date-time" },
            { "type": "string", "format": "date" },
            { "type": "integer", "format": "unix-time" }
          ]
        },
        "tags": { "type": "array", "items": { "type": "string" } },
        "image": {
          "type": "object",
          "properties": {
            "url": { "type": "string" },
            "alt": { "type": "string" }
          },
          "required": ["url"],
          "additionalProperties": false
        }
      },
      "required": ["title", "pubDate", "image"],
      "additionalProperties": false
    }
  },
  "$schema": "http://json-schema.org/draft-07/schema#"
}"##;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with the blog/data content module and the blogs schema.
    pub fn with_content_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("src/content.config.ts", CONTENT_CONFIG)?;
        test.write_file(".astro/collections/blogs.schema.json", BLOGS_SCHEMA)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("EMBODI_LOG", "off");
        cmd
    }

    pub fn generate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("generate");
        cmd
    }

    pub fn inspect_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("inspect");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn read_json(&self, path: &str) -> Result<Value> {
        let content = self.read_file(path)?;
        serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
