//! Summary printing for CLI commands.
//!
//! Kept apart from the core so the library can be used without a terminal.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::core::CmsConfig;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the one-line summary of a generation run to stdout.
pub fn print_generated(config: &CmsConfig, exported: usize, output: &Path) {
    print_generated_to(config, exported, output, &mut io::stdout().lock());
}

/// Print the generation summary to a custom writer.
pub fn print_generated_to<W: Write>(
    config: &CmsConfig,
    exported: usize,
    output: &Path,
    writer: &mut W,
) {
    let written = config.collections.len();
    let mut msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} {} into {}",
            written,
            pluralize(written, "collection"),
            output.display()
        )
        .green()
    );

    let skipped = exported.saturating_sub(written);
    if skipped > 0 {
        msg.push_str(&format!(
            " ({} skipped without glob loader)",
            skipped.to_string().yellow()
        ));
    }

    let _ = writeln!(writer, "{}", msg);
}

fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CmsCollection;
    use crate::core::extract::{GlobLoader, LoaderConfig};

    fn config(names: &[&str]) -> CmsConfig {
        CmsConfig {
            collections: names
                .iter()
                .map(|name| CmsCollection {
                    name: name.to_string(),
                    display_name: name.to_string(),
                    loader: LoaderConfig::Glob(GlobLoader::default()),
                    formats: Vec::new(),
                    schema: serde_json::json!({}),
                })
                .collect(),
            updated_at: 0,
        }
    }

    fn render(config: &CmsConfig, exported: usize) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        print_generated_to(config, exported, Path::new("out/cms.json"), &mut output);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_summary_single_collection() {
        assert_eq!(
            render(&config(&["blogs"]), 1),
            "\u{2713} Generated 1 collection into out/cms.json\n"
        );
    }

    #[test]
    fn test_summary_reports_skipped() {
        assert_eq!(
            render(&config(&["blogs", "notes"]), 3),
            "\u{2713} Generated 2 collections into out/cms.json (1 skipped without glob loader)\n"
        );
    }
}
