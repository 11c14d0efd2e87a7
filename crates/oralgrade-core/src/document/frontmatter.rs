//! Best-effort YAML frontmatter handling
//!
//! A header is recognised only when the very first line is `---`; it runs to
//! the next `---` line. Everything after that line is the body and is written
//! back byte for byte.

use std::path::Path;

use super::Metadata;
use crate::bail_frontmatter;
use crate::error::Result;
use crate::score::FRONTMATTER_DELIMITER;

/// Byte order mark some editors put in front of UTF-8 files
pub const BOM: char = '\u{feff}';

/// A document cut into its header and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    /// Raw YAML between the delimiters, `None` when the document has no header
    pub yaml: Option<&'a str>,
    pub body: &'a str,
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == FRONTMATTER_DELIMITER
}

/// Split `content` into frontmatter YAML and body
pub fn split_frontmatter<'a>(content: &'a str, path: &Path) -> Result<SplitDocument<'a>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let Some(first_end) = content.find('\n') else {
        if is_delimiter(content) {
            bail_frontmatter!(path, "missing closing frontmatter delimiter (---)");
        }
        return Ok(SplitDocument {
            yaml: None,
            body: content,
        });
    };

    if !is_delimiter(&content[..first_end]) {
        return Ok(SplitDocument {
            yaml: None,
            body: content,
        });
    }

    let yaml_start = first_end + 1;
    let mut offset = yaml_start;
    for line in content[yaml_start..].split_inclusive('\n') {
        if is_delimiter(line) {
            return Ok(SplitDocument {
                yaml: Some(&content[yaml_start..offset]),
                body: &content[offset + line.len()..],
            });
        }
        offset += line.len();
    }

    bail_frontmatter!(path, "missing closing frontmatter delimiter (---)")
}

/// Parse header YAML into a mapping; an empty header is an empty mapping
pub fn parse_metadata(yaml: &str, path: &Path) -> Result<Metadata> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }

    match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
        Ok(serde_yaml::Value::Mapping(mapping)) => Ok(mapping),
        Ok(serde_yaml::Value::Null) => Ok(Metadata::new()),
        Ok(_) => bail_frontmatter!(path, "frontmatter is not a key-value mapping"),
        Err(e) => bail_frontmatter!(path, e),
    }
}

/// Render a header and body back into a document
pub fn render_document(metadata: &Metadata, body: &str, newline: &str) -> Result<String> {
    let yaml = serde_yaml::to_string(metadata)?;
    let mut rendered = String::with_capacity(yaml.len() + body.len() + 8);
    rendered.push_str(FRONTMATTER_DELIMITER);
    rendered.push('\n');
    rendered.push_str(&yaml);
    if !yaml.ends_with('\n') {
        rendered.push('\n');
    }
    rendered.push_str(FRONTMATTER_DELIMITER);
    rendered.push('\n');

    let mut rendered = if newline == "\n" {
        rendered
    } else {
        rendered.replace('\n', newline)
    };
    rendered.push_str(body);
    Ok(rendered)
}

/// Line terminator used by the document, defaulting to `\n`
pub fn detect_newline(content: &str) -> &'static str {
    if content.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}
