//! File-backed markdown document

use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter::{
    detect_newline, parse_metadata, render_document, split_frontmatter, BOM,
};
use super::{LineSource, Metadata, MetadataStore};
use crate::error::{OralgradeError, Result};

/// A markdown file loaded into memory
#[derive(Debug, Clone)]
pub struct MarkdownDocument {
    path: PathBuf,
    content: String,
    lines: Vec<String>,
}

impl MarkdownDocument {
    /// Load the document at `path`
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| OralgradeError::io_operation("read", path.display(), e))?;
        Ok(Self::with_content(path.to_path_buf(), content))
    }

    fn with_content(path: PathBuf, content: String) -> Self {
        let lines = split_lines(&content);
        Self {
            path,
            content,
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current header, empty when the document has none
    pub fn metadata(&self) -> Result<Metadata> {
        match split_frontmatter(&self.content, &self.path)?.yaml {
            Some(yaml) => parse_metadata(yaml, &self.path),
            None => Ok(Metadata::new()),
        }
    }

    /// Replace the file through a sibling temp file so readers never see a
    /// half-written document.
    fn persist(&mut self, content: String) -> Result<()> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = self
            .path
            .with_file_name(format!(".{}.oralgrade.tmp", file_name));

        fs::write(&tmp_path, &content)
            .map_err(|e| OralgradeError::io_operation("write", tmp_path.display(), e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(OralgradeError::io_operation(
                "replace",
                self.path.display(),
                e,
            ));
        }

        self.lines = split_lines(&content);
        self.content = content;
        Ok(())
    }
}

/// Lines as a reader sees them; a leading byte order mark is not content
fn split_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix(BOM)
        .unwrap_or(content)
        .lines()
        .map(str::to_string)
        .collect()
}

impl LineSource for MarkdownDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl MetadataStore for MarkdownDocument {
    #[tracing::instrument(skip(self, mutate), fields(path = %self.path.display()))]
    fn update_metadata<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Metadata),
    {
        let split = split_frontmatter(&self.content, &self.path)?;
        let mut metadata = match split.yaml {
            Some(yaml) => parse_metadata(yaml, &self.path)?,
            None => Metadata::new(),
        };

        mutate(&mut metadata);

        let mut rendered = render_document(&metadata, split.body, detect_newline(&self.content))?;
        if self.content.starts_with(BOM) {
            rendered.insert(0, BOM);
        }
        tracing::debug!(keys = metadata.len(), "writing metadata");
        self.persist(rendered)
    }
}
