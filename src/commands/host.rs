//! Command-line host: the active document is the file being processed

use std::path::Path;

use oralgrade_core::document::{Host, MarkdownDocument};
use oralgrade_core::error::Result;

pub struct FileHost {
    document: Option<MarkdownDocument>,
    quiet: bool,
}

impl FileHost {
    /// Open `path` as the active document. A path that is not a file leaves
    /// the host without one; a file that cannot be read is an error.
    pub fn open(path: &Path, quiet: bool) -> Result<Self> {
        let document = if path.is_file() {
            Some(MarkdownDocument::open(path)?)
        } else {
            tracing::debug!(path = %path.display(), "no document at path");
            None
        };
        Ok(Self { document, quiet })
    }
}

impl Host for FileHost {
    type Document = MarkdownDocument;

    fn active_document(&mut self) -> Option<&mut MarkdownDocument> {
        self.document.as_mut()
    }

    fn show_transient_message(&mut self, text: &str) {
        tracing::info!(notice = text, "transient message");
        if !self.quiet {
            eprintln!("{}", text);
        }
    }
}
