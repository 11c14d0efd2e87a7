//! Host collaborator interfaces
//!
//! Scoring and grading never touch a host directly. A host hands out the
//! active document as a [`LineSource`] plus [`MetadataStore`] and can show a
//! short notice to the user.

pub mod collect;
pub mod frontmatter;
pub mod markdown;

use crate::error::Result;

pub use collect::collect_documents;
pub use markdown::MarkdownDocument;

/// Key-value header of a document, in insertion order
pub type Metadata = serde_yaml::Mapping;

/// Read-only access to the lines of a document
pub trait LineSource {
    fn line_count(&self) -> usize;

    /// Line `index` without its terminator, or `None` past the end
    fn line(&self, index: usize) -> Option<&str>;

    fn lines(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new((0..self.line_count()).filter_map(move |index| self.line(index)))
    }
}

/// Read-modify-write access to a document's metadata header
pub trait MetadataStore {
    /// Hand the current metadata to `mutate` and persist the result once it
    /// returns. Keys the mutator leaves alone are written back unchanged.
    fn update_metadata<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Metadata);
}

/// The application the command runs inside
pub trait Host {
    type Document: LineSource + MetadataStore;

    fn active_document(&mut self) -> Option<&mut Self::Document>;

    /// Non-blocking notice for the user
    fn show_transient_message(&mut self, text: &str);
}
