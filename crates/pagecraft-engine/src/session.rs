//! # Edit Session
//!
//! The engine side of an editing surface. The surface owns all interaction and
//! hands back a complete document after every change; the session validates it,
//! keeps it as the current document and re-renders on demand. Edits are full
//! replacements, never patches.

use crate::codec::{self, CodecError};
use crate::document::Document;
use crate::registry::Registry;
use crate::render::{Markup, Renderer};
use crate::resolve::{ResolveError, ResolveReport, Resolver, ValidationMode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Rejected(#[from] ResolveError),
}

pub struct EditSession<'r> {
    registry: &'r Registry,
    mode: ValidationMode,
    document: Document,
    revision: u64,
}

impl<'r> EditSession<'r> {
    pub fn new(registry: &'r Registry, document: Document) -> Self {
        Self {
            registry,
            mode: ValidationMode::default(),
            document,
            revision: 0,
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn current(&self) -> &Document {
        &self.document
    }

    /// Number of accepted commits since the session started.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn resolver(&self) -> Resolver<'r> {
        Resolver::new(self.registry).with_mode(self.mode)
    }

    /// Replace the current document.
    ///
    /// Returns the reports of the accepted document. A rejected document leaves
    /// the current one untouched.
    pub fn commit(&mut self, document: Document) -> Result<Vec<ResolveReport>, SessionError> {
        let page = self.resolver().resolve(&document)?;
        self.document = document;
        self.revision += 1;
        log::info!(
            "revision {} accepted ({} blocks)",
            self.revision,
            self.document.block_count()
        );
        Ok(page.reports)
    }

    /// Decode `text` and commit it.
    pub fn import(&mut self, text: &str) -> Result<Vec<ResolveReport>, SessionError> {
        let document = codec::decode(text)?;
        self.commit(document)
    }

    pub fn export(&self) -> Result<String, CodecError> {
        codec::encode(&self.document)
    }

    /// Render the current document.
    pub fn preview(&self) -> Result<Markup, SessionError> {
        let page = self.resolver().resolve(&self.document)?;
        Ok(Renderer::new(self.registry).render_page(&page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ReportKind;
    use crate::tests::test_registry;
    use pretty_assertions::assert_eq;

    const TWO_LEAVES: &str = r#"{"content":[
        {"type":"Leaf","id":"a","props":{"label":"A"}},
        {"type":"Leaf","id":"b","props":{"label":"B"}}
    ]}"#;

    #[test]
    fn import_replaces_document_and_bumps_revision() {
        let registry = test_registry();
        let mut session = EditSession::new(&registry, Document::empty());

        let reports = session.import(TWO_LEAVES).unwrap();

        assert!(reports.is_empty());
        assert_eq!(session.revision(), 1);
        assert_eq!(session.current().block_count(), 2);
        assert_eq!(
            session.preview().unwrap().as_str(),
            "<page><leaf>A</leaf><leaf>B</leaf></page>"
        );
    }

    #[test]
    fn shape_error_keeps_previous_document() {
        let registry = test_registry();
        let mut session = EditSession::new(&registry, Document::empty());
        session.import(TWO_LEAVES).unwrap();
        let before = session.current().clone();

        let err = session.import(r#"{"content":"nope"}"#).unwrap_err();

        assert!(matches!(err, SessionError::Codec(ref e) if e.is_shape_error()));
        assert_eq!(session.current(), &before);
        assert_eq!(session.revision(), 1);
    }

    #[test]
    fn lenient_commit_returns_reports() {
        let registry = test_registry();
        let mut session = EditSession::new(&registry, Document::empty());

        let reports = session
            .import(r#"{"content":[{"type":"Gone","id":"x"}]}"#)
            .unwrap();

        assert_eq!(reports[0].kind, ReportKind::UnknownType);
        assert_eq!(session.revision(), 1);
        assert_eq!(session.preview().unwrap().as_str(), "<page></page>");
    }

    #[test]
    fn strict_commit_rejects_and_keeps_previous() {
        let registry = test_registry();
        let mut session =
            EditSession::new(&registry, Document::empty()).with_mode(ValidationMode::Strict);

        let err = session
            .import(r#"{"content":[{"type":"Gone","id":"x"}]}"#)
            .unwrap_err();

        assert!(matches!(err, SessionError::Rejected(ResolveError::Rejected(ref r)) if r.len() == 1));
        assert_eq!(session.current(), &Document::empty());
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn export_round_trips() {
        let registry = test_registry();
        let mut session = EditSession::new(&registry, Document::empty());
        session.import(TWO_LEAVES).unwrap();

        let text = session.export().unwrap();

        assert_eq!(&codec::decode(&text).unwrap(), session.current());
    }
}
