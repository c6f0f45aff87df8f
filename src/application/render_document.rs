//! Render document use case
//!
//! Tokenizes one document for display and feeds every hashtag occurrence to
//! the registry, in left-to-right token order. Registration is keyed off
//! content identity: rendering the same bytes again is a no-op.

use crate::domain::markup::{tokenize, Token};
use crate::domain::tags::TagRegistry;
use crate::error::Result;
use crate::infrastructure::{
    content_fingerprint, FileSystemRepository, PortalRepository, RegistryState,
};
use std::fs;
use std::path::Path;

/// Service for rendering a document as a token stream.
pub struct RenderDocumentService {
    repository: FileSystemRepository,
}

impl RenderDocumentService {
    /// Create a new render service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Tokenize the document, register its hashtags if the content changed
    /// since the last registration, and return the token stream.
    pub fn execute(&self, file: &Path) -> Result<Vec<Token>> {
        let content = fs::read_to_string(file)?;
        let tokens = tokenize(&content);

        let mut state = self.repository.load_state()?;
        let key = self.repository.document_key(file);
        if register_document(&mut state, &key, &content, &tokens) {
            self.repository.save_state(&state)?;
        }

        Ok(tokens)
    }
}

/// Register one document's hashtag occurrences into the state.
///
/// Returns false without touching the state when the document's fingerprint
/// matches the recorded one, so unchanged content never double counts.
pub(crate) fn register_document(
    state: &mut RegistryState,
    key: &str,
    content: &str,
    tokens: &[Token],
) -> bool {
    let fingerprint = content_fingerprint(content);
    if state.documents.get(key) == Some(&fingerprint) {
        return false;
    }

    let mut registry = TagRegistry::from_entries(std::mem::take(&mut state.tags));
    for token in tokens {
        if let Token::Hashtag(raw) = token {
            registry.register(raw);
        }
    }
    state.tags = registry.into_entries();
    state.documents.insert(key.to_string(), fingerprint);
    true
}
