//! Scan documents use case
//!
//! Registration side effects without rendering: walk a directory of portal
//! documents and feed changed ones through the registry.

use super::render_document::register_document;
use crate::domain::markup::tokenize;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PortalRepository};
use std::fs;
use std::path::Path;

/// Outcome of one scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Documents visited
    pub documents: usize,
    /// Documents whose hashtags were (re-)registered
    pub registered: usize,
}

/// Service for bulk hashtag registration across a document tree.
pub struct ScanDocumentsService {
    repository: FileSystemRepository,
}

impl ScanDocumentsService {
    /// Create a new scan service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Walk `dir` (default: the store root) and register hashtags from
    /// every document whose content changed since the last registration.
    pub fn execute(&self, dir: Option<&Path>) -> Result<ScanSummary> {
        let root = self.repository.root().to_path_buf();
        let dir = dir.unwrap_or(&root);
        let documents = self.repository.list_documents(dir)?;

        let mut state = self.repository.load_state()?;
        let mut registered = 0;
        for path in &documents {
            let content = fs::read_to_string(path)?;
            let tokens = tokenize(&content);
            let key = self.repository.document_key(path);
            if register_document(&mut state, &key, &content, &tokens) {
                registered += 1;
            }
        }

        if registered > 0 {
            self.repository.save_state(&state)?;
        }

        Ok(ScanSummary {
            documents: documents.len(),
            registered,
        })
    }
}
