//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_tags;
pub mod manage_config;
pub mod render_document;
pub mod scan_documents;
pub mod suggest_tags;

pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use render_document::RenderDocumentService;
pub use scan_documents::{ScanDocumentsService, ScanSummary};
pub use suggest_tags::SuggestTagsService;
