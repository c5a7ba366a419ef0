pub mod assistant;
pub mod chat;
pub mod document;
pub mod glossary;
pub mod highlight;
pub mod preferences;
pub mod protect;
pub mod summary;
pub mod upload;

// Re-export main types for convenience
pub use assistant::{respond, QaMode, Reply, Source, SourceKind, RESPONSE_LATENCY};
pub use chat::{ChatMessage, ChatRole, ChatSession, Submitted};
pub use glossary::{Category, GlossaryTerm};
pub use highlight::{highlight, Segment};
pub use preferences::{Language, Preferences, PreferencesStore, ReadingLevel, StoreError};
pub use summary::{SummaryContent, SummaryKind};
pub use upload::{FileKind, UploadError, UploadedFile};
