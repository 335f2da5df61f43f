//! Sample entity used by the demo binary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hookline_hooks::prelude::*;

/// A titled document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document ID.
    pub id: Uuid,
    /// Document title.
    pub title: String,
}

impl Document {
    /// Creates a document with a fresh ID.
    pub fn new(title: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
        }
    }
}

/// Payload passed through hooks and work for document actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentChanges {
    /// Field updates requested by the caller.
    pub fields: serde_json::Map<String, serde_json::Value>,
    /// Steps recorded while the action ran.
    pub audit: Vec<String>,
}

impl Hookable<DocumentChanges> for Document {
    fn entity_name(&self) -> &str {
        "document"
    }

    fn validation(&self) -> Option<&dyn ValidationHooks<DocumentChanges>> {
        Some(self)
    }
}

#[async_trait]
impl ValidationHooks<DocumentChanges> for Document {
    async fn before_validation(&self, data: &mut DocumentChanges) -> AppResult<()> {
        data.audit.push("before_validation".to_string());
        if self.title.trim().is_empty() {
            return Err(AppError::validation("Document title must not be empty"));
        }
        Ok(())
    }

    async fn after_validation(&self, data: &mut DocumentChanges) -> AppResult<()> {
        data.audit.push("after_validation".to_string());
        Ok(())
    }
}
