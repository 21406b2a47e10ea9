use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The single editable heading block shown at the top of the projects page.
///
/// The content store keeps exactly one of these per site; updates replace it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HeaderSettings {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}
