//! API layer request types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::error::{
    CategoryValidationError, HeaderValidationError, ProjectValidationError,
    TechnologyValidationError,
};

/// Validation constants for content requests
pub mod validation_constants {
    pub const MAX_HEADING_LENGTH: usize = 120;
    pub const MAX_NAME_LENGTH: usize = 60;
    pub const MAX_TITLE_LENGTH: usize = 160;
}

/// Request to replace the projects header settings record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertHeaderRequest {
    pub heading: String,
    pub subheading: String,
    pub description: String,
}

impl UpsertHeaderRequest {
    /// Validate all header constraints
    pub fn validate(&self) -> Result<(), HeaderValidationError> {
        if self.heading.trim().is_empty() {
            return Err(HeaderValidationError::EmptyHeading);
        }
        let length = self.heading.len();
        if length > validation_constants::MAX_HEADING_LENGTH {
            return Err(HeaderValidationError::HeadingTooLong {
                length,
                max: validation_constants::MAX_HEADING_LENGTH,
            });
        }
        Ok(())
    }
}

/// Request to create a project category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub display_order: i32,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        let length = self.name.len();
        if length > validation_constants::MAX_NAME_LENGTH {
            return Err(CategoryValidationError::NameTooLong {
                length,
                max: validation_constants::MAX_NAME_LENGTH,
            });
        }
        Ok(())
    }
}

/// Request to create a project listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    #[serde(default)]
    pub technology_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub display_order: i32,
    #[serde(default)]
    pub published: bool,
}

impl CreateProjectRequest {
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        validate_project_text(&self.title, &self.summary)
    }
}

/// Request to replace a project listing entry.
///
/// Identical field set to [CreateProjectRequest]; the entry id travels in the path.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    #[serde(default)]
    pub technology_ids: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub display_order: i32,
    #[serde(default)]
    pub published: bool,
}

impl UpdateProjectRequest {
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        validate_project_text(&self.title, &self.summary)
    }
}

fn validate_project_text(title: &str, summary: &str) -> Result<(), ProjectValidationError> {
    if title.trim().is_empty() {
        return Err(ProjectValidationError::EmptyTitle);
    }
    let length = title.len();
    if length > validation_constants::MAX_TITLE_LENGTH {
        return Err(ProjectValidationError::TitleTooLong {
            length,
            max: validation_constants::MAX_TITLE_LENGTH,
        });
    }
    if summary.trim().is_empty() {
        return Err(ProjectValidationError::EmptySummary);
    }
    Ok(())
}

/// Request to create a technology tag.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTechnologyRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub display_order: i32,
}

impl CreateTechnologyRequest {
    pub fn validate(&self) -> Result<(), TechnologyValidationError> {
        if self.name.trim().is_empty() {
            return Err(TechnologyValidationError::EmptyName);
        }
        let length = self.name.len();
        if length > validation_constants::MAX_NAME_LENGTH {
            return Err(TechnologyValidationError::NameTooLong {
                length,
                max: validation_constants::MAX_NAME_LENGTH,
            });
        }
        Ok(())
    }
}
