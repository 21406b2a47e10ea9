//! API layer types: external-facing requests with validation.

pub mod error;
pub mod requests;

pub use requests::{
    CreateCategoryRequest, CreateProjectRequest, CreateTechnologyRequest, UpdateProjectRequest,
    UpsertHeaderRequest,
};
