//! API validation errors

use thiserror::Error;

/// Errors that can occur while validating a header settings update
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeaderValidationError {
    #[error("Heading cannot be empty or whitespace")]
    EmptyHeading,

    #[error("Heading length {length} is invalid. Must be at most {max} characters.")]
    HeadingTooLong { length: usize, max: usize },
}

/// Errors that can occur while validating a category request
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty or whitespace")]
    EmptyName,

    #[error("Category name length {length} is invalid. Must be at most {max} characters.")]
    NameTooLong { length: usize, max: usize },
}

/// Errors that can occur while validating a project request
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectValidationError {
    #[error("Project title cannot be empty or whitespace")]
    EmptyTitle,

    #[error("Project title length {length} is invalid. Must be at most {max} characters.")]
    TitleTooLong { length: usize, max: usize },

    #[error("Project summary cannot be empty or whitespace")]
    EmptySummary,
}

/// Errors that can occur while validating a technology request
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TechnologyValidationError {
    #[error("Technology name cannot be empty or whitespace")]
    EmptyName,

    #[error("Technology name length {length} is invalid. Must be at most {max} characters.")]
    NameTooLong { length: usize, max: usize },
}
