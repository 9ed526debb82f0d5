//! Descriptor validation.
//!
//! Checks structural invariants of a finished descriptor before it is handed
//! to a launcher: a selector may not nest another selector, and names that
//! the launcher keys on may not be empty.
//!
//! # Examples
//!
//! ```
//! use launch_intent_core::*;
//!
//! let ok = LaunchDescriptor::main_launcher().with_package("com.example");
//! assert!(validate_descriptor(&ok).is_empty());
//!
//! let bad = LaunchDescriptor::new().with_category("");
//! assert_eq!(validate_descriptor(&bad), vec![ValidationError::EmptyCategory]);
//! ```

use thiserror::Error;

use crate::LaunchDescriptor;

/// Descriptor validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The selector carries a selector of its own.
    #[error("selector cannot carry its own selector")]
    NestedSelector,
    /// The selector names no action, data, type, category, component or package.
    #[error("selector has no content")]
    EmptySelector,
    /// Action is present but empty.
    #[error("action cannot be empty")]
    EmptyAction,
    /// Package is present but empty.
    #[error("package cannot be empty")]
    EmptyPackage,
    /// A category name is empty.
    #[error("category cannot be empty")]
    EmptyCategory,
    /// An extra has an empty key.
    #[error("extra key cannot be empty")]
    EmptyExtraKey,
}

/// Validates a descriptor and its selector.
///
/// Returns every problem found; an empty vector means the descriptor is
/// well-formed.
pub fn validate_descriptor(descriptor: &LaunchDescriptor) -> Vec<ValidationError> {
    let mut errors = validate_fields(descriptor);

    if let Some(selector) = &descriptor.selector {
        if selector.selector.is_some() {
            errors.push(ValidationError::NestedSelector);
        }
        if !selector.has_intent_info() {
            errors.push(ValidationError::EmptySelector);
        }
        errors.extend(validate_fields(selector));
    }

    errors
}

fn validate_fields(descriptor: &LaunchDescriptor) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if descriptor.action.as_deref().is_some_and(str::is_empty) {
        errors.push(ValidationError::EmptyAction);
    }
    if descriptor.package.as_deref().is_some_and(str::is_empty) {
        errors.push(ValidationError::EmptyPackage);
    }
    if descriptor.categories.iter().any(String::is_empty) {
        errors.push(ValidationError::EmptyCategory);
    }
    if descriptor.extras.keys().any(String::is_empty) {
        errors.push(ValidationError::EmptyExtraKey);
    }

    errors
}
