//! Descriptor merging for the positional-argument step.
//!
//! After option parsing, the leftover positional token may yield a second
//! "base" descriptor. [`merge_positional`] reconciles the two: fields the
//! options left empty are filled from the base, and the extras bag follows a
//! whole-map precedence rule rather than a key-wise merge.
//!
//! # Example
//!
//! ```
//! use launch_intent_core::*;
//!
//! let primary = LaunchDescriptor::new().with_action("com.example.PLAY");
//! let base = LaunchDescriptor::main_launcher().with_package("com.example.app");
//!
//! let merged = merge_positional(primary, Some(base), true).unwrap();
//! assert_eq!(merged.action.as_deref(), Some("com.example.PLAY"));
//! assert_eq!(merged.package.as_deref(), Some("com.example.app"));
//! // Explicit action: the launcher category of the base is not carried over.
//! assert!(merged.categories.is_empty());
//! ```

use tracing::debug;

use crate::{IntentError, LaunchDescriptor};

/// Fills fields of `target` that are unset from `base`.
///
/// - action, identifier, component: taken from `base` when absent on `target`;
/// - data and type move as a pair, only when `target` has neither;
/// - categories move as a whole set, only when `target` has none;
/// - package: only when `target` has neither a package nor a selector;
/// - selector: only when `target` has neither a selector nor a package;
/// - flags are OR'd;
/// - extras are left alone; [`merge_positional`] owns that rule.
///
/// # Examples
///
/// ```
/// use launch_intent_core::*;
///
/// let mut target = LaunchDescriptor::new().with_package("explicit.pkg");
/// let base = LaunchDescriptor::main_launcher().with_package("base.pkg");
/// fill_in(&mut target, base);
///
/// assert_eq!(target.package.as_deref(), Some("explicit.pkg"));
/// assert_eq!(target.action.as_deref(), Some(ACTION_MAIN));
/// ```
pub fn fill_in(target: &mut LaunchDescriptor, base: LaunchDescriptor) {
    if target.action.is_none() {
        target.action = base.action;
    }
    if (base.data.is_some() || base.mime_type.is_some())
        && target.data.is_none()
        && target.mime_type.is_none()
    {
        target.set_data_and_type(base.data, base.mime_type);
    }
    if target.identifier.is_none() {
        target.identifier = base.identifier;
    }
    if !base.categories.is_empty() && target.categories.is_empty() {
        target.categories = base.categories;
    }
    if base.package.is_some() && target.package.is_none() && target.selector.is_none() {
        target.package = base.package;
    }
    if base.selector.is_some() && target.selector.is_none() && target.package.is_none() {
        target.selector = base.selector;
    }
    if target.component.is_none() {
        target.component = base.component;
    }
    target.flags |= base.flags;
}

/// Merges the option-built descriptor with the positional-argument base.
///
/// `has_intent_info` records whether any targeting option was applied to the
/// primary descriptor during option parsing.
///
/// Extras: when the primary has any extras they win entirely and the base's
/// extras are dropped; otherwise the base's extras are used. Categories of the
/// base are discarded when the primary already names an action.
///
/// # Errors
///
/// Returns [`IntentError::NoIntentSupplied`] when there is no base and the
/// primary carried no targeting option, or when the merged result is still
/// empty.
pub fn merge_positional(
    mut primary: LaunchDescriptor,
    base: Option<LaunchDescriptor>,
    has_intent_info: bool,
) -> Result<LaunchDescriptor, IntentError> {
    let Some(mut base) = base else {
        if !has_intent_info {
            return Err(IntentError::NoIntentSupplied);
        }
        return Ok(primary);
    };

    let explicit_extras = std::mem::take(&mut primary.extras);
    let base_extras = std::mem::take(&mut base.extras);

    if primary.action.is_some() && !base.categories.is_empty() {
        debug!(
            categories = ?base.categories,
            "Dropping base categories for explicit action"
        );
        base.categories.clear();
    }

    fill_in(&mut primary, base);

    primary.extras = if explicit_extras.is_empty() {
        base_extras
    } else {
        if !base_extras.is_empty() {
            debug!(
                dropped = base_extras.len(),
                "Explicit extras shadow positional extras"
            );
        }
        explicit_extras
    };

    if !primary.has_intent_info() {
        return Err(IntentError::NoIntentSupplied);
    }
    Ok(primary)
}
