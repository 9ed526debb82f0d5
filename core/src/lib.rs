//! Core launch descriptor types, errors and merge rules.
//!
//! This crate defines the data model shared by the `am start` argument parser
//! and the host side that hands descriptors to a platform launcher:
//!
//! - [`LaunchDescriptor`]: action, data, type, identifier, categories,
//!   component, package, flags, typed extras and an optional selector.
//! - [`ExtraValue`]: the closed set of typed extra values.
//! - [`Uri`] and [`ComponentName`]: validated value types.
//! - [`flags`]: the numeric flag bits the option grammar can set.
//!
//! Merging ([`merge_positional`], [`fill_in`]) reconciles an option-built
//! descriptor with the one derived from a trailing positional argument.
//! Validation ([`validate_descriptor`]) catches structural problems such as a
//! nested selector.
//!
//! # Example
//!
//! ```
//! use launch_intent_core::*;
//!
//! let mut primary = LaunchDescriptor::new()
//!     .with_extra("rom", ExtraValue::String("/sdcard/game.gba".into()));
//! primary.add_flags(flags::FLAG_ACTIVITY_CLEAR_TOP);
//!
//! let base = LaunchDescriptor::main_launcher()
//!     .with_component(ComponentName::unflatten("com.emu/.Main").unwrap());
//!
//! let merged = merge_positional(primary, Some(base), false).unwrap();
//! assert_eq!(merged.component.unwrap().class, "com.emu.Main");
//! assert!(merged.categories.contains(CATEGORY_LAUNCHER));
//! assert!(validate_descriptor(&LaunchDescriptor::main_launcher()).is_empty());
//! ```

mod error;
pub mod flags;
mod merge;
mod types;
mod validate;

pub use error::IntentError;
pub use merge::{fill_in, merge_positional};
pub use types::*;
pub use validate::{ValidationError, validate_descriptor};
