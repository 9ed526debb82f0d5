//! Positional argument resolution.
//!
//! The token left after the options becomes a "base" descriptor that fills in
//! whatever the options did not set. `:` is checked before `/`, so a token
//! with both is a URI.

use launch_intent_core::{IntentError, LaunchDescriptor};
use tracing::debug;

use crate::decode::decode_component;
use crate::intent_uri::parse_intent_uri;

/// How a positional token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalKind {
    Uri,
    Component,
    Package,
}

impl PositionalKind {
    /// Classifies a positional token.
    ///
    /// # Examples
    ///
    /// ```
    /// use launch_intent_parser::resolve::PositionalKind;
    ///
    /// assert_eq!(PositionalKind::classify("content://x/y"), PositionalKind::Uri);
    /// assert_eq!(PositionalKind::classify("pkg/.Main"), PositionalKind::Component);
    /// assert_eq!(PositionalKind::classify("com.example"), PositionalKind::Package);
    /// ```
    pub fn classify(token: &str) -> Self {
        if token.contains(':') {
            Self::Uri
        } else if token.contains('/') {
            Self::Component
        } else {
            Self::Package
        }
    }
}

/// Builds the base descriptor for the positional argument.
///
/// With no argument, a base exists only when a selector was given: the
/// selector picks the component, so the main launcher entry point is assumed.
///
/// # Errors
///
/// Propagates URI and component decoding errors.
pub fn resolve_positional(
    arg: Option<&str>,
    has_selector: bool,
) -> Result<Option<LaunchDescriptor>, IntentError> {
    let Some(arg) = arg else {
        if has_selector {
            debug!("No positional argument, assuming main launcher for selector");
            return Ok(Some(LaunchDescriptor::main_launcher()));
        }
        return Ok(None);
    };

    let kind = PositionalKind::classify(arg);
    debug!(arg, kind = ?kind, "Resolving positional argument");

    let base = match kind {
        PositionalKind::Uri => parse_intent_uri(arg)?,
        PositionalKind::Component => {
            LaunchDescriptor::main_launcher().with_component(decode_component(arg)?)
        }
        PositionalKind::Package => LaunchDescriptor::main_launcher().with_package(arg),
    };
    Ok(Some(base))
}

#[cfg(test)]
mod tests {
    use launch_intent_core::{ACTION_MAIN, ACTION_VIEW, CATEGORY_LAUNCHER, ComponentName};

    use super::*;

    #[test]
    fn test_no_argument_without_selector() {
        assert_eq!(resolve_positional(None, false).unwrap(), None);
    }

    #[test]
    fn test_no_argument_with_selector() {
        let base = resolve_positional(None, true).unwrap().unwrap();
        assert_eq!(base, LaunchDescriptor::main_launcher());
    }

    #[test]
    fn test_package_argument() {
        let base = resolve_positional(Some("com.example.app"), false)
            .unwrap()
            .unwrap();
        assert_eq!(base.action.as_deref(), Some(ACTION_MAIN));
        assert!(base.categories.contains(CATEGORY_LAUNCHER));
        assert_eq!(base.package.as_deref(), Some("com.example.app"));
    }

    #[test]
    fn test_component_argument() {
        let base = resolve_positional(Some("pkg/.Main"), false)
            .unwrap()
            .unwrap();
        assert_eq!(base.component, Some(ComponentName::new("pkg", "pkg.Main")));
        assert!(base.package.is_none());
    }

    #[test]
    fn test_bad_component_argument() {
        assert_eq!(
            resolve_positional(Some("pkg/"), false),
            Err(IntentError::BadComponentName("pkg/".to_string()))
        );
    }

    #[test]
    fn test_colon_wins_over_slash() {
        assert_eq!(PositionalKind::classify("file:///a/b"), PositionalKind::Uri);
        let base = resolve_positional(Some("file:///a/b"), false)
            .unwrap()
            .unwrap();
        assert_eq!(base.action.as_deref(), Some(ACTION_VIEW));
        assert_eq!(base.data.unwrap().as_str(), "file:///a/b");
    }
}
