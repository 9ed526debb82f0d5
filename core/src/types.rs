//! Launch descriptor type definitions.
//!
//! This module defines the data model produced by the parser: the
//! [`LaunchDescriptor`] itself, the typed [`ExtraValue`] bag entries, and the
//! small value types ([`Uri`], [`ComponentName`]) shared between the option
//! grammar and the intent-URI grammar. All types serialize with [`serde`].

use std::collections::BTreeSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::IntentError;

/// Default action for launcher-style descriptors.
pub const ACTION_MAIN: &str = "android.intent.action.MAIN";
/// Default action for URI-derived descriptors.
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";
/// Category marking an application's main entry point.
pub const CATEGORY_LAUNCHER: &str = "android.intent.category.LAUNCHER";

/// Ordered extras bag. Keys are unique; a later insert replaces the value but
/// keeps the original position.
pub type Extras = IndexMap<String, ExtraValue>;

/// A data reference.
///
/// Parsing is lenient, matching how launch commands are written in practice
/// (plain filesystem paths with spaces are accepted). A value is rejected when
/// it is empty, contains control characters, or starts with something that
/// looks like a scheme but is not one.
///
/// # Examples
///
/// ```
/// use launch_intent_core::Uri;
///
/// let uri = Uri::parse("content://media/external/images/1").unwrap();
/// assert_eq!(uri.scheme(), Some("content"));
///
/// let path = Uri::parse("/sdcard/My Roms/game.zip").unwrap();
/// assert_eq!(path.scheme(), None);
///
/// assert!(Uri::parse("1http://bad").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri(String);

impl Uri {
    /// Parses a URI reference.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::MalformedUri`] for unparsable input.
    pub fn parse(raw: &str) -> Result<Self, IntentError> {
        if raw.is_empty() || raw.chars().any(char::is_control) {
            return Err(IntentError::MalformedUri(raw.to_string()));
        }
        if let Some(head) = scheme_candidate(raw)
            && !is_valid_scheme(head)
        {
            return Err(IntentError::MalformedUri(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the raw URI text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the scheme, if the URI is absolute.
    pub fn scheme(&self) -> Option<&str> {
        scheme_candidate(&self.0)
    }

    /// Returns everything after `scheme:`, or the whole text for relative
    /// references.
    pub fn scheme_specific_part(&self) -> &str {
        match self.scheme() {
            Some(scheme) => &self.0[scheme.len() + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Uri {
    type Error = IntentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.0
    }
}

/// Text before the first `:` when no path, query or fragment delimiter comes
/// before it.
fn scheme_candidate(raw: &str) -> Option<&str> {
    let colon = raw.find(':')?;
    let head = &raw[..colon];
    if head.contains(['/', '?', '#']) {
        return None;
    }
    Some(head)
}

fn is_valid_scheme(head: &str) -> bool {
    let mut chars = head.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Explicit component reference: a package plus a fully-qualified class.
///
/// # Examples
///
/// ```
/// use launch_intent_core::ComponentName;
///
/// let cn = ComponentName::unflatten("com.example/.MainActivity").unwrap();
/// assert_eq!(cn.package, "com.example");
/// assert_eq!(cn.class, "com.example.MainActivity");
/// assert_eq!(cn.flatten_short(), "com.example/.MainActivity");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentName {
    /// Package that owns the component.
    pub package: String,
    /// Fully-qualified class name.
    pub class: String,
}

impl ComponentName {
    /// Creates a component reference.
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    /// Parses `package/class`, splitting on the first `/`.
    ///
    /// A class starting with `.` is relative to the package.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::BadComponentName`] when there is no `/` or
    /// either half is empty.
    pub fn unflatten(raw: &str) -> Result<Self, IntentError> {
        let Some((package, class)) = raw.split_once('/') else {
            return Err(IntentError::BadComponentName(raw.to_string()));
        };
        if package.is_empty() || class.is_empty() {
            return Err(IntentError::BadComponentName(raw.to_string()));
        }
        let class = if class.starts_with('.') {
            format!("{package}{class}")
        } else {
            class.to_string()
        };
        Ok(Self::new(package, class))
    }

    /// Returns `package/class`.
    pub fn flatten(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }

    /// Returns `package/class`, abbreviating the class to `.Name` when it
    /// lives inside the package.
    pub fn flatten_short(&self) -> String {
        match self.class.strip_prefix(self.package.as_str()) {
            Some(rest) if rest.starts_with('.') => format!("{}/{rest}", self.package),
            _ => self.flatten(),
        }
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}

/// Container flavor of a list extra.
///
/// The launcher distinguishes plain arrays (`--eia`) from array lists
/// (`--eial`); elements decode the same way for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    #[default]
    Array,
    ArrayList,
}

/// Typed value of one named extra.
///
/// Lists are homogeneous. `Byte`, `Short`, `Char` and `Double` only arise
/// from intent URIs; the option grammar has no switch for them.
///
/// # Examples
///
/// ```
/// use launch_intent_core::{ExtraValue, ListKind};
///
/// let v = ExtraValue::IntList { values: vec![1, 2, 3], kind: ListKind::Array };
/// assert_eq!(v.type_name(), "int[]");
/// assert_eq!(ExtraValue::Bool(true).type_name(), "boolean");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExtraValue {
    /// Key present with no string value (`--esn`).
    Null,
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Byte(i8),
    Short(i16),
    Char(char),
    Uri(Uri),
    Component(ComponentName),
    IntList { values: Vec<i32>, kind: ListKind },
    LongList { values: Vec<i64>, kind: ListKind },
    FloatList { values: Vec<f32>, kind: ListKind },
    StringList { values: Vec<String>, kind: ListKind },
}

impl ExtraValue {
    /// Short type label used in human-readable output.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::Bool(_) => "boolean",
            Self::Byte(_) => "byte",
            Self::Short(_) => "short",
            Self::Char(_) => "char",
            Self::Uri(_) => "uri",
            Self::Component(_) => "component",
            Self::IntList { kind, .. } => list_label(*kind, "int[]", "ArrayList<Integer>"),
            Self::LongList { kind, .. } => list_label(*kind, "long[]", "ArrayList<Long>"),
            Self::FloatList { kind, .. } => list_label(*kind, "float[]", "ArrayList<Float>"),
            Self::StringList { kind, .. } => list_label(*kind, "String[]", "ArrayList<String>"),
        }
    }
}

fn list_label(kind: ListKind, array: &'static str, list: &'static str) -> &'static str {
    match kind {
        ListKind::Array => array,
        ListKind::ArrayList => list,
    }
}

impl fmt::Display for ExtraValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(values: &[T]) -> String {
            values
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }

        match self {
            Self::Null => f.write_str("null"),
            Self::String(v) => f.write_str(v),
            Self::Int(v) => write!(f, "{v}"),
            Self::Long(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v}"),
            Self::Uri(v) => write!(f, "{v}"),
            Self::Component(v) => write!(f, "{v}"),
            Self::IntList { values, .. } => f.write_str(&join(values)),
            Self::LongList { values, .. } => f.write_str(&join(values)),
            Self::FloatList { values, .. } => f.write_str(&join(values)),
            Self::StringList { values, .. } => f.write_str(&values.join(",")),
        }
    }
}

/// Structured description of a component-launch request.
///
/// Produced by the parser, never executed by this crate. At most one level of
/// [`selector`](LaunchDescriptor::selector) nesting is meaningful; see
/// [`validate_descriptor`](crate::validate_descriptor).
///
/// # Examples
///
/// ```
/// use launch_intent_core::*;
///
/// let launcher = LaunchDescriptor::main_launcher().with_package("com.example.app");
/// assert_eq!(launcher.action.as_deref(), Some(ACTION_MAIN));
/// assert!(launcher.categories.contains(CATEGORY_LAUNCHER));
/// assert!(launcher.has_intent_info());
///
/// assert!(!LaunchDescriptor::new().has_intent_info());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchDescriptor {
    /// Action name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Data reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Uri>,
    /// MIME type of the data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Free-form identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Category set; duplicates collapse.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub categories: BTreeSet<String>,
    /// Explicit component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentName>,
    /// Target package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Bitwise OR of the [`flags`](crate::flags) constants.
    #[serde(default)]
    pub flags: u32,
    /// Typed named parameters.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extras: Extras,
    /// Secondary descriptor narrowing which component may satisfy this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Box<LaunchDescriptor>>,
}

impl LaunchDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates `{action: MAIN, categories: {LAUNCHER}}`.
    pub fn main_launcher() -> Self {
        Self::new()
            .with_action(ACTION_MAIN)
            .with_category(CATEGORY_LAUNCHER)
    }

    /// Sets the action.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Adds a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    /// Sets the data reference.
    pub fn with_data(mut self, data: Uri) -> Self {
        self.data = Some(data);
        self
    }

    /// Sets the explicit component.
    pub fn with_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    /// Sets the target package.
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Adds one extra, replacing any earlier value for the key.
    pub fn with_extra(mut self, key: impl Into<String>, value: ExtraValue) -> Self {
        self.put_extra(key, value);
        self
    }

    /// Replaces data and type together, as the launcher treats them as a pair.
    pub fn set_data_and_type(&mut self, data: Option<Uri>, mime_type: Option<String>) {
        self.data = data;
        self.mime_type = mime_type;
    }

    /// Upserts an extra (last write wins).
    pub fn put_extra(&mut self, key: impl Into<String>, value: ExtraValue) {
        self.extras.insert(key.into(), value);
    }

    /// ORs bits into the flags word.
    pub fn add_flags(&mut self, flags: u32) {
        self.flags |= flags;
    }

    /// Returns `true` if any targeting field is set: action, data, type,
    /// identifier, a category, component, package, or a selector.
    ///
    /// Flags and extras alone do not make a descriptor launchable.
    pub fn has_intent_info(&self) -> bool {
        self.action.is_some()
            || self.data.is_some()
            || self.mime_type.is_some()
            || self.identifier.is_some()
            || !self.categories.is_empty()
            || self.component.is_some()
            || self.package.is_some()
            || self.selector.is_some()
    }
}
