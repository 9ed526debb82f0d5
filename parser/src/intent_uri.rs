//! Intent-URI grammar.
//!
//! A positional argument containing `:` is read as a URI. Three shapes are
//! understood:
//!
//! - `intent:<data>#Intent;key=value;...;end` carries a whole descriptor in
//!   its fragment;
//! - `android-app://<package>[/<scheme>[/<authority>[/<path>]]]` targets a
//!   package and rebuilds the data URI from the remaining segments, optionally
//!   followed by an `#Intent;...;end` fragment;
//! - anything else becomes a `VIEW` descriptor over the URI itself.
//!
//! Fragment values are percent-decoded. Typed extras use a one-letter prefix:
//! `S` string, `B` boolean, `b` byte, `c` char, `d` double, `f` float,
//! `i` int, `l` long, `s` short.
//!
//! # Examples
//!
//! ```
//! use launch_intent_core::ExtraValue;
//! use launch_intent_parser::intent_uri::parse_intent_uri;
//!
//! let d = parse_intent_uri(
//!     "intent://scan/#Intent;scheme=zxing;package=com.google.zxing;S.mode=qr%20code;end",
//! )
//! .unwrap();
//! assert_eq!(d.data.unwrap().as_str(), "zxing://scan/");
//! assert_eq!(d.package.as_deref(), Some("com.google.zxing"));
//! assert_eq!(d.extras["mode"], ExtraValue::String("qr code".into()));
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use launch_intent_core::{
    ACTION_MAIN, ACTION_VIEW, ComponentName, ExtraValue, IntentError, LaunchDescriptor, Uri,
};
use regex::Regex;
use tracing::{debug, warn};

use crate::decode::{decode_flags, decode_float};

const INTENT_SCHEME: &str = "intent:";
const ANDROID_APP_SCHEME: &str = "android-app:";
const FRAGMENT_START: &str = "#Intent;";
const FRAGMENT_END: &str = "end";

static ANDROID_APP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^android-app://(?P<package>[^/]*)(?:/(?P<scheme>[^/]*)(?:/(?P<authority>[^/]*)(?P<path>/.*)?)?)?$",
    )
    .expect("static regex must compile")
});

/// Parses a URI-encoded descriptor.
///
/// # Errors
///
/// - [`IntentError::MalformedUri`] for a fragment without its `end`
///   terminator, bad percent-encoding, or an unparsable data URI;
/// - [`IntentError::UnknownExtraType`] for an entry that is neither a known
///   key nor a typed extra;
/// - number and component errors from the typed entries.
pub fn parse_intent_uri(raw: &str) -> Result<LaunchDescriptor, IntentError> {
    let android_app = raw.starts_with(ANDROID_APP_SCHEME);
    if !android_app && !raw.starts_with(INTENT_SCHEME) {
        return view_of(raw);
    }

    let fragment_at = raw
        .rfind('#')
        .filter(|&idx| raw[idx..].starts_with(FRAGMENT_START));
    let (data, fragment) = match fragment_at {
        Some(idx) => (&raw[..idx], Some(&raw[idx + FRAGMENT_START.len()..])),
        None if android_app => (raw, None),
        None => return view_of(raw),
    };

    let mut state = FragmentState::new();
    if let Some(fragment) = fragment {
        state.parse(fragment, raw)?;
    }

    let FragmentState {
        mut base,
        selector,
        scheme,
        explicit_action,
    } = state;

    if let Some(selector) = selector {
        if base.package.is_none() {
            base.selector = Some(Box::new(selector));
        } else {
            debug!(uri = raw, "Ignoring selector of a package-targeted intent URI");
        }
    }

    let data = if let Some(rest) = data.strip_prefix(INTENT_SCHEME) {
        match scheme {
            Some(scheme) => format!("{scheme}:{rest}"),
            None => rest.to_string(),
        }
    } else {
        android_app_data(data, &mut base, explicit_action)
    };

    if !data.is_empty() {
        base.data = Some(Uri::parse(&data)?);
    }

    debug!(uri = raw, action = ?base.action, package = ?base.package, "Parsed intent URI");
    Ok(base)
}

fn view_of(raw: &str) -> Result<LaunchDescriptor, IntentError> {
    Ok(LaunchDescriptor::new()
        .with_action(ACTION_VIEW)
        .with_data(Uri::parse(raw)?))
}

/// Applies the `android-app://` segments to `base` and returns the data URI
/// they describe (empty when there is none).
fn android_app_data(data: &str, base: &mut LaunchDescriptor, explicit_action: bool) -> String {
    let Some(caps) = ANDROID_APP_RE.captures(data) else {
        return String::new();
    };

    let package = caps.name("package").map_or("", |m| m.as_str());
    if !package.is_empty() {
        base.package = Some(package.to_string());
    }

    let Some(scheme) = caps
        .name("scheme")
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
    else {
        if !explicit_action {
            base.action = Some(ACTION_MAIN.to_string());
        }
        return String::new();
    };

    match caps.name("authority") {
        Some(authority) => format!(
            "{scheme}://{}{}",
            authority.as_str(),
            caps.name("path").map_or("", |m| m.as_str())
        ),
        None => format!("{scheme}:"),
    }
}

struct FragmentState {
    base: LaunchDescriptor,
    selector: Option<LaunchDescriptor>,
    scheme: Option<String>,
    explicit_action: bool,
}

impl FragmentState {
    fn new() -> Self {
        Self {
            base: LaunchDescriptor::new().with_action(ACTION_VIEW),
            selector: None,
            scheme: None,
            explicit_action: false,
        }
    }

    fn parse(&mut self, fragment: &str, uri: &str) -> Result<(), IntentError> {
        let mut rest = fragment;
        while !rest.starts_with(FRAGMENT_END) {
            let Some((entry, tail)) = rest.split_once(';') else {
                return Err(IntentError::MalformedUri(uri.to_string()));
            };
            self.apply(entry, uri)?;
            rest = tail;
        }
        Ok(())
    }

    fn apply(&mut self, entry: &str, uri: &str) -> Result<(), IntentError> {
        if entry == "SEL" {
            if self.selector.is_some() {
                return Err(IntentError::DuplicateSelector);
            }
            self.selector = Some(LaunchDescriptor::new());
            return Ok(());
        }

        let Some((name, raw_value)) = entry.split_once('=') else {
            return Err(IntentError::UnknownExtraType(entry.to_string()));
        };
        let value = percent_decode(raw_value, uri)?.into_owned();
        let in_selector = self.selector.is_some();
        let target = match self.selector.as_mut() {
            Some(selector) => selector,
            None => &mut self.base,
        };

        match name {
            "action" => {
                target.action = Some(value);
                if !in_selector {
                    self.explicit_action = true;
                }
            }
            "category" => {
                target.categories.insert(value);
            }
            "type" => target.mime_type = Some(value),
            "identifier" => target.identifier = Some(value),
            "launchFlags" => target.flags = decode_flags(&value)?,
            "package" => target.package = Some(value),
            "component" => target.component = Some(ComponentName::unflatten(&value)?),
            "scheme" if in_selector => target.data = Some(Uri::parse(&format!("{value}:"))?),
            "scheme" => self.scheme = Some(value),
            "sourceBounds" => {}
            _ => {
                let (key, extra) = decode_uri_extra(entry, name, &value, uri)?;
                target.put_extra(key, extra);
            }
        }
        Ok(())
    }
}

fn decode_uri_extra(
    entry: &str,
    name: &str,
    value: &str,
    uri: &str,
) -> Result<(String, ExtraValue), IntentError> {
    let unknown = || IntentError::UnknownExtraType(entry.to_string());
    let malformed = || IntentError::MalformedNumber(value.to_string());

    let (prefix, key) = name.split_once('.').ok_or_else(unknown)?;
    let key = percent_decode(key, uri)?.into_owned();

    let extra = match prefix {
        "S" => ExtraValue::String(value.to_string()),
        "B" => ExtraValue::Bool(value.eq_ignore_ascii_case("true")),
        "b" => ExtraValue::Byte(value.parse().map_err(|_| malformed())?),
        "c" => ExtraValue::Char(
            value
                .chars()
                .next()
                .ok_or_else(|| IntentError::MalformedUri(uri.to_string()))?,
        ),
        "d" => ExtraValue::Double(value.trim().parse().map_err(|_| malformed())?),
        "f" => ExtraValue::Float(decode_float(value)?),
        "i" => ExtraValue::Int(value.parse().map_err(|_| malformed())?),
        "l" => ExtraValue::Long(value.parse().map_err(|_| malformed())?),
        "s" => ExtraValue::Short(value.parse().map_err(|_| malformed())?),
        _ => return Err(unknown()),
    };
    Ok((key, extra))
}

fn percent_decode<'a>(raw: &'a str, uri: &str) -> Result<Cow<'a, str>, IntentError> {
    urlencoding::decode(raw).map_err(|_| IntentError::MalformedUri(uri.to_string()))
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn encode_keep_slash(value: &str) -> String {
    encode(value).replace("%2F", "/")
}

/// Renders a descriptor as an `intent:` URI.
///
/// The action is omitted when it is `VIEW`, and the selector keeps only the
/// scheme of its data. Extras without a URI form (null, URI, component and
/// list values) are dropped with a warning.
///
/// # Examples
///
/// ```
/// use launch_intent_core::*;
/// use launch_intent_parser::intent_uri::{parse_intent_uri, to_intent_uri};
///
/// let d = LaunchDescriptor::new()
///     .with_action("com.example.PLAY")
///     .with_package("com.example")
///     .with_extra("level", ExtraValue::Int(3));
/// let uri = to_intent_uri(&d);
/// assert_eq!(uri, "intent:#Intent;action=com.example.PLAY;package=com.example;i.level=3;end");
/// assert_eq!(parse_intent_uri(&uri).unwrap(), d);
/// ```
pub fn to_intent_uri(descriptor: &LaunchDescriptor) -> String {
    let mut out = String::from(INTENT_SCHEME);
    let mut scheme = None;
    if let Some(data) = &descriptor.data {
        scheme = data.scheme();
        out.push_str(data.scheme_specific_part());
    }

    let mut fragment = String::new();
    write_entries(&mut fragment, descriptor, scheme, Some(ACTION_VIEW));
    if let Some(selector) = &descriptor.selector {
        fragment.push_str("SEL;");
        let selector_scheme = selector.data.as_ref().and_then(Uri::scheme);
        write_entries(&mut fragment, selector, selector_scheme, None);
    }

    // Without a fragment, scheme-less data would read back as a VIEW of the
    // whole `intent:` string.
    let bare_data = descriptor.data.is_some() && scheme.is_none();
    if !fragment.is_empty() || bare_data {
        out.push_str(FRAGMENT_START);
        out.push_str(&fragment);
        out.push_str(FRAGMENT_END);
    }
    out
}

fn write_entries(
    out: &mut String,
    descriptor: &LaunchDescriptor,
    scheme: Option<&str>,
    default_action: Option<&str>,
) {
    let mut entry = |name: &str, value: &str| {
        out.push_str(name);
        out.push('=');
        out.push_str(value);
        out.push(';');
    };

    if let Some(scheme) = scheme {
        entry("scheme", scheme);
    }
    if let Some(action) = &descriptor.action
        && Some(action.as_str()) != default_action
    {
        entry("action", &encode(action));
    }
    for category in &descriptor.categories {
        entry("category", &encode(category));
    }
    if let Some(mime_type) = &descriptor.mime_type {
        entry("type", &encode_keep_slash(mime_type));
    }
    if let Some(identifier) = &descriptor.identifier {
        entry("identifier", &encode_keep_slash(identifier));
    }
    if descriptor.flags != 0 {
        entry("launchFlags", &format!("{:#x}", descriptor.flags));
    }
    if let Some(package) = &descriptor.package {
        entry("package", &encode(package));
    }
    if let Some(component) = &descriptor.component {
        entry("component", &encode_keep_slash(&component.flatten_short()));
    }
    for (key, value) in &descriptor.extras {
        match uri_extra(value) {
            Some((prefix, text)) => entry(&format!("{prefix}.{}", encode(key)), &encode(&text)),
            None => warn!(
                key = %key,
                kind = value.type_name(),
                "Extra has no intent URI form, dropping"
            ),
        }
    }
}

fn uri_extra(value: &ExtraValue) -> Option<(char, String)> {
    let pair = match value {
        ExtraValue::String(v) => ('S', v.clone()),
        ExtraValue::Bool(v) => ('B', v.to_string()),
        ExtraValue::Byte(v) => ('b', v.to_string()),
        ExtraValue::Char(v) => ('c', v.to_string()),
        ExtraValue::Double(v) => ('d', v.to_string()),
        ExtraValue::Float(v) => ('f', v.to_string()),
        ExtraValue::Int(v) => ('i', v.to_string()),
        ExtraValue::Long(v) => ('l', v.to_string()),
        ExtraValue::Short(v) => ('s', v.to_string()),
        _ => return None,
    };
    Some(pair)
}
