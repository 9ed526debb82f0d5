//! Whole-command parsing tests.

use launch_intent_core::*;
use launch_intent_parser::intent_uri::to_intent_uri;
use launch_intent_parser::output::descriptor_to_args;
use launch_intent_parser::{parse_command_line, parse_intent_command};

fn parse(tokens: &[&str]) -> Result<LaunchDescriptor, IntentError> {
    parse_intent_command(tokens.iter().copied())
}

fn reparse(descriptor: &LaunchDescriptor) -> LaunchDescriptor {
    parse_intent_command(descriptor_to_args(descriptor)).unwrap()
}

#[test]
fn test_action_only_sets_nothing_else() {
    for action in ["A", "android.intent.action.VIEW", "com.example.DO_IT"] {
        let d = parse(&["-a", action]).unwrap();
        assert_eq!(d, LaunchDescriptor::new().with_action(action));
    }
}

#[test]
fn test_boolean_forms_decode_alike() {
    for raw in ["true", "t", "TRUE", "T", "1"] {
        let d = parse(&["-a", "A", "--ez", "flag", raw]).unwrap();
        assert_eq!(d.extras["flag"], ExtraValue::Bool(true), "{raw}");
    }
    assert_eq!(
        parse(&["-a", "A", "--ez", "flag", "maybe"]),
        Err(IntentError::MalformedBoolean("maybe".to_string()))
    );
}

#[test]
fn test_int_array_with_hex_element() {
    let d = parse(&["-a", "A", "--eia", "k", "1,2,0x3"]).unwrap();
    assert_eq!(
        d.extras["k"],
        ExtraValue::IntList {
            values: vec![1, 2, 3],
            kind: ListKind::Array
        }
    );
}

#[test]
fn test_string_array_keeps_escaped_comma() {
    let d = parse(&["-a", "A", "--esa", "k", r"a,b\,c"]).unwrap();
    assert_eq!(
        d.extras["k"],
        ExtraValue::StringList {
            values: vec!["a".to_string(), r"b\,c".to_string()],
            kind: ListKind::Array
        }
    );
}

#[test]
fn test_component_option() {
    let d = parse(&["-n", "pkg/pkg.Main"]).unwrap();
    assert_eq!(d.component, Some(ComponentName::new("pkg", "pkg.Main")));
    assert!(d.action.is_none());
}

#[test]
fn test_bare_package() {
    let d = parse(&["com.example.app"]).unwrap();
    assert_eq!(
        d,
        LaunchDescriptor::main_launcher().with_package("com.example.app")
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(&[]), Err(IntentError::NoIntentSupplied));
}

#[test]
fn test_every_extra_option() {
    let d = parse(&[
        "-a", "A",
        "-e", "s1", "x",
        "--es", "s2", "y",
        "--esn", "n",
        "--ei", "i", "-7",
        "--eu", "u", "content://media/1",
        "--ecn", "c", "p/.C",
        "--eial", "il", "4,5",
        "--el", "l", "9000000000",
        "--ela", "la", "1",
        "--elal", "lal", "2,3",
        "--ef", "f", "0.5",
        "--efa", "fa", "1.5,2",
        "--efal", "fal", "3",
        "--esal", "sal", "p,q",
        "--ez", "z", "0",
    ])
    .unwrap();

    assert_eq!(d.extras.len(), 15);
    assert_eq!(d.extras["s1"], ExtraValue::String("x".into()));
    assert_eq!(d.extras["n"], ExtraValue::Null);
    assert_eq!(d.extras["i"], ExtraValue::Int(-7));
    assert_eq!(
        d.extras["u"],
        ExtraValue::Uri(Uri::parse("content://media/1").unwrap())
    );
    assert_eq!(
        d.extras["c"],
        ExtraValue::Component(ComponentName::new("p", "p.C"))
    );
    assert_eq!(
        d.extras["il"],
        ExtraValue::IntList {
            values: vec![4, 5],
            kind: ListKind::ArrayList
        }
    );
    assert_eq!(d.extras["l"], ExtraValue::Long(9_000_000_000));
    assert_eq!(
        d.extras["fa"],
        ExtraValue::FloatList {
            values: vec![1.5, 2.0],
            kind: ListKind::Array
        }
    );
    assert_eq!(d.extras["z"], ExtraValue::Bool(false));

    let keys: Vec<&str> = d.extras.keys().map(String::as_str).collect();
    assert_eq!(keys[..3], ["s1", "s2", "n"]);
}

#[test]
fn test_later_extra_overwrites_earlier() {
    let d = parse(&["-a", "A", "--ei", "k", "1", "--es", "k", "two"]).unwrap();
    assert_eq!(d.extras.len(), 1);
    assert_eq!(d.extras["k"], ExtraValue::String("two".into()));
}

#[test]
fn test_flag_options_accumulate() {
    let d = parse(&[
        "--activity-clear-top",
        "--grant-read-uri-permission",
        "--activity-single-top",
        "com.example",
    ])
    .unwrap();
    assert_eq!(
        d.flags,
        flags::FLAG_ACTIVITY_CLEAR_TOP
            | flags::FLAG_GRANT_READ_URI_PERMISSION
            | flags::FLAG_ACTIVITY_SINGLE_TOP
    );
}

#[test]
fn test_flags_option_replaces_earlier_bits() {
    let d = parse(&["--activity-clear-top", "-f", "0x10000000", "-p", "p"]).unwrap();
    assert_eq!(d.flags, flags::FLAG_ACTIVITY_NEW_TASK);
}

#[test]
fn test_bad_flags_value() {
    assert_eq!(
        parse(&["-f", "lots", "-p", "p"]),
        Err(IntentError::MalformedNumber("lots".to_string()))
    );
}

#[test]
fn test_component_positional_with_extras() {
    let d = parse(&["--es", "rom", "/sdcard/a.gba", "com.emu/.Main"]).unwrap();
    assert_eq!(d.action.as_deref(), Some(ACTION_MAIN));
    assert!(d.categories.contains(CATEGORY_LAUNCHER));
    assert_eq!(d.component, Some(ComponentName::new("com.emu", "com.emu.Main")));
    assert_eq!(d.extras["rom"], ExtraValue::String("/sdcard/a.gba".into()));
}

#[test]
fn test_explicit_action_drops_launcher_category() {
    let d = parse(&["-a", ACTION_VIEW, "-d", "file:///x.gba", "com.emu"]).unwrap();
    assert!(d.categories.is_empty());
    assert_eq!(d.package.as_deref(), Some("com.emu"));
    assert_eq!(d.data.unwrap().as_str(), "file:///x.gba");
}

#[test]
fn test_uri_positional() {
    let d = parse(&["https://example.com/page"]).unwrap();
    assert_eq!(d.action.as_deref(), Some(ACTION_VIEW));
    assert_eq!(d.data.unwrap().as_str(), "https://example.com/page");
}

#[test]
fn test_intent_uri_positional_extras_shadowed_by_explicit_extras() {
    let uri = "intent:#Intent;action=GO;S.a=uri;S.b=uri;end";

    let d = parse(&[uri]).unwrap();
    assert_eq!(d.action.as_deref(), Some("GO"));
    assert_eq!(d.extras.len(), 2);

    let d = parse(&["--es", "a", "explicit", uri]).unwrap();
    assert_eq!(d.extras.len(), 1);
    assert_eq!(d.extras["a"], ExtraValue::String("explicit".into()));
}

#[test]
fn test_selector_routes_later_options() {
    let d = parse(&[
        "-a", "A",
        "-d", "content://x",
        "--selector",
        "-c", "android.intent.category.APP_MUSIC",
        "-t", "audio/*",
    ])
    .unwrap();

    assert_eq!(d.action.as_deref(), Some("A"));
    assert_eq!(d.data.as_ref().map(Uri::as_str), Some("content://x"));
    assert!(d.mime_type.is_none());
    // The selector implies a launcher base, whose categories the explicit
    // action discards.
    assert!(d.categories.is_empty());

    let selector = d.selector.unwrap();
    assert!(selector.action.is_none());
    assert_eq!(selector.mime_type.as_deref(), Some("audio/*"));
    assert!(selector.categories.contains("android.intent.category.APP_MUSIC"));
}

#[test]
fn test_selector_inherits_data_given_before_it() {
    let d = parse(&["-a", "A", "-d", "content://x", "--selector", "-p", "sel"]).unwrap();
    assert_eq!(d.data.as_ref().map(Uri::as_str), Some("content://x"));

    let selector = d.selector.unwrap();
    assert_eq!(selector.data.as_ref().map(Uri::as_str), Some("content://x"));
    assert_eq!(selector.package.as_deref(), Some("sel"));
}

#[test]
fn test_selector_options_alone_supply_intent() {
    let d = parse(&["--selector", "-p", "com.music"]).unwrap();
    assert_eq!(d.action.as_deref(), Some(ACTION_MAIN));
    assert!(d.package.is_none());
    assert_eq!(
        d.selector.and_then(|s| s.package),
        Some("com.music".to_string())
    );
}

#[test]
fn test_second_selector_rejected() {
    assert_eq!(
        parse(&["--selector", "-p", "a", "--selector"]),
        Err(IntentError::DuplicateSelector)
    );
}

#[test]
fn test_passthrough_options_are_ignored() {
    let d = parse(&[
        "-W", "-S", "--streaming", "-P", "/data/prof", "--user", "current", "--display", "1",
        "--windowingMode", "5", "-p", "p",
    ])
    .unwrap();
    assert_eq!(d, LaunchDescriptor::new().with_package("p"));
}

#[test]
fn test_exhausted_input_names_option() {
    for option in ["-a", "-d", "-n", "--es", "--eia", "--user"] {
        assert_eq!(
            parse(&[option]),
            Err(IntentError::ExhaustedInput {
                option: option.to_string()
            }),
            "{option}"
        );
    }
}

#[test]
fn test_unknown_option() {
    assert_eq!(
        parse(&["-a", "A", "--frobnicate"]),
        Err(IntentError::UnknownOption("--frobnicate".to_string()))
    );
}

#[test]
fn test_options_end_at_positional() {
    assert_eq!(
        parse(&["com.example", "-a", "A"]),
        Err(IntentError::UnexpectedArgument("-a".to_string()))
    );
}

#[test]
fn test_double_dash_allows_dash_package() {
    let d = parse(&["-a", "A", "--", "-odd"]).unwrap();
    assert_eq!(d.package.as_deref(), Some("-odd"));
}

#[test]
fn test_malformed_values_surface() {
    assert!(matches!(
        parse(&["-a", "A", "--ei", "k", "1.5"]),
        Err(IntentError::MalformedNumber(_))
    ));
    assert_eq!(
        parse(&["-n", "nopackage"]),
        Err(IntentError::BadComponentName("nopackage".to_string()))
    );
    assert!(matches!(
        parse(&["-d", ""]),
        Err(IntentError::MalformedUri(_))
    ));
}

#[test]
fn test_reparse_of_rendered_args_is_identity() {
    let cases: &[&[&str]] = &[
        &["com.example.app"],
        &["-a", "A", "--ez", "b", "t", "--efa", "f", "1.5,2"],
        &["--activity-clear-task", "-f", "0x80000001", "pkg/.Main"],
        &["--es", "rom", "/sdcard/My Roms/a b.zip", "--esa", "l", r"x,y\,z", "com.emu/.Main"],
        &["-a", "A", "-d", "content://x", "--selector", "-t", "audio/*", "-c", "music"],
        &["--selector", "-p", "com.music", "--ei", "n", "2"],
        &["intent:#Intent;action=GO;category=c;launchFlags=0x4000000;S.k=v;end"],
        &["-a", "A", "--esal", "e", ",", "--esn", "nothing"],
    ];

    for tokens in cases {
        let once = parse(tokens).unwrap();
        let twice = reparse(&once);
        assert_eq!(twice, once, "{tokens:?}");
        assert_eq!(reparse(&twice), twice, "{tokens:?}");
    }
}

#[test]
fn test_command_line_matches_tokens() {
    let from_line =
        parse_command_line(r#"-a A --es title "Zelda: A Link" --eia ids 1,2 com.nintendo"#)
            .unwrap();
    let from_tokens = parse(&[
        "-a", "A", "--es", "title", "Zelda: A Link", "--eia", "ids", "1,2", "com.nintendo",
    ])
    .unwrap();
    assert_eq!(from_line, from_tokens);
}

#[test]
fn test_reparse_of_rendered_intent_uri_is_identity() {
    let cases: &[&[&str]] = &[
        &["-a", ACTION_VIEW, "-d", "/sdcard/a.pdf"],
        &["-a", "GO", "-c", "c", "-p", "com.x"],
        &["-a", ACTION_VIEW, "-d", "https://example.com/x", "-t", "text/html", "--ez", "b", "1"],
        &["-a", "A", "--selector", "-t", "audio/*"],
    ];

    for tokens in cases {
        let once = parse(tokens).unwrap();
        let uri = to_intent_uri(&once);
        assert_eq!(parse(&[uri.as_str()]).unwrap(), once, "{uri}");
    }
}
