use filter_lexer::{Comparison, FilterError, parse, scanner};
use relex::Location;
use test_case::test_case;

const ISSUE: &[(&str, &str)] = &[
    ("status", "open"),
    ("label", "bug"),
    ("priority", "3"),
    ("title", "Data race in cache"),
];

#[test_case("status:open", true; "field contains")]
#[test_case("status:closed", false; "field mismatch")]
#[test_case("-label:bug", false; "negated hit")]
#[test_case("-label:docs", true; "negated miss")]
#[test_case("priority>=3", true; "numeric greater or equal")]
#[test_case("priority<3", false; "numeric less")]
#[test_case("race", true; "bare term searches every field")]
#[test_case(r#"title:"data race""#, true; "quoted value")]
#[test_case("status:closed OR label:bug", true; "second branch")]
#[test_case("status:open AND label:docs", false; "explicit and")]
#[test_case("", true; "empty filter")]
fn test_matches(filter: &str, expected: bool) {
    let (query, errors) = parse(filter);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(query.matches(ISSUE), expected);
}

#[test]
fn test_branches_and_terms() {
    let (query, _) = parse("a b OR -c:d");
    let branches: Vec<_> = query.branches().collect();

    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].len(), 2);
    let term = &branches[1][0];
    assert!(term.negated);
    assert_eq!(term.field.as_deref(), Some("c"));
    assert_eq!(term.comparison, Comparison::Contains);
    assert_eq!(term.at, Location::new(1, 8));
}

#[test]
fn test_unrecognised_characters_are_skipped() {
    let (query, errors) = parse("status:open @ label:bug");

    assert_eq!(
        errors,
        vec![FilterError::Unrecognised {
            text: "@".into(),
            at: Location::new(1, 13),
        }]
    );
    assert_eq!(query.branches().next().map(<[_]>::len), Some(2));
}

#[test]
fn test_missing_value_drops_branch() {
    let (query, errors) = parse("status: OR label:bug");

    assert_eq!(
        errors,
        vec![FilterError::MissingValue {
            field: "status".into(),
            at: Location::new(1, 1),
        }]
    );
    let branches: Vec<_> = query.branches().collect();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0][0].field.as_deref(), Some("label"));
}

#[test]
fn test_error_skips_rest_of_branch() {
    let (query, errors) = parse("a - :x b OR c");

    assert_eq!(errors, vec![FilterError::DanglingNot { at: Location::new(1, 3) }]);
    let branches: Vec<_> = query.branches().collect();
    assert_eq!(branches.len(), 1);
    assert_eq!(branches[0][0].value, "c");
}

#[test]
fn test_stray_operator_uses_literal_name() {
    let (_, errors) = parse(">= 2");
    assert_eq!(
        errors[0].to_string(),
        "unexpected comparison at 1:1"
    );
}

#[test]
fn snapshot_token_kinds() {
    let scanner = scanner();
    let stream = scanner.tokenize(r#"-label:bug "two words" p>=2 ~"#);
    let listing = stream
        .iter()
        .map(|token| {
            let kind = token
                .kind()
                .map_or("?".to_string(), |kind| scanner.literal(kind, true).to_string());
            format!("{} {} {:?}", token.position(), kind, token.value())
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r#"
    0 FilterRules::`-` "-"
    1 FilterRules::word "label"
    6 FilterRules::`:` ":"
    7 FilterRules::word "bug"
    11 FilterRules::quoted text "two words"
    23 FilterRules::word "p"
    24 FilterRules::comparison ">="
    26 FilterRules::word "2"
    28 ? "~"
    "#);
}
