//! Token-grammar tests: one representative case per rule group, checked
//! against the literal strings the downstream engine parses.

use fluent_rules::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// BARE RULES
// ============================================================================

#[rstest]
#[case(field("x").accepted(), "accepted")]
#[case(field("x").active_url(), "active_url")]
#[case(field("x").alpha(), "alpha")]
#[case(field("x").alpha_dash(), "alpha_dash")]
#[case(field("x").alpha_num(), "alpha_num")]
#[case(field("x").array(), "array")]
#[case(field("x").bail(), "bail")]
#[case(field("x").boolean(), "boolean")]
#[case(field("x").confirmed(), "confirmed")]
#[case(field("x").date(), "date")]
#[case(field("x").distinct(), "distinct")]
#[case(field("x").file(), "file")]
#[case(field("x").filled(), "filled")]
#[case(field("x").image(), "image")]
#[case(field("x").integer(), "integer")]
#[case(field("x").ip(), "ip")]
#[case(field("x").ip4(), "ip4")]
#[case(field("x").ip6(), "ip6")]
#[case(field("x").json(), "json")]
#[case(field("x").nullable(), "nullable")]
#[case(field("x").numeric(), "numeric")]
#[case(field("x").password(), "password")]
#[case(field("x").present(), "present")]
#[case(field("x").required(), "required")]
#[case(field("x").string(), "string")]
#[case(field("x").timezone(), "timezone")]
#[case(field("x").url(), "url")]
#[case(field("x").uuid(), "uuid")]
fn bare_rule_emits_exactly_one_token(#[case] built: FieldRules, #[case] expected: &str) {
    assert_eq!(built.rules(), &[expected]);
}

// ============================================================================
// SINGLE-PARAMETER RULES
// ============================================================================

#[rstest]
#[case(field("x").after("2024-01-01"), "after:2024-01-01")]
#[case(field("x").after_or_equal("starts_at"), "after_or_equal:starts_at")]
#[case(field("x").before("tomorrow"), "before:tomorrow")]
#[case(field("x").before_or_equal("ends_at"), "before_or_equal:ends_at")]
#[case(field("x").date_equals("2024-06-01"), "date_equals:2024-06-01")]
#[case(field("x").date_format("Y-m-d H:i"), "date_format:Y-m-d H:i")]
#[case(field("x").different("other"), "different:other")]
#[case(field("x").digits(6), "digits:6")]
#[case(field("x").gt("floor"), "gt:floor")]
#[case(field("x").gte("floor"), "gte:floor")]
#[case(field("x").lt("ceiling"), "lt:ceiling")]
#[case(field("x").lte("ceiling"), "lte:ceiling")]
#[case(field("x").in_array("allowed.*"), "in_array:allowed.*")]
#[case(field("x").max(255), "max:255")]
#[case(field("x").min(1), "min:1")]
#[case(field("x").multiple_of(5), "multiple_of:5")]
#[case(field("x").not_regex("/^.+$/i"), "not_regex:/^.+$/i")]
#[case(field("x").password_guard("api"), "password:api")]
#[case(field("x").regex("/^\\d+$/"), "regex:/^\\d+$/")]
#[case(field("x").same("password"), "same:password")]
#[case(field("x").size(12), "size:12")]
fn single_parameter_rule_renders_its_argument(#[case] built: FieldRules, #[case] expected: &str) {
    assert_eq!(built.rules(), &[expected]);
}

// ============================================================================
// MULTI-PARAMETER AND LIST RULES
// ============================================================================

#[rstest]
#[case(field("x").between(1, 10), "between:1,10")]
#[case(field("x").digits_between(4, 6), "digits_between:4,6")]
#[case(field("x").exclude_if("role", "guest"), "exclude_if:role,guest")]
#[case(field("x").exclude_unless("plan", "pro"), "exclude_unless:plan,pro")]
#[case(field("x").ends_with(["@corp.test", "@corp.example"]), "ends_with:@corp.test,@corp.example")]
#[case(field("x").in_list(["s", "m", "l"]), "in:s,m,l")]
#[case(field("x").mimes(["jpg", "png"]), "mimes:jpg,png")]
#[case(field("x").mime_types(["image/png", "image/jpeg"]), "mimetypes:image/png,image/jpeg")]
#[case(field("x").not_in(["root", "admin"]), "notIn:root,admin")]
#[case(field("x").starts_with(["+1", "+44"]), "starts_with:+1,+44")]
#[case(field("x").required_if("type", ["card", "paypal"]), "required_if:type,card,paypal")]
#[case(field("x").required_unless("type", ["free"]), "required_unless:type,free")]
#[case(field("x").required_with(["street", "city"]), "required_with:street,city")]
#[case(field("x").required_with_all(["lat", "lng"]), "required_with_all:lat,lng")]
#[case(field("x").required_without(["phone"]), "required_without:phone")]
#[case(field("x").required_without_all(["phone", "email"]), "required_without_all:phone,email")]
fn list_rule_comma_joins_in_input_order(#[case] built: FieldRules, #[case] expected: &str) {
    assert_eq!(built.rules(), &[expected]);
}

// ============================================================================
// EMAIL
// ============================================================================

#[test]
fn email_with_styles() {
    let f = field("email").email(["dns", "rfc"]).unwrap();
    assert_eq!(f.rules(), &["email:dns,rfc"]);
}

#[test]
fn email_with_no_styles_is_bare() {
    let f = field("x").email(Vec::<&str>::new()).unwrap();
    assert_eq!(f.rules(), &["email"]);
}

#[test]
fn email_accepts_every_known_style() {
    let f = field("x")
        .email(["rfc", "strict", "dns", "spoof", "filter"])
        .unwrap();
    assert_eq!(f.rules(), &["email:rfc,strict,dns,spoof,filter"]);
}

#[test]
fn email_with_unknown_style_fails_without_appending() {
    let err = field("x").email(["bogus"]).unwrap_err();
    assert_eq!(
        err,
        RuleError::UnknownEmailStyle {
            style: "bogus".to_string()
        }
    );
}

#[test]
fn email_checks_all_tags_before_appending() {
    // A valid leading tag must not rescue an invalid later one.
    assert!(field("x").email(["rfc", "nope"]).is_err());
}

// ============================================================================
// DIMENSIONS
// ============================================================================

#[test]
fn dimensions_with_no_bounds_appends_zero_tokens() {
    let f = field("photo").dimensions(Dimensions::new());
    assert_eq!(f.rules(), &[] as &[&str]);
}

#[test]
fn dimensions_renders_supplied_bounds_only() {
    let f = field("photo").dimensions(Dimensions::new().min_width(100).ratio(1.5));
    assert_eq!(f.rules(), &["dimensions:min_width=100,ratio=1.5"]);
}

// ============================================================================
// DATABASE RULES
// ============================================================================

#[test]
fn exists_and_unique_render_colon_prefixed_comma_joined() {
    let f = field("email")
        .exists(Exists::table("subscribers"))
        .unique(Unique::table("users").column("email").connection("tenant"));
    assert_eq!(
        f.rules(),
        &["exists:subscribers", "unique:tenant.users,email"]
    );
}

// ============================================================================
// ORDERING AND THE ESCAPE HATCH
// ============================================================================

#[test]
fn tokens_appear_in_call_order() {
    let f = field("age").bail().required().integer().between(18, 99);
    assert_eq!(f.rules(), &["bail", "required", "integer", "between:18,99"]);
}

#[test]
fn custom_token_is_untouched() {
    let f = field("x").custom("sometimes").custom("my_rule:a,b,c");
    assert_eq!(f.rules(), &["sometimes", "my_rule:a,b,c"]);
}

#[test]
fn garbage_values_render_as_given() {
    // No semantic checks: the engine, not this crate, rejects these.
    let f = field("x").min(-3).date_equals("not a date");
    assert_eq!(f.rules(), &["min:-3", "date_equals:not a date"]);
}
