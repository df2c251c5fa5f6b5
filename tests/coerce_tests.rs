use collect_values::collect::coerce::{
    checkbox_value, checked_values, coerce_int, first_checked, parse_int, text_value,
};
use collect_values::{ControlDescriptor, ControlKind, FieldValue};

fn member(value: &str, checked: bool) -> ControlDescriptor {
    ControlDescriptor::new(ControlKind::Checkbox)
        .with_name("group")
        .with_value(value)
        .with_checked(checked)
}

// =========================================================================
// parse_int
// =========================================================================

#[test]
fn parse_int_accepts_plain_and_signed_numbers() {
    assert_eq!(parse_int("42"), FieldValue::Int(42));
    assert_eq!(parse_int("-7"), FieldValue::Int(-7));
    assert_eq!(parse_int("+3"), FieldValue::Int(3));
    assert_eq!(parse_int("007"), FieldValue::Int(7));
    assert_eq!(parse_int("-0"), FieldValue::Int(0));
}

#[test]
fn parse_int_reads_leading_digits_only() {
    assert_eq!(parse_int("  12 "), FieldValue::Int(12), "Surrounding whitespace");
    assert_eq!(parse_int("12px"), FieldValue::Int(12), "Trailing unit");
    assert_eq!(parse_int("3.9"), FieldValue::Int(3), "Decimal truncated");
    assert_eq!(parse_int("1e5"), FieldValue::Int(1), "Exponent ignored");
}

#[test]
fn parse_int_without_digits_is_not_a_number() {
    assert_eq!(parse_int(""), FieldValue::NotANumber);
    assert_eq!(parse_int("   "), FieldValue::NotANumber);
    assert_eq!(parse_int("abc"), FieldValue::NotANumber);
    assert_eq!(parse_int("-"), FieldValue::NotANumber);
    assert_eq!(parse_int("+-1"), FieldValue::NotANumber);
    assert_eq!(parse_int("x12"), FieldValue::NotANumber);
}

#[test]
fn parse_int_out_of_range_is_not_a_number() {
    assert_eq!(parse_int("9223372036854775807"), FieldValue::Int(i64::MAX));
    assert_eq!(parse_int("-9223372036854775808"), FieldValue::Int(i64::MIN));
    assert_eq!(parse_int("9223372036854775808"), FieldValue::NotANumber);
}

#[test]
fn coerce_int_leaves_non_text_alone() {
    assert_eq!(coerce_int(FieldValue::text("5")), FieldValue::Int(5));
    assert_eq!(coerce_int(FieldValue::Int(1)), FieldValue::Int(1));

    let list = FieldValue::List(vec![FieldValue::text("5")]);
    assert_eq!(coerce_int(list.clone()), list, "Lists are not coerced as a whole");
}

// =========================================================================
// Group and single-control extraction
// =========================================================================

#[test]
fn first_checked_picks_first_in_order() {
    let group = [member("a", false), member("b", true), member("c", true)];
    assert_eq!(first_checked(&group), FieldValue::text("b"));

    let none = [member("a", false)];
    assert_eq!(first_checked(&none), FieldValue::text(""));
    assert_eq!(first_checked(&[] as &[ControlDescriptor]), FieldValue::text(""));
}

#[test]
fn checked_values_collects_in_order() {
    let group = [member("3", true), member("1", false), member("2", true)];

    assert_eq!(
        checked_values(&group, false),
        FieldValue::List(vec![FieldValue::text("3"), FieldValue::text("2")])
    );
    assert_eq!(
        checked_values(&group, true),
        FieldValue::List(vec![FieldValue::Int(3), FieldValue::Int(2)])
    );
}

#[test]
fn checkbox_value_modes() {
    let on = member("yes", true);
    let off = member("yes", false);

    assert_eq!(checkbox_value(&on, false), FieldValue::Int(1));
    assert_eq!(checkbox_value(&off, false), FieldValue::Int(0));
    assert_eq!(checkbox_value(&on, true), FieldValue::text("yes"));
    assert_eq!(checkbox_value(&off, true), FieldValue::text(""));
}

#[test]
fn text_value_reports_write_back_only_when_changed() {
    assert_eq!(
        text_value(" a ".into(), true),
        (FieldValue::text("a"), Some("a".to_string()))
    );
    assert_eq!(text_value("a".into(), true), (FieldValue::text("a"), None));
    assert_eq!(text_value(" a ".into(), false), (FieldValue::text(" a "), None));
    assert_eq!(
        text_value("   ".into(), true),
        (FieldValue::text(""), Some(String::new()))
    );
}
