use crate::control::control_model::{ControlDescriptor, FieldValue};

// ============================================================================
// Integer coercion
// ============================================================================

/// Base-10 integer parse with prefix semantics.
///
/// Leading whitespace and one optional sign are accepted, then the longest
/// run of ASCII digits is read and anything after it ignored: `" 42"` → 42,
/// `"12px"` → 12, `"3.9"` → 3, `"-7"` → -7. Text with no leading digits, or
/// a number outside `i64`, gives [`FieldValue::NotANumber`].
pub fn parse_int(text: &str) -> FieldValue {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return FieldValue::NotANumber;
    }

    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{digits}").parse::<i64>()
    } else {
        digits.parse::<i64>()
    };

    match parsed {
        Ok(n) => FieldValue::Int(n),
        Err(_) => FieldValue::NotANumber,
    }
}

/// Coerce a text value to an integer; anything else passes through.
pub fn coerce_int(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(text) => parse_int(&text),
        other => other,
    }
}

// ============================================================================
// Per-type extraction
// ============================================================================

/// Radio group: value of the first checked member, `""` if none is.
pub fn first_checked<'a>(group: impl IntoIterator<Item = &'a ControlDescriptor>) -> FieldValue {
    group
        .into_iter()
        .find(|member| member.checked)
        .map(|member| FieldValue::text(member.raw_value.clone()))
        .unwrap_or_else(|| FieldValue::text(""))
}

/// Multi-checkbox group: values of all checked members, in order.
pub fn checked_values<'a>(
    group: impl IntoIterator<Item = &'a ControlDescriptor>,
    as_int: bool,
) -> FieldValue {
    let values = group
        .into_iter()
        .filter(|member| member.checked)
        .map(|member| {
            if as_int {
                parse_int(&member.raw_value)
            } else {
                FieldValue::text(member.raw_value.clone())
            }
        })
        .collect();

    FieldValue::List(values)
}

/// Single checkbox: its value (or `""`) in value mode, else 1/0.
pub fn checkbox_value(control: &ControlDescriptor, value_mode: bool) -> FieldValue {
    if value_mode {
        if control.checked {
            FieldValue::text(control.raw_value.clone())
        } else {
            FieldValue::text("")
        }
    } else {
        FieldValue::flag(control.checked)
    }
}

/// Text-like control: the value to report, and the trimmed value to write
/// back when trimming actually changed something.
pub fn text_value(display: String, trim: bool) -> (FieldValue, Option<String>) {
    if !trim {
        return (FieldValue::Text(display), None);
    }

    let trimmed = display.trim();
    if trimmed.len() == display.len() {
        (FieldValue::Text(display), None)
    } else {
        let trimmed = trimmed.to_string();
        (FieldValue::Text(trimmed.clone()), Some(trimmed))
    }
}
