use crate::control::control_model::ControlKind;
use crate::options::options_model::Selector;

/// Element tags that are input controls in their own right.
pub const CONTROL_TAGS: [&str; 3] = ["input", "select", "textarea"];

pub fn is_control_tag(tag: &str) -> bool {
    CONTROL_TAGS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Map an element's tag and `type` attribute onto a control kind.
///
/// Returns `None` for elements that are not controls at all.
pub fn classify_kind(tag: &str, input_type: Option<&str>) -> Option<ControlKind> {
    let tag = tag.to_ascii_lowercase();
    match tag.as_str() {
        "textarea" => Some(ControlKind::Textarea),
        "select" => Some(ControlKind::Select),
        "input" => {
            let input_type = input_type.map(|t| t.to_ascii_lowercase());
            match input_type.as_deref() {
                None | Some("") | Some("text") => Some(ControlKind::Text),
                Some("checkbox") => Some(ControlKind::Checkbox),
                Some("radio") => Some(ControlKind::Radio),

                // email, password, hidden, number, date, ...
                Some(_) => Some(ControlKind::Other),
            }
        }
        _ => None,
    }
}

/// Whether an element passes the discovery selector.
pub fn matches_selector(tag: &str, input_type: Option<&str>, selector: &Selector) -> bool {
    let tag = tag.to_ascii_lowercase();
    if !selector.tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
        return false;
    }

    // `type` only excludes on <input>; a <select type="file"> is still a select
    if tag != "input" {
        return true;
    }

    let input_type = input_type.unwrap_or("text");
    !selector
        .exclude_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(input_type))
}
