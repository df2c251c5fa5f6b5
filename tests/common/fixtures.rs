use collect_values::{Document, Element};

pub fn text(id: &str, value: &str) -> Element {
    Element::input("text").with_id(id).with_value(value)
}

pub fn radio(name: &str, value: &str, checked: bool) -> Element {
    Element::input("radio")
        .with_name(name)
        .with_value(value)
        .with_checked(checked)
}

pub fn checkbox(name: &str, value: &str, checked: bool) -> Element {
    Element::input("checkbox")
        .with_name(name)
        .with_value(value)
        .with_checked(checked)
}

/// A `<form id="form">` holding `children`, wrapped in a `<body>`.
pub fn form(children: Vec<Element>) -> Document {
    Document::new(
        Element::new("body").with_child(Element::new("form").with_id("form").with_children(children)),
    )
}
