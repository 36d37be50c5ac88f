//! Single-control renderers: generic inputs, textareas and buttons.

use super::{Input, InputKind};
use crate::form::humanize;
use crate::spec::Label;

/// `{label}<input id type name attrs value />`
pub(super) fn render_input(input: &Input<'_>, kind: InputKind) -> String {
    format!(
        r#"{}<input id="{}" type="{}" name="{}"{} value="{}" />"#,
        input.label_html(),
        input.field,
        kind.as_str(),
        input.html_name(),
        input.attrs(),
        input.value()
    )
}

pub(super) fn render_textarea(input: &Input<'_>) -> String {
    format!(
        r#"{}<textarea id="{}" name="{}"{}>{}</textarea>"#,
        input.label_html(),
        input.field,
        input.html_name(),
        input.attrs(),
        input.value()
    )
}

/// Buttons carry their label as the caption instead of a separate
/// `<label>` element.
pub(super) fn render_button(input: &Input<'_>) -> String {
    let caption = match &input.spec.label {
        Label::Text(text) => text.clone(),
        Label::Auto => input
            .spec
            .value
            .clone()
            .unwrap_or_else(|| humanize(input.field)),
        Label::Hidden => input.value().to_string(),
    };
    format!(
        r#"<button id="{}" type="submit" name="{}"{}>{}</button>"#,
        input.field,
        input.html_name(),
        input.attrs(),
        caption
    )
}
