//! Option-driven renderers: select, radio and checkbox.

use tracing::debug;

use super::Input;

fn marker(input: &Input<'_>, key: &str, attr: &str) -> String {
    if input.spec.value.as_deref() == Some(key) {
        format!(r#" {attr}="{attr}""#)
    } else {
        String::new()
    }
}

pub(super) fn render_select(input: &Input<'_>) -> String {
    if input.spec.options.is_empty() {
        debug!(field = input.field, "select without options");
    }
    let options: String = input
        .spec
        .options
        .iter()
        .map(|(key, label)| {
            format!(
                r#"<option value="{key}"{}>{label}</option>"#,
                marker(input, key, "selected")
            )
        })
        .collect();

    format!(
        r#"{}<select id="{}" name="{}"{}>{options}</select>"#,
        input.label_html(),
        input.field,
        input.html_name(),
        input.attrs()
    )
}

pub(super) fn render_radio(input: &Input<'_>) -> String {
    if input.spec.options.is_empty() {
        debug!(field = input.field, "radio without options");
    }
    render_choices(input, "radio", &input.html_name())
}

/// Checkboxes with options submit a list, so their name gets a `[]` suffix.
/// Without options a single checkbox is rendered.
pub(super) fn render_checkbox(input: &Input<'_>) -> String {
    if input.spec.options.is_empty() {
        let value = input.spec.value.as_deref().unwrap_or("1");
        return format!(
            r#"{}<input id="{}" type="checkbox" name="{}"{} value="{value}" />"#,
            input.label_html(),
            input.field,
            input.html_name(),
            input.attrs()
        );
    }
    render_choices(input, "checkbox", &format!("{}[]", input.html_name()))
}

/// The caption labels the first option: no element carries the field id.
/// Without options there is nothing to label.
fn render_choices(input: &Input<'_>, kind: &str, name: &str) -> String {
    let attrs = input.attrs();
    let mut html = input
        .spec
        .options
        .keys()
        .next()
        .map(|key| input.label_for(&format!("{}_{key}", input.field)))
        .unwrap_or_default();

    for (key, label) in &input.spec.options {
        let id = format!("{}_{key}", input.field);
        html.push_str(&format!(
            r#"<input id="{id}" type="{kind}" name="{name}"{attrs} value="{key}"{} />"#,
            marker(input, key, "checked")
        ));
        html.push_str(&input.form.label(&id, Some(label.as_str()), None));
    }

    html
}

#[cfg(test)]
mod tests {
    use crate::form::Form;
    use crate::input::{Input, InputType};
    use crate::spec::FieldSpec;

    fn form() -> Form {
        Form::named("ei")
    }

    #[test]
    fn test_select() {
        let form = form();
        let spec = FieldSpec::default()
            .kind(InputType::Select)
            .options([("gr", "Green"), ("bl", "Blue")]);
        let html = Input::new("color", &spec, &form, None).create();
        assert_eq!(
            html,
            concat!(
                r#"<label for="color">Color</label>"#,
                r#"<select id="color" name="ei[color]">"#,
                r#"<option value="gr">Green</option>"#,
                r#"<option value="bl">Blue</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn test_select_marks_value() {
        let form = form();
        let spec = FieldSpec::default()
            .kind(InputType::Select)
            .options([("gr", "Green"), ("bl", "Blue")])
            .value("bl");
        let html = Input::new("color", &spec, &form, None).create();
        assert!(html.contains(r#"<option value="bl" selected="selected">Blue</option>"#));
        assert!(html.contains(r#"<option value="gr">Green</option>"#));
    }

    #[test]
    fn test_radio() {
        let form = form();
        let spec = FieldSpec::default()
            .kind(InputType::Radio)
            .options([("y", "Yes"), ("n", "No")])
            .value("n")
            .no_label();
        let html = Input::new("radio_buttons", &spec, &form, None).create();
        assert_eq!(
            html,
            concat!(
                r#"<input id="radio_buttons_y" type="radio" name="ei[radio_buttons]" value="y" />"#,
                r#"<label for="radio_buttons_y">Yes</label>"#,
                r#"<input id="radio_buttons_n" type="radio" name="ei[radio_buttons]" value="n" checked="checked" />"#,
                r#"<label for="radio_buttons_n">No</label>"#
            )
        );
    }

    #[test]
    fn test_checkbox_options() {
        let form = form();
        let spec = FieldSpec::default()
            .kind(InputType::Checkbox)
            .options([("gr", "Green"), ("bl", "Blue"), ("yl", "Yellow")]);
        let html = Input::new("color_checkbox", &spec, &form, Some("prefs")).create();
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 3);
        assert!(html.contains(r#"name="ei[prefs][color_checkbox][]""#));
        let gr = html.find(r#"value="gr""#).unwrap();
        let bl = html.find(r#"value="bl""#).unwrap();
        let yl = html.find(r#"value="yl""#).unwrap();
        assert!(gr < bl && bl < yl);
    }

    #[test]
    fn test_caption_targets_first_option() {
        let form = form();
        let spec = FieldSpec::default()
            .kind(InputType::Radio)
            .options([("y", "Yes"), ("n", "No")]);
        let html = Input::new("answer", &spec, &form, None).create();
        assert!(html.starts_with(
            r#"<label for="answer_y">Answer</label><input id="answer_y" type="radio""#
        ));
        assert!(!html.contains(r#"for="answer""#));

        let spec = FieldSpec::default()
            .kind(InputType::Checkbox)
            .options([("gr", "Green")])
            .label("Colors");
        let html = Input::new("color", &spec, &form, None).create();
        assert!(html.starts_with(r#"<label for="color_gr">Colors</label>"#));
        for target in html.split(r#"for=""#).skip(1) {
            let id = &target[..target.find('"').unwrap()];
            assert!(html.contains(&format!(r#"id="{id}""#)));
        }
    }

    #[test]
    fn test_single_checkbox() {
        let form = form();
        let spec = FieldSpec::default().kind(InputType::Checkbox);
        let html = Input::new("agree", &spec, &form, None).create();
        assert_eq!(
            html,
            r#"<label for="agree">Agree</label><input id="agree" type="checkbox" name="ei[agree]" value="1" />"#
        );
    }

    #[test]
    fn test_empty_choices() {
        let form = form();
        let spec = FieldSpec::default().kind(InputType::Radio).no_label();
        assert_eq!(Input::new("r", &spec, &form, None).create(), "");

        let spec = FieldSpec::default().kind(InputType::Radio);
        assert_eq!(Input::new("r", &spec, &form, None).create(), "");

        let spec = FieldSpec::default().kind(InputType::Select).no_label();
        assert_eq!(
            Input::new("s", &spec, &form, None).create(),
            r#"<select id="s" name="ei[s]"></select>"#
        );
    }
}
