//! The demonstration page.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, H1, H2, H3, P};

use easy_inputs::{EasyInputs, FieldSpec, FieldsetSpec, GroupSpec, InputType};

const COLORS: [(&str, &str); 5] = [
    ("gr", "Green"),
    ("bl", "Blue"),
    ("yl", "Yellow"),
    ("rd", "Red"),
    ("or", "Orange"),
];

fn heading(text: &str) -> String {
    Element::<H2>::new().text(text).render()
}

fn subheading(text: &str) -> String {
    Element::<H3>::new().text(text).render()
}

fn paragraph(text: &str) -> String {
    Element::<P>::new().text(text).render()
}

/// Renders the body of the demo form, section by section.
fn render_sections(ei: &EasyInputs, extra: Option<&GroupSpec>) -> String {
    let mut html = String::new();

    html.push_str(&heading("Dead-simple input inclusion"));
    html.push_str(&ei.input("my_text_input", &FieldSpec::default()));

    html.push_str(&heading("Values and HTML attributes"));
    html.push_str(&ei.input(
        "another_text_input",
        &FieldSpec::default()
            .value("Input Value")
            .attr("class", "custom classes")
            .attr("data-nana-nana", "boo-boo")
            .label("Specify any label you want."),
    ));

    html.push_str(&heading("Labels are always optional"));
    html.push_str(&ei.input(
        "still_another_text_input",
        &FieldSpec::default()
            .value("Input Value")
            .attr("class", "custom classes")
            .attr("data-value", "Nana, nana, boo-boo")
            .no_label(),
    ));
    let separate = ei.input(
        "separate_label",
        &FieldSpec::default()
            .value("42")
            .attr("class", "custom classes")
            .no_label(),
    ) + &ei.label(
        "separate_label",
        Some("Or can even be created separately, if you like."),
        None,
    );
    html.push_str(&Element::<P>::new().raw(separate).render());

    html.push_str(&heading("Radio buttons and selects"));
    html.push_str(&ei.input(
        "radio_buttons",
        &FieldSpec::default()
            .kind(InputType::Radio)
            .options([("y", "Yes"), ("n", "No")]),
    ));
    html.push_str(&ei.input(
        "color_select",
        &FieldSpec::default().kind(InputType::Select).options(COLORS),
    ));
    html.push_str(&ei.input(
        "color_checkbox",
        &FieldSpec::default().kind(InputType::Checkbox).options(COLORS),
    ));

    html.push_str(&heading("Now for a textarea"));
    html.push_str(&ei.input(
        "big_area_of_text",
        &FieldSpec::default()
            .kind(InputType::Textarea)
            .attr("cols", "20")
            .attr("rows", "8"),
    ));

    html.push_str(&subheading("A group with its own nonce"));
    html.push_str(&ei.group(
        &GroupSpec::new("mygroup")
            .action("mygroup_nonce")
            .field(FieldSpec::new("my_input")),
    ));

    html.push_str(&subheading("A group inside a fieldset"));
    html.push_str(
        &ei.group(
            &GroupSpec::new("seuss-group")
                .fieldset(
                    FieldsetSpec::new()
                        .attr("class", "sneetch")
                        .legend("Don't cry because it's over, smile because it happened."),
                )
                .field(
                    FieldSpec::new("one-input")
                        .attr("class", "my-custom-class")
                        .attr("data-stars", "on thars"),
                )
                .field(FieldSpec::new("two-input").value("Cindy-loo Hoo"))
                .field(FieldSpec::new("red-input"))
                .field(FieldSpec::new("blue-input").label("Custom Label")),
        ),
    );

    if let Some(group) = extra {
        html.push_str(&subheading(&format!("Loaded group: {}", group.name)));
        html.push_str(&ei.group(group));
    }

    html.push_str(&ei.button("submit", "Save it!!"));
    html
}

/// Renders the full demonstration page around one form.
pub fn render_demo_page(ei: &EasyInputs, form_id: &str, extra: Option<&GroupSpec>) -> String {
    let mut form = ei.open(Some(form_id));
    form.push_str(&render_sections(ei, extra));
    form.push_str(ei.close());

    Element::<Div>::new()
        .class("wrap")
        .child::<H1, _>(|h| h.text("Demonstrating Easy Inputs"))
        .child::<P, _>(|p| {
            p.text(
                "Below you will see the output from the sample inputs. \
                 See the demo source for the calls that produce them.",
            )
        })
        .raw(form)
        .render()
}
