//! Per-field rendering.
//!
//! [`InputType`] is resolved once from the declared type tag; [`Input::create`]
//! then dispatches to the matching renderer. Tags that name no known control
//! fall back to a plain text input.

mod choice;
mod text;

use tracing::{debug, trace};

use crate::attrs::attrs_segment;
use crate::form::{humanize, Form};
use crate::spec::{FieldSpec, Label};

/// Standard `<input type="…">` kinds rendered by the generic template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Hidden,
    Number,
    Url,
    Tel,
    Search,
    Date,
    Time,
    DateTimeLocal,
    Month,
    Week,
    Color,
    Range,
    File,
    Submit,
    Reset,
}

impl InputKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Hidden,
        Self::Number,
        Self::Url,
        Self::Tel,
        Self::Search,
        Self::Date,
        Self::Time,
        Self::DateTimeLocal,
        Self::Month,
        Self::Week,
        Self::Color,
        Self::Range,
        Self::File,
        Self::Submit,
        Self::Reset,
    ];

    /// The value of the rendered `type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Hidden => "hidden",
            Self::Number => "number",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::Color => "color",
            Self::Range => "range",
            Self::File => "file",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    /// Looks up a kind by its `type` attribute value.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

/// The control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// A single `<input>` of the given kind.
    Input(InputKind),
    /// A `<textarea>`.
    Textarea,
    /// One checkbox per option, or a lone checkbox without options.
    Checkbox,
    /// One radio button per option.
    Radio,
    /// A `<select>` with one `<option>` per option.
    Select,
    /// A `<button>`.
    Button,
}

impl Default for InputType {
    fn default() -> Self {
        Self::Input(InputKind::Text)
    }
}

impl InputType {
    /// Resolves a declared type tag. Unknown tags become a text input.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        match tag.as_str() {
            "" => Self::default(),
            "textarea" => Self::Textarea,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "select" => Self::Select,
            "button" => Self::Button,
            other => match InputKind::parse(other) {
                Some(kind) => Self::Input(kind),
                None => {
                    debug!(tag = other, "unknown input type, falling back to text");
                    Self::default()
                }
            },
        }
    }

    /// Returns the tag this type renders as.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input(kind) => kind.as_str(),
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::Button => "button",
        }
    }

    /// Whether the control is driven by an options mapping.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Checkbox | Self::Radio | Self::Select)
    }
}

/// Renders one field of a [`Form`].
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    field: &'a str,
    spec: &'a FieldSpec,
    form: &'a Form,
    group: Option<&'a str>,
}

impl<'a> Input<'a> {
    /// Creates a renderer for `field`.
    ///
    /// `group` namespaces the generated HTML name; when `None` the form's
    /// current group is used.
    pub fn new(
        field: &'a str,
        spec: &'a FieldSpec,
        form: &'a Form,
        group: Option<&'a str>,
    ) -> Self {
        Self {
            field,
            spec,
            form,
            group,
        }
    }

    /// Produces the HTML for this field. An empty field name gives an empty
    /// string.
    pub fn create(&self) -> String {
        if self.field.is_empty() {
            debug!("skipping input without a field name");
            return String::new();
        }
        if self.form.name().is_empty() {
            debug!(field = self.field, "skipping input of an unnamed form");
            return String::new();
        }
        trace!(
            field = self.field,
            input_type = self.spec.input_type.as_str(),
            "rendering input"
        );

        match self.spec.input_type {
            InputType::Input(kind) => text::render_input(self, kind),
            InputType::Textarea => text::render_textarea(self),
            InputType::Button => text::render_button(self),
            InputType::Select => choice::render_select(self),
            InputType::Radio => choice::render_radio(self),
            InputType::Checkbox => choice::render_checkbox(self),
        }
    }

    /// The HTML `name` attribute: the explicit override, or the form's
    /// naming scheme.
    fn html_name(&self) -> String {
        match self.spec.html_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.form.field_name(self.field, self.group),
        }
    }

    /// The `<label>` for this field, honoring the label policy.
    fn label_html(&self) -> String {
        self.label_for(self.field)
    }

    /// The field's `<label>` pointing at `target` instead of the field id.
    fn label_for(&self, target: &str) -> String {
        let text = match &self.spec.label {
            Label::Auto => None,
            Label::Text(text) => Some(text.as_str()),
            Label::Hidden => return String::new(),
        };
        match text {
            Some(text) if !text.is_empty() => self.form.label(target, Some(text), None),
            _ => self.form.label(target, Some(&humanize(self.field)), None),
        }
    }

    fn attrs(&self) -> String {
        attrs_segment(&self.spec.attrs.without_reserved())
    }

    fn value(&self) -> &str {
        self.spec.value.as_deref().unwrap_or_default()
    }
}
