//! Declarative field and group descriptions.
//!
//! These are plain value records built by the caller for a single render.
//! They can be constructed in code with the builder methods or loaded from
//! loosely typed JSON, in which case malformed parts are dropped rather than
//! rejected.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::attrs::{scalar_to_string, Attrs};
use crate::error::FormError;
use crate::input::InputType;

/// How a field's label is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Label {
    /// Derive the label text from the field name.
    #[default]
    Auto,
    /// Use the given text.
    Text(String),
    /// Render no label at all.
    Hidden,
}

impl Label {
    fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Bool(false)) => Self::Hidden,
            Some(Value::String(text)) if !text.is_empty() => Self::Text(text.clone()),
            _ => Self::Auto,
        }
    }
}

/// Description of one form control.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct FieldSpec {
    /// Field key, used for the id and the generated HTML name.
    pub field: String,
    /// Control type.
    pub input_type: InputType,
    /// Fully-qualified HTML `name`, bypassing the naming scheme.
    pub html_name: Option<String>,
    /// Current value.
    pub value: Option<String>,
    /// Extra HTML attributes.
    pub attrs: Attrs,
    /// Choices for radio, checkbox and select controls (key to label).
    pub options: IndexMap<String, String>,
    /// Label policy.
    pub label: Label,
}

impl FieldSpec {
    /// Creates a text field with default settings.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Self::default()
        }
    }

    /// Sets the control type.
    #[must_use]
    pub fn kind(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Sets the current value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Overrides the generated HTML `name`.
    #[must_use]
    pub fn html_name(mut self, name: impl Into<String>) -> Self {
        self.html_name = Some(name.into());
        self
    }

    /// Sets an HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Replaces all HTML attributes.
    #[must_use]
    pub fn attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Appends a choice.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.insert(key.into(), label.into());
        self
    }

    /// Appends several choices, in order.
    #[must_use]
    pub fn options<K, V>(mut self, options: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.options
            .extend(options.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Uses custom label text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = Label::Text(text.into());
        self
    }

    /// Suppresses the label.
    #[must_use]
    pub fn no_label(mut self) -> Self {
        self.label = Label::Hidden;
        self
    }

    /// Reads a field declaration for `field` out of a JSON value.
    ///
    /// A non-object value yields a default text field, the same as a bare
    /// field name in a group listing.
    pub fn from_value(field: impl Into<String>, value: &Value) -> Self {
        let mut spec = Self::new(field);
        let Value::Object(map) = value else {
            return spec;
        };
        if let Some(tag) = map.get("type").and_then(Value::as_str) {
            spec.input_type = InputType::parse(tag);
        }
        spec.html_name = map
            .get("name")
            .and_then(scalar_to_string)
            .filter(|n| !n.is_empty());
        spec.value = map.get("value").and_then(scalar_to_string);
        spec.attrs = map.get("attrs").map(Attrs::from_value).unwrap_or_default();
        if let Some(Value::Object(options)) = map.get("options") {
            spec.options = options
                .iter()
                .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k.clone(), v)))
                .collect();
        }
        spec.label = Label::from_value(map.get("label"));
        spec
    }
}

impl From<Value> for FieldSpec {
    fn from(value: Value) -> Self {
        let field = value
            .get("field")
            .and_then(scalar_to_string)
            .unwrap_or_default();
        Self::from_value(field, &value)
    }
}

/// A legend inside a fieldset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegendSpec {
    /// Legend text. Empty means no legend.
    pub title: String,
    /// HTML attributes.
    pub attrs: Attrs,
}

impl LegendSpec {
    /// Creates a legend with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            attrs: Attrs::new(),
        }
    }

    /// Sets an HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Reads a legend from either a bare title string or a `{title, attrs}`
    /// object.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                title: map
                    .get("title")
                    .and_then(scalar_to_string)
                    .unwrap_or_default(),
                attrs: map.get("attrs").map(Attrs::from_value).unwrap_or_default(),
            },
            other => Self::new(scalar_to_string(other).unwrap_or_default()),
        }
    }
}

impl From<&str> for LegendSpec {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

/// A fieldset wrapping a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsetSpec {
    /// HTML attributes.
    pub attrs: Attrs,
    /// Optional legend.
    pub legend: Option<LegendSpec>,
}

impl FieldsetSpec {
    /// Creates a bare fieldset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Sets the legend.
    #[must_use]
    pub fn legend(mut self, legend: impl Into<LegendSpec>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                attrs: map.get("attrs").map(Attrs::from_value).unwrap_or_default(),
                legend: map.get("legend").map(LegendSpec::from_value),
            }),
            Value::Bool(true) => Some(Self::new()),
            _ => None,
        }
    }
}

/// Settings applied to a group container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupArgs {
    /// Wrap the group in a fieldset.
    pub fieldset: Option<FieldsetSpec>,
    /// Nonce scope override. Defaults to `{group}_nonce`.
    pub action: Option<String>,
}

impl GroupArgs {
    /// Creates empty group arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the group in the given fieldset.
    #[must_use]
    pub fn fieldset(mut self, fieldset: FieldsetSpec) -> Self {
        self.fieldset = Some(fieldset);
        self
    }

    /// Overrides the nonce scope.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// A named collection of fields rendered together.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct GroupSpec {
    /// Group name; namespaces the HTML names of its fields.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Container settings.
    pub args: GroupArgs,
}

impl GroupSpec {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Wraps the group in the given fieldset.
    #[must_use]
    pub fn fieldset(mut self, fieldset: FieldsetSpec) -> Self {
        self.args.fieldset = Some(fieldset);
        self
    }

    /// Overrides the group's nonce scope.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.args.action = Some(action.into());
        self
    }

    /// Parses a group declaration from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for GroupSpec {
    type Error = FormError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(FormError::Config(serde::de::Error::custom(
                "group declaration must be a JSON object",
            )));
        };
        let name = map
            .get("name")
            .and_then(scalar_to_string)
            .filter(|n| !n.is_empty())
            .ok_or(FormError::MissingName("group"))?;

        let fields = match map.get("fields").or_else(|| map.get("inputs")) {
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(key, spec)| FieldSpec::from_value(key.clone(), spec))
                .collect(),
            Some(Value::Array(items)) => {
                let mut fields: Vec<FieldSpec> = Vec::with_capacity(items.len());
                for item in items {
                    let spec = match item {
                        Value::String(field) => FieldSpec::new(field.clone()),
                        Value::Object(_) => FieldSpec::from(item.clone()),
                        _ => continue,
                    };
                    if fields.iter().any(|f| f.field == spec.field) {
                        debug!(group = %name, field = %spec.field, "dropping duplicate field");
                        continue;
                    }
                    fields.push(spec);
                }
                fields
            }
            _ => Vec::new(),
        };

        let args = GroupArgs {
            fieldset: map.get("fieldset").and_then(FieldsetSpec::from_value),
            action: map
                .get("action")
                .and_then(scalar_to_string)
                .filter(|a| !a.is_empty()),
        };

        Ok(Self { name, fields, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputKind;
    use serde_json::json;

    #[test]
    fn test_field_builder() {
        let field = FieldSpec::new("color")
            .kind(InputType::Select)
            .option("gr", "Green")
            .option("bl", "Blue")
            .value("bl")
            .no_label();

        assert_eq!(field.field, "color");
        assert_eq!(field.input_type, InputType::Select);
        assert_eq!(field.options.len(), 2);
        assert_eq!(field.value.as_deref(), Some("bl"));
        assert_eq!(field.label, Label::Hidden);
    }

    #[test]
    fn test_label_tri_state() {
        let absent = FieldSpec::from_value("a", &json!({}));
        let text = FieldSpec::from_value("a", &json!({ "label": "Custom" }));
        let hidden = FieldSpec::from_value("a", &json!({ "label": false }));

        assert_eq!(absent.label, Label::Auto);
        assert_eq!(text.label, Label::Text("Custom".to_string()));
        assert_eq!(hidden.label, Label::Hidden);
    }

    #[test]
    fn test_field_from_value() {
        let field = FieldSpec::from_value(
            "big_area_of_text",
            &json!({
                "type": "textarea",
                "attrs": { "cols": 20, "rows": 8 },
                "value": 42,
            }),
        );
        assert_eq!(field.input_type, InputType::Textarea);
        assert_eq!(field.attrs.to_html(), r#"cols="20" rows="8""#);
        assert_eq!(field.value.as_deref(), Some("42"));
    }

    #[test]
    fn test_malformed_parts_ignored() {
        let field = FieldSpec::from_value(
            "x",
            &json!({ "type": "radio", "attrs": 5, "options": "y,n" }),
        );
        assert!(field.attrs.is_empty());
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_options_keep_order() {
        let field: FieldSpec = serde_json::from_str(
            r#"{"field": "c", "type": "select", "options": {"or": "Orange", "bl": "Blue", "gr": "Green"}}"#,
        )
        .unwrap();
        let keys: Vec<_> = field.options.keys().map(String::as_str).collect();
        assert_eq!(keys, ["or", "bl", "gr"]);
    }

    #[test]
    fn test_legend_forms() {
        assert_eq!(LegendSpec::from_value(&json!("Title")).title, "Title");
        let legend = LegendSpec::from_value(&json!({
            "title": "Title",
            "attrs": { "class": "lg" },
        }));
        assert_eq!(legend.title, "Title");
        assert_eq!(legend.attrs.get("class"), Some("lg"));
    }

    #[test]
    fn test_group_from_json_object_fields() {
        let group = GroupSpec::from_json(
            r#"{
                "name": "seuss-group",
                "fieldset": {
                    "attrs": { "class": "sneetch" },
                    "legend": { "title": "Smile" }
                },
                "inputs": {
                    "one-input": { "attrs": { "class": "mine" } },
                    "two-input": { "value": "Cindy-loo Hoo" },
                    "red-input": null
                }
            }"#,
        )
        .unwrap();

        assert_eq!(group.name, "seuss-group");
        let names: Vec<_> = group.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["one-input", "two-input", "red-input"]);
        let fieldset = group.args.fieldset.unwrap();
        assert_eq!(fieldset.attrs.get("class"), Some("sneetch"));
        assert_eq!(fieldset.legend.unwrap().title, "Smile");
    }

    #[test]
    fn test_group_from_json_array_fields() {
        let group = GroupSpec::from_json(
            r#"{"name": "mygroup", "fields": ["my_input", {"field": "other", "type": "email"}, 7]}"#,
        )
        .unwrap();
        assert_eq!(group.fields.len(), 2);
        assert_eq!(group.fields[1].input_type, InputType::Input(InputKind::Email));
        assert!(group.args.fieldset.is_none());
    }

    #[test]
    fn test_group_array_keeps_first_duplicate() {
        let group = GroupSpec::from_json(
            r#"{"name": "g", "fields": ["a", {"field": "a", "type": "email"}, "b", "a"]}"#,
        )
        .unwrap();
        let names: Vec<_> = group.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(group.fields[0].input_type, InputType::default());
    }

    #[test]
    fn test_group_requires_name() {
        let err = GroupSpec::from_json(r#"{"fields": ["a"]}"#).unwrap_err();
        assert!(matches!(err, FormError::MissingName("group")));

        let err = GroupSpec::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, FormError::Config(_)));

        let err = GroupSpec::from_json("{not json").unwrap_err();
        assert!(matches!(err, FormError::Config(_)));
    }
}
