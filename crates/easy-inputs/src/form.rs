//! The form context and its structural elements.

use tracing::{debug, trace};

use crate::attrs::{attrs_segment, Attrs};
use crate::config::{FormConfig, FormType, DEFAULT_METHOD};
use crate::error::Result;
use crate::input::Input;
use crate::nonce::{NoTokens, TokenIssuer};
use crate::spec::{FieldSpec, FieldsetSpec, GroupArgs, LegendSpec};

/// Turns a field key into display text: underscores and hyphens become
/// spaces and every word starts with a capital letter.
pub fn humanize(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut word_start = true;
    for c in field.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}

/// Form-level identity shared by every input it renders.
pub struct Form {
    name: String,
    form_type: FormType,
    action: String,
    method: String,
    attrs: Attrs,
    group: Option<String>,
    nonce_base: String,
    issuer: Box<dyn TokenIssuer>,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("name", &self.name)
            .field("form_type", &self.form_type)
            .field("action", &self.action)
            .field("method", &self.method)
            .field("attrs", &self.attrs)
            .field("group", &self.group)
            .field("nonce_base", &self.nonce_base)
            .finish_non_exhaustive()
    }
}

impl Form {
    /// Builds a form from its config. Fails if the name is empty.
    pub fn new(config: FormConfig) -> Result<Self> {
        config.validate()?;
        let FormConfig {
            name,
            form_type,
            action,
            method,
            attrs,
            nonce_base,
        } = config;

        Ok(Self {
            action: action.unwrap_or_else(|| form_type.default_action().to_string()),
            method: method.unwrap_or_else(|| DEFAULT_METHOD.to_string()),
            nonce_base: nonce_base
                .filter(|b| !b.is_empty())
                .unwrap_or_else(|| name.clone()),
            name,
            form_type,
            attrs,
            group: None,
            issuer: Box::new(NoTokens),
        })
    }

    /// Builds a form with default settings.
    ///
    /// The name is kept as given. A form with an empty name renders nothing:
    /// its `open`, `group` and inputs are all empty strings.
    pub fn named(name: impl Into<String>) -> Self {
        let name: String = name.into();
        let name = name.trim().to_string();
        Self {
            action: FormType::default().default_action().to_string(),
            method: DEFAULT_METHOD.to_string(),
            nonce_base: name.clone(),
            name,
            form_type: FormType::default(),
            attrs: Attrs::new(),
            group: None,
            issuer: Box::new(NoTokens),
        }
    }

    /// Replaces the token issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl TokenIssuer + 'static) -> Self {
        self.issuer = Box::new(issuer);
        self
    }

    /// Form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Form type.
    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    /// Submission target.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Submission method.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// `<form>` attributes.
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Current default group.
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Nonce scope for the form.
    pub fn nonce_base(&self) -> &str {
        &self.nonce_base
    }

    /// Switches the form type, resetting action and method to its defaults.
    pub fn set_type(&mut self, form_type: FormType) {
        self.form_type = form_type;
        self.action = form_type.default_action().to_string();
        self.method = DEFAULT_METHOD.to_string();
    }

    /// Sets the group used to namespace HTML names when no explicit group is
    /// given. An empty name clears it.
    pub fn set_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        self.group = if group.is_empty() { None } else { Some(group) };
    }

    /// Opening `<form>` tag, followed by the form nonce.
    pub fn open(&self, id: Option<&str>) -> String {
        if self.name.is_empty() {
            debug!("skipping open tag of an unnamed form");
            return String::new();
        }
        let id = id.filter(|id| !id.is_empty()).unwrap_or(&self.name);
        format!(
            r#"<form id="{id}" action="{}" method="{}"{}>{}"#,
            self.action,
            self.method,
            attrs_segment(&self.attrs),
            self.nonce(None)
        )
    }

    /// Closing `</form>` tag.
    pub fn close(&self) -> &'static str {
        "</form>"
    }

    /// A `<label>` for the element with id `for_id`.
    ///
    /// An empty `for_id` gives an empty string. Without text the label reads
    /// as the humanized id.
    pub fn label(&self, for_id: &str, text: Option<&str>, attrs: Option<&Attrs>) -> String {
        if for_id.is_empty() {
            debug!("skipping label without a target id");
            return String::new();
        }
        let text = match text {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => humanize(for_id),
        };
        let attrs = attrs.map(attrs_segment).unwrap_or_default();
        format!(r#"<label for="{for_id}"{attrs}>{text}</label>"#)
    }

    /// A `<legend>`, or an empty string when the title is empty.
    pub fn legend(&self, legend: &LegendSpec) -> String {
        if legend.title.is_empty() {
            return String::new();
        }
        format!(
            "<legend{}>{}</legend>",
            attrs_segment(&legend.attrs),
            legend.title
        )
    }

    /// Opening `<fieldset>` tag with its legend.
    pub fn fieldset_open(&self, fieldset: &FieldsetSpec) -> String {
        let legend = fieldset
            .legend
            .as_ref()
            .map(|l| self.legend(l))
            .unwrap_or_default();
        format!("<fieldset{}>{legend}", attrs_segment(&fieldset.attrs))
    }

    /// Closing `</fieldset>` tag.
    pub fn fieldset_close(&self) -> &'static str {
        "</fieldset>"
    }

    /// Renders a group of fields under one nonce, optionally inside a
    /// fieldset. Each field's HTML name is namespaced under `name`.
    ///
    /// Returns an empty string when `name`, `fields` or `args` is empty.
    /// Arguments are empty when they carry neither a fieldset nor an action.
    pub fn group(&self, name: &str, fields: &[FieldSpec], args: &GroupArgs) -> String {
        if name.is_empty() || fields.is_empty() || *args == GroupArgs::default() {
            debug!(
                group = name,
                fields = fields.len(),
                has_args = *args != GroupArgs::default(),
                "skipping incomplete group"
            );
            return String::new();
        }
        if self.name.is_empty() {
            debug!(group = name, "skipping group of an unnamed form");
            return String::new();
        }
        trace!(group = name, fields = fields.len(), "rendering group");

        let scope = args
            .action
            .clone()
            .unwrap_or_else(|| format!("{name}_nonce"));
        let mut html = self.issuer.issue_token(&scope);

        if let Some(fieldset) = &args.fieldset {
            html.push_str(&self.fieldset_open(fieldset));
        }
        for spec in fields {
            html.push_str(&self.input(&spec.field, spec, Some(name)));
        }
        if args.fieldset.is_some() {
            html.push_str(self.fieldset_close());
        }
        html
    }

    /// Renders one field.
    pub fn input(&self, name: &str, spec: &FieldSpec, group: Option<&str>) -> String {
        Input::new(name, spec, self, group).create()
    }

    /// Token for `scope`, or for the form's nonce base when `None`.
    pub fn nonce(&self, scope: Option<&str>) -> String {
        let scope = scope.filter(|s| !s.is_empty()).unwrap_or(&self.nonce_base);
        self.issuer.issue_token(scope)
    }

    /// HTML name for `field`: `{form}[{group}][{field}]`, with the group
    /// segment omitted when there is no group.
    pub fn field_name(&self, field: &str, group: Option<&str>) -> String {
        if field.is_empty() || self.name.is_empty() {
            return String::new();
        }
        let group = group
            .filter(|g| !g.is_empty())
            .or(self.group.as_deref());
        match group {
            Some(group) => format!("{}[{group}][{field}]", self.name),
            None => format!("{}[{field}]", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputType;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("my_text_input"), "My Text Input");
        assert_eq!(humanize("one-input"), "One Input");
        assert_eq!(humanize("title"), "Title");
        assert_eq!(humanize("already Spaced"), "Already Spaced");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_new_defaults() {
        let form = Form::new(FormConfig::new("dah")).unwrap();
        assert_eq!(form.name(), "dah");
        assert_eq!(form.action(), "options.php");
        assert_eq!(form.method(), "POST");
        assert_eq!(form.nonce_base(), "dah");
        assert_eq!(form.form_type(), FormType::PostMeta);
    }

    #[test]
    fn test_new_custom() {
        let form = Form::new(
            FormConfig::new("search")
                .form_type(FormType::Custom)
                .action("/search")
                .method("GET")
                .nonce_base("search_base"),
        )
        .unwrap();
        assert_eq!(form.action(), "/search");
        assert_eq!(form.method(), "GET");
        assert_eq!(form.nonce_base(), "search_base");
    }

    #[test]
    fn test_new_requires_name() {
        assert!(Form::new(FormConfig::new("  ")).is_err());
        assert_eq!(Form::named("").name(), "");
    }

    #[test]
    fn test_unnamed_form_renders_nothing() {
        let form = Form::named(" ").with_issuer(|scope: &str| format!("[{scope}]"));
        let args = GroupArgs::new().fieldset(FieldsetSpec::new());
        assert_eq!(form.open(None), "");
        assert_eq!(form.open(Some("custom-id")), "");
        assert_eq!(form.input("title", &FieldSpec::default(), None), "");
        assert_eq!(form.group("grp", &[FieldSpec::new("a")], &args), "");
        assert_eq!(form.field_name("title", None), "");
    }

    #[test]
    fn test_set_type() {
        let mut form = Form::new(FormConfig::new("f").action("/x")).unwrap();
        form.set_type(FormType::Setting);
        assert_eq!(form.action(), "options.php");
        form.set_type(FormType::Custom);
        assert_eq!(form.action(), "");
    }

    #[test]
    fn test_open_close() {
        let form = Form::new(FormConfig::new("dah").attr("class", "wide")).unwrap();
        assert_eq!(
            form.open(None),
            r#"<form id="dah" action="options.php" method="POST" class="wide">"#
        );
        assert_eq!(
            form.open(Some("dah-form")),
            r#"<form id="dah-form" action="options.php" method="POST" class="wide">"#
        );
        assert_eq!(form.open(Some("")), form.open(None));
        assert_eq!(form.close(), "</form>");
    }

    #[test]
    fn test_open_with_nonce() {
        let form = Form::named("dah").with_issuer(|scope: &str| format!("[{scope}]"));
        assert!(form.open(None).ends_with(r#"method="POST">[dah]"#));
        assert_eq!(form.nonce(Some("other")), "[other]");
    }

    #[test]
    fn test_label() {
        let form = Form::named("f");
        assert_eq!(form.label("", Some("Text"), None), "");
        assert_eq!(
            form.label("separate_label", None, None),
            r#"<label for="separate_label">Separate Label</label>"#
        );
        assert_eq!(
            form.label("x", Some("Custom"), Some(&Attrs::new().with("class", "lbl"))),
            r#"<label for="x" class="lbl">Custom</label>"#
        );
        assert_eq!(form.label("x_y", Some(""), None), r#"<label for="x_y">X Y</label>"#);
    }

    #[test]
    fn test_legend() {
        let form = Form::named("f");
        assert_eq!(form.legend(&LegendSpec::new("")), "");
        assert_eq!(form.legend(&LegendSpec::new("Hi")), "<legend>Hi</legend>");
        assert_eq!(
            form.legend(&LegendSpec::new("Hi").attr("class", "lg")),
            r#"<legend class="lg">Hi</legend>"#
        );
    }

    #[test]
    fn test_field_name() {
        let mut form = Form::named("ei");
        assert_eq!(form.field_name("title", None), "ei[title]");
        assert_eq!(form.field_name("title", Some("grp")), "ei[grp][title]");
        assert_eq!(form.field_name("", Some("grp")), "");

        form.set_group("global");
        assert_eq!(form.field_name("title", None), "ei[global][title]");
        assert_eq!(form.field_name("title", Some("grp")), "ei[grp][title]");

        form.set_group("");
        assert_eq!(form.group_name(), None);
    }

    #[test]
    fn test_group_bails_out() {
        let form = Form::named("ei");
        let args = GroupArgs::new().fieldset(FieldsetSpec::new());
        assert_eq!(form.group("grp", &[], &args), "");
        assert_eq!(form.group("", &[FieldSpec::new("a")], &args), "");
        assert_eq!(form.group("grp", &[FieldSpec::new("a")], &GroupArgs::new()), "");
        assert_eq!(form.group("grp", &[FieldSpec::new("a")], &GroupArgs::default()), "");
    }

    #[test]
    fn test_group_fieldset() {
        let form = Form::named("ei");
        let fields = [
            FieldSpec::new("one-input").attr("class", "mine"),
            FieldSpec::new("color")
                .kind(InputType::Select)
                .options([("gr", "Green")]),
        ];
        let args = GroupArgs::new().fieldset(
            FieldsetSpec::new()
                .attr("class", "sneetch")
                .legend("Smile"),
        );
        let html = form.group("seuss", &fields, &args);

        assert!(html.starts_with(r#"<fieldset class="sneetch"><legend>Smile</legend>"#));
        assert!(html.ends_with("</select></fieldset>"));
        assert!(html.contains(r#"name="ei[seuss][one-input]""#));
        assert!(html.contains(r#"<select id="color" name="ei[seuss][color]">"#));
    }

    #[test]
    fn test_group_nonce_scope() {
        let form = Form::named("ei").with_issuer(|scope: &str| format!("<!--{scope}-->"));
        let fields = [FieldSpec::new("a")];

        let html = form.group("grp", &fields, &GroupArgs::new().fieldset(FieldsetSpec::new()));
        assert!(html.starts_with("<!--grp_nonce--><fieldset><label"));

        let html = form.group("grp", &fields, &GroupArgs::new().action("save_grp"));
        assert!(html.starts_with("<!--save_grp-->"));
    }
}
