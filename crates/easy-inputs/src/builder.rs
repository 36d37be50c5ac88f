//! The `EasyInputs` façade.

use crate::attrs::Attrs;
use crate::config::{FormConfig, DEFAULT_NAME};
use crate::error::Result;
use crate::form::Form;
use crate::input::InputType;
use crate::nonce::TokenIssuer;
use crate::spec::{FieldSpec, FieldsetSpec, GroupSpec, LegendSpec};

/// Entry point for rendering form markup.
///
/// One builder is created per request and passed to whatever renders the
/// page. It owns the [`Form`] every field is named after.
#[derive(Debug)]
pub struct EasyInputs {
    form: Form,
}

impl EasyInputs {
    /// Creates a builder with default form settings.
    ///
    /// An empty name is kept, and such a builder renders empty strings.
    /// Use [`EasyInputs::default`] for the stock name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            form: Form::named(name),
        }
    }

    /// Creates a builder from a form config.
    pub fn from_config(config: FormConfig) -> Result<Self> {
        Ok(Self {
            form: Form::new(config)?,
        })
    }

    /// Creates a builder from a JSON form config.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(FormConfig::from_json(json)?)
    }

    /// Replaces the token issuer.
    #[must_use]
    pub fn with_issuer(mut self, issuer: impl TokenIssuer + 'static) -> Self {
        self.form = self.form.with_issuer(issuer);
        self
    }

    /// The underlying form.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Builder name.
    pub fn name(&self) -> &str {
        self.form.name()
    }

    /// Sets the default group for subsequent inputs.
    pub fn set_group(&mut self, group: impl Into<String>) {
        self.form.set_group(group);
    }

    /// Opening `<form>` tag.
    pub fn open(&self, id: Option<&str>) -> String {
        self.form.open(id)
    }

    /// Closing `</form>` tag.
    pub fn close(&self) -> &'static str {
        self.form.close()
    }

    /// A `<label>` for `for_id`.
    pub fn label(&self, for_id: &str, text: Option<&str>, attrs: Option<&Attrs>) -> String {
        self.form.label(for_id, text, attrs)
    }

    /// A `<legend>`.
    pub fn legend(&self, legend: &LegendSpec) -> String {
        self.form.legend(legend)
    }

    /// Opening `<fieldset>` tag with its legend.
    pub fn fieldset_open(&self, fieldset: &FieldsetSpec) -> String {
        self.form.fieldset_open(fieldset)
    }

    /// Closing `</fieldset>` tag.
    pub fn fieldset_close(&self) -> &'static str {
        self.form.fieldset_close()
    }

    /// Renders one field in the current group.
    pub fn input(&self, name: &str, spec: &FieldSpec) -> String {
        self.form.input(name, spec, None)
    }

    /// Renders a group.
    pub fn group(&self, group: &GroupSpec) -> String {
        self.form.group(&group.name, &group.fields, &group.args)
    }

    /// A submit button with the given caption.
    pub fn button(&self, name: &str, text: &str) -> String {
        let spec = FieldSpec::new(name).kind(InputType::Button).label(text);
        self.form.input(name, &spec, None)
    }

    /// Token for `scope`, or for the form itself.
    pub fn nonce(&self, scope: Option<&str>) -> String {
        self.form.nonce(scope)
    }

    /// HTML name for `field`.
    pub fn field_name(&self, field: &str, group: Option<&str>) -> String {
        self.form.field_name(field, group)
    }
}

impl Default for EasyInputs {
    fn default() -> Self {
        Self::new(DEFAULT_NAME)
    }
}
