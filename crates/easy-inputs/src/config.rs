//! Form construction settings.

use serde::Deserialize;

use crate::attrs::Attrs;
use crate::error::{FormError, Result};

/// Name of a builder created through `Default`.
pub const DEFAULT_NAME: &str = "EasyInputs";

/// Where the submitted data is meant to end up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormType {
    /// Post meta saved alongside a post.
    #[default]
    PostMeta,
    /// A site setting posted to the options endpoint.
    Setting,
    /// Caller-supplied action and method.
    Custom,
}

impl FormType {
    /// Default submission target for this form type.
    pub fn default_action(&self) -> &'static str {
        match self {
            Self::PostMeta | Self::Setting => "options.php",
            Self::Custom => "",
        }
    }
}

/// Default submission method.
pub const DEFAULT_METHOD: &str = "POST";

/// Settings used to build a [`Form`](crate::Form).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Form name: the default id and the root of every generated HTML name.
    pub name: String,
    /// Form type; picks the default action.
    #[serde(rename = "type")]
    pub form_type: FormType,
    /// Explicit submission target.
    pub action: Option<String>,
    /// Explicit submission method.
    pub method: Option<String>,
    /// Attributes for the `<form>` tag.
    pub attrs: Attrs,
    /// Nonce scope for the form. Defaults to the name.
    pub nonce_base: Option<String>,
}

impl FormConfig {
    /// Creates a config with the given name and defaults elsewhere.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the form type.
    #[must_use]
    pub fn form_type(mut self, form_type: FormType) -> Self {
        self.form_type = form_type;
        self
    }

    /// Sets the submission target.
    #[must_use]
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Sets the submission method.
    #[must_use]
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Sets a `<form>` attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Sets the nonce scope.
    #[must_use]
    pub fn nonce_base(mut self, base: impl Into<String>) -> Self {
        self.nonce_base = Some(base.into());
        self
    }

    /// Parses a config from JSON. The name is required.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName("form"));
        }
        Ok(())
    }
}
