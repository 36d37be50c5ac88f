//! # easy-inputs
//!
//! Declarative HTML form rendering.
//!
//! This crate provides:
//! - A per-request [`EasyInputs`] builder owning the form identity
//! - Field declarations with text, textarea, choice and button controls
//! - Groups with a shared nonce and an optional fieldset
//! - Ordered, escaped attribute serialization
//!
//! ## Quick Start
//!
//! ```rust
//! use easy_inputs::{EasyInputs, FieldSpec, InputType};
//!
//! let ei = EasyInputs::new("settings");
//!
//! let html = ei.input(
//!     "title",
//!     &FieldSpec::default().value("Hello").attr("class", "x"),
//! );
//! assert!(html.contains(r#"<label for="title">Title</label>"#));
//! assert!(html.contains(
//!     r#"<input id="title" type="text" name="settings[title]" class="x" value="Hello" />"#
//! ));
//!
//! let html = ei.input(
//!     "color",
//!     &FieldSpec::default()
//!         .kind(InputType::Select)
//!         .options([("gr", "Green"), ("bl", "Blue")]),
//! );
//! assert!(html.contains(r#"<option value="gr">Green</option><option value="bl">Blue</option>"#));
//! ```
//!
//! ## Groups
//!
//! ```rust
//! use easy_inputs::{EasyInputs, FieldSpec, FieldsetSpec, GroupSpec};
//!
//! let ei = EasyInputs::new("ei");
//! let group = GroupSpec::new("seuss-group")
//!     .fieldset(FieldsetSpec::new().attr("class", "sneetch").legend("Smile"))
//!     .field(FieldSpec::new("one-input"))
//!     .field(FieldSpec::new("two-input").value("Cindy-loo Hoo"));
//!
//! let html = ei.group(&group);
//! assert!(html.starts_with(r#"<fieldset class="sneetch"><legend>Smile</legend>"#));
//! assert!(html.contains(r#"name="ei[seuss-group][two-input]""#));
//! ```
//!
//! ## Labels
//!
//! Labels follow a three-way policy: absent derives the text from the field
//! name, explicit text is used as-is, and [`FieldSpec::no_label`] renders
//! none.

mod attrs;
mod builder;
mod config;
mod error;
mod form;
pub mod input;
mod nonce;
mod spec;

pub use attrs::{attrs_to_string, html_escape, Attrs, RESERVED_KEYS};
pub use builder::EasyInputs;
pub use config::{FormConfig, FormType, DEFAULT_METHOD, DEFAULT_NAME};
pub use error::{FormError, Result};
pub use form::{humanize, Form};
pub use input::{Input, InputKind, InputType};
pub use nonce::{NoTokens, TokenIssuer};
pub use spec::{FieldSpec, FieldsetSpec, GroupArgs, GroupSpec, Label, LegendSpec};
