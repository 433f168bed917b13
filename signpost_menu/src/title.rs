// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu titles and the translator seam used to render them.
//!
//! Titles are stored unresolved and turned into text only when a renderer (or a
//! breadcrumb consumer) asks for it, so switching locale never requires a
//! rebuild of the menu indexes.
//!
//! ```
//! use signpost_menu::title::{Title, Untranslated};
//!
//! let literal = Title::from("Dashboard");
//! assert_eq!(literal.resolve(&Untranslated), "Dashboard");
//!
//! let lookup = |key: &str| if key == "menu.users" { "Users".to_string() } else { key.to_string() };
//! assert_eq!(Title::translated("menu.users").resolve(&lookup), "Users");
//!
//! let rendered = Title::renderer(|t| format!("{} (3)", t.translate("menu.users")));
//! assert_eq!(rendered.resolve(&lookup), "Users (3)");
//! ```

use core::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// Translate message keys into display text.
pub trait Translate {
    /// Return the text for `key`.
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// A translator that returns every key verbatim.
#[derive(Copy, Clone, Debug, Default)]
pub struct Untranslated;

impl Translate for Untranslated {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Render function stored by [`Title::Renderer`].
pub type TitleRenderer = Arc<dyn Fn(&dyn Translate) -> String + Send + Sync>;

/// A menu title.
#[derive(Clone)]
pub enum Title {
    /// Fixed text.
    Literal(String),
    /// Message key passed through the translator.
    Translated(String),
    /// Arbitrary render function taking the translator.
    Renderer(TitleRenderer),
}

impl Title {
    /// Message-key title.
    pub fn translated(key: impl Into<String>) -> Self {
        Self::Translated(key.into())
    }

    /// Render-function title.
    pub fn renderer(f: impl Fn(&dyn Translate) -> String + Send + Sync + 'static) -> Self {
        Self::Renderer(Arc::new(f))
    }

    /// Produce display text.
    pub fn resolve(&self, translator: &dyn Translate) -> String {
        match self {
            Self::Literal(s) => s.clone(),
            Self::Translated(key) => translator.translate(key),
            Self::Renderer(f) => f(translator),
        }
    }

    /// The fixed text, if this is a [`Title::Literal`].
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            _ => None,
        }
    }
}

impl Default for Title {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl fmt::Debug for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Translated(k) => f.debug_tuple("Translated").field(k).finish(),
            Self::Renderer(_) => f.write_str("Renderer(..)"),
        }
    }
}

// Renderers compare by identity.
impl PartialEq for Title {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Translated(a), Self::Translated(b)) => a == b,
            (Self::Renderer(a), Self::Renderer(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for Title {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_string())
    }
}

impl From<String> for Title {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

/// Configuration form: a plain string or `{ "i18n": "<key>" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTitle {
    Literal(String),
    I18n { i18n: String },
}

impl<'de> Deserialize<'de> for Title {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match RawTitle::deserialize(deserializer)? {
            RawTitle::Literal(s) => Self::Literal(s),
            RawTitle::I18n { i18n } => Self::Translated(i18n),
        })
    }
}
