// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors surfaced by [`Navigator::set_menus`](crate::navigator::Navigator::set_menus).

use signpost_index::IndexError;
use signpost_menu::ConfigError;
use thiserror::Error;

/// A menu configuration the navigator cannot adopt.
///
/// The navigator keeps its previous configuration when this is returned.
#[derive(Debug, Error)]
pub enum NavError {
    /// The tree failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A route or alias failed to compile.
    #[error(transparent)]
    Index(#[from] IndexError),
}
