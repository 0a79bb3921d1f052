// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! ```rust,ignore
//! use itemstore_core::prelude::*;
//! ```

#[cfg(feature = "derive")]
pub use crate::Entity;
#[cfg(feature = "sqlite")]
pub use crate::session::{Session, Store, StoreError};
pub use crate::{Repository, Schema, async_trait};
