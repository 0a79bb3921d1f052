// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Helpers shared by the code generators.
//!
//! - [`fields`] builds struct literal assignments for `From` impls
//! - [`sql`] builds column lists, placeholders and bind chains

pub mod fields;
pub mod sql;
