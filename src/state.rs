// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared application state.

use itemstore_core::Store;

/// State handed to every handler.
///
/// Holds only the store handle; sessions are acquired per request.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Store
}

impl AppState {
    /// Create state around an opened store.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self {
            store
        }
    }

    /// Get reference to the store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}
