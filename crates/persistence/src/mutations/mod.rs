// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Mutations use Diesel DSL, with `last_insert_rowid()` as the only
//! backend-specific helper (reached through `PersistenceBackend`).
//!
//! ## Module Organization
//!
//! - `crew`: Crew member creation, status changes and access codes
//! - `assets`: Image uploads and deletion
//! - `event`: Guests, rundown, gifts, venues, menu and design config

pub mod assets;
pub mod crew;
pub mod event;
