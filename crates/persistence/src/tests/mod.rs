// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

#[cfg(feature = "mysql")]
mod backend_validation_tests;
mod crew_tests;
mod initialization_tests;

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Inserts a crew member with a fixed role.
pub fn create_test_crew_member(
    persistence: &mut Persistence,
    name: &str,
    phone: &str,
    access_code: &str,
) -> i64 {
    persistence
        .create_crew_member(name, "Usher", phone, access_code)
        .expect("Failed to create crew member")
}
