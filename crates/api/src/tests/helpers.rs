// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use asira_persistence::Persistence;

use crate::{CreateCrewRequest, CrewMemberInfo, create_crew_member};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_request(name: &str, phone: &str) -> CreateCrewRequest {
    CreateCrewRequest {
        name: Some(name.to_string()),
        phone: Some(phone.to_string()),
        role: Some(String::from("Usher")),
    }
}

pub fn create_test_crew(persistence: &mut Persistence, name: &str, phone: &str) -> CrewMemberInfo {
    create_crew_member(persistence, &create_request(name, phone))
        .expect("Failed to create crew member")
}
