// Dweve IPXACT - IEEE 1685 Document Model
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Canonical test documents.
//!
//! - **documents**: one complete document per kind and revision
//! - **errors**: invalid XML, bad expressions and documents with known lint findings
//! - **builders**: fluent construction of custom components

pub mod builders;
mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all fixture functions for iteration.
///
/// Every fixture survives a write and read cycle unchanged.
pub fn all() -> FixtureList {
    vec![
        ("minimal_bus_definition", minimal_bus_definition),
        ("std22_bus_definition", std22_bus_definition),
        ("wire_abstraction_definition", wire_abstraction_definition),
        ("transactional_abstraction_definition", transactional_abstraction_definition),
        ("memory_component", memory_component),
        ("std22_component", std22_component),
        ("com_definition", com_definition),
        ("api_definition", api_definition),
    ]
}
