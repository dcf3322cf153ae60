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

use ipxact_core::model::{Component, Register};
use ipxact_core::Document;

fn registers(component: &Component) -> impl Iterator<Item = &Register> {
    component
        .memory_maps
        .iter()
        .flat_map(|map| map.blocks.iter())
        .filter_map(|block| block.as_address_block())
        .flat_map(|data| data.registers.iter())
}

/// Registers in every memory map of a component document.
pub fn count_registers(document: &Document) -> usize {
    match document {
        Document::Component(component) => registers(component).count(),
        _ => 0,
    }
}

pub fn count_fields(document: &Document) -> usize {
    match document {
        Document::Component(component) => registers(component).map(|r| r.fields.len()).sum(),
        _ => 0,
    }
}

/// Physical ports of a component or logical ports of an abstraction definition.
pub fn count_ports(document: &Document) -> usize {
    match document {
        Document::Component(component) => component.ports.len(),
        Document::AbstractionDefinition(definition) => definition.ports.len(),
        _ => 0,
    }
}
