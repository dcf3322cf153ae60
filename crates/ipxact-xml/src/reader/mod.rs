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

//! Element readers over a parsed `roxmltree` tree.
//!
//! Readers are lenient: missing optional elements become empty strings or
//! empty lists, and unknown elements are skipped. Validation is left to the
//! `ipxact-lint` validators.

mod abstraction;
mod address_space;
mod bus_definition;
mod common;
mod component;
mod kactus;
mod memory;
mod mode;
mod port;
mod power_domain;

pub use abstraction::{
    read_abstraction_definition, read_port_abstraction, read_qualifier,
    read_transactional_abstraction, read_wire_abstraction,
};
pub use address_space::{read_address_space, read_segment};
pub use bus_definition::read_bus_definition;
pub use common::{
    read_choice, read_choices, read_name_group, read_parameter, read_parameter_list,
    read_parameters, read_vlnv_attributes, read_vlnv_elements,
};
pub use component::read_component;
pub use kactus::{read_api_definition, read_api_function, read_com_definition, read_com_property};
pub use memory::{read_field, read_memory_block, read_memory_map, read_register};
pub use mode::{read_field_slice, read_mode, read_port_slice};
pub use port::{read_port, read_view};
pub use power_domain::read_power_domain;
