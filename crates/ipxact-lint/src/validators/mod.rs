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

//! Validators for every document entity.
//!
//! Validators borrow the expression parser and the sub-validators they delegate to,
//! so building one is cheap and a document-level validator assembles its parts on
//! every call from the parameters in scope.

pub mod abstraction;
pub mod address_space;
pub mod bus_definition;
pub mod choice;
pub mod common;
pub mod component;
pub mod kactus;
pub mod memory;
pub mod mode;
pub mod parameter;
pub mod port;
pub mod power_domain;

pub use abstraction::{AbstractionDefinitionValidator, PortAbstractionValidator, QualifierValidator};
pub use address_space::AddressSpaceValidator;
pub use bus_definition::BusDefinitionValidator;
pub use choice::ChoiceValidator;
pub use component::ComponentValidator;
pub use kactus::{ApiDefinitionValidator, ApiFunctionValidator, ComDefinitionValidator, ComPropertyValidator};
pub use memory::{FieldValidator, MemoryBlockValidator, MemoryMapValidator, RegisterValidator};
pub use mode::{FieldSliceValidator, ModeConditionParser, ModeValidator, PortSliceValidator};
pub use parameter::ParameterValidator;
pub use port::PortValidator;
pub use power_domain::PowerDomainValidator;
