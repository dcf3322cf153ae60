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

//! Document entities.
//!
//! Entities are plain values: cloning deep-copies every owned collection and
//! references between entities are names resolved on demand.

pub mod abstraction;
pub mod address_space;
pub mod api_definition;
pub mod bus_definition;
pub mod choice;
pub mod com_definition;
pub mod component;
pub mod document;
pub mod memory;
pub mod mode;
pub mod parameter;
pub mod port;
pub mod power_domain;
pub mod qualifier;

pub use abstraction::{
    AbstractionDefinition, Assertion, PortAbstraction, TransactionalAbstraction,
    TransactionalPort, WireAbstraction, WirePort,
};
pub use address_space::{AddressSpace, Segment};
pub use api_definition::{ApiDefinition, ApiFunction, ApiFunctionParameter, ApiReturnValue};
pub use bus_definition::BusDefinition;
pub use choice::{find_choice, Choice, Enumeration};
pub use com_definition::{ComDefinition, ComProperty};
pub use component::Component;
pub use document::{Document, DocumentLibrary, EmptyLibrary, MemoryLibrary};
pub use memory::{
    AccessPolicy, AddressBlockData, BlockKind, EnumeratedValue, Field, FieldReset, MemoryBlock,
    MemoryMap, ModeRef, Register, SubspaceMapData,
};
pub use mode::{FieldSlice, Mode, PortSlice};
pub use parameter::{Array, Parameter, Vector};
pub use port::{Port, Transactional, View, Wire, WireTypeDef};
pub use power_domain::PowerDomain;
pub use qualifier::{Qualifier, QualifierAttribute, QualifierType};
