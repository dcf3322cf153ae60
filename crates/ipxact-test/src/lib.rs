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

//! Shared test fixtures and utilities for the IP-XACT crates.
//!
//! # Quick Start
//!
//! ```rust
//! use ipxact_test::fixtures;
//!
//! let document = fixtures::wire_abstraction_definition();
//! let document = fixtures::memory_component();
//!
//! use ipxact_test::fixtures::builders::ComponentBuilder;
//! use ipxact_core::Revision;
//!
//! let component = ComponentBuilder::new("cpu")
//!     .revision(Revision::Std22)
//!     .parameter("WIDTH", "8")
//!     .wire_port("clk", "in")
//!     .build();
//! assert_eq!(component.ports.len(), 1);
//! ```

use ipxact_core::Document;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Document)>;

/// Canonical test documents.
pub mod fixtures;

/// Counting helpers over documents.
pub mod counts;

pub use counts::{count_fields, count_ports, count_registers};
pub use fixtures::*;
