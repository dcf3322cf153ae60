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

//! IP-XACT Document Model
//!
//! Typed entities for IEEE 1685 (IP-XACT) documents in the 2014 and 2022
//! revisions, together with the constant-expression evaluator used to
//! interpret their numeric fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use ipxact_core::model::{Field, Register};
//! use ipxact_core::expr::{ExpressionParser, SystemVerilogParser};
//!
//! let mut register = Register::new("ctrl", "'h0", "32");
//! register.fields.push(Field::new("enable", "0", "1"));
//!
//! let parser = SystemVerilogParser::new();
//! assert_eq!(parser.evaluate_u64(&register.size), Some(32));
//! ```
//!
//! Reading and writing XML lives in `ipxact-xml`, validation in `ipxact-lint`.

pub mod error;
pub mod expr;
pub mod extension;
pub mod model;
pub mod name_group;
pub mod revision;
pub mod vlnv;

pub use error::{ModelError, ModelErrorKind, ModelResult};
pub use expr::{Evaluation, ExpressionError, ExpressionParser, SystemVerilogParser};
pub use extension::{find_extension, VendorExtension};
pub use model::{Document, DocumentLibrary};
pub use name_group::{duplicate_names, has_valid_name, NameGroup};
pub use revision::{Revision, KACTUS2_NAMESPACE, XSI_NAMESPACE};
pub use vlnv::{DocumentType, Vlnv};
