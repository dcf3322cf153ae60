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

//! IP-XACT CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Validation & Inspection
//!
//! - **validate**: Lint a document and report every problem found
//! - **inspect**: Print a summary tree of a document
//!
//! ## Formatting
//!
//! - **format**: Rewrite a document in canonical form
//!
//! ## Utilities
//!
//! - **eval**: Evaluate a SystemVerilog expression
//!
//! # Examples
//!
//! ```no_run
//! use ipxact_cli::commands::{validate, OutputFormat};
//!
//! # fn main() -> Result<(), ipxact_cli::error::CliError> {
//! validate("uart.xml", OutputFormat::Text, None, None)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than `IPXACT_MAX_FILE_SIZE` bytes (default 100 MB) are
//! rejected before they are read.

pub mod cli;
pub mod commands;
pub mod error;
