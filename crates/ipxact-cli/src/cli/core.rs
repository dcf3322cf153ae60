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

//! Commands operating on one IP-XACT document.

use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use clap::Subcommand;
use ipxact_core::Revision;

#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate an IP-XACT document
    ///
    /// Reads the document and runs every validator on it. Exits with a failure
    /// status when any error is found.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Validate against this standard revision instead of the declared one (2014, 2022)
        #[arg(short, long)]
        revision: Option<Revision>,

        /// Directory of documents used to resolve bus, abstraction and COM references
        #[arg(short, long, value_name = "DIR")]
        library: Option<String>,
    },

    /// Rewrite an IP-XACT document in canonical form
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Check only (exit 1 if not canonical)
        #[arg(short, long)]
        check: bool,
    },

    /// Print a summary tree of an IP-XACT document
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate {
                file,
                format,
                revision,
                library,
            } => commands::validate(&file, format, revision, library.as_deref()),
            CoreCommands::Format { file, output, check } => {
                commands::format(&file, output.as_deref(), check)
            }
            CoreCommands::Inspect { file } => commands::inspect(&file),
        }
    }
}
