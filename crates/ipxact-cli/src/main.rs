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

//! IP-XACT Command Line Interface

use clap::Parser;
use ipxact_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// IP-XACT - IEEE 1685 document toolkit
///
/// # Examples
///
/// ```bash
/// # Check a component for errors
/// ipxact validate uart.xml
///
/// # Rewrite a document in canonical form
/// ipxact format uart.xml --output uart.canonical.xml
///
/// # Evaluate a SystemVerilog expression
/// ipxact eval '$clog2(WIDTH)' -D WIDTH=32
/// ```
#[derive(Parser)]
#[command(name = "ipxact")]
#[command(author, version, about = "IP-XACT - IEEE 1685 document toolkit", long_about = None)]
struct Cli {
    /// Log reader and validator activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ipxact=debug" } else { "ipxact=warn" };
    let filter = if verbose {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
