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

//! Output configuration

/// Configuration for XML output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToXmlConfig {
    /// Pretty-print with one element per line
    pub pretty: bool,
    /// Number of indentation characters per nesting level
    pub indent: usize,
    /// Character used for indentation
    pub indent_char: u8,
    /// Emit the `<?xml version="1.0"?>` declaration
    pub include_declaration: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 1,
            indent_char: b'\t',
            include_declaration: true,
        }
    }
}

impl ToXmlConfig {
    /// Single-line output without indentation.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    /// Pretty output indented with `width` spaces.
    pub fn with_spaces(width: usize) -> Self {
        Self {
            pretty: true,
            indent: width,
            indent_char: b' ',
            include_declaration: true,
        }
    }
}
