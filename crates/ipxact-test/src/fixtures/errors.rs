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

//! Error test fixtures.
//!
//! Invalid inputs for the XML reader and the expression evaluator, plus
//! documents that carry known validation findings.

use super::builders::ComponentBuilder;
use ipxact_core::model::{FieldSlice, Mode};
use ipxact_core::{Document, Revision};

/// Inputs `read_document` must reject, as (name, xml) pairs.
pub fn invalid_xml_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("not_xml", "component"),
        ("unclosed_root", "<ipxact:component xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2014\">"),
        ("unbound_prefix", "<ipxact:component/>"),
        ("no_namespace", "<component/>"),
        (
            "old_spirit_namespace",
            "<spirit:component xmlns:spirit=\"http://www.spiritconsortium.org/XMLSchema/SPIRIT/1.5\"/>",
        ),
        (
            "unsupported_root",
            "<ipxact:design xmlns:ipxact=\"http://www.accellera.org/XMLSchema/IPXACT/1685-2022\"/>",
        ),
    ]
}

/// Expressions the evaluator marks invalid, as (description, expression).
pub fn invalid_expression_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("empty_parentheses", "()"),
        ("unclosed_parenthesis", "(1+2"),
        ("dangling_operator", "1+"),
        ("unknown_function", "$undefined(3)"),
        ("unknown_symbol", "no_such_parameter"),
        ("unterminated_string", "\"open"),
        ("division_by_zero", "1/0"),
    ]
}

/// Component declaring `WIDTH` twice.
pub fn duplicate_parameter_component() -> Document {
    ComponentBuilder::new("duplicates")
        .parameter("WIDTH", "8")
        .parameter("WIDTH", "16")
        .build_document()
}

/// Component whose parameter value is outside its choice.
pub fn bad_choice_component() -> Document {
    ComponentBuilder::new("choices")
        .choice("modes", &["1", "2"])
        .choice_parameter("MODE", "3", "modes")
        .build_document()
}

/// 2022 component with a mode whose field slice points at a missing field.
pub fn dangling_field_slice_component() -> Document {
    let mut component = ComponentBuilder::new("slices")
        .revision(Revision::Std22)
        .register("regs", "ctrl", "0", "32")
        .field("enable", "0", "1")
        .build();

    let mut slice = FieldSlice::new("slice");
    slice.memory_map_ref = "regs".to_string();
    slice.address_block_ref = "block".to_string();
    slice.register_ref = "ctrl".to_string();
    slice.field_ref = "missing".to_string();

    let mut mode = Mode::new("low");
    mode.field_slices.push(slice);
    component.modes.push(mode);
    Document::Component(component)
}
