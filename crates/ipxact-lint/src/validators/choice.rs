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

//! Choice validation.

use super::common::{has_duplicates, report_duplicates};
use crate::Validator;
use ipxact_core::model::Choice;
use ipxact_core::{has_valid_name, ExpressionParser};

/// A choice needs a name and at least one enumeration with a valid value.
#[derive(Clone, Copy)]
pub struct ChoiceValidator<'a> {
    parser: &'a dyn ExpressionParser,
}

impl<'a> ChoiceValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser) -> Self {
        Self { parser }
    }

    pub fn has_valid_name(&self, choice: &Choice) -> bool {
        has_valid_name(&choice.name)
    }

    pub fn has_valid_enumerations(&self, choice: &Choice) -> bool {
        !choice.enumerations.is_empty()
            && choice
                .enumerations
                .iter()
                .all(|e| self.is_valid_enumeration_value(&e.value))
    }

    fn is_valid_enumeration_value(&self, value: &str) -> bool {
        !value.is_empty() && self.parser.parse_expression(value).valid
    }

    pub fn validate_list(&self, choices: &[Choice]) -> bool {
        !has_duplicates(choices.iter().map(|c| c.name.as_str())) && choices.iter().all(|c| self.validate(c))
    }

    pub fn find_errors_in_list(&self, errors: &mut Vec<String>, choices: &[Choice], context: &str) {
        report_duplicates(errors, choices.iter().map(|c| c.name.as_str()), |name| {
            format!("Choice name {} within {} is not unique.", name, context)
        });
        for choice in choices {
            self.find_errors_in(errors, choice, context);
        }
    }
}

impl Validator<Choice> for ChoiceValidator<'_> {
    fn validate(&self, choice: &Choice) -> bool {
        self.has_valid_name(choice) && self.has_valid_enumerations(choice)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, choice: &Choice, context: &str) {
        if !self.has_valid_name(choice) {
            errors.push(format!("Invalid name set for choice {} within {}", choice.name, context));
        }

        if choice.enumerations.is_empty() {
            errors.push(format!("No enumerations found in choice '{}' within {}", choice.name, context));
        }
        for enumeration in &choice.enumerations {
            if !self.is_valid_enumeration_value(&enumeration.value) {
                errors.push(format!(
                    "Invalid value '{}' set for enumeration in choice '{}' within {}",
                    enumeration.value, choice.name, context
                ));
            }
        }
    }
}
