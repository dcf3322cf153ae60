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

//! Parameter validation.
//!
//! A parameter needs a name and a value that fits its declared type, its
//! minimum and maximum, and the choice it references. `user` and `generated`
//! parameters must carry an id so other documents can override them.

use super::common::{bounds, has_duplicates, report_duplicates};
use crate::Validator;
use ipxact_core::model::{find_choice, Choice, Parameter};
use ipxact_core::{has_valid_name, ExpressionParser, Revision};

/// Types a parameter may declare. An empty type accepts any value.
pub const PARAMETER_TYPES: [&str; 8] = [
    "bit",
    "byte",
    "shortint",
    "int",
    "longint",
    "shortreal",
    "real",
    "string",
];

const RESOLVE_VALUES: [&str; 3] = ["immediate", "user", "generated"];

/// Validates parameters against an evaluator and the choices in scope.
#[derive(Clone, Copy)]
pub struct ParameterValidator<'a> {
    parser: &'a dyn ExpressionParser,
    choices: &'a [Choice],
    revision: Revision,
}

impl<'a> ParameterValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, choices: &'a [Choice], revision: Revision) -> Self {
        Self {
            parser,
            choices,
            revision,
        }
    }

    pub fn has_valid_name(&self, parameter: &Parameter) -> bool {
        has_valid_name(parameter.name())
    }

    pub fn has_valid_type(&self, parameter: &Parameter) -> bool {
        let parameter_type = parameter.parameter_type.as_str();
        parameter_type.is_empty() || PARAMETER_TYPES.contains(&parameter_type)
    }

    /// Value is present, fits the type, respects the bounds and the choice.
    pub fn has_valid_value(&self, parameter: &Parameter) -> bool {
        !parameter.value.is_empty()
            && self.has_valid_value_for_type(&parameter.value, &parameter.parameter_type)
            && !self.is_less_than_minimum(parameter)
            && !self.is_greater_than_maximum(parameter)
            && self.has_valid_value_for_choice(parameter)
    }

    /// True when `value` can be held by a parameter of `parameter_type`.
    pub fn has_valid_value_for_type(&self, value: &str, parameter_type: &str) -> bool {
        if parameter_type.is_empty() || parameter_type == "string" {
            return true;
        }

        if value.contains('{') {
            let items = split_array(value);
            return self.array_items_have_same_size(&items, parameter_type)
                && items
                    .iter()
                    .all(|item| self.has_valid_value_for_type(item, parameter_type));
        }

        let evaluation = self.parser.parse_expression(value);
        if !evaluation.valid {
            return false;
        }
        let integer = evaluation.value.parse::<i64>().ok();
        match parameter_type {
            "bit" => integer.is_some_and(|v| v >= 0),
            "byte" => integer.is_some_and(|v| i8::try_from(v).is_ok()),
            "shortint" => integer.is_some_and(|v| i16::try_from(v).is_ok()),
            "int" => integer.is_some_and(|v| i32::try_from(v).is_ok()),
            "longint" => integer.is_some() || evaluation.value.parse::<u64>().is_ok(),
            "shortreal" | "real" => evaluation.as_f64().is_some(),
            _ => false,
        }
    }

    fn array_items_have_same_size(&self, items: &[String], parameter_type: &str) -> bool {
        if parameter_type != "bit" || items.len() < 2 {
            return true;
        }
        let bit_length = |item: &String| {
            self.parser
                .evaluate_u64(item)
                .map(|v| 64 - v.leading_zeros().min(63))
        };
        let first = bit_length(&items[0]);
        items.iter().skip(1).all(|item| bit_length(item) == first)
    }

    /// Bounds are compared only for typed, non-bit, non-string parameters.
    fn should_compare_to_boundary(&self, boundary: &str, parameter_type: &str) -> bool {
        !boundary.is_empty()
            && !parameter_type.is_empty()
            && parameter_type != "bit"
            && parameter_type != "string"
            && self.parser.parse_expression(boundary).valid
    }

    pub fn has_valid_minimum(&self, parameter: &Parameter) -> bool {
        !self.should_compare_to_boundary(&parameter.minimum, &parameter.parameter_type)
            || self.has_valid_value_for_type(&parameter.minimum, &parameter.parameter_type)
    }

    pub fn has_valid_maximum(&self, parameter: &Parameter) -> bool {
        !self.should_compare_to_boundary(&parameter.maximum, &parameter.parameter_type)
            || self.has_valid_value_for_type(&parameter.maximum, &parameter.parameter_type)
    }

    pub fn is_less_than_minimum(&self, parameter: &Parameter) -> bool {
        self.violates_boundary(parameter, &parameter.minimum, |value, limit| value < limit)
    }

    pub fn is_greater_than_maximum(&self, parameter: &Parameter) -> bool {
        self.violates_boundary(parameter, &parameter.maximum, |value, limit| value > limit)
    }

    fn violates_boundary(
        &self,
        parameter: &Parameter,
        boundary: &str,
        outside: impl Fn(f64, f64) -> bool,
    ) -> bool {
        if !self.should_compare_to_boundary(boundary, &parameter.parameter_type) {
            return false;
        }
        let Some(limit) = self.parser.parse_expression(boundary).as_f64() else {
            return false;
        };
        split_array(&parameter.value).iter().any(|item| {
            self.parser
                .parse_expression(item)
                .as_f64()
                .is_some_and(|value| outside(value, limit))
        })
    }

    pub fn has_valid_choice(&self, parameter: &Parameter) -> bool {
        parameter.choice_ref.is_empty() || find_choice(self.choices, &parameter.choice_ref).is_some()
    }

    /// Every value of the parameter must be an enumeration of its choice.
    pub fn has_valid_value_for_choice(&self, parameter: &Parameter) -> bool {
        if parameter.choice_ref.is_empty() {
            return true;
        }
        let Some(choice) = find_choice(self.choices, &parameter.choice_ref) else {
            return false;
        };

        if parameter.value.contains('{') && parameter.value.contains('}') {
            return split_array(&parameter.value)
                .iter()
                .all(|item| choice.has_enumeration(item));
        }
        choice.has_enumeration(&self.parser.parse_expression(&parameter.value).value)
    }

    pub fn has_valid_resolve(&self, parameter: &Parameter) -> bool {
        parameter.resolve.is_empty() || RESOLVE_VALUES.contains(&parameter.resolve.as_str())
    }

    pub fn has_valid_value_id(&self, parameter: &Parameter) -> bool {
        !matches!(parameter.resolve.as_str(), "user" | "generated") || !parameter.value_id.is_empty()
    }

    pub fn has_valid_vector(&self, parameter: &Parameter) -> bool {
        let bit_vector = parameter.vectors.is_empty() || parameter.parameter_type == "bit";
        let left = parameter.vector_left();
        let right = parameter.vector_right();
        let valid_bounds = (left.is_empty() && right.is_empty()) || bounds(self.parser, left, right).is_some();
        bit_vector && valid_bounds
    }

    /// Vector ids exist only in 2022.
    pub fn has_valid_vector_ids(&self, parameter: &Parameter) -> bool {
        self.revision.is_std22() || parameter.vectors.iter().all(|v| v.id.is_empty())
    }

    pub fn validate_list(&self, parameters: &[Parameter]) -> bool {
        !has_duplicates(parameters.iter().map(Parameter::name))
            && !has_duplicates(ids(parameters))
            && parameters.iter().all(|p| self.validate(p))
    }

    /// Reports duplicate names and ids, then every parameter.
    pub fn find_errors_in_list(&self, errors: &mut Vec<String>, parameters: &[Parameter], context: &str) {
        report_duplicates(errors, parameters.iter().map(Parameter::name), |name| {
            format!("Name {} of parameters in {} is not unique.", name, context)
        });
        report_duplicates(errors, ids(parameters), |id| {
            format!("Parameter id {} in {} is not unique.", id, context)
        });
        for parameter in parameters {
            self.find_errors_in(errors, parameter, context);
        }
    }
}

impl Validator<Parameter> for ParameterValidator<'_> {
    fn validate(&self, parameter: &Parameter) -> bool {
        self.has_valid_name(parameter)
            && self.has_valid_type(parameter)
            && self.has_valid_value(parameter)
            && self.has_valid_minimum(parameter)
            && self.has_valid_maximum(parameter)
            && self.has_valid_choice(parameter)
            && self.has_valid_resolve(parameter)
            && self.has_valid_value_id(parameter)
            && self.has_valid_vector(parameter)
            && self.has_valid_vector_ids(parameter)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, parameter: &Parameter, context: &str) {
        let name = parameter.name();
        let parameter_type = parameter.parameter_type.as_str();

        if !self.has_valid_name(parameter) {
            errors.push(format!("No valid name specified for parameter {} within {}", name, context));
        }
        if !self.has_valid_type(parameter) {
            errors.push(format!(
                "Invalid type {} specified for parameter {} within {}",
                parameter_type, name, context
            ));
        }

        if parameter.value.is_empty() {
            errors.push(format!("No value specified for parameter {} within {}", name, context));
        } else {
            if !self.has_valid_value_for_type(&parameter.value, parameter_type) {
                errors.push(format!(
                    "Value '{}' is not valid for type {} in parameter {} within {}",
                    parameter.value, parameter_type, name, context
                ));
            }
            if self.is_less_than_minimum(parameter) {
                errors.push(format!(
                    "Value '{}' violates minimum value {} in parameter {} within {}",
                    parameter.value, parameter.minimum, name, context
                ));
            }
            if self.is_greater_than_maximum(parameter) {
                errors.push(format!(
                    "Value '{}' violates maximum value {} in parameter {} within {}",
                    parameter.value, parameter.maximum, name, context
                ));
            }
            if !self.has_valid_value_for_choice(parameter) {
                errors.push(format!(
                    "Value '{}' references unknown enumeration for choice {} in parameter {} within {}",
                    parameter.value, parameter.choice_ref, name, context
                ));
            }
        }

        if !self.has_valid_minimum(parameter) {
            errors.push(format!(
                "Minimum value {} is not valid for format {} in parameter {} within {}",
                parameter.minimum, parameter_type, name, context
            ));
        }
        if !self.has_valid_maximum(parameter) {
            errors.push(format!(
                "Maximum value {} is not valid for format {} in parameter {} within {}",
                parameter.maximum, parameter_type, name, context
            ));
        }
        if !self.has_valid_choice(parameter) {
            errors.push(format!(
                "Choice {} referenced in parameter {} is not specified within {}",
                parameter.choice_ref, name, context
            ));
        }
        if !self.has_valid_resolve(parameter) {
            errors.push(format!(
                "Invalid resolve {} specified for parameter {} within {}",
                parameter.resolve, name, context
            ));
        }
        if !self.has_valid_value_id(parameter) {
            errors.push(format!(
                "No identifier specified for parameter {} with resolve {} within {}",
                name, parameter.resolve, context
            ));
        }
        if !self.has_valid_vector(parameter) {
            errors.push(format!(
                "Invalid bit vector values specified for parameter {} within {}",
                name, context
            ));
        }
        if !self.has_valid_vector_ids(parameter) {
            errors.push(format!(
                "Vector ID specified for parameter {} within {} not using IP-XACT standard revision 2022",
                name, context
            ));
        }
    }
}

fn ids(parameters: &[Parameter]) -> impl Iterator<Item = &str> {
    parameters
        .iter()
        .map(|p| p.value_id.as_str())
        .filter(|id| !id.is_empty())
}

/// Items of an array literal such as `{1, 2}` or `'{1, 2}`; other values yield themselves.
fn split_array(value: &str) -> Vec<String> {
    let trimmed = value.trim();
    let inner = trimmed
        .strip_prefix("'{")
        .or_else(|| trimmed.strip_prefix('{'))
        .and_then(|rest| rest.strip_suffix('}'));
    match inner {
        Some(inner) => inner.split(',').map(|item| item.trim().to_string()).collect(),
        None => vec![trimmed.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_core::model::{Enumeration, Vector};
    use ipxact_core::SystemVerilogParser;

    fn errors_for(parameter: &Parameter, choices: &[Choice], revision: Revision) -> Vec<String> {
        let parser = SystemVerilogParser::new();
        let validator = ParameterValidator::new(&parser, choices, revision);
        let mut errors = Vec::new();
        validator.find_errors_in(&mut errors, parameter, "test");
        assert_eq!(validator.validate(parameter), errors.is_empty(), "{:?}", errors);
        errors
    }

    #[test]
    fn test_name_and_value_required() {
        let errors = errors_for(&Parameter::new(" ", ""), &[], Revision::Std14);
        assert_eq!(
            errors,
            vec![
                "No valid name specified for parameter   within test",
                "No value specified for parameter   within test",
            ]
        );
    }

    #[test]
    fn test_value_for_type() {
        let cases = [
            ("int", "8", true),
            ("int", "4000000000", false),
            ("byte", "127", true),
            ("byte", "128", false),
            ("shortint", "-32768", true),
            ("longint", "-9", true),
            ("real", "1.5", true),
            ("bit", "'b101", true),
            ("bit", "{1, 0}", true),
            ("bit", "{1, 'b10}", false),
            ("string", "anything", true),
            ("", "not an expression", true),
            ("int", "text", false),
            ("int", "{1, 2, 3}", true),
        ];
        for (parameter_type, value, valid) in cases {
            let parameter = Parameter::new("P", value).with_type(parameter_type);
            let errors = errors_for(&parameter, &[], Revision::Std14);
            assert_eq!(errors.is_empty(), valid, "{} {}: {:?}", parameter_type, value, errors);
        }
    }

    #[test]
    fn test_unknown_type() {
        let errors = errors_for(&Parameter::new("P", "1").with_type("float"), &[], Revision::Std14);
        assert_eq!(errors, vec!["Invalid type float specified for parameter P within test"]);
    }

    #[test]
    fn test_minimum_and_maximum() {
        let mut parameter = Parameter::new("P", "5").with_type("int");
        parameter.minimum = "1".to_string();
        parameter.maximum = "4".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(errors, vec!["Value '5' violates maximum value 4 in parameter P within test"]);

        parameter.value = "0".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(errors, vec!["Value '0' violates minimum value 1 in parameter P within test"]);

        parameter.value = "{2, 3}".to_string();
        assert!(errors_for(&parameter, &[], Revision::Std14).is_empty());

        parameter.minimum = "1.5".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(errors, vec!["Minimum value 1.5 is not valid for format int in parameter P within test"]);
    }

    #[test]
    fn test_bounds_ignored_for_untyped() {
        let mut parameter = Parameter::new("P", "5");
        parameter.maximum = "4".to_string();
        assert!(errors_for(&parameter, &[], Revision::Std14).is_empty());
    }

    #[test]
    fn test_choice_reference() {
        let choices = vec![Choice::new("sizes")
            .with_enumeration(Enumeration::new("1"))
            .with_enumeration(Enumeration::new("2"))];

        let mut parameter = Parameter::new("P", "1+1");
        parameter.choice_ref = "sizes".to_string();
        assert!(errors_for(&parameter, &choices, Revision::Std14).is_empty());

        parameter.value = "{1, 2}".to_string();
        assert!(errors_for(&parameter, &choices, Revision::Std14).is_empty());

        parameter.value = "3".to_string();
        let errors = errors_for(&parameter, &choices, Revision::Std14);
        assert_eq!(
            errors,
            vec!["Value '3' references unknown enumeration for choice sizes in parameter P within test"]
        );

        parameter.choice_ref = "missing".to_string();
        let errors = errors_for(&parameter, &choices, Revision::Std14);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1], "Choice missing referenced in parameter P is not specified within test");
    }

    #[test]
    fn test_resolve_and_id() {
        let mut parameter = Parameter::new("P", "1");
        parameter.resolve = "user".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(errors, vec!["No identifier specified for parameter P with resolve user within test"]);

        parameter.value_id = "id".to_string();
        assert!(errors_for(&parameter, &[], Revision::Std14).is_empty());

        parameter.resolve = "dependent".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(errors, vec!["Invalid resolve dependent specified for parameter P within test"]);
    }

    #[test]
    fn test_vectors() {
        let mut parameter = Parameter::new("P", "0").with_type("bit");
        parameter.vectors.push(Vector::new("7", "0"));
        assert!(errors_for(&parameter, &[], Revision::Std14).is_empty());

        parameter.parameter_type = "int".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(errors, vec!["Invalid bit vector values specified for parameter P within test"]);

        parameter.parameter_type = "bit".to_string();
        parameter.vectors[0].id = "v".to_string();
        let errors = errors_for(&parameter, &[], Revision::Std14);
        assert_eq!(
            errors,
            vec!["Vector ID specified for parameter P within test not using IP-XACT standard revision 2022"]
        );
        assert!(errors_for(&parameter, &[], Revision::Std22).is_empty());
    }

    #[test]
    fn test_duplicate_width_reported_once() {
        let parser = SystemVerilogParser::new();
        let validator = ParameterValidator::new(&parser, &[], Revision::Std14);
        let parameters = vec![
            Parameter::new("WIDTH", "8"),
            Parameter::new("DEPTH", "2"),
            Parameter::new("WIDTH", "16"),
            Parameter::new("WIDTH", "32"),
        ];

        let mut errors = Vec::new();
        validator.find_errors_in_list(&mut errors, &parameters, "component c");
        assert_eq!(errors, vec!["Name WIDTH of parameters in component c is not unique."]);
        assert!(!validator.validate_list(&parameters));
    }

    #[test]
    fn test_split_array() {
        assert_eq!(split_array("'{1, 2}"), vec!["1", "2"]);
        assert_eq!(split_array(" 4 "), vec!["4"]);
    }
}
