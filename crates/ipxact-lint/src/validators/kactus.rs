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

//! Kactus2 communication and API definitions.

use super::common::{has_duplicates, report_duplicates};
use crate::Validator;
use ipxact_core::model::{ApiDefinition, ApiFunction, ApiFunctionParameter, ComDefinition, ComProperty};
use ipxact_core::{has_valid_name, DocumentLibrary};

/// Property types understood by the Kactus2 property editor.
pub const PROPERTY_TYPES: [&str; 4] = ["boolean", "integer", "real", "string"];

/// Return type of an API function without a value.
pub const VOID_TYPE: &str = "void";

#[derive(Clone, Copy, Default)]
pub struct ComPropertyValidator;

impl ComPropertyValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn has_valid_type(&self, property: &ComProperty) -> bool {
        PROPERTY_TYPES.contains(&property.property_type.as_str())
    }
}

impl Validator<ComProperty> for ComPropertyValidator {
    fn validate(&self, property: &ComProperty) -> bool {
        has_valid_name(&property.name) && self.has_valid_type(property)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, property: &ComProperty, context: &str) {
        if !has_valid_name(&property.name) {
            errors.push(format!("Invalid name '{}' set for property within {}.", property.name, context));
        }
        if !self.has_valid_type(property) {
            errors.push(format!(
                "Invalid type '{}' set for property {} within {}.",
                property.property_type, property.name, context
            ));
        }
    }
}

#[derive(Clone, Copy, Default)]
pub struct ComDefinitionValidator {
    property: ComPropertyValidator,
}

impl ComDefinitionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_valid_transfer_types(&self, definition: &ComDefinition) -> bool {
        definition.transfer_types.iter().all(|t| has_valid_name(t))
            && !has_duplicates(definition.transfer_types.iter().map(String::as_str))
    }
}

impl Validator<ComDefinition> for ComDefinitionValidator {
    fn validate(&self, definition: &ComDefinition) -> bool {
        definition.vlnv.is_valid()
            && self.has_valid_transfer_types(definition)
            && !has_duplicates(definition.properties.iter().map(|p| p.name.as_str()))
            && definition.properties.iter().all(|p| self.property.validate(p))
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, definition: &ComDefinition, context: &str) {
        definition.vlnv.find_errors(errors, context);

        if definition.transfer_types.iter().any(|t| !has_valid_name(t)) {
            errors.push(format!("Empty transfer type set within {}.", context));
        }
        report_duplicates(errors, definition.transfer_types.iter().map(String::as_str), |name| {
            format!("Transfer type {} within {} is not unique.", name, context)
        });

        report_duplicates(errors, definition.properties.iter().map(|p| p.name.as_str()), |name| {
            format!("Property name {} within {} is not unique.", name, context)
        });
        for property in &definition.properties {
            self.property.find_errors_in(errors, property, context);
        }
    }
}

/// Checks functions against the data types of their API definition and,
/// when the referenced communication definition is known, its transfer types.
#[derive(Clone, Copy)]
pub struct ApiFunctionValidator<'a> {
    data_types: &'a [String],
    transfer_types: Option<&'a [String]>,
}

impl<'a> ApiFunctionValidator<'a> {
    pub fn new(data_types: &'a [String], transfer_types: Option<&'a [String]>) -> Self {
        Self {
            data_types,
            transfer_types,
        }
    }

    fn is_data_type(&self, name: &str) -> bool {
        self.data_types.iter().any(|t| t == name)
    }

    pub fn has_valid_return_type(&self, function: &ApiFunction) -> bool {
        function.return_value.as_ref().map_or(true, |value| {
            value.value_type.is_empty() || value.value_type == VOID_TYPE || self.is_data_type(&value.value_type)
        })
    }

    pub fn has_valid_transfer_type(&self, parameter: &ApiFunctionParameter) -> bool {
        parameter.com_transfer_type.is_empty()
            || self
                .transfer_types
                .map_or(true, |types| types.iter().any(|t| *t == parameter.com_transfer_type))
    }

    pub fn is_valid_parameter(&self, parameter: &ApiFunctionParameter) -> bool {
        has_valid_name(&parameter.name)
            && self.is_data_type(&parameter.value_type)
            && self.has_valid_transfer_type(parameter)
    }
}

impl Validator<ApiFunction> for ApiFunctionValidator<'_> {
    fn validate(&self, function: &ApiFunction) -> bool {
        has_valid_name(&function.name)
            && self.has_valid_return_type(function)
            && !has_duplicates(function.parameters.iter().map(|p| p.name.as_str()))
            && function.parameters.iter().all(|p| self.is_valid_parameter(p))
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, function: &ApiFunction, context: &str) {
        if !has_valid_name(&function.name) {
            errors.push(format!("Invalid name '{}' set for function within {}.", function.name, context));
        }
        let item = format!("function {}", function.name);

        if !self.has_valid_return_type(function) {
            if let Some(value) = &function.return_value {
                errors.push(format!(
                    "Return type {} of {} within {} is not a declared data type.",
                    value.value_type, item, context
                ));
            }
        }

        report_duplicates(errors, function.parameters.iter().map(|p| p.name.as_str()), |name| {
            format!("Parameter name {} of {} within {} is not unique.", name, item, context)
        });
        for parameter in &function.parameters {
            if !has_valid_name(&parameter.name) {
                errors.push(format!("Invalid parameter name '{}' set for {} within {}.", parameter.name, item, context));
            }
            if !self.is_data_type(&parameter.value_type) {
                errors.push(format!(
                    "Type {} of parameter {} in {} within {} is not a declared data type.",
                    parameter.value_type, parameter.name, item, context
                ));
            }
            if !self.has_valid_transfer_type(parameter) {
                errors.push(format!(
                    "Transfer type {} of parameter {} in {} within {} is not defined in the COM definition.",
                    parameter.com_transfer_type, parameter.name, item, context
                ));
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct ApiDefinitionValidator<'a> {
    library: &'a dyn DocumentLibrary,
}

impl<'a> ApiDefinitionValidator<'a> {
    pub fn new(library: &'a dyn DocumentLibrary) -> Self {
        Self { library }
    }

    fn com_definition(&self, definition: &ApiDefinition) -> Option<&'a ComDefinition> {
        let reference = definition.com_definition_ref.as_ref()?;
        self.library.resolve(reference)?.as_com_definition()
    }

    pub fn has_valid_com_reference(&self, definition: &ApiDefinition) -> bool {
        definition.com_definition_ref.is_none() || self.com_definition(definition).is_some()
    }

    pub fn has_valid_data_types(&self, definition: &ApiDefinition) -> bool {
        definition.data_types.iter().all(|t| has_valid_name(t))
            && !has_duplicates(definition.data_types.iter().map(String::as_str))
    }

    fn functions<'d>(&self, definition: &'d ApiDefinition) -> ApiFunctionValidator<'d>
    where
        'a: 'd,
    {
        let transfer_types = self
            .com_definition(definition)
            .map(|com| com.transfer_types.as_slice());
        ApiFunctionValidator::new(&definition.data_types, transfer_types)
    }
}

impl Validator<ApiDefinition> for ApiDefinitionValidator<'_> {
    fn validate(&self, definition: &ApiDefinition) -> bool {
        let functions = self.functions(definition);
        definition.vlnv.is_valid()
            && self.has_valid_com_reference(definition)
            && self.has_valid_data_types(definition)
            && !has_duplicates(definition.functions.iter().map(|f| f.name.as_str()))
            && definition.functions.iter().all(|f| functions.validate(f))
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, definition: &ApiDefinition, context: &str) {
        definition.vlnv.find_errors(errors, context);

        if !self.has_valid_com_reference(definition) {
            if let Some(reference) = &definition.com_definition_ref {
                errors.push(format!("The referenced COM definition does not exist: {}", reference));
            }
        }

        if definition.data_types.iter().any(|t| !has_valid_name(t)) {
            errors.push(format!("Empty data type set within {}.", context));
        }
        report_duplicates(errors, definition.data_types.iter().map(String::as_str), |name| {
            format!("Data type {} within {} is not unique.", name, context)
        });

        report_duplicates(errors, definition.functions.iter().map(|f| f.name.as_str()), |name| {
            format!("Function name {} within {} is not unique.", name, context)
        });
        let functions = self.functions(definition);
        for function in &definition.functions {
            functions.find_errors_in(errors, function, context);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_core::model::{ApiReturnValue, EmptyLibrary, MemoryLibrary};
    use ipxact_core::{Document, DocumentType, Vlnv};

    fn com_definition() -> ComDefinition {
        let mut com = ComDefinition::new(Vlnv::new(DocumentType::ComDefinition, "TUT", "com", "mcapi", "1.0"));
        com.transfer_types = vec!["int".to_string(), "char*".to_string()];
        com.properties.push(ComProperty::new("port", "integer"));
        com
    }

    fn api_definition(com: &ComDefinition) -> ApiDefinition {
        let mut api = ApiDefinition::new(Vlnv::new(DocumentType::ApiDefinition, "TUT", "api", "mcapi", "1.0"));
        api.com_definition_ref = Some(com.vlnv.clone());
        api.data_types = vec!["mcapi_status_t".to_string(), "int".to_string()];

        let mut send = ApiFunction::new("mcapi_send");
        send.return_value = Some(ApiReturnValue {
            value_type: "void".to_string(),
            description: String::new(),
        });
        let mut value = ApiFunctionParameter::new("value", "int");
        value.com_transfer_type = "int".to_string();
        send.parameters.push(value);
        send.parameters.push(ApiFunctionParameter::new("status", "mcapi_status_t"));
        api.functions.push(send);
        api
    }

    fn errors_in<T, V: Validator<T>>(validator: &V, item: &T) -> Vec<String> {
        let mut errors = Vec::new();
        validator.find_errors_in(&mut errors, item, "test");
        assert_eq!(validator.validate(item), errors.is_empty(), "{:?}", errors);
        errors
    }

    #[test]
    fn test_com_definition() {
        let validator = ComDefinitionValidator::new();
        let mut com = com_definition();
        assert!(errors_in(&validator, &com).is_empty());

        com.transfer_types.push("int".to_string());
        com.properties.push(ComProperty::new("port", "float"));
        assert_eq!(
            errors_in(&validator, &com),
            vec![
                "Transfer type int within test is not unique.",
                "Property name port within test is not unique.",
                "Invalid type 'float' set for property port within test.",
            ]
        );
    }

    #[test]
    fn test_api_definition_with_com_definition() {
        let com = com_definition();
        let api = api_definition(&com);
        let mut library = MemoryLibrary::new();
        library.insert(Document::ComDefinition(com));

        assert!(errors_in(&ApiDefinitionValidator::new(&library), &api).is_empty());
    }

    #[test]
    fn test_unresolved_com_definition() {
        let com = com_definition();
        let mut api = api_definition(&com);
        api.functions[0].parameters[0].com_transfer_type = "long".to_string();

        assert_eq!(
            errors_in(&ApiDefinitionValidator::new(&EmptyLibrary), &api),
            vec!["The referenced COM definition does not exist: TUT:com:mcapi:1.0"]
        );
    }

    #[test]
    fn test_function_types() {
        let com = com_definition();
        let mut api = api_definition(&com);
        api.functions[0].return_value = Some(ApiReturnValue {
            value_type: "size_t".to_string(),
            description: String::new(),
        });
        api.functions[0].parameters.push(ApiFunctionParameter::new("value", "char"));
        api.functions[0].parameters[0].com_transfer_type = "long".to_string();

        let mut library = MemoryLibrary::new();
        library.insert(Document::ComDefinition(com));
        assert_eq!(
            errors_in(&ApiDefinitionValidator::new(&library), &api),
            vec![
                "Return type size_t of function mcapi_send within test is not a declared data type.",
                "Parameter name value of function mcapi_send within test is not unique.",
                "Transfer type long of parameter value in function mcapi_send within test is not defined in the COM definition.",
                "Type char of parameter value in function mcapi_send within test is not a declared data type.",
            ]
        );
    }
}
