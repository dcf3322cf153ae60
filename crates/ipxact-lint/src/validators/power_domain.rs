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

//! Power domain validation.

use super::common::{has_duplicates, report_duplicates};
use super::parameter::ParameterValidator;
use crate::Validator;
use ipxact_core::model::PowerDomain;
use ipxact_core::{has_valid_name, ExpressionParser};

/// `subDomainOf` is a plain name reference and is not resolved here.
#[derive(Clone, Copy)]
pub struct PowerDomainValidator<'a> {
    parser: &'a dyn ExpressionParser,
    parameters: ParameterValidator<'a>,
}

impl<'a> PowerDomainValidator<'a> {
    pub fn new(parser: &'a dyn ExpressionParser, parameters: ParameterValidator<'a>) -> Self {
        Self { parser, parameters }
    }

    /// alwaysOn is optional; when given it must evaluate to 0 or 1.
    pub fn has_valid_always_on(&self, domain: &PowerDomain) -> bool {
        domain.always_on.is_empty() || self.parser.evaluate_bool_flag(&domain.always_on).is_some()
    }

    pub fn validate_list(&self, domains: &[PowerDomain]) -> bool {
        !has_duplicates(domains.iter().map(PowerDomain::name)) && domains.iter().all(|d| self.validate(d))
    }

    pub fn find_errors_in_list(&self, errors: &mut Vec<String>, domains: &[PowerDomain], context: &str) {
        report_duplicates(errors, domains.iter().map(PowerDomain::name), |name| {
            format!("Power domain name {} within {} is not unique.", name, context)
        });
        for domain in domains {
            self.find_errors_in(errors, domain, context);
        }
    }
}

impl Validator<PowerDomain> for PowerDomainValidator<'_> {
    fn validate(&self, domain: &PowerDomain) -> bool {
        has_valid_name(domain.name())
            && self.has_valid_always_on(domain)
            && self.parameters.validate_list(&domain.parameters)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, domain: &PowerDomain, context: &str) {
        if !has_valid_name(domain.name()) {
            errors.push(format!("Invalid name '{}' set for power domain within {}.", domain.name(), context));
        }
        if !self.has_valid_always_on(domain) {
            errors.push(format!(
                "Invalid always on value '{}' set for power domain {} within {}.",
                domain.always_on,
                domain.name(),
                context
            ));
        }
        let domain_context = format!("power domain {}", domain.name());
        self.parameters
            .find_errors_in_list(errors, &domain.parameters, &domain_context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_core::model::Parameter;
    use ipxact_core::{Revision, SystemVerilogParser};

    #[test]
    fn test_power_domain_rules() {
        let parser = SystemVerilogParser::new();
        let parameters = ParameterValidator::new(&parser, &[], Revision::Std22);
        let validator = PowerDomainValidator::new(&parser, parameters);

        let mut domain = PowerDomain::new("pd");
        domain.always_on = "1".to_string();
        domain.sub_domain_of = "unknown".to_string();
        assert!(validator.validate(&domain));

        domain.always_on = "2".to_string();
        domain.parameters.push(Parameter::new("", "1"));
        let mut errors = Vec::new();
        validator.find_errors_in(&mut errors, &domain, "component c");
        assert_eq!(
            errors,
            vec![
                "Invalid always on value '2' set for power domain pd within component c.",
                "No valid name specified for parameter  within power domain pd",
            ]
        );
        assert!(!validator.validate(&domain));
    }

    #[test]
    fn test_duplicate_domains() {
        let parser = SystemVerilogParser::new();
        let parameters = ParameterValidator::new(&parser, &[], Revision::Std22);
        let validator = PowerDomainValidator::new(&parser, parameters);
        let domains = vec![PowerDomain::new("pd"), PowerDomain::new("pd")];

        let mut errors = Vec::new();
        validator.find_errors_in_list(&mut errors, &domains, "component c");
        assert_eq!(errors, vec!["Power domain name pd within component c is not unique."]);
    }
}
