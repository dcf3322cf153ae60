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

//! Abstraction definition, logical port and qualifier validation.

use super::choice::ChoiceValidator;
use super::common::{is_empty_or_valid, is_valid_presence, parser_for};
use super::parameter::ParameterValidator;
use crate::Validator;
use ipxact_core::model::{
    AbstractionDefinition, Assertion, PortAbstraction, Qualifier, QualifierAttribute, QualifierType,
    TransactionalPort, WirePort,
};
use ipxact_core::{
    duplicate_names, has_valid_name, Document, DocumentLibrary, ExpressionParser, Revision, Vlnv,
};

pub const PRESENCE_VALUES: [&str; 3] = ["required", "optional", "illegal"];

pub const WIRE_DIRECTIONS: [&str; 3] = ["in", "out", "inout"];

pub const TRANSACTIONAL_INITIATIVES: [&str; 3] = ["requires", "provides", "both"];

pub const TRANSACTIONAL_KINDS: [&str; 4] = ["tlm_port", "tlm_socket", "signal", "custom"];

pub const DRIVER_TYPES: [&str; 3] = ["any", "clock", "singleShot"];

pub const FLOW_TYPES: [&str; 4] = ["creditReturn", "ready", "busy", "user"];

const LEVELS: [&str; 2] = ["high", "low"];

/// Qualifier types defined by the 2014 schema.
const STD14_TYPES: [QualifierType; 4] = [
    QualifierType::Address,
    QualifierType::Data,
    QualifierType::Clock,
    QualifierType::Reset,
];

/// Bus definition extension chains longer than this are treated as cyclic.
const MAX_EXTENDS_DEPTH: usize = 32;

/// Resolves `vlnv` to a bus definition document.
fn resolve_bus<'l>(library: &'l dyn DocumentLibrary, vlnv: &Vlnv) -> Option<&'l Document> {
    library
        .resolve(vlnv)
        .filter(|document| document.as_bus_definition().is_some())
}

/// System group names of a bus definition and every bus definition it extends.
pub fn system_groups(library: &dyn DocumentLibrary, bus: &Vlnv) -> Option<Vec<String>> {
    let mut current = resolve_bus(library, bus)?.as_bus_definition()?;
    let mut groups = current.system_group_names.clone();
    for _ in 0..MAX_EXTENDS_DEPTH {
        let Some(parent) = current
            .extends
            .as_ref()
            .and_then(|vlnv| resolve_bus(library, vlnv))
            .and_then(Document::as_bus_definition)
        else {
            break;
        };
        groups.extend(parent.system_group_names.iter().cloned());
        current = parent;
    }
    Some(groups)
}

/// Validates qualifiers against the types and attribute values of a revision.
#[derive(Clone, Copy)]
pub struct QualifierValidator {
    revision: Revision,
}

impl QualifierValidator {
    pub fn new(revision: Revision) -> Self {
        Self { revision }
    }

    pub fn is_type_allowed(&self, qualifier_type: QualifierType) -> bool {
        self.revision.is_std22() || STD14_TYPES.contains(&qualifier_type)
    }

    fn level_attributes() -> [(QualifierAttribute, &'static str); 3] {
        [
            (QualifierAttribute::ResetLevel, "reset"),
            (QualifierAttribute::ClockEnableLevel, "clock enable"),
            (QualifierAttribute::PowerEnableLevel, "power enable"),
        ]
    }

    fn has_valid_levels(qualifier: &Qualifier) -> bool {
        Self::level_attributes().iter().all(|(attribute, _)| {
            let level = qualifier.attribute(*attribute);
            level.is_empty() || LEVELS.contains(&level)
        })
    }

    fn has_valid_flow_type(qualifier: &Qualifier) -> bool {
        let flow_type = qualifier.attribute(QualifierAttribute::FlowType);
        (flow_type.is_empty() || FLOW_TYPES.contains(&flow_type))
            && (flow_type != "user" || !qualifier.attribute(QualifierAttribute::UserFlowType).is_empty())
    }
}

impl Validator<Qualifier> for QualifierValidator {
    fn validate(&self, qualifier: &Qualifier) -> bool {
        qualifier.types().all(|t| self.is_type_allowed(t))
            && Self::has_valid_levels(qualifier)
            && Self::has_valid_flow_type(qualifier)
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, qualifier: &Qualifier, context: &str) {
        for qualifier_type in qualifier.types().filter(|t| !self.is_type_allowed(*t)) {
            errors.push(format!(
                "Qualifier {} in {} requires IP-XACT standard revision 2022.",
                qualifier_type, context
            ));
        }
        for (attribute, label) in Self::level_attributes() {
            let level = qualifier.attribute(attribute);
            if !level.is_empty() && !LEVELS.contains(&level) {
                errors.push(format!("Invalid {} level '{}' set in {}.", label, level, context));
            }
        }
        if !Self::has_valid_flow_type(qualifier) {
            errors.push(format!(
                "Invalid flow type '{}' set in {}. User flow type requires a user value.",
                qualifier.attribute(QualifierAttribute::FlowType),
                context
            ));
        }
    }
}

/// Bus definition a logical port's system groups are checked against.
#[derive(Clone, Copy)]
pub struct SystemGroups<'a> {
    pub bus: &'a Vlnv,
    pub names: &'a [String],
}

/// Validates the logical ports of one abstraction definition.
#[derive(Clone, Copy)]
pub struct PortAbstractionValidator<'a> {
    parser: &'a dyn ExpressionParser,
    definition: &'a Vlnv,
    revision: Revision,
    system_groups: Option<SystemGroups<'a>>,
}

impl<'a> PortAbstractionValidator<'a> {
    pub fn new(
        parser: &'a dyn ExpressionParser,
        definition: &'a Vlnv,
        revision: Revision,
        system_groups: Option<SystemGroups<'a>>,
    ) -> Self {
        Self {
            parser,
            definition,
            revision,
            system_groups,
        }
    }

    fn has_valid_presence(presence: &str) -> bool {
        presence.is_empty() || PRESENCE_VALUES.contains(&presence)
    }

    pub fn is_valid_wire_port(&self, port: &WirePort) -> bool {
        Self::has_valid_presence(&port.presence)
            && is_empty_or_valid(self.parser, &port.width)
            && (port.direction.is_empty() || WIRE_DIRECTIONS.contains(&port.direction.as_str()))
    }

    pub fn is_valid_transactional_port(&self, port: &TransactionalPort) -> bool {
        Self::has_valid_presence(&port.presence)
            && (port.initiative.is_empty() || TRANSACTIONAL_INITIATIVES.contains(&port.initiative.as_str()))
            && (port.kind.is_empty() || TRANSACTIONAL_KINDS.contains(&port.kind.as_str()))
            && (port.kind != "custom" || !port.custom_kind.is_empty())
            && is_empty_or_valid(self.parser, &port.bus_width)
    }

    /// Group is set and, when the bus definition is known, declared there.
    pub fn has_valid_system_group(&self, group: &str) -> bool {
        !group.is_empty()
            && self
                .system_groups
                .map_or(true, |groups| groups.names.iter().any(|name| name == group))
    }

    fn qualifier_is_valid(&self, qualifier: &Qualifier) -> bool {
        QualifierValidator::new(self.revision).validate(qualifier)
            && !has_power_domain_reference(qualifier)
    }

    fn find_errors_in_qualifier(&self, errors: &mut Vec<String>, qualifier: &Qualifier, item: &str) {
        QualifierValidator::new(self.revision).find_errors_in(errors, qualifier, item);
        if has_power_domain_reference(qualifier) {
            errors.push(format!(
                "Illegal attribute powerDomainRef set for power enable qualifier of {} within abstraction definition {}.",
                item, self.definition
            ));
        }
    }

    fn find_errors_in_wire_port(&self, errors: &mut Vec<String>, port: &WirePort, item: &str) {
        if !Self::has_valid_presence(&port.presence) {
            errors.push(format!("Presence '{}' of wire port is invalid in {}.", port.presence, item));
        }
        if !is_empty_or_valid(self.parser, &port.width) {
            errors.push(format!("Wire port width is invalid in {}.", item));
        }
        if !port.direction.is_empty() && !WIRE_DIRECTIONS.contains(&port.direction.as_str()) {
            errors.push(format!("Direction '{}' of wire port is invalid in {}.", port.direction, item));
        }
    }

    fn find_errors_in_transactional_port(&self, errors: &mut Vec<String>, port: &TransactionalPort, item: &str) {
        if !Self::has_valid_presence(&port.presence) {
            errors.push(format!(
                "Presence '{}' of transactional port is invalid in {}.",
                port.presence, item
            ));
        }
        if !port.initiative.is_empty() && !TRANSACTIONAL_INITIATIVES.contains(&port.initiative.as_str()) {
            errors.push(format!(
                "The transactional port initiative {} is invalid in {}.",
                port.initiative, item
            ));
        }
        if !port.kind.is_empty() && !TRANSACTIONAL_KINDS.contains(&port.kind.as_str()) {
            errors.push(format!("The transactional port kind {} is invalid in {}.", port.kind, item));
        }
        if port.kind == "custom" && port.custom_kind.is_empty() {
            errors.push(format!("No custom kind set for transactional port in {}.", item));
        }
        if !is_empty_or_valid(self.parser, &port.bus_width) {
            errors.push(format!("The transactional port bus width is invalid in {}.", item));
        }
    }

    fn find_errors_in_system_group(&self, errors: &mut Vec<String>, group: &str, item: &str) {
        if group.is_empty() {
            errors.push(format!("System group must be assigned for {}.", item));
        } else if let Some(groups) = self.system_groups {
            if !groups.names.iter().any(|name| name == group) {
                errors.push(format!(
                    "The system group {} in {} is not defined in system groups of bus definition {}.",
                    group, item, groups.bus
                ));
            }
        }
    }
}

fn has_power_domain_reference(qualifier: &Qualifier) -> bool {
    qualifier.has_type(QualifierType::PowerEnable)
        && !qualifier
            .attribute(QualifierAttribute::PowerDomainReference)
            .is_empty()
}

impl Validator<PortAbstraction> for PortAbstractionValidator<'_> {
    fn validate(&self, port: &PortAbstraction) -> bool {
        if !has_valid_name(port.logical_name())
            || !is_valid_presence(self.parser, &port.is_present, self.revision)
            || (port.match_ && !self.revision.is_std22())
            || port.wire.is_some() == port.transactional.is_some()
        {
            return false;
        }

        if let Some(wire) = &port.wire {
            let ports_valid = wire
                .master_port
                .iter()
                .chain(wire.slave_port.iter())
                .chain(wire.system_ports.iter())
                .all(|p| self.is_valid_wire_port(p));
            return self.qualifier_is_valid(&wire.qualifier)
                && is_empty_or_valid(self.parser, &wire.default_value)
                && (!wire.requires_driver
                    || wire.driver_type.is_empty()
                    || DRIVER_TYPES.contains(&wire.driver_type.as_str()))
                && ports_valid
                && wire.system_ports.iter().all(|p| self.has_valid_system_group(&p.group));
        }

        if let Some(transactional) = &port.transactional {
            let ports_valid = transactional
                .master_port
                .iter()
                .chain(transactional.slave_port.iter())
                .chain(transactional.system_ports.iter())
                .all(|p| self.is_valid_transactional_port(p));
            return self.qualifier_is_valid(&transactional.qualifier)
                && ports_valid
                && transactional
                    .system_ports
                    .iter()
                    .all(|p| self.has_valid_system_group(&p.group));
        }

        true
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, port: &PortAbstraction, _context: &str) {
        let name = port.logical_name();
        if !has_valid_name(name) {
            errors.push(format!("Port name {} is invalid.", name));
        }
        if !is_valid_presence(self.parser, &port.is_present, self.revision) {
            errors.push(format!("The presence '{}' of port {} is invalid.", port.is_present, name));
        }
        if port.match_ && !self.revision.is_std22() {
            errors.push(format!(
                "Port match is set for port {} in abstraction definition not using IP-XACT standard revision 2022.",
                name
            ));
        }
        if port.wire.is_none() && port.transactional.is_none() {
            errors.push(format!("Port {} has neither wire nor transactional defined.", name));
        }
        if port.wire.is_some() && port.transactional.is_some() {
            errors.push(format!("Port {} has both wire and transactional.", name));
            return;
        }

        let item = format!("port {}", name);
        if let Some(wire) = &port.wire {
            self.find_errors_in_qualifier(errors, &wire.qualifier, &item);
            if !is_empty_or_valid(self.parser, &wire.default_value) {
                errors.push(format!("Default value for port {} is invalid.", name));
            }
            if wire.requires_driver
                && !wire.driver_type.is_empty()
                && !DRIVER_TYPES.contains(&wire.driver_type.as_str())
            {
                errors.push(format!("Invalid driver type '{}' set for {}.", wire.driver_type, item));
            }
            for wire_port in wire.master_port.iter().chain(wire.slave_port.iter()) {
                self.find_errors_in_wire_port(errors, wire_port, &item);
            }
            for system_port in &wire.system_ports {
                self.find_errors_in_wire_port(errors, system_port, &item);
                self.find_errors_in_system_group(errors, &system_port.group, &item);
            }
        }

        if let Some(transactional) = &port.transactional {
            self.find_errors_in_qualifier(errors, &transactional.qualifier, &item);
            for mode_port in transactional
                .master_port
                .iter()
                .chain(transactional.slave_port.iter())
            {
                self.find_errors_in_transactional_port(errors, mode_port, &item);
            }
            for system_port in &transactional.system_ports {
                self.find_errors_in_transactional_port(errors, system_port, &item);
                self.find_errors_in_system_group(errors, &system_port.group, &item);
            }
        }
    }
}

/// Validates abstraction definitions, resolving referenced documents through a library.
#[derive(Clone, Copy)]
pub struct AbstractionDefinitionValidator<'a> {
    library: &'a dyn DocumentLibrary,
}

impl<'a> AbstractionDefinitionValidator<'a> {
    pub fn new(library: &'a dyn DocumentLibrary) -> Self {
        Self { library }
    }

    pub fn has_valid_bus_type(&self, definition: &AbstractionDefinition) -> bool {
        resolve_bus(self.library, &definition.bus_type).is_some()
    }

    pub fn has_valid_extends(&self, definition: &AbstractionDefinition) -> bool {
        definition.extends.as_ref().map_or(true, |extends| {
            self.library
                .resolve(extends)
                .is_some_and(|document| document.as_abstraction_definition().is_some())
        })
    }

    fn has_valid_assertions(&self, parser: &dyn ExpressionParser, assertions: &[Assertion]) -> bool {
        duplicate_names(assertions.iter().map(|a| a.name_group.name.as_str())).is_empty()
            && assertions
                .iter()
                .all(|a| has_valid_name(&a.name_group.name) && parser.parse_expression(&a.assert).valid)
    }

    fn find_errors_in_assertions(
        &self,
        errors: &mut Vec<String>,
        parser: &dyn ExpressionParser,
        assertions: &[Assertion],
        context: &str,
    ) {
        for duplicate in duplicate_names(assertions.iter().map(|a| a.name_group.name.as_str())) {
            errors.push(format!("Assertion name {} within {} is not unique.", duplicate, context));
        }
        for assertion in assertions {
            let name = assertion.name_group.name.as_str();
            if !has_valid_name(name) {
                errors.push(format!("Invalid name '{}' set for assertion within {}.", name, context));
            }
            if !parser.parse_expression(&assertion.assert).valid {
                errors.push(format!(
                    "Invalid assert expression '{}' set for assertion {} within {}.",
                    assertion.assert, name, context
                ));
            }
        }
    }

    fn with_ports<R>(
        &self,
        definition: &AbstractionDefinition,
        check: impl FnOnce(&dyn ExpressionParser, PortAbstractionValidator<'_>) -> R,
    ) -> R {
        let parser = parser_for(&definition.parameters);
        let groups = system_groups(self.library, &definition.bus_type);
        let system_groups = groups.as_deref().map(|names| SystemGroups {
            bus: &definition.bus_type,
            names,
        });
        let ports = PortAbstractionValidator::new(&parser, &definition.vlnv, definition.revision, system_groups);
        check(&parser, ports)
    }
}

impl Validator<AbstractionDefinition> for AbstractionDefinitionValidator<'_> {
    fn validate(&self, definition: &AbstractionDefinition) -> bool {
        self.with_ports(definition, |parser, ports| {
            let parameters = ParameterValidator::new(parser, &definition.choices, definition.revision);
            definition.vlnv.is_valid()
                && self.has_valid_bus_type(definition)
                && self.has_valid_extends(definition)
                && parameters.validate_list(&definition.parameters)
                && ChoiceValidator::new(parser).validate_list(&definition.choices)
                && !definition.ports.is_empty()
                && duplicate_names(definition.ports.iter().map(PortAbstraction::logical_name)).is_empty()
                && definition.ports.iter().all(|p| ports.validate(p))
                && self.has_valid_assertions(parser, &definition.assertions)
        })
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, definition: &AbstractionDefinition, context: &str) {
        definition.vlnv.find_errors(errors, context);
        if !self.has_valid_bus_type(definition) {
            errors.push(format!(
                "The referenced bus definition does not exist: {}",
                definition.bus_type
            ));
        }
        if !self.has_valid_extends(definition) {
            if let Some(extends) = &definition.extends {
                errors.push(format!("The defined extension does not exist: {}", extends));
            }
        }

        self.with_ports(definition, |parser, ports| {
            ParameterValidator::new(parser, &definition.choices, definition.revision).find_errors_in_list(
                errors,
                &definition.parameters,
                context,
            );
            ChoiceValidator::new(parser).find_errors_in_list(errors, &definition.choices, context);

            if definition.ports.is_empty() {
                errors.push(format!("Must have at least one port in {}.", context));
            }
            for duplicate in duplicate_names(definition.ports.iter().map(PortAbstraction::logical_name)) {
                errors.push(format!(
                    "A port name occurs more than once within the definition: {}",
                    duplicate
                ));
            }
            for port in &definition.ports {
                ports.find_errors_in(errors, port, context);
            }

            self.find_errors_in_assertions(errors, parser, &definition.assertions, context);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipxact_core::model::{
        BusDefinition, EmptyLibrary, MemoryLibrary, TransactionalAbstraction, WireAbstraction,
    };
    use ipxact_core::DocumentType;

    fn bus_vlnv() -> Vlnv {
        Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "TargetBusDef", "1.0")
    }

    fn library() -> MemoryLibrary {
        let mut bus = BusDefinition::new(bus_vlnv(), Revision::Std14);
        bus.system_group_names = vec!["system1".to_string()];
        let mut library = MemoryLibrary::new();
        library.insert(Document::BusDefinition(bus));
        library
    }

    fn definition(revision: Revision) -> AbstractionDefinition {
        let mut definition = AbstractionDefinition::new(
            Vlnv::new(DocumentType::AbstractionDefinition, "TUT", "TestLibrary", "TestAbsDef", "1.0"),
            revision,
        );
        definition.bus_type = bus_vlnv();
        definition
    }

    fn wire_port(name: &str, wire: WireAbstraction) -> PortAbstraction {
        PortAbstraction {
            wire: Some(wire),
            ..PortAbstraction::new(name)
        }
    }

    fn errors_in(library: &dyn DocumentLibrary, definition: &AbstractionDefinition) -> Vec<String> {
        let validator = AbstractionDefinitionValidator::new(library);
        let mut errors = Vec::new();
        validator.find_errors_in(&mut errors, definition, "test");
        assert_eq!(validator.validate(definition), errors.is_empty(), "{:?}", errors);
        errors
    }

    #[test]
    fn test_valid_definition() {
        let mut definition = definition(Revision::Std14);
        definition.ports.push(wire_port(
            "clk",
            WireAbstraction {
                qualifier: Qualifier::new().with_type(QualifierType::Clock),
                system_ports: vec![WirePort {
                    group: "system1".to_string(),
                    direction: "in".to_string(),
                    ..WirePort::default()
                }],
                ..WireAbstraction::default()
            },
        ));
        assert!(errors_in(&library(), &definition).is_empty());
    }

    #[test]
    fn test_unresolved_references() {
        let mut definition = definition(Revision::Std14);
        definition.extends = Some(Vlnv::new(
            DocumentType::AbstractionDefinition,
            "TUT",
            "TestLibrary",
            "Base",
            "1.0",
        ));

        let errors = errors_in(&EmptyLibrary, &definition);
        assert_eq!(
            errors,
            vec![
                "The referenced bus definition does not exist: TUT:TestLibrary:TargetBusDef:1.0",
                "The defined extension does not exist: TUT:TestLibrary:Base:1.0",
                "Must have at least one port in test.",
            ]
        );
    }

    #[test]
    fn test_port_rules() {
        let mut definition = definition(Revision::Std14);
        let mut both = wire_port("both", WireAbstraction::default());
        both.transactional = Some(TransactionalAbstraction::default());
        let mut matched = wire_port("data", WireAbstraction::default());
        matched.match_ = true;
        definition.ports = vec![both, matched, PortAbstraction::new("data")];

        let errors = errors_in(&library(), &definition);
        assert_eq!(
            errors,
            vec![
                "A port name occurs more than once within the definition: data",
                "Port both has both wire and transactional.",
                "Port match is set for port data in abstraction definition not using IP-XACT standard revision 2022.",
                "Port data has neither wire nor transactional defined.",
            ]
        );
    }

    #[test]
    fn test_wire_rules() {
        let mut definition = definition(Revision::Std14);
        definition.ports.push(wire_port(
            "irq",
            WireAbstraction {
                qualifier: Qualifier::new().with_type(QualifierType::Interrupt),
                master_port: Some(WirePort {
                    presence: "sometimes".to_string(),
                    width: "1 +".to_string(),
                    direction: "up".to_string(),
                    ..WirePort::default()
                }),
                system_ports: vec![
                    WirePort::default(),
                    WirePort {
                        group: "system9".to_string(),
                        ..WirePort::default()
                    },
                ],
                slave_port: None,
                default_value: "x +".to_string(),
                requires_driver: true,
                driver_type: "sometimes".to_string(),
            },
        ));

        let errors = errors_in(&library(), &definition);
        assert_eq!(
            errors,
            vec![
                "Qualifier isInterrupt in port irq requires IP-XACT standard revision 2022.",
                "Default value for port irq is invalid.",
                "Invalid driver type 'sometimes' set for port irq.",
                "Presence 'sometimes' of wire port is invalid in port irq.",
                "Wire port width is invalid in port irq.",
                "Direction 'up' of wire port is invalid in port irq.",
                "System group must be assigned for port irq.",
                "The system group system9 in port irq is not defined in system groups of bus definition TUT:TestLibrary:TargetBusDef:1.0.",
            ]
        );
    }

    #[test]
    fn test_transactional_rules() {
        let mut definition = definition(Revision::Std22);
        let mut qualifier = Qualifier::new().with_type(QualifierType::PowerEnable);
        qualifier.set_attribute(QualifierAttribute::PowerDomainReference, "pd");
        qualifier.set_attribute(QualifierAttribute::PowerEnableLevel, "medium");
        definition.ports.push(PortAbstraction {
            transactional: Some(TransactionalAbstraction {
                qualifier,
                master_port: Some(TransactionalPort {
                    initiative: "demands".to_string(),
                    kind: "custom".to_string(),
                    bus_width: "?".to_string(),
                    ..TransactionalPort::default()
                }),
                ..TransactionalAbstraction::default()
            }),
            ..PortAbstraction::new("socket")
        });

        let errors = errors_in(&library(), &definition);
        assert_eq!(
            errors,
            vec![
                "Invalid power enable level 'medium' set in port socket.",
                "Illegal attribute powerDomainRef set for power enable qualifier of port socket within abstraction definition TUT:TestLibrary:TestAbsDef:1.0.",
                "The transactional port initiative demands is invalid in port socket.",
                "No custom kind set for transactional port in port socket.",
                "The transactional port bus width is invalid in port socket.",
            ]
        );
    }

    #[test]
    fn test_system_groups_follow_extends() {
        let base_vlnv = Vlnv::new(DocumentType::BusDefinition, "TUT", "TestLibrary", "Base", "1.0");
        let mut base = BusDefinition::new(base_vlnv.clone(), Revision::Std14);
        base.system_group_names = vec!["base_group".to_string()];
        let mut bus = BusDefinition::new(bus_vlnv(), Revision::Std14);
        bus.system_group_names = vec!["system1".to_string()];
        bus.extends = Some(base_vlnv);

        let mut library = MemoryLibrary::new();
        library.insert(Document::BusDefinition(base));
        library.insert(Document::BusDefinition(bus));

        assert_eq!(
            system_groups(&library, &bus_vlnv()),
            Some(vec!["system1".to_string(), "base_group".to_string()])
        );
        assert_eq!(system_groups(&EmptyLibrary, &bus_vlnv()), None);
    }

    #[test]
    fn test_qualifier_revisions() {
        let qualifier = Qualifier::new().with_type(QualifierType::Valid);
        assert!(!QualifierValidator::new(Revision::Std14).validate(&qualifier));
        assert!(QualifierValidator::new(Revision::Std22).validate(&qualifier));

        let mut flow = Qualifier::new().with_type(QualifierType::FlowControl);
        flow.set_attribute(QualifierAttribute::FlowType, "user");
        assert!(!QualifierValidator::new(Revision::Std22).validate(&flow));
        flow.set_attribute(QualifierAttribute::UserFlowType, "custom");
        assert!(QualifierValidator::new(Revision::Std22).validate(&flow));
    }
}
