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

//! One complete document per kind and revision.

use ipxact_core::model::{
    AbstractionDefinition, AccessPolicy, AddressSpace, ApiDefinition, ApiFunction,
    ApiFunctionParameter, ApiReturnValue, Assertion, BusDefinition, Choice, ComDefinition,
    ComProperty, Component, Enumeration, EnumeratedValue, Field, FieldReset, FieldSlice,
    MemoryBlock, MemoryMap, Mode, ModeRef, Parameter, Port, PortAbstraction, PortSlice,
    PowerDomain, Qualifier, QualifierAttribute, QualifierType, Register, TransactionalAbstraction,
    TransactionalPort, Vector, View, Wire, WireAbstraction, WirePort, WireTypeDef,
};
use ipxact_core::{Document, DocumentType, NameGroup, Revision, VendorExtension, Vlnv};

fn vlnv(document_type: DocumentType, library: &str, name: &str, version: &str) -> Vlnv {
    Vlnv::new(document_type, "TUT", library, name, version)
}

fn target_bus() -> Vlnv {
    vlnv(DocumentType::BusDefinition, "TestLibrary", "TargetBusDef", "1.0")
}

/// Smallest valid 2014 bus definition.
pub fn minimal_bus_definition() -> Document {
    let mut bus = BusDefinition::new(
        vlnv(DocumentType::BusDefinition, "TestLibrary", "MinimalBus", "1.0"),
        Revision::Std14,
    );
    bus.direct_connection = "true".to_string();
    bus.is_addressable = "false".to_string();
    bus.name_group.description = "Minimal bus".to_string();
    bus.kactus_version = "3.0.0".to_string();
    Document::BusDefinition(bus)
}

/// 2022 bus definition with limits, choices and parameters.
pub fn std22_bus_definition() -> Document {
    let mut bus = BusDefinition::new(
        vlnv(DocumentType::BusDefinition, "TestLibrary", "AxiBus", "2.0"),
        Revision::Std22,
    );
    bus.name_group.display_name = "AXI bus".to_string();
    bus.name_group.short_description = "axi".to_string();
    bus.name_group.description = "Memory mapped bus".to_string();
    bus.direct_connection = "true".to_string();
    bus.broadcast = "false".to_string();
    bus.is_addressable = "true".to_string();
    bus.max_initiators = "1".to_string();
    bus.max_targets = "4".to_string();
    bus.system_group_names = vec!["system1".to_string(), "system2".to_string()];
    bus.choices.push(
        Choice::new("widths")
            .with_enumeration(Enumeration::new("32").with_text("narrow"))
            .with_enumeration(Enumeration::new("64").with_text("wide")),
    );
    let mut width = Parameter::new("DATA_WIDTH", "32")
        .with_id("uuid_data_width")
        .with_type("int");
    width.choice_ref = "widths".to_string();
    width.resolve = "user".to_string();
    bus.parameters.push(width);
    bus.vendor_extensions
        .push(VendorExtension::new("kactus2:author").with_text("tester"));
    bus.kactus_version = "3.13.0".to_string();
    Document::BusDefinition(bus)
}

/// 2014 abstraction definition with clock, reset and data wires.
pub fn wire_abstraction_definition() -> Document {
    let mut definition = AbstractionDefinition::new(
        vlnv(DocumentType::AbstractionDefinition, "TestLibrary", "TestAbsDef", "1.0"),
        Revision::Std14,
    );
    definition.bus_type = target_bus();
    definition.name_group.description = "Wire ports".to_string();

    let mut clk = PortAbstraction::new("clk");
    clk.wire = Some(WireAbstraction {
        qualifier: Qualifier::new().with_type(QualifierType::Clock),
        master_port: Some(WirePort {
            presence: "required".to_string(),
            width: "1".to_string(),
            direction: "out".to_string(),
            ..WirePort::default()
        }),
        slave_port: Some(WirePort {
            presence: "required".to_string(),
            width: "1".to_string(),
            direction: "in".to_string(),
            ..WirePort::default()
        }),
        ..WireAbstraction::default()
    });

    let mut reset_qualifier = Qualifier::new().with_type(QualifierType::Reset);
    reset_qualifier.set_attribute(QualifierAttribute::ResetLevel, "low");
    let mut rst = PortAbstraction::new("rst_n");
    rst.wire = Some(WireAbstraction {
        qualifier: reset_qualifier,
        system_ports: vec![WirePort {
            group: "system1".to_string(),
            presence: "required".to_string(),
            direction: "in".to_string(),
            ..WirePort::default()
        }],
        requires_driver: true,
        driver_type: "singleShot".to_string(),
        ..WireAbstraction::default()
    });

    let mut data = PortAbstraction::new("data");
    data.is_present = "1".to_string();
    data.name_group.display_name = "data bus".to_string();
    data.name_group.description = "Data lines".to_string();
    data.wire = Some(WireAbstraction {
        qualifier: Qualifier::new().with_type(QualifierType::Data),
        master_port: Some(WirePort {
            width: "WIDTH".to_string(),
            direction: "out".to_string(),
            ..WirePort::default()
        }),
        default_value: "0".to_string(),
        ..WireAbstraction::default()
    });
    data.vendor_extensions.push(
        VendorExtension::new("kactus2:testExtension")
            .with_attribute("vendorAttribute", "extension")
            .with_text("testValue"),
    );

    definition.ports = vec![clk, rst, data];
    definition.parameters.push(Parameter::new("WIDTH", "8").with_id("uuid_width"));
    definition.assertions.push(Assertion {
        name_group: NameGroup::new("width_positive").with_display_name("Width check"),
        assert: "WIDTH > 0".to_string(),
    });
    definition.kactus_version = "3.0.0".to_string();
    Document::AbstractionDefinition(definition)
}

/// 2022 abstraction definition with one transactional port.
pub fn transactional_abstraction_definition() -> Document {
    let mut definition = AbstractionDefinition::new(
        vlnv(DocumentType::AbstractionDefinition, "TestLibrary", "TlmAbsDef", "1.0"),
        Revision::Std22,
    );
    definition.bus_type = target_bus();
    definition.name_group.short_description = "tlm".to_string();
    definition.name_group.description = "Transaction level sockets".to_string();

    let mut socket = PortAbstraction::new("socket");
    socket.match_ = true;
    socket.name_group.short_description = "socket".to_string();
    socket.transactional = Some(TransactionalAbstraction {
        qualifier: Qualifier::new().with_type(QualifierType::Request),
        system_ports: vec![TransactionalPort {
            group: "system1".to_string(),
            presence: "optional".to_string(),
            ..TransactionalPort::default()
        }],
        master_port: Some(TransactionalPort {
            presence: "required".to_string(),
            initiative: "requires".to_string(),
            kind: "custom".to_string(),
            custom_kind: "customKind".to_string(),
            bus_width: "32".to_string(),
            ..TransactionalPort::default()
        }),
        slave_port: Some(TransactionalPort {
            initiative: "provides".to_string(),
            kind: "tlm_socket".to_string(),
            ..TransactionalPort::default()
        }),
    });
    definition.ports.push(socket);
    definition
        .choices
        .push(Choice::new("kinds").with_enumeration(Enumeration::new("0").with_text("blocking")));
    Document::AbstractionDefinition(definition)
}

fn field_with_access(name: &str, offset: &str, width: &str, access: &str) -> Field {
    let mut field = Field::new(name, offset, width);
    field.access = access.to_string();
    field
}

/// 2014 component with a memory map, ports, views and Kactus2 properties.
pub fn memory_component() -> Document {
    let mut component = Component::new(
        Vlnv::new(DocumentType::Component, "tuni.fi", "TestLibrary", "TestComponent", "0.11"),
        Revision::Std14,
    );
    component.name_group.description = "Component with registers".to_string();

    let mut enable = field_with_access("enable", "0", "1", "read-write");
    enable.resets.push(FieldReset {
        value: "0".to_string(),
        ..FieldReset::default()
    });
    let mut mode = field_with_access("mode", "1", "2", "read-write");
    mode.enumerated_values.push(EnumeratedValue {
        name_group: NameGroup::new("idle"),
        usage: "read-write".to_string(),
        value: "0".to_string(),
    });
    mode.modified_write_value = "oneToClear".to_string();

    let mut ctrl = Register::new("ctrl", "0", "32");
    ctrl.fields = vec![enable, mode];
    let mut status = Register::new("status", "4", "32");
    status.volatile = "true".to_string();
    status.fields.push(field_with_access("busy", "0", "1", "read-only"));

    let mut block = MemoryBlock::address_block("ctrl_block", "'h0");
    if let Some(data) = block.as_address_block_mut() {
        data.range = "16".to_string();
        data.width = "32".to_string();
        data.usage = "register".to_string();
        data.access = "read-write".to_string();
        data.registers = vec![ctrl, status];
    }
    let mut map = MemoryMap::new("regs");
    map.blocks.push(block);
    map.address_unit_bits = "8".to_string();
    component.memory_maps.push(map);

    let mut space = AddressSpace::new("cpu_space");
    space.range = "4096".to_string();
    space.width = "32".to_string();
    component.address_spaces.push(space);

    let mut rtl = View::new("rtl");
    rtl.env_identifiers.push(":modelsim.mentor.com:".to_string());
    component.views.push(rtl);

    let mut data_wire = Wire::new("out");
    data_wire.vectors.push(Vector::new("WIDTH-1", "0"));
    data_wire
        .type_defs
        .push(WireTypeDef::new("std_logic_vector").with_view("rtl"));
    data_wire.default_value = "0".to_string();
    component.ports.push(Port::wire("clk", Wire::new("in")));
    component.ports.push(Port::wire("data", data_wire));

    component
        .parameters
        .push(Parameter::new("WIDTH", "8").with_id("uuid_width").with_type("int"));
    component.kactus_version = "3.0.0".to_string();
    component.properties.push(ComProperty {
        name: "Priority".to_string(),
        required: true,
        property_type: "integer".to_string(),
        default_value: "1".to_string(),
        description: "scheduling priority".to_string(),
    });
    Document::Component(component)
}

/// 2022 component with power domains, modes and access policies.
pub fn std22_component() -> Document {
    let mut component = Component::new(
        vlnv(DocumentType::Component, "TestLibrary", "LowPower", "1.0"),
        Revision::Std22,
    );
    component.name_group.short_description = "low power core".to_string();

    let mut always_on = PowerDomain::new("pd_aon");
    always_on.always_on = "1".to_string();
    let mut core = PowerDomain::new("pd_core");
    core.sub_domain_of = "pd_aon".to_string();
    component.power_domains = vec![always_on, core];

    let mut sleep = Mode::new("sleep");
    sleep.condition = "$ipxact_port_value(sleep_slice) == 1".to_string();
    sleep.port_slices.push(PortSlice {
        name_group: NameGroup::new("sleep_slice"),
        port_ref: "sleep_req".to_string(),
        left: "0".to_string(),
        right: "0".to_string(),
    });
    let mut slice = FieldSlice::new("enable_slice");
    slice.memory_map_ref = "regs".to_string();
    slice.address_block_ref = "block".to_string();
    slice.register_ref = "ctrl".to_string();
    slice.field_ref = "enable".to_string();
    sleep.field_slices.push(slice);
    component.modes.push(sleep);

    let mut enable = Field::new("enable", "0", "1");
    enable.field_id = "enable_id".to_string();
    enable.access_policies.push(AccessPolicy {
        mode_refs: vec![ModeRef {
            reference: "sleep".to_string(),
            priority: "0".to_string(),
        }],
        access: "read-write".to_string(),
    });
    enable.modified_write_value = "oneToSet".to_string();

    let mut ctrl = Register::new("ctrl", "0", "32");
    ctrl.access_policies.push(AccessPolicy {
        mode_refs: Vec::new(),
        access: "read-write".to_string(),
    });
    ctrl.fields.push(enable);

    let mut block = MemoryBlock::address_block("block", "0");
    if let Some(data) = block.as_address_block_mut() {
        data.range = "4".to_string();
        data.width = "32".to_string();
        data.registers.push(ctrl);
    }
    let mut map = MemoryMap::new("regs");
    map.blocks.push(block);
    component.memory_maps.push(map);

    let mut sleep_req = Wire::new("in");
    sleep_req.vectors.push(Vector {
        id: "sleep_vector".to_string(),
        ..Vector::new("0", "0")
    });
    component.ports.push(Port::wire("sleep_req", sleep_req));

    component.parameters.push(Parameter::new("DEPTH", "4").with_id("uuid_depth"));
    component.vendor_extensions.push(
        VendorExtension::new("acme:info")
            .with_attribute("xmlns:acme", "urn:acme")
            .with_child(VendorExtension::new("acme:owner").with_text("lab")),
    );
    Document::Component(component)
}

pub fn com_definition() -> Document {
    let mut definition = ComDefinition::new(vlnv(DocumentType::ComDefinition, "com", "mcapi", "1.0"));
    definition.transfer_types = vec!["int".to_string(), "char*".to_string()];
    definition.properties.push(ComProperty {
        name: "port".to_string(),
        required: true,
        property_type: "integer".to_string(),
        default_value: "0".to_string(),
        description: "endpoint port".to_string(),
    });
    Document::ComDefinition(definition)
}

pub fn api_definition() -> Document {
    let mut definition = ApiDefinition::new(vlnv(DocumentType::ApiDefinition, "api", "mcapi", "1.0"));
    definition.language = "C".to_string();
    definition.com_definition_ref = Some(vlnv(DocumentType::ComDefinition, "com", "mcapi", "1.0"));
    definition.data_types = vec!["mcapi_status_t".to_string(), "int".to_string()];

    let mut send = ApiFunction::new("mcapi_msg_send");
    send.description = "Sends a message".to_string();
    send.return_value = Some(ApiReturnValue {
        value_type: "void".to_string(),
        description: String::new(),
    });
    let mut buffer = ApiFunctionParameter::new("buffer", "int");
    buffer.com_transfer_type = "int".to_string();
    send.parameters.push(buffer);
    send.parameters
        .push(ApiFunctionParameter::new("status", "mcapi_status_t"));
    definition.functions.push(send);
    Document::ApiDefinition(definition)
}
