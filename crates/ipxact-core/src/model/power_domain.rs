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

//! Power domains of a 2022 component.

use super::parameter::Parameter;
use crate::extension::VendorExtension;
use crate::name_group::NameGroup;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerDomain {
    pub name_group: NameGroup,
    /// Expression; non-zero when the domain cannot be switched off.
    pub always_on: String,
    /// Name of the enclosing domain. Not resolved at this layer.
    pub sub_domain_of: String,
    pub parameters: Vec<Parameter>,
    pub vendor_extensions: Vec<VendorExtension>,
}

impl PowerDomain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name_group: NameGroup::new(name),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name_group.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_owns_parameters() {
        let mut domain = PowerDomain::new("pd");
        domain.parameters.push(Parameter::new("p", "1"));

        let copy = domain.clone();
        domain.parameters[0].value = "2".to_string();

        assert_eq!(copy.parameters[0].value, "1");
        assert_ne!(copy, domain);
    }
}
