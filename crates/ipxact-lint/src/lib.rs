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

//! IP-XACT Linting
//!
//! Validators for IP-XACT documents. Every validator answers two questions about
//! one kind of entity: whether it is valid, and if not, why. The explanation is a
//! list of human readable messages naming the offending item and the context it
//! was found in.
//!
//! ## Quick Start
//!
//! ```rust
//! use ipxact_core::model::{Component, Parameter};
//! use ipxact_core::{Document, DocumentType, Revision, Vlnv};
//! use ipxact_lint::lint;
//!
//! let vlnv = Vlnv::new(DocumentType::Component, "acme", "ip", "uart", "1.0");
//! let mut component = Component::new(vlnv, Revision::Std14);
//! component.parameters.push(Parameter::new("WIDTH", "8"));
//! component.parameters.push(Parameter::new("WIDTH", "16"));
//!
//! let errors = lint(&Document::Component(component));
//! assert_eq!(
//!     errors,
//!     vec!["Name WIDTH of parameters in component acme:ip:uart:1.0 is not unique."]
//! );
//! ```
//!
//! ## Cross-document references
//!
//! Abstraction definitions name a bus definition, bus definitions may extend one
//! another and API definitions refer to a COM definition. These resolve through a
//! [`DocumentLibrary`]:
//!
//! ```rust
//! use ipxact_core::model::{ApiDefinition, ComDefinition, MemoryLibrary};
//! use ipxact_core::{Document, DocumentType, Vlnv};
//! use ipxact_lint::{lint_document, LintConfig};
//!
//! let com = ComDefinition::new(Vlnv::new(DocumentType::ComDefinition, "acme", "com", "mcapi", "1.0"));
//! let mut api = ApiDefinition::new(Vlnv::new(DocumentType::ApiDefinition, "acme", "api", "mcapi", "1.0"));
//! api.com_definition_ref = Some(com.vlnv.clone());
//!
//! let mut library = MemoryLibrary::new();
//! let document = Document::ApiDefinition(api);
//! assert_eq!(lint_document(&document, &library, &LintConfig::default()).len(), 1);
//!
//! library.insert(Document::ComDefinition(com));
//! assert!(lint_document(&document, &library, &LintConfig::default()).is_empty());
//! ```
//!
//! ## Single entities
//!
//! ```rust
//! use ipxact_core::model::Choice;
//! use ipxact_core::SystemVerilogParser;
//! use ipxact_lint::validators::ChoiceValidator;
//! use ipxact_lint::Validator;
//!
//! let parser = SystemVerilogParser::new();
//! let validator = ChoiceValidator::new(&parser);
//!
//! let mut errors = Vec::new();
//! validator.find_errors_in(&mut errors, &Choice::new("widths"), "component uart");
//! assert_eq!(errors.len(), 1);
//! ```

mod runner;
pub mod validators;

pub use runner::{document_context, LintConfig, LintRunner};

use ipxact_core::model::EmptyLibrary;
use ipxact_core::{Document, DocumentLibrary};

/// Checks one kind of entity.
///
/// `validate` holds exactly when `find_errors_in` appends nothing. Messages are
/// appended in a stable order; the caller owns the list and may collect the
/// findings of several entities in one vector.
pub trait Validator<T: ?Sized> {
    fn validate(&self, item: &T) -> bool {
        let mut errors = Vec::new();
        self.find_errors_in(&mut errors, item, "");
        errors.is_empty()
    }

    fn find_errors_in(&self, errors: &mut Vec<String>, item: &T, context: &str);
}

/// Lint a document that references no other documents.
pub fn lint(document: &Document) -> Vec<String> {
    lint_document(document, &EmptyLibrary, &LintConfig::default())
}

/// Lint a document, resolving references through `library`.
pub fn lint_document(document: &Document, library: &dyn DocumentLibrary, config: &LintConfig) -> Vec<String> {
    LintRunner::new(config.clone(), library).run(document)
}
