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

use crate::validators::{
    AbstractionDefinitionValidator, ApiDefinitionValidator, BusDefinitionValidator,
    ComDefinitionValidator, ComponentValidator,
};
use crate::Validator;
use ipxact_core::{Document, DocumentLibrary, Revision};
use std::borrow::Cow;
use tracing::debug;

/// Maximum number of errors reported for one document.
///
/// A document with thousands of malformed registers yields one message per
/// problem; past this point the rest is noise.
const MAX_ERRORS: usize = 10_000;

/// Configuration for the lint runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    /// Validate as if the document declared this revision.
    pub revision_override: Option<Revision>,
    /// Maximum number of errors to report (default: 10,000)
    ///
    /// When exceeded the list is cut and a final notice says so.
    pub max_errors: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            revision_override: None,
            max_errors: MAX_ERRORS,
        }
    }
}

impl LintConfig {
    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision_override = Some(revision);
        self
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Label used as the context of every top-level error of a document.
pub fn document_context(document: &Document) -> String {
    match document {
        Document::Component(component) => format!("component {}", component.vlnv),
        Document::BusDefinition(bus) => format!("bus definition {}", bus.vlnv),
        Document::AbstractionDefinition(definition) => {
            format!("abstraction definition {}", definition.vlnv)
        }
        Document::ComDefinition(definition) => format!("COM definition {}", definition.vlnv),
        Document::ApiDefinition(definition) => format!("API definition {}", definition.vlnv),
    }
}

/// Lint runner
///
/// Dispatches a document to the validator of its kind. References to other
/// documents (bus types, extended definitions, COM definitions) resolve through
/// the library.
pub struct LintRunner<'a> {
    config: LintConfig,
    library: &'a dyn DocumentLibrary,
}

impl<'a> LintRunner<'a> {
    pub fn new(config: LintConfig, library: &'a dyn DocumentLibrary) -> Self {
        Self { config, library }
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Every problem found in the document, at most `max_errors` of them plus a
    /// trailing notice when the limit was hit.
    pub fn run(&self, document: &Document) -> Vec<String> {
        let document = self.with_revision(document);
        let context = document_context(&document);
        debug!(document = %context, revision = ?document.revision(), "linting document");

        let mut errors = Vec::new();
        match document.as_ref() {
            Document::Component(component) => {
                ComponentValidator::new().find_errors_in(&mut errors, component, &context)
            }
            Document::BusDefinition(bus) => {
                BusDefinitionValidator::new(self.library).find_errors_in(&mut errors, bus, &context)
            }
            Document::AbstractionDefinition(definition) => {
                AbstractionDefinitionValidator::new(self.library).find_errors_in(
                    &mut errors,
                    definition,
                    &context,
                )
            }
            Document::ComDefinition(definition) => {
                ComDefinitionValidator::new().find_errors_in(&mut errors, definition, &context)
            }
            Document::ApiDefinition(definition) => {
                ApiDefinitionValidator::new(self.library).find_errors_in(&mut errors, definition, &context)
            }
        }
        debug!(document = %context, errors = errors.len(), "lint finished");

        if errors.len() > self.config.max_errors {
            errors.truncate(self.config.max_errors);
            errors.push(format!(
                "Error limit of {} exceeded. Further errors have been suppressed.",
                self.config.max_errors
            ));
        }
        errors
    }

    /// Verdict without collecting messages.
    pub fn is_valid(&self, document: &Document) -> bool {
        let document = self.with_revision(document);
        match document.as_ref() {
            Document::Component(component) => ComponentValidator::new().validate(component),
            Document::BusDefinition(bus) => BusDefinitionValidator::new(self.library).validate(bus),
            Document::AbstractionDefinition(definition) => {
                AbstractionDefinitionValidator::new(self.library).validate(definition)
            }
            Document::ComDefinition(definition) => ComDefinitionValidator::new().validate(definition),
            Document::ApiDefinition(definition) => ApiDefinitionValidator::new(self.library).validate(definition),
        }
    }

    fn with_revision<'d>(&self, document: &'d Document) -> Cow<'d, Document> {
        let Some(revision) = self.config.revision_override else {
            return Cow::Borrowed(document);
        };
        if document.revision() == revision {
            return Cow::Borrowed(document);
        }

        let mut document = document.clone();
        match &mut document {
            Document::Component(component) => component.revision = revision,
            Document::BusDefinition(bus) => bus.revision = revision,
            Document::AbstractionDefinition(definition) => definition.revision = revision,
            // Kactus2 documents have no standard revision.
            Document::ComDefinition(_) | Document::ApiDefinition(_) => {}
        }
        Cow::Owned(document)
    }
}
