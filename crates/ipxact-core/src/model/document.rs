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

//! Top-level documents and VLNV lookup.

use super::abstraction::AbstractionDefinition;
use super::api_definition::ApiDefinition;
use super::bus_definition::BusDefinition;
use super::com_definition::ComDefinition;
use super::component::Component;
use crate::revision::Revision;
use crate::vlnv::{DocumentType, Vlnv};
use std::collections::HashMap;

/// Any library document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    AbstractionDefinition(AbstractionDefinition),
    BusDefinition(BusDefinition),
    Component(Component),
    ComDefinition(ComDefinition),
    ApiDefinition(ApiDefinition),
}

impl Document {
    pub fn vlnv(&self) -> &Vlnv {
        match self {
            Document::AbstractionDefinition(d) => &d.vlnv,
            Document::BusDefinition(d) => &d.vlnv,
            Document::Component(d) => &d.vlnv,
            Document::ComDefinition(d) => &d.vlnv,
            Document::ApiDefinition(d) => &d.vlnv,
        }
    }

    pub fn document_type(&self) -> DocumentType {
        match self {
            Document::AbstractionDefinition(_) => DocumentType::AbstractionDefinition,
            Document::BusDefinition(_) => DocumentType::BusDefinition,
            Document::Component(_) => DocumentType::Component,
            Document::ComDefinition(_) => DocumentType::ComDefinition,
            Document::ApiDefinition(_) => DocumentType::ApiDefinition,
        }
    }

    /// Schema revision; Kactus2 documents always use 2014 namespaces.
    pub fn revision(&self) -> Revision {
        match self {
            Document::AbstractionDefinition(d) => d.revision,
            Document::BusDefinition(d) => d.revision,
            Document::Component(d) => d.revision,
            Document::ComDefinition(_) | Document::ApiDefinition(_) => Revision::Std14,
        }
    }

    pub fn top_comments(&self) -> &[String] {
        match self {
            Document::AbstractionDefinition(d) => &d.top_comments,
            Document::BusDefinition(d) => &d.top_comments,
            Document::Component(d) => &d.top_comments,
            Document::ComDefinition(d) => &d.top_comments,
            Document::ApiDefinition(d) => &d.top_comments,
        }
    }

    pub fn as_bus_definition(&self) -> Option<&BusDefinition> {
        match self {
            Document::BusDefinition(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_abstraction_definition(&self) -> Option<&AbstractionDefinition> {
        match self {
            Document::AbstractionDefinition(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_com_definition(&self) -> Option<&ComDefinition> {
        match self {
            Document::ComDefinition(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_component(&self) -> Option<&Component> {
        match self {
            Document::Component(d) => Some(d),
            _ => None,
        }
    }
}

/// Read-only VLNV lookup used for cross-document references.
pub trait DocumentLibrary {
    fn resolve(&self, vlnv: &Vlnv) -> Option<&Document>;

    fn contains(&self, vlnv: &Vlnv) -> bool {
        self.resolve(vlnv).is_some()
    }
}

/// Library holding documents in memory, keyed by `vendor:library:name:version`.
#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    documents: HashMap<String, Document>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any with the same identifier.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.vlnv().to_string(), document)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentLibrary for MemoryLibrary {
    fn resolve(&self, vlnv: &Vlnv) -> Option<&Document> {
        self.documents.get(&vlnv.to_string())
    }
}

/// Library with no documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyLibrary;

impl DocumentLibrary for EmptyLibrary {
    fn resolve(&self, _vlnv: &Vlnv) -> Option<&Document> {
        None
    }
}
