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

//! Lookup helpers over a parsed `roxmltree` tree.
//!
//! Element names are given in their conventional qualified form
//! (`ipxact:name`, `kactus2:version`). The `ipxact` prefix matches either
//! IP-XACT revision namespace and `kactus2` matches the Kactus2 namespace,
//! whatever prefixes the input document actually declares.

use ipxact_core::{Revision, VendorExtension, KACTUS2_NAMESPACE};
use roxmltree::Node;
use tracing::debug;

pub(crate) fn is_element(node: Node<'_, '_>, qualified: &str) -> bool {
    if !node.is_element() {
        return false;
    }
    let (prefix, local) = qualified.split_once(':').unwrap_or(("", qualified));
    let tag = node.tag_name();
    if tag.name() != local {
        return false;
    }
    match (prefix, tag.namespace()) {
        ("ipxact", Some(ns)) => Revision::from_namespace(ns).is_ok(),
        ("kactus2", Some(ns)) => ns == KACTUS2_NAMESPACE,
        ("", ns) => ns.is_none(),
        (prefix, Some(ns)) => node.lookup_prefix(ns) == Some(prefix),
        (_, None) => false,
    }
}

pub(crate) fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children().find(|c| is_element(*c, name))
}

pub(crate) fn children<'a, 'i>(
    node: Node<'a, 'i>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'i>> + 'a {
    node.children().filter(move |c| is_element(*c, name))
}

/// Children of the wrapper element `wrapper` named `name`.
pub(crate) fn nested<'a, 'i>(
    node: Node<'a, 'i>,
    wrapper: &str,
    name: &'static str,
) -> Vec<Node<'a, 'i>> {
    child(node, wrapper)
        .map(|list| children(list, name).collect())
        .unwrap_or_default()
}

pub(crate) fn text(node: Node<'_, '_>) -> String {
    node.text().unwrap_or("").to_string()
}

pub(crate) fn child_text(node: Node<'_, '_>, name: &str) -> String {
    child(node, name).map(text).unwrap_or_default()
}

pub(crate) fn attribute(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or("").to_string()
}

pub(crate) fn is_true(value: &str) -> bool {
    value.trim() == "true"
}

/// All attributes of `node` in document order with their qualified names.
pub(crate) fn attributes(node: Node<'_, '_>) -> Vec<(String, String)> {
    node.attributes()
        .map(|attr| {
            let name = match attr.namespace().and_then(|ns| node.lookup_prefix(ns)) {
                Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, attr.name()),
                _ => attr.name().to_string(),
            };
            (name, attr.value().to_string())
        })
        .collect()
}

pub(crate) fn qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|ns| node.lookup_prefix(ns)) {
        Some(prefix) if !prefix.is_empty() => format!("{}:{}", prefix, tag.name()),
        _ => tag.name().to_string(),
    }
}

/// Reads an element tree. Text around child elements is kept in order:
/// leading text in `text`, text after each child in that child's `tail`.
/// Surrounding whitespace of mixed content is trimmed.
fn read_extension(node: Node<'_, '_>) -> VendorExtension {
    let mut text = String::new();
    let mut children: Vec<VendorExtension> = Vec::new();
    for child in node.children() {
        if child.is_element() {
            children.push(read_extension(child));
        } else if let Some(segment) = child.text().filter(|_| child.is_text()) {
            match children.last_mut() {
                Some(previous) => previous.tail.push_str(segment),
                None => text.push_str(segment),
            }
        }
    }
    if !children.is_empty() {
        text = text.trim().to_string();
        for child in &mut children {
            child.tail = child.tail.trim().to_string();
        }
    }

    VendorExtension {
        name: qualified_name(node),
        attributes: attributes(node),
        text,
        children,
        tail: String::new(),
    }
}

/// `xmlns:prefix` declarations for every prefix other than the ones the
/// document writer always declares, used by elements or attributes within
/// `element`.
fn foreign_namespaces(element: Node<'_, '_>) -> Vec<(String, String)> {
    let mut declarations: Vec<(String, String)> = Vec::new();
    for node in element.descendants().filter(Node::is_element) {
        let used = node
            .tag_name()
            .namespace()
            .into_iter()
            .chain(node.attributes().filter_map(|attr| attr.namespace()));
        for ns in used {
            let Some(prefix) = node.lookup_prefix(ns) else {
                continue;
            };
            if matches!(prefix, "" | "ipxact" | "kactus2" | "xsi" | "xml") {
                continue;
            }
            let declaration = format!("xmlns:{}", prefix);
            if !declarations.iter().any(|(name, _)| *name == declaration) {
                declarations.push((declaration, ns.to_string()));
            }
        }
    }
    declarations
}

/// Reads the children of `ipxact:vendorExtensions` under `node`.
///
/// Each top-level extension carries `xmlns:prefix` attributes for the
/// foreign namespaces used anywhere in its subtree, so that writing it back
/// stays well-formed.
pub(crate) fn vendor_extensions(node: Node<'_, '_>) -> Vec<VendorExtension> {
    let Some(list) = child(node, "ipxact:vendorExtensions") else {
        return Vec::new();
    };

    list.children()
        .filter(Node::is_element)
        .map(|element| {
            let mut extension = read_extension(element);
            for (declaration, ns) in foreign_namespaces(element).into_iter().rev() {
                if extension.attribute(&declaration).is_none() {
                    extension.attributes.insert(0, (declaration, ns));
                }
            }
            extension
        })
        .collect()
}

/// Logs every element child of `node` whose local name is not in `known`
/// and returns how many were skipped.
pub(crate) fn skip_unrecognised(node: Node<'_, '_>, known: &[&str]) -> usize {
    let mut skipped = 0;
    for element in node.children().filter(Node::is_element) {
        let name = element.tag_name().name();
        if !known.contains(&name) {
            debug!(parent = node.tag_name().name(), element = name, "skipping unrecognised element");
            skipped += 1;
        }
    }
    skipped
}

/// Removes and returns the first extension named `name`.
pub(crate) fn take_extension(
    extensions: &mut Vec<VendorExtension>,
    name: &str,
) -> Option<VendorExtension> {
    let index = extensions.iter().position(|ext| ext.name == name)?;
    Some(extensions.remove(index))
}

/// Comments preceding the document root element.
pub(crate) fn top_comments(root: Node<'_, '_>) -> Vec<String> {
    let mut comments: Vec<String> = root
        .prev_siblings()
        .filter(Node::is_comment)
        .filter_map(|c| c.text())
        .map(str::to_string)
        .collect();
    comments.reverse();
    comments
}
