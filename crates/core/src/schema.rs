//! Structural check of an XML document against an XSD.
//!
//! This is not a full XML-Schema validator. A small tag scanner verifies
//! the document is well formed (balanced, properly nested tags), collects
//! the element names the schema declares (`<xs:element name="…">`), and
//! checks that the document's root matches the schema's first declared
//! element and that every element in the document is declared somewhere in
//! the schema.
//!
//! A document that cannot be scanned at all is an error; a well-formed
//! document that violates the schema produces a [`SchemaReport`] verdict
//! with the individual violations listed.

use crate::error::{Result, SchemaError};

/// Verdict of a schema check.
#[derive(Debug, Clone)]
pub struct SchemaReport {
    /// True when no violations were found
    pub valid: bool,
    /// Human-readable violations, empty when valid
    pub violations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tag {
    Open(String),
    Close(String),
    /// Self-closing `<name .../>`
    Empty(String),
}

/// Check `xml` against the element declarations in `xsd`.
///
/// # Errors
/// `SchemaError` when either input cannot be scanned (unclosed or
/// mismatched tags, no root element).
pub fn validate_against_schema(xml: &str, xsd: &str) -> Result<SchemaReport> {
    let (root, elements) = scan_document(xml)?;
    let declared = declared_elements(xsd)?;

    let mut violations = Vec::new();

    match declared.first() {
        Some(expected_root) if *expected_root != root => {
            violations.push(format!(
                "root element is <{}>, schema expects <{}>",
                root, expected_root
            ));
        }
        Some(_) => {}
        None => violations.push("schema declares no elements".to_string()),
    }

    for name in &elements {
        if !declared.iter().any(|d| d == name) {
            violations.push(format!("element <{}> is not declared in the schema", name));
        }
    }

    Ok(SchemaReport {
        valid: violations.is_empty(),
        violations,
    })
}

/// Scan a document, verify well-formedness, and return its root name plus
/// the distinct element names encountered.
fn scan_document(text: &str) -> Result<(String, Vec<String>)> {
    let tags = scan_tags(text)?;

    let mut stack: Vec<String> = Vec::new();
    let mut root: Option<String> = None;
    let mut names: Vec<String> = Vec::new();

    for tag in tags {
        match tag {
            Tag::Open(name) => {
                note_element(&mut root, &mut names, &stack, &name);
                stack.push(name);
            }
            Tag::Empty(name) => {
                note_element(&mut root, &mut names, &stack, &name);
            }
            Tag::Close(name) => match stack.pop() {
                Some(open) if open == name => {}
                Some(open) => {
                    return Err(SchemaError::MismatchedTag {
                        expected: open,
                        found: name,
                    }
                    .into())
                }
                None => return Err(SchemaError::UnexpectedClose { found: name }.into()),
            },
        }
    }

    if !stack.is_empty() {
        return Err(SchemaError::UnclosedElements { count: stack.len() }.into());
    }

    match root {
        Some(root) => Ok((root, names)),
        None => Err(SchemaError::NoRootElement.into()),
    }
}

fn note_element(root: &mut Option<String>, names: &mut Vec<String>, stack: &[String], name: &str) {
    if stack.is_empty() && root.is_none() {
        *root = Some(name.to_string());
    }
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

/// Element names declared by the schema, in declaration order. Namespace
/// prefixes on the `element` tag itself (`xs:`, `xsd:`) are accepted.
fn declared_elements(xsd: &str) -> Result<Vec<String>> {
    let mut declared = Vec::new();
    for (tag, body) in scan_tags_with_bodies(xsd)? {
        let name = match &tag {
            Tag::Open(n) | Tag::Empty(n) => n.as_str(),
            Tag::Close(_) => continue,
        };
        let local = name.rsplit(':').next().unwrap_or(name);
        if local == "element" {
            if let Some(value) = attr_value(&body, "name") {
                if !declared.iter().any(|d| d == value) {
                    declared.push(value.to_string());
                }
            }
        }
    }
    Ok(declared)
}

fn scan_tags(text: &str) -> Result<Vec<Tag>> {
    Ok(scan_tags_with_bodies(text)?
        .into_iter()
        .map(|(tag, _)| tag)
        .collect())
}

/// Tokenize every tag in the input, returning each tag with its raw body
/// (everything between `<` and `>`). Comments, declarations, and
/// processing instructions are skipped; text content is ignored.
fn scan_tags_with_bodies(text: &str) -> Result<Vec<(Tag, String)>> {
    let bytes = text.as_bytes();
    let mut tags = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }
        let start = i;

        // Comments, DOCTYPE, CDATA, <?xml ...?>
        if text[i..].starts_with("<!--") {
            match text[i..].find("-->") {
                Some(end) => {
                    i += end + 3;
                    continue;
                }
                None => return Err(SchemaError::UnclosedTag { position: start }.into()),
            }
        }
        if i + 1 < bytes.len() && (bytes[i + 1] == b'!' || bytes[i + 1] == b'?') {
            match find_tag_end(bytes, i + 1) {
                Some(end) => {
                    i = end + 1;
                    continue;
                }
                None => return Err(SchemaError::UnclosedTag { position: start }.into()),
            }
        }

        let end = match find_tag_end(bytes, i + 1) {
            Some(end) => end,
            None => return Err(SchemaError::UnclosedTag { position: start }.into()),
        };
        let body = text[i + 1..end].trim();
        i = end + 1;

        if let Some(rest) = body.strip_prefix('/') {
            tags.push((Tag::Close(tag_name(rest)), rest.to_string()));
        } else if let Some(rest) = body.strip_suffix('/') {
            tags.push((Tag::Empty(tag_name(rest)), rest.to_string()));
        } else {
            tags.push((Tag::Open(tag_name(body)), body.to_string()));
        }
    }

    Ok(tags)
}

/// Find the index of the closing `>` from `from`, skipping over quoted
/// attribute values.
fn find_tag_end(bytes: &[u8], from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, &b) in bytes[from..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => return Some(from + offset),
                _ => {}
            },
        }
    }
    None
}

fn tag_name(body: &str) -> String {
    body.split([' ', '\t', '\n', '\r', '/'])
        .next()
        .unwrap_or("")
        .to_string()
}

/// Extract the value of `attr="…"` (or single-quoted) from a tag body.
fn attr_value<'a>(body: &'a str, attr: &str) -> Option<&'a str> {
    for quote in ['"', '\''] {
        let pattern = format!("{}={}", attr, quote);
        if let Some(pos) = body.find(&pattern) {
            // Reject matches inside a longer attribute name (e.g. "typeName=")
            if pos > 0 {
                let before = body.as_bytes()[pos - 1];
                if !before.is_ascii_whitespace() {
                    continue;
                }
            }
            let rest = &body[pos + pattern.len()..];
            return rest.find(quote).map(|end| &rest[..end]);
        }
    }
    None
}
