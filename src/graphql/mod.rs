//! Typed GraphQL query documents for the content API.
//!
//! Queries are assembled from [`Field`]s that each select a shared [`Fragment`].
//! Argument values are rendered as escaped GraphQL string literals, so caller
//! input (a slug from the URL) can never alter the shape of the document.

mod fragments;
mod queries;

pub use fragments::*;
pub use queries::*;

use serde::Serialize;

/// A named, reusable field selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl Fragment {
    /// Render the selection set body, e.g. `id title slug`.
    pub fn render(&self) -> String {
        self.fields.join(" ")
    }
}

/// A root field with optional string arguments and a fragment selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    arguments: Vec<(&'static str, String)>,
    selection: Fragment,
}

impl Field {
    pub fn new(name: &'static str, selection: Fragment) -> Self {
        Self {
            name,
            arguments: Vec::new(),
            selection,
        }
    }

    /// Add a string argument. The value is escaped when rendered.
    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.arguments.push((name, value.into()));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render as `name(arg: "value") { fields }`.
    pub fn render(&self) -> String {
        let mut out = String::from(self.name);
        if !self.arguments.is_empty() {
            let args: Vec<String> = self
                .arguments
                .iter()
                .map(|(name, value)| format!("{}: {}", name, string_literal(value)))
                .collect();
            out.push('(');
            out.push_str(&args.join(", "));
            out.push(')');
        }
        out.push_str(" { ");
        out.push_str(&self.selection.render());
        out.push_str(" }");
        out
    }
}

/// An anonymous query operation made of one or more root fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    fields: Vec<Field>,
}

impl Document {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    pub fn single(field: Field) -> Self {
        Self::new(vec![field])
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Render the full query text.
    pub fn render(&self) -> String {
        let body: Vec<String> = self.fields.iter().map(Field::render).collect();
        format!("{{ {} }}", body.join(" "))
    }

    /// Wire body for a POST to the GraphQL endpoint.
    pub fn to_request(&self) -> GraphQlRequest {
        GraphQlRequest {
            query: self.render(),
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// JSON body sent to the content API.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

/// Quote and escape a value as a GraphQL string literal.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
