// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Canonical Serializer
//!
//! Every node renders itself through [`SqlNode::format`], appending to a
//! [`TrackedBuffer`]. Rendering is a single recursive descent: a node writes
//! its fixed template and calls back into its children in a fixed order.
//!
//! ## Rules
//!
//! - List nodes join their items with `", "` (`SpaceSplitExprs` with `" "`)
//! - Optional clauses carry their own leading space (`" where "`,
//!   `" limit "`, ...) and write nothing when absent
//! - Identifiers are backtick-quoted when they are reserved words or contain
//!   anything outside `[A-Za-z0-9_]`
//! - String values go through the [`LiteralEncoder`] in force
//! - Bind variables are written as `:name` and recorded in the buffer's bind
//!   locations
//! - Parentheses come only from explicit paren nodes in the tree; the
//!   serializer never infers precedence
//!
//! Rendering cannot fail.

use std::fmt;

use shardsql_keywords::KeywordSet;

use crate::bind::{BindLocation, ParsedQuery};
use crate::encode::{LiteralEncoder, MYSQL_ENCODER};

/// A node that can render itself as SQL text
pub trait SqlNode {
    fn format(&self, buf: &mut TrackedBuffer<'_>);
}

impl<T: SqlNode + ?Sized> SqlNode for Box<T> {
    fn format(&self, buf: &mut TrackedBuffer<'_>) {
        (**self).format(buf)
    }
}

/// Append-only output buffer that also tracks bind-variable placeholders
pub struct TrackedBuffer<'a> {
    out: String,
    bind_locations: Vec<BindLocation>,
    keywords: &'a KeywordSet,
    encoder: &'a dyn LiteralEncoder,
}

impl<'a> TrackedBuffer<'a> {
    pub fn new(keywords: &'a KeywordSet, encoder: &'a dyn LiteralEncoder) -> Self {
        Self {
            out: String::new(),
            bind_locations: Vec::new(),
            keywords,
            encoder,
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    pub fn push_char(&mut self, ch: char) {
        self.out.push(ch);
    }

    /// Append `node` to whatever is already in the buffer
    pub fn write_node<N: SqlNode + ?Sized>(&mut self, node: &N) {
        node.format(self);
    }

    /// Write `items` joined by `separator`, with nothing before or after
    pub fn write_list<N: SqlNode>(&mut self, items: &[N], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            item.format(self);
        }
    }

    /// Write `items` with `prefix` before the first and `", "` between the rest
    pub fn write_prefixed_list<N: SqlNode>(&mut self, prefix: &str, items: &[N]) {
        if items.is_empty() {
            return;
        }
        self.out.push_str(prefix);
        self.write_list(items, ", ");
    }

    /// Write an identifier, backtick-quoting it when needed
    pub fn write_ident(&mut self, name: &str) {
        if needs_quoting(self.keywords, name) {
            self.out.push('`');
            for ch in name.chars() {
                if ch == '`' {
                    self.out.push('`');
                }
                self.out.push(ch);
            }
            self.out.push('`');
        } else {
            self.out.push_str(name);
        }
    }

    /// Write a string value through the literal encoder
    pub fn write_literal(&mut self, raw: &str) {
        self.encoder.encode(raw, &mut self.out);
    }

    /// Write a `:name` placeholder and record where it landed
    pub fn write_arg(&mut self, name: &str) {
        let offset = self.out.len();
        self.out.push(':');
        self.out.push_str(name);
        self.bind_locations.push(BindLocation {
            offset,
            length: name.len() + 1,
        });
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn bind_locations(&self) -> &[BindLocation] {
        &self.bind_locations
    }

    pub fn into_string(self) -> String {
        self.out
    }

    pub fn into_parsed_query(self) -> ParsedQuery {
        ParsedQuery::new(self.out, self.bind_locations)
    }
}

fn needs_quoting(keywords: &KeywordSet, name: &str) -> bool {
    keywords.is_reserved(name) || name.bytes().any(|b| !(b.is_ascii_alphanumeric() || b == b'_'))
}

/// Keyword table and literal encoder used for one rendering
#[derive(Clone, Copy)]
pub struct Serializer<'a> {
    keywords: &'a KeywordSet,
    encoder: &'a dyn LiteralEncoder,
}

impl Serializer<'static> {
    /// The shared MySQL 5.7 keyword table with [`MySqlEncoder`](crate::MySqlEncoder)
    pub fn mysql() -> Self {
        Self::new(KeywordSet::mysql(), &MYSQL_ENCODER)
    }
}

impl<'a> Serializer<'a> {
    pub fn new(keywords: &'a KeywordSet, encoder: &'a dyn LiteralEncoder) -> Self {
        Self { keywords, encoder }
    }

    pub fn buffer(&self) -> TrackedBuffer<'a> {
        TrackedBuffer::new(self.keywords, self.encoder)
    }

    /// Render a node to SQL text
    pub fn render<N: SqlNode + ?Sized>(&self, node: &N) -> String {
        let mut buf = self.buffer();
        buf.write_node(node);
        buf.into_string()
    }

    /// Render a node and keep its bind-variable locations
    pub fn parse_query<N: SqlNode + ?Sized>(&self, node: &N) -> ParsedQuery {
        let mut buf = self.buffer();
        buf.write_node(node);
        buf.into_parsed_query()
    }
}

impl fmt::Debug for Serializer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("keywords", &self.keywords.len())
            .finish_non_exhaustive()
    }
}

/// Render a node with the default MySQL serializer
pub fn to_sql<N: SqlNode + ?Sized>(node: &N) -> String {
    Serializer::mysql().render(node)
}

macro_rules! display_as_sql {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&to_sql(self))
                }
            }
        )*
    };
}

display_as_sql!(
    crate::statement::Statement,
    crate::query::SelectStatement,
    crate::query::TableExpr,
    crate::query::Limit,
    crate::expr::Expr,
    crate::expr::ValExpr,
    crate::condition::BoolExpr,
);
