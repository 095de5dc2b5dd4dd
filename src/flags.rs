//! Flag declarations and the declaration table.
//!
//! A [`FlagSet`] is a table of [`FlagDecl`]s keyed by qualified name. The
//! registration pass fills one per composition; the process-wide registry
//! (see [`registry`](crate::registry)) is a `FlagSet` with idempotent merge.
//!
//! Defaults are parsed from string literals at declaration time. A literal
//! that does not parse for its kind means the flag is never declared; the
//! walker handles that by skipping the field.

use std::collections::BTreeMap;
use std::time::Duration;

/// The declared type of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Text,
    TextList,
    Integer,
    Boolean,
    Float32,
    Float64,
    Duration,
}

/// A typed default value, parsed from its string literal.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Text(String),
    List(Vec<String>),
    Integer(i64),
    Boolean(bool),
    Float32(f32),
    Float64(f64),
    Duration(Duration),
}

impl FlagKind {
    /// Parse a default literal for this kind.
    ///
    /// Only integer, float, and duration literals can fail. Text is taken
    /// verbatim, lists are comma-split, and a boolean is true iff the
    /// literal is exactly `"true"`.
    pub fn parse_default(self, literal: &str) -> Option<FlagValue> {
        match self {
            FlagKind::Text => Some(FlagValue::Text(literal.to_string())),
            FlagKind::TextList => Some(FlagValue::List(split_list(literal))),
            FlagKind::Integer => literal.parse::<i64>().ok().map(FlagValue::Integer),
            FlagKind::Boolean => Some(FlagValue::Boolean(literal == "true")),
            FlagKind::Float32 => literal.parse::<f32>().ok().map(FlagValue::Float32),
            FlagKind::Float64 => literal.parse::<f64>().ok().map(FlagValue::Float64),
            FlagKind::Duration => parse_duration(literal).map(FlagValue::Duration),
        }
    }
}

/// One flag declaration: qualified name, kind, parsed default, help text.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagDecl {
    pub name: String,
    pub kind: FlagKind,
    pub default: FlagValue,
    pub desc: &'static str,
}

/// A set of flag declarations keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    decls: BTreeMap<String, FlagDecl>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. Re-declaring a name silently overwrites the
    /// previous entry; collisions are not detected.
    pub fn declare(&mut self, decl: FlagDecl) {
        self.decls.insert(decl.name.clone(), decl);
    }

    /// Merge another set into this one, idempotently by name: declarations
    /// whose name is already present are left untouched.
    pub fn merge(&mut self, other: &FlagSet) {
        for decl in other.iter() {
            if !self.decls.contains_key(&decl.name) {
                self.decls.insert(decl.name.clone(), decl.clone());
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&FlagDecl> {
        self.decls.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlagDecl> {
        self.decls.values()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// Comma-split a list literal. An empty literal is an empty list, not a
/// list containing one empty element.
pub(crate) fn split_list(literal: &str) -> Vec<String> {
    if literal.is_empty() {
        return Vec::new();
    }
    literal.split(',').map(str::to_string).collect()
}

/// Parse a textual duration expression such as `"15s"`, `"1m30s"`, or
/// `"500ms"`.
///
/// A duration is a sequence of decimal numbers (fractions allowed), each
/// with a unit suffix: `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`. The bare
/// string `"0"` is accepted without a unit; any other unitless number is
/// rejected. Negative durations are not representable and do not parse.
pub fn parse_duration(s: &str) -> Option<Duration> {
    if s == "0" {
        return Some(Duration::ZERO);
    }
    if s.is_empty() {
        return None;
    }
    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if digits == 0 {
            return None;
        }
        let (number, tail) = rest.split_at(digits);
        let value: f64 = number.parse().ok()?;
        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, remainder) = tail.split_at(unit_len);
        let unit_secs = match unit {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return None,
        };
        total += Duration::try_from_secs_f64(value * unit_secs).ok()?;
        rest = remainder;
    }
    Some(total)
}
