//! The resolved key/value table.
//!
//! A [`Resolver`] holds everything one composition run resolved: the flag
//! values actually supplied on the command line, the environment snapshot,
//! the flattened configuration file, and the registered flag defaults.
//! Lookups walk those layers in precedence order:
//!
//! ```text
//! command-line flag  (highest)
//!        ↓
//! environment variable
//!        ↓
//! configuration file
//!        ↓
//! registered default (lowest)
//! ```
//!
//! Accessors are weakly typed in the tradition of key/value config stores:
//! a string holding `"8080"` satisfies [`get_integer`](Resolver::get_integer),
//! a mismatch degrades to the type's zero value rather than erroring.
//! [`is_set`](Resolver::is_set) reports only explicitly supplied values
//! (flag, environment, or file), never registered defaults.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use toml::{Table, Value};

use crate::env::EnvLayer;
use crate::error::StrataError;
use crate::file;
use crate::flags::{FlagValue, parse_duration, split_list};

/// Which layer supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flag,
    Env,
    File,
    Default,
}

/// The source-tagged value table produced by one composition run.
#[derive(Debug, Default)]
pub struct Resolver {
    flags: HashMap<String, String>,
    env: EnvLayer,
    file: Table,
    defaults: HashMap<String, FlagValue>,
}

impl Resolver {
    pub(crate) fn new(
        flags: HashMap<String, String>,
        env: EnvLayer,
        defaults: HashMap<String, FlagValue>,
    ) -> Self {
        Self {
            flags,
            env,
            file: Table::new(),
            defaults,
        }
    }

    pub(crate) fn load_file(&mut self, path: &Path) -> Result<(), StrataError> {
        self.file = file::load(path)?;
        Ok(())
    }

    /// The explicit layers only; defaults never count.
    fn explicit(&self, key: &str) -> Option<(Source, Value)> {
        if let Some(raw) = self.flags.get(key) {
            return Some((Source::Flag, Value::String(raw.clone())));
        }
        if let Some(value) = self.env.get(key) {
            return Some((Source::Env, value));
        }
        if let Some(value) = self.file.get(key) {
            return Some((Source::File, value.clone()));
        }
        None
    }

    /// Whether `key` was explicitly supplied by a flag, the environment,
    /// or the configuration file.
    pub fn is_set(&self, key: &str) -> bool {
        self.flags.contains_key(key) || self.env.contains(key) || self.file.contains_key(key)
    }

    /// The layer that supplies `key`, or `None` if no layer knows it.
    pub fn source_of(&self, key: &str) -> Option<Source> {
        self.explicit(key)
            .map(|(source, _)| source)
            .or_else(|| self.defaults.contains_key(key).then_some(Source::Default))
    }

    /// Resolve `key` as text. Unknown keys resolve to the empty string.
    pub fn get_text(&self, key: &str) -> String {
        match self.explicit(key) {
            Some((_, value)) => text_of(&value),
            None => match self.defaults.get(key) {
                Some(FlagValue::Text(s)) => s.clone(),
                Some(other) => default_as_text(other),
                None => String::new(),
            },
        }
    }

    /// Resolve `key` as a list of text. A scalar value is comma-split.
    pub fn get_text_list(&self, key: &str) -> Vec<String> {
        match self.explicit(key) {
            Some((_, Value::Array(items))) => items.iter().map(text_of).collect(),
            Some((_, value)) => split_list(&text_of(&value)),
            None => match self.defaults.get(key) {
                Some(FlagValue::List(items)) => items.clone(),
                _ => Vec::new(),
            },
        }
    }

    pub fn get_integer(&self, key: &str) -> i64 {
        match self.explicit(key) {
            Some((_, value)) => integer_of(&value),
            None => match self.defaults.get(key) {
                Some(FlagValue::Integer(i)) => *i,
                _ => 0,
            },
        }
    }

    pub fn get_boolean(&self, key: &str) -> bool {
        match self.explicit(key) {
            Some((_, value)) => boolean_of(&value),
            None => matches!(self.defaults.get(key), Some(FlagValue::Boolean(true))),
        }
    }

    pub fn get_float32(&self, key: &str) -> f32 {
        match self.explicit(key) {
            Some((_, value)) => float_of(&value) as f32,
            None => match self.defaults.get(key) {
                Some(FlagValue::Float32(f)) => *f,
                _ => 0.0,
            },
        }
    }

    pub fn get_float64(&self, key: &str) -> f64 {
        match self.explicit(key) {
            Some((_, value)) => float_of(&value),
            None => match self.defaults.get(key) {
                Some(FlagValue::Float64(f)) => *f,
                _ => 0.0,
            },
        }
    }

    /// Resolve `key` as a duration. Strings use the textual grammar
    /// (`"15s"`); bare integers are whole seconds.
    pub fn get_duration(&self, key: &str) -> Duration {
        match self.explicit(key) {
            Some((_, value)) => duration_of(&value),
            None => match self.defaults.get(key) {
                Some(FlagValue::Duration(d)) => *d,
                _ => Duration::ZERO,
            },
        }
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Datetime(d) => d.to_string(),
        Value::Array(items) => items
            .iter()
            .map(text_of)
            .collect::<Vec<_>>()
            .join(","),
        Value::Table(_) => String::new(),
    }
}

fn default_as_text(default: &FlagValue) -> String {
    match default {
        FlagValue::Text(s) => s.clone(),
        FlagValue::List(items) => items.join(","),
        FlagValue::Integer(i) => i.to_string(),
        FlagValue::Boolean(b) => b.to_string(),
        FlagValue::Float32(f) => f.to_string(),
        FlagValue::Float64(f) => f.to_string(),
        FlagValue::Duration(d) => format!("{d:?}"),
    }
}

fn integer_of(value: &Value) -> i64 {
    match value {
        Value::Integer(i) => *i,
        Value::Float(f) => *f as i64,
        Value::Boolean(b) => *b as i64,
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

fn boolean_of(value: &Value) -> bool {
    match value {
        Value::Boolean(b) => *b,
        Value::Integer(i) => *i != 0,
        Value::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
        _ => false,
    }
}

fn float_of(value: &Value) -> f64 {
    match value {
        Value::Float(f) => *f,
        Value::Integer(i) => *i as f64,
        Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn duration_of(value: &Value) -> Duration {
    match value {
        Value::String(s) => parse_duration(s).unwrap_or(Duration::ZERO),
        Value::Integer(i) => {
            if *i >= 0 {
                Duration::from_secs(*i as u64)
            } else {
                Duration::ZERO
            }
        }
        Value::Float(f) => Duration::try_from_secs_f64(*f).unwrap_or(Duration::ZERO),
        _ => Duration::ZERO,
    }
}
