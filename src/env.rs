//! Environment variable bindings.
//!
//! Every declared flag is automatically bound to the environment variable
//! whose name is the qualified flag name upper-snake-cased: `primary_dbhost`
//! reads `PRIMARY_DBHOST`. Binding is lookup-time; no variable scan happens
//! up front.
//!
//! Values are parsed heuristically: bool > integer > float > string. This
//! covers the common cases (ports, switches, hostnames); anything that is
//! not clearly typed stays a string and is coerced by the accessor that
//! reads it.
//!
//! The snapshot takes an iterator so tests can pass synthetic data instead
//! of `std::env::vars()`.

use std::collections::HashMap;

use toml::Value;

/// A snapshot of environment variables taken at resolver construction.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvLayer {
    vars: HashMap<String, String>,
}

impl EnvLayer {
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Look up a qualified name, normalized to upper-snake-case.
    pub fn get(&self, qualified: &str) -> Option<Value> {
        self.vars
            .get(&qualified.to_ascii_uppercase())
            .map(|raw| parse_env_value(raw))
    }

    pub fn contains(&self, qualified: &str) -> bool {
        self.vars.contains_key(&qualified.to_ascii_uppercase())
    }
}

/// Parse an env var value into a typed value.
/// Tries: bool → integer → float → string.
fn parse_env_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        // Only use float if the string actually contains a dot,
        // to avoid "NaN" / "inf" being parsed as float.
        if s.contains('.') {
            return Value::Float(f);
        }
    }
    Value::String(s.to_string())
}
