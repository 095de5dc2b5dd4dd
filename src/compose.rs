//! Top-level composition.
//!
//! [`compose`] is the everyday entry point: register the structure's flags,
//! merge them into the process-wide registry, resolve from the real command
//! line, environment, and optional configuration file, and populate the
//! instance. [`compose_with_flag_set`] does the same walk against a
//! caller-supplied flag set and never touches process-wide state, which is
//! what test harnesses and concurrent resolutions want.
//!
//! [`Composer`] sits under both: it carries the merge toggle and lets
//! callers substitute synthetic argv and environment snapshots.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};

use crate::env::EnvLayer;
use crate::error::StrataError;
use crate::flags::{FlagDecl, FlagKind, FlagSet, FlagValue};
use crate::registry;
use crate::resolver::Resolver;
use crate::section::Root;
use crate::walker;

/// The reserved flag/key naming the configuration file to load.
pub const CONFIG_FLAG: &str = "config";

/// Compose `instance` from the process command line, environment, and
/// optional configuration file, merging its flags into the process-wide
/// registry.
pub fn compose<C: Root>(instance: C) -> Result<C, StrataError> {
    Composer::new().compose(instance)
}

/// Compose `instance` against a caller-supplied flag set. The process-wide
/// registry is never touched; registration writes into `flags`, and
/// resolution reads only from it.
pub fn compose_with_flag_set<C: Root>(instance: C, flags: &mut FlagSet) -> Result<C, StrataError> {
    Composer::new().compose_with_flag_set(instance, flags)
}

/// Options for one composition run.
pub struct Composer {
    merge_process_flags: bool,
    args: Option<Vec<String>>,
    env_vars: Option<Vec<(String, String)>>,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            merge_process_flags: true,
            args: None,
            env_vars: None,
        }
    }

    /// Whether to merge the structure's flags into the process-wide
    /// registry (default: true). When off, resolution reads only the
    /// isolated set built for this run.
    pub fn merge_process_flags(mut self, merge: bool) -> Self {
        self.merge_process_flags = merge;
        self
    }

    /// Substitute the command-line arguments (without the binary name).
    /// The default is `std::env::args().skip(1)`.
    pub fn args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Substitute the environment snapshot. The default is
    /// `std::env::vars()`.
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Run the composition against the process-wide registry (or an
    /// isolated set when merging is off).
    pub fn compose<C: Root>(self, instance: C) -> Result<C, StrataError> {
        let mut local = FlagSet::new();
        walker::register::<C>(&mut local, "");
        ensure_config_flag(&mut local);

        let flags = if self.merge_process_flags {
            registry::merge_into_process(&local);
            registry::process_snapshot()
        } else {
            local
        };
        self.finish(instance, &flags)
    }

    /// Run the composition against a caller-supplied flag set, never
    /// merging into the process-wide registry.
    pub fn compose_with_flag_set<C: Root>(
        self,
        instance: C,
        flags: &mut FlagSet,
    ) -> Result<C, StrataError> {
        walker::register::<C>(flags, "");
        ensure_config_flag(flags);
        let snapshot = flags.clone();
        self.finish(instance, &snapshot)
    }

    fn finish<C: Root>(self, mut instance: C, flags: &FlagSet) -> Result<C, StrataError> {
        let args = match self.args {
            Some(args) => args,
            None => std::env::args().skip(1).collect(),
        };
        let env = match self.env_vars {
            Some(vars) => EnvLayer::from_vars(vars),
            None => EnvLayer::from_process(),
        };

        let flag_values = parse_args(flags, args);
        let defaults: HashMap<String, FlagValue> = flags
            .iter()
            .map(|decl| (decl.name.clone(), decl.default.clone()))
            .collect();

        let mut resolver = Resolver::new(flag_values, env, defaults);
        let path = resolver.get_text(CONFIG_FLAG);
        if !path.is_empty() {
            resolver.load_file(Path::new(&path))?;
        }

        let resolver = Arc::new(resolver);
        instance.core_mut().attach(resolver.clone());
        walker::assign(&mut instance, &resolver, "");
        Ok(instance)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_config_flag(flags: &mut FlagSet) {
    if flags.lookup(CONFIG_FLAG).is_none() {
        flags.declare(FlagDecl {
            name: CONFIG_FLAG.to_string(),
            kind: FlagKind::Text,
            default: FlagValue::Text(String::new()),
            desc: "Path for a configuration file to load",
        });
    }
}

/// Parse argv against the declared flags, keeping only values actually
/// supplied on the command line. Unknown or malformed input is tolerated;
/// argv never fails a composition.
fn parse_args(flags: &FlagSet, args: Vec<String>) -> HashMap<String, String> {
    let mut cmd = Command::new("strata")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .ignore_errors(true);

    for decl in flags.iter() {
        let mut arg = Arg::new(decl.name.clone())
            .long(decl.name.clone())
            .action(ArgAction::Set);
        if !decl.desc.is_empty() {
            arg = arg.help(decl.desc);
        }
        if decl.kind == FlagKind::Boolean {
            // Allow both `--flag` and `--flag=value`.
            arg = arg.num_args(0..=1).default_missing_value("true");
        }
        cmd = cmd.arg(arg);
    }

    let matches = match cmd.try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::debug!(error = %e, "command line did not parse; flags ignored");
            return HashMap::new();
        }
    };

    let mut values = HashMap::new();
    for decl in flags.iter() {
        if matches.value_source(&decl.name) == Some(ValueSource::CommandLine)
            && let Some(value) = matches.get_one::<String>(&decl.name)
        {
            values.insert(decl.name.clone(), value.clone());
        }
    }
    values
}
