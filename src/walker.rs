//! The two schema passes.
//!
//! Registration walks a section type's schema and declares one flag per
//! named leaf, qualified by the composed namespace prefix. Assignment
//! repeats the identical walk against a live instance, writing resolved
//! values (or parsed defaults) through the leaf setters and firing each
//! section's post-population hook once its subtree is done.
//!
//! Prefix composition is purely lexical: ancestors first, underscore
//! joined. A field named `dbhost` under prefix `primary` resolves as
//! `primary_dbhost`; with no prefix chain it is just `dbhost`.

use crate::flags::{FlagDecl, FlagSet, parse_duration, split_list};
use crate::resolver::Resolver;
use crate::schema::{Bind, FieldDef};
use crate::section::Section;

/// Compose an ambient prefix with a section's own prefix tag.
pub(crate) fn join_prefix(ambient: &str, local: Option<&str>) -> String {
    match local {
        Some(local) if !local.is_empty() => {
            if ambient.is_empty() {
                local.to_string()
            } else {
                format!("{ambient}_{local}")
            }
        }
        _ => ambient.to_string(),
    }
}

/// The qualified name of a leaf under an ambient prefix.
pub(crate) fn qualify(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}_{name}")
    }
}

/// Registration pass: declare flags for every named leaf in `S`'s tree.
pub(crate) fn register<S: Section>(flags: &mut FlagSet, prefix: &str) {
    for def in S::schema().defs {
        match def {
            FieldDef::Leaf { meta, bind } => {
                if meta.name.is_empty() {
                    continue;
                }
                let name = qualify(prefix, meta.name);
                let kind = bind.kind();
                match kind.parse_default(meta.default) {
                    Some(default) => flags.declare(FlagDecl {
                        name,
                        kind,
                        default,
                        desc: meta.desc,
                    }),
                    None => {
                        tracing::warn!(
                            flag = %name,
                            literal = meta.default,
                            "default value failed to parse; flag not declared"
                        );
                    }
                }
            }
            FieldDef::Nested {
                prefix: local,
                register: recurse,
                ..
            } => {
                recurse(flags, &join_prefix(prefix, local));
            }
        }
    }
}

/// Assignment pass: populate every named leaf in `target` from the
/// resolver, then fire the section's hook.
pub(crate) fn assign<S: Section>(target: &mut S, resolver: &Resolver, prefix: &str) {
    for def in S::schema().defs {
        match def {
            FieldDef::Leaf { meta, bind } => {
                if meta.name.is_empty() {
                    continue;
                }
                let key = qualify(prefix, meta.name);
                apply(target, resolver, &key, meta.default, bind);
            }
            FieldDef::Nested {
                prefix: local,
                assign: recurse,
                ..
            } => {
                recurse(target, resolver, &join_prefix(prefix, local));
            }
        }
    }
    target.post_configure(resolver);
}

fn apply<S>(target: &mut S, resolver: &Resolver, key: &str, default: &'static str, bind: Bind<S>) {
    match bind {
        // Empty text counts as unset and falls back to the declared
        // default, even when a source supplied the empty string.
        Bind::Text(set) => {
            let mut value = resolver.get_text(key);
            if value.is_empty() {
                value = default.to_string();
            }
            set(target, value);
        }
        Bind::TextList(set) => {
            if resolver.is_set(key) {
                set(target, resolver.get_text_list(key));
            } else {
                set(target, split_list(default));
            }
        }
        Bind::Integer(set) => {
            if resolver.is_set(key) {
                set(target, resolver.get_integer(key));
            } else if let Ok(value) = default.parse::<i64>() {
                set(target, value);
            }
        }
        Bind::Boolean(set) => {
            if resolver.is_set(key) {
                set(target, resolver.get_boolean(key));
            } else {
                set(target, default == "true");
            }
        }
        Bind::Float32(set) => {
            if resolver.is_set(key) {
                set(target, resolver.get_float32(key));
            } else if let Ok(value) = default.parse::<f32>() {
                set(target, value);
            }
        }
        Bind::Float64(set) => {
            if resolver.is_set(key) {
                set(target, resolver.get_float64(key));
            } else if let Ok(value) = default.parse::<f64>() {
                set(target, value);
            }
        }
        Bind::Duration(set) => {
            if resolver.is_set(key) {
                set(target, resolver.get_duration(key));
            } else if let Some(value) = parse_duration(default) {
                set(target, value);
            }
        }
    }
}
