//! Declarative field schemas.
//!
//! A [`Schema`] is the per-type description the walker traverses: an ordered
//! list of declarations, each either a leaf (name, kind, default literal,
//! description, and a setter writing the resolved value back into the
//! struct) or a nested section carrying an optional namespace prefix.
//!
//! Schemas are plain data built once per type by [`Section::schema`]
//! (see [`Section`](crate::Section)):
//!
//! ```ignore
//! impl Section for DatabaseConfig {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!             .text("dbhost", "localhost", "Database hostname", |c, v| c.db_host = v)
//!             .integer("dbport", "5432", "Database port number", |c, v| c.db_port = v)
//!     }
//! }
//! ```
//!
//! Setters are non-capturing closures, so they coerce to plain fn pointers.
//! Nested entries store monomorphized recursion hooks for both walker
//! passes plus a `TypeId` predicate backing [`Section::embeds`].

use std::any::TypeId;
use std::time::Duration;

use crate::flags::{FlagKind, FlagSet};
use crate::resolver::Resolver;
use crate::section::Section;
use crate::walker;

/// Leaf declaration metadata. An empty name makes the field invisible to
/// the engine in both walker passes.
pub(crate) struct Leaf {
    pub name: &'static str,
    pub default: &'static str,
    pub desc: &'static str,
}

/// A typed setter for one leaf field.
pub(crate) enum Bind<S> {
    Text(fn(&mut S, String)),
    TextList(fn(&mut S, Vec<String>)),
    Integer(fn(&mut S, i64)),
    Boolean(fn(&mut S, bool)),
    Float32(fn(&mut S, f32)),
    Float64(fn(&mut S, f64)),
    Duration(fn(&mut S, Duration)),
}

impl<S> Bind<S> {
    pub(crate) fn kind(&self) -> FlagKind {
        match self {
            Bind::Text(_) => FlagKind::Text,
            Bind::TextList(_) => FlagKind::TextList,
            Bind::Integer(_) => FlagKind::Integer,
            Bind::Boolean(_) => FlagKind::Boolean,
            Bind::Float32(_) => FlagKind::Float32,
            Bind::Float64(_) => FlagKind::Float64,
            Bind::Duration(_) => FlagKind::Duration,
        }
    }
}

/// One schema entry: a leaf field or a nested section.
pub(crate) enum FieldDef<S> {
    Leaf {
        meta: Leaf,
        bind: Bind<S>,
    },
    Nested {
        prefix: Option<&'static str>,
        register: fn(&mut FlagSet, &str),
        assign: Box<dyn Fn(&mut S, &Resolver, &str)>,
        embeds: fn(TypeId) -> bool,
    },
}

/// The declarative schema of a configuration section.
pub struct Schema<S> {
    pub(crate) defs: Vec<FieldDef<S>>,
}

impl<S: Section> Schema<S> {
    pub fn new() -> Self {
        Self { defs: Vec::new() }
    }

    fn leaf(mut self, name: &'static str, default: &'static str, desc: &'static str, bind: Bind<S>) -> Self {
        self.defs.push(FieldDef::Leaf {
            meta: Leaf { name, default, desc },
            bind,
        });
        self
    }

    /// Declare a text field. A resolved empty string falls back to the
    /// default literal, so an explicitly configured empty string is
    /// indistinguishable from an unset value.
    pub fn text(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, String)) -> Self {
        self.leaf(name, default, desc, Bind::Text(set))
    }

    /// Declare a list-of-text field. The default literal is comma-split.
    pub fn text_list(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, Vec<String>)) -> Self {
        self.leaf(name, default, desc, Bind::TextList(set))
    }

    /// Declare a 64-bit signed integer field. The default literal is parsed
    /// base 10; if it does not parse, the field is skipped entirely.
    pub fn integer(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, i64)) -> Self {
        self.leaf(name, default, desc, Bind::Integer(set))
    }

    /// Declare a boolean field. The default is true iff the literal is
    /// exactly `"true"`.
    pub fn boolean(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, bool)) -> Self {
        self.leaf(name, default, desc, Bind::Boolean(set))
    }

    pub fn float32(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, f32)) -> Self {
        self.leaf(name, default, desc, Bind::Float32(set))
    }

    pub fn float64(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, f64)) -> Self {
        self.leaf(name, default, desc, Bind::Float64(set))
    }

    /// Declare a duration field. The default literal uses the textual
    /// grammar of [`parse_duration`](crate::parse_duration), e.g. `"15s"`.
    pub fn duration(self, name: &'static str, default: &'static str, desc: &'static str, set: fn(&mut S, Duration)) -> Self {
        self.leaf(name, default, desc, Bind::Duration(set))
    }

    /// Declare a nested section. `prefix` is an optional namespace segment,
    /// underscore-joined with the ambient prefix during the walk; `project`
    /// borrows the nested struct out of the parent.
    pub fn nested<N: Section>(mut self, prefix: Option<&'static str>, project: fn(&mut S) -> &mut N) -> Self {
        self.defs.push(FieldDef::Nested {
            prefix,
            register: walker::register::<N>,
            assign: Box::new(move |parent: &mut S, resolver: &Resolver, prefix: &str| {
                walker::assign(project(parent), resolver, prefix);
            }),
            embeds: section_embeds::<N>,
        });
        self
    }

    /// Whether this schema's tree contains a nested section of type `T`,
    /// at any depth.
    pub fn embeds<T: 'static>(&self) -> bool {
        self.embeds_id(TypeId::of::<T>())
    }

    pub(crate) fn embeds_id(&self, id: TypeId) -> bool {
        self.defs.iter().any(|def| match def {
            FieldDef::Nested { embeds, .. } => embeds(id),
            FieldDef::Leaf { .. } => false,
        })
    }
}

impl<S: Section> Default for Schema<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn section_embeds<N: Section>(id: TypeId) -> bool {
    TypeId::of::<N>() == id || N::schema().embeds_id(id)
}
