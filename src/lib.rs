//! Layered configuration for Rust services. Describe your settings once,
//! compose them from flags, environment, and files.
//!
//! Strata turns a declarative schema into a complete configuration surface:
//! every declared field becomes a long command-line flag, an environment
//! variable binding, and a configuration-file key, all resolved under one
//! precedence order and written back into your typed struct.
//!
//! ```ignore
//! #[derive(Debug, Default)]
//! struct AppConfig {
//!     core: Core,
//!     api: ApiConfig,
//!     primary: DatabaseConfig,
//!     replica: DatabaseConfig,
//! }
//!
//! impl Section for AppConfig {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!             .nested(None, |c: &mut Self| &mut c.api)
//!             .nested(Some("primary"), |c: &mut Self| &mut c.primary)
//!             .nested(Some("replica"), |c: &mut Self| &mut c.replica)
//!     }
//! }
//!
//! impl Root for AppConfig {
//!     fn core(&self) -> &Core { &self.core }
//!     fn core_mut(&mut self) -> &mut Core { &mut self.core }
//! }
//!
//! let config = strata::compose(AppConfig::default())?;
//! ```
//!
//! That single call declares `--host`, `--primary_dbhost`, `--replica_dbport`
//! and friends, binds `HOST`, `PRIMARY_DBHOST`, `REPLICA_DBPORT`, honors a
//! `--config path` file, and hands back the populated struct.
//!
//! # Schema as source of truth
//!
//! A [`Section`] describes its fields once, through [`Schema`]'s builder:
//! each leaf carries a name, a kind (text, list, integer, boolean, two
//! float widths, duration), a default literal, and help text. Everything
//! else derives from that one description. There is no separate key
//! registry and no way for the flag set to drift from the struct.
//!
//! A leaf declared with an empty name is invisible to the engine and keeps
//! its zero value. A default literal that does not parse for its kind
//! drops that one field from the run (a `tracing` warning records it).
//!
//! # Layer precedence
//!
//! ```text
//! Declared defaults     parsed from the schema literals
//!        ↑ overridden by
//! Config file           named by the reserved `config` flag/key
//!        ↑ overridden by
//! Environment vars      UPPER_SNAKE_CASE of the qualified name
//!        ↑ overridden by
//! Command-line flags    --qualified_name
//! ```
//!
//! Every layer is sparse: a source only overrides the keys it actually
//! supplies, and unset keys fall through to the layer below. One quirk is
//! deliberate and preserved: for text fields an empty resolved string
//! counts as unset and falls back to the declared default.
//!
//! # Prefixes
//!
//! Nested sections may carry a prefix segment. Prefixes compose lexically,
//! ancestors first, joined with underscores: a field named `dbhost` inside
//! a section nested under `primary` resolves as `primary_dbhost`, flag
//! `--primary_dbhost`, variable `PRIMARY_DBHOST`. This is what lets the
//! same section type appear several times in one structure without its
//! keys colliding.
//!
//! # The configuration file
//!
//! When the reserved `config` flag (or `CONFIG` variable) names a path,
//! the file is loaded during composition: TOML by default, JSON for a
//! `.json` extension. Nested tables flatten by underscore-joining, so a
//! `[primary]` table's `dbhost` key feeds `primary_dbhost`. A missing,
//! unreadable, or unparseable file is the engine's only fatal condition,
//! reported as a typed [`StrataError`].
//!
//! # Process-wide flags and isolation
//!
//! [`compose`] merges each structure's flags into a process-wide registry,
//! idempotently by name, so repeated composition is safe and every flag
//! shows up in the one global set. For tests and concurrent resolutions,
//! [`compose_with_flag_set`] works against a caller-supplied [`FlagSet`]
//! and leaves process state alone; [`Composer`] additionally lets you
//! substitute synthetic argv and environment snapshots. Environment
//! variables themselves remain process-global either way.
//!
//! # Hooks and introspection
//!
//! A section may override [`Section::post_configure`] to derive or check
//! values; it runs once per section, after that section's subtree is
//! fully assigned, and receives the [`Resolver`]. After composition the
//! root keeps the resolver handle ([`Root::resolver`]) for later lookups,
//! and [`Section::embeds`] answers whether a structure's tree contains a
//! given section type.

pub mod error;
pub mod presets;
pub mod registry;

mod compose;
mod env;
mod file;
mod flags;
mod resolver;
mod schema;
mod section;
mod walker;

#[cfg(test)]
mod fixtures;

pub use compose::{CONFIG_FLAG, Composer, compose, compose_with_flag_set};
pub use error::StrataError;
pub use flags::{FlagDecl, FlagKind, FlagSet, FlagValue, parse_duration};
pub use resolver::{Resolver, Source};
pub use schema::Schema;
pub use section::{Core, Root, Section};
