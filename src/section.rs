//! The traits configuration types implement.
//!
//! [`Section`] is any composable block of settings: it provides the schema
//! and may override the post-population hook. [`Root`] marks a type as a
//! top-level configuration: it embeds a [`Core`], which retains the
//! resolver handle after composition for later inspection.

use std::sync::Arc;

use crate::resolver::Resolver;
use crate::schema::Schema;

/// A composable block of configuration fields.
pub trait Section: 'static {
    /// The declarative schema for this section.
    fn schema() -> Schema<Self>
    where
        Self: Sized;

    /// Hook invoked once per section, after all of its fields (including
    /// nested sections, which run their own hooks first) have been
    /// assigned. Override it for derivation or validation logic; the
    /// default does nothing.
    fn post_configure(&mut self, resolver: &Resolver) {
        let _ = resolver;
    }

    /// Whether this section's tree embeds a nested section of type `T`,
    /// at any depth. The section's own type does not count.
    fn embeds<T: 'static>() -> bool
    where
        Self: Sized,
    {
        Self::schema().embeds::<T>()
    }
}

/// The base capability a top-level configuration embeds: it holds the
/// resolver handle retained by the last composition.
#[derive(Debug, Default, Clone)]
pub struct Core {
    resolver: Option<Arc<Resolver>>,
}

impl Core {
    /// The resolver from the last composition, if any.
    pub fn resolver(&self) -> Option<&Resolver> {
        self.resolver.as_deref()
    }

    pub(crate) fn attach(&mut self, resolver: Arc<Resolver>) {
        self.resolver = Some(resolver);
    }
}

/// A top-level configuration type: a [`Section`] that embeds a [`Core`].
pub trait Root: Section {
    fn core(&self) -> &Core;
    fn core_mut(&mut self) -> &mut Core;

    /// The resolver retained by the last composition of this instance.
    fn resolver(&self) -> Option<&Resolver> {
        self.core().resolver()
    }
}
