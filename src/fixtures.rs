#[cfg(test)]
pub mod test {
    use std::time::Duration;

    use crate::presets::DatabaseConfig;
    use crate::resolver::Resolver;
    use crate::schema::Schema;
    use crate::section::{Core, Root, Section};

    /// One leaf of every supported kind, plus an unnamed entry that the
    /// engine must ignore.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct KindsFixture {
        pub text: String,
        pub list: Vec<String>,
        pub count: i64,
        pub on: bool,
        pub off: bool,
        pub ratio: f32,
        pub precise: f64,
        pub wait: Duration,
        pub hidden: String,
    }

    impl Section for KindsFixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .text("kinds_text", "default_text", "A text field", |c, v| {
                    c.text = v
                })
                .text_list("kinds_list", "a,b", "A list field", |c, v| c.list = v)
                .integer("kinds_count", "42", "A counter", |c, v| c.count = v)
                .boolean("kinds_on", "true", "Defaults on", |c, v| c.on = v)
                .boolean("kinds_off", "false", "Defaults off", |c, v| c.off = v)
                .float32("kinds_ratio", "3.14", "A ratio", |c, v| c.ratio = v)
                .float64("kinds_precise", "2.718281828", "A precise value", |c, v| {
                    c.precise = v
                })
                .duration("kinds_wait", "15s", "A wait interval", |c, v| c.wait = v)
                .text("", "never", "", |c, v| c.hidden = v)
        }
    }

    #[derive(Debug, Default)]
    pub struct KindsRoot {
        pub core: Core,
        pub kinds: KindsFixture,
    }

    impl Section for KindsRoot {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().nested(None, |c: &mut Self| &mut c.kinds)
        }
    }

    impl Root for KindsRoot {
        fn core(&self) -> &Core {
            &self.core
        }
        fn core_mut(&mut self) -> &mut Core {
            &mut self.core
        }
    }

    /// Two-level prefix nesting: `outer_field` and `outer_inner_field`.
    #[derive(Debug, Default)]
    pub struct InnerFixture {
        pub field: String,
    }

    impl Section for InnerFixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().text("field", "inner_default", "Inner field", |c, v| {
                c.field = v
            })
        }
    }

    #[derive(Debug, Default)]
    pub struct OuterFixture {
        pub field: String,
        pub inner: InnerFixture,
    }

    impl Section for OuterFixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .text("field", "outer_default", "Outer field", |c, v| c.field = v)
                .nested(Some("inner"), |c: &mut Self| &mut c.inner)
        }
    }

    #[derive(Debug, Default)]
    pub struct PrefixRoot {
        pub core: Core,
        pub outer: OuterFixture,
    }

    impl Section for PrefixRoot {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().nested(Some("outer"), |c: &mut Self| &mut c.outer)
        }
    }

    impl Root for PrefixRoot {
        fn core(&self) -> &Core {
            &self.core
        }
        fn core_mut(&mut self) -> &mut Core {
            &mut self.core
        }
    }

    /// Three levels of unprefixed nesting.
    #[derive(Debug, Default)]
    pub struct Level3Fixture {
        pub field: String,
    }

    impl Section for Level3Fixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().text("l3_field", "level3", "Level 3 field", |c, v| {
                c.field = v
            })
        }
    }

    #[derive(Debug, Default)]
    pub struct Level2Fixture {
        pub field: String,
        pub level3: Level3Fixture,
    }

    impl Section for Level2Fixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .text("l2_field", "level2", "Level 2 field", |c, v| c.field = v)
                .nested(None, |c: &mut Self| &mut c.level3)
        }
    }

    #[derive(Debug, Default)]
    pub struct Level1Fixture {
        pub field: String,
        pub level2: Level2Fixture,
    }

    impl Section for Level1Fixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .text("l1_field", "level1", "Level 1 field", |c, v| c.field = v)
                .nested(None, |c: &mut Self| &mut c.level2)
        }
    }

    #[derive(Debug, Default)]
    pub struct NestedLevelsRoot {
        pub core: Core,
        pub level1: Level1Fixture,
    }

    impl Section for NestedLevelsRoot {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().nested(None, |c: &mut Self| &mut c.level1)
        }
    }

    impl Root for NestedLevelsRoot {
        fn core(&self) -> &Core {
            &self.core
        }
        fn core_mut(&mut self) -> &mut Core {
            &mut self.core
        }
    }

    /// The same section type nested twice, once bare and once prefixed.
    #[derive(Debug, Default)]
    pub struct PlainFixture {
        pub value: String,
    }

    impl Section for PlainFixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().text("value", "default_val", "A value", |c, v| c.value = v)
        }
    }

    #[derive(Debug, Default)]
    pub struct MixedRoot {
        pub core: Core,
        pub regular: PlainFixture,
        pub prefixed: PlainFixture,
    }

    impl Section for MixedRoot {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .nested(None, |c: &mut Self| &mut c.regular)
                .nested(Some("prefixed"), |c: &mut Self| &mut c.prefixed)
        }
    }

    impl Root for MixedRoot {
        fn core(&self) -> &Core {
            &self.core
        }
        fn core_mut(&mut self) -> &mut Core {
            &mut self.core
        }
    }

    /// A primary and a replica database, as a service would declare them.
    #[derive(Debug, Default)]
    pub struct ServiceRoot {
        pub core: Core,
        pub primary: DatabaseConfig,
        pub replica: DatabaseConfig,
    }

    impl Section for ServiceRoot {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .nested(Some("primary"), |c: &mut Self| &mut c.primary)
                .nested(Some("replica"), |c: &mut Self| &mut c.replica)
        }
    }

    impl Root for ServiceRoot {
        fn core(&self) -> &Core {
            &self.core
        }
        fn core_mut(&mut self) -> &mut Core {
            &mut self.core
        }
    }

    /// A section whose hook derives a field from assigned values.
    #[derive(Debug, Default)]
    pub struct HookFixture {
        pub host: String,
        pub port: i64,
        pub endpoint: String,
        pub port_was_set: bool,
    }

    impl Section for HookFixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .text("hook_host", "localhost", "Hook host", |c, v| c.host = v)
                .integer("hook_port", "8080", "Hook port", |c, v| c.port = v)
        }

        fn post_configure(&mut self, resolver: &Resolver) {
            self.endpoint = format!("{}:{}", self.host, self.port);
            self.port_was_set = resolver.is_set("hook_port");
        }
    }

    #[derive(Debug, Default)]
    pub struct HookRoot {
        pub core: Core,
        pub child: HookFixture,
        pub seen_child_endpoint: String,
    }

    impl Section for HookRoot {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new().nested(None, |c: &mut Self| &mut c.child)
        }

        fn post_configure(&mut self, _resolver: &Resolver) {
            // Runs after the child's subtree, hook included.
            self.seen_child_endpoint = self.child.endpoint.clone();
        }
    }

    impl Root for HookRoot {
        fn core(&self) -> &Core {
            &self.core
        }
        fn core_mut(&mut self) -> &mut Core {
            &mut self.core
        }
    }

    /// Unparseable default literals on the numeric and duration fields.
    #[derive(Debug, Default)]
    pub struct BadDefaultFixture {
        pub count: i64,
        pub wait: Duration,
        pub ok: String,
    }

    impl Section for BadDefaultFixture {
        fn schema() -> Schema<Self> {
            Schema::<Self>::new()
                .integer("bad_count", "forty-two", "Unparseable integer", |c, v| {
                    c.count = v
                })
                .duration("bad_wait", "soon", "Unparseable duration", |c, v| {
                    c.wait = v
                })
                .text("bad_ok", "fine", "A healthy field", |c, v| c.ok = v)
        }
    }

    #[test]
    fn kinds_fixture_declares_every_kind_once() {
        use crate::flags::FlagSet;
        let mut flags = FlagSet::new();
        crate::walker::register::<KindsFixture>(&mut flags, "");
        assert_eq!(flags.len(), 8);
    }
}
