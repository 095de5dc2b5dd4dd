//! Configuration structs for the strata demo application.
//!
//! This module defines a root configuration to showcase strata's composition
//! features: a custom section with a post-population hook, a prebuilt logging
//! section, and the same database section nested twice under different
//! prefixes (a primary and a replica).
//!
//! # Env var mapping
//!
//! Every declared flag binds to the upper-snake-cased environment variable of
//! its qualified name:
//!
//! | Env var           | Flag                | Field                |
//! |-------------------|---------------------|----------------------|
//! | `HOST`            | `--host`            | `server.host`        |
//! | `PORT`            | `--port`            | `server.port`        |
//! | `LOG_LEVEL`       | `--log_level`       | `log.log_level`      |
//! | `PRIMARY_DBHOST`  | `--primary_dbhost`  | `primary.db_host`    |
//! | `REPLICA_DBPORT`  | `--replica_dbport`  | `replica.db_port`    |

use strata::presets::{DatabaseConfig, LogConfig};
use strata::{Core, Resolver, Root, Schema, Section};

/// Server settings with a derived endpoint.
#[derive(Debug, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: i64,
    /// Derived by the post-population hook, not declared as a flag.
    pub endpoint: String,
}

impl Section for ServerConfig {
    fn schema() -> Schema<Self> {
        Schema::<Self>::new()
            .text("host", "127.0.0.1", "Hostname to bind to", |c, v| c.host = v)
            .integer("port", "3000", "Port number to bind to", |c, v| c.port = v)
    }

    fn post_configure(&mut self, _resolver: &Resolver) {
        self.endpoint = format!("{}:{}", self.host, self.port);
    }
}

/// Root configuration for the demo application.
#[derive(Debug, Default)]
pub struct DemoConfig {
    pub core: Core,
    pub server: ServerConfig,
    pub log: LogConfig,
    pub primary: DatabaseConfig,
    pub replica: DatabaseConfig,
}

impl Section for DemoConfig {
    fn schema() -> Schema<Self> {
        Schema::<Self>::new()
            .nested(None, |c: &mut Self| &mut c.server)
            .nested(None, |c: &mut Self| &mut c.log)
            .nested(Some("primary"), |c: &mut Self| &mut c.primary)
            .nested(Some("replica"), |c: &mut Self| &mut c.replica)
    }
}

impl Root for DemoConfig {
    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }
}
