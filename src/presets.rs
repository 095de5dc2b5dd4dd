//! Prebuilt configuration sections.
//!
//! Ready-made field sets for the settings most services need. Each is an
//! ordinary [`Section`]: embed it in a root structure as-is, or nest it
//! several times under different prefixes (a primary and a replica
//! database, for instance). They serialize, so a service can dump its
//! effective configuration after composing.

use std::time::Duration;

use serde::Serialize;

use crate::schema::Schema;
use crate::section::Section;

/// Settings for an HTTP API service.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ApiConfig {
    pub version: String,
    pub name: String,
    pub build: String,
    pub host: String,
    pub port: i64,
    pub api_url: String,
    pub read_timeout: Duration,
}

impl Section for ApiConfig {
    fn schema() -> Schema<Self> {
        Schema::<Self>::new()
            .text("version", "1.0.0", "API version (follows semver)", |c, v| {
                c.version = v
            })
            .text("name", "service-api", "Default name of the service", |c, v| {
                c.name = v
            })
            .text("build", "UNSPECIFIED", "Build version", |c, v| c.build = v)
            .text("host", "localhost", "Server hostname to bind to", |c, v| {
                c.host = v
            })
            .integer("port", "80", "Server port to bind to", |c, v| c.port = v)
            .text("api_url", "www", "The URL to the API", |c, v| c.api_url = v)
            .duration(
                "read_timeout",
                "15s",
                "Read timeout for incoming requests",
                |c, v| c.read_timeout = v,
            )
    }
}

/// Composable settings for database connections.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DatabaseConfig {
    pub db_host: String,
    pub db_user: String,
    pub db_name: String,
    pub db_pass: String,
    pub db_ssl: String,
    pub db_port: i64,
    pub db_debug: bool,
}

impl Section for DatabaseConfig {
    fn schema() -> Schema<Self> {
        Schema::<Self>::new()
            .text("dbhost", "localhost", "Database hostname", |c, v| {
                c.db_host = v
            })
            .text("dbuser", "", "Database username", |c, v| c.db_user = v)
            .text("dbname", "", "Database name", |c, v| c.db_name = v)
            .text("dbpass", "", "Database password", |c, v| c.db_pass = v)
            .text("dbssl", "disable", "Database SSL mode", |c, v| c.db_ssl = v)
            .integer("dbport", "5432", "Database port number", |c, v| {
                c.db_port = v
            })
            .boolean("dbdebug", "false", "Enable database debug mode", |c, v| {
                c.db_debug = v
            })
    }
}

/// Settings for token-based authentication.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct AuthConfig {
    pub jwt_phrase: String,
}

impl Section for AuthConfig {
    fn schema() -> Schema<Self> {
        Schema::new().text("jwt_phrase", "", "Phrase for signing tokens", |c, v| {
            c.jwt_phrase = v
        })
    }
}

/// Settings for service logging.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct LogConfig {
    pub log_level: String,
    pub log_format: String,
    pub log_outputs: Vec<String>,
}

impl Section for LogConfig {
    fn schema() -> Schema<Self> {
        Schema::<Self>::new()
            .text("log_level", "info", "Minimum level to log", |c, v| {
                c.log_level = v
            })
            .text("log_format", "text", "Log output format (text or json)", |c, v| {
                c.log_format = v
            })
            .text_list("log_outputs", "stderr", "Log destinations", |c, v| {
                c.log_outputs = v
            })
    }
}
