//! # strata demo application
//!
//! A sample service setup that showcases how to integrate
//! [strata](https://docs.rs/strata) into a real application. This is **not**
//! a real service — it exists purely to demonstrate and manually verify
//! strata's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example strata_demo
//! cargo run --example strata_demo -- --port 8080
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature               | How to exercise it                                          |
//! |-----------------------|-------------------------------------------------------------|
//! | Declared defaults     | `cargo run --example strata_demo`                           |
//! | Flag override         | `cargo run --example strata_demo -- --port 8080`            |
//! | Env var override      | `PORT=9999 cargo run --example strata_demo`                 |
//! | Prefixed env var      | `PRIMARY_DBHOST=10.0.0.1 cargo run --example strata_demo`   |
//! | Config file           | `cargo run --example strata_demo -- --config demo.toml`     |
//! | File sections         | Put `dbhost = "..."` under `[primary]` in `demo.toml`       |
//! | Post-population hook  | The derived `server.endpoint` value in the output           |
//! | Retained resolver     | The per-key source report at the end of the output          |

mod config;

use strata::{Root, Source};

use config::DemoConfig;

fn print_values(config: &DemoConfig) {
    let entries = [
        ("server.host", config.server.host.clone()),
        ("server.port", config.server.port.to_string()),
        ("server.endpoint", config.server.endpoint.clone()),
        ("log.level", config.log.log_level.clone()),
        ("log.format", config.log.log_format.clone()),
        ("log.outputs", config.log.log_outputs.join(",")),
        ("primary.dbhost", config.primary.db_host.clone()),
        ("primary.dbport", config.primary.db_port.to_string()),
        ("replica.dbhost", config.replica.db_host.clone()),
        ("replica.dbport", config.replica.db_port.to_string()),
    ];

    let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (key, value) in &entries {
        println!("{key:<width$}  {value}");
    }
}

fn print_sources(config: &DemoConfig) {
    let Some(resolver) = config.resolver() else {
        return;
    };

    println!();
    println!("Where each value came from:");
    for key in [
        "host",
        "port",
        "log_level",
        "primary_dbhost",
        "replica_dbport",
    ] {
        let source = match resolver.source_of(key) {
            Some(Source::Flag) => "command line",
            Some(Source::Env) => "environment",
            Some(Source::File) => "config file",
            Some(Source::Default) => "default",
            None => "unset",
        };
        println!("{key:<16}  {source}");
    }
}

fn main() {
    let config = strata::compose(DemoConfig::default()).unwrap_or_else(|e| {
        eprintln!("Failed to compose configuration:\n{e}");
        std::process::exit(1);
    });

    print_values(&config);
    print_sources(&config);
}
