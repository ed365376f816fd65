use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const QUIET_DEPENDENCIES: &str = "teloxide=warn,reqwest=warn,hyper=warn";

pub fn setup_logger() {
    let directives = filter_directives(env::var("RUST_LOG").ok().as_deref());

    tracing_subscriber::fmt()
        // stdout belongs to the console form
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(true)
        .compact()
        .with_env_filter(EnvFilter::new(directives))
        .init();
}

/// Later directives win, so anything from `RUST_LOG` overrides the defaults.
fn filter_directives(rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(user) => format!("{},{},{}", DEFAULT_FILTER, QUIET_DEPENDENCIES, user),
        None => format!("{},{}", DEFAULT_FILTER, QUIET_DEPENDENCIES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_rust_log() {
        assert_eq!(filter_directives(None), "info,teloxide=warn,reqwest=warn,hyper=warn");
        assert_eq!(filter_directives(Some("  ")), filter_directives(None));
    }

    #[test]
    fn test_rust_log_comes_last() {
        let directives = filter_directives(Some("teloxide=debug"));

        assert!(directives.ends_with(",teloxide=debug"));
        assert!(directives.find("teloxide=warn") < directives.find("teloxide=debug"));
    }
}
