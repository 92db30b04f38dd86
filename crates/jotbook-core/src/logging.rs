//! Tracing subscriber setup for host shells.

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Default directive applied on top of `RUST_LOG`
pub const DEFAULT_DIRECTIVE: &str = "jotbook_core=info";

/// Install a fmt subscriber filtered by `RUST_LOG` plus `directive`.
///
/// An unparsable directive falls back to [`DEFAULT_DIRECTIVE`]. Safe to call
/// more than once; returns `false` when a global subscriber was already set.
pub fn init(directive: &str) -> bool {
    let mut filter = EnvFilter::from_default_env();
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_DIRECTIVE.parse());
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_targets_this_crate() {
        assert!(DEFAULT_DIRECTIVE.parse::<Directive>().is_ok());
        assert!(DEFAULT_DIRECTIVE.starts_with(concat!(env!("CARGO_CRATE_NAME"), "=")));
    }

    #[test]
    fn init_twice_does_not_panic() {
        let _ = init("jotbook_core=debug");
        assert!(!init(DEFAULT_DIRECTIVE));
    }
}
