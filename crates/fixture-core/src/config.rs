//! Listen port selection from the environment
//!
//! Fixtures are configured entirely through environment variables; the
//! one every fixture shares is the listen port. Values are read once at
//! process start and never mutated.

use std::env;

use crate::error::{FixtureError, Result};

/// Environment variable holding the listen port
pub const PORT_VAR: &str = "PORT";

/// Read the listen port from `PORT`.
///
/// Fails when the variable is unset or does not parse as a port number,
/// so a misconfigured deployment dies at startup instead of binding
/// somewhere unexpected.
pub fn required_port() -> Result<u16> {
    match env::var(PORT_VAR) {
        Ok(raw) => parse_port(&raw),
        Err(env::VarError::NotPresent) => Err(FixtureError::MissingEnv(PORT_VAR)),
        Err(env::VarError::NotUnicode(_)) => Err(FixtureError::InvalidPort {
            name: PORT_VAR,
            value: "<non-unicode>".to_string(),
        }),
    }
}

/// Read the listen port from `PORT`, falling back to `default` when the
/// variable is unset.
///
/// A value that is present but invalid is still an error.
pub fn port_or(default: u16) -> Result<u16> {
    match env::var(PORT_VAR) {
        Ok(raw) => parse_port(&raw),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(env::VarError::NotUnicode(_)) => Err(FixtureError::InvalidPort {
            name: PORT_VAR,
            value: "<non-unicode>".to_string(),
        }),
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| FixtureError::InvalidPort {
            name: PORT_VAR,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_accepts_valid_values() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert_eq!(parse_port("0").unwrap(), 0);
        assert_eq!(parse_port(" 9000 ").unwrap(), 9000);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        assert!(parse_port("").is_err());
        assert!(parse_port("eighty").is_err());
        assert!(parse_port("-1").is_err());
        assert!(parse_port("70000").is_err());
    }

    // Environment lookups share the process-wide PORT variable, so they
    // are exercised in a single test to keep parallel test threads from
    // stepping on each other.
    #[test]
    fn test_port_lookup_from_environment() {
        env::remove_var(PORT_VAR);
        assert!(matches!(
            required_port(),
            Err(FixtureError::MissingEnv(PORT_VAR))
        ));
        assert_eq!(port_or(8080).unwrap(), 8080);

        env::set_var(PORT_VAR, "3000");
        assert_eq!(required_port().unwrap(), 3000);
        assert_eq!(port_or(8080).unwrap(), 3000);

        env::set_var(PORT_VAR, "not-a-port");
        assert!(required_port().is_err());
        assert!(port_or(8080).is_err());

        env::remove_var(PORT_VAR);
    }
}
