//! `corbaname:` lookup strings.

use std::fmt;
use std::str::FromStr;

use super::NamingError;

/// Transport/protocol prefix of every lookup string.
pub const CORBANAME_PREFIX: &str = "corbaname:iiop:";

/// Location of a named object: `corbaname:iiop:<host>:<port>#<name>`.
///
/// The port is kept as configured (a string); it is never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorbaName {
    pub host: String,
    pub port: String,
    pub name: String,
}

impl CorbaName {
    pub fn new(host: impl Into<String>, port: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            name: name.into(),
        }
    }

    /// Parse a lookup string. Returns `None` if any part is missing.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.strip_prefix(CORBANAME_PREFIX)?;
        let (address, name) = rest.split_once('#')?;
        let (host, port) = address.rsplit_once(':')?;
        if host.is_empty() || port.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(host, port, name))
    }
}

impl fmt::Display for CorbaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}#{}",
            CORBANAME_PREFIX, self.host, self.port, self.name
        )
    }
}

impl FromStr for CorbaName {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| NamingError::InvalidName(s.to_string()))
    }
}
