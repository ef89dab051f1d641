//! Component inclusion masks and serialization options.

use std::fmt;
use std::ops::{BitOr, BitOrAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UrlError;

/// A set of URL components selected for serialization.
///
/// The bit values are stable and may be persisted or computed with:
///
/// | Component     | Bits |
/// |---------------|------|
/// | `NONE`        | 0    |
/// | `SCHEME`      | 1    |
/// | `USER`        | 2    |
/// | `PASS`        | 4    |
/// | `CREDENTIALS` | 6    |
/// | `PORT`        | 8    |
/// | `PATH`        | 16   |
/// | `QUERY`       | 32   |
/// | `FRAGMENT`    | 64   |
/// | `ALL`         | 127  |
///
/// `|` forms the union of two sets and `-` removes components, so
/// `Components::ALL - Components::PASS` keeps everything but the password.
///
/// ```
/// use urlrec::Components;
///
/// let mask = Components::ALL - Components::FRAGMENT - Components::QUERY;
/// assert_eq!(mask.bits(), 31);
/// assert!(mask.contains(Components::PATH));
/// assert!(!mask.contains(Components::QUERY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Components(u8);

impl Components {
    pub const NONE: Components = Components(0);
    pub const SCHEME: Components = Components(1 << 0);
    pub const USER: Components = Components(1 << 1);
    pub const PASS: Components = Components(1 << 2);
    pub const CREDENTIALS: Components = Components(Self::USER.0 | Self::PASS.0);
    pub const PORT: Components = Components(1 << 3);
    pub const PATH: Components = Components(1 << 4);
    pub const QUERY: Components = Components(1 << 5);
    pub const FRAGMENT: Components = Components(1 << 6);
    pub const ALL: Components = Components(0x7f);

    /// Build a mask from raw bits, rejecting anything outside `ALL`.
    pub fn from_bits(bits: u32) -> Result<Self, UrlError> {
        if bits > Self::ALL.0 as u32 {
            return Err(UrlError::InvalidMask(bits));
        }
        Ok(Components(bits as u8))
    }

    /// Raw bit value of this mask.
    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    /// True if every component in `other` is also in `self`.
    pub const fn contains(self, other: Components) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for Components {
    fn default() -> Self {
        Components::ALL
    }
}

impl BitOr for Components {
    type Output = Components;

    fn bitor(self, rhs: Components) -> Components {
        Components(self.0 | rhs.0)
    }
}

impl BitOrAssign for Components {
    fn bitor_assign(&mut self, rhs: Components) {
        self.0 |= rhs.0;
    }
}

impl Sub for Components {
    type Output = Components;

    fn sub(self, rhs: Components) -> Components {
        Components(self.0 & !rhs.0)
    }
}

impl SubAssign for Components {
    fn sub_assign(&mut self, rhs: Components) {
        self.0 &= !rhs.0;
    }
}

impl TryFrom<u32> for Components {
    type Error = UrlError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Components::from_bits(bits)
    }
}

impl From<Components> for u32 {
    fn from(mask: Components) -> u32 {
        mask.bits()
    }
}

impl FromStr for Components {
    type Err = UrlError;

    /// Parse a single component name such as `"path"` or `"credentials"`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Components::NONE),
            "scheme" => Ok(Components::SCHEME),
            "user" => Ok(Components::USER),
            "pass" | "password" => Ok(Components::PASS),
            "credentials" => Ok(Components::CREDENTIALS),
            "port" => Ok(Components::PORT),
            "path" => Ok(Components::PATH),
            "query" => Ok(Components::QUERY),
            "fragment" => Ok(Components::FRAGMENT),
            "all" => Ok(Components::ALL),
            _ => Err(UrlError::UnknownComponent(name.to_string())),
        }
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options controlling how a record is turned back into a string.
///
/// Missing fields fall back to their defaults when deserialized, so partial
/// configuration documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Leave out the port when it equals the scheme's well-known port.
    pub skip_default_port: bool,
    /// Collapse `.` and `..` segments in the emitted path.
    pub canonicalize_path: bool,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_default_port(mut self, skip: bool) -> Self {
        self.skip_default_port = skip;
        self
    }

    pub fn with_canonicalize_path(mut self, canonicalize: bool) -> Self {
        self.canonicalize_path = canonicalize;
        self
    }
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            skip_default_port: true,
            canonicalize_path: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_bits() {
        assert_eq!(Components::NONE.bits(), 0);
        assert_eq!(Components::SCHEME.bits(), 1);
        assert_eq!(Components::USER.bits(), 2);
        assert_eq!(Components::PASS.bits(), 4);
        assert_eq!(Components::CREDENTIALS.bits(), 6);
        assert_eq!(Components::PORT.bits(), 8);
        assert_eq!(Components::PATH.bits(), 16);
        assert_eq!(Components::QUERY.bits(), 32);
        assert_eq!(Components::FRAGMENT.bits(), 64);
        assert_eq!(Components::ALL.bits(), 127);
    }

    #[test]
    fn test_union_and_difference() {
        let mask = Components::SCHEME | Components::PATH;
        assert_eq!(mask.bits(), 17);

        assert_eq!((Components::ALL - Components::CREDENTIALS).bits(), 121);
        assert_eq!((Components::USER | Components::PASS), Components::CREDENTIALS);

        // Removing an absent component leaves the mask unchanged
        assert_eq!(Components::PATH - Components::QUERY, Components::PATH);
        assert_eq!(Components::NONE - Components::SCHEME, Components::NONE);
    }

    #[test]
    fn test_assign_operators() {
        let mut mask = Components::NONE;
        mask |= Components::QUERY;
        mask |= Components::FRAGMENT;
        assert_eq!(mask.bits(), 96);

        mask -= Components::QUERY;
        assert_eq!(mask, Components::FRAGMENT);
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(Components::from_bits(0).unwrap(), Components::NONE);
        assert_eq!(Components::from_bits(127).unwrap(), Components::ALL);
        assert_eq!(Components::from_bits(128), Err(UrlError::InvalidMask(128)));
        assert_eq!(Components::try_from(u32::MAX), Err(UrlError::InvalidMask(u32::MAX)));
    }

    #[test]
    fn test_contains() {
        assert!(Components::ALL.contains(Components::CREDENTIALS));
        assert!(Components::CREDENTIALS.contains(Components::PASS));
        assert!(!Components::USER.contains(Components::CREDENTIALS));
        assert!(Components::NONE.is_empty());
    }

    #[test]
    fn test_component_names() {
        assert_eq!("path".parse::<Components>().unwrap(), Components::PATH);
        assert_eq!("Fragment".parse::<Components>().unwrap(), Components::FRAGMENT);
        assert_eq!("credentials".parse::<Components>().unwrap(), Components::CREDENTIALS);
        assert_eq!(
            "host".parse::<Components>(),
            Err(UrlError::UnknownComponent("host".to_string()))
        );
    }

    #[test]
    fn test_serialize_options_default() {
        let options = SerializeOptions::default();
        assert!(options.skip_default_port);
        assert!(options.canonicalize_path);

        let raw = SerializeOptions::new()
            .with_skip_default_port(false)
            .with_canonicalize_path(false);
        assert!(!raw.skip_default_port);
        assert!(!raw.canonicalize_path);
    }
}
