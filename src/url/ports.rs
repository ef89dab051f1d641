//! Well-known ports for common schemes.

/// Schemes and the port they are usually contacted on.
const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("dav", 9800),
    ("ftp", 21),
    ("ftps", 990),
    ("git", 9418),
    ("http", 80),
    ("https", 443),
    ("svn", 3690),
    // sub-protocols of http
    ("ws", 80),
    ("wss", 443),
];

/// Return the default port for `scheme`, matched case-insensitively.
///
/// # Examples
///
/// ```
/// use urlrec::default_port;
///
/// assert_eq!(default_port("https"), Some(443));
/// assert_eq!(default_port("HTTP"), Some(80));
/// assert_eq!(default_port("gopher"), None);
/// ```
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}
