//! Rebuilding URL strings from a subset of record components.

use crate::core::canonical::canonicalize_path;
use crate::types::{Components, SerializeOptions};
use crate::url::ports::default_port;
use crate::url::record::UrlRecord;

/// Assemble the components of `record` selected by `mask`.
///
/// Components are always emitted in the same order:
/// `scheme:` `//` `user[:pass]@` `host` `:port` `path` `?query` `#fragment`.
/// The `//` marker and the host are written unconditionally, and a literal
/// `/` stands in for the path when it is excluded or missing. The password
/// is only written together with a non-empty user.
pub fn serialize(record: &UrlRecord, mask: Components, options: &SerializeOptions) -> String {
    let mut url = String::new();

    if let Some(scheme) = included(mask, Components::SCHEME, record.scheme.as_deref()) {
        url.push_str(scheme);
        url.push(':');
    }

    url.push_str("//");

    if let Some(user) = included(mask, Components::USER, record.user.as_deref()) {
        url.push_str(user);

        if let Some(pass) = included(mask, Components::PASS, record.pass.as_deref()) {
            url.push(':');
            url.push_str(pass);
        }

        url.push('@');
    }

    url.push_str(record.host.as_deref().unwrap_or_default());

    if let Some(port) = record.port.filter(|_| mask.contains(Components::PORT)) {
        let default = record.scheme.as_deref().and_then(default_port);

        if default != Some(port) || !options.skip_default_port {
            url.push(':');
            url.push_str(&port.to_string());
        }
    }

    match included(mask, Components::PATH, record.path.as_deref()) {
        Some(path) if options.canonicalize_path => url.push_str(&canonicalize_path(path)),
        Some(path) => url.push_str(path),
        None => url.push('/'),
    }

    if mask.contains(Components::QUERY) && !record.query.is_empty() {
        url.push('?');
        url.push_str(&record.query.to_string());
    }

    if let Some(fragment) = included(mask, Components::FRAGMENT, record.fragment.as_deref()) {
        url.push('#');
        url.push_str(fragment);
    }

    url
}

/// The component value if `flag` is part of `mask` and the value is non-empty.
fn included<'a>(mask: Components, flag: Components, value: Option<&'a str>) -> Option<&'a str> {
    value.filter(|value| mask.contains(flag) && !value.is_empty())
}
