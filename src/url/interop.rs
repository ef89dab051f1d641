//! Conversions between [`UrlRecord`] and [`url::Url`].

use url::Url;

use crate::error::UrlError;
use crate::url::record::UrlRecord;

impl TryFrom<&Url> for UrlRecord {
    type Error = UrlError;

    /// Copy the components of a WHATWG-parsed URL into a record.
    ///
    /// Fails with [`UrlError::InvalidUrl`] for URLs without a host, such as
    /// `mailto:` or `data:` URLs. Ports equal to the scheme default are
    /// already dropped by the `url` crate and stay absent here.
    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| UrlError::invalid_url(format!("URL has no host: {}", url)))?;

        let mut record = UrlRecord::new();
        record.set_scheme(url.scheme()).set_host(host).set_path(url.path());

        if !url.username().is_empty() {
            record.set_user(url.username());
        }
        if let Some(password) = url.password() {
            record.set_pass(password);
        }
        if let Some(port) = url.port() {
            record.set_port(port)?;
        }
        if let Some(fragment) = url.fragment().filter(|fragment| !fragment.is_empty()) {
            record.set_fragment(fragment);
        }

        record.query_mut().extend(url.query_pairs());

        Ok(record)
    }
}

impl UrlRecord {
    /// Parse the full serialization of this record with the `url` crate.
    ///
    /// ```
    /// use urlrec::UrlRecord;
    ///
    /// let record = UrlRecord::parse("https://example.com/a/../b?q=1")?;
    /// let url = record.to_url()?;
    /// assert_eq!(url.as_str(), "https://example.com/b?q=1");
    /// # Ok::<(), urlrec::UrlError>(())
    /// ```
    pub fn to_url(&self) -> Result<Url, UrlError> {
        Ok(Url::parse(&self.to_string())?)
    }
}
