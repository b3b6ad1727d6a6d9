//! URL assembly for resource endpoints.

/// Normalizes a caller-supplied resource path: ensures a single leading
/// slash and no trailing one, so joining never doubles separators.
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Joins the configured base URL, the accumulated resource path and the
/// query parameters into the final request URL.
#[derive(Debug)]
pub(crate) struct UrlBuilder<'a> {
    base: &'a str,
    path: &'a str,
    query: Vec<(String, String)>,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(base: &'a str) -> Self {
        Self {
            base,
            path: "",
            query: Vec::new(),
        }
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = path;
        self
    }

    /// Add a query parameter; the value is percent-encoded at build time.
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn queries<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> String {
        let mut url = format!("{}{}", self.base, self.path);

        if !self.query.is_empty() {
            let query_string = self
                .query
                .into_iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }

        url
    }
}
