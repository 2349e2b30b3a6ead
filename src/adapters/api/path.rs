use std::fmt;

/// A request path relative to the API root: `model/segment/.../segment?query`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiPath {
    segments: Vec<String>,
    params: Vec<(String, String)>,
}

impl ApiPath {
    pub fn new(model: &str) -> Self {
        Self {
            segments: vec![model.trim_matches('/').to_string()],
            params: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: impl fmt::Display) -> Self {
        self.segments
            .push(urlencoding::encode(&segment.to_string()).into_owned());
        self
    }

    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn opt_param<V: fmt::Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Array parameters use the `key[]=value` form.
    pub fn array_param<V: fmt::Display>(self, key: &str, values: &[V]) -> Self {
        let key = format!("{key}[]");
        values.iter().fold(self, |path, value| path.param(&key, value))
    }

    fn query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        format!(
            "?{}",
            self.params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&")
        )
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.segments.join("/"), self.query_string())
    }
}

/// Joins the API root and a relative path with exactly one slash between them.
pub fn url_join(api_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        api_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
