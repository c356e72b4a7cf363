use super::Request;
use smallvec::SmallVec;
use std::sync::Arc;

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage.
///
/// Names come from the static route table, so they are shared `Arc<str>`;
/// values are per-request data from the URL.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// Match context: the parameters a router extracted for the matched route.
///
/// Routers attach it to the request extensions before invoking a handler.
/// Generated unmarshal functions treat its absence as a fatal wiring error.
#[derive(Debug, Clone, Default)]
pub struct RouteParams {
    params: ParamVec,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a matched parameter.
    pub fn push(&mut self, name: impl Into<Arc<str>>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// The match context attached to a request, if any.
    #[must_use]
    pub fn from_request(req: &Request) -> Option<&RouteParams> {
        req.extensions().get::<RouteParams>()
    }

    /// Attach this match context to a request, replacing any previous one.
    pub fn attach(self, req: &mut Request) {
        req.extensions_mut().insert(self);
    }

    /// Parameters in match order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Get a parameter by name.
    ///
    /// Uses "last write wins" semantics when a name repeats.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<Arc<str>>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RouteParams::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}
