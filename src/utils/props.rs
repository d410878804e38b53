// ========================================
// PROP FORWARDING
// ========================================

use std::collections::HashSet;

/// Set of attribute names a wrapping component consumes itself.
/// Anything outside the set is forwarded to the underlying element.
#[derive(Debug, Clone, Default)]
pub struct PropFilter {
    excluded: HashSet<String>,
}

impl PropFilter {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            excluded: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` iff `key` is not one of the excluded names.
    pub fn should_forward(&self, key: &str) -> bool {
        !self.excluded.contains(key)
    }

    /// Splits attributes into `(forwarded, consumed)`, keeping input order on both sides.
    pub fn partition<I, K, V>(&self, attrs: I) -> (Vec<(K, V)>, Vec<(K, V)>)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        attrs
            .into_iter()
            .partition(|(key, _)| self.should_forward(key.as_ref()))
    }
}

/// Builds the key set once and returns a predicate over candidate names.
pub fn should_not_forward_props_with_keys<I, K>(keys: I) -> impl Fn(&str) -> bool + Clone
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let filter = PropFilter::new(keys);
    move |key: &str| filter.should_forward(key)
}
