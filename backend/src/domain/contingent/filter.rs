//! Name filter shared by paged and unbounded listings.

/// Case-sensitive substring filter on contingent names.
///
/// A blank filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFilter(Option<String>);

impl NameFilter {
    /// Build a filter from the raw query value.
    pub fn new(raw: Option<String>) -> Self {
        Self(raw.filter(|value| !value.trim().is_empty()))
    }

    /// Filter that matches everything.
    pub const fn all() -> Self {
        Self(None)
    }

    /// The substring being searched for, if any.
    pub fn needle(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// SQL `LIKE` pattern with `\`, `%` and `_` escaped.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::NameFilter;
    ///
    /// let filter = NameFilter::new(Some("50%_off".to_owned()));
    /// assert_eq!(filter.like_pattern().as_deref(), Some("%50\\%\\_off%"));
    /// ```
    #[must_use]
    pub fn like_pattern(&self) -> Option<String> {
        self.0.as_deref().map(|needle| {
            let mut pattern = String::with_capacity(needle.len() + 2);
            pattern.push('%');
            for ch in needle.chars() {
                if matches!(ch, '\\' | '%' | '_') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }

    /// Whether `name` satisfies the filter.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.0.as_deref().is_none_or(|needle| name.contains(needle))
    }
}
