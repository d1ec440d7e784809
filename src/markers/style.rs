use std::fmt;
use std::sync::Arc;

/// A style parameter that is either fixed or derived from each marker's datum.
pub enum StyleValue<D, T> {
    Constant(T),
    Derived(Arc<dyn Fn(&D) -> T + Send + Sync>),
}

impl<D, T> StyleValue<D, T> {
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self::Constant(value)
    }

    #[must_use]
    pub fn derived(resolve: impl Fn(&D) -> T + Send + Sync + 'static) -> Self {
        Self::Derived(Arc::new(resolve))
    }

    #[must_use]
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Derived(_))
    }
}

impl<D, T: Clone> StyleValue<D, T> {
    /// Concrete value for one datum. Derived values call their function once.
    #[must_use]
    pub fn resolve(&self, datum: &D) -> T {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Derived(resolve) => resolve(datum),
        }
    }
}

impl<D, T: Clone> Clone for StyleValue<D, T> {
    fn clone(&self) -> Self {
        match self {
            Self::Constant(value) => Self::Constant(value.clone()),
            Self::Derived(resolve) => Self::Derived(Arc::clone(resolve)),
        }
    }
}

impl<D, T: fmt::Debug> fmt::Debug for StyleValue<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Derived(_) => f.write_str("Derived(<fn>)"),
        }
    }
}

impl<D, T> From<T> for StyleValue<D, T> {
    fn from(value: T) -> Self {
        Self::Constant(value)
    }
}

impl<D> From<&str> for StyleValue<D, String> {
    fn from(value: &str) -> Self {
        Self::Constant(value.to_owned())
    }
}
