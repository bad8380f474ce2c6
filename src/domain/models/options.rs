use crate::domain::errors::{AllowRange, ConfigError, ConfigResult};

/// What an accessor does when the variable is absent or empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
    /// Fail with [`ConfigError::NotDefined`].
    Required,
    /// Substitute this value. It is returned as-is, without validation.
    Default(T),
    /// Return no value (`None` for scalars, an empty `Vec` for arrays).
    AllowUndefined,
}

impl<T> Default for Fallback<T> {
    fn default() -> Self {
        Self::Required
    }
}

impl<T> Fallback<T> {
    /// Resolve the policy for a variable that was not provided.
    pub fn resolve_absent(self, key: &str) -> ConfigResult<Option<T>> {
        match self {
            Self::Default(value) => {
                tracing::debug!(key, "environment variable not provided, using default");
                Ok(Some(value))
            }
            Self::AllowUndefined => {
                tracing::debug!(key, "environment variable not provided, allowed undefined");
                Ok(None)
            }
            Self::Required => Err(ConfigError::not_defined(key)),
        }
    }
}

/// Validation applied to a provided numeric value.
///
/// A list and a range are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumberConstraint {
    #[default]
    None,
    List(Vec<f64>),
    Range(AllowRange),
}

macro_rules! fallback_builders {
    ($options:ty, $value:ty) => {
        impl $options {
            /// Fail when the variable is not provided. This is the default.
            #[must_use]
            pub fn required(mut self) -> Self {
                self.fallback = Fallback::Required;
                self
            }

            /// Use `value` when the variable is not provided.
            #[must_use]
            pub fn with_default(mut self, value: impl Into<$value>) -> Self {
                self.fallback = Fallback::Default(value.into());
                self
            }

            /// Accept a variable that is not provided.
            #[must_use]
            pub fn allow_undefined(mut self) -> Self {
                self.fallback = Fallback::AllowUndefined;
                self
            }
        }
    };
}

/// Options for boolean accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanOptions {
    pub fallback: Fallback<bool>,
}

/// Options for string accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringOptions {
    pub fallback: Fallback<String>,
    pub allow_list: Option<Vec<String>>,
}

/// Options for number accessors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberOptions {
    pub fallback: Fallback<f64>,
    pub constraint: NumberConstraint,
}

/// Options for string array accessors. The allow list applies per element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringArrayOptions {
    pub fallback: Fallback<Vec<String>>,
    pub allow_list: Option<Vec<String>>,
}

/// Options for number array accessors. The constraint applies per element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberArrayOptions {
    pub fallback: Fallback<Vec<f64>>,
    pub constraint: NumberConstraint,
}

fallback_builders!(BooleanOptions, bool);
fallback_builders!(StringOptions, String);
fallback_builders!(NumberOptions, f64);
fallback_builders!(StringArrayOptions, Vec<String>);
fallback_builders!(NumberArrayOptions, Vec<f64>);

impl BooleanOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allow_list<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl StringArrayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allow_list<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

impl NumberOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any range set earlier.
    #[must_use]
    pub fn allow_list(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.constraint = NumberConstraint::List(values.into_iter().collect());
        self
    }

    /// Inclusive on both ends. Replaces any list set earlier.
    #[must_use]
    pub fn allow_range(mut self, min: f64, max: f64) -> Self {
        self.constraint = NumberConstraint::Range(AllowRange::new(min, max));
        self
    }
}

impl NumberArrayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any range set earlier.
    #[must_use]
    pub fn allow_list(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.constraint = NumberConstraint::List(values.into_iter().collect());
        self
    }

    /// Inclusive on both ends. Replaces any list set earlier.
    #[must_use]
    pub fn allow_range(mut self, min: f64, max: f64) -> Self {
        self.constraint = NumberConstraint::Range(AllowRange::new(min, max));
        self
    }
}
