//! Named, typed environment variables

use super::EnvironmentProvider;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;
use url::Url;

/// Errors raised while reading typed environment values.
///
/// Messages name the variable but never echo its value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("Missing required environment variable: {0}")]
    MissingValue(String),

    #[error("Environment variable {name} is not a valid {expected}")]
    ConversionFailure { name: String, expected: &'static str },
}

/// Types that can be parsed out of an environment variable's text.
pub trait FromEnvValue: Sized {
    /// Human-readable type name used in error messages.
    const TYPE_NAME: &'static str;

    fn from_env_value(raw: &str) -> Option<Self>;
}

impl FromEnvValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_env_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromEnvValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    /// Accepts `true`/`false` in any letter case.
    fn from_env_value(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl FromEnvValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_env_value(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl FromEnvValue for Url {
    const TYPE_NAME: &'static str = "URL";

    fn from_env_value(raw: &str) -> Option<Self> {
        Url::parse(raw).ok()
    }
}

/// The name of an environment variable together with the type its value
/// should be read as.
///
/// ```
/// use site_extras::env::{EnvironmentProviderExt, EnvironmentVariable, MemoryEnvironment};
///
/// const PORT: EnvironmentVariable<i64> = EnvironmentVariable::new("PORT");
///
/// let env: MemoryEnvironment = [("PORT", "8080")].into_iter().collect();
/// assert_eq!(env.value(&PORT).unwrap(), 8080);
/// ```
pub struct EnvironmentVariable<T> {
    name: Cow<'static, str>,
    _type: PhantomData<fn() -> T>,
}

impl<T> EnvironmentVariable<T> {
    pub const fn new(name: &'static str) -> Self {
        Self { name: Cow::Borrowed(name), _type: PhantomData }
    }

    /// Create a variable whose name is only known at runtime.
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Cow::Owned(name.into()), _type: PhantomData }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for EnvironmentVariable<T> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), _type: PhantomData }
    }
}

impl<T> PartialEq for EnvironmentVariable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for EnvironmentVariable<T> {}

impl<T> fmt::Debug for EnvironmentVariable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnvironmentVariable").field(&self.name).finish()
    }
}

impl<T> From<&str> for EnvironmentVariable<T> {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl<T> From<String> for EnvironmentVariable<T> {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

/// Typed lookups on any [`EnvironmentProvider`].
pub trait EnvironmentProviderExt: EnvironmentProvider {
    /// Read a required variable.
    fn value<T: FromEnvValue>(&self, variable: &EnvironmentVariable<T>) -> Result<T, EnvironmentError> {
        let raw = self
            .var(variable.name())
            .ok_or_else(|| EnvironmentError::MissingValue(variable.name().to_string()))?;
        convert(variable, &raw)
    }

    /// Read an optional variable. A value that is present but cannot be
    /// converted is still an error.
    fn optional_value<T: FromEnvValue>(
        &self,
        variable: &EnvironmentVariable<T>,
    ) -> Result<Option<T>, EnvironmentError> {
        self.var(variable.name()).map(|raw| convert(variable, &raw)).transpose()
    }
}

impl<P: EnvironmentProvider + ?Sized> EnvironmentProviderExt for P {}

fn convert<T: FromEnvValue>(variable: &EnvironmentVariable<T>, raw: &str) -> Result<T, EnvironmentError> {
    T::from_env_value(raw).ok_or_else(|| EnvironmentError::ConversionFailure {
        name: variable.name().to_string(),
        expected: T::TYPE_NAME,
    })
}
