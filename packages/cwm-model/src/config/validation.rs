//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use cwm_model::config::Validatable;
///
/// fn load<C: Validatable>(config: C) -> Result<C, ConfigError> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Extension trait for validating collections of configs
pub trait ValidatableCollection {
    /// Validate all configs in collection
    fn validate_all(&self) -> ConfigResult<()>;
}

impl<T: Validatable> ValidatableCollection for Vec<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        for config in self {
            config.validate()?;
        }
        Ok(())
    }
}

impl<T: Validatable> ValidatableCollection for Option<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        if let Some(config) = self {
            config.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    struct Limit(usize);

    impl Validatable for Limit {
        fn validate(&self) -> ConfigResult<()> {
            if self.0 > 10 {
                return Err(ConfigError::range_with_hint("limit", self.0, 0, 10, ""));
            }
            Ok(())
        }
    }

    #[test]
    fn test_collection_validation() {
        assert!(vec![Limit(1), Limit(2)].validate_all().is_ok());
        assert!(vec![Limit(1), Limit(20)].validate_all().is_err());
        assert!(None::<Limit>.validate_all().is_ok());
        assert!(Some(Limit(11)).validate_all().is_err());
        assert_eq!(Limit(1).config_name(), "Config");
    }
}
