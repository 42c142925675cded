//! Argument checks with descriptive failure messages.
//!
//! A [`Guard`] validates values against equality, ordering and range
//! conditions. Failures produce a [`GuardError`] whose message names the
//! parameter, its type (via the display-name cache) and the offending value:
//!
//! ```text
//! Parameter "count" (int) must be less than 10, was 12
//! ```

use core::fmt::Debug;

use tracing::debug;
use warden_types::{Describe, DisplayNames, TypeRegistry};
use zerocopy::{Immutable, IntoBytes};

use crate::{
    bitwise::{is_bitwise_equal, to_hex_string},
    error::GuardError,
    options::GuardOptions,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Argument,
    OutOfRange,
}

/// Validates arguments and reports failures as [`GuardError`]s.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use warden_core::Guard;
/// use warden_types::{DisplayNames, TypeRegistry};
///
/// let arena = Bump::new();
/// let registry = TypeRegistry::new(&arena);
/// let names = DisplayNames::new();
/// let guard = Guard::new(registry, &names);
///
/// assert!(guard.is_less_than(&3, &10, "count").is_ok());
///
/// let err = guard.is_less_than(&12, &10, "count").unwrap_err();
/// assert_eq!(err.to_string(), "Parameter \"count\" (int) must be less than 10, was 12");
/// ```
pub struct Guard<'g, 'a> {
    registry: &'a TypeRegistry<'a>,
    names: &'g DisplayNames<'a>,
    options: GuardOptions,
}

impl<'g, 'a> Guard<'g, 'a> {
    pub fn new(registry: &'a TypeRegistry<'a>, names: &'g DisplayNames<'a>) -> Self {
        Self::with_options(registry, names, GuardOptions::default())
    }

    pub fn with_options(
        registry: &'a TypeRegistry<'a>,
        names: &'g DisplayNames<'a>,
        options: GuardOptions,
    ) -> Self {
        Self {
            registry,
            names,
            options,
        }
    }

    // ========================================================================
    // Equality
    // ========================================================================

    pub fn is_default<T>(&self, value: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + Default + PartialEq + Debug,
    {
        let default = T::default();
        self.ensure::<T>(*value == default, name, Failure::Argument, || {
            format!("must be the default value {default:?}, was {value:?}")
        })
    }

    pub fn is_not_default<T>(&self, value: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + Default + PartialEq + Debug,
    {
        let default = T::default();
        self.ensure::<T>(*value != default, name, Failure::Argument, || {
            format!("must not be the default value {default:?}")
        })
    }

    pub fn is_equal_to<T>(&self, value: &T, target: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialEq + Debug + ?Sized,
    {
        self.ensure::<T>(value == target, name, Failure::Argument, || {
            format!("must be equal to {target:?}, was {value:?}")
        })
    }

    pub fn is_not_equal_to<T>(&self, value: &T, target: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialEq + Debug + ?Sized,
    {
        self.ensure::<T>(value != target, name, Failure::Argument, || {
            format!("must not be equal to {target:?}, was {value:?}")
        })
    }

    /// Checks that `value` has exactly the same bit pattern as `target`.
    ///
    /// Unlike [`Guard::is_equal_to`] this tells `0.0` from `-0.0` and accepts
    /// a NaN compared with an identical NaN.
    pub fn is_bitwise_equal_to<T>(
        &self,
        value: &T,
        target: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + IntoBytes + Immutable,
    {
        self.ensure::<T>(is_bitwise_equal(value, target), name, Failure::Argument, || {
            format!(
                "is not a bitwise match, was <{}> instead of <{}>",
                to_hex_string(value),
                to_hex_string(target)
            )
        })
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn is_less_than<T>(&self, value: &T, max: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value < max, name, Failure::OutOfRange, || {
            format!("must be less than {max:?}, was {value:?}")
        })
    }

    pub fn is_less_than_or_equal_to<T>(
        &self,
        value: &T,
        max: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value <= max, name, Failure::OutOfRange, || {
            format!("must be less than or equal to {max:?}, was {value:?}")
        })
    }

    pub fn is_greater_than<T>(&self, value: &T, min: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value > min, name, Failure::OutOfRange, || {
            format!("must be greater than {min:?}, was {value:?}")
        })
    }

    pub fn is_greater_than_or_equal_to<T>(
        &self,
        value: &T,
        min: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value >= min, name, Failure::OutOfRange, || {
            format!("must be greater than or equal to {min:?}, was {value:?}")
        })
    }

    // ========================================================================
    // Ranges
    // ========================================================================

    /// Checks `min <= value < max`.
    pub fn is_in_range<T>(&self, value: &T, min: &T, max: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(min <= value && value < max, name, Failure::OutOfRange, || {
            format!("must be in the range given by {min:?} and {max:?}, was {value:?}")
        })
    }

    pub fn is_not_in_range<T>(
        &self,
        value: &T,
        min: &T,
        max: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value < min || value >= max, name, Failure::OutOfRange, || {
            format!("must not be in the range given by {min:?} and {max:?}, was {value:?}")
        })
    }

    /// Checks `min < value < max`.
    pub fn is_between<T>(&self, value: &T, min: &T, max: &T, name: &str) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(min < value && value < max, name, Failure::OutOfRange, || {
            format!("must be between {min:?} and {max:?}, was {value:?}")
        })
    }

    pub fn is_not_between<T>(
        &self,
        value: &T,
        min: &T,
        max: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value <= min || value >= max, name, Failure::OutOfRange, || {
            format!("must not be between {min:?} and {max:?}, was {value:?}")
        })
    }

    /// Checks `min <= value <= max`.
    pub fn is_between_or_equal_to<T>(
        &self,
        value: &T,
        min: &T,
        max: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(min <= value && value <= max, name, Failure::OutOfRange, || {
            format!("must be between or equal to {min:?} and {max:?}, was {value:?}")
        })
    }

    pub fn is_not_between_or_equal_to<T>(
        &self,
        value: &T,
        min: &T,
        max: &T,
        name: &str,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + PartialOrd + Debug + ?Sized,
    {
        self.ensure::<T>(value < min || value > max, name, Failure::OutOfRange, || {
            format!("must not be between or equal to {min:?} and {max:?}, was {value:?}")
        })
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    #[inline]
    fn ensure<T>(
        &self,
        passed: bool,
        name: &str,
        failure: Failure,
        detail: impl FnOnce() -> String,
    ) -> Result<(), GuardError>
    where
        T: Describe<'a> + ?Sized,
    {
        if passed {
            return Ok(());
        }
        Err(self.fail::<T>(name, failure, detail()))
    }

    #[cold]
    fn fail<T>(&self, name: &str, failure: Failure, detail: String) -> GuardError
    where
        T: Describe<'a> + ?Sized,
    {
        let message = if self.options.show_types {
            let ty = self.names.type_string(self.registry.of::<T>());
            format!("Parameter \"{name}\" ({ty}) {detail}")
        } else {
            format!("Parameter \"{name}\" {detail}")
        };
        debug!(parameter = name, ?failure, message = %message, "Guard check failed");

        match failure {
            Failure::Argument => GuardError::argument(name, message),
            Failure::OutOfRange => GuardError::out_of_range(name, message),
        }
    }
}

/// Runs a [`Guard`] check, borrowing each argument and using the source
/// text of the checked value as the parameter name.
///
/// ```
/// use bumpalo::Bump;
/// use warden_core::{Guard, guard};
/// use warden_types::{DisplayNames, TypeRegistry};
///
/// let arena = Bump::new();
/// let registry = TypeRegistry::new(&arena);
/// let names = DisplayNames::new();
/// let g = Guard::new(registry, &names);
///
/// let retries = 7u8;
/// let err = guard!(g, is_in_range(retries, 0, 5)).unwrap_err();
/// assert_eq!(err.name(), "retries");
/// assert_eq!(
///     err.message(),
///     "Parameter \"retries\" (byte) must be in the range given by 0 and 5, was 7"
/// );
/// ```
#[macro_export]
macro_rules! guard {
    ($guard:expr, $check:ident($value:expr $(, $arg:expr)* $(,)?)) => {
        $guard.$check(&$value, $(&$arg,)* ::core::stringify!($value))
    };
}
