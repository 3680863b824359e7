//! Helper functions for building continuation sides.

/// Returns the value unchanged.
///
/// This is the plain-function counterpart of [`Identity`](super::Identity).
/// It is handy with [`Just::map`](crate::control::Just::map) and friends,
/// where the input type is already fixed by the container:
///
/// ```
/// use chainlift::compose::identity;
/// use chainlift::control::Just;
///
/// assert_eq!(Just::new(42).map(identity), Just::new(42));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_owned_value() {
        assert_eq!(identity(String::from("kept")), "kept");
    }
}
