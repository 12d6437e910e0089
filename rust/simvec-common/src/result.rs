pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks an index argument against an exclusive upper bound, returning
/// an `InvalidArgument` error from the enclosing function when it fails.
///
/// ```
/// fn check(position: usize, size: usize) -> simvec_common::Result<()> {
///     simvec_common::verify_index!(position, size + 1);
///     Ok(())
/// }
///
/// assert!(check(2, 2).is_ok());
/// assert!(check(3, 2).is_err());
/// ```
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $bound:expr) => {{
        let index: usize = $index;
        let bound: usize = $bound;
        $crate::result::verify_arg(index < bound, stringify!($index), || {
            format!("{} < {} (got {index}, bound {bound})", stringify!($index), stringify!($bound))
        })?;
    }};
}

#[inline]
pub fn verify_arg<F>(predicate: bool, name: &str, message: F) -> Result<()>
where
    F: FnOnce() -> String,
{
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, &message())
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}
