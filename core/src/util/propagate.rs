use std::panic;

use crate::failure::Classify;

/// Re-raise `failure` if it is unchecked, or else return it as is.
///
/// Unchecked failures ([`FailureKind::Logic`](crate::FailureKind::Logic) and
/// [`FailureKind::Environment`](crate::FailureKind::Environment)) unwind with
/// `failure` itself as the panic payload, so a `catch_unwind` further up can
/// downcast it back to `E` unchanged. With `panic = "abort"` the process
/// aborts instead.
///
/// # Example
///
/// ```
/// use mu_core::{Failure, propagate_if_unchecked};
///
/// let failure = propagate_if_unchecked(Failure::checked("file not found"));
/// assert_eq!(failure.message(), "file not found");
///
/// let payload = std::panic::catch_unwind(|| {
///     propagate_if_unchecked(Failure::logic("index out of range"))
/// })
/// .unwrap_err();
/// assert_eq!(
///     payload.downcast_ref::<Failure>(),
///     Some(&Failure::logic("index out of range"))
/// );
/// ```
pub fn propagate_if_unchecked<E>(failure: E) -> E
where
    E: Classify + Send + 'static,
{
    let kind = failure.kind();
    if kind.is_unchecked() {
        tracing::trace!(%kind, "Re-raising unchecked failure");
        panic::resume_unwind(Box::new(failure));
    }
    failure
}

mod sealed {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}

/// Applies [`propagate_if_unchecked`] to the error of a `Result`.
pub trait PropagateExt: sealed::Sealed {
    /// Re-raise an unchecked error, leave `Ok` and checked errors untouched.
    fn propagate_unchecked(self) -> Self;
}

impl<T, E> PropagateExt for Result<T, E>
where
    E: Classify + Send + 'static,
{
    fn propagate_unchecked(self) -> Self {
        self.map_err(propagate_if_unchecked)
    }
}
