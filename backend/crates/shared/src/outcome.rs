//! Outcome helpers
//!
//! `Result<T, E>` already is the success/failure union: exactly one branch is
//! populated and `map` passes failures through untouched. This module adds the
//! named factories and the eliminators used at orchestration boundaries.
//!
//! ```
//! use kernel::outcome::{OutcomeExt, failure, success};
//!
//! let doubled = success::<i32, String>(21).map(|x| x * 2);
//! assert_eq!(doubled.fold(|v| v, |_| 0), 42);
//!
//! let failed = failure::<i32, _>("boom".to_string()).flat_map(|x| success(x + 1));
//! assert!(failed.is_failure());
//! ```

/// Success branch
#[inline]
pub fn success<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Failure branch
#[inline]
pub fn failure<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Eliminators and chaining on `Result`
pub trait OutcomeExt<T, E>: Sized {
    fn is_success(&self) -> bool;

    fn is_failure(&self) -> bool;

    /// Collapse into one value; exactly one handler runs.
    fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R;

    /// Chain a dependent fallible step; `f` is never called on failure.
    fn flat_map<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E>;
}

impl<T, E> OutcomeExt<T, E> for Result<T, E> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_err()
    }

    #[inline]
    fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_failure: impl FnOnce(E) -> R) -> R {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    #[inline]
    fn flat_map<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        self.and_then(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::domain_error::DomainError;
    use std::cell::Cell;

    #[test]
    fn test_map_then_fold_applies_function() {
        let f = |x: i32| x * 3 + 1;
        for x in [-5, 0, 7, 1000] {
            let folded = success::<_, DomainError>(x).map(f).fold(|s| s, |_| i32::MIN);
            assert_eq!(folded, f(x));
        }
    }

    #[test]
    fn test_map_leaves_failure_unchanged() {
        let err = DomainError::conflict("taken");
        let mapped = failure::<i32, _>(err.clone()).map(|x| x + 1);
        assert_eq!(mapped, Err(err));
    }

    #[test]
    fn test_flat_map_short_circuits() {
        let calls = Cell::new(0);
        let result = failure::<i32, _>(DomainError::forbidden("no")).flat_map(|x| {
            calls.set(calls.get() + 1);
            success(x)
        });
        assert!(result.is_failure());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_flat_map_chains_on_success() {
        let result = success::<i32, DomainError>(2)
            .flat_map(|x| success(x * 10))
            .flat_map(|x| {
                if x > 10 {
                    failure(DomainError::business_rule("limit", "too big"))
                } else {
                    success(x)
                }
            });
        assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
    }

    #[test]
    fn test_fold_invokes_exactly_one_handler() {
        let hits = Cell::new((0, 0));
        let bump_ok = |_: i32| hits.set((hits.get().0 + 1, hits.get().1));
        let bump_err = |_: DomainError| hits.set((hits.get().0, hits.get().1 + 1));

        success(1).fold(bump_ok, bump_err);
        assert_eq!(hits.get(), (1, 0));

        let bump_ok = |_: i32| hits.set((hits.get().0 + 1, hits.get().1));
        let bump_err = |_: DomainError| hits.set((hits.get().0, hits.get().1 + 1));
        failure(DomainError::unauthorized("who")).fold(bump_ok, bump_err);
        assert_eq!(hits.get(), (1, 1));
    }

    #[test]
    fn test_predicates() {
        let ok: Result<(), DomainError> = success(());
        assert!(ok.is_success() && !ok.is_failure());
    }
}
