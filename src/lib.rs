//! A two-variant result container: either a [`Failure`] carrying an error value or a
//! [`Success`] carrying a value.
//!
//! Fallible steps compose with [`Result::map`] and [`Result::then`], and the outcome is only
//! observed through [`Result::extract`], which forces both cases to be handled:
//!
//! ```
//! use railway_result::{fail, succeed, Result};
//!
//! fn invert(x: f64) -> Result<&'static str, f64> {
//!     if x == 0.0 {
//!         fail("divide by zero")
//!     } else {
//!         succeed(1.0 / x)
//!     }
//! }
//!
//! let report = |x| {
//!     invert(x)
//!         .map(|y| y - 2.0)
//!         .then(invert)
//!         .extract(|err| err.to_string(), |y| format!("Result: {y}"))
//! };
//!
//! assert_eq!(report(0.25), "Result: 0.5");
//! assert_eq!(report(0.5), "divide by zero");
//! ```
#![cfg_attr(feature = "nightly", feature(try_trait_v2))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

use core::ops;

#[cfg(feature = "nightly")]
use core::convert::Infallible;
#[cfg(feature = "std")]
use core::fmt;

pub use core::result::Result::{self as StdResult, Err as StdErr, Ok as StdOk};

mod sealed {
    use super::StdResult;

    pub trait Sealed {}

    impl<V, E> Sealed for StdResult<V, E> {}
}

/// Lifts a [`StdResult`] into the railway.
pub trait StdResultExt: sealed::Sealed {
    type Success;
    type Failure;

    fn railway(self) -> Result<Self::Failure, Self::Success>;
}

impl<V, E> StdResultExt for StdResult<V, E> {
    type Success = V;
    type Failure = E;

    fn railway(self) -> Result<E, V> {
        Result::from_std(self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum Result<E, V> {
    Failure(E),
    Success(V),
}

pub use crate::Result::*;

/// Shorthand for [`Result::fail`].
pub fn fail<E, V>(error: E) -> Result<E, V> {
    Result::fail(error)
}

/// Shorthand for [`Result::succeed`].
pub fn succeed<E, V>(value: V) -> Result<E, V> {
    Result::succeed(value)
}

impl<E, V> Result<E, V> {
    pub fn fail(error: E) -> Self {
        Failure(error)
    }

    pub fn succeed(value: V) -> Self {
        Success(value)
    }

    pub fn from_std(value: StdResult<V, E>) -> Self {
        match value {
            StdOk(val) => Success(val),
            StdErr(err) => Failure(err),
        }
    }

    pub fn to_std(self) -> StdResult<V, E> {
        self.extract(StdErr, StdOk)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    pub fn is_success_and(self, f: impl FnOnce(V) -> bool) -> bool {
        self.success().map(f).unwrap_or(false)
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub fn is_failure_and(self, f: impl FnOnce(E) -> bool) -> bool {
        self.failure().map(f).unwrap_or(false)
    }

    pub fn success(self) -> Option<V> {
        self.extract(|_| None, Some)
    }

    pub fn failure(self) -> Option<E> {
        self.extract(Some, |_| None)
    }

    pub fn as_ref(&self) -> Result<&E, &V> {
        match self {
            Failure(err) => Failure(err),
            Success(val) => Success(val),
        }
    }

    pub fn as_deref(&self) -> Result<&E, &V::Target>
    where
        V: ops::Deref,
    {
        self.as_ref().map(|val| &**val)
    }

    fn map_both<F, W>(self, f: impl FnOnce(E) -> F, g: impl FnOnce(V) -> W) -> Result<F, W> {
        match self {
            Failure(err) => Failure(f(err)),
            Success(val) => Success(g(val)),
        }
    }

    /// Transforms the success value. A failure is carried through untouched and `f` is not
    /// called.
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Result<E, W> {
        self.map_both(|x| x, f)
    }

    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Result<F, V> {
        self.map_both(f, |x| x)
    }

    pub fn inspect(self, f: impl FnOnce(&V)) -> Self {
        self.map(|x| {
            f(&x);
            x
        })
    }

    pub fn inspect_failure(self, f: impl FnOnce(&E)) -> Self {
        self.map_failure(|x| {
            f(&x);
            x
        })
    }

    /// Chains a fallible step onto the success value, returning whatever `f` returns without
    /// wrapping it again. A failure short-circuits and `f` is not called.
    pub fn then<W>(self, f: impl FnOnce(V) -> Result<E, W>) -> Result<E, W> {
        match self {
            Failure(err) => Failure(err),
            Success(val) => f(val),
        }
    }

    pub fn and<W>(self, next: Result<E, W>) -> Result<E, W> {
        self.then(move |_| next)
    }

    /// Recovers from a failure. A success is carried through untouched and `f` is not called.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<F, V>) -> Result<F, V> {
        match self {
            Failure(err) => f(err),
            Success(val) => Success(val),
        }
    }

    /// Collapses the result into a plain value. Exactly one of `on_failure` and `on_success` is
    /// called.
    pub fn extract<W>(self, on_failure: impl FnOnce(E) -> W, on_success: impl FnOnce(V) -> W) -> W {
        match self {
            Failure(err) => on_failure(err),
            Success(val) => on_success(val),
        }
    }

    pub fn unwrap_or(self, default: V) -> V {
        self.unwrap_or_else(move |_| default)
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> V) -> V {
        self.extract(f, |x| x)
    }

    pub fn unwrap_or_default(self) -> V
    where
        V: Default,
    {
        self.unwrap_or_else(|_| V::default())
    }

    pub fn iter(&self) -> core::option::IntoIter<&V> {
        self.as_ref().success().into_iter()
    }
}

impl<'a, E, V> Result<E, &'a V> {
    pub fn copied(self) -> Result<E, V>
    where
        V: Copy,
    {
        self.map(|val| *val)
    }

    pub fn cloned(self) -> Result<E, V>
    where
        V: Clone,
    {
        self.map(|val| val.clone())
    }
}

impl<E, V> Result<E, Result<E, V>> {
    pub fn flatten(self) -> Result<E, V> {
        self.then(|x| x)
    }
}

impl<E, V> From<Result<E, V>> for StdResult<V, E> {
    fn from(value: Result<E, V>) -> Self {
        value.to_std()
    }
}

impl<E, V> From<StdResult<V, E>> for Result<E, V> {
    fn from(value: StdResult<V, E>) -> Self {
        Self::from_std(value)
    }
}

impl<E, V> IntoIterator for Result<E, V> {
    type Item = V;
    type IntoIter = core::option::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.success().into_iter()
    }
}

impl<'a, E, V> IntoIterator for &'a Result<E, V> {
    type Item = &'a V;
    type IntoIter = core::option::IntoIter<&'a V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug, V: std::process::Termination> std::process::Termination for Result<E, V> {
    fn report(self) -> std::process::ExitCode {
        std::process::Termination::report(self.to_std())
    }
}

#[cfg(feature = "nightly")]
impl<E, V> ops::Try for Result<E, V> {
    type Output = V;
    type Residual = Result<E, Infallible>;

    fn from_output(output: Self::Output) -> Self {
        Success(output)
    }

    fn branch(self) -> ops::ControlFlow<Self::Residual, Self::Output> {
        match self {
            Failure(err) => ops::ControlFlow::Break(Failure(err)),
            Success(val) => ops::ControlFlow::Continue(val),
        }
    }
}

#[cfg(feature = "nightly")]
impl<E, F: From<E>, W> ops::FromResidual<Result<E, Infallible>> for Result<F, W> {
    fn from_residual(residual: Result<E, Infallible>) -> Self {
        match residual {
            Failure(err) => Failure(err.into()),
            Success(infallible) => match infallible {},
        }
    }
}

// cross compatibility: -> StdResult<_, _>
#[cfg(feature = "nightly")]
impl<E, F: From<E>, W> ops::FromResidual<Result<E, Infallible>> for StdResult<W, F> {
    fn from_residual(residual: Result<E, Infallible>) -> Self {
        match residual {
            Failure(err) => StdErr(err.into()),
            Success(infallible) => match infallible {},
        }
    }
}

// cross compatibility: -> Result<_, _>
#[cfg(feature = "nightly")]
impl<E, F: From<E>, W> ops::FromResidual<StdResult<Infallible, E>> for Result<F, W> {
    fn from_residual(residual: StdResult<Infallible, E>) -> Self {
        match residual {
            StdOk(infallible) => match infallible {},
            StdErr(err) => Failure(err.into()),
        }
    }
}
