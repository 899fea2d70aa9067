use std::any::Any;

use static_locals_runtime::{Coordinates, FileName, FuncName, LookupError, Registry, VarName};

/// Records `var` in the global registry under `name` at `at`.
///
/// Prefer [`track!`](crate::track!), which fills in `at` and registers only
/// once per call site. Calling this directly replaces whatever was tracked
/// under the same key.
pub fn track<T: Any + Send + Sync>(var: &'static T, name: impl Into<VarName>, at: Coordinates) {
    Registry::global().track(var, name, at)
}

pub fn get<T: Any>(
    file: impl Into<FileName>,
    func: impl Into<FuncName>,
    name: impl Into<VarName>,
) -> Option<&'static T> {
    Registry::global().get(file, func, name)
}

pub fn get_in<T: Any>(func: impl Into<FuncName>, name: impl Into<VarName>) -> Option<&'static T> {
    Registry::global().get_in(func, name)
}

pub fn get_named<T: Any>(name: impl Into<VarName>) -> Option<&'static T> {
    Registry::global().get_named(name)
}

pub fn try_get<T: Any>(
    file: impl Into<FileName>,
    func: impl Into<FuncName>,
    name: impl Into<VarName>,
) -> Result<&'static T, LookupError> {
    Registry::global().try_get(file, func, name)
}

pub fn try_get_in<T: Any>(
    func: impl Into<FuncName>,
    name: impl Into<VarName>,
) -> Result<&'static T, LookupError> {
    Registry::global().try_get_in(func, name)
}

pub fn try_get_named<T: Any>(name: impl Into<VarName>) -> Result<&'static T, LookupError> {
    Registry::global().try_get_named(name)
}

/// Borrows the tracked static labelled `name`.
///
/// Writes through the returned reference are writes to the static itself.
///
/// # Panics
///
/// If nothing is tracked under `name`, or it was tracked as another type.
#[track_caller]
pub fn get_ref<T: Any>(name: impl Into<VarName>) -> &'static T {
    match Registry::global().try_get_named(name) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Clones the tracked static labelled `name`.
///
/// # Panics
///
/// Same as [`get_ref`].
#[track_caller]
pub fn copy<T: Any + Clone>(name: impl Into<VarName>) -> T {
    get_ref::<T>(name).clone()
}
