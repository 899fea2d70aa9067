// ── Tracking compiled out ───────────────────────────────
//
// Same surface as `enabled`, but nothing ever reaches the global registry.

use std::any::Any;

use static_locals_runtime::{Coordinates, FileName, FuncName, LookupError, LookupKey, VarName};

pub fn track<T: Any + Send + Sync>(
    _var: &'static T,
    _name: impl Into<VarName>,
    _at: Coordinates,
) {
}

pub fn get<T: Any>(
    _file: impl Into<FileName>,
    _func: impl Into<FuncName>,
    _name: impl Into<VarName>,
) -> Option<&'static T> {
    None
}

pub fn get_in<T: Any>(
    _func: impl Into<FuncName>,
    _name: impl Into<VarName>,
) -> Option<&'static T> {
    None
}

pub fn get_named<T: Any>(_name: impl Into<VarName>) -> Option<&'static T> {
    None
}

pub fn try_get<T: Any>(
    file: impl Into<FileName>,
    func: impl Into<FuncName>,
    name: impl Into<VarName>,
) -> Result<&'static T, LookupError> {
    Err(LookupError::NotFound {
        key: LookupKey::Exact {
            file: file.into(),
            func: func.into(),
            name: name.into(),
        },
    })
}

pub fn try_get_in<T: Any>(
    func: impl Into<FuncName>,
    name: impl Into<VarName>,
) -> Result<&'static T, LookupError> {
    Err(LookupError::NotFound {
        key: LookupKey::InFunction {
            func: func.into(),
            name: name.into(),
        },
    })
}

pub fn try_get_named<T: Any>(name: impl Into<VarName>) -> Result<&'static T, LookupError> {
    Err(LookupError::NotFound {
        key: LookupKey::Named { name: name.into() },
    })
}

#[track_caller]
pub fn get_ref<T: Any>(name: impl Into<VarName>) -> &'static T {
    panic!(
        "cannot look up static local `{}`: static-locals was built without the `tracking` feature",
        name.into()
    )
}

#[track_caller]
pub fn copy<T: Any + Clone>(name: impl Into<VarName>) -> T {
    get_ref::<T>(name).clone()
}
