use std::any::Any;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use parking_lot::RwLock;
use static_locals_types::{Coordinates, FileName, FuncName, VarName};
use tracing::{debug, trace, warn};

use crate::{LookupError, LookupKey, StaticCell};

type Vars = BTreeMap<VarName, StaticCell>;
type Funcs = BTreeMap<FuncName, Vars>;
type Files = BTreeMap<FileName, Funcs>;

static GLOBAL_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Maps `(file, function, name)` to the static tracked there.
///
/// One reader-writer lock covers the whole map: `track` takes it exclusively,
/// every lookup takes it shared. Lookups copy the cell out and drop the guard
/// before handing back a reference, so a caller never holds the lock while
/// using a value.
///
/// Entries are never removed. Tracking the same triple twice keeps the later
/// cell.
///
/// Partial-key lookups (`get_in`, `get_named`) walk files in ascending order
/// of their path, then functions in ascending order of their path, and stop
/// at the first entry with a matching key. The type check only applies to
/// that entry. This order is stable across runs but says nothing about which
/// entry was tracked first.
#[derive(Default)]
pub struct Registry {
    files: RwLock<Files>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by the `track!` family of macros.
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    pub fn track<T: Any + Send + Sync>(
        &self,
        var: &'static T,
        name: impl Into<VarName>,
        at: Coordinates,
    ) {
        let name = name.into();
        let cell = StaticCell::new(var);
        let (file, func) = at.into_parts();

        let previous = self
            .files
            .write()
            .entry(file.clone())
            .or_default()
            .entry(func.clone())
            .or_default()
            .insert(name.clone(), cell);

        match previous {
            None => debug!(
                %file,
                %func,
                %name,
                ty = cell.type_name(),
                "tracking static local"
            ),
            Some(previous) if previous.refers_to(&cell) => {
                trace!(%file, %func, %name, "static local tracked again at the same address")
            }
            Some(previous) => warn!(
                %file,
                %func,
                %name,
                ty = cell.type_name(),
                previous_ty = previous.type_name(),
                "static local key reused; later registration replaces the earlier one"
            ),
        }
    }

    pub fn get<T: Any>(
        &self,
        file: impl Into<FileName>,
        func: impl Into<FuncName>,
        name: impl Into<VarName>,
    ) -> Option<&'static T> {
        self.try_get(file, func, name).ok()
    }

    pub fn get_in<T: Any>(
        &self,
        func: impl Into<FuncName>,
        name: impl Into<VarName>,
    ) -> Option<&'static T> {
        self.try_get_in(func, name).ok()
    }

    pub fn get_named<T: Any>(&self, name: impl Into<VarName>) -> Option<&'static T> {
        self.try_get_named(name).ok()
    }

    pub fn try_get<T: Any>(
        &self,
        file: impl Into<FileName>,
        func: impl Into<FuncName>,
        name: impl Into<VarName>,
    ) -> Result<&'static T, LookupError> {
        self.resolve(LookupKey::Exact {
            file: file.into(),
            func: func.into(),
            name: name.into(),
        })
    }

    pub fn try_get_in<T: Any>(
        &self,
        func: impl Into<FuncName>,
        name: impl Into<VarName>,
    ) -> Result<&'static T, LookupError> {
        self.resolve(LookupKey::InFunction {
            func: func.into(),
            name: name.into(),
        })
    }

    pub fn try_get_named<T: Any>(
        &self,
        name: impl Into<VarName>,
    ) -> Result<&'static T, LookupError> {
        self.resolve(LookupKey::Named { name: name.into() })
    }

    /// Number of tracked statics.
    pub fn len(&self) -> usize {
        self.files
            .read()
            .values()
            .flat_map(|funcs| funcs.values())
            .map(|vars| vars.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve<T: Any>(&self, key: LookupKey) -> Result<&'static T, LookupError> {
        let Some(cell) = self.find(&key) else {
            trace!(%key, "static local not found");
            return Err(LookupError::NotFound { key });
        };
        match cell.get::<T>() {
            Some(value) => {
                trace!(%key, ty = cell.type_name(), "static local found");
                Ok(value)
            }
            None => {
                trace!(%key, ty = cell.type_name(), "static local has another type");
                Err(LookupError::TypeMismatch {
                    key,
                    expected: std::any::type_name::<T>(),
                    found: cell.type_name(),
                })
            }
        }
    }

    fn find(&self, key: &LookupKey) -> Option<StaticCell> {
        let files = self.files.read();
        match key {
            LookupKey::Exact { file, func, name } => files.get(file)?.get(func)?.get(name).copied(),
            LookupKey::InFunction { func, name } => files
                .values()
                .find_map(|funcs| funcs.get(func)?.get(name).copied()),
            LookupKey::Named { name } => files
                .values()
                .flat_map(|funcs| funcs.values())
                .find_map(|vars| vars.get(name).copied()),
        }
    }
}
