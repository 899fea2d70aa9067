use std::fmt;

use static_locals_types::{FileName, FuncName, VarName};

/// The key a lookup was made with, at whichever specificity the caller used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupKey {
    Exact {
        file: FileName,
        func: FuncName,
        name: VarName,
    },
    InFunction {
        func: FuncName,
        name: VarName,
    },
    Named {
        name: VarName,
    },
}

impl LookupKey {
    pub fn name(&self) -> &VarName {
        match self {
            LookupKey::Exact { name, .. }
            | LookupKey::InFunction { name, .. }
            | LookupKey::Named { name } => name,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Exact { file, func, name } => write!(f, "`{name}` in {func} ({file})"),
            LookupKey::InFunction { func, name } => write!(f, "`{name}` in {func}"),
            LookupKey::Named { name } => write!(f, "`{name}`"),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no static local tracked as {key}")]
    NotFound { key: LookupKey },

    #[error("static local {key} is a `{found}`, not a `{expected}`")]
    TypeMismatch {
        key: LookupKey,
        expected: &'static str,
        found: &'static str,
    },
}

impl LookupError {
    pub fn key(&self) -> &LookupKey {
        match self {
            LookupError::NotFound { key } | LookupError::TypeMismatch { key, .. } => key,
        }
    }
}
