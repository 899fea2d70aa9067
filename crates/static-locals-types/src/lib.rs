//! Key types for the static-locals registry.
//!
//! A tracked static is addressed by three identifiers: the file it was
//! declared in, the function it was declared in, and the label it was
//! tracked under. Each is its own type so they cannot be mixed up at a
//! call site, even though all three wrap the same kind of text.

use compact_str::CompactString;
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(CompactString);

        impl $name {
            pub fn new(text: impl Into<CompactString>) -> Self {
                Self(text.into())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(text: &str) -> Self {
                Self::new(text)
            }
        }

        impl From<String> for $name {
            fn from(text: String) -> Self {
                Self::new(text)
            }
        }

        impl From<CompactString> for $name {
            fn from(text: CompactString) -> Self {
                Self(text)
            }
        }
    };
}

identifier!(
    /// Path of the source file a static was declared in, as produced by `file!()`.
    FileName
);

identifier!(
    /// Fully qualified path of the function a static was declared in,
    /// e.g. `my_crate::parser::next_token`.
    FuncName
);

identifier!(
    /// Label a static was tracked under. Usually the static's own identifier.
    VarName
);

/// Where a tracked static was declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates {
    file: FileName,
    func: FuncName,
}

impl Coordinates {
    pub fn new(file: impl Into<FileName>, func: impl Into<FuncName>) -> Self {
        Self {
            file: file.into(),
            func: func.into(),
        }
    }

    pub fn file(&self) -> &FileName {
        &self.file
    }

    pub fn func(&self) -> &FuncName {
        &self.func
    }

    pub fn into_parts(self) -> (FileName, FuncName) {
        (self.file, self.func)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.func, self.file)
    }
}

/// Name of the item the `function_name!` macro declares to probe its
/// enclosing function. Kept here so the macro and the cleanup agree.
pub const PROBE_FN_NAME: &str = "__static_locals_probe";

const CLOSURE_SEGMENT: &str = "::{{closure}}";

/// Turns the `type_name` of a probe fn nested in some function into the path
/// of that function.
///
/// `app::worker::run::__static_locals_probe` becomes `app::worker::run`.
/// Trailing `{{closure}}` segments are dropped too, so a probe inside a
/// closure (or an `async` block) reports the named function around it.
pub fn function_path(probe_type_name: &'static str) -> &'static str {
    let mut path = probe_type_name
        .strip_suffix(PROBE_FN_NAME)
        .and_then(|p| p.strip_suffix("::"))
        .unwrap_or(probe_type_name);
    while let Some(outer) = path.strip_suffix(CLOSURE_SEGMENT) {
        path = outer;
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_compare_by_text() {
        let owned = String::from("counter");
        assert_eq!(VarName::from("counter"), VarName::from(owned));
        assert_ne!(VarName::from("counter"), VarName::from("Counter"));
    }

    #[test]
    fn identifiers_hash_consistently_with_eq() {
        let mut names = HashSet::new();
        names.insert(FuncName::new("app::run"));
        assert!(names.contains(&FuncName::from(String::from("app::run"))));
        assert!(!names.contains(&FuncName::new("app::stop")));
    }

    #[test]
    fn coordinates_display_function_then_file() {
        let at = Coordinates::new("src/lib.rs", "app::run");
        assert_eq!(at.to_string(), "app::run in src/lib.rs");
        let (file, func) = at.into_parts();
        assert_eq!(file.as_str(), "src/lib.rs");
        assert_eq!(func.as_str(), "app::run");
    }

    #[test]
    fn function_path_strips_probe() {
        assert_eq!(
            function_path("app::worker::run::__static_locals_probe"),
            "app::worker::run"
        );
    }

    #[test]
    fn function_path_strips_closures() {
        assert_eq!(
            function_path("app::run::{{closure}}::{{closure}}::__static_locals_probe"),
            "app::run"
        );
    }

    #[test]
    fn function_path_leaves_foreign_names_alone() {
        assert_eq!(function_path("app::run::helper"), "app::run::helper");
    }

    #[test]
    fn probe_in_real_function_resolves_to_it() {
        fn __static_locals_probe() {}
        let path = function_path(std::any::type_name_of_val(&__static_locals_probe));
        assert!(
            path.ends_with("tests::probe_in_real_function_resolves_to_it"),
            "unexpected path {path}"
        );
    }
}
