//! Reach into a function's `static` items from the outside.
//!
//! Functions sometimes keep state in a `static` declared inside their body.
//! Tests want to look at that state, or reset it, without the function
//! growing an accessor just for them. `static-locals` lets the function
//! register the static once, keyed by the file and function it lives in and
//! a label, and lets any other code look it up again by that key.
//!
//! ```rust
//! # #[cfg(feature = "tracking")] {
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! fn next_ticket() -> i32 {
//!     static TICKET: AtomicI32 = AtomicI32::new(5);
//!     static_locals::track!(TICKET);
//!     TICKET.fetch_add(1, Ordering::SeqCst)
//! }
//!
//! assert_eq!(next_ticket(), 5);
//!
//! let ticket = static_locals::get_ref!(AtomicI32, TICKET);
//! assert_eq!(ticket.load(Ordering::SeqCst), 6);
//!
//! ticket.store(100, Ordering::SeqCst);
//! assert_eq!(next_ticket(), 100);
//! # }
//! ```
//!
//! # Tracking
//!
//! [`track!`] records `&STATIC` in the process-wide [`Registry`] the first
//! time control reaches it; later calls of the same function skip the
//! registration. The key is `(file!(), function path, label)`, where the label
//! defaults to the static's identifier.
//!
//! Statics are shared between threads, so anything meant to be changed from
//! a test needs interior mutability (atomics, `Mutex`, `RwLock`, ...). The
//! tracked static is borrowed for `'static`; the registry never owns it.
//!
//! # Looking up
//!
//! Raw lookups return `Option<&'static T>` and come in three specificities:
//! [`get`] (file, function, label), [`get_in`] (function, label) and
//! [`get_named`] (label only). The `try_` forms return a [`LookupError`] that
//! tells a missing key apart from a type mismatch. A lookup made with a type
//! other than the one the static was tracked as never succeeds.
//!
//! Partial keys can match several statics; see [`Registry`] for the order in
//! which they are searched.
//!
//! The convenience layer ([`copy!`], [`copy_to!`], [`get_ref!`]) looks up by
//! label and panics when nothing matches. [`copy!`] needs `T: Clone`:
//!
//! ```rust,compile_fail
//! struct Connection {
//!     id: u32,
//! }
//!
//! fn open() -> u32 {
//!     static CONNECTION: Connection = Connection { id: 1 };
//!     static_locals::track!(CONNECTION);
//!     CONNECTION.id
//! }
//!
//! open();
//! let snapshot = static_locals::copy!(Connection, CONNECTION);
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `tracking` *(default)* | `track!` registers statics; lookups search the global registry. |
//! | *(none)* | `track!` does nothing; lookups find nothing and the panicking accessors say tracking is off. |
//!
//! An explicit [`Registry`] works the same either way.
//!
//! ```rust
//! use std::sync::atomic::{AtomicU32, Ordering};
//!
//! fn seen() -> u32 {
//!     static SEEN: AtomicU32 = AtomicU32::new(1);
//!     static_locals::track!(SEEN);
//!     SEEN.load(Ordering::SeqCst)
//! }
//!
//! assert_eq!(seen(), 1);
//! assert_eq!(
//!     static_locals::get_named::<AtomicU32>("SEEN").is_some(),
//!     cfg!(feature = "tracking")
//! );
//!
//! static DEPTH: AtomicU32 = AtomicU32::new(2);
//! let registry = static_locals::Registry::new();
//! static_locals::track!(in registry, DEPTH);
//! assert!(registry.get_named::<AtomicU32>("DEPTH").is_some());
//! ```

#[cfg(feature = "tracking")]
mod enabled;
#[cfg(not(feature = "tracking"))]
mod disabled;

#[cfg(feature = "tracking")]
pub use enabled::*;
#[cfg(not(feature = "tracking"))]
pub use disabled::*;

pub use static_locals_runtime::{
    Coordinates, FileName, FuncName, LookupError, LookupKey, Registry, StaticCell, VarName,
};

#[doc(hidden)]
pub mod __private {
    pub use static_locals_types::function_path;
}

/// Path of the enclosing function, e.g. `my_crate::worker::run`.
///
/// Inside a closure or `async` block this is the named function around it.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __static_locals_probe() {}
        $crate::__private::function_path(::core::any::type_name_of_val(&__static_locals_probe))
    }};
}

/// [`Coordinates`] of the call site: `file!()` and [`function_name!`].
#[macro_export]
macro_rules! here {
    () => {
        $crate::Coordinates::new(::core::file!(), $crate::function_name!())
    };
}

/// Registers a `static` under the current file and function.
///
/// - `track!(STATIC)` tracks it under its own identifier.
/// - `track!(STATIC, "label")` tracks it under `label`.
/// - `track!(in registry, STATIC)` and `track!(in registry, STATIC, "label")`
///   target an explicit [`Registry`] instead of the global one.
///
/// The global forms register at most once per call site per process, no
/// matter how often or from how many threads the function runs. The
/// `in registry` forms register every time they run; re-tracking the same
/// static under the same key is harmless.
#[macro_export]
macro_rules! track {
    (in $registry:expr, $var:ident, $name:expr $(,)?) => {
        ($registry).track(&$var, $name, $crate::here!())
    };
    (in $registry:expr, $var:ident $(,)?) => {
        $crate::track!(in $registry, $var, ::core::stringify!($var))
    };
    ($var:ident, $name:expr $(,)?) => {{
        static __STATIC_LOCALS_ONCE: ::std::sync::Once = ::std::sync::Once::new();
        __STATIC_LOCALS_ONCE.call_once(|| $crate::track(&$var, $name, $crate::here!()));
    }};
    ($var:ident $(,)?) => {
        $crate::track!($var, ::core::stringify!($var))
    };
}

/// Clones the tracked static with the given label. Panics if there is none
/// of type `$ty`.
#[macro_export]
macro_rules! copy {
    ($ty:ty, $name:ident $(,)?) => {
        $crate::copy::<$ty>(::core::stringify!($name))
    };
    ($ty:ty, $name:literal $(,)?) => {
        $crate::copy::<$ty>($name)
    };
}

/// Assigns a clone of the tracked static labelled like `$var` to `$var`.
/// The type is taken from `$var`.
#[macro_export]
macro_rules! copy_to {
    ($var:ident $(,)?) => {
        $var = $crate::copy(::core::stringify!($var))
    };
}

/// Borrows the tracked static with the given label. Panics if there is none
/// of type `$ty`.
#[macro_export]
macro_rules! get_ref {
    ($ty:ty, $name:ident $(,)?) => {
        $crate::get_ref::<$ty>(::core::stringify!($name))
    };
    ($ty:ty, $name:literal $(,)?) => {
        $crate::get_ref::<$ty>($name)
    };
}

#[cfg(test)]
mod tests {
    use crate::Registry;
    use std::sync::atomic::{AtomicI32, Ordering};

    #[test]
    fn function_name_reports_enclosing_fn() {
        assert_eq!(
            crate::function_name!(),
            concat!(module_path!(), "::function_name_reports_enclosing_fn")
        );
    }

    #[test]
    fn function_name_skips_closures() {
        let inner = || crate::function_name!();
        assert_eq!(
            inner(),
            concat!(module_path!(), "::function_name_skips_closures")
        );
    }

    #[test]
    fn here_uses_this_file() {
        let at = crate::here!();
        assert_eq!(at.file().as_str(), file!());
        assert_eq!(
            at.func().as_str(),
            concat!(module_path!(), "::here_uses_this_file")
        );
    }

    #[test]
    fn track_in_explicit_registry() {
        static DEPTH: AtomicI32 = AtomicI32::new(3);
        let registry = Registry::new();
        crate::track!(in registry, DEPTH);
        crate::track!(in &registry, DEPTH, "depth");

        let by_ident = registry
            .get::<AtomicI32>(
                file!(),
                concat!(module_path!(), "::track_in_explicit_registry"),
                "DEPTH",
            )
            .expect("tracked under its identifier");
        let by_label = registry
            .get_named::<AtomicI32>("depth")
            .expect("tracked under its label");
        assert!(std::ptr::eq(by_ident, by_label));
        assert_eq!(by_label.load(Ordering::SeqCst), 3);
        assert_eq!(registry.len(), 2);
    }
}
