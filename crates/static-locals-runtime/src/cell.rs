use std::any::{Any, TypeId};
use std::fmt;

/// Type-erased handle on one tracked static.
///
/// The cell borrows the static for `'static` and never owns it: copying a
/// cell copies the reference and its type tag, both copies still point at
/// the same storage.
#[derive(Clone, Copy)]
pub struct StaticCell {
    value: &'static (dyn Any + Send + Sync),
    type_id: TypeId,
    type_name: &'static str,
}

impl StaticCell {
    pub fn new<T: Any + Send + Sync>(value: &'static T) -> Self {
        Self {
            value,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the tracked static as a `U`, or `None` if it was tracked as
    /// some other type.
    pub fn get<U: Any>(&self) -> Option<&'static U> {
        if self.type_id != TypeId::of::<U>() {
            return None;
        }
        let value: &'static (dyn Any + Send + Sync) = self.value;
        value.downcast_ref::<U>()
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn addr(&self) -> *const () {
        self.value as *const (dyn Any + Send + Sync) as *const ()
    }

    /// Whether both cells point at the same storage with the same type.
    pub fn refers_to(&self, other: &StaticCell) -> bool {
        self.addr() == other.addr() && self.type_id == other.type_id
    }
}

impl fmt::Debug for StaticCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticCell")
            .field("type", &self.type_name)
            .field("addr", &self.addr())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

    #[test]
    fn get_with_matching_type_aliases_storage() {
        static LEVEL: AtomicI32 = AtomicI32::new(5);
        let cell = StaticCell::new(&LEVEL);

        let level = cell.get::<AtomicI32>().expect("type matches");
        assert!(std::ptr::eq(level, &LEVEL));

        LEVEL.store(9, Ordering::SeqCst);
        assert_eq!(level.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn get_with_other_type_is_none() {
        static LEVEL: AtomicI32 = AtomicI32::new(5);
        let cell = StaticCell::new(&LEVEL);

        // same size and layout, still refused
        assert!(cell.get::<AtomicU32>().is_none());
        assert!(cell.get::<i32>().is_none());
        assert!(cell.get::<f32>().is_none());
    }

    #[test]
    fn copies_point_at_the_same_static() {
        static NAME: &str = "first";
        let cell = StaticCell::new(&NAME);
        let copy = cell;
        assert!(copy.refers_to(&cell));
        assert_eq!(copy.type_name(), std::any::type_name::<&str>());
        assert_eq!(copy.type_id(), TypeId::of::<&'static str>());
    }

    #[test]
    fn distinct_statics_do_not_refer_to_each_other() {
        static A: AtomicI32 = AtomicI32::new(0);
        static B: AtomicI32 = AtomicI32::new(0);
        assert!(!StaticCell::new(&A).refers_to(&StaticCell::new(&B)));
    }
}
