pub mod basic;
pub mod concurrent;
pub mod non_copyable;
