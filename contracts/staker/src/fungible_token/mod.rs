mod core;
mod core_impl;
mod metadata;

pub use self::core_impl::*;
