mod union_find;

pub use union_find::*;
