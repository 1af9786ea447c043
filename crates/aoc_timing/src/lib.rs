mod timing;

pub use timing::*;
