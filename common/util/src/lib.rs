pub mod assert;
#[cfg(any(test, feature = "testing"))]
pub mod test;
