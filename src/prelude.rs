pub use crate::puzzle::*;
pub use crate::seen::*;
pub use crate::solver::*;

#[cfg(test)]
pub use crate::test::*;
