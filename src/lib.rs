pub mod path;
pub mod puzzle;
pub mod seen;
pub mod solver;

pub mod prelude;
