pub mod marks;

pub use marks::*;
