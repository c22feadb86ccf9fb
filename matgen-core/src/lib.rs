mod dims;
mod generate;
mod matrix;

pub use dims::{DimError, Dims};
pub use generate::MatrixGenerator;
pub use matrix::{Matrix, VALUE_MAX, VALUE_MIN};
