pub mod csv;
pub mod h5;
pub mod results;
