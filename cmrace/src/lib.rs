pub mod board;
pub mod dims;
pub mod generate;
pub mod rank;
pub mod solve;
