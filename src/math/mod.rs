pub mod linalg;
pub mod matrix;

pub use linalg::{
    append_bias_column, clamp, elementwise_multiply, multiply, random_matrix, scalar_multiply,
    scalar_subtract, subtract, transpose,
};
pub use matrix::Matrix;
