pub mod error;
pub mod lookup;

pub use error::AppError;
