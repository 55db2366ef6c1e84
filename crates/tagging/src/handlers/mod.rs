pub mod error;
pub mod items;
pub mod tags;

pub use error::AppError;
