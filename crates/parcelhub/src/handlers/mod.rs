mod body;
pub mod error;
pub mod health;
pub mod orders;
pub mod products;

pub use error::AppError;
