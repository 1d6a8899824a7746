pub mod app_error;
pub mod field_error;

pub use app_error::{AppError, TransportError};
pub use field_error::FieldError;
