pub mod requests;
pub mod response;

pub use requests::CreateShortUrlRequest;
pub use response::{ApiErrorResponse, is_truthy};
