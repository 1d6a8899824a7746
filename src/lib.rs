//! Client side of the link shortener: validates a destination URL and a
//! short code, asks the backend to create the mapping, and tracks the form
//! through editing, submitting and completion.

pub mod config;
pub mod coordinator;
pub mod errors;
pub mod form;
pub mod logging;
pub mod models;
pub mod page;
pub mod session;
pub mod suggest;
pub mod validator;

pub use config::ClientConfig;
pub use coordinator::{LinkCreator, Outcome, RequestCoordinator};
pub use errors::{AppError, FieldError};
pub use form::{Effect, Event, Field, FormState, Phase, RequestTicket, transition};
pub use page::Page;
pub use session::FormSession;
