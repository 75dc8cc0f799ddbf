//! Frontière HTTP : `POST /schedule` calcule une frise, sans état entre requêtes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ScheduleRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
