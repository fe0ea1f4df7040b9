// HTTP routes
pub mod analyze;
pub mod export;
pub mod health;
pub mod home;

pub use analyze::*;
pub use export::*;
pub use health::*;
pub use home::*;

use serde::Serialize;

/// Error body shared by the JSON endpoints.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
