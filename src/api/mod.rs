pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::meeting_api_router;
pub use server::{start_server, ApiServer};
pub use types::ApiContext;
