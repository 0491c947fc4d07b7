pub mod gallery;
pub mod generation;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
