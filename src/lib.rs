//! Cupcakes: JSON CRUD API and homepage for a catalogue of cupcakes.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Cupcake, CupcakeInput, DEFAULT_IMAGE};
pub use response::{CupcakeBody, CupcakesBody, MessageBody};
pub use routes::{api_routes, app, common_routes, home_routes};
pub use service::CupcakeValidator;
pub use state::AppState;
pub use store::{ensure_cupcakes_table, ensure_database_exists, CupcakeStore, MemoryCupcakeStore, PgCupcakeStore};
