//! HTTP handlers for the cupcake API and the homepage.

pub mod cupcake;
pub mod home;
pub use cupcake::*;
pub use home::*;
