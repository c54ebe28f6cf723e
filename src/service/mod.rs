//! Request validation for cupcake payloads.

pub mod validation;

pub use validation::CupcakeValidator;
