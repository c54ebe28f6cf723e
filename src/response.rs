//! Response envelopes for the cupcake API.

use crate::model::Cupcake;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct CupcakeBody {
    pub cupcake: Cupcake,
}

#[derive(Serialize)]
pub struct CupcakesBody {
    pub cupcakes: Vec<Cupcake>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

pub fn cupcake_created(cupcake: Cupcake) -> (StatusCode, Json<CupcakeBody>) {
    (StatusCode::CREATED, Json(CupcakeBody { cupcake }))
}

pub fn cupcake_ok(cupcake: Cupcake) -> (StatusCode, Json<CupcakeBody>) {
    (StatusCode::OK, Json(CupcakeBody { cupcake }))
}

pub fn cupcakes_ok(cupcakes: Vec<Cupcake>) -> (StatusCode, Json<CupcakesBody>) {
    (StatusCode::OK, Json(CupcakesBody { cupcakes }))
}

pub fn message_ok(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message }))
}
