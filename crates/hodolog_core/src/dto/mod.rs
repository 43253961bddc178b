//! Request and response value objects for post use-cases.
//!
//! # Responsibility
//! - Carry caller input into the service without exposing storage types.
//! - Project stored posts into response shapes.

pub mod post_dto;
