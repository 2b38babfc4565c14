pub mod consts;
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
pub mod services;
pub mod views;
