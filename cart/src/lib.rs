pub mod error;
pub mod http;
pub mod manager;
pub mod model;
pub mod service;
