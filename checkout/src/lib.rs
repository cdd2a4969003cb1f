pub mod countries;
pub mod error;
pub mod history;
pub mod http;
pub mod order;
pub mod payment;
pub mod service;
pub mod shipping;
pub mod totals;
pub mod workflow;
