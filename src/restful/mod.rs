pub mod models;
pub mod portfolio;
pub mod request;
pub mod transport;
