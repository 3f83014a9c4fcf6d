pub mod errors;
pub mod db;
pub mod user;
pub mod catalog_service;
pub mod service_request;

#[cfg(test)]
mod tests;
