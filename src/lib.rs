pub mod core;
pub mod models;
pub mod api;
pub mod view;
pub mod handlers;

#[cfg(test)]
mod testing;
