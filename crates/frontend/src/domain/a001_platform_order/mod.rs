pub mod api;
pub mod pagination;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod fake;
