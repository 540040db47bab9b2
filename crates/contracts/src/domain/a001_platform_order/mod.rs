pub mod aggregate;
pub mod dto;
pub mod filter;
pub mod stats;
