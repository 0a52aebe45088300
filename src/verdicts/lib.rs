pub mod api;
pub mod cache;
pub(crate) mod config;
pub mod error;
pub mod filter;
pub mod group;
pub mod rating;
pub mod table;
pub mod verdict;
