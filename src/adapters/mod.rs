pub mod api;
pub mod transfer;
