mod filter_dto;

pub use filter_dto::*;
