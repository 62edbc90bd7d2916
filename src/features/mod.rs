pub mod filter;
pub mod regions;
