mod cascade_resolver;
mod filter_service;
pub mod selection_codec;

pub use cascade_resolver::CascadeResolver;
pub use filter_service::FilterService;
pub use selection_codec::ParamSource;
