//! Cascading province → regency/city → district filter.
//!
//! The selection lives in the page URL as `?province=..&regency=..&district=..`.
//! Requests carry that state in, the response carries the new state back
//! together with the options, breadcrumb and details to render.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/filter` | Filter state for the selection in the query |
//! | POST | `/api/filter/select` | Change one level, resetting the levels below it |
//! | POST | `/api/filter/reset` | Clear the selection |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FilterService;
