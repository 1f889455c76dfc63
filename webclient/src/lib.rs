// exported modules
pub mod api;
pub mod client;
pub mod cursor;
pub mod error;
pub mod http;
pub mod mock;
pub mod model;
pub mod response;
pub mod urls;

// re-exports
pub use api::{CourseFilter, ProblemFilter, Solution, SubmissionFilter};
pub use client::OjClient;
pub use cursor::Page;
pub use error::*;
pub use model::*;
pub use url::Url;

// internal modules
mod util;
