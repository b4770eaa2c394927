pub mod detail;
pub mod summary;

pub use detail::MovieDetail;
pub use summary::{poster_url, MovieSummary, NOT_AVAILABLE};
