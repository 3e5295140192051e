mod query_mode;

pub use query_mode::query_mode;
