pub mod fetch_translate;
pub mod speech;
