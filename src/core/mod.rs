pub mod api;
pub mod delay;
pub mod url;
