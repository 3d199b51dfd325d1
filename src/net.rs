pub mod form;
pub mod http;
