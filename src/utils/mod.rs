pub mod error;
pub mod jwt;
pub mod session;
pub mod swagger_doc;
