pub mod catalog_service;
pub mod pricing_service;
pub mod seat_service;
pub mod session_service;
pub mod user_service;
