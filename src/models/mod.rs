pub mod booking;
pub mod bus;
pub mod search;
pub mod seat;
pub mod user;
