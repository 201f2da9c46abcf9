pub mod booking_route;
pub mod bus_route;
pub mod user_route;
