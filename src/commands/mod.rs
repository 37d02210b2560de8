pub mod cost;
pub mod dispatch;
pub mod input;
pub mod neighbors;
pub mod route;
