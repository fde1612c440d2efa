pub mod booking;
pub mod cart;
pub mod movie;
pub mod seat;
pub mod showtime;

pub use booking::Booking;
pub use cart::{Cart, CartItem};
pub use movie::Movie;
pub use seat::{SeatLayout, SeatStatus};
pub use showtime::Showtime;
