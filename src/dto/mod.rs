pub mod cart;
pub mod home;
pub mod products;
