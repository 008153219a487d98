// Services module - business logic over the cart aggregate

pub mod cart_service;

pub use cart_service::{CartService, CartSession};
