pub mod admin;
pub mod base_price;
pub mod discount;
pub mod metadata;
pub mod purchase;
pub mod withdraw;
