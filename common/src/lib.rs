pub mod cart;
pub mod config;
pub mod currency;
pub mod error;
pub mod firestore;
pub mod inventory;
pub mod pagination;
pub mod stock;
pub mod storage;
pub mod view;
