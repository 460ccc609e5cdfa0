pub mod app;
pub mod cart_list;
pub mod inventory_client;
pub mod inventory_list;
pub mod session_store;
