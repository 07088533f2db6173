pub mod create_product;
pub mod current_user;
pub mod delete_product;
pub mod get_product;
pub mod get_user;
pub mod health;
pub mod list_products;
pub mod list_users;
pub mod login;
pub mod register;
pub mod update_product;
