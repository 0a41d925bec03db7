pub mod allure;
pub mod serialize;
