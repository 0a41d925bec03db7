pub mod attachment;
pub mod label;
pub mod parameter;
pub mod stage;
pub mod status;
pub mod test_result;
