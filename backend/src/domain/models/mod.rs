pub mod mother;
pub mod worker;
