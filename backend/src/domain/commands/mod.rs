pub mod mother;
