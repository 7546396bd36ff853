pub mod memory;
pub mod traits;

pub use memory::MemoryMotherRepository;
