//! Repository Layer
//!
//! Storage abstraction and the record store built on it.

mod memory;
mod record_store;
mod seed;
mod traits;


pub use memory::MemoryStorage;
pub use record_store::RecordStore;
pub use seed::seed_employees;
pub use traits::KeyValueStorage;
