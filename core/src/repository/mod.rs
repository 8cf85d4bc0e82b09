pub mod file;
pub mod memory;
pub mod traits;

// Re-export
pub use file::FileAppDataRepository;
pub use memory::InMemoryAppDataRepository;
pub use traits::AppDataRepository;
