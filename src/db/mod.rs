pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::InMemoryRepository;
pub use repository::BusinessRepository;
pub use seed::seed_catalogue;
