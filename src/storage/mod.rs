pub mod memory;
pub mod seed;

pub use memory::MovieStore;
pub use seed::BUNDLED_MOVIES;
