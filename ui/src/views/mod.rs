mod bloom;
mod home;
mod phenology;

pub use bloom::Bloom;
pub use home::Home;
pub use phenology::Phenology;
