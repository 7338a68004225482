pub mod friends;
pub mod suggestions;
pub mod tags;
