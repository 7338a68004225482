pub mod friendship_service;
pub mod suggestion;
pub mod tags_service;
