pub mod loader;
pub mod sale {
    pub mod entity;
    pub mod repository;
}
