//! Notes system — the in-memory note store and the seed data it starts from

pub mod seed;
pub mod store;

pub use store::NoteStore;
