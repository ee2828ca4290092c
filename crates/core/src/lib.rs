//! Core library for the demo content tooling: the demo landing-page
//! seeder and the static write-resource schema descriptors. The two
//! features are unrelated; they share only the persistence seams and
//! the explicit [`context::Context`].

pub mod context;
pub mod page;
pub mod seed;
pub mod store;
pub mod write;
