//! In-memory catalog of albums, songs and their study notes
//!
//! The engine only ever borrows a [`Catalog`]; persisting it is up to the host.

mod model;

pub use model::*;
