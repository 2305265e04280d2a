//! Wire types shared by the Parlor store, API and polling clients.

pub mod api;
pub mod models;
pub mod sync;
