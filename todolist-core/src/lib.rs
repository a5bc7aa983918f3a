//! todolist-core: tipi condivisi tra client e server (modelli esposti sul wire).
//! Niente I/O: solo strutture serializzabili.

pub mod models;

// Re-export per ridurre i percorsi nel crate server
pub use models::user::UserModel;
