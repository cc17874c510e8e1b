pub mod models;
pub mod notes;
pub mod users;

pub use models::{Note, User};
pub use notes::NoteRepository;
pub use users::UserRepository;
