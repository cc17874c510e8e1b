use serde::Serialize;

use crate::db::{Note, User};

// The one place records are shaped for the wire: public `id` field,
// internal-only columns dropped, applied uniformly to every endpoint.

#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserBody {
    fn from(user: User) -> Self {
        UserBody {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBody {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
}

impl From<Note> for NoteBody {
    fn from(note: Note) -> Self {
        NoteBody {
            id: note.id,
            user_id: note.user_id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
        }
    }
}
