//! DTOs for users_sea adapter.

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
}

impl UserCreate {
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// First and last name; `name` is derived from them.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl ProfileUpdate {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
