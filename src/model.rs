//! Entity rows and typed request bodies.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    // Never serialized into responses.
    #[serde(skip_serializing)]
    pub password: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub gender: Option<String>,
    pub eye_color: Option<String>,
    pub age: Option<i64>,
}

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i64>,
}

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub passengers: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub username: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCharacter {
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPlanet {
    pub name: String,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewShip {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub passengers: Option<i64>,
}

/// Which entity type a favorite association points at. One association
/// table holds all three kinds; `storage_key` is the discriminator column
/// value and must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    Character,
    Planet,
    Ship,
}

impl FavoriteKind {
    pub fn storage_key(self) -> &'static str {
        match self {
            FavoriteKind::Character => "character",
            FavoriteKind::Planet => "planet",
            FavoriteKind::Ship => "ship",
        }
    }

    /// Table holding rows of this kind, for name lookups.
    pub fn table(self) -> &'static str {
        match self {
            FavoriteKind::Character => "characters",
            FavoriteKind::Planet => "planets",
            FavoriteKind::Ship => "ships",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_password_is_not_serialized() {
        let user = User {
            id: 1,
            email: "a@b.com".into(),
            password: "hunter2".into(),
            username: "a".into(),
            is_active: true,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["is_active"], true);
    }

    #[test]
    fn new_user_requires_all_fields() {
        let err = serde_json::from_value::<NewUser>(serde_json::json!({
            "email": "a@b.com",
            "username": "a"
        }));
        assert!(err.is_err());
    }

    #[test]
    fn new_character_optional_fields_default() {
        let c: NewCharacter =
            serde_json::from_value(serde_json::json!({ "name": "Luke" })).unwrap();
        assert_eq!(c.name, "Luke");
        assert!(c.gender.is_none());
        assert!(c.age.is_none());
    }
}
