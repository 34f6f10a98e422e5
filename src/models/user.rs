use serde::{Deserialize, Serialize};

/// Rol de un usuario tal como lo envía el backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Cliente,
    Transportista,
    Admin,
    /// Cualquier rol que esta versión del frontend no conoce
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Cliente => "CLIENTE",
            Role::Transportista => "TRANSPORTISTA",
            Role::Admin => "ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

/// Usuario autenticado (UserDTO). Es también el registro de sesión persistido.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Cuerpo de `POST /users/register`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: Option<i64>,
    pub email: String,
    pub role: Role,
    pub phone_number: String,
    pub name: String,
}

impl NewUser {
    pub fn new(role: Role, name: &str, email: &str, phone_number: &str) -> Self {
        Self {
            id: None,
            email: email.trim().to_string(),
            role,
            phone_number: phone_number.trim().to_string(),
            name: name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_reads_backend_payload() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "ana@techlogistics.co",
            "role": "TRANSPORTISTA",
            "name": "Ana",
            "phoneNumber": "3001234567"
        }))
        .unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Transportista);
        assert_eq!(user.phone_number.as_deref(), Some("3001234567"));
    }

    #[test]
    fn unknown_role_does_not_break_parsing() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "email": "x@y.z",
            "role": "SUPERVISOR"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Unknown);
    }

    #[test]
    fn new_user_is_sent_with_null_id() {
        let body = serde_json::to_value(NewUser::new(Role::Cliente, " Luis ", "luis@x.co", "300")).unwrap();
        assert_eq!(
            body,
            json!({
                "id": null,
                "email": "luis@x.co",
                "role": "CLIENTE",
                "phoneNumber": "300",
                "name": "Luis"
            })
        );
    }
}
