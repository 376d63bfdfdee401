//! Person entity representing an employee record in the HCM system.
//!
//! Person CRUD is owned by the person-management subsystem; the token
//! services only read the fields propagated into access-token claims.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Application role of a person.
///
/// A closed set rather than an open string, so a typo can never mint a
/// claim for a role that does not exist. Serialized with the exact
/// PascalCase names carried in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular employee
    Employee,
    /// Department manager
    Manager,
    /// HR administrator
    HrAdmin,
}

impl Role {
    /// Returns the claim name for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::HrAdmin => "HrAdmin",
        }
    }
}

/// Person entity representing an employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person
    pub id: Uuid,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Email address, used as the login credential
    pub email: String,

    /// Department the person belongs to
    pub department: String,

    /// Application role
    pub role: Role,
}

impl Person {
    /// Creates a new Person instance
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person() {
        let person = Person::new("John", "Doe", "john@example.com", "IT", Role::Employee);

        assert_eq!(person.first_name, "John");
        assert_eq!(person.email, "john@example.com");
        assert_eq!(person.department, "IT");
        assert_eq!(person.role, Role::Employee);
    }

    #[test]
    fn test_role_serializes_to_claim_names() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"Employee\"");
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"Manager\"");
        assert_eq!(serde_json::to_string(&Role::HrAdmin).unwrap(), "\"HrAdmin\"");
    }

    #[test]
    fn test_unknown_role_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"Administrator\"");
        assert!(result.is_err());
    }
}
