//! Domain-level constants.
//!
//! These constants define business rules and the fixed client-facing messages.

// =============================================================================
// Business rules
// =============================================================================

/// Age from which a user is considered of age
pub const AGE_OF_MAJORITY: u32 = 18;

/// Check if an age meets the age of majority
pub fn is_of_age(age: u32) -> bool {
    age >= AGE_OF_MAJORITY
}

// =============================================================================
// Response messages
// =============================================================================

/// Returned when a user id does not match any record
pub const MSG_USER_NOT_FOUND: &str = "Usuário não encontrado";

/// Returned when the repository rejects a new user
pub const MSG_USER_CREATION_FAILED: &str = "Falha ao criar o usuário";

/// Returned after a user has been removed
pub const MSG_USER_DELETED: &str = "Usuário excluído com sucesso";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_of_age_boundary() {
        assert!(!is_of_age(0));
        assert!(!is_of_age(17));
        assert!(is_of_age(18));
        assert!(is_of_age(50));
    }
}
