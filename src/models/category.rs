use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A category as returned by the API.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// Input structure for creating or updating a category.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CategoryInput {
    /// Must be between 1 and 100 characters.
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Maximum length of 500 characters.
    #[validate(length(max = 500))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_input_validation() {
        let valid_input = CategoryInput {
            name: "Backend".to_string(),
            description: "Backend tasks".to_string(),
        };
        assert!(valid_input.validate().is_ok());

        let invalid_input = CategoryInput {
            name: "".to_string(), // Empty name
            description: "Backend tasks".to_string(),
        };
        assert!(invalid_input.validate().is_err());
    }
}
