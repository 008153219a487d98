use rust_decimal::Decimal;

use super::{ItemSelection, ValidationError, ValidationResult};

/// Trait for validating input models.
///
/// Validation here is opt-in: the cart itself accepts whatever it is given,
/// mirroring the screens that feed it. Callers wanting stricter guarantees
/// run their inputs through this layer first.
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants
pub const MAX_ITEM_NAME_LENGTH: usize = 200;
pub const MAX_ITEM_ID_LENGTH: usize = 100;
pub const MIN_UNIT_PRICE: Decimal = Decimal::ZERO;
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);
pub const MAX_QUANTITY: u32 = 1000;

impl Validate for ItemSelection {
    fn validate(&self) -> ValidationResult<()> {
        validate_item_id(&self.item_id)?;
        validate_item_name(&self.name)?;
        validate_unit_price(&self.unit_price)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }
}

/// Validate an item identifier
pub fn validate_item_id(item_id: &str) -> ValidationResult<()> {
    let trimmed = item_id.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "item_id".to_string(),
        });
    }

    if trimmed.len() > MAX_ITEM_ID_LENGTH {
        return Err(ValidationError::TooLong {
            field: "item_id".to_string(),
            max_length: MAX_ITEM_ID_LENGTH,
            actual_length: trimmed.len(),
        });
    }

    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidValue {
            field: "item_id".to_string(),
            value: item_id.to_string(),
            reason: "Item IDs may contain only alphanumerics, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validate an item display name
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "name".to_string(),
        });
    }

    if trimmed.len() > MAX_ITEM_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max_length: MAX_ITEM_NAME_LENGTH,
            actual_length: trimmed.len(),
        });
    }

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: name.to_string(),
            reason: "Contains control characters".to_string(),
        });
    }

    Ok(())
}

/// Validate a unit price
pub fn validate_unit_price(price: &Decimal) -> ValidationResult<()> {
    if *price < MIN_UNIT_PRICE || *price > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: MIN_UNIT_PRICE.to_string(),
            max: MAX_UNIT_PRICE.to_string(),
            value: price.to_string(),
        });
    }

    if price.scale() > 2 {
        return Err(ValidationError::InvalidValue {
            field: "unit_price".to_string(),
            value: price.to_string(),
            reason: "Price cannot have more than 2 decimal places".to_string(),
        });
    }

    Ok(())
}

/// Validate a selection quantity
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity > MAX_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: "0".to_string(),
            max: MAX_QUANTITY.to_string(),
            value: quantity.to_string(),
        });
    }

    Ok(())
}

/// Validate a session identifier
pub fn validate_session_id(session_id: &str) -> ValidationResult<()> {
    let trimmed = session_id.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "session_id".to_string(),
        });
    }

    if trimmed.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "session_id".to_string(),
            max_length: 100,
            actual_length: trimmed.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("suit").is_ok());
        assert!(validate_item_id("two-piece_suit").is_ok());

        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
        assert!(validate_item_id("suit jacket").is_err());
        assert!(validate_item_id(&"a".repeat(MAX_ITEM_ID_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Two-piece suit").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("  ").is_err());
        assert!(validate_item_name(&"a".repeat(MAX_ITEM_NAME_LENGTH + 1)).is_err());
        assert!(validate_item_name("Suit\x00jacket").is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(&dec!(1200)).is_ok());
        assert!(validate_unit_price(&dec!(0)).is_ok());
        assert!(validate_unit_price(&dec!(49.99)).is_ok());

        assert!(validate_unit_price(&dec!(-1)).is_err());
        assert!(validate_unit_price(&dec!(1000001)).is_err());
        assert!(validate_unit_price(&dec!(9.999)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_QUANTITY).is_ok());

        assert!(validate_quantity(MAX_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_session_id() {
        assert!(validate_session_id("session-001").is_ok());

        assert!(validate_session_id("").is_err());
        assert!(validate_session_id(&"s".repeat(101)).is_err());
    }

    #[test]
    fn test_item_selection_validation() {
        let valid = ItemSelection {
            item_id: "suit".to_string(),
            name: "Two-piece suit".to_string(),
            unit_price: dec!(1200),
            quantity: 2,
            icon: "hanger".to_string(),
        };
        assert!(valid.validate().is_ok());

        let invalid = ItemSelection {
            unit_price: dec!(-50),
            ..valid
        };
        assert!(invalid.validate().is_err());
    }
}
