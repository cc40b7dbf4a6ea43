//! Input validation helpers
//!
//! Limits follow the column widths the canteen database always had.

use thiserror::Error;

/// Customer names (`pedido.nome_cliente`)
pub const MAX_CUSTOMER_NAME_LEN: usize = 100;

/// Menu item names
pub const MAX_ITEM_NAME_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("must not be empty")]
    Empty,
    #[error("is too long ({len} chars, max {max})")]
    TooLong { len: usize, max: usize },
}

/// Trim a required string and check it is non-empty and within `max_len` characters.
pub fn required_text(value: &str, max_len: usize) -> Result<&str, TextError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextError::Empty);
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(TextError::TooLong { len, max: max_len });
    }
    Ok(trimmed)
}
