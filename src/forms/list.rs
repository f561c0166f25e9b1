use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data submitted by the list search box.
pub struct SearchForm {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub query: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data submitted by the status filter control.
pub struct StatusFilterForm {
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Deserialize, Validate)]
/// Form data for a single-field update of one row.
pub struct FieldUpdateForm {
    /// Name of the field to change, e.g. `status` or `favorite`.
    #[validate(length(min = 1))]
    pub field: String,
    #[serde(default)]
    pub value: String,
}

impl FieldUpdateForm {
    /// Validates the form and returns the trimmed field and value.
    pub fn into_parts(self) -> Result<(String, String), FormError> {
        self.validate()?;
        let field = self.field.trim();
        if field.is_empty() {
            return Err(FormError::InvalidField);
        }
        Ok((field.to_ascii_lowercase(), self.value.trim().to_string()))
    }
}
