//! Filter fields and the toggles that show or hide them.
//!
//! A [`FilterSet`] is the whole state of a search page: one entry per backend
//! query parameter, in declaration order, grouped under the toggles the user
//! switches on and off.

use thiserror::Error;

use crate::domain::query::SearchQuery;
use crate::domain::types::{FieldKey, ToggleName, TypeConstraintError};

/// Errors raised when the user addresses a filter that cannot take the action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter toggle: {0}")]
    UnknownToggle(String),

    #[error("unknown filter field: {0}")]
    UnknownField(String),

    #[error("filter field is not active: {0}")]
    Inactive(String),
}

/// How a field's value is entered, which decides how it is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Selection of a year from `first` up to five years past the current one.
    Year { first: i32 },
    /// Selection of a month number, 1 to 12.
    Month,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterField {
    pub key: FieldKey,
    pub kind: FieldKind,
    pub value: String,
    pub active: bool,
}

impl FilterField {
    fn new(key: FieldKey, kind: FieldKind) -> Self {
        Self {
            key,
            kind,
            value: String::new(),
            active: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterToggle {
    pub name: ToggleName,
    /// Indices into [`FilterSet::fields`].
    fields: Vec<usize>,
}

/// Snapshot of every field value, in declaration order.
pub type FilterValues = Vec<(FieldKey, String)>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSet {
    fields: Vec<FilterField>,
    toggles: Vec<FilterToggle>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a toggle owning the given fields. Fields start inactive and empty.
    pub fn with_toggle(
        mut self,
        name: &str,
        fields: &[(&str, FieldKind)],
    ) -> Result<Self, TypeConstraintError> {
        let name = ToggleName::new(name)?;
        let mut indices = Vec::with_capacity(fields.len());
        for (key, kind) in fields {
            let key = FieldKey::new(*key)?;
            if self.fields.iter().any(|f| f.key == key) {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "duplicate field key {key}"
                )));
            }
            indices.push(self.fields.len());
            self.fields.push(FilterField::new(key, *kind));
        }
        self.toggles.push(FilterToggle {
            name,
            fields: indices,
        });
        Ok(self)
    }

    /// Shorthand for a toggle that controls a single text field of the same name.
    pub fn with_text(self, key: &str) -> Result<Self, TypeConstraintError> {
        self.with_toggle(key, &[(key, FieldKind::Text)])
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn toggles(&self) -> &[FilterToggle] {
        &self.toggles
    }

    pub fn field(&self, key: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.key.as_str() == key)
    }

    /// Fields owned by a toggle, in declaration order.
    pub fn toggle_fields(&self, toggle: &FilterToggle) -> impl Iterator<Item = &FilterField> {
        toggle.fields.iter().map(|&i| &self.fields[i])
    }

    pub fn is_active(&self, name: &str) -> Result<bool, FilterError> {
        let toggle = self.find_toggle(name)?;
        Ok(toggle.fields.iter().any(|&i| self.fields[i].active))
    }

    /// Flips a toggle and returns its new state.
    ///
    /// Switching off clears every value the toggle owns; switching on leaves
    /// the (already empty) values alone.
    pub fn toggle(&mut self, name: &str) -> Result<bool, FilterError> {
        let active = !self.is_active(name)?;
        let indices = self.find_toggle(name)?.fields.clone();
        for i in indices {
            let field = &mut self.fields[i];
            field.active = active;
            if !active {
                field.value.clear();
            }
        }
        Ok(active)
    }

    /// Stores raw user input for an active field. The value is kept untrimmed.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<(), FilterError> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.key.as_str() == key)
            .ok_or_else(|| FilterError::UnknownField(key.to_string()))?;
        if !field.active {
            return Err(FilterError::Inactive(key.to_string()));
        }
        field.value = value.into();
        Ok(())
    }

    pub fn values(&self) -> FilterValues {
        self.fields
            .iter()
            .map(|f| (f.key.clone(), f.value.clone()))
            .collect()
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery::build(self.fields.iter().map(|f| (f.key.as_str(), f.value.as_str())))
    }

    fn find_toggle(&self, name: &str) -> Result<&FilterToggle, FilterError> {
        self.toggles
            .iter()
            .find(|t| t.name.as_str() == name)
            .ok_or_else(|| FilterError::UnknownToggle(name.to_string()))
    }
}
