//! Ordered set of service categories known to one event form.

use serde::Serialize;

use super::slug::slugify;
use crate::budget::{BudgetError, Category, CategoryId};

/// Default services offered for every new event.
const STANDARD_CATEGORIES: [&str; 6] = [
    "Venue",
    "Catering",
    "Decoration",
    "Photography",
    "Entertainment",
    "Invitations",
];

/// Categories in display order. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// The six standard event services, all unselected.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_names(&STANDARD_CATEGORIES)
    }

    /// Builds a catalog from display names.
    ///
    /// Names without usable characters and names that collide with an
    /// earlier key are skipped.
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut catalog = Self::default();
        for name in names {
            let name = name.as_ref().trim();
            let id = CategoryId::new(slugify(name));
            if id.as_str().is_empty() || catalog.contains(&id) {
                continue;
            }
            catalog.categories.push(Category::new(id, name));
        }
        catalog
    }

    /// Adds a user-defined category. Custom categories start selected.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EmptyCategoryName` when the name has no usable
    /// characters and `BudgetError::DuplicateCategory` when its key exists.
    pub fn add_custom(&mut self, name: &str) -> Result<&Category, BudgetError> {
        let name = name.trim();
        let id = CategoryId::new(slugify(name));
        if id.as_str().is_empty() {
            return Err(BudgetError::EmptyCategoryName);
        }
        if self.contains(&id) {
            return Err(BudgetError::DuplicateCategory(id));
        }

        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
            is_selected: true,
        });
        self.categories
            .last()
            .ok_or(BudgetError::UnknownCategory(id))
    }

    /// Flips the selection flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UnknownCategory` if the key is not in the catalog.
    pub fn toggle(&mut self, id: &CategoryId) -> Result<bool, BudgetError> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| BudgetError::UnknownCategory(id.clone()))?;
        category.is_selected = !category.is_selected;
        Ok(category.is_selected)
    }

    /// Sets the selection flag explicitly.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::UnknownCategory` if the key is not in the catalog.
    pub fn set_selected(&mut self, id: &CategoryId, selected: bool) -> Result<(), BudgetError> {
        if self.get(id).map(|c| c.is_selected) != Some(selected) {
            self.toggle(id)?;
        }
        Ok(())
    }

    /// Looks up a category by key.
    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Returns true if the key exists.
    #[must_use]
    pub fn contains(&self, id: &CategoryId) -> bool {
        self.get(id).is_some()
    }

    /// All categories in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    /// Iterates categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Iterates the categories the user picked.
    pub fn selected(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_selected)
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the catalog has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
