//! Shopping list: every ingredient across one or more recipes, grouped by name.
//!
//! Amounts are listed side by side and never summed; quantities are opaque text.

use std::collections::HashMap;
use std::fmt;

use cook_syntax::ast::{Document, Ingredient};

/// One written amount of an ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub quantity: String,
    pub unit: String,
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quantity = if self.quantity.is_empty() { "some" } else { &self.quantity };
        if self.unit.is_empty() {
            write!(f, "{quantity}")
        } else {
            write!(f, "{quantity} {}", self.unit)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub amounts: Vec<Amount>,
}

/// Ingredients in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    index: HashMap<String, usize>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents<'d>(documents: impl IntoIterator<Item = &'d Document>) -> Self {
        let mut list = Self::new();
        for document in documents {
            list.add_document(document);
        }
        list
    }

    pub fn add_document(&mut self, document: &Document) {
        for ingredient in document.ingredients() {
            self.add(ingredient);
        }
    }

    pub fn add(&mut self, ingredient: &Ingredient) {
        let amount = Amount {
            quantity: ingredient.quantity.clone(),
            unit: ingredient.unit.clone(),
        };
        match self.index.get(&ingredient.name) {
            Some(&i) => self.items[i].amounts.push(amount),
            None => {
                self.index.insert(ingredient.name.clone(), self.items.len());
                self.items.push(ShoppingItem {
                    name: ingredient.name.clone(),
                    amounts: vec![amount],
                });
            }
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ShoppingList {
    /// One `name: amount, amount` line per ingredient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write!(f, "{}: ", item.name)?;
            for (i, amount) in item.amounts.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{amount}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
