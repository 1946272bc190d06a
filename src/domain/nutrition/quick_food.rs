// SPDX-License-Identifier: MPL-2.0
//! Predefined foods offered as one-click suggestions.

use super::query::Query;

/// A suggestion button. Selecting one submits its lowercased label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuickFood {
    Banana,
    Avocado,
    Salmon,
    Quinoa,
    Spinach,
    Blueberries,
    Almonds,
    SweetPotato,
}

impl QuickFood {
    /// All suggestions, in display order.
    pub const ALL: [QuickFood; 8] = [
        QuickFood::Banana,
        QuickFood::Avocado,
        QuickFood::Salmon,
        QuickFood::Quinoa,
        QuickFood::Spinach,
        QuickFood::Blueberries,
        QuickFood::Almonds,
        QuickFood::SweetPotato,
    ];

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuickFood::Banana => "Banana",
            QuickFood::Avocado => "Avocado",
            QuickFood::Salmon => "Salmon",
            QuickFood::Quinoa => "Quinoa",
            QuickFood::Spinach => "Spinach",
            QuickFood::Blueberries => "Blueberries",
            QuickFood::Almonds => "Almonds",
            QuickFood::SweetPotato => "Sweet Potato",
        }
    }

    /// Text placed in the query field and sent to the backend.
    #[must_use]
    pub fn query_text(self) -> String {
        self.label().to_lowercase()
    }

    /// The suggestion as a validated query. Labels are never blank.
    #[must_use]
    pub fn query(self) -> Query {
        Query::from_label(self.query_text())
    }
}
