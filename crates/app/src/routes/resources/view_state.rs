//! View state for the resource library.
//!
//! The browser is either on the dashboard or in exactly one drill-down:
//! a single resource type, or a named collection. Making this a tagged
//! enum (instead of independent flags) makes that mutual exclusion
//! structural.

use shared_types::resource_type_label;

/// A named cross-type collection with its own "view all" drill-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Featured,
}

impl Collection {
    pub fn heading(&self) -> &'static str {
        match self {
            Collection::Featured => "Featured",
        }
    }
}

/// Which view of the library is on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BrowseView {
    #[default]
    Dashboard,
    TypeDrilldown {
        resource_type: String,
    },
    ViewAll {
        collection: Collection,
    },
}

impl BrowseView {
    pub fn is_dashboard(&self) -> bool {
        matches!(self, BrowseView::Dashboard)
    }

    /// The type constraint a drill-down imposes on the filter predicate.
    /// `ViewAll` drill-downs are unconstrained.
    pub fn type_filter(&self) -> Option<&str> {
        match self {
            BrowseView::TypeDrilldown { resource_type } => Some(resource_type),
            _ => None,
        }
    }

    /// Heading shown above the drill-down grid.
    pub fn heading(&self) -> String {
        match self {
            BrowseView::Dashboard => String::new(),
            BrowseView::TypeDrilldown { resource_type } => {
                format!("{} Resources", resource_type_label(resource_type))
            }
            BrowseView::ViewAll { collection } => format!("{} Resources", collection.heading()),
        }
    }
}

/// The live filter inputs, separate from the view so that Back can reset
/// them without touching the drill-down selection logic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Reset both criteria to their defaults. Used by the Back action and
    /// the zero-result "clear filters" action; the resource collection
    /// itself is untouched.
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_dashboard() {
        assert!(BrowseView::default().is_dashboard());
    }

    #[test]
    fn type_drilldown_constrains_filter() {
        let view = BrowseView::TypeDrilldown {
            resource_type: "VIDEO".to_string(),
        };
        assert_eq!(view.type_filter(), Some("VIDEO"));
        assert_eq!(view.heading(), "Video Resources");
    }

    #[test]
    fn view_all_is_unconstrained() {
        let view = BrowseView::ViewAll {
            collection: Collection::Featured,
        };
        assert_eq!(view.type_filter(), None);
        assert_eq!(view.heading(), "Featured Resources");
    }

    #[test]
    fn reset_clears_query_and_category() {
        let mut criteria = FilterCriteria {
            query: "anxiety".to_string(),
            category: Some("Wellbeing".to_string()),
        };
        criteria.reset();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
