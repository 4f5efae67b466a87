//! Page navigation
//!
//! The three pages form a small directed graph. Every edge is listed in
//! [`TRANSITIONS`]; a move that is not in the table is rejected and the
//! current page stays put. Moving between pages never touches page state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormFlowError, Result};

/// Page identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    /// Page 1: number list generation
    #[default]
    Numbers,
    /// Page 2: email validation
    Email,
    /// Page 3: age categorization
    Age,
}

/// A navigation button offered by a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub target: Page,
    pub label: &'static str,
}

/// Allowed moves as (from, to)
pub const TRANSITIONS: [(Page, Page); 5] = [
    (Page::Numbers, Page::Email),
    (Page::Email, Page::Numbers),
    (Page::Email, Page::Age),
    (Page::Age, Page::Email),
    (Page::Age, Page::Numbers),
];

const NUMBERS_LINKS: [Link; 1] = [Link {
    target: Page::Email,
    label: "Next: Email",
}];

const EMAIL_LINKS: [Link; 2] = [
    Link {
        target: Page::Numbers,
        label: "Back: Numbers",
    },
    Link {
        target: Page::Age,
        label: "Next: Age",
    },
];

const AGE_LINKS: [Link; 2] = [
    Link {
        target: Page::Email,
        label: "Back: Email",
    },
    Link {
        target: Page::Numbers,
        label: "Home: Numbers",
    },
];

impl Page {
    /// All pages in route order
    pub const ALL: [Page; 3] = [Page::Numbers, Page::Email, Page::Age];

    /// Route name (`page1`, `page2`, `page3`)
    pub fn route(self) -> &'static str {
        match self {
            Page::Numbers => "page1",
            Page::Email => "page2",
            Page::Age => "page3",
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            Page::Numbers => "Numbers",
            Page::Email => "Email",
            Page::Age => "Age",
        }
    }

    /// Outgoing links in display order
    pub fn links(self) -> &'static [Link] {
        match self {
            Page::Numbers => &NUMBERS_LINKS,
            Page::Email => &EMAIL_LINKS,
            Page::Age => &AGE_LINKS,
        }
    }

    /// Whether `self -> target` is an edge of the graph
    pub fn can_navigate_to(self, target: Page) -> bool {
        TRANSITIONS.contains(&(self, target))
    }

    /// Apply a move, returning the destination page
    pub fn navigate(self, target: Page) -> Result<Page> {
        if self.can_navigate_to(target) {
            Ok(target)
        } else {
            Err(FormFlowError::Navigation {
                from: self,
                to: target,
            })
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page1" | "numbers" => Ok(Page::Numbers),
            "page2" | "email" => Ok(Page::Email),
            "page3" | "age" => Ok(Page::Age),
            _ => Err(format!(
                "Invalid page: '{}'. Valid options: page1, page2, page3",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_is_numbers() {
        assert_eq!(Page::default(), Page::Numbers);
    }

    #[test]
    fn test_exactly_five_transitions() {
        let mut allowed = 0;
        for from in Page::ALL {
            for to in Page::ALL {
                if from.can_navigate_to(to) {
                    allowed += 1;
                }
            }
        }
        assert_eq!(allowed, 5);
    }

    #[test]
    fn test_numbers_cannot_jump_to_age() {
        let err = Page::Numbers.navigate(Page::Age).unwrap_err();
        assert!(matches!(
            err,
            FormFlowError::Navigation {
                from: Page::Numbers,
                to: Page::Age
            }
        ));
    }

    #[test]
    fn test_self_navigation_rejected() {
        for page in Page::ALL {
            assert!(page.navigate(page).is_err());
        }
    }

    #[test]
    fn test_links_match_transition_table() {
        for page in Page::ALL {
            for link in page.links() {
                assert!(page.can_navigate_to(link.target));
            }
            let edges = TRANSITIONS.iter().filter(|(from, _)| *from == page).count();
            assert_eq!(page.links().len(), edges);
        }
    }

    #[test]
    fn test_link_order() {
        let targets: Vec<Page> = Page::Age.links().iter().map(|l| l.target).collect();
        assert_eq!(targets, vec![Page::Email, Page::Numbers]);
        assert_eq!(Page::Email.links()[0].label, "Back: Numbers");
    }

    #[test]
    fn test_page_from_str() {
        assert_eq!("page1".parse::<Page>().unwrap(), Page::Numbers);
        assert_eq!("EMAIL".parse::<Page>().unwrap(), Page::Email);
        assert_eq!("page3".parse::<Page>().unwrap(), Page::Age);
        assert!("page4".parse::<Page>().is_err());
    }

    #[test]
    fn test_page_display_is_route() {
        assert_eq!(Page::Email.to_string(), "page2");
    }
}
