//! Page identifiers for the navigator.

use std::fmt;

/// Pages of the phenol-water CST experiment, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhenolPage {
    Intro,
    /// Prepare the mixture.
    Prepare,
    /// Observe the phase transition.
    Observe,
    /// Record the observation into the table.
    Record,
    Graph,
}

/// Pages of the conductometric titration, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitrationPage {
    Intro,
    Standardize,
    Titrate,
    Graph,
}

/// Every page the navigator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Phenol(PhenolPage),
    Titration(TitrationPage),
}

impl Page {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Phenol(PhenolPage::Intro) => "phenol_intro",
            Page::Phenol(PhenolPage::Prepare) => "phenol_exp1",
            Page::Phenol(PhenolPage::Observe) => "phenol_exp2",
            Page::Phenol(PhenolPage::Record) => "phenol_exp3",
            Page::Phenol(PhenolPage::Graph) => "phenol_graph",
            Page::Titration(TitrationPage::Intro) => "cond_intro",
            Page::Titration(TitrationPage::Standardize) => "cond_standardize",
            Page::Titration(TitrationPage::Titrate) => "cond_titration",
            Page::Titration(TitrationPage::Graph) => "cond_graph",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "Physical Chemistry Lab",
            Page::Phenol(PhenolPage::Intro) => "Phenol-Water CST Determination",
            Page::Phenol(PhenolPage::Prepare) => "Prepare Mixture",
            Page::Phenol(PhenolPage::Observe) => "Observe Phase Transition",
            Page::Phenol(PhenolPage::Record) => "Record Data",
            Page::Phenol(PhenolPage::Graph) => "Phase Diagram: Mean Temperature vs % Phenol",
            Page::Titration(TitrationPage::Intro) => "Conductometric Titration",
            Page::Titration(TitrationPage::Standardize) => "Standardize NaOH Solution",
            Page::Titration(TitrationPage::Titrate) => "Conductometric Titration",
            Page::Titration(TitrationPage::Graph) => "Titration Curve: Conductance vs NaOH",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
