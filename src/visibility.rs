use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the three calculator sections on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Section {
    /// The expression evaluator.
    Expression,
    /// The linear equation solver.
    Linear,
    /// The quadratic equation solver.
    Quadratic,
}

impl Section {
    /// All sections in board order.
    pub const ALL: [Self; 3] = [Self::Expression, Self::Linear, Self::Quadratic];

    /// Heading printed above the section's output.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Expression => "Expression",
            Self::Linear => "Linear equation",
            Self::Quadratic => "Quadratic equation",
        }
    }
}

/// Which sections the user has switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionStates {
    /// Expression section toggle.
    pub expression: bool,
    /// Linear section toggle.
    pub linear:     bool,
    /// Quadratic section toggle.
    pub quadratic:  bool,
}

impl Default for SectionStates {
    fn default() -> Self {
        Self::uniform(true)
    }
}

impl SectionStates {
    /// Every section set to `checked`.
    #[must_use]
    pub const fn uniform(checked: bool) -> Self {
        Self { expression: checked,
               linear:     checked,
               quadratic:  checked, }
    }

    /// Whether `section` is switched on.
    #[must_use]
    pub const fn get(self, section: Section) -> bool {
        match section {
            Section::Expression => self.expression,
            Section::Linear => self.linear,
            Section::Quadratic => self.quadratic,
        }
    }

    /// Returns a copy with `section` set to `checked`.
    #[must_use]
    pub const fn with(mut self, section: Section, checked: bool) -> Self {
        match section {
            Section::Expression => self.expression = checked,
            Section::Linear => self.linear = checked,
            Section::Quadratic => self.quadratic = checked,
        }
        self
    }
}

/// The derived board state: the three sections plus the select-all box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Section toggles, as given.
    pub sections:   SectionStates,
    /// Checked exactly when all three sections are visible.
    pub select_all: bool,
}

impl Visibility {
    /// Sections to render, in board order.
    pub fn visible_sections(&self) -> impl Iterator<Item = Section> + '_ {
        Section::ALL.into_iter().filter(|s| self.sections.get(*s))
    }
}

/// Derives the board state from the section toggles.
///
/// # Example
/// ```
/// use calcboard::visibility::{SectionStates, compute_visibility};
///
/// assert!(compute_visibility(SectionStates::uniform(true)).select_all);
///
/// let partial = SectionStates { linear: false,
///                               ..SectionStates::default() };
/// assert!(!compute_visibility(partial).select_all);
/// ```
#[must_use]
pub const fn compute_visibility(states: SectionStates) -> Visibility {
    Visibility { sections:   states,
                 select_all: states.expression && states.linear && states.quadratic, }
}

/// The select-all box was set to `checked`: every section follows it.
#[must_use]
pub const fn select_all(checked: bool) -> Visibility {
    compute_visibility(SectionStates::uniform(checked))
}

/// Hides every section.
#[must_use]
pub const fn clear_all() -> Visibility {
    select_all(false)
}

/// One section's box was set to `checked`; the rest keep their state.
///
/// # Example
/// ```
/// use calcboard::visibility::{Section, select_all, toggle};
///
/// let board = toggle(select_all(true), Section::Quadratic, false);
/// assert!(!board.select_all);
/// assert!(board.sections.expression);
///
/// let board = toggle(board, Section::Quadratic, true);
/// assert!(board.select_all);
/// ```
#[must_use]
pub const fn toggle(current: Visibility, section: Section, checked: bool) -> Visibility {
    compute_visibility(current.sections.with(section, checked))
}
