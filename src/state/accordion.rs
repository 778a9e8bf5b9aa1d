//! Accordion group state machine.
//!
//! A group owns an ordered list of triggers, each pointing at one panel by
//! id. At most one panel is open at a time: [`AccordionGroup::toggle_trigger`]
//! collapses the whole group before opening the target, and hands back the
//! [`Transition`] the DOM binding applies.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Icon transform for an expanded trigger.
pub const ROTATE_OPEN: &str = "rotate(180deg)";
/// Icon transform for a collapsed trigger.
pub const ROTATE_CLOSED: &str = "rotate(0deg)";

/// One clickable control and the panel it governs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trigger {
    /// Value of the trigger's `aria-controls` attribute.
    pub panel_id: String,
    /// Whether a panel with `panel_id` exists on the page.
    pub panel_resolved: bool,
    /// `aria-expanded="true"` in the initial markup.
    pub expanded: bool,
}

impl Trigger {
    #[must_use]
    pub fn new(panel_id: impl Into<String>, panel_resolved: bool) -> Self {
        Self { panel_id: panel_id.into(), panel_resolved, expanded: false }
    }

    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }
}

/// Changes produced by one toggle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Triggers collapsed (every trigger in the group).
    pub closed: Vec<usize>,
    /// Trigger whose panel is opened, if any.
    pub opened: Option<usize>,
}

/// Mutually exclusive open state for one page section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccordionGroup {
    group_id: String,
    triggers: Vec<Trigger>,
    open: Option<usize>,
}

impl AccordionGroup {
    /// Build a group from its triggers in document order.
    ///
    /// The first resolvable trigger pre-marked as expanded becomes the open
    /// panel; otherwise the group starts fully collapsed.
    #[must_use]
    pub fn new(group_id: impl Into<String>, triggers: Vec<Trigger>) -> Self {
        let open = triggers.iter().position(|t| t.expanded && t.panel_resolved);
        Self { group_id: group_id.into(), triggers, open }
    }

    #[must_use]
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    #[must_use]
    pub fn trigger(&self, index: usize) -> Option<&Trigger> {
        self.triggers.get(index)
    }

    /// Id of the open panel, if any.
    #[must_use]
    pub fn open_panel(&self) -> Option<&str> {
        self.open.map(|i| self.triggers[i].panel_id.as_str())
    }

    /// Whether the trigger at `index` is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Index of the first trigger controlling `panel_id`.
    #[must_use]
    pub fn index_of(&self, panel_id: &str) -> Option<usize> {
        self.triggers.iter().position(|t| t.panel_id == panel_id)
    }

    /// The group's current state as a full transition: every trigger
    /// collapsed, then the open one (if any) re-expanded. Applied once at
    /// mount so markup with several pre-expanded triggers is brought in line.
    #[must_use]
    pub fn snapshot(&self) -> Transition {
        Transition { closed: (0..self.triggers.len()).collect(), opened: self.open }
    }

    /// Activate the trigger at `index`.
    ///
    /// Returns `None` and leaves the group untouched when the index is out of
    /// range or its panel does not exist. Otherwise every trigger collapses
    /// and, unless the target was the one already open, the target opens.
    pub fn toggle_trigger(&mut self, index: usize) -> Option<Transition> {
        let target = self.triggers.get(index)?;
        if !target.panel_resolved {
            return None;
        }

        let should_open = self.open != Some(index);
        self.open = should_open.then_some(index);

        Some(self.snapshot())
    }

    /// Activate the trigger controlling `panel_id`.
    pub fn toggle(&mut self, panel_id: &str) -> Option<Transition> {
        let index = self.index_of(panel_id)?;
        self.toggle_trigger(index)
    }
}
