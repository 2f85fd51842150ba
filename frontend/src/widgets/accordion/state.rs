use std::rc::Rc;

use yew::prelude::*;

use crate::widgets::filter::CategoryFilter;

/// One question/answer pair of an accordion.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionEntry {
    pub id: AttrValue,
    pub title: AttrValue,
    pub body: AttrValue,
    pub category: Option<AttrValue>,
    pub initially_open: bool,
}

impl AccordionEntry {
    pub fn new(id: &'static str, title: &'static str, body: &'static str) -> Self {
        Self {
            id: AttrValue::Static(id),
            title: AttrValue::Static(title),
            body: AttrValue::Static(body),
            category: None,
            initially_open: false,
        }
    }

    pub fn in_category(mut self, category: &'static str) -> Self {
        self.category = Some(AttrValue::Static(category));
        self
    }

    pub fn opened(mut self) -> Self {
        self.initially_open = true;
        self
    }
}

/// Whether opening an item closes the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionMode {
    #[default]
    Exclusive,
    Independent,
}

/// Search term and category currently narrowing an FAQ list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaqFilter {
    term: String,
    category: CategoryFilter,
}

impl FaqFilter {
    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Case-insensitive substring match on title or body, combined with the
    /// category selection.
    pub fn matches(&self, entry: &AccordionEntry) -> bool {
        let category = entry.category.as_ref().map(|c| c.as_str());
        if !self.category.matches(category) {
            return false;
        }
        self.term.is_empty()
            || entry.title.to_lowercase().contains(&self.term)
            || entry.body.to_lowercase().contains(&self.term)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccordionAction {
    Toggle(usize),
    Open(usize),
    Close(usize),
    Search(String),
    Category(CategoryFilter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionState {
    open: Vec<bool>,
    mode: AccordionMode,
    filter: FaqFilter,
}

impl AccordionState {
    pub fn new(entries: &[AccordionEntry], mode: AccordionMode) -> Self {
        let mut state = Self {
            open: vec![false; entries.len()],
            mode,
            filter: FaqFilter::default(),
        };
        for (index, entry) in entries.iter().enumerate() {
            // exclusive mode honours only the first pre-opened item
            if entry.initially_open && (mode == AccordionMode::Independent || state.open_count() == 0) {
                state.open[index] = true;
            }
        }
        state
    }

    pub fn filter(&self) -> &FaqFilter {
        &self.filter
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|open| **open).count()
    }

    pub fn toggle(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        let was_open = self.open[index];
        self.close_others(index);
        self.open[index] = !was_open;
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.open.len() {
            return;
        }
        self.close_others(index);
        self.open[index] = true;
    }

    pub fn close(&mut self, index: usize) {
        if let Some(open) = self.open.get_mut(index) {
            *open = false;
        }
    }

    fn close_others(&mut self, index: usize) {
        if self.mode == AccordionMode::Exclusive {
            for (i, open) in self.open.iter_mut().enumerate() {
                if i != index {
                    *open = false;
                }
            }
        }
    }

    pub fn search(&mut self, term: &str) {
        self.filter.term = term.trim().to_lowercase();
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn apply(&mut self, action: AccordionAction) {
        match action {
            AccordionAction::Toggle(index) => self.toggle(index),
            AccordionAction::Open(index) => self.open(index),
            AccordionAction::Close(index) => self.close(index),
            AccordionAction::Search(term) => self.search(&term),
            AccordionAction::Category(category) => self.select_category(category),
        }
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entries(n: usize) -> Vec<AccordionEntry> {
        (0..n)
            .map(|_| AccordionEntry::new("q", "Question", "Answer"))
            .collect()
    }

    #[test]
    fn opening_b_closes_a_in_exclusive_mode() {
        let mut state = AccordionState::new(&entries(3), AccordionMode::Exclusive);
        state.toggle(0);
        assert!(state.is_open(0));
        state.toggle(1);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut state = AccordionState::new(&entries(2), AccordionMode::Exclusive);
        state.toggle(1);
        state.toggle(1);
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn independent_mode_keeps_siblings_open() {
        let mut state = AccordionState::new(&entries(3), AccordionMode::Independent);
        state.toggle(0);
        state.open(2);
        assert!(state.is_open(0) && state.is_open(2));
        state.close(0);
        state.close(0);
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut state = AccordionState::new(&entries(1), AccordionMode::Exclusive);
        state.open(0);
        state.toggle(5);
        state.open(5);
        state.close(5);
        assert!(state.is_open(0));
    }

    #[test]
    fn exclusive_mode_keeps_first_preopened_item() {
        let list = vec![
            AccordionEntry::new("a", "A", "a"),
            AccordionEntry::new("b", "B", "b").opened(),
            AccordionEntry::new("c", "C", "c").opened(),
        ];
        let state = AccordionState::new(&list, AccordionMode::Exclusive);
        assert!(state.is_open(1));
        assert!(!state.is_open(2));
        let state = AccordionState::new(&list, AccordionMode::Independent);
        assert_eq!(state.open_count(), 2);
    }

    #[test]
    fn filter_combines_search_and_category() {
        let vaccine = AccordionEntry::new("v", "When to vaccinate?", "Follow the national schedule.")
            .in_category("vaccination");
        let fever = AccordionEntry::new("f", "High fever", "Call us if it lasts.").in_category("symptoms");
        let mut state = AccordionState::new(&[vaccine.clone(), fever.clone()], AccordionMode::Exclusive);

        state.search("  SCHEDULE ");
        assert!(state.filter().matches(&vaccine));
        assert!(!state.filter().matches(&fever));

        state.search("");
        state.select_category(CategoryFilter::parse("symptoms"));
        assert!(!state.filter().matches(&vaccine));
        assert!(state.filter().matches(&fever));

        state.search("vaccinate");
        assert!(!state.filter().matches(&fever));
    }

    #[test]
    fn reduce_returns_same_rc_when_unchanged() {
        let state = Rc::new(AccordionState::new(&entries(2), AccordionMode::Exclusive));
        let next = Rc::clone(&state).reduce(AccordionAction::Close(0));
        assert!(Rc::ptr_eq(&state, &next));
        let next = Rc::clone(&state).reduce(AccordionAction::Open(0));
        assert!(next.is_open(0));
    }

    fn action() -> impl Strategy<Value = AccordionAction> {
        prop_oneof![
            (0usize..6).prop_map(AccordionAction::Toggle),
            (0usize..6).prop_map(AccordionAction::Open),
            (0usize..6).prop_map(AccordionAction::Close),
        ]
    }

    proptest! {
        #[test]
        fn exclusive_mode_never_has_two_open(actions in prop::collection::vec(action(), 0..40)) {
            let mut state = AccordionState::new(&entries(5), AccordionMode::Exclusive);
            for action in actions {
                state.apply(action);
                prop_assert!(state.open_count() <= 1);
            }
        }
    }
}
