use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::content::FaqEntry;

/// Which single item of the list is expanded, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct AccordionState {
    pub open_index: Option<usize>,
    pub len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AccordionAction {
    Toggle(usize),
}

impl AccordionState {
    /// First item starts expanded.
    pub fn new(len: usize) -> Self {
        Self {
            open_index: if len > 0 { Some(0) } else { None },
            len,
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open_index == Some(index)
    }
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) if index < self.len => {
                let open_index = if self.is_open(index) { None } else { Some(index) };
                debug!("FAQ open item {:?} -> {:?}", self.open_index, open_index);
                Rc::new(Self {
                    open_index,
                    len: self.len,
                })
            }
            AccordionAction::Toggle(index) => {
                debug!("Ignoring toggle of FAQ item {} (only {} items)", index, self.len);
                self
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub items: &'static [FaqEntry],
}

#[function_component(SingleOpenAccordion)]
pub fn single_open_accordion(props: &AccordionProps) -> Html {
    let len = props.items.len();
    let accordion = use_reducer_eq(move || AccordionState::new(len));

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = accordion.is_open(index);
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        accordion.dispatch(AccordionAction::Toggle(index));
                    })
                };

                html! {
                    <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button
                            class="faq-question"
                            onclick={toggle}
                            aria-expanded={is_open.to_string()}
                        >
                            <span class="question-text">{item.question}</span>
                            <IconSvg icon={Icon::ChevronDown} class={classes!("faq-chevron", is_open.then(|| "open"))} />
                        </button>
                        {
                            if is_open {
                                html! { <div class="faq-answer">{item.answer}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(state: Rc<AccordionState>, index: usize) -> Rc<AccordionState> {
        state.reduce(AccordionAction::Toggle(index))
    }

    #[test]
    fn test_first_item_open_by_default() {
        let state = AccordionState::new(6);
        assert_eq!(state.open_index, Some(0));
        assert!(state.is_open(0));
        assert!(!state.is_open(1));
    }

    #[test]
    fn test_empty_list_has_nothing_open() {
        assert_eq!(AccordionState::new(0).open_index, None);
    }

    #[test]
    fn test_open_replace_then_collapse() {
        let state = Rc::new(AccordionState::new(6));
        let state = toggle(state, 2);
        assert_eq!(state.open_index, Some(2));
        let state = toggle(state, 4);
        assert_eq!(state.open_index, Some(4));
        let state = toggle(state, 4);
        assert_eq!(state.open_index, None);
    }

    #[test]
    fn test_toggling_default_item_collapses_it() {
        let state = toggle(Rc::new(AccordionState::new(3)), 0);
        assert_eq!(state.open_index, None);
        let state = toggle(state, 0);
        assert_eq!(state.open_index, Some(0));
    }

    #[test]
    fn test_double_toggle_restores_previous_state() {
        for index in 0..6 {
            for start in [None, Some(index)] {
                let before = Rc::new(AccordionState {
                    open_index: start,
                    len: 6,
                });
                let after = toggle(toggle(before.clone(), index), index);
                assert_eq!(
                    after.open_index, before.open_index,
                    "start {:?}, toggled {}",
                    start, index
                );
            }
        }
    }

    #[test]
    fn test_double_toggle_of_other_item_collapses_all() {
        for open in 0..6 {
            for index in (0..6).filter(|&i| i != open) {
                let before = Rc::new(AccordionState {
                    open_index: Some(open),
                    len: 6,
                });
                let once = toggle(before, index);
                assert_eq!(once.open_index, Some(index));
                let twice = toggle(once, index);
                assert_eq!(twice.open_index, None, "open {}, toggled {}", open, index);
            }
        }
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let state = Rc::new(AccordionState::new(3));
        let next = toggle(state.clone(), 3);
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.open_index, Some(0));
    }

    #[test]
    fn test_at_most_one_valid_index_after_any_sequence() {
        let len = 4;
        // Every sequence of up to three toggles, including one out-of-range index
        let indices: Vec<usize> = (0..=len).collect();
        let mut sequences: Vec<Vec<usize>> = vec![vec![]];
        for _ in 0..3 {
            let mut longer = Vec::new();
            for seq in &sequences {
                for &i in &indices {
                    let mut next = seq.clone();
                    next.push(i);
                    longer.push(next);
                }
            }
            sequences.extend(longer);
        }

        for seq in sequences {
            let mut state = Rc::new(AccordionState::new(len));
            for &i in &seq {
                state = toggle(state, i);
            }
            if let Some(open) = state.open_index {
                assert!(open < len, "sequence {:?} left index {}", seq, open);
            }
            let expanded = (0..len).filter(|&i| state.is_open(i)).count();
            assert!(expanded <= 1, "sequence {:?} expanded {}", seq, expanded);
        }
    }
}
