use crate::core::models::{Pid, SelectionChoice};
use crate::core::traits::Selector;
use crate::error::SelectionError;
use console::Term;
use dialoguer::MultiSelect;

/// Checkbox prompt on stderr; space toggles, enter confirms, esc selects nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerSelector;

impl Selector for DialoguerSelector {
    fn select(
        &self,
        header: &str,
        choices: &[SelectionChoice],
    ) -> Result<Vec<Pid>, SelectionError> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(SelectionError::NotInteractive);
        }

        let items: Vec<(&str, bool)> = choices
            .iter()
            .map(|choice| (choice.display_line.as_str(), choice.pre_checked))
            .collect();

        let picked = MultiSelect::new()
            .with_prompt(header)
            .items_checked(&items)
            .report(false)
            .interact_on_opt(&term)?
            .unwrap_or_default();

        Ok(picked
            .into_iter()
            .filter_map(|index| choices.get(index).map(|choice| choice.value))
            .collect())
    }
}
