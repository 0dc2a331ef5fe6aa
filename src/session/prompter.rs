//! Terminal prompts behind a mockable trait.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};

/// Trait for the three interactions the workflow needs.
///
/// This abstraction allows driving the session from tests without a TTY.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Free-form text input. May return empty input; validation is the
    /// caller's concern.
    fn input(&self, prompt: &str) -> io::Result<String>;

    /// Checkbox selection; returns the indices of the chosen items.
    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Vec<usize>>;

    /// Single-choice selection; returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[String]) -> io::Result<usize>;
}

/// Real prompter backed by dialoguer.
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn input(&self, prompt: &str) -> io::Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> io::Result<Vec<usize>> {
        MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(io::Error::other)
    }

    fn select(&self, prompt: &str, items: &[String]) -> io::Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(io::Error::other)
    }
}
