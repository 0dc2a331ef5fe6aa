//! Prompt construction for commit-message generation.
//!
//! One template, parameterized by [`Language`]; the wording mirrors the
//! commit-style rules the tool has always shipped with.

use crate::lang::Language;

const SYSTEM_EN: &str = "\
You are an expert in analyzing git diff changes.

Follow these rules for commit messages:
1. Format: <type>: <full description>
2. Use Conventional Commit rules with an appropriate scope.
3. Commit messages should be at least 90 characters and at most 110 characters.
4. Messages must be technical, referencing relevant files or functions.";

const SYSTEM_ID: &str = "\
Anda adalah ahli dalam menganalisis perubahan pada git diff.

Ikuti aturan berikut untuk pesan commit:
1. Format: <type>: <deskripsi lengkap>
2. Gunakan aturan Conventional Commits dengan jenis scope yang sesuai.
3. Pesan commit harus memiliki minimal 90 karakter dan maksimal 110 karakter.
4. Pesan harus lebih teknis, mencantumkan nama file atau fungsi yang relevan.";

/// The fixed system message with the commit-style rules.
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => SYSTEM_EN,
        Language::Id => SYSTEM_ID,
    }
}

/// The user message embedding the staged diff summary.
pub fn user_prompt(language: Language, diff: &str) -> String {
    match language {
        Language::En => {
            format!("Generate 5 commit messages for the following changes:\n\n{diff}")
        }
        Language::Id => {
            format!("Buatkan 5 pesan commit untuk perubahan berikut:\n\n{diff}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_states_length_target() {
        for lang in [Language::En, Language::Id] {
            let system = system_prompt(lang);
            assert!(system.contains("90"));
            assert!(system.contains("110"));
        }
    }

    #[test]
    fn user_prompt_embeds_the_diff() {
        let diff = "src/git/mod.rs | 12 ++++----";
        assert!(user_prompt(Language::En, diff).ends_with(diff));
        assert!(user_prompt(Language::Id, diff).ends_with(diff));
    }

    #[test]
    fn user_prompt_asks_for_five_messages() {
        assert!(user_prompt(Language::En, "x").contains("5 commit messages"));
        assert!(user_prompt(Language::Id, "x").contains("5 pesan commit"));
    }
}
