//! The interactive commit session.
//!
//! A linear state machine with no branching back: list changed files, pick
//! files, stage, resolve the API key, summarize the staged diff, generate
//! candidates, pick one, commit, confirm. Exiting early (nothing to commit,
//! nothing selected) is a successful run.

pub mod prompter;

pub use prompter::{Prompter, TermPrompter};

use console::style;

use crate::config::{self, ConfigStore};
use crate::error::SessionError;
use crate::git::{CommandRunner, GitCli};
use crate::lang::Language;
use crate::llm::{self, ChatCompleter};

/// Index of the "all files" sentinel in the multi-select.
const ALL_FILES_INDEX: usize = 0;

/// Everything the session needs, injected by `main`.
pub struct Session<'a, R: CommandRunner> {
    pub git: &'a GitCli<R>,
    pub completer: &'a dyn ChatCompleter,
    pub store: &'a ConfigStore,
    pub prompter: &'a dyn Prompter,
    pub language: Language,
}

impl<R: CommandRunner> Session<'_, R> {
    /// Run the workflow start to finish.
    ///
    /// If the commit step fails, files staged earlier stay staged; no
    /// rollback is attempted.
    pub async fn run(&self) -> Result<(), SessionError> {
        let messages = self.language.messages();

        // Step 1: Discover changed files.
        let changed = self.git.changed_files().await;
        if changed.is_empty() {
            println!("{}", style(messages.no_changes_to_commit).yellow());
            return Ok(());
        }

        // Step 2: Let the user pick files; the all-files sentinel comes first.
        let mut choices = Vec::with_capacity(changed.len() + 1);
        choices.push(messages.all_files.to_string());
        choices.extend(changed.iter().cloned());

        let selected = self
            .prompter
            .multi_select(messages.select_files, &choices)?;
        if selected.is_empty() {
            println!("{}", style(messages.no_files_selected).yellow());
            return Ok(());
        }

        // Step 3: Stage the selection.
        if selected.contains(&ALL_FILES_INDEX) {
            self.git.stage_all().await?;
        } else {
            let paths: Vec<String> = selected
                .iter()
                .map(|&index| changed[index - 1].clone())
                .collect();
            self.git.stage_paths(&paths).await?;
        }

        // Step 4: Resolve the API key (prompting on first run).
        let api_key = config::ensure_api_key(self.store, self.prompter, messages)?;

        // Step 5: Summarize the staged diff.
        let diff = self.git.staged_diff().await;

        // Step 6: Generate candidate messages (always yields at least one).
        let candidates =
            llm::commit_candidates(self.completer, &api_key, &diff, self.language).await;

        // Step 7: Let the user pick a message.
        let choice = self.prompter.select(messages.choose_message, &candidates)?;
        let message = &candidates[choice];

        // Step 8: Commit.
        self.git.commit(message).await?;

        // Step 9: Confirm.
        println!(
            "✅ {} \"{}\"",
            style(messages.committed).green(),
            style(message).green()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::prompter::MockPrompter;
    use super::*;
    use crate::git::runner::{CommandOutput, MockCommandRunner};
    use crate::llm::{FALLBACK_MESSAGE, MockChatCompleter};
    use mockall::Sequence;

    fn ok_output(stdout: &str) -> CommandOutput {
        CommandOutput {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    fn session_parts(dir: &tempfile::TempDir) -> ConfigStore {
        let store = ConfigStore::new(dir.path().join("config.json"));
        store.save("gsk_session").unwrap();
        store
    }

    #[tokio::test]
    async fn exits_cleanly_when_nothing_changed() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| args == ["status", "--porcelain"])
            .times(1)
            .returning(|_, _| Ok(ok_output("")));

        let dir = tempfile::tempdir().unwrap();
        let store = session_parts(&dir);
        let git = GitCli::new(runner, Language::En.messages());
        let completer = MockChatCompleter::new();
        let prompter = MockPrompter::new();

        let session = Session {
            git: &git,
            completer: &completer,
            store: &store,
            prompter: &prompter,
            language: Language::En,
        };
        // No prompt, no staging, no network: the mocks would panic otherwise.
        session.run().await.unwrap();
    }

    #[tokio::test]
    async fn exits_cleanly_when_nothing_selected() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| args == ["status", "--porcelain"])
            .times(1)
            .returning(|_, _| Ok(ok_output("M  a.rs\n")));

        let mut prompter = MockPrompter::new();
        prompter
            .expect_multi_select()
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let dir = tempfile::tempdir().unwrap();
        let store = session_parts(&dir);
        let git = GitCli::new(runner, Language::En.messages());
        let completer = MockChatCompleter::new();

        let session = Session {
            git: &git,
            completer: &completer,
            store: &store,
            prompter: &prompter,
            language: Language::En,
        };
        session.run().await.unwrap();
    }

    #[tokio::test]
    async fn all_files_sentinel_stages_everything_once_before_generation() {
        let mut seq = Sequence::new();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| args == ["status", "--porcelain"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(ok_output("M  a.rs\n?? b.rs\n")));
        runner
            .expect_run()
            .withf(|_, args| args == ["add", "."])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(ok_output("")));
        runner
            .expect_run()
            .withf(|_, args| args == ["diff", "--staged", "--stat"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(ok_output(" a.rs | 1 +\n")));

        let mut completer = MockChatCompleter::new();
        completer
            .expect_complete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok("1. feat(a): change a\n2. fix(b): change b".to_string()));

        runner
            .expect_run()
            .withf(|_, args| args == ["commit", "-m", "fix(b): change b"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(ok_output("")));

        let mut prompter = MockPrompter::new();
        prompter
            .expect_multi_select()
            .withf(|_, items| items[0] == "All files" && items.len() == 3)
            .times(1)
            .returning(|_, _| Ok(vec![0]));
        prompter.expect_select().times(1).returning(|_, _| Ok(1));

        let dir = tempfile::tempdir().unwrap();
        let store = session_parts(&dir);
        let git = GitCli::new(runner, Language::En.messages());

        let session = Session {
            git: &git,
            completer: &completer,
            store: &store,
            prompter: &prompter,
            language: Language::En,
        };
        session.run().await.unwrap();
    }

    #[tokio::test]
    async fn explicit_selection_stages_exactly_those_paths() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| args == ["status", "--porcelain"])
            .times(1)
            .returning(|_, _| Ok(ok_output("M  a.rs\nM  b.rs\n?? c.rs\n")));
        runner
            .expect_run()
            .withf(|_, args| args == ["add", "--", "a.rs", "c.rs"])
            .times(1)
            .returning(|_, _| Ok(ok_output("")));
        runner
            .expect_run()
            .withf(|_, args| args == ["diff", "--staged", "--stat"])
            .times(1)
            .returning(|_, _| Ok(ok_output("stuff")));
        runner
            .expect_run()
            .withf(|_, args| args[0] == "commit")
            .times(1)
            .returning(|_, _| Ok(ok_output("")));

        let mut prompter = MockPrompter::new();
        // Indices 1 and 3 in the choices list map past the sentinel to
        // changed[0] and changed[2].
        prompter
            .expect_multi_select()
            .times(1)
            .returning(|_, _| Ok(vec![1, 3]));
        prompter.expect_select().times(1).returning(|_, _| Ok(0));

        let mut completer = MockChatCompleter::new();
        completer
            .expect_complete()
            .times(1)
            .returning(|_, _, _| Ok("1. chore: update files a.rs and c.rs".to_string()));

        let dir = tempfile::tempdir().unwrap();
        let store = session_parts(&dir);
        let git = GitCli::new(runner, Language::En.messages());

        let session = Session {
            git: &git,
            completer: &completer,
            store: &store,
            prompter: &prompter,
            language: Language::En,
        };
        session.run().await.unwrap();
    }

    #[tokio::test]
    async fn empty_staged_diff_skips_network_and_commits_fallback() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| args == ["status", "--porcelain"])
            .times(1)
            .returning(|_, _| Ok(ok_output("?? a.rs\n")));
        runner
            .expect_run()
            .withf(|_, args| args == ["add", "."])
            .times(1)
            .returning(|_, _| Ok(ok_output("")));
        runner
            .expect_run()
            .withf(|_, args| args == ["diff", "--staged", "--stat"])
            .times(1)
            .returning(|_, _| Ok(ok_output("")));
        runner
            .expect_run()
            .withf(|_, args| args == ["commit", "-m", FALLBACK_MESSAGE])
            .times(1)
            .returning(|_, _| Ok(ok_output("")));

        let mut prompter = MockPrompter::new();
        prompter
            .expect_multi_select()
            .times(1)
            .returning(|_, _| Ok(vec![0]));
        prompter.expect_select().times(1).returning(|_, _| Ok(0));

        let mut completer = MockChatCompleter::new();
        completer.expect_complete().times(0);

        let dir = tempfile::tempdir().unwrap();
        let store = session_parts(&dir);
        let git = GitCli::new(runner, Language::En.messages());

        let session = Session {
            git: &git,
            completer: &completer,
            store: &store,
            prompter: &prompter,
            language: Language::En,
        };
        session.run().await.unwrap();
    }

    #[tokio::test]
    async fn commit_failure_propagates_without_rollback() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|_, args| args == ["status", "--porcelain"])
            .times(1)
            .returning(|_, _| Ok(ok_output("M  a.rs\n")));
        runner
            .expect_run()
            .withf(|_, args| args == ["add", "."])
            .times(1)
            .returning(|_, _| Ok(ok_output("")));
        runner
            .expect_run()
            .withf(|_, args| args == ["diff", "--staged", "--stat"])
            .times(1)
            .returning(|_, _| Ok(ok_output("a.rs | 1 +")));
        runner
            .expect_run()
            .withf(|_, args| args[0] == "commit")
            .times(1)
            .returning(|_, _| {
                Ok(CommandOutput {
                    success: false,
                    stdout: String::new(),
                    stderr: "gpg failed to sign the data".to_string(),
                })
            });
        // No reset/restore calls follow the failed commit.

        let mut prompter = MockPrompter::new();
        prompter
            .expect_multi_select()
            .times(1)
            .returning(|_, _| Ok(vec![0]));
        prompter.expect_select().times(1).returning(|_, _| Ok(0));

        let mut completer = MockChatCompleter::new();
        completer
            .expect_complete()
            .times(1)
            .returning(|_, _, _| Ok("1. fix(a): adjust a.rs".to_string()));

        let dir = tempfile::tempdir().unwrap();
        let store = session_parts(&dir);
        let git = GitCli::new(runner, Language::En.messages());

        let session = Session {
            git: &git,
            completer: &completer,
            store: &store,
            prompter: &prompter,
            language: Language::En,
        };
        let err = session.run().await.unwrap_err();
        assert!(matches!(err, SessionError::Git(_)));
    }
}
