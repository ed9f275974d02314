//! `AccountDirectory` backed by `id -u <name>`.

use anyhow::Result;

use crate::application::ports::{AccountDirectory, CommandRunner};

/// Looks up local accounts through the system `id` command.
pub struct SystemAccounts<R> {
    runner: R,
}

impl<R: CommandRunner> SystemAccounts<R> {
    #[must_use]
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> AccountDirectory for SystemAccounts<R> {
    async fn user_exists(&self, name: &str) -> Result<bool> {
        let output = self.runner.run("id", &["-u", "--", name]).await?;
        Ok(output.status.success())
    }
}
