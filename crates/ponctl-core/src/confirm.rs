//! User confirmation abstraction.
//!
//! Destructive steps (overwriting an existing registration, rebooting or
//! deleting an ONU) require an explicit approval. The workflow only needs
//! an async yes/no answer -- how that answer is obtained (terminal prompt,
//! dialog, `--yes` flag) is the presentation layer's concern.

/// An async confirmation step returning whether the user approved.
pub trait Confirmation {
    /// Ask the user to approve a destructive step.
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool>;
}

/// Approves every prompt without asking. Backs `--yes`-style flags and
/// non-interactive callers.
#[derive(Debug, Clone, Copy)]
pub struct AutoApprove;

impl Confirmation for AutoApprove {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
