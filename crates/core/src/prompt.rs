/// Asks the user to confirm a destructive action.
///
/// The UI supplies the implementation (a dialog, a terminal prompt); any
/// `FnMut(&str) -> bool` closure works too.
pub trait ConfirmPrompt {
    /// Show `message` and return whether the user agreed.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
