use crate::*;

/// Sentence summarizing a finished round, shown under the title.
pub trait FeedbackText {
    fn feedback(&self, is_success: bool, attempts: u32) -> String;
}

impl<F> FeedbackText for F
where
    F: Fn(bool, u32) -> String,
{
    fn feedback(&self, is_success: bool, attempts: u32) -> String {
        self(is_success, attempts)
    }
}

#[derive(Clone, Debug)]
pub struct LocalizedFeedback<R> {
    text: R,
}

impl<R: TextResolver> LocalizedFeedback<R> {
    pub fn new(text: R) -> Self {
        Self { text }
    }

    const fn template_key(is_success: bool, attempts: u32) -> &'static str {
        match (is_success, attempts) {
            (true, 0 | 1) => "#@feedback_success_first",
            (true, _) => "#@feedback_success",
            (false, _) => "#@feedback_fail",
        }
    }
}

impl<R: TextResolver> FeedbackText for LocalizedFeedback<R> {
    fn feedback(&self, is_success: bool, attempts: u32) -> String {
        let template = self.text.resolve(Self::template_key(is_success, attempts));
        format_count(&template, attempts)
    }
}
