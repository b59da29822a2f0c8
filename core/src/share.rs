/// Hands a message and a link over to the platform's sharing flow.
///
/// Nothing is reported back; the summary view fires and forgets.
pub trait Share {
    fn share(&self, message: &str, url: &str);
}

impl<F> Share for F
where
    F: Fn(&str, &str),
{
    fn share(&self, message: &str, url: &str) {
        self(message, url)
    }
}
