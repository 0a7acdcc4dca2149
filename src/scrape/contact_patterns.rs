use regex::Regex;

pub struct ContactPatterns {
    email_regex: Regex,
    phone_regex: Regex,
}

impl ContactPatterns {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}").unwrap(),
            phone_regex: Regex::new(
                r"(\+?\d{1,3}[-.\s]?)?\(?\d{2,5}\)?[-.\s]?\d{3,4}[-.\s]?\d{3,4}",
            )
            .unwrap(),
        }
    }

    pub fn find_email<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.email_regex.find(text).map(|m| m.as_str())
    }

    pub fn find_phone<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.phone_regex.find(text).map(|m| m.as_str())
    }
}

impl Default for ContactPatterns {
    fn default() -> Self {
        Self::new()
    }
}
