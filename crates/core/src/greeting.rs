use serde::Serialize;

pub const DEFAULT_NAME: &str = "World";
pub const DEFAULT_GREETING: &str = "Hello";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub name: String,
    pub greeting: String,
    pub excited: bool,
}

impl Greeting {
    /// Build a greeting, substituting defaults for missing or blank parts.
    pub fn new(name: Option<String>, greeting: Option<String>, excited: bool) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            name: non_blank(name).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            greeting: non_blank(greeting).unwrap_or_else(|| DEFAULT_GREETING.to_string()),
            excited,
        }
    }

    pub fn message(&self) -> String {
        let punctuation = if self.excited { '!' } else { '.' };
        format!("{}, {}{punctuation}", self.greeting, self.name)
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(None, None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message() {
        assert_eq!(Greeting::default().message(), "Hello, World.");
    }

    #[test]
    fn excited_custom_greeting() {
        let g = Greeting::new(Some("Alice".into()), Some("Good morning".into()), true);
        assert_eq!(g.message(), "Good morning, Alice!");
    }

    #[test]
    fn blank_parts_use_defaults() {
        let g = Greeting::new(Some("  ".into()), Some(String::new()), false);
        assert_eq!(g.name, "World");
        assert_eq!(g.greeting, "Hello");
    }
}
