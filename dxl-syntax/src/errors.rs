/// Stores reported errors in the order they were reported.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Errors {
    errors: Vec<Error>,

    num_errors: usize,
    num_warnings: usize,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: Error) {
        match error.severity {
            Severity::Error => self.num_errors += 1,
            Severity::Warning => self.num_warnings += 1,
        };

        self.errors.push(error);
    }

    pub fn is_perfect(&self) -> bool {
        self.num_errors == 0 && self.num_warnings == 0
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn num_errors(&self) -> usize {
        self.num_errors
    }

    pub fn num_warnings(&self) -> usize {
        self.num_warnings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Error> + '_ {
        self.errors.iter()
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Error {
    pub severity: Severity,
    /// The byte offset the error was reported at.
    pub at: usize,
    pub message: String,
}

impl Error {
    pub fn new(severity: Severity, at: usize, message: impl Into<String>) -> Self {
        Self { severity, at, message: message.into() }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Severity {
    Error,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::{Error, Errors, Severity};

    #[test]
    fn counts_by_severity() {
        let mut errors = Errors::new();
        assert!(errors.is_perfect());

        errors.add(Error::new(Severity::Error, 3, "bad"));
        errors.add(Error::new(Severity::Warning, 1, "odd"));

        assert_eq!(1, errors.num_errors());
        assert_eq!(1, errors.num_warnings());
        assert!(!errors.is_perfect());

        let reported: Vec<_> = errors.iter().map(|error| (error.at, error.message.as_str())).collect();
        assert_eq!(vec![(3, "bad"), (1, "odd")], reported);
    }
}
