use crate::cli::Category;

/// One labeled assertion against an artifact.
///
/// `failure` carries the human-readable reason and is set iff the check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub label: String,
    pub failure: Option<String>,
}

impl CheckResult {
    pub fn pass(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            failure: None,
        }
    }

    pub fn fail(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            failure: Some(reason.into()),
        }
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Precondition of a category. A broken precondition closes the category.
#[derive(Debug)]
pub enum Precondition<T> {
    Holds { label: String, value: T },
    Broken(CheckResult),
}

impl<T> Precondition<T> {
    pub fn holds(label: impl Into<String>, value: T) -> Self {
        Precondition::Holds {
            label: label.into(),
            value,
        }
    }

    pub fn broken(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Precondition::Broken(CheckResult::fail(label, reason))
    }
}

/// Ordered results of one category, in the order the checks ran.
#[derive(Debug, Default)]
pub struct Checks {
    results: Vec<CheckResult>,
}

impl Checks {
    /// Records the precondition and hands back its value when it holds.
    pub fn require<T>(&mut self, precondition: Precondition<T>) -> Option<T> {
        match precondition {
            Precondition::Holds { label, value } => {
                self.results.push(CheckResult::pass(label));
                Some(value)
            }
            Precondition::Broken(result) => {
                self.results.push(result);
                None
            }
        }
    }

    pub fn record(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    pub fn into_results(self) -> Vec<CheckResult> {
        self.results
    }
}

#[derive(Debug)]
pub struct CategoryReport {
    pub category: Category,
    pub results: Vec<CheckResult>,
}

impl CategoryReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn add(&mut self, report: &CategoryReport) {
        self.passed += report.passed();
        self.failed += report.failed();
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn exit_code(&self) -> u8 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}
