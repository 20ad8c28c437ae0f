use crate::core::field::Field;
use crate::core::validation::{ErrorMap, ValidationRules};
use indexmap::IndexSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Snapshot of the values taken by a submit that passed validation.
pub type Submission = FormValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(Submission),
    Rejected(ErrorMap),
}

/// Local state of one mounted contact form.
///
/// `errors` always equals the validation of the current values, restricted to
/// fields the user has typed into (or every field once a submit was attempted).
#[derive(Debug, Clone)]
pub struct FormState {
    values: FormValues,
    touched: IndexSet<Field>,
    submit_attempted: bool,
    errors: ErrorMap,
    submission: Option<Submission>,
    phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            touched: IndexSet::new(),
            submit_attempted: false,
            errors: ErrorMap::new(),
            submission: None,
            phase: Phase::Editing,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.submission.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    pub fn apply_input(&mut self, field: Field, value: String, rules: &ValidationRules) {
        self.values.set(field, value);
        self.touched.insert(field);
        self.phase = Phase::Editing;
        self.revalidate(rules);
    }

    pub fn revalidate(&mut self, rules: &ValidationRules) {
        let all = rules.validate(&self.values);
        self.errors = all
            .into_iter()
            .filter(|(field, _)| self.submit_attempted || self.touched.contains(field))
            .collect();
    }

    pub fn submit(&mut self, rules: &ValidationRules) -> SubmitOutcome {
        self.submit_attempted = true;
        self.revalidate(rules);

        if !self.errors.is_empty() {
            return SubmitOutcome::Rejected(self.errors.clone());
        }

        let snapshot = self.values.clone();
        self.submission = Some(snapshot.clone());
        self.phase = Phase::Submitted;
        SubmitOutcome::Accepted(snapshot)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
