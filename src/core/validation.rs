use crate::config::FormConfig;
use crate::core::field::Field;
use crate::core::state::FormValues;
use crate::error::Result;
use crate::input::validators::{self, Validator, run_validators};
use indexmap::IndexMap;

/// Field → first failing rule's message, in field display order.
pub type ErrorMap = IndexMap<Field, String>;

pub const LAST_NAME_REQUIRED: &str = "lastName is a required field.";
pub const FIRST_NAME_REQUIRED: &str = "firstName is a required field.";
pub const EMAIL_INVALID: &str = "email must be a valid email address.";

pub fn first_name_length_message(min: usize) -> String {
    format!("firstName must have at least {min} characters.")
}

pub struct ValidationRules {
    rules: IndexMap<Field, Vec<Validator>>,
}

impl ValidationRules {
    pub fn from_config(config: &FormConfig) -> Result<Self> {
        let mut rules: IndexMap<Field, Vec<Validator>> = IndexMap::new();
        // Length runs first, so an empty first name reports the length message.
        rules.insert(
            Field::FirstName,
            vec![
                validators::min_length(
                    config.first_name_min_length,
                    first_name_length_message(config.first_name_min_length),
                ),
                validators::required(FIRST_NAME_REQUIRED),
            ],
        );
        rules.insert(Field::LastName, vec![validators::required(LAST_NAME_REQUIRED)]);
        rules.insert(
            Field::Email,
            vec![validators::pattern(&config.email_pattern, EMAIL_INVALID)?],
        );
        rules.insert(Field::Message, Vec::new());
        Ok(Self { rules })
    }

    pub fn validate_field(&self, field: Field, value: &str) -> Option<String> {
        let validators = self.rules.get(&field)?;
        run_validators(validators, value).err()
    }

    pub fn validate(&self, values: &FormValues) -> ErrorMap {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                self.validate_field(field, values.get(field))
                    .map(|err| (field, err))
            })
            .collect()
    }
}
