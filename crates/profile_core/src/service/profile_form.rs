//! Profile page working copy.
//!
//! # Responsibility
//! - Hold the editable profile draft and its pending field errors.
//! - Surface live format warnings for the draft.
//! - Write the draft to the store on an accepted submit.
//!
//! # Invariants
//! - Editing a field clears that field's pending error.
//! - A submit blocked by required-field errors leaves the store untouched.

use crate::model::profile::{Gender, MaritalStatus, Profile, ProfileField, ProfilePatch};
use crate::model::record::{Education, Qualification, WorkHistory};
use crate::model::state::AppState;
use crate::store::{AppStore, StoreError};
use crate::validation::{
    required_field_errors, validation_warnings, ContactFields, FieldErrors, ValidationWarning,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Profile form errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFormError {
    /// Choice field received a value outside its options.
    InvalidChoice { field: ProfileField, value: String },
    /// Submit blocked by required-field errors.
    MissingRequired(FieldErrors),
    Store(StoreError),
}

impl Display for ProfileFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidChoice { field, value } => {
                write!(f, "invalid value `{value}` for `{}`", field.as_str())
            }
            Self::MissingRequired(errors) => {
                let keys: Vec<&str> = errors.keys().map(|field| field.as_str()).collect();
                write!(f, "required fields are empty: {}", keys.join(", "))
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProfileFormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ProfileFormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Editable profile draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    draft: Profile,
    errors: FieldErrors,
}

impl ProfileForm {
    /// Starts a draft from the stored profile.
    pub fn from_state(state: &AppState) -> Self {
        Self {
            draft: state.profile.clone(),
            errors: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Live advisory warnings for the draft.
    pub fn warnings(&self) -> Vec<ValidationWarning> {
        validation_warnings(ContactFields::from(&self.draft))
    }

    /// Edits one scalar field and clears its pending error.
    ///
    /// # Errors
    /// - `InvalidChoice` for gender/marital status values outside their
    ///   options; the draft is left unchanged.
    pub fn set_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), ProfileFormError> {
        let value = value.into();
        let invalid = |value: String| ProfileFormError::InvalidChoice { field, value };
        match field {
            ProfileField::Name => self.draft.name = value,
            ProfileField::NameKana => self.draft.name_kana = value,
            ProfileField::BirthDate => self.draft.birth_date = value,
            ProfileField::Address => self.draft.address = value,
            ProfileField::Phone => self.draft.phone = value,
            ProfileField::Email => self.draft.email = value,
            ProfileField::Dependents => self.draft.dependents = value,
            ProfileField::Gender => {
                self.draft.gender = Gender::parse(&value).ok_or_else(|| invalid(value))?;
            }
            ProfileField::MaritalStatus => {
                self.draft.marital_status =
                    MaritalStatus::parse(&value).ok_or_else(|| invalid(value))?;
            }
        }
        self.errors.remove(&field);
        Ok(())
    }

    pub fn set_educations(&mut self, educations: Vec<Education>) {
        self.draft.educations = educations;
    }

    pub fn set_work_histories(&mut self, work_histories: Vec<WorkHistory>) {
        self.draft.work_histories = work_histories;
    }

    pub fn set_qualifications(&mut self, qualifications: Vec<Qualification>) {
        self.draft.qualifications = qualifications;
    }

    /// Writes the full draft to `store` unless required fields are blank.
    ///
    /// Warnings do not block the submit.
    pub fn submit(&mut self, store: &AppStore) -> Result<(), ProfileFormError> {
        let errors = required_field_errors(&self.draft);
        if !errors.is_empty() {
            info!(
                "event=profile_submit module=profile_form status=blocked errors={}",
                errors.len()
            );
            self.errors = errors.clone();
            return Err(ProfileFormError::MissingRequired(errors));
        }

        store.update_profile(ProfilePatch::from(self.draft.clone()))?;
        self.errors.clear();
        info!(
            "event=profile_submit module=profile_form status=ok warnings={}",
            self.warnings().len()
        );
        Ok(())
    }
}
