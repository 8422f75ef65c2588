//! Profile aggregate and its partial-update patch.
//!
//! # Invariants
//! - Scalar fields are always present; unset is the empty string (or the
//!   `Unset` variant for choice fields).
//! - History collections are ordered by insertion.

use crate::model::record::{Education, EntryId, EntryRecord, Qualification, WorkHistory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Gender choice. Serialized as `male|female|other|""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "male")]
    Male,
    #[serde(rename = "female")]
    Female,
    #[serde(rename = "other")]
    Other,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unset => "",
        }
    }

    /// Parses the wire value; blank input maps to `Unset`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "" => Some(Self::Unset),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "男性",
            Self::Female => "女性",
            Self::Other => "その他",
            Self::Unset => "",
        }
    }
}

/// Marital status choice. Serialized as `married|single|""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaritalStatus {
    #[serde(rename = "married")]
    Married,
    #[serde(rename = "single")]
    Single,
    #[default]
    #[serde(rename = "")]
    Unset,
}

impl MaritalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Single => "single",
            Self::Unset => "",
        }
    }

    /// Parses the wire value; blank input maps to `Unset`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "married" => Some(Self::Married),
            "single" => Some(Self::Single),
            "" => Some(Self::Unset),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Married => "既婚",
            Self::Single => "未婚",
            Self::Unset => "",
        }
    }
}

/// Scalar profile field keys, used for form binding and field-keyed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProfileField {
    Name,
    NameKana,
    BirthDate,
    Address,
    Gender,
    Phone,
    Email,
    MaritalStatus,
    Dependents,
}

impl ProfileField {
    pub const ALL: [ProfileField; 9] = [
        Self::Name,
        Self::NameKana,
        Self::BirthDate,
        Self::Address,
        Self::Gender,
        Self::Phone,
        Self::Email,
        Self::MaritalStatus,
        Self::Dependents,
    ];

    /// Wire key (camelCase).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameKana => "nameKana",
            Self::BirthDate => "birthDate",
            Self::Address => "address",
            Self::Gender => "gender",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::MaritalStatus => "maritalStatus",
            Self::Dependents => "dependents",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

/// The user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub name_kana: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    pub address: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub marital_status: MaritalStatus,
    /// Non-negative integer as entered.
    pub dependents: String,
    pub educations: Vec<Education>,
    pub work_histories: Vec<WorkHistory>,
    pub qualifications: Vec<Qualification>,
}

impl Profile {
    /// Text value of one scalar field; choice fields yield their wire value.
    pub fn scalar(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::NameKana => &self.name_kana,
            ProfileField::BirthDate => &self.birth_date,
            ProfileField::Address => &self.address,
            ProfileField::Gender => self.gender.as_str(),
            ProfileField::Phone => &self.phone,
            ProfileField::Email => &self.email,
            ProfileField::MaritalStatus => self.marital_status.as_str(),
            ProfileField::Dependents => &self.dependents,
        }
    }

    /// Shallow-merges `patch`: only keys present in the patch are replaced.
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            name_kana,
            birth_date,
            address,
            gender,
            phone,
            email,
            marital_status,
            dependents,
            educations,
            work_histories,
            qualifications,
        } = patch;

        if let Some(value) = name {
            self.name = value;
        }
        if let Some(value) = name_kana {
            self.name_kana = value;
        }
        if let Some(value) = birth_date {
            self.birth_date = value;
        }
        if let Some(value) = address {
            self.address = value;
        }
        if let Some(value) = gender {
            self.gender = value;
        }
        if let Some(value) = phone {
            self.phone = value;
        }
        if let Some(value) = email {
            self.email = value;
        }
        if let Some(value) = marital_status {
            self.marital_status = value;
        }
        if let Some(value) = dependents {
            self.dependents = value;
        }
        if let Some(value) = educations {
            self.educations = value;
        }
        if let Some(value) = work_histories {
            self.work_histories = value;
        }
        if let Some(value) = qualifications {
            self.qualifications = value;
        }
    }
}

/// Partial profile update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub name_kana: Option<String>,
    pub birth_date: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub dependents: Option<String>,
    pub educations: Option<Vec<Education>>,
    pub work_histories: Option<Vec<WorkHistory>>,
    pub qualifications: Option<Vec<Qualification>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.touched_keys().is_empty()
    }

    /// Wire keys carried by this patch, for metadata-only logging.
    pub fn touched_keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        let scalars = [
            (ProfileField::Name, self.name.is_some()),
            (ProfileField::NameKana, self.name_kana.is_some()),
            (ProfileField::BirthDate, self.birth_date.is_some()),
            (ProfileField::Address, self.address.is_some()),
            (ProfileField::Gender, self.gender.is_some()),
            (ProfileField::Phone, self.phone.is_some()),
            (ProfileField::Email, self.email.is_some()),
            (ProfileField::MaritalStatus, self.marital_status.is_some()),
            (ProfileField::Dependents, self.dependents.is_some()),
        ];
        for (field, present) in scalars {
            if present {
                keys.push(field.as_str());
            }
        }
        if self.educations.is_some() {
            keys.push("educations");
        }
        if self.work_histories.is_some() {
            keys.push("workHistories");
        }
        if self.qualifications.is_some() {
            keys.push("qualifications");
        }
        keys
    }

    /// Length of the largest collection carried by this patch.
    pub fn largest_collection(&self) -> usize {
        [
            self.educations.as_ref().map(Vec::len),
            self.work_histories.as_ref().map(Vec::len),
            self.qualifications.as_ref().map(Vec::len),
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
    }

    /// First identifier repeated within one carried collection, if any.
    pub fn duplicate_entry_id(&self) -> Option<EntryId> {
        let educations = self.educations.as_deref().and_then(first_repeated_id);
        let work_histories = self.work_histories.as_deref().and_then(first_repeated_id);
        let qualifications = self.qualifications.as_deref().and_then(first_repeated_id);
        educations.or(work_histories).or(qualifications)
    }
}

fn first_repeated_id<T: EntryRecord>(entries: &[T]) -> Option<EntryId> {
    let mut seen = BTreeSet::new();
    entries
        .iter()
        .map(T::id)
        .find(|id| !seen.insert(*id))
}

impl From<Profile> for ProfilePatch {
    /// Full patch replacing every key.
    fn from(profile: Profile) -> Self {
        Self {
            name: Some(profile.name),
            name_kana: Some(profile.name_kana),
            birth_date: Some(profile.birth_date),
            address: Some(profile.address),
            gender: Some(profile.gender),
            phone: Some(profile.phone),
            email: Some(profile.email),
            marital_status: Some(profile.marital_status),
            dependents: Some(profile.dependents),
            educations: Some(profile.educations),
            work_histories: Some(profile.work_histories),
            qualifications: Some(profile.qualifications),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Gender, MaritalStatus, Profile, ProfileField, ProfilePatch};
    use crate::model::record::{Education, Qualification};
    use uuid::Uuid;

    #[test]
    fn apply_replaces_only_provided_keys() {
        let mut profile = Profile {
            name: "山田 太郎".to_string(),
            phone: "090-1234-5678".to_string(),
            ..Profile::default()
        };

        profile.apply(ProfilePatch {
            email: Some("taro@example.com".to_string()),
            gender: Some(Gender::Male),
            ..ProfilePatch::default()
        });

        assert_eq!(profile.name, "山田 太郎");
        assert_eq!(profile.phone, "090-1234-5678");
        assert_eq!(profile.email, "taro@example.com");
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.marital_status, MaritalStatus::Unset);
    }

    #[test]
    fn touched_keys_lists_wire_names() {
        let patch = ProfilePatch {
            name_kana: Some(String::new()),
            qualifications: Some(Vec::new()),
            ..ProfilePatch::default()
        };
        assert_eq!(patch.touched_keys(), vec!["nameKana", "qualifications"]);
        assert!(!patch.is_empty());
        assert!(ProfilePatch::default().is_empty());
    }

    #[test]
    fn choice_fields_parse_wire_values() {
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse(""), Some(Gender::Unset));
        assert_eq!(Gender::parse("unknown"), None);
        assert_eq!(MaritalStatus::parse(" single "), Some(MaritalStatus::Single));
        assert_eq!(MaritalStatus::parse("divorced"), None);
    }

    #[test]
    fn profile_field_keys_round_trip() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::parse(field.as_str()), Some(field));
        }
        assert_eq!(ProfileField::parse("educations"), None);
    }

    #[test]
    fn duplicate_entry_id_is_found_per_collection() {
        let repeated = Qualification::blank(Uuid::new_v4());
        let patch = ProfilePatch {
            educations: Some(vec![Education::blank(Uuid::new_v4())]),
            qualifications: Some(vec![repeated.clone(), repeated.clone()]),
            ..ProfilePatch::default()
        };
        assert_eq!(patch.duplicate_entry_id(), Some(repeated.id));

        let shared = Uuid::new_v4();
        let across_collections = ProfilePatch {
            educations: Some(vec![Education::blank(shared)]),
            qualifications: Some(vec![Qualification::blank(shared)]),
            ..ProfilePatch::default()
        };
        assert_eq!(across_collections.duplicate_entry_id(), None);
    }
}
