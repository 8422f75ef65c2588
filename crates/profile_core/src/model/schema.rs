//! Field schemas describing each history record shape.
//!
//! A schema is a plain value: the collection manager is parameterized by it
//! instead of by record type, so every shape shares one commit/validate path.

use crate::model::record::{
    FIELD_ACQUISITION_DATE, FIELD_COMPANY_NAME, FIELD_DEPARTMENT, FIELD_END_DATE, FIELD_POSITION,
    FIELD_QUALIFICATION_NAME, FIELD_SCHOOL_NAME, FIELD_START_DATE,
};
use serde::Serialize;

/// Input kind for one schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Calendar month, `YYYY-MM`.
    Month,
    /// Calendar month or the ongoing sentinel.
    MonthOrOngoing,
}

impl FieldKind {
    /// Whether the input widget offers the "ongoing" shortcut.
    pub fn accepts_ongoing(self) -> bool {
        matches!(self, Self::MonthOrOngoing)
    }
}

/// One field declaration inside a record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSchema {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSchema {
    pub const fn required(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            placeholder,
            required: true,
            kind: FieldKind::Text,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            key,
            label,
            placeholder,
            required: false,
            kind: FieldKind::Text,
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Ordered description of one record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    /// Section title shown above the collection.
    pub title: &'static str,
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    pub fn new(title: &'static str, fields: Vec<FieldSchema>) -> Self {
        Self { title, fields }
    }

    /// Education history: school, department, start and end month.
    pub fn education() -> Self {
        Self::new(
            "学歴",
            vec![
                FieldSchema::required(FIELD_SCHOOL_NAME, "学校名", "○○大学"),
                FieldSchema::optional(FIELD_DEPARTMENT, "学部・学科", "工学部 情報工学科"),
                FieldSchema::required(FIELD_START_DATE, "開始年月", "2020-04")
                    .with_kind(FieldKind::Month),
                FieldSchema::required(FIELD_END_DATE, "終了年月", "2024-03")
                    .with_kind(FieldKind::MonthOrOngoing),
            ],
        )
    }

    /// Work history: company, department, position, start and end month.
    pub fn work_history() -> Self {
        Self::new(
            "職歴",
            vec![
                FieldSchema::required(FIELD_COMPANY_NAME, "会社名", "株式会社○○"),
                FieldSchema::required(
                    FIELD_DEPARTMENT,
                    "部署・プロジェクト",
                    "開発部 Webサービス開発",
                ),
                FieldSchema::required(FIELD_POSITION, "役職", "主任"),
                FieldSchema::required(FIELD_START_DATE, "開始年月", "2020-04")
                    .with_kind(FieldKind::Month),
                FieldSchema::required(FIELD_END_DATE, "終了年月", "2024-03")
                    .with_kind(FieldKind::MonthOrOngoing),
            ],
        )
    }

    /// Qualifications and licenses.
    pub fn qualification() -> Self {
        Self::new(
            "資格・免許",
            vec![
                FieldSchema::required(
                    FIELD_QUALIFICATION_NAME,
                    "資格・免許名",
                    "普通自動車第一種運転免許",
                ),
                FieldSchema::required(FIELD_ACQUISITION_DATE, "取得年月", "2020-04")
                    .with_kind(FieldKind::Month),
            ],
        )
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Required keys in declaration order.
    pub fn required_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.key)
    }

    /// Label for the add-entry form, e.g. `学歴を追加`.
    pub fn add_label(&self) -> String {
        format!("{}を追加", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldKind, RecordSchema};

    #[test]
    fn end_dates_accept_ongoing_but_start_dates_do_not() {
        let schema = RecordSchema::work_history();
        let end = schema.field("endDate").expect("endDate declared");
        let start = schema.field("startDate").expect("startDate declared");
        assert_eq!(end.kind, FieldKind::MonthOrOngoing);
        assert!(end.kind.accepts_ongoing());
        assert!(!start.kind.accepts_ongoing());
    }

    #[test]
    fn required_keys_follow_declaration_order() {
        let keys: Vec<_> = RecordSchema::education().required_keys().collect();
        assert_eq!(keys, vec!["schoolName", "startDate", "endDate"]);

        let keys: Vec<_> = RecordSchema::work_history().required_keys().collect();
        assert_eq!(
            keys,
            vec!["companyName", "department", "position", "startDate", "endDate"]
        );

        let keys: Vec<_> = RecordSchema::qualification().required_keys().collect();
        assert_eq!(keys, vec!["qualificationName", "acquisitionDate"]);
    }

    #[test]
    fn add_label_uses_title() {
        assert_eq!(RecordSchema::qualification().add_label(), "資格・免許を追加");
    }
}
