//! Payload validation primitives shared by all entities.
//!
//! Client-supplied fields arrive as untyped JSON. A field counts as absent when
//! it is missing, `null`, `false`, numeric zero or an empty string; any other
//! non-string value is present but of the wrong type.

use std::fmt;

use serde_json::Value;
use validator::ValidationErrors;

/// The ways a payload can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadErrorKind {
    NotContainNeededProperty,
    NotMeetDataTypeSpecification,
    UsernameLimitChar,
    UsernameContainRestrictedCharacter,
}

impl PayloadErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotContainNeededProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::NotMeetDataTypeSpecification => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::UsernameLimitChar => "USERNAME_LIMIT_CHAR",
            Self::UsernameContainRestrictedCharacter => "USERNAME_CONTAIN_RESTRICTED_CHARACTER",
        }
    }
}

impl fmt::Display for PayloadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure tagged with the entity that raised it,
/// displayed as `NEW_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity}.{kind}")]
pub struct PayloadError {
    pub entity: &'static str,
    pub kind: PayloadErrorKind,
}

impl PayloadError {
    pub fn new(entity: &'static str, kind: PayloadErrorKind) -> Self {
        Self { entity, kind }
    }

    /// Maps `validator` failures onto the entity's error kind. A length
    /// failure is reported ahead of a character failure.
    pub fn from_validation(entity: &'static str, errors: &ValidationErrors) -> Self {
        let failed = |kind: PayloadErrorKind| {
            errors
                .field_errors()
                .values()
                .any(|errs| errs.iter().any(|e| e.code == kind.as_str()))
        };

        let kind = [
            PayloadErrorKind::UsernameLimitChar,
            PayloadErrorKind::UsernameContainRestrictedCharacter,
        ]
        .into_iter()
        .find(|kind| failed(*kind))
        .unwrap_or(PayloadErrorKind::NotMeetDataTypeSpecification);

        Self::new(entity, kind)
    }

    /// Client-facing message for this error.
    pub fn translate(&self) -> &'static str {
        use PayloadErrorKind::*;

        match (self.entity, self.kind) {
            ("NEW_THREAD", NotContainNeededProperty) => {
                "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
            }
            ("NEW_THREAD", NotMeetDataTypeSpecification) => {
                "tidak dapat membuat thread baru karena tipe data tidak sesuai"
            }
            ("NEW_COMMENT", NotContainNeededProperty) => {
                "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
            }
            ("NEW_COMMENT", NotMeetDataTypeSpecification) => {
                "tidak dapat membuat comment baru karena tipe data tidak sesuai"
            }
            ("NEW_REPLY", NotContainNeededProperty) => {
                "tidak dapat membuat balasan baru karena properti yang dibutuhkan tidak ada"
            }
            ("NEW_REPLY", NotMeetDataTypeSpecification) => {
                "tidak dapat membuat balasan baru karena tipe data tidak sesuai"
            }
            ("NEW_LIKE", NotContainNeededProperty) => {
                "tidak dapat menyukai comment karena properti yang dibutuhkan tidak ada"
            }
            ("NEW_LIKE", NotMeetDataTypeSpecification) => {
                "tidak dapat menyukai comment karena tipe data tidak sesuai"
            }
            ("REGISTER_USER", NotContainNeededProperty) => {
                "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada"
            }
            ("REGISTER_USER", NotMeetDataTypeSpecification) => {
                "tidak dapat membuat user baru karena tipe data tidak sesuai"
            }
            ("REGISTER_USER", UsernameLimitChar) => {
                "tidak dapat membuat user baru karena karakter username melebihi batas limit"
            }
            ("REGISTER_USER", UsernameContainRestrictedCharacter) => {
                "tidak dapat membuat user baru karena username mengandung karakter terlarang"
            }
            ("USER_LOGIN", NotContainNeededProperty) => "harus mengirimkan username dan password",
            ("USER_LOGIN", NotMeetDataTypeSpecification) => {
                "username dan password harus string"
            }
            (_, NotContainNeededProperty) => "properti yang dibutuhkan tidak ada",
            _ => "tipe data tidak sesuai",
        }
    }
}

/// Whether a raw field counts as supplied.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Checks a set of raw fields in two phases: presence first, then type.
///
/// Returns the fields as owned strings in the order given.
pub fn require_text<const N: usize>(
    entity: &'static str,
    fields: [Option<&Value>; N],
) -> Result<[String; N], PayloadError> {
    if !fields.iter().all(|field| is_present(*field)) {
        return Err(PayloadError::new(
            entity,
            PayloadErrorKind::NotContainNeededProperty,
        ));
    }

    let mut texts: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, field) in texts.iter_mut().zip(fields) {
        match field {
            Some(Value::String(s)) => *slot = s.clone(),
            _ => {
                return Err(PayloadError::new(
                    entity,
                    PayloadErrorKind::NotMeetDataTypeSpecification,
                ))
            }
        }
    }

    Ok(texts)
}

/// Checks that already-typed fields are non-empty.
pub fn require_non_empty(entity: &'static str, fields: &[&str]) -> Result<(), PayloadError> {
    if fields.iter().any(|field| field.is_empty()) {
        return Err(PayloadError::new(
            entity,
            PayloadErrorKind::NotContainNeededProperty,
        ));
    }
    Ok(())
}
