use std::fmt;

use serde::Serialize;

use crate::domain::AvatarError;

const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Caller-supplied account identifier in canonical UUID text form.
///
/// The service never mints identifiers; it only checks the 8-4-4-4-12
/// hexadecimal shape (case-insensitive) and carries the value through as
/// supplied, so responses and storage keys echo the caller's casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn parse(value: &str) -> Result<Self, AvatarError> {
        let groups: Vec<&str> = value.split('-').collect();
        let well_formed = groups.len() == GROUP_LENGTHS.len()
            && groups
                .iter()
                .zip(GROUP_LENGTHS)
                .all(|(group, len)| {
                    group.len() == len && group.chars().all(|c| c.is_ascii_hexdigit())
                });

        if well_formed {
            Ok(Self(value.to_string()))
        } else {
            Err(AvatarError::InvalidUserId)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
