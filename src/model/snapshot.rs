use serde::{Deserialize, Serialize};

use crate::model::member::ExecutiveMember;

/// Persisted form of one member.
/// Field names match the JSON the roster has always been stored as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSnapshot {
    pub name: String,
    pub post: String,
    #[serde(default)]
    pub absent_count: u32,
    #[serde(default)]
    pub total_absent_days: u32,
    #[serde(default)]
    pub total_present_days: u32,
    #[serde(default)]
    pub consecutive_absent_days: u32,
    #[serde(default)]
    pub is_blacklisted: bool,
}

impl From<&ExecutiveMember> for MemberSnapshot {
    fn from(member: &ExecutiveMember) -> Self {
        MemberSnapshot {
            name: member.name().to_string(),
            post: member.post().to_string(),
            absent_count: member.absent_count(),
            total_absent_days: member.total_absent_days(),
            total_present_days: member.total_present_days(),
            consecutive_absent_days: member.consecutive_absent_days(),
            is_blacklisted: member.is_blacklisted(),
        }
    }
}

impl From<MemberSnapshot> for ExecutiveMember {
    fn from(snapshot: MemberSnapshot) -> Self {
        ExecutiveMember::from_parts(
            snapshot.name,
            snapshot.post,
            snapshot.total_present_days,
            snapshot.total_absent_days,
            snapshot.absent_count,
            snapshot.consecutive_absent_days,
            snapshot.is_blacklisted,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_legacy_camel_case_record() {
        let json = r#"{
            "name": "Asha",
            "post": "President",
            "absentCount": 4,
            "totalAbsentDays": 5,
            "totalPresentDays": 9,
            "consecutiveAbsentDays": 2,
            "isBlacklisted": true
        }"#;

        let snap: MemberSnapshot = serde_json::from_str(json).unwrap();
        let member = ExecutiveMember::from(snap.clone());

        assert_eq!(member.absent_count(), 4);
        assert_eq!(member.total_absent_days(), 5);
        assert_eq!(member.total_present_days(), 9);
        assert!(member.is_blacklisted());
        assert_eq!(MemberSnapshot::from(&member), snap);
    }

    #[test]
    fn writes_all_seven_fields() {
        let member = ExecutiveMember::new("Ravi", "Treasurer");
        let value = serde_json::to_value(MemberSnapshot::from(&member)).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "name",
            "post",
            "absentCount",
            "totalAbsentDays",
            "totalPresentDays",
            "consecutiveAbsentDays",
            "isBlacklisted",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 7);
    }
}
