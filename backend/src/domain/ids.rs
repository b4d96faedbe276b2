//! Numeric identifiers for dormitory records.
//!
//! Every table keys on a 64-bit integer. Wrapping each in its own newtype keeps
//! a student id from being passed where a manager id is expected.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// The raw identifier.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Student identifier (the student number).
    StudentId
);
define_id!(
    /// Dormitory manager identifier.
    ManagerId
);
define_id!(
    /// Dormitory building identifier.
    DormitoryId
);
define_id!(
    /// Announcement identifier.
    AnnouncementId
);
define_id!(
    /// Complaint or repair request identifier.
    ComplaintId
);
define_id!(
    /// Check-in/out request identifier.
    CheckInOutId
);
