//! Conversions from driven-port failures into domain errors.
//!
//! Connection failures surface as `service_unavailable`; query failures are
//! internal errors and get redacted by the HTTP adapter.

use super::Error;
use super::ports::{
    AnnouncementRepositoryError, CheckInOutRepositoryError, ComplaintRepositoryError,
    DormitoryRepositoryError, RoomRepositoryError, StudentRepositoryError,
};

macro_rules! map_repository_error {
    ($error:ident, $label:literal) => {
        impl From<$error> for Error {
            fn from(error: $error) -> Self {
                match error {
                    $error::Connection { message } => Error::service_unavailable(format!(
                        concat!($label, " repository unavailable: {}"),
                        message
                    )),
                    $error::Query { message } => Error::internal(format!(
                        concat!($label, " repository error: {}"),
                        message
                    )),
                }
            }
        }
    };
}

map_repository_error!(StudentRepositoryError, "student");
map_repository_error!(RoomRepositoryError, "room");
map_repository_error!(DormitoryRepositoryError, "dormitory");
map_repository_error!(AnnouncementRepositoryError, "announcement");
map_repository_error!(ComplaintRepositoryError, "complaint");
map_repository_error!(CheckInOutRepositoryError, "check-in/out");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(RoomRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(RoomRepositoryError::query("bad row"), ErrorCode::InternalError)]
    fn room_errors_map_to_codes(#[case] error: RoomRepositoryError, #[case] code: ErrorCode) {
        assert_eq!(Error::from(error).code(), code);
    }

    #[test]
    fn message_names_the_repository() {
        let error = Error::from(StudentRepositoryError::connection("timeout"));
        assert_eq!(error.message(), "student repository unavailable: timeout");
    }
}
