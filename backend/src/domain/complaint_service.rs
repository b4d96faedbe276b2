//! Complaint and repair request service.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::manager_scope::dormitory_of;
use crate::domain::ports::{
    ComplaintDesk, ComplaintRepository, DormitoryRepository, StudentRepository,
};
use crate::domain::{
    ComplaintId, ComplaintRepair, ComplaintStatus, ComplaintSubmission, Error, ManagerId,
    NewComplaint, StudentId,
};

/// Service implementing the [`ComplaintDesk`] driving port.
///
/// Submission timestamps come from the injected clock.
#[derive(Clone)]
pub struct ComplaintService<C, S, D> {
    complaints: Arc<C>,
    students: Arc<S>,
    dormitories: Arc<D>,
    clock: Arc<dyn Clock>,
}

impl<C, S, D> ComplaintService<C, S, D> {
    pub fn new(
        complaints: Arc<C>,
        students: Arc<S>,
        dormitories: Arc<D>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            complaints,
            students,
            dormitories,
            clock,
        }
    }
}

#[async_trait]
impl<C, S, D> ComplaintDesk for ComplaintService<C, S, D>
where
    C: ComplaintRepository,
    S: StudentRepository,
    D: DormitoryRepository,
{
    async fn submit(
        &self,
        student: StudentId,
        submission: ComplaintSubmission,
    ) -> Result<ComplaintRepair, Error> {
        if self.students.find_by_id(student).await?.is_none() {
            return Err(Error::not_found("Student not found"));
        }

        let ComplaintSubmission {
            description,
            service_type,
            priority_lvl,
        } = submission;
        let created = self
            .complaints
            .create(&NewComplaint {
                description,
                service_type,
                date_time: self.clock.utc(),
                priority_lvl,
                status: ComplaintStatus::Pending,
                student_id: student,
            })
            .await?;

        info!(complaint = %created.id, student = %student, "complaint submitted");
        Ok(created)
    }

    async fn history(&self, student: StudentId) -> Result<Vec<ComplaintRepair>, Error> {
        Ok(self.complaints.list_by_student(student).await?)
    }

    async fn list_for_manager(&self, manager: ManagerId) -> Result<Vec<ComplaintRepair>, Error> {
        let dormitory = dormitory_of(self.dormitories.as_ref(), manager).await?;
        Ok(self.complaints.list_by_dormitory(dormitory).await?)
    }

    async fn pending(&self) -> Result<Vec<ComplaintRepair>, Error> {
        Ok(self
            .complaints
            .list_by_status(ComplaintStatus::Pending)
            .await?)
    }

    async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
    ) -> Result<ComplaintRepair, Error> {
        let mut complaint = self
            .complaints
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found("Complaint not found"))?;

        self.complaints.update_status(id, status).await?;
        complaint.status = status;

        info!(complaint = %id, %status, "complaint status updated");
        Ok(complaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixture_clock::{fixture_clock, fixture_timestamp};
    use crate::domain::ports::{
        ComplaintRepositoryError, MockComplaintRepository, MockDormitoryRepository,
        MockStudentRepository,
    };
    use crate::domain::student::fixtures::student;
    use crate::domain::ErrorCode;
    use mockall::predicate::eq;
    use rstest::rstest;

    fn service(
        complaints: MockComplaintRepository,
        students: MockStudentRepository,
    ) -> ComplaintService<MockComplaintRepository, MockStudentRepository, MockDormitoryRepository>
    {
        ComplaintService::new(
            Arc::new(complaints),
            Arc::new(students),
            Arc::new(MockDormitoryRepository::new()),
            fixture_clock(),
        )
    }

    fn stored(id: i64, status: ComplaintStatus) -> ComplaintRepair {
        ComplaintRepair {
            id: ComplaintId::new(id),
            description: "Leaking tap".to_owned(),
            service_type: Some("Plumbing".to_owned()),
            date_time: fixture_timestamp(),
            priority_lvl: Some("High".to_owned()),
            status,
            student_id: StudentId::new(1),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn submission_is_pending_and_stamped_by_clock() {
        let mut students = MockStudentRepository::new();
        students
            .expect_find_by_id()
            .return_once(|_| Ok(Some(student(1, "Alice"))));
        let mut complaints = MockComplaintRepository::new();
        complaints
            .expect_create()
            .times(1)
            .withf(|new| {
                new.status == ComplaintStatus::Pending
                    && new.date_time == fixture_timestamp()
                    && new.student_id == StudentId::new(1)
            })
            .return_once(|_| Ok(stored(3, ComplaintStatus::Pending)));

        let created = service(complaints, students)
            .submit(
                StudentId::new(1),
                ComplaintSubmission {
                    description: "Leaking tap".to_owned(),
                    service_type: Some("Plumbing".to_owned()),
                    priority_lvl: Some("High".to_owned()),
                },
            )
            .await
            .expect("submission succeeds");

        assert_eq!(created.status, ComplaintStatus::Pending);
    }

    #[rstest]
    #[tokio::test]
    async fn submission_for_unknown_student_is_not_found() {
        let mut students = MockStudentRepository::new();
        students.expect_find_by_id().return_once(|_| Ok(None));
        let mut complaints = MockComplaintRepository::new();
        complaints.expect_create().times(0);

        let error = service(complaints, students)
            .submit(
                StudentId::new(77),
                ComplaintSubmission {
                    description: "Broken window".to_owned(),
                    service_type: None,
                    priority_lvl: None,
                },
            )
            .await
            .expect_err("unknown student");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "Student not found");
    }

    #[rstest]
    #[case(ComplaintStatus::Approved)]
    #[case(ComplaintStatus::InProgress)]
    #[case(ComplaintStatus::Resolved)]
    #[tokio::test]
    async fn update_status_overwrites_with_given_value(#[case] status: ComplaintStatus) {
        let mut complaints = MockComplaintRepository::new();
        complaints
            .expect_find_by_id()
            .return_once(|_| Ok(Some(stored(4, ComplaintStatus::Rejected))));
        complaints
            .expect_update_status()
            .with(eq(ComplaintId::new(4)), eq(status))
            .times(1)
            .return_once(|_, _| Ok(()));

        let updated = service(complaints, MockStudentRepository::new())
            .update_status(ComplaintId::new(4), status)
            .await
            .expect("update succeeds");

        assert_eq!(updated.status, status);
    }

    #[rstest]
    #[tokio::test]
    async fn update_status_of_missing_complaint_is_not_found() {
        let mut complaints = MockComplaintRepository::new();
        complaints.expect_find_by_id().return_once(|_| Ok(None));
        complaints.expect_update_status().times(0);

        let error = service(complaints, MockStudentRepository::new())
            .update_status(ComplaintId::new(9), ComplaintStatus::Approved)
            .await
            .expect_err("missing complaint");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn query_failures_are_internal_errors() {
        let mut complaints = MockComplaintRepository::new();
        complaints
            .expect_list_by_status()
            .with(eq(ComplaintStatus::Pending))
            .return_once(|_| Err(ComplaintRepositoryError::query("syntax error")));

        let error = service(complaints, MockStudentRepository::new())
            .pending()
            .await
            .expect_err("query failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
