//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::notification::Notification;
use crate::repository::errors::RepositoryResult;
use crate::repository::{NotificationListQuery, NotificationReader};

mock! {
    pub Repository {}

    impl NotificationReader for Repository {
        fn list_notifications(
            &self,
            query: &NotificationListQuery,
        ) -> RepositoryResult<Vec<Notification>>;
    }
}
