//! Profile Endpoint

use super::{Ack, ApiClient, ApiError};
use crate::models::ProfileUpdate;

impl ApiClient {
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Ack, ApiError> {
        self.post_json("/update_profile", update).await
    }
}
