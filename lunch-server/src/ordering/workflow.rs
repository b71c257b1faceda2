//! Order group opening workflow

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use shared::models::{
    OpenedOrderGroup, OrderGroup, OrderGroupSubmission, Place, PlainOrderGroupForm, Timestamped,
};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

use super::{Clock, DateRejection, OrderGroupError};
use crate::auth::CurrentUser;
use crate::db::repository::order_group;
use crate::utils::time::parse_expiration_date;

/// Shortest accepted time between now and an interactive expiration
pub const MIN_ORDER_WINDOW: Duration = Duration::hours(2);

/// Opaque public token: a random v4 UUID as 32 lowercase hex chars
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Validates and records new order groups
///
/// Each successful [`open`](Self::open) performs exactly one insert; every
/// failure leaves the store untouched. Token uniqueness is enforced by the
/// store, a collision is reported rather than retried.
#[derive(Debug, Clone)]
pub struct OrderGroupWorkflow {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
    timezone: Tz,
    share_base_url: String,
}

impl OrderGroupWorkflow {
    /// `share_base_url` is the prefix tokens are appended to,
    /// e.g. `https://lunch.example.com/api/order-groups`
    pub fn new(
        pool: SqlitePool,
        clock: Arc<dyn Clock>,
        timezone: Tz,
        share_base_url: impl Into<String>,
    ) -> Self {
        Self {
            pool,
            clock,
            timezone,
            share_base_url: share_base_url.into(),
        }
    }

    /// Open an order group for `place`
    pub async fn open(
        &self,
        place: &Place,
        user: Option<&CurrentUser>,
        submission: OrderGroupSubmission,
    ) -> Result<OpenedOrderGroup, OrderGroupError> {
        match submission {
            OrderGroupSubmission::Interactive { expiration_date } => {
                self.open_interactive(place, user, &expiration_date).await
            }
            OrderGroupSubmission::Plain(form) => self.open_plain(place, user, form).await,
        }
    }

    /// Earliest accepted expiration for a request made now
    pub fn threshold(&self) -> DateTime<Utc> {
        self.clock.now() + MIN_ORDER_WINDOW
    }

    pub fn share_url(&self, token: &str) -> String {
        format!("{}/{}", self.share_base_url, token)
    }

    async fn open_interactive(
        &self,
        place: &Place,
        user: Option<&CurrentUser>,
        expiration_date: &str,
    ) -> Result<OpenedOrderGroup, OrderGroupError> {
        let user = user.ok_or(OrderGroupError::Unauthenticated)?;

        let invalid = |rejection| OrderGroupError::InvalidDate {
            input: expiration_date.to_string(),
            rejection,
        };

        let expires_at = parse_expiration_date(expiration_date, self.timezone)
            .ok_or_else(|| invalid(DateRejection::Unparseable))?;

        let threshold = self.threshold();
        if expires_at < threshold {
            tracing::debug!(
                place_id = place.id,
                %expires_at,
                %threshold,
                "Order group expiration too soon"
            );
            return Err(invalid(DateRejection::TooSoon { threshold }));
        }

        let group = self
            .insert(place, Some(user), Some(expires_at.timestamp_millis()))
            .await?;

        Ok(OpenedOrderGroup {
            token: group.token,
            expires_at: group.expires_at,
            share_url: None,
        })
    }

    /// Classic form post: no expiration and no threshold check
    async fn open_plain(
        &self,
        place: &Place,
        user: Option<&CurrentUser>,
        form: PlainOrderGroupForm,
    ) -> Result<OpenedOrderGroup, OrderGroupError> {
        let mut errors = BTreeMap::new();
        if form.place_id != place.id {
            errors.insert(
                "place_id".to_string(),
                format!("must be {} for this place", place.id),
            );
        }
        if !errors.is_empty() {
            return Err(OrderGroupError::ValidationFailed(errors));
        }

        let group = self.insert(place, user, None).await?;
        let share_url = self.share_url(&group.token);

        Ok(OpenedOrderGroup {
            token: group.token,
            expires_at: None,
            share_url: Some(share_url),
        })
    }

    async fn insert(
        &self,
        place: &Place,
        user: Option<&CurrentUser>,
        expires_at: Option<i64>,
    ) -> Result<OrderGroup, OrderGroupError> {
        let mut group = OrderGroup {
            id: snowflake_id(),
            token: generate_token(),
            expires_at,
            place_id: place.id,
            user_id: user.map(|u| u.id),
            created_at: 0,
            modified_at: None,
        };
        group.on_create(self.clock.now().timestamp_millis());

        order_group::create(&self.pool, &group).await?;

        tracing::info!(
            place_id = place.id,
            user_id = ?group.user_id,
            expires_at = ?group.expires_at,
            "Order group opened"
        );
        Ok(group)
    }
}
