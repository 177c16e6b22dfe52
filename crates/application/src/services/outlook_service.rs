//! Outlook service
//!
//! Runs the full pipeline for one day: fetch forecast records through the
//! port, assemble and score the day, rank its segments, and interpret the
//! tiers for the message and chart consumers.

use std::{fmt, sync::Arc};

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use domain::scoring::PrecipitationTable;
use domain::value_objects::{AlertTier, GeoLocation, SegmentPlan};
use domain::{Day, RankingPolicy, RankingSummary};

use crate::error::ApplicationError;
use crate::ports::ForecastPort;

/// A fully scored and ranked day plus its interpreted summary
#[derive(Debug, Clone, Serialize)]
pub struct DayOutlook {
    /// The assembled, scored, and ranked day
    pub day: Day,
    /// Interpreted tier output
    pub summary: RankingSummary,
}

impl DayOutlook {
    /// The alert level of the best non-empty tier, if any segment ranked
    #[must_use]
    pub const fn alert_level(&self) -> Option<AlertTier> {
        self.summary.alert_level
    }

    /// Names of the segments in the best non-empty tier
    #[must_use]
    pub fn preferred_segments(&self) -> &[String] {
        &self.summary.preferred
    }
}

/// Service producing day outlooks from a forecast provider
pub struct OutlookService {
    forecast_port: Arc<dyn ForecastPort>,
    plan: SegmentPlan,
    precipitation: PrecipitationTable,
    policy: RankingPolicy,
}

impl fmt::Debug for OutlookService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlookService").finish_non_exhaustive()
    }
}

impl OutlookService {
    /// Create a service with the default plan, score table, and policy
    #[must_use]
    pub fn new(forecast_port: Arc<dyn ForecastPort>) -> Self {
        Self::with_config(
            forecast_port,
            SegmentPlan::default(),
            PrecipitationTable::default(),
            RankingPolicy::default(),
        )
    }

    /// Create a service with explicit configuration
    #[must_use]
    pub fn with_config(
        forecast_port: Arc<dyn ForecastPort>,
        plan: SegmentPlan,
        precipitation: PrecipitationTable,
        policy: RankingPolicy,
    ) -> Self {
        Self {
            forecast_port,
            plan,
            precipitation,
            policy,
        }
    }

    /// Produce the outlook for a specific date
    #[instrument(skip(self), fields(location = %location, date = %date))]
    pub async fn outlook_for_date(
        &self,
        location: GeoLocation,
        date: NaiveDate,
    ) -> Result<DayOutlook, ApplicationError> {
        info!("Building day outlook");
        let (hourly, daily) = self.forecast_port.fetch_forecast(&location).await?;
        debug!(
            hourly = hourly.len(),
            daily = daily.len(),
            "Fetched forecast records"
        );

        let mut day = Day::from_forecast(date, location, &self.plan, &hourly, &daily)?;
        day.score(&self.precipitation)?;
        let summary = day.rank(&self.policy)?.interpret();

        info!(
            alert = ?summary.alert_level,
            preferred = ?summary.preferred,
            "Day outlook ready"
        );
        Ok(DayOutlook { day, summary })
    }

    /// Produce the outlook for tomorrow, the bot's usual target date
    pub async fn outlook_for_tomorrow(
        &self,
        location: GeoLocation,
    ) -> Result<DayOutlook, ApplicationError> {
        let tomorrow = Utc::now()
            .date_naive()
            .succ_opt()
            .ok_or_else(|| ApplicationError::Configuration("calendar overflow".to_string()))?;
        self.outlook_for_date(location, tomorrow).await
    }

    /// Check if the forecast provider is reachable
    pub async fn is_available(&self) -> bool {
        self.forecast_port.is_available().await
    }
}
