use tickler_core::config::EngineConfig;
use tickler_core::error::CoreError;
use tickler_rule::rule::{Advancer, CalendarDate, RecurrenceRule, SearchLimits, parse};

use super::model::{Completion, Task};
use crate::error::{ServiceError, ServiceResult};

/// Applies recurrence rules to tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskScheduler {
    advancer: Advancer,
}

impl TaskScheduler {
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self {
            advancer: Advancer::new(limits),
        }
    }

    /// ## Errors
    /// Returns `CoreError::ConfigError` if the search horizon is zero.
    pub fn from_config(config: &EngineConfig) -> ServiceResult<Self> {
        if config.max_search_years == 0 {
            return Err(CoreError::ConfigError(
                "engine.max_search_years must be at least 1".to_string(),
            )
            .into());
        }
        Ok(Self::new(SearchLimits::from(config)))
    }

    /// ## Summary
    /// Next date of a task scheduled on `date` with rule `repeat`, counting
    /// from `now` (or `today` when `now` is absent or empty).
    ///
    /// Returns `Ok(None)` for a one-off task that is not in the future.
    ///
    /// ## Errors
    /// - `InvalidDate` if `date` is empty or either date is malformed
    /// - `RuleError` if the rule is invalid or no next date can be computed
    #[tracing::instrument(skip(self))]
    pub fn next_date(
        &self,
        now: Option<&str>,
        date: &str,
        repeat: &str,
        today: CalendarDate,
    ) -> ServiceResult<Option<CalendarDate>> {
        let reference = match now.filter(|text| !text.is_empty()) {
            Some(text) => parse_date("now", text)?,
            None => today,
        };
        if date.is_empty() {
            return Err(ServiceError::InvalidDate("date is required".to_string()));
        }
        let anchor = parse_date("date", date)?;
        let rule = parse(repeat)?;

        Ok(self.advancer.next_occurrence(reference, anchor, &rule)?)
    }

    /// ## Summary
    /// Validates a new or edited task and normalizes its date.
    ///
    /// An empty date becomes `today`. A date in the past becomes `today` for
    /// a one-off task, otherwise the first occurrence after `today`.
    ///
    /// ## Errors
    /// - `MissingTitle` if the title is blank
    /// - `InvalidDate` if the date is malformed
    /// - `RuleError` if the rule is invalid or no next date can be computed
    #[tracing::instrument(skip(self, task), fields(id = %task.id, repeat = %task.repeat))]
    pub fn prepare(&self, mut task: Task, today: CalendarDate) -> ServiceResult<Task> {
        if task.title.trim().is_empty() {
            return Err(ServiceError::MissingTitle);
        }

        let date = if task.date.is_empty() {
            today
        } else {
            parse_date("date", &task.date)?
        };
        let rule = parse(&task.repeat)?;

        let date = if date >= today {
            date
        } else {
            self.after(today, date, &rule)?.unwrap_or(today)
        };

        tracing::debug!(date = %date, "Prepared task");
        task.date = date.to_string();
        Ok(task)
    }

    /// ## Summary
    /// Marks a task as done.
    ///
    /// One-off tasks are removed. Recurring tasks move to their next
    /// occurrence after the later of `today` and the current task date.
    ///
    /// ## Errors
    /// - `InvalidDate` if the task date is empty or malformed
    /// - `RuleError` if the rule is invalid or no next date can be computed
    #[tracing::instrument(skip(self, task), fields(id = %task.id, repeat = %task.repeat))]
    pub fn complete(&self, mut task: Task, today: CalendarDate) -> ServiceResult<Completion> {
        let rule = parse(&task.repeat)?;
        if task.date.is_empty() {
            return Err(ServiceError::InvalidDate("date is required".to_string()));
        }
        let date = parse_date("date", &task.date)?;

        if rule.is_once() {
            tracing::debug!("Removing completed task");
            return Ok(Completion::Remove);
        }
        let Some(next) = self.after(today.max(date), date, &rule)? else {
            return Ok(Completion::Remove);
        };

        tracing::debug!(next = %next, "Rescheduling completed task");
        task.date = next.to_string();
        Ok(Completion::Reschedule(task))
    }

    fn after(
        &self,
        reference: CalendarDate,
        anchor: CalendarDate,
        rule: &RecurrenceRule,
    ) -> ServiceResult<Option<CalendarDate>> {
        Ok(self.advancer.next_occurrence(reference, anchor, rule)?)
    }
}

fn parse_date(field: &str, text: &str) -> ServiceResult<CalendarDate> {
    CalendarDate::parse(text)
        .map_err(|e| ServiceError::InvalidDate(format!("{field} `{text}`: {e}")))
}
