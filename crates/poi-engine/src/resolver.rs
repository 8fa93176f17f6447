//! Layer priority resolver.
//!
//! A date's effective hours come from the first layer that claims it:
//!
//! 1. exceptions (one-time and recurring),
//! 2. holidays,
//! 3. the active season's weekly table,
//! 4. the regular weekly table.
//!
//! Each layer is a [`Layer`] that either resolves the date or passes it on.
//! When no layer resolves, the result has no hours and [`Source::None`].

use std::fmt;

use poi_core::utilities::data_formatters::title_case;
use poi_schedule::{DayHours, Exception, ExceptionRule, OverrideStatus, ScheduleDocument};
use poi_time::{Date, LocalDateTime};
use serde::{Deserialize, Serialize};

use crate::config::ResolverOptions;
use crate::exception::match_exception;
use crate::format::format_effective_with;
use crate::holiday::{holiday_date, holiday_display_name};
use crate::open_status::{evaluate_open_status, OpenStatus};
use crate::season::active_season;
use crate::week::{project_week, DayProjection};

/// Which layer produced an [`EffectiveResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// A one-time or recurring exception.
    Exception,
    /// A holiday override.
    Holiday,
    /// The active season's weekly table.
    Seasonal,
    /// The regular weekly table.
    Regular,
    /// Nothing matched.
    None,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Exception => "exception",
            Source::Holiday => "holiday",
            Source::Seasonal => "seasonal",
            Source::Regular => "regular",
            Source::None => "none",
        })
    }
}

/// The hours that apply on one date, and where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectiveResult {
    /// Effective hours; `None` when nothing is configured.
    pub hours: Option<DayHours>,
    /// Winning layer.
    pub source: Source,
    /// Display label (exception reason, holiday name, season name).
    pub label: Option<String>,
}

impl EffectiveResult {
    /// The terminal "nothing configured" result.
    pub fn none() -> Self {
        EffectiveResult {
            hours: None,
            source: Source::None,
            label: None,
        }
    }

    fn new(hours: Option<DayHours>, source: Source, label: Option<String>) -> Self {
        EffectiveResult {
            hours,
            source,
            label,
        }
    }
}

/// What a layer decided for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerOutcome {
    /// This layer owns the date.
    Resolved(EffectiveResult),
    /// Defer to the next layer.
    Continue,
}

/// Borrowed inputs shared by every layer.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// The schedule being resolved.
    pub document: &'a ScheduleDocument,
    /// Fallback labels.
    pub options: &'a ResolverOptions,
}

/// One stage of the priority chain.
pub trait Layer: fmt::Debug + Send + Sync {
    /// The source this layer reports when it resolves.
    fn source(&self) -> Source;

    /// Decide `date`, or pass it to the next layer.
    fn evaluate(&self, date: Date, ctx: &ResolveContext<'_>) -> LayerOutcome;
}

/// Exceptions: the first matching one in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionLayer;

impl ExceptionLayer {
    fn label(exception: &Exception, options: &ResolverOptions) -> String {
        match (&exception.reason, &exception.rule) {
            (Some(reason), _) if !reason.trim().is_empty() => reason.clone(),
            (_, ExceptionRule::OneTime(_)) => options.one_time_exception_label.clone(),
            (_, ExceptionRule::Recurring(_)) => options.recurring_exception_label.clone(),
        }
    }
}

impl Layer for ExceptionLayer {
    fn source(&self) -> Source {
        Source::Exception
    }

    fn evaluate(&self, date: Date, ctx: &ResolveContext<'_>) -> LayerOutcome {
        let Some(exception) = match_exception(date, &ctx.document.exceptions) else {
            return LayerOutcome::Continue;
        };
        tracing::trace!(%date, status = ?exception.status, recurring = exception.is_recurring(), "exception matched");
        let label = Some(Self::label(exception, ctx.options));
        let hours = match exception.status {
            OverrideStatus::Closed => Some(DayHours::closed()),
            OverrideStatus::Modified if !exception.periods.is_empty() => {
                Some(DayHours::open(exception.periods.clone()))
            }
            // `open`, or `modified` without periods: the regular table only.
            _ => ctx.document.regular.get(date.weekday()).cloned(),
        };
        LayerOutcome::Resolved(EffectiveResult::new(hours, Source::Exception, label))
    }
}

/// Holidays falling on the date, in key order; the first that overrides wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct HolidayLayer;

impl Layer for HolidayLayer {
    fn source(&self) -> Source {
        Source::Holiday
    }

    fn evaluate(&self, date: Date, ctx: &ResolveContext<'_>) -> LayerOutcome {
        let year = date.year();
        for (key, spec) in &ctx.document.holidays {
            if holiday_date(key, spec, year) != Some(date) {
                continue;
            }
            let hours = match spec.status {
                OverrideStatus::Closed => DayHours::closed(),
                OverrideStatus::Modified if !spec.periods.is_empty() => {
                    DayHours::open(spec.periods.clone())
                }
                _ => {
                    tracing::trace!(%date, holiday = %key, "holiday open; no override");
                    continue;
                }
            };
            tracing::trace!(%date, holiday = %key, status = ?spec.status, "holiday matched");
            let label = Some(holiday_display_name(key, spec));
            return LayerOutcome::Resolved(EffectiveResult::new(Some(hours), Source::Holiday, label));
        }
        LayerOutcome::Continue
    }
}

/// The active season's table, when it lists the weekday.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalLayer;

impl Layer for SeasonalLayer {
    fn source(&self) -> Source {
        Source::Seasonal
    }

    fn evaluate(&self, date: Date, ctx: &ResolveContext<'_>) -> LayerOutcome {
        let Some((name, season)) = active_season(date, &ctx.document.seasonal) else {
            return LayerOutcome::Continue;
        };
        match season.regular.get(date.weekday()) {
            Some(hours) => {
                let label = format!("{}{}", title_case(name), ctx.options.season_label_suffix);
                LayerOutcome::Resolved(EffectiveResult::new(
                    Some(hours.clone()),
                    Source::Seasonal,
                    Some(label),
                ))
            }
            None => LayerOutcome::Continue,
        }
    }
}

/// The regular weekly table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularLayer;

impl Layer for RegularLayer {
    fn source(&self) -> Source {
        Source::Regular
    }

    fn evaluate(&self, date: Date, ctx: &ResolveContext<'_>) -> LayerOutcome {
        match ctx.document.regular.get(date.weekday()) {
            Some(hours) => LayerOutcome::Resolved(EffectiveResult::new(
                Some(hours.clone()),
                Source::Regular,
                None,
            )),
            None => LayerOutcome::Continue,
        }
    }
}

static LAYERS: [&dyn Layer; 4] = [&ExceptionLayer, &HolidayLayer, &SeasonalLayer, &RegularLayer];

/// Resolves dates against one document.
///
/// # Example
/// ```
/// use poi_engine::{Resolver, Source};
/// use poi_schedule::ScheduleDocument;
/// use poi_time::Date;
///
/// let doc = ScheduleDocument::from_json(r#"{
///     "regular": {"monday": {"status": "open", "periods": [{"open": "09:00", "close": "17:00"}]}},
///     "holidays": {"christmas": {"status": "closed"}}
/// }"#).unwrap();
/// let resolver = Resolver::new(&doc);
/// let r = resolver.resolve(Date::from_ymd(2023, 12, 25).unwrap());
/// assert_eq!(r.source, Source::Holiday);
/// assert_eq!(r.label.as_deref(), Some("Christmas Day"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    document: &'a ScheduleDocument,
    options: ResolverOptions,
}

impl<'a> Resolver<'a> {
    /// A resolver with default labels.
    pub fn new(document: &'a ScheduleDocument) -> Self {
        Resolver {
            document,
            options: ResolverOptions::default(),
        }
    }

    /// A resolver with custom labels.
    pub fn with_options(document: &'a ScheduleDocument, options: ResolverOptions) -> Self {
        Resolver { document, options }
    }

    /// The document being resolved.
    pub fn document(&self) -> &'a ScheduleDocument {
        self.document
    }

    /// The labels in use.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Effective hours on `date`.
    pub fn resolve(&self, date: Date) -> EffectiveResult {
        let ctx = ResolveContext {
            document: self.document,
            options: &self.options,
        };
        for layer in LAYERS.iter() {
            if let LayerOutcome::Resolved(result) = layer.evaluate(date, &ctx) {
                tracing::debug!(%date, source = %layer.source(), label = ?result.label, "resolved");
                return result;
            }
        }
        tracing::debug!(%date, "no layer matched");
        EffectiveResult::none()
    }

    /// Whether the venue is open at `now`.
    pub fn open_status(&self, now: LocalDateTime) -> OpenStatus {
        let result = self.resolve(now.date());
        evaluate_open_status(&result, now.time(), &self.options)
    }

    /// Display text for `date`, e.g. `"Closed (Christmas Day)"`.
    pub fn format(&self, date: Date) -> String {
        format_effective_with(&self.resolve(date), &self.options)
    }

    /// Seven consecutive days from `start`, flagging `today`.
    pub fn week(&self, start: Date, today: Date) -> Vec<DayProjection> {
        project_week(self, start, today)
    }
}

/// Effective hours on `date` with default labels.
pub fn resolve(date: Date, document: &ScheduleDocument) -> EffectiveResult {
    Resolver::new(document).resolve(date)
}
