//! Tests for chart data preparation and display state.

use powerscope::dataset::Quantity;
use powerscope::filter::{self, TimeWindow};
use powerscope::power::DEFAULT_POWER_FACTOR;
use powerscope::selector::{self, PhaseSelection};
use powerscope::state::{AxisRange, ConfigError, TimestampFormat};
use powerscope::ui::chart::{self, EMPTY_VIEW_MESSAGE};

use crate::common::{self, FIXTURE_END};

#[test]
fn test_pipeline_produces_one_line_per_selected_phase() {
    let dataset = common::derived_dataset(2880, DEFAULT_POWER_FACTOR);
    let windowed = filter::trailing_window(&dataset.view(), FIXTURE_END, TimeWindow::Hour1);
    let selected = selector::select_view(&windowed, &PhaseSelection::default()).unwrap();

    let series = chart::chart_series(&selected, Quantity::PhaseVoltage);
    assert_eq!(series.len(), 3);
    for line in &series {
        assert_eq!(line.points.len(), 61);
        assert!(line.name.starts_with("Tensão Fase"));
    }
}

#[test]
fn test_empty_window_produces_placeholder_instead_of_lines() {
    // Reference time far past the dataset end: the view is empty, no series
    // are produced, and the renderer falls back to the placeholder text
    // without panicking anywhere along the pipeline.
    let dataset = common::derived_dataset(2880, DEFAULT_POWER_FACTOR);
    let far_future = FIXTURE_END + 30 * 86_400;
    let windowed = filter::trailing_window(&dataset.view(), far_future, TimeWindow::Minutes15);
    let selected = selector::select_view(&windowed, &PhaseSelection::default()).unwrap();

    for quantity in [
        Quantity::PhaseVoltage,
        Quantity::LineVoltage,
        Quantity::Current,
        Quantity::ActivePower,
        Quantity::ReactivePower,
        Quantity::ApparentPower,
    ] {
        assert!(chart::chart_series(&selected, quantity).is_empty());
    }
    assert_eq!(EMPTY_VIEW_MESSAGE, "Sem dados para exibir");
}

#[test]
fn test_points_pair_timestamps_with_values() {
    let dataset = common::derived_dataset(64, DEFAULT_POWER_FACTOR);
    let view = dataset.view();
    let series = chart::chart_series(&view, Quantity::Current);

    let first = &series[0];
    assert_eq!(first.points[0][0], view.timestamps[0] as f64);
    assert_eq!(first.points[0][1], view.channels_for(Quantity::Current)[0].values[0]);
}

#[test]
fn test_tick_formats_follow_selected_pattern() {
    let ts = FIXTURE_END as f64;

    let hms = chart::format_tick(ts, TimestampFormat::HourMinuteSecond);
    assert_eq!(hms.len(), 8);
    assert_eq!(hms.matches(':').count(), 2);

    let day_month = chart::format_tick(ts, TimestampFormat::DayMonthHourMinute);
    assert!(day_month.contains('/'));
    assert_eq!(day_month.matches(':').count(), 1);

    let month_day = chart::format_tick(ts, TimestampFormat::MonthDay);
    assert_eq!(month_day.len(), 5);

    let weekday = chart::format_tick(ts, TimestampFormat::WeekdayHour);
    assert!(weekday.ends_with('h'));
    assert!(weekday.contains(','));
}

#[test]
fn test_malformed_manual_range_is_surfaced_not_swallowed() {
    let inverted = AxisRange {
        auto: false,
        min: 140.0,
        max: 110.0,
    };
    let err = inverted.manual_bounds().unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidAxisRange {
            min: 140.0,
            max: 110.0
        }
    );
    assert!(err.to_string().contains("axis range"));
}
