use approx::assert_relative_eq;
use chrono::{NaiveDate, NaiveDateTime};
use timeslider_rs::SliderError;
use timeslider_rs::core::{Granularity, SelectorGeometry, TimeFrame, UnitRange, UnitScale};

fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid date-time")
}

#[test]
fn unit_scale_maps_pixels_and_units() {
    let scale = UnitScale::new(0, 12, 300.0);

    assert_relative_eq!(scale.pixels_per_unit(), 25.0);
    assert_eq!(scale.pixel_to_unit(24.9), 0);
    assert_eq!(scale.pixel_to_unit(25.0), 1);
    assert_eq!(scale.unit_to_pixel(4), 100.0);
    assert_eq!(
        scale.geometry(UnitRange::new(1, 3)),
        SelectorGeometry::new(25.0, 50.0)
    );
}

#[test]
fn empty_unit_scale_maps_everything_onto_offset() {
    let scale = UnitScale::new(7, 0, 300.0);

    assert_eq!(scale.pixels_per_unit(), 0.0);
    assert_eq!(scale.pixel_to_unit(150.0), 7);
    assert!(!scale.accepts(UnitRange::new(7, 8)));
}

#[test]
fn snap_rounds_down_to_raster_multiple() {
    let scale = UnitScale::new(0, 10, 100.0);

    assert_relative_eq!(scale.snap_px(57.0, 0.0), 57.0);
    assert_relative_eq!(scale.snap_px(57.0, 2.0), 40.0);
    assert_relative_eq!(scale.snap_px(57.0, 0.5), 55.0);
}

#[test]
fn year_counts_span_calendar_years() {
    assert_eq!(
        Granularity::Year
            .unit_count(at(2019, 12, 31, 0), at(2021, 1, 1, 0))
            .expect("count"),
        3
    );
}

#[test]
fn hour_counts_cross_midnight() {
    let count = Granularity::Hour
        .unit_count(at(2024, 1, 1, 22), at(2024, 1, 2, 1))
        .expect("count");
    assert_eq!(count, 4);
}

#[test]
fn normalization_bounds_each_unit() {
    let date = NaiveDate::from_ymd_opt(2023, 7, 19)
        .and_then(|date| date.and_hms_milli_opt(13, 45, 12, 250))
        .expect("valid date-time");

    assert_eq!(
        Granularity::Year.normalize_start(date).expect("year start"),
        at(2023, 1, 1, 0)
    );
    assert_eq!(
        Granularity::Day.normalize_start(date).expect("day start"),
        at(2023, 7, 19, 0)
    );
    let hour_end = Granularity::Hour.normalize_end(date).expect("hour end");
    assert_eq!(hour_end, at(2023, 7, 19, 14) - chrono::TimeDelta::milliseconds(1));
    let month_end = Granularity::Month.normalize_end(date).expect("month end");
    assert_eq!(month_end, at(2023, 8, 1, 0) - chrono::TimeDelta::milliseconds(1));
}

#[test]
fn captions_match_unit_names() {
    let date = at(2024, 9, 5, 7);

    assert_eq!(Granularity::Year.caption(date).expect("caption"), "2024");
    assert_eq!(Granularity::Month.caption(date).expect("caption"), "Sep");
    assert_eq!(Granularity::Day.caption(date).expect("caption"), "5");
    assert_eq!(Granularity::Hour.caption(date).expect("caption"), "07:00");
    assert!(matches!(
        Granularity::Week.caption(date),
        Err(SliderError::NotImplemented(_))
    ));
}

#[test]
fn unit_type_names_parse() {
    for granularity in Granularity::ALL {
        let parsed: Granularity = granularity.to_string().parse().expect("parse name");
        assert_eq!(parsed, granularity);
    }
    assert!("quarter".parse::<Granularity>().is_err());
}

#[test]
fn time_frame_rejects_inverted_bounds() {
    let err = TimeFrame::new(at(2024, 2, 1, 0), at(2024, 1, 1, 0)).expect_err("inverted");
    assert!(matches!(err, SliderError::InvalidData(_)));

    let outer = TimeFrame::new(at(2024, 1, 1, 0), at(2024, 12, 31, 0)).expect("outer");
    let inner = TimeFrame::new(at(2024, 3, 1, 0), at(2024, 3, 31, 0)).expect("inner");
    assert!(outer.contains(inner));
    assert!(!inner.contains(outer));
    assert!(outer.contains(outer));
}
