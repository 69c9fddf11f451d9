use chart_axes::core::{
    AxisType, AxisValue, Extent, LabelFunction, TickFormat, Value, format_grouped_decimal,
    format_time_tick, precision_for_span, row,
};

#[test]
fn number_precision_follows_domain_span() {
    assert_eq!(
        TickFormat::for_domain(AxisType::Linear, Some(Extent::new(0.0, 5_000.0))),
        TickFormat::Number { precision: 0 }
    );
    assert_eq!(
        TickFormat::for_domain(AxisType::Linear, Some(Extent::new(0.0, 2.5))),
        TickFormat::Number { precision: 2 }
    );
    assert_eq!(precision_for_span(0.002), 5);
    assert_eq!(precision_for_span(1e-12), 8);
    assert_eq!(
        TickFormat::for_domain(AxisType::Ordinal, None),
        TickFormat::Category
    );
}

#[test]
fn number_ticks_are_grouped() {
    let format = TickFormat::Number { precision: 2 };
    assert_eq!(format.format(&AxisValue::Number(12_345.678)), "12,345.68");
    assert_eq!(format_grouped_decimal(999.0, 0), "999");
    assert_eq!(format_grouped_decimal(-12_345.0, 1), "-12,345.0");
}

#[test]
fn time_ticks_pick_the_coarsest_exact_unit() {
    // 2024-03-05T00:00:00Z, a Tuesday
    assert_eq!(format_time_tick(1_709_596_800_000.0), "Tue 05");
    // 2024-03-03T00:00:00Z, a Sunday
    assert_eq!(format_time_tick(1_709_424_000_000.0), "Mar 03");
    // 2024-03-01T15:30:00Z
    assert_eq!(format_time_tick(1_709_307_000_000.0), "03:30");
    // 2024-03-01T15:30:20Z
    assert_eq!(format_time_tick(1_709_307_020_000.0), ":20");
    // 2024-03-01T15:30:20.250Z
    assert_eq!(format_time_tick(1_709_307_020_250.0), ".250");
}

#[test]
fn category_ticks_print_their_text() {
    let value = AxisValue::Category("2024|Q1".to_owned());
    assert_eq!(TickFormat::Category.format(&value), "2024|Q1");
}

#[test]
fn label_functions_read_rows_by_axis_type() {
    let r = row([
        ("crossValue", Value::from(vec!["east", "2024"])),
        ("mainValue", Value::from("12.5")),
        ("when", Value::from("2024-01-01T00:00:00Z")),
    ]);

    let category = LabelFunction::for_type(AxisType::Ordinal, &["crossValue".to_owned()]);
    assert_eq!(
        category.label(&r),
        Some(AxisValue::Category("east|2024".to_owned()))
    );

    let number = LabelFunction::for_type(AxisType::Linear, &["mainValue".to_owned()]);
    assert_eq!(number.label(&r), Some(AxisValue::Number(12.5)));

    let time = LabelFunction::for_type(AxisType::Time, &["when".to_owned()]);
    assert_eq!(time.label(&r), Some(AxisValue::Time(1_704_067_200_000.0)));

    let missing = LabelFunction::for_type(AxisType::Linear, &["absent".to_owned()]);
    assert_eq!(missing.label(&r), None);
}
