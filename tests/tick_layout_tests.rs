use approx::assert_relative_eq;
use chart_axes::core::{
    LabelRotation, Orientation, TickGroup, TickLayout, TickSizeInner, group_ticks,
};

fn keys(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn texts(groups: &[TickGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.text.as_str()).collect()
}

#[test]
fn composite_keys_group_into_levels_nearest_axis_first() {
    let levels = group_ticks(&keys(&["a|x", "a|y", "b|x"]));
    assert_eq!(levels.len(), 2);
    assert_eq!(texts(&levels[0]), vec!["x", "y", "x"]);
    assert_eq!(texts(&levels[1]), vec!["a", "b"]);
    assert_eq!(levels[1][0].domain, keys(&["a|x", "a|y"]));
    assert_eq!(levels[1][1].domain, keys(&["b|x"]));
}

#[test]
fn consecutive_equal_segments_merge_regardless_of_parent() {
    let levels = group_ticks(&keys(&["a|x|1", "a|x|2", "a|y|1", "b|y|1"]));
    assert_eq!(texts(&levels[0]), vec!["1", "2", "1"]);
    assert_eq!(levels[0][2].domain, keys(&["a|y|1", "b|y|1"]));
    assert_eq!(texts(&levels[1]), vec!["x", "y"]);
    assert_eq!(levels[1][0].domain, keys(&["a|x|1", "a|x|2"]));
    assert_eq!(levels[1][1].domain, keys(&["a|y|1", "b|y|1"]));
    assert_eq!(texts(&levels[2]), vec!["a", "b"]);
}

#[test]
fn short_labels_on_a_wide_axis_stay_flat() {
    let layout = TickLayout::compute(
        &keys(&["a|x", "a|y", "b|x"]),
        Orientation::Horizontal,
        500.0,
        true,
    );
    assert_eq!(layout.levels.len(), 2);
    for level in &layout.levels {
        assert_eq!(level.rotation, LabelRotation::None);
        assert_relative_eq!(level.size, 25.0);
    }
    assert_eq!(layout.tick_size_inner(), TickSizeInner::PerLevel(vec![25.0, 25.0]));
    assert_relative_eq!(layout.tick_size_outer(), 50.0);
    assert_relative_eq!(layout.axis_size(), 60.0);
    assert_eq!(layout.inner_level().map(|l| l.groups.len()), Some(3));
    assert_eq!(layout.outer_level().map(|l| l.groups.len()), Some(2));
}

fn ten_char_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("category{i:02}")).collect()
}

#[test]
fn crowded_labels_tilt_diagonally_when_rotated_labels_fit() {
    // 20 labels: 20 * 70px does not fit in 400px, 20 * 16px does.
    let layout = TickLayout::compute(&ten_char_keys(20), Orientation::Horizontal, 500.0, false);
    let level = &layout.levels[0];
    assert_eq!(level.rotation, LabelRotation::Diagonal);
    assert_relative_eq!(level.size, 10.0 * 4.0 + 20.0);
    assert_eq!(layout.tick_size_inner(), TickSizeInner::Single(level.size));
}

#[test]
fn very_crowded_labels_stand_vertical() {
    let layout = TickLayout::compute(&ten_char_keys(30), Orientation::Horizontal, 500.0, false);
    let level = &layout.levels[0];
    assert_eq!(level.rotation, LabelRotation::Vertical);
    assert_relative_eq!(level.size, 10.0 * 6.62 + 10.0);
}

#[test]
fn vertical_axes_size_to_the_longest_label_without_rotation() {
    let layout = TickLayout::compute(
        &keys(&["north", "south-east"]),
        Orientation::Vertical,
        50.0,
        false,
    );
    let level = &layout.levels[0];
    assert_eq!(level.rotation, LabelRotation::None);
    assert_relative_eq!(level.size, 10.0 * 6.62 + 10.0);
}

#[test]
fn single_level_layout_keeps_full_keys() {
    let layout = TickLayout::compute(
        &keys(&["a|x", "b|y"]),
        Orientation::Horizontal,
        500.0,
        false,
    );
    assert_eq!(layout.levels.len(), 1);
    assert_eq!(texts(&layout.levels[0].groups), vec!["a|x", "b|y"]);
}

#[test]
fn outer_tick_reserves_room_for_every_level() {
    let layout = TickLayout::compute(
        &keys(&["2023|Q1|Jan", "2023|Q1|Feb", "2024|Q1|Jan"]),
        Orientation::Vertical,
        300.0,
        true,
    );
    let sum: f64 = layout.levels.iter().map(|l| l.size).sum();
    assert_relative_eq!(layout.tick_size_outer(), sum);
    let last = layout.levels.last().expect("outer level");
    assert_relative_eq!(last.offset + last.size, sum);
}
