//! End-to-end layout scenarios, one per lettered case and a handful of the
//! cross-cutting invariants.

use flexcore::{
    AlignItems, Direction, Edges, FlexDirection, FlexWrap, FloatValue, JustifyContent,
    PositionType, Size, Style, Taffy,
};

fn dims(width: f32, height: f32) -> Size<FloatValue> {
    Size { width: FloatValue::defined(width), height: FloatValue::defined(height) }
}

#[test]
fn scenario_a_row_three_equal_grow_children() {
    let mut taffy = Taffy::new();
    let child = Style { flex_grow: 1.0, flex_basis: FloatValue::defined(0.0), ..Default::default() };
    let c0 = taffy.new_leaf(child).unwrap();
    let c1 = taffy.new_leaf(child).unwrap();
    let c2 = taffy.new_leaf(child).unwrap();
    let root = taffy
        .new_with_children(Style { flex_direction: FlexDirection::Row, ..Default::default() }, &[c0, c1, c2])
        .unwrap();

    taffy.compute_layout(root, Size { width: Some(300.0), height: Some(100.0) }).unwrap();

    for (child, expected_x) in [(c0, 0.0), (c1, 100.0), (c2, 200.0)] {
        let layout = taffy.layout(child).unwrap();
        assert_eq!(layout.dimensions.width, 100.0);
        assert_eq!(layout.dimensions.height, 100.0);
        assert_eq!(layout.position.left, expected_x);
    }
}

#[test]
fn scenario_b_column_space_between() {
    let mut taffy = Taffy::new();
    let mut child_style = Style::default();
    child_style.dimensions.height = FloatValue::defined(20.0);
    let c0 = taffy.new_leaf(child_style).unwrap();
    let c1 = taffy.new_leaf(child_style).unwrap();
    let root = taffy
        .new_with_children(Style { justify_content: JustifyContent::SpaceBetween, ..Default::default() }, &[c0, c1])
        .unwrap();

    taffy.compute_layout(root, Size { width: Some(100.0), height: Some(100.0) }).unwrap();

    assert_eq!(taffy.layout(c0).unwrap().position.top, 0.0);
    assert_eq!(taffy.layout(c1).unwrap().position.top, 80.0);
}

#[test]
fn scenario_c_align_items_center() {
    let mut taffy = Taffy::new();
    let mut child_style = Style::default();
    child_style.dimensions = dims(40.0, 40.0);
    let child = taffy.new_leaf(child_style).unwrap();
    let root = taffy
        .new_with_children(
            Style { flex_direction: FlexDirection::Row, align_items: AlignItems::Center, ..Default::default() },
            &[child],
        )
        .unwrap();

    taffy.compute_layout(root, Size { width: Some(200.0), height: Some(100.0) }).unwrap();

    let layout = taffy.layout(child).unwrap();
    assert_eq!(layout.position.left, 0.0);
    assert_eq!(layout.position.top, 30.0);
}

#[test]
fn scenario_d_wrap_assigns_distinct_lines() {
    let mut taffy = Taffy::new();
    let mut child_style = Style::default();
    child_style.dimensions = dims(60.0, 20.0);
    let c0 = taffy.new_leaf(child_style).unwrap();
    let c1 = taffy.new_leaf(child_style).unwrap();
    let c2 = taffy.new_leaf(child_style).unwrap();
    let root = taffy
        .new_with_children(
            Style { flex_direction: FlexDirection::Row, flex_wrap: FlexWrap::Wrap, ..Default::default() },
            &[c0, c1, c2],
        )
        .unwrap();

    taffy.compute_layout(root, Size { width: Some(100.0), height: None }).unwrap();

    assert_eq!(taffy.layout(c0).unwrap().position.left, 0.0);
    assert_eq!(taffy.layout(c0).unwrap().position.top, 0.0);
    assert_eq!(taffy.layout(c1).unwrap().position.top, 20.0);
    assert_eq!(taffy.layout(c2).unwrap().position.top, 40.0);

    // Each of the three children landed on its own line -- each was too
    // wide to share a 100-wide line with a second 60-wide sibling.
    let root_layout = taffy.layout(root).unwrap();
    assert_eq!(root_layout.dimensions.height, 60.0);
}

#[test]
fn scenario_e_rtl_row_trailing_edge_first() {
    let mut taffy = Taffy::new();
    let mut child_style = Style::default();
    child_style.dimensions = dims(50.0, 50.0);
    let c0 = taffy.new_leaf(child_style).unwrap();
    let c1 = taffy.new_leaf(child_style).unwrap();
    let root = taffy
        .new_with_children(
            Style { direction: Direction::RTL, flex_direction: FlexDirection::Row, ..Default::default() },
            &[c0, c1],
        )
        .unwrap();

    taffy.compute_layout(root, Size { width: Some(200.0), height: Some(50.0) }).unwrap();

    assert_eq!(taffy.layout(c0).unwrap().position.left, 150.0);
    assert_eq!(taffy.layout(c1).unwrap().position.left, 100.0);
}

#[test]
fn scenario_f_absolute_child_with_explicit_offset() {
    let mut taffy = Taffy::new();
    let mut child_style = Style::default();
    child_style.position_type = PositionType::Absolute;
    child_style.dimensions = dims(30.0, 40.0);
    child_style.position = Edges { left: FloatValue::defined(10.0), top: FloatValue::defined(20.0), ..Default::default() };
    let child = taffy.new_leaf(child_style).unwrap();
    let root = taffy.new_with_children(Style::default(), &[child]).unwrap();

    taffy.compute_layout(root, Size { width: Some(200.0), height: Some(200.0) }).unwrap();

    let layout = taffy.layout(child).unwrap();
    assert_eq!(layout.position.left, 10.0);
    assert_eq!(layout.position.top, 20.0);
    assert_eq!(layout.dimensions.width, 30.0);
    assert_eq!(layout.dimensions.height, 40.0);

    let root_layout = taffy.layout(root).unwrap();
    assert_eq!(root_layout.dimensions.width, 200.0);
    assert_eq!(root_layout.dimensions.height, 200.0);
}

#[test]
fn invariant_clean_after_compute_layout() {
    let mut taffy = Taffy::new();
    let child = taffy.new_leaf(Style::default()).unwrap();
    let root = taffy.new_with_children(Style::default(), &[child]).unwrap();
    taffy.compute_layout(root, Size { width: Some(50.0), height: Some(50.0) }).unwrap();

    for node in [root, child] {
        assert!(!taffy.is_dirty(node).unwrap());
        assert!(taffy.has_new_layout(node).unwrap());
    }
}

#[test]
fn invariant_measured_dimensions_floor_at_padding_and_border() {
    let mut taffy = Taffy::new();
    let mut style = Style::default();
    style.padding.all = FloatValue::defined(10.0);
    style.dimensions = dims(5.0, 5.0);
    let node = taffy.new_leaf(style).unwrap();
    taffy.compute_layout(node, Size { width: None, height: None }).unwrap();

    let layout = taffy.layout(node).unwrap();
    assert!(layout.dimensions.width >= 20.0);
    assert!(layout.dimensions.height >= 20.0);
}

#[test]
fn invariant_idempotent_on_repeated_calls() {
    let mut taffy = Taffy::new();
    let child = taffy.new_leaf(Style { flex_grow: 1.0, ..Default::default() }).unwrap();
    let root = taffy
        .new_with_children(Style { flex_direction: FlexDirection::Row, ..Default::default() }, &[child])
        .unwrap();

    taffy.compute_layout(root, Size { width: Some(120.0), height: Some(40.0) }).unwrap();
    let first = taffy.layout(child).unwrap().clone();

    taffy.compute_layout(root, Size { width: Some(120.0), height: Some(40.0) }).unwrap();
    let second = taffy.layout(child).unwrap().clone();

    assert_eq!(first.dimensions, second.dimensions);
    assert_eq!(first.position, second.position);
}

#[test]
fn invariant_dirtying_a_leaf_forces_ancestor_recomputation() {
    let mut taffy = Taffy::new();
    let leaf = taffy
        .new_leaf_with_measure(Style::default(), Box::new(|_, _| Size { width: 10.0, height: 10.0 }))
        .unwrap();
    let root = taffy.new_with_children(Style::default(), &[leaf]).unwrap();
    taffy.compute_layout(root, Size { width: Some(50.0), height: Some(50.0) }).unwrap();

    taffy.mark_dirty(leaf).unwrap();
    assert!(taffy.is_dirty(leaf).unwrap());
    assert!(taffy.is_dirty(root).unwrap());

    taffy.compute_layout(root, Size { width: Some(50.0), height: Some(50.0) }).unwrap();
    assert!(!taffy.is_dirty(leaf).unwrap());
    assert!(!taffy.is_dirty(root).unwrap());
}
