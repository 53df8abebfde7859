//! Whole-tree integration tests: the literal S1-S6 scenarios, config
//! round-trip, and a couple of cross-module invariants that don't fit
//! naturally into any one source file's unit tests.

use core::f64::consts::FRAC_PI_2;
use frame_kinematics::algebra::orientation::AxisAngle;
use frame_kinematics::frame::{Mobile2DFrame, RotationalFrame, StaticFrame, TranslationalFrame};
use frame_kinematics::{
    FrameError, FrameSystem, FrameSystemInputs, Geometry, GeometriesInFrame, Limit, Orientation, Pose, Vector, WorldState,
    WORLD,
};

fn inputs(pairs: &[(&str, &[f64])]) -> FrameSystemInputs {
    pairs.iter().map(|(name, values)| (name.to_string(), values.to_vec())).collect()
}

#[test]
fn s1_static_chain() {
    let mut system = FrameSystem::new("s1");
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new("A", Pose::new(Vector::new(1.0, 0.0, 0.0), Orientation::identity()), None)),
            WORLD,
        )
        .unwrap();
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new("B", Pose::new(Vector::new(0.0, 2.0, 0.0), Orientation::identity()), None)),
            "A",
        )
        .unwrap();

    let result = system.transform(&FrameSystemInputs::new(), "B", WORLD).unwrap();
    assert!(result.is_clean());
    assert!(result.value.translation().almost_equals(Vector::new(1.0, 2.0, 0.0), 1e-9));
    assert!(result.value.orientation().almost_equals(Orientation::identity(), 1e-9));
}

#[test]
fn s2_revolute_joint() {
    let mut system = FrameSystem::new("s2");
    system
        .add_frame(
            frame_kinematics::Frame::Rotational(RotationalFrame::new("J", Vector::unit_z(), Limit::unbounded()).unwrap()),
            WORLD,
        )
        .unwrap();
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new("T", Pose::new(Vector::unit_x(), Orientation::identity()), None)),
            "J",
        )
        .unwrap();

    let result = system.transform(&inputs(&[("J", &[FRAC_PI_2])]), "T", WORLD).unwrap();
    assert!(result.value.translation().almost_equals(Vector::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn s3_oob_tolerance() {
    let mut system = FrameSystem::new("s3");
    system
        .add_frame(
            frame_kinematics::Frame::Translational(
                TranslationalFrame::new("T", Vector::unit_x(), Limit::new(0.0, 10.0), None).unwrap(),
            ),
            WORLD,
        )
        .unwrap();

    let result = system.transform(&inputs(&[("T", &[15.0])]), "T", WORLD).unwrap();
    assert_eq!(result.value.translation(), Vector::new(15.0, 0.0, 0.0));
    assert_eq!(result.oob_errors.len(), 1);
    assert!(result.oob_errors[0].to_string().contains("input out of bounds"));
}

#[test]
fn s4_mobile_2d() {
    let mut system = FrameSystem::new("s4");
    system
        .add_frame(
            frame_kinematics::Frame::Mobile2D(Mobile2DFrame::new("M", [Limit::new(-5.0, 5.0), Limit::new(-5.0, 5.0)], None)),
            WORLD,
        )
        .unwrap();

    let result = system.transform(&inputs(&[("M", &[3.0, 4.0])]), "M", WORLD).unwrap();
    assert!(result.is_clean());
    assert!(result.value.translation().almost_equals(Vector::new(3.0, 4.0, 0.0), 1e-9));
}

#[test]
fn s5_cycle_rejection() {
    let mut system = FrameSystem::new("s5");
    system.add_frame(frame_kinematics::Frame::Static(StaticFrame::new("A", Pose::identity(), None)), WORLD).unwrap();
    system.add_frame(frame_kinematics::Frame::Static(StaticFrame::new("B", Pose::identity(), None)), "A").unwrap();

    let err = system
        .add_frame(frame_kinematics::Frame::Static(StaticFrame::new("A", Pose::identity(), None)), "B")
        .unwrap_err();
    assert!(matches!(err, FrameError::CycleDetected(_, _)));
}

#[test]
fn s6_long_box_collides_with_nearby_box_not_far_one() {
    let long_box = Geometry::new_box("long", Pose::identity(), Vector::new(0.5, 10.0, 0.5));
    let nearby = Geometry::new_box(
        "nearby",
        Pose::new(Vector::new(0.4, 0.0, 0.0), Orientation::identity()),
        Vector::new(0.5, 0.5, 0.5),
    );
    let far = Geometry::new_box(
        "far",
        Pose::new(Vector::new(5.0, 0.0, 0.0), Orientation::identity()),
        Vector::new(0.5, 0.5, 0.5),
    );

    assert!(frame_kinematics::collides(&long_box, &nearby).unwrap());
    assert!(!frame_kinematics::collides(&long_box, &far).unwrap());
}

#[test]
fn invariant_transform_through_intermediate_matches_direct() {
    let mut system = FrameSystem::new("composition");
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new("A", Pose::new(Vector::new(1.0, 0.0, 0.0), Orientation::identity()), None)),
            WORLD,
        )
        .unwrap();
    system
        .add_frame(
            frame_kinematics::Frame::Rotational(RotationalFrame::new("B", Vector::unit_z(), Limit::unbounded()).unwrap()),
            "A",
        )
        .unwrap();
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new("C", Pose::new(Vector::new(0.0, 1.0, 0.0), Orientation::identity()), None)),
            "B",
        )
        .unwrap();

    let i = inputs(&[("B", &[0.4])]);
    let a_to_c = system.transform(&i, "A", "C").unwrap().value;
    let b_to_c = system.transform(&i, "B", "C").unwrap().value;
    let a_to_b = system.transform(&i, "A", "B").unwrap().value;
    // a_to_b moves a point from A's coords into B's; b_to_c then moves it
    // into C's. `combine`'s `self` is applied last, so the composition
    // reads right-to-left: b_to_c.combine(a_to_b).
    assert!(a_to_c.almost_equals(b_to_c.combine(a_to_b), 1e-9));
}

#[test]
fn world_state_resolves_obstacle_into_target_frame_before_testing() {
    let mut system = FrameSystem::new("collision-world");
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new(
                "shelf",
                Pose::new(Vector::new(0.4, 0.0, 0.0), Orientation::identity()),
                None,
            )),
            WORLD,
        )
        .unwrap();

    let long_box = Geometry::new_box("long", Pose::identity(), Vector::new(0.5, 10.0, 0.5));
    let obstacle = Geometry::new_box("obstacle", Pose::identity(), Vector::new(0.5, 0.5, 0.5));
    let world_state = WorldState::new(vec![GeometriesInFrame::new("shelf", vec![obstacle])], Vec::new());

    let result = world_state.collides_with(&system, &FrameSystemInputs::new(), WORLD, &[long_box]).unwrap();
    assert!(result.value);
}

#[test]
fn divide_then_merge_preserves_transforms() {
    let mut system = FrameSystem::new("arm");
    system
        .add_frame(
            frame_kinematics::Frame::Rotational(RotationalFrame::new("shoulder", Vector::unit_z(), Limit::unbounded()).unwrap()),
            WORLD,
        )
        .unwrap();
    system
        .add_frame(
            frame_kinematics::Frame::Static(StaticFrame::new("hand", Pose::new(Vector::unit_x(), Orientation::identity()), None)),
            "shoulder",
        )
        .unwrap();

    let i = inputs(&[("shoulder", &[FRAC_PI_2])]);
    let before = system.transform(&i, "hand", WORLD).unwrap().value;

    let subtree = system.divide_frame_system("shoulder").unwrap();
    system.merge_frame_systems(subtree, WORLD).unwrap();

    let after = system.transform(&i, "hand", WORLD).unwrap().value;
    assert!(before.almost_equals(after, 1e-9));
}

#[test]
fn axis_angle_helper_is_reachable_from_integration_tests() {
    let o = Orientation::from_axis_angle(AxisAngle { angle: FRAC_PI_2, axis: Vector::unit_y() }).unwrap();
    assert!(o.angular_distance(Orientation::identity()) > 0.0);
}
