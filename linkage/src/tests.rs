use crate::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn pt(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

fn reflect(p: Point2D, s: Point2D, b: Point2D) -> Point2D {
    let u = (b - s).normalize();
    let r = p - s;
    s + 2. * r.dot(&u) * u - r
}

#[test]
fn circle_circle_upper() {
    let c = pllp(pt(0., 0.), 2., pt(3., 0.), 2., BranchPolicy::Upper);
    let p = c.feasible().unwrap();
    assert_abs_diff_eq!(p.x, 1.5, epsilon = 1e-6);
    assert_abs_diff_eq!(p.y, 1.75f64.sqrt(), epsilon = 1e-6);
    assert_abs_diff_eq!(p.y, 1.3228756, epsilon = 1e-6);
}

#[test]
fn circle_circle_too_far() {
    let (s, b) = (pt(0., 0.), pt(10., 0.));
    let c = pllp(s, 1., b, 1., BranchPolicy::Upper);
    assert!(!c.is_feasible());
    assert_eq!(c.reason(), Some(Infeasible::TooFar));
    let p = c.point();
    assert_eq!(p, pt(1., 0.));
    // Keeps the first constraint only
    assert_abs_diff_eq!((p - s).norm(), 1.);
    assert!(((p - b).norm() - 1.).abs() > 1.);
}

#[test]
fn circle_circle_reasons() {
    let s = pt(1., 1.);
    let r = pllp(s, 5., pt(2., 1.), 1., BranchPolicy::Upper).reason();
    assert_eq!(r, Some(Infeasible::Contained));
    let r = pllp(s, 2., s, 2., BranchPolicy::Upper).reason();
    assert_eq!(r, Some(Infeasible::Coincident));
    for r1 in [0., -1., f64::NAN, f64::INFINITY] {
        let c = pllp(s, r1, pt(2., 1.), 1., BranchPolicy::Upper);
        assert_eq!(c.reason(), Some(Infeasible::DegenerateLink));
        assert_eq!(c.point(), s);
    }
}

#[test]
fn feasible_distances() {
    let centers = [pt(0., 0.), pt(-1.5, 2.), pt(3., -0.25)];
    let radii = [0.5, 1., 2.3, 4.];
    let policies = [BranchPolicy::Upper, BranchPolicy::Lower, BranchPolicy::Left];
    let mut n = 0;
    for &s in &centers {
        for &b in &centers {
            for &dx in &[0., 0.7, -2.] {
                let b = b + Vec2::new(dx, 1.1);
                let d = (b - s).norm();
                for &r1 in &radii {
                    for &r2 in &radii {
                        if d > r1 + r2 || d < (r1 - r2).abs() {
                            continue;
                        }
                        for policy in policies {
                            let p = pllp(s, r1, b, r2, policy).feasible().unwrap();
                            assert_abs_diff_eq!((p - s).norm(), r1, epsilon = 1e-9);
                            assert_abs_diff_eq!((p - b).norm(), r2, epsilon = 1e-9);
                        }
                        n += 1;
                    }
                }
            }
        }
    }
    assert!(n > 20);
}

#[test]
fn mirror_branch_is_reflection() {
    let cases = [
        (pt(0., 0.), 2., pt(3., 0.), 2.),
        (pt(-1., 0.5), 1.2, pt(0.4, 2.), 1.7),
        (pt(2., 2.), 3., pt(2., -1.), 1.5),
    ];
    for (s, r1, b, r2) in cases {
        for policy in [BranchPolicy::Upper, BranchPolicy::Right, BranchPolicy::Direct] {
            let p = pllp(s, r1, b, r2, policy).point();
            let q = pllp(s, r1, b, r2, policy.mirror()).point();
            let q_ref = reflect(p, s, b);
            assert_abs_diff_eq!(q.x, q_ref.x, epsilon = 1e-9);
            assert_abs_diff_eq!(q.y, q_ref.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn direct_matches_counter_clockwise_side() {
    let (s, b) = (pt(0., 0.), pt(3., 0.));
    let c = circle_circle(s, 2., b, 2.).candidates().unwrap();
    assert!(c.direct.y > 0.);
    assert!(c.inverse.y < 0.);
    // Vertical center line, the tie of `Upper` goes to `direct`
    let c = circle_circle(pt(0., 0.), 2., pt(0., 3.), 2.).candidates().unwrap();
    assert_abs_diff_eq!(c.direct.y, c.inverse.y, epsilon = 1e-12);
    assert!(c.direct.x < 0.);
    assert_eq!(BranchPolicy::Left.pick(c), c.direct);
    assert_eq!(BranchPolicy::Right.pick(c), c.inverse);
}

#[test]
fn tangency_boundary() {
    let s = pt(0., 0.);
    let mut last = f64::INFINITY;
    for eps in [1e-1, 1e-3, 1e-6, 1e-9, 1e-12, 0.] {
        let c = circle_circle(s, 1., pt(2. - eps, 0.), 1.).candidates().unwrap();
        let gap = (c.direct - c.inverse).norm();
        assert!(gap <= last);
        last = gap;
    }
    assert_eq!(last, 0.);
    let p = pllp(s, 1., pt(2., 0.), 1., BranchPolicy::Upper).feasible().unwrap();
    assert_abs_diff_eq!(p.x, 1.);
    assert_abs_diff_eq!(p.y, 0.);
    let c = pllp(s, 1., pt(2. + 1e-12, 0.), 1., BranchPolicy::Upper);
    assert_eq!(c.reason(), Some(Infeasible::TooFar));
    assert!(c.point().x.is_finite());
}

#[test]
fn circle_line_slider() {
    let c = pt(1., 2.);
    let sol = plp(c, 5., pt(0., -1.), Vec2::new(2., 0.), BranchPolicy::Direct);
    let p = sol.feasible().unwrap();
    assert_abs_diff_eq!(p.y, -1.);
    assert_abs_diff_eq!(p.x, 5.);
    let q = plp(c, 5., pt(0., -1.), Vec2::new(2., 0.), BranchPolicy::Inverse).point();
    assert_abs_diff_eq!(q.x, -3.);
    let far = plp(c, 1., pt(0., -1.), Vec2::x(), BranchPolicy::Direct);
    assert_eq!(far.reason(), Some(Infeasible::TooFar));
    assert_eq!(far.point(), pt(2., 2.));
    let flat = plp(c, 1., pt(0., -1.), Vec2::zeros(), BranchPolicy::Direct);
    assert_eq!(flat.reason(), Some(Infeasible::DegenerateLink));
}

#[test]
fn link_point_frame() {
    let (o, t) = (pt(1., 1.), pt(1., 3.));
    let p = LinkPoint::new(1., 0.5).locate(o, t);
    assert_abs_diff_eq!(p.x, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(p.y, 2., epsilon = 1e-12);
    let q = LinkPoint::polar(2., FRAC_PI_2).locate(o, t);
    assert_abs_diff_eq!(q.x, -1., epsilon = 1e-12);
    assert_abs_diff_eq!(q.y, 1., epsilon = 1e-12);
    // Coincident joints use the x-axis
    let r = LinkPoint::new(1., 1.).locate(o, o);
    assert_eq!(r, pt(2., 2.));
}

#[test]
fn loop_closure_singular() {
    let v = vel::loop_closure(Vec2::new(1., 0.), Vec2::new(2., 0.), Vec2::new(0., 1.));
    assert_eq!(v.status, VelStatus::Singular);
    assert_eq!(v.x, [0., 0.]);
    let v = vel::loop_closure(Vec2::zeros(), Vec2::new(2., 0.), Vec2::new(0., 1.));
    assert_eq!(v.status, VelStatus::Degenerate);
    assert_eq!(v.x, [0., 0.]);
}

#[test]
fn loop_closure_near_dead_point() {
    // The threshold scales with the link lengths
    for len in [1., 100.] {
        let r_ba = Vec2::new(len, 0.);
        let v_a = Vec2::new(0., 1.);
        let v = vel::loop_closure(r_ba, Vec2::new(len, len * 5e-10), v_a);
        assert_eq!(v.status, VelStatus::Singular);
        assert_eq!(v.x, [0., 0.]);
        let r_bo4 = Vec2::new(len, len * 2e-9);
        let v = vel::loop_closure(r_ba, r_bo4, v_a);
        assert_eq!(v.status, VelStatus::Solved);
        assert!(v.x.iter().all(|x| x.is_finite()));
        let [w3, w4] = v.x;
        let res = vel::cross(w3, r_ba) - vel::cross(w4, r_bo4) + v_a;
        assert_abs_diff_eq!(res.norm(), 0., epsilon = 1e-6);
    }
}

#[test]
fn slider_closure_singular() {
    // Rod perpendicular to the axis
    let axis = Vec2::new(1., 0.);
    let v = vel::slider_closure(Vec2::new(0., 2.), axis, Vec2::new(1., 1.));
    assert_eq!(v.status, VelStatus::Singular);
    assert_eq!(v.x, [0., 0.]);
    let v = vel::slider_closure(Vec2::zeros(), axis, Vec2::new(1., 1.));
    assert_eq!(v.status, VelStatus::Degenerate);
    assert_eq!(v.x, [0., 0.]);
    let v = vel::slider_closure(Vec2::new(1., 2.), Vec2::zeros(), Vec2::new(1., 1.));
    assert_eq!(v.status, VelStatus::Degenerate);
    assert_eq!(v.x, [0., 0.]);
}

#[test]
fn four_bar_dead_point() {
    // Coupler and follower fold into a line at θ = π
    let fb = FourBar::new([0., 0.], [3., 0.], 1., 2., 2.);
    let state = fb.state(PI, Some(1.));
    assert!(state.is_feasible());
    let vel = state.vel.unwrap();
    assert_eq!(vel.status, VelStatus::Singular);
    assert_eq!((vel.omega3, vel.omega4), (0., 0.));
    assert!(vel.b.iter().all(|x| x.is_finite()));
}

#[test]
fn four_bar_positions() {
    let fb = FourBar::example()
        .with_coupler(LinkPoint::polar(1.2, 0.4))
        .with_rocker(LinkPoint::new(1.5, 0.));
    for theta in revolution(0.1, 36) {
        let s = fb.pose(theta);
        assert!(s.is_feasible());
        assert!(s.vel.is_none());
        assert_abs_diff_eq!((s.a - s.o2).norm(), fb.l2, epsilon = 1e-9);
        assert_abs_diff_eq!((s.b - s.a).norm(), fb.l3, epsilon = 1e-9);
        assert_abs_diff_eq!((s.b - s.o4).norm(), fb.l4, epsilon = 1e-9);
        assert_abs_diff_eq!((s.coupler[0] - s.a).norm(), 1.2, epsilon = 1e-9);
        assert_abs_diff_eq!((s.rocker[0] - s.o4).norm(), 1.5, epsilon = 1e-9);
        // Upper assembly
        let c = circle_circle(s.a, fb.l3, s.o4, fb.l4).candidates().unwrap();
        assert_abs_diff_eq!(s.b.y, c.direct.y.max(c.inverse.y), epsilon = 1e-12);
    }
}

#[test]
fn four_bar_velocity_matches_finite_difference() {
    let fb = FourBar::example().with_coupler(LinkPoint::new(1., 0.6));
    let omega2 = 45f64.to_radians();
    let h = 1e-6;
    for theta in [0.3, 120f64.to_radians(), 4.] {
        let s = fb.state(theta, Some(omega2));
        let vel = s.vel.as_ref().unwrap();
        assert_eq!(vel.status, VelStatus::Solved);
        let (p, m) = (fb.pose(theta + h), fb.pose(theta - h));
        let db = (p.b - m.b) / (2. * h) * omega2;
        assert_abs_diff_eq!(vel.b.x, db.x, epsilon = 1e-6);
        assert_abs_diff_eq!(vel.b.y, db.y, epsilon = 1e-6);
        let dc = (p.coupler[0] - m.coupler[0]) / (2. * h) * omega2;
        assert_abs_diff_eq!(vel.coupler[0].x, dc.x, epsilon = 1e-6);
        assert_abs_diff_eq!(vel.coupler[0].y, dc.y, epsilon = 1e-6);
        let w3 = (p.theta3() - m.theta3()) / (2. * h) * omega2;
        let w4 = (p.theta4() - m.theta4()) / (2. * h) * omega2;
        assert_abs_diff_eq!(vel.omega3, w3, epsilon = 1e-6);
        assert_abs_diff_eq!(vel.omega4, w4, epsilon = 1e-6);
        // Both sides of the loop agree on `B`
        let vb4 = vel::cross(vel.omega4, s.b - s.o4);
        assert_abs_diff_eq!(vel.b.x, vb4.x, epsilon = 1e-9);
        assert_abs_diff_eq!(vel.b.y, vb4.y, epsilon = 1e-9);
    }
}

#[test]
fn velocity_is_linear() {
    let fb = FourBar::example().with_coupler(LinkPoint::new(0.5, -0.5));
    let sc = SliderCrank::example();
    let k = 3.5;
    for theta in [0.2, 2., 5.] {
        let v1 = fb.state(theta, Some(0.8)).vel.unwrap();
        let vk = fb.state(theta, Some(0.8 * k)).vel.unwrap();
        assert_abs_diff_eq!(vk.omega3, k * v1.omega3, epsilon = 1e-12);
        assert_abs_diff_eq!(vk.omega4, k * v1.omega4, epsilon = 1e-12);
        assert_abs_diff_eq!(vk.b.x, k * v1.b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(vk.coupler[0].y, k * v1.coupler[0].y, epsilon = 1e-12);
        let v1 = sc.state(theta, Some(-2.)).vel.unwrap();
        let vk = sc.state(theta, Some(-2. * k)).vel.unwrap();
        assert_abs_diff_eq!(vk.omega3, k * v1.omega3, epsilon = 1e-12);
        assert_abs_diff_eq!(vk.slider, k * v1.slider, epsilon = 1e-9);
        assert_abs_diff_eq!(vk.rod[1].x, k * v1.rod[1].x, epsilon = 1e-9);
    }
}

#[test]
fn four_bar_infeasible() {
    let fb = FourBar::new([0., 0.], [10., 0.], 1., 1., 1.);
    let s = fb.state(0., Some(1.));
    assert!(!s.is_feasible());
    assert_eq!(s.infeasible, Some(Infeasible::TooFar));
    assert_eq!(s.b, s.a + Vec2::new(1., 0.));
    let vel = s.vel.unwrap();
    assert_eq!(vel.status, VelStatus::Unresolved);
    assert_eq!((vel.omega3, vel.omega4), (0., 0.));
}

#[test]
fn non_finite_is_infeasible() {
    let deg = Some(Infeasible::DegenerateLink);
    let x = Vec2::x();
    for (s, b) in [
        (pt(f64::NAN, 0.), pt(1., 0.)),
        (pt(0., 0.), pt(f64::INFINITY, 0.)),
        (pt(0., f64::NEG_INFINITY), pt(0., 1.)),
    ] {
        let sol = pllp(s, 1., b, 1., BranchPolicy::Upper);
        assert!(!sol.is_feasible());
        assert_eq!(sol.reason(), deg);
    }
    assert_eq!(plp(pt(f64::NAN, 0.), 1., pt(0., 0.), x, BranchPolicy::Direct).reason(), deg);
    assert_eq!(plp(pt(0., 0.), 1., pt(0., f64::NAN), x, BranchPolicy::Direct).reason(), deg);
    let dir = Vec2::new(f64::INFINITY, 0.);
    assert_eq!(plp(pt(0., 0.), 1., pt(0., 0.), dir, BranchPolicy::Direct).reason(), deg);

    let state = FourBar::example().state(f64::INFINITY, Some(1.));
    assert!(!state.is_feasible());
    assert_eq!(state.infeasible, deg);
    assert_eq!(state.vel_status(), Some(VelStatus::Unresolved));
    let state = SliderCrank::example().state(f64::NAN, Some(1.));
    assert!(!state.is_feasible());
    assert_eq!(state.infeasible, deg);
    assert_eq!(state.vel_status(), Some(VelStatus::Unresolved));
}

#[test]
fn four_bar_type_and_bound() {
    let fb = FourBar::example();
    assert_eq!(fb.ty(), FourBarTy::GCRR);
    assert_eq!(fb.angle_bound(), AngleBound::Closed);
    let fb = FourBar::new([0., 0.], [4., 0.], 3., 2., 2.5);
    assert_eq!(fb.ty(), FourBarTy::RRR1);
    let bound = fb.angle_bound();
    assert!(bound.contains(0.));
    assert!(!bound.contains(PI));
    let AngleBound::Open([start, end]) = bound else {
        panic!("unexpected bound {bound:?}");
    };
    for theta in revolution(0.013, 97) {
        let near = [start, end]
            .iter()
            .any(|b| ((theta - b).rem_euclid(TAU)).min((b - theta).rem_euclid(TAU)) < 1e-6);
        if !near {
            assert_eq!(fb.pose(theta).is_feasible(), bound.contains(theta), "θ = {theta}");
        }
    }
    // Rotated ground link
    let fb = FourBar::new([0., 0.], [0., 4.], 3., 2., 2.5);
    let bound = fb.angle_bound();
    assert!(bound.contains(FRAC_PI_2));
    assert!(!bound.contains(-FRAC_PI_2));
    assert!(fb.pose(FRAC_PI_2).is_feasible());
    assert!(!fb.pose(-FRAC_PI_2).is_feasible());
}

#[test]
fn two_range_bound() {
    // Non-Grashof with the coupler longest
    let fb = FourBar::new([0., 0.], [3., 0.], 2.5, 4., 1.2);
    assert_eq!(fb.ty(), FourBarTy::RRR3);
    let bound = fb.angle_bound();
    let AngleBound::OpenTwo(ranges) = bound else {
        panic!("unexpected bound {bound:?}");
    };
    for [s, e] in ranges {
        let mid = (s + e) / 2.;
        assert!(fb.pose(mid).is_feasible());
    }
    assert!(!fb.pose(0.).is_feasible());
    assert!(!fb.pose(PI).is_feasible());
}

#[test]
fn validate_dimensions() {
    assert_eq!(FourBar::example().validate(), Ok(()));
    let fb = FourBar::new([0., 0.], [1., 0.], 1., -1., 1.);
    assert_eq!(fb.validate(), Err(Error::NonPositiveLink { name: "l3", value: -1. }));
    let fb = FourBar::new([1., 0.], [1., 0.], 1., 1., 1.);
    assert_eq!(fb.validate(), Err(Error::CoincidentPivots));
    let fb = FourBar::new([f64::NAN, 0.], [1., 0.], 1., 1., 1.);
    assert_eq!(fb.validate(), Err(Error::NonFinite { name: "o2.x" }));
    assert_eq!(SliderCrank::example().validate(), Ok(()));
    let sc = SliderCrank::new([0., 0.], 1., 0., 0.);
    assert!(matches!(sc.validate(), Err(Error::NonPositiveLink { name: "r3", .. })));
}

#[test]
fn slider_crank_positions() {
    let sc = SliderCrank::example();
    let s = sc.pose(FRAC_PI_4);
    assert!(s.is_feasible());
    assert_abs_diff_eq!(s.c.y, -20., epsilon = 1e-9);
    assert!(s.c.x > s.b.x);
    assert_abs_diff_eq!((s.c - s.b).norm(), 140., epsilon = 1e-9);
    assert_abs_diff_eq!(s.slider, s.c.x, epsilon = 1e-9);
    let [n, d] = [s.rod[0], s.rod[1]];
    assert_abs_diff_eq!((n - s.b).norm(), 80., epsilon = 1e-9);
    assert_abs_diff_eq!((d - n).norm(), 50., epsilon = 1e-9);
    assert_abs_diff_eq!((d - n).dot(&(s.c - s.b)), 0., epsilon = 1e-9);
    // The rod point `D` hangs below the rod
    assert!(d.y < n.y);
}

#[test]
fn slider_crank_stroke() {
    let sc = SliderCrank::example();
    assert!(sc.is_full_rotation());
    let stroke = sc.stroke().unwrap();
    let (lo, hi) = sc
        .sweep(revolution(0., 3600))
        .map(|s| s.slider)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
    assert_abs_diff_eq!(hi - lo, stroke, epsilon = 1e-2);
    assert_abs_diff_eq!(stroke, 35700f64.sqrt() - 7700f64.sqrt(), epsilon = 1e-9);
}

#[test]
fn slider_crank_velocity() {
    let sc = SliderCrank::example().with_axis(0.3);
    let omega2 = TAU;
    let h = 1e-6;
    for theta in [0.5, 2., 3.5] {
        let s = sc.state(theta, Some(omega2));
        let vel = s.vel.as_ref().unwrap();
        assert_eq!(vel.status, VelStatus::Solved);
        let (p, m) = (sc.pose(theta + h), sc.pose(theta - h));
        let ds = (p.slider - m.slider) / (2. * h) * omega2;
        assert_abs_diff_eq!(vel.slider, ds, epsilon = 1e-4);
        let dc = (p.c - m.c) / (2. * h) * omega2;
        assert_abs_diff_eq!(vel.c.x, dc.x, epsilon = 1e-4);
        assert_abs_diff_eq!(vel.c.y, dc.y, epsilon = 1e-4);
        // The slider seen from the crank pin
        let vc = vel::rigid(vel.b, vel.omega3, s.c - s.b);
        assert_abs_diff_eq!(vc.x, vel.c.x, epsilon = 1e-9);
        assert_abs_diff_eq!(vc.y, vel.c.y, epsilon = 1e-9);
    }
}

#[test]
fn slider_crank_infeasible() {
    let sc = SliderCrank::new([0., 0.], 50., 30., 20.);
    assert!(!sc.is_full_rotation());
    assert_eq!(sc.stroke(), None);
    let s = sc.state(FRAC_PI_2, Some(1.));
    assert_eq!(s.infeasible, Some(Infeasible::TooFar));
    assert_abs_diff_eq!(s.c.x, s.b.x + 30., epsilon = 1e-12);
    assert_eq!(s.vel.unwrap().status, VelStatus::Unresolved);
}

#[test]
fn angle_sources() {
    let v = linspace(0., 1., 5).collect::<Vec<_>>();
    assert_eq!(v, [0., 0.25, 0.5, 0.75, 1.]);
    assert_eq!(linspace(2., 5., 1).collect::<Vec<_>>(), [2.]);
    assert_eq!(linspace(0., 1., 0).count(), 0);
    let v = linspace(120f64.to_radians(), 480f64.to_radians(), 120).collect::<Vec<_>>();
    assert_eq!(v.len(), 120);
    assert_eq!(v[119], 480f64.to_radians());
    for (a, b) in revolution(0., 4).zip([0., FRAC_PI_2, PI, 3. * FRAC_PI_2]) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
    assert_eq!(revolution(0., 360).len(), 360);
}

#[test]
fn sweep_is_stateless_and_restartable() {
    let fb = FourBar::example().with_coupler(LinkPoint::polar(1., 0.5));
    let sweep = fb.sweep_vel(revolution(0., 24), 1.5);
    assert_eq!(sweep.len(), 24);
    let again = sweep.clone();
    let first = sweep.collect::<Vec<_>>();
    assert_eq!(first, again.collect::<Vec<_>>());
    // Sample order does not matter
    let reversed = fb
        .sweep_vel(revolution(0., 24).collect::<Vec<_>>().into_iter().rev(), 1.5)
        .collect::<Vec<_>>();
    assert!(first.iter().eq(reversed.iter().rev()));
    for s in &first {
        assert_eq!(*s, fb.state(s.theta, Some(1.5)));
    }
}

#[test]
fn timed_sweep() {
    let fb = FourBar::example();
    let states = Sweep::timed(&fb, 0.5, 2., [0., 0.25, 1.]).collect::<Vec<_>>();
    let thetas = states.iter().map(|s| s.theta).collect::<Vec<_>>();
    assert_eq!(thetas, [0.5, 1., 2.5]);
    assert!(states.iter().all(|s| s.vel.as_ref().unwrap().omega2 == 2.));
}

#[test]
fn trajectory_lookup() {
    let fb = FourBar::example();
    let traj = fb.trajectory(0., TAU, 5, None).unwrap();
    assert_eq!(traj.len(), 5);
    assert_eq!(traj.index_of(-1.), 0);
    assert_eq!(traj.index_of(100.), 4);
    assert_eq!(traj.index_of(FRAC_PI_2 + 1e-9), 1);
    assert_eq!(traj.index_of(f64::NAN), 0);
    assert_eq!(traj.at(PI).theta, PI);
    let single = fb.trajectory(1., 1., 1, None).unwrap();
    assert_eq!(single.at(3.).theta, 1.);
    assert_eq!(fb.trajectory(0., 1., 0, None).unwrap_err(), Error::EmptySweep);
}

#[test]
fn tabular_columns() {
    let fb = FourBar::example().with_coupler(LinkPoint::new(1., 1.));
    let names = |s: &FourBarState| s.fields().into_iter().map(|(k, _)| k).collect::<Vec<_>>();
    let pose = fb.pose(1.);
    assert_eq!(
        names(&pose),
        ["theta", "a.x", "a.y", "b.x", "b.y", "coupler0.x", "coupler0.y", "feasible"]
    );
    let full = fb.state(1., Some(1.));
    let cols = names(&full);
    assert_eq!(cols.len(), 8 + 3 + 4 + 2 + 1);
    assert_eq!(cols.last().map(String::as_str), Some("vel_solved"));
    let sc = SliderCrank::example().pose(0.);
    assert_eq!(sc.fields()[0], ("theta".to_string(), 0.));
}

#[cfg(feature = "csv")]
#[test]
fn csv_dump() {
    let fb = FourBar::example();
    let states = fb.sweep_vel(revolution(0., 6), 1.).collect::<Vec<_>>();
    let s = crate::csv::dump_states(&states).unwrap();
    let mut lines = s.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("theta,a.x,a.y,b.x,b.y,feasible,omega2,omega3,omega4"));
    assert_eq!(lines.count(), 6);
    assert_eq!(crate::csv::dump_states::<_, FourBarState>(&[]).unwrap(), "");
}
