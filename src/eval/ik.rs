use crate::foundation::core::{DMat3, DQuat, DVec3};
use crate::foundation::math::any_orthogonal;

const EPS: f64 = 1e-12;

/// Two-bone chain in skeleton space, ready to solve.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TwoBoneChain {
    /// Head of the upper bone; fixed by the parent.
    pub start: DVec3,
    /// Upper bone length.
    pub upper: f64,
    /// Lower bone length.
    pub lower: f64,
    /// Current upper-bone direction, used when the target sits on `start`.
    pub fallback_aim: DVec3,
}

/// Solved chain: joint positions and bone frames (local +Y along each bone).
#[derive(Clone, Copy, Debug)]
pub(crate) struct TwoBoneSolution {
    pub elbow: DVec3,
    pub tip: DVec3,
    pub upper_frame: DQuat,
    pub lower_frame: DQuat,
}

fn unit_or(v: DVec3, fallback: DVec3) -> DVec3 {
    let u = v.normalize_or_zero();
    if u == DVec3::ZERO { fallback } else { u }
}

/// Frame with +Y along `dir` and +X toward `bend` turned by `twist` about `dir`.
fn bone_frame(dir: DVec3, bend: DVec3, twist: f64) -> DQuat {
    let x = DQuat::from_axis_angle(dir, twist) * bend;
    let x = (x - dir * x.dot(dir)).normalize_or_zero();
    let x = if x == DVec3::ZERO { any_orthogonal(dir) } else { x };
    DQuat::from_mat3(&DMat3::from_cols(x, dir, x.cross(dir))).normalize()
}

/// Analytic two-bone IK without stretch.
///
/// The reach is clamped to `[|upper - lower|, upper + lower]`. The elbow
/// bends toward `pole` in the plane through the chain axis; `pole_angle`
/// twists both bones about their own axes.
pub(crate) fn solve_two_bone(
    chain: &TwoBoneChain,
    target: DVec3,
    pole: DVec3,
    pole_angle: f64,
) -> TwoBoneSolution {
    let (l1, l2) = (chain.upper, chain.lower);
    let to_target = target - chain.start;
    let dist = to_target.length();
    let aim = if dist > EPS {
        to_target / dist
    } else {
        chain.fallback_aim.normalize_or_zero()
    };
    let aim = if aim == DVec3::ZERO { DVec3::Y } else { aim };

    let reach = dist.clamp((l1 - l2).abs(), l1 + l2);

    let to_pole = pole - chain.start;
    let bend = (to_pole - aim * to_pole.dot(aim)).normalize_or_zero();
    let bend = if bend == DVec3::ZERO { any_orthogonal(aim) } else { bend };

    // Law of cosines: distance along the aim to the elbow's foot, then its height.
    let (along, up) = if reach > EPS {
        let along = (l1 * l1 - l2 * l2 + reach * reach) / (2.0 * reach);
        (along, (l1 * l1 - along * along).max(0.0).sqrt())
    } else {
        (0.0, l1)
    };

    let elbow = chain.start + aim * along + bend * up;
    let tip = chain.start + aim * reach;

    let dir_upper = unit_or(elbow - chain.start, aim);
    let dir_lower = unit_or(tip - elbow, aim);

    TwoBoneSolution {
        elbow,
        tip,
        upper_frame: bone_frame(dir_upper, bend, pole_angle),
        lower_frame: bone_frame(dir_lower, bend, pole_angle),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/ik.rs"]
mod tests;
