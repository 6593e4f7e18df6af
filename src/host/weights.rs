use crate::{
    foundation::core::DVec3,
    host::VertexGroup,
    rig::skeleton::{BoneId, Skeleton},
};

/// Bones a single vertex may be weighted to.
pub(crate) const MAX_INFLUENCES: usize = 4;

const FALLOFF_EPSILON: f64 = 1e-6;

fn distance_to_segment(p: DVec3, a: DVec3, b: DVec3) -> f64 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Inverse-square distance weights from each vertex to each bone segment.
///
/// `vertices` and `rig_location` are world space; bones are offset by
/// `rig_location`. Each vertex keeps its strongest [`MAX_INFLUENCES`] bones,
/// normalized to sum to 1.
pub(crate) fn automatic_weights(
    vertices: &[DVec3],
    skeleton: &Skeleton,
    rig_location: DVec3,
) -> Vec<VertexGroup> {
    let mut groups: Vec<VertexGroup> = BoneId::ALL
        .into_iter()
        .map(|bone| VertexGroup {
            bone,
            weights: Vec::new(),
        })
        .collect();

    for (vi, &v) in vertices.iter().enumerate() {
        let mut scored: Vec<(BoneId, f64)> = skeleton
            .bones()
            .map(|b| {
                let d = distance_to_segment(v, b.head + rig_location, b.tail + rig_location);
                (b.id, 1.0 / (d * d + FALLOFF_EPSILON))
            })
            .collect();
        // Stable order: strongest first, ties broken by bone order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.truncate(MAX_INFLUENCES);

        let total: f64 = scored.iter().map(|(_, w)| w).sum();
        for (bone, w) in scored {
            groups[bone.index()].weights.push((vi as u32, w / total));
        }
    }
    groups
}

#[cfg(test)]
#[path = "../../tests/unit/host/weights.rs"]
mod tests;
