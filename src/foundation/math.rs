use glam::{DQuat, DVec3, EulerRot};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Clamp each XYZ Euler component of `q` into `[min, max]` (radians).
pub(crate) fn clamp_euler_xyz(q: DQuat, min: DVec3, max: DVec3) -> DQuat {
    let (x, y, z) = q.to_euler(EulerRot::XYZ);
    DQuat::from_euler(
        EulerRot::XYZ,
        x.clamp(min.x, max.x),
        y.clamp(min.y, max.y),
        z.clamp(min.z, max.z),
    )
}

/// Any unit vector perpendicular to `v`.
pub(crate) fn any_orthogonal(v: DVec3) -> DVec3 {
    let helper = if v.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
    v.cross(helper).normalize_or_zero()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
