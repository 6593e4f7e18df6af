pub(crate) mod ik;
pub(crate) mod pose;
