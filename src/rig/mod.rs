pub(crate) mod assemble;
pub(crate) mod constraint;
pub(crate) mod measure;
pub(crate) mod skeleton;
