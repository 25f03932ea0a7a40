pub(crate) mod rotation;
pub(crate) mod sphere;
