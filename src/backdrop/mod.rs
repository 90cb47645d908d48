pub(crate) mod controller;
pub(crate) mod display;
pub(crate) mod guard;
pub(crate) mod surface;
