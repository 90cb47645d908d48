pub(crate) mod variable_blur;
