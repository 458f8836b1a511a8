pub(crate) mod support;
mod tests_submit;
