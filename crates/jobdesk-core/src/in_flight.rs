/// Holds a controller's loading flag up while a request is outstanding.
///
/// The flag drops back when the guard does, including when the request
/// future is cancelled before it completes.
pub(crate) struct InFlight<'a> {
    flag: &'a mut bool,
}

impl<'a> InFlight<'a> {
    pub(crate) fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self { flag }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}
