pub struct Config {
    /// Suppresses banners and decorative headers.
    ///
    /// Operation results and warnings are still printed.
    pub quiet: bool,
}
