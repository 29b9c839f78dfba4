pub struct Config {
    /// Skips the banner printed before the first header.
    pub no_banner: bool,
    /// Quiet level.
    ///
    /// `1` hides banner and headers, `2` and above only lets warnings through.
    pub quiet: u8,
}
