pub struct Config {
    /// Inventory path of the datacenter lookups are scoped to.
    ///
    /// When unset, the default datacenter is used if exactly one exists.
    pub datacenter: Option<String>,
    /// Suppresses headers (1) or everything but results (2).
    pub quiet: u8,
}
