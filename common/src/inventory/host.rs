/// Raw per-host facts as gathered from the managed machine.
///
/// Immutable once constructed; consumed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFact {
    name: String,
    addresses: Vec<String>,
    distro: String,
    release: String,
}

impl HostFact {
    pub fn new(
        name: impl Into<String>,
        addresses: Vec<String>,
        distro: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            addresses,
            distro: distro.into(),
            release: release.into(),
        }
    }

    /// Fully-qualified name. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted-quad addresses in the order the host reported them.
    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    pub fn distro(&self) -> &str {
        &self.distro
    }

    pub fn release(&self) -> &str {
        &self.release
    }
}
