use crate::inventory::zone::{ZoneClassifier, ZoneRule};

#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Hides the start-up banner.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and the banner, `2` prints only the summary.
    pub quiet: u8,
    /// Extra prefix rules, evaluated before the built-in ones.
    pub rules: Vec<ZoneRule>,
}

impl Config {
    /// Builds the classifier for this run.
    pub fn classifier(&self) -> ZoneClassifier {
        ZoneClassifier::with_overrides(self.rules.clone())
    }
}
