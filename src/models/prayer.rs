use serde::Deserialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// The five daily prayers, in the order their notifications are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerType {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerType {
    pub fn all() -> Vec<PrayerType> {
        vec![
            PrayerType::Fajr,
            PrayerType::Dhuhr,
            PrayerType::Asr,
            PrayerType::Maghrib,
            PrayerType::Isha,
        ]
    }

    /// Key under `data.timings` in the upstream response.
    pub fn api_key(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Dhuhr => "Dhuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.api_key()
    }

    /// Notification body text.
    pub fn message(&self) -> String {
        format!("{} namazı vakti geldi!", self.display_name())
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fajr" => Ok(PrayerType::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerType::Dhuhr),
            "asr" => Ok(PrayerType::Asr),
            "maghrib" => Ok(PrayerType::Maghrib),
            "isha" => Ok(PrayerType::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer type: {}", s)),
        }
    }
}

/// Today's timings as returned by the API: prayer-name keys mapped to `HH:MM`
/// strings. The upstream object carries more keys than the five prayers
/// (Sunrise, Imsak, Midnight, ...); they are kept here but never scheduled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PrayerTimeSet(BTreeMap<String, String>);

impl PrayerTimeSet {
    pub fn get(&self, prayer: PrayerType) -> Option<&str> {
        self.0.get(prayer.api_key()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for PrayerTimeSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
