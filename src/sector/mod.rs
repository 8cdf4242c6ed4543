//! Partitioning assets by sector while preserving first-seen order.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::core::AssetRecord;

/// Assets partitioned by sector.
///
/// Sectors iterate in the order they first appeared in the scanned sequence, and each
/// sector's assets keep their scan order. Keys are compared by exact string equality, so
/// `"IT"`, `"it"` and `""` are three distinct sectors.
#[derive(Debug, Clone, Default)]
pub struct SectorGroups {
    entries: Vec<(String, Vec<AssetRecord>)>,
    index: HashMap<String, usize>,
}

impl SectorGroups {
    fn push(&mut self, asset: AssetRecord) {
        let slot = match self.index.get(asset.sector.as_str()) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(asset.sector.clone(), i);
                self.entries.push((asset.sector.clone(), Vec::new()));
                i
            }
        };
        self.entries[slot].1.push(asset);
    }

    /// Number of distinct sectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Assets in `sector`, in scan order.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&[AssetRecord]> {
        self.index
            .get(sector)
            .map(|&i| self.entries[i].1.as_slice())
    }

    /// Sector names in first-seen order.
    pub fn sectors(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(sector, _)| sector.as_str())
    }

    /// `(sector, assets)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AssetRecord])> + '_ {
        self.entries
            .iter()
            .map(|(sector, assets)| (sector.as_str(), assets.as_slice()))
    }
}

// Equality is over the ordered entries; the lookup index is derived from them.
impl PartialEq for SectorGroups {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl IntoIterator for SectorGroups {
    type Item = (String, Vec<AssetRecord>);
    type IntoIter = std::vec::IntoIter<(String, Vec<AssetRecord>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<AssetRecord> for SectorGroups {
    fn from_iter<I: IntoIterator<Item = AssetRecord>>(iter: I) -> Self {
        let mut groups = Self::default();
        for asset in iter {
            groups.push(asset);
        }
        groups
    }
}

/// Serialized as an ordered list of `{ "sector": .., "assets": [..] }` entries so the
/// key order survives consumers that do not preserve JSON object order.
impl Serialize for SectorGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Entry<'a>(&'a str, &'a [AssetRecord]);

        impl Serialize for Entry<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut st = serializer.serialize_struct("SectorGroup", 2)?;
                st.serialize_field("sector", self.0)?;
                st.serialize_field("assets", self.1)?;
                st.end()
            }
        }

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (sector, assets) in &self.entries {
            seq.serialize_element(&Entry(sector, assets))?;
        }
        seq.end()
    }
}

/// Groups `assets` by sector in a single pass.
///
/// No sorting and no deduplication: every input record lands in exactly one group, and
/// an empty input yields empty groups.
///
/// ```
/// use market_overview::{AssetRecord, group};
///
/// let groups = group(&[
///     AssetRecord::new("TCS", "Tata Consultancy Services", "IT", 3_500.0, 1.2),
///     AssetRecord::new("HDFC", "HDFC Bank", "Banking", 1_600.0, 0.0),
///     AssetRecord::new("INFY", "Infosys", "IT", 1_450.0, -0.5),
/// ]);
///
/// assert_eq!(groups.sectors().collect::<Vec<_>>(), ["IT", "Banking"]);
/// assert_eq!(groups.get("IT").map(<[_]>::len), Some(2));
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(skip(assets), fields(assets = assets.len())))]
#[must_use]
pub fn group(assets: &[AssetRecord]) -> SectorGroups {
    let groups: SectorGroups = assets.iter().cloned().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(sectors = groups.len(), "grouped assets by sector");

    groups
}
