use crate::error::UoiResult;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: String,
    properties: FeatureProps,
}

#[derive(Debug, Deserialize)]
struct FeatureProps {
    #[serde(rename = "NAME")]
    name: String,
    #[serde(rename = "STATEFP", default)]
    statefp: String,
    #[serde(rename = "COUNTYFP", default)]
    countyfp: String,
}

/// Read-only lookup over the boundary features of one jurisdiction.
///
/// Built from a FIPS-keyed counties GeoJSON, filtered to features whose
/// id carries the target 2-char state prefix. Supports name-to-fips
/// resolution (trimmed, case-insensitive) for records that arrive
/// without an explicit identifier.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    prefix: String,
    by_name: HashMap<String, String>,
    ids: HashSet<String>,
}

impl BoundarySet {
    pub fn from_reader<R: Read>(reader: R, prefix: &str) -> UoiResult<Self> {
        let collection: FeatureCollection = serde_json::from_reader(reader)?;

        let mut by_name = HashMap::new();
        let mut ids = HashSet::new();
        for feat in &collection.features {
            // Some sources omit the top-level id; STATEFP+COUNTYFP is
            // the same 5-char code.
            let fips = if feat.id.len() == 5 {
                feat.id.clone()
            } else {
                format!("{}{}", feat.properties.statefp, feat.properties.countyfp)
            };
            if fips.len() != 5 || !fips.starts_with(prefix) {
                continue;
            }
            by_name.insert(feat.properties.name.trim().to_uppercase(), fips.clone());
            ids.insert(fips);
        }

        tracing::debug!(
            features = ids.len(),
            prefix = prefix,
            "boundary set loaded"
        );

        Ok(Self {
            prefix: prefix.to_string(),
            by_name,
            ids,
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, prefix: &str) -> UoiResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), prefix)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Case-insensitive, whitespace-trimmed exact name match.
    pub fn lookup_name(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(&name.trim().to_uppercase())
            .map(String::as_str)
    }

    pub fn contains(&self, fips: &str) -> bool {
        self.ids.contains(fips)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
