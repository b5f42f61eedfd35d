//! This file loads the XKCD color survey names: roughly 950 crowd-sourced names, each for a single
//! hex code. The table ships inside the crate as CSV and is parsed the first time it's needed.

use std::collections::HashMap;

use csv;

use convert;

static XKCD_CSV: &str = include_str!("../data/xkcd-colors.csv");

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    hex: String,
    name: String,
}

/// The parsed XKCD table: entries in file order plus lookups in both directions.
pub(crate) struct XkcdTable {
    pub(crate) entries: Vec<([u8; 3], String)>,
    by_rgb: HashMap<[u8; 3], usize>,
    by_name: HashMap<String, usize>,
}

impl XkcdTable {
    fn load() -> XkcdTable {
        let mut entries = vec![];
        let mut reader = csv::Reader::from_reader(XKCD_CSV.as_bytes());
        for result in reader.deserialize() {
            // we should panic on bad data: this file is supplied by us!
            let record: Record = result.expect("bundled XKCD color table is malformed");
            let rgb = convert::hex_to_bytes(&record.hex)
                .expect("bundled XKCD color table has an invalid hex code");
            entries.push((rgb, record.name));
        }
        let mut by_rgb = HashMap::new();
        let mut by_name = HashMap::new();
        for (i, &(rgb, ref name)) in entries.iter().enumerate() {
            // first declared wins, in both directions
            by_rgb.entry(rgb).or_insert(i);
            by_name.entry(name.to_lowercase()).or_insert(i);
        }
        debug!("loaded {} XKCD color names", entries.len());
        XkcdTable {
            entries,
            by_rgb,
            by_name,
        }
    }

    /// All names for an exact byte triple, in file order.
    pub(crate) fn names_for(&self, rgb: [u8; 3]) -> Vec<&str> {
        match self.by_rgb.get(&rgb) {
            Some(_) => self
                .entries
                .iter()
                .filter(|&&(entry_rgb, _)| entry_rgb == rgb)
                .map(|&(_, ref name)| name.as_str())
                .collect(),
            None => vec![],
        }
    }

    /// The byte triple for a name, ignoring case.
    pub(crate) fn rgb_for(&self, name: &str) -> Option<[u8; 3]> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| self.entries[i].0)
    }
}

lazy_static! {
    pub(crate) static ref XKCD_TABLE: XkcdTable = XkcdTable::load();
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_table_loads() {
        assert_eq!(XKCD_TABLE.entries.len(), 949);
        assert_eq!(XKCD_TABLE.entries[0], ([0xac, 0xc2, 0xd9], "cloudy_blue".to_string()));
    }

    #[test]
    fn test_lookups() {
        assert_eq!(XKCD_TABLE.rgb_for("Cloudy_Blue"), Some([0xac, 0xc2, 0xd9]));
        assert_eq!(XKCD_TABLE.rgb_for("blue"), Some([0x03, 0x43, 0xdf]));
        assert_eq!(XKCD_TABLE.rgb_for("not_a_color"), None);
        assert_eq!(XKCD_TABLE.names_for([0x03, 0x43, 0xdf]), vec!["blue"]);
        assert!(XKCD_TABLE.names_for([0x12, 0x34, 0x56]).is_empty());
    }
}
