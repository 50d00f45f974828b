use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Column names of `data/smech_sectors.csv`, in file order.
pub const SMECH_SECTORS_COLUMNS: [&str; 6] = [
    "smech_name",
    "smech_code",
    "nace_name",
    "exio2_code",
    "exio3_code",
    "bcc_code",
];

/// Column names of `data/bcc_sectors.csv`, in file order.
pub const BCC_SECTORS_COLUMNS: [&str; 8] = [
    "nace_code",
    "ignore1",
    "ignore2",
    "exio3_name",
    "nace_name",
    "notes",
    "use_for_bcc",
    "bcc_name",
];

/// One row of the SMECH sheet, read by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMappingRow {
    pub smech_name: String,
    pub smech_code: String,
    pub nace_name: String,
    pub exio2_code: String,
    pub exio3_code: String,
    pub bcc_code: String,
    /// Anything past the sixth column.
    pub extra: Vec<String>,
}

/// One row of the BCC sector sheet, read by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSectorRow {
    pub nace_code: String,
    pub ignore1: String,
    pub ignore2: String,
    pub exio3_name: String,
    pub nace_name: String,
    pub notes: String,
    pub use_for_bcc: String,
    pub bcc_name: String,
    pub extra: Vec<String>,
}

impl TargetSectorRow {
    pub fn is_included(&self) -> bool {
        matches!(
            self.use_for_bcc.trim().to_lowercase().as_str(),
            "x" | "y" | "yes"
        )
    }
}

/// SMECH code to NACE code. Serializes as a JSON object with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceToTargetMapping {
    entries: BTreeMap<String, String>,
}

impl SourceToTargetMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, source_code: &str) -> Option<&str> {
        self.entries.get(source_code).map(String::as_str)
    }

    pub(crate) fn insert(&mut self, source_code: String, target_code: String) {
        self.entries.insert(source_code, target_code);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for SourceToTargetMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// NACE code to BCC display name, in the order the rows were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSectorMapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl TargetSectorMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, target_code: &str) -> bool {
        self.index.contains_key(target_code)
    }

    pub fn get(&self, target_code: &str) -> Option<&str> {
        self.index
            .get(target_code)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Returns `false` and leaves the mapping untouched if the code is already present.
    pub(crate) fn insert(&mut self, target_code: String, display_name: String) -> bool {
        if self.index.contains_key(&target_code) {
            return false;
        }
        self.index.insert(target_code.clone(), self.entries.len());
        self.entries.push((target_code, display_name));
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projection used by both generated modules, sorted by name.
    ///
    /// The sort is stable, so sectors sharing a name keep their row order.
    pub fn sector_list(&self) -> Vec<SectorListEntry> {
        let mut list: Vec<SectorListEntry> = self
            .entries
            .iter()
            .map(|(code, name)| SectorListEntry {
                name: name.clone(),
                nace: code.clone(),
            })
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }
}

impl FromIterator<(String, String)> for TargetSectorMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (code, name) in iter {
            mapping.insert(code, name);
        }
        mapping
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorListEntry {
    pub name: String,
    pub nace: String,
}

impl SectorListEntry {
    /// Trailing choice appended to the sector data module.
    pub fn not_listed() -> Self {
        Self {
            name: "Not listed".to_string(),
            nace: String::new(),
        }
    }
}

/// Something the loaders noticed that is worth telling the user about but
/// does not stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A SMECH row without a BCC code; it is left out of the mapping.
    MissingTargetCode {
        row: usize,
        source_code: String,
        source_name: String,
    },
    Mapped {
        row: usize,
        source_code: String,
        source_name: String,
        target_code: String,
    },
}

impl Diagnostic {
    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::MissingTargetCode { .. })
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingTargetCode {
                source_code,
                source_name,
                ..
            } => write!(
                f,
                "Skipping mapping for SMECH code {} ({}) - no BCC code",
                source_code, source_name
            ),
            Diagnostic::Mapped {
                source_code,
                source_name,
                target_code,
                ..
            } => write!(
                f,
                "mapping code {} ({}) to {}",
                source_code, source_name, target_code
            ),
        }
    }
}

/// A loader result together with what it had to say along the way.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Loaded<T> {
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }
}

/// Output of the extract phase: both sheets, loaded and checked individually.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub smech_to_bcc: SourceToTargetMapping,
    pub bcc_sectors: TargetSectorMapping,
    pub diagnostics: Vec<Diagnostic>,
}

/// A generated TypeScript module, before it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedModule {
    /// Name passed to the formatter as the stdin file path.
    pub file_name: &'static str,
    pub text: String,
}

/// Output of the transform phase.
#[derive(Debug, Clone)]
pub struct GeneratedModules {
    pub benchmark: RenderedModule,
    pub bcc_sectors: RenderedModule,
    pub mapping_count: usize,
    pub sector_count: usize,
    pub warning_count: usize,
}
