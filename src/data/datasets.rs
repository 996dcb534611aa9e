//! Dataset-path resolution for the microbiome cohorts
//!
//! Each cohort lives under `<base_dir>/<Dir>_split_dataset/` as four CSV
//! files: train/validation data and tags, test data and tags. This module
//! only constructs the paths; parsing the files into batches is the data
//! loading collaborator's concern.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// The four files backing one cohort's splits
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitFiles {
    /// Train/validation abundance table
    pub train_data: PathBuf,
    /// Train/validation labels
    pub train_tags: PathBuf,
    /// Test abundance table
    pub test_data: PathBuf,
    /// Test labels
    pub test_tags: PathBuf,
}

/// Known cohorts and their on-disk layout
///
/// # Example
///
/// ```
/// use grafeno::data::DatasetCatalog;
///
/// let catalog = DatasetCatalog::new("split_datasets");
/// let files = catalog.split_files("cirrhosis").unwrap();
/// assert!(files.train_data.ends_with(
///     "Cirrhosis_split_dataset/train_val_set_Cirrhosis_microbiome.csv"
/// ));
/// assert!(catalog.split_files("saliva").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DatasetCatalog {
    base_dir: PathBuf,
}

impl DatasetCatalog {
    /// Create a catalog rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Resolve a cohort name to its four split files
    ///
    /// Fails on names outside the catalog; no path is guessed.
    pub fn split_files(&self, dataset: &str) -> Result<SplitFiles> {
        // (directory prefix, file stem) — stems are irregular across cohorts
        let (dir, stem) = match dataset {
            "cirrhosis" => ("Cirrhosis", "Cirrhosis"),
            "ibd" => ("IBD", "IBD"),
            "ibd_crohn" => ("IBD_Chrone", "IBD_Chrone"),
            "black_vs_white" => ("Black_vs_White", "Black_vs_White"),
            "allergy_milk" => ("Allergy_milk", "Allergy_milk_or_not"),
            "allergy_milk_no_controls" => ("Allergy_milk_no_controls", "milk_no_controls"),
            "allergy_peanut" => ("Allergy_peanut", "peanut"),
            "allergy_nut" => ("Allergy_nut", "nut"),
            "male_vs_female" => ("Male_vs_Female", "Male_vs_Female"),
            "nugent" => ("Nugent", "nugent"),
            other => return Err(Error::UnknownDataset(other.to_string())),
        };

        let cohort_dir = self.base_dir.join(format!("{dir}_split_dataset"));
        Ok(SplitFiles {
            train_data: cohort_dir.join(format!("train_val_set_{stem}_microbiome.csv")),
            train_tags: cohort_dir.join(format!("train_val_set_{stem}_tags.csv")),
            test_data: cohort_dir.join(format!("test_set_{stem}_microbiome.csv")),
            test_tags: cohort_dir.join(format!("test_set_{stem}_tags.csv")),
        })
    }

    /// Catalog root directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
