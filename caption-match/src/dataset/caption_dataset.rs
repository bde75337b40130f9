use super::*;
use crate::common::*;

/// The in-memory list of caption records.
///
/// A record's position in the list is its label.
#[derive(Debug, Clone, Default)]
pub struct CaptionDataset {
    pub records: Vec<CaptionRecord>,
}

impl CaptionDataset {
    /// Loads a JSON array of records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(
            File::open(path)
                .with_context(|| format!("failed to open dataset file '{}'", path.display()))?,
        );
        let records: Vec<CaptionRecord> = serde_json::from_reader(reader)
            .with_context(|| format!("failed to parse dataset file '{}'", path.display()))?;

        info!("loaded {} records from '{}'", records.len(), path.display());

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<CaptionRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, label: usize) -> Option<&CaptionRecord> {
        self.records.get(label)
    }

    /// The image item of record `label`.
    pub fn image_item(&self, label: usize) -> Result<ImageItem> {
        let record = self
            .get(label)
            .ok_or_else(|| format_err!("record index {} is out of bound", label))?;
        Ok(Item::new(record.image_name.clone(), label))
    }

    /// The caption item of record `label`.
    pub fn caption_item(&self, label: usize) -> Result<CaptionItem> {
        let record = self
            .get(label)
            .ok_or_else(|| format_err!("record index {} is out of bound", label))?;
        let caption = record.display_caption().ok_or_else(|| {
            format_err!(
                "record {} ('{}') has no caption at captions[0][0]",
                label,
                record.image_name.display()
            )
        })?;
        Ok(Item::new(caption.to_owned(), label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_dataset_test() -> Result<()> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data")
            .join("captions.json");
        let dataset = CaptionDataset::load(path)?;

        assert_eq!(dataset.len(), 3);
        let image = dataset.image_item(1)?;
        assert_eq!(image.label, 1);
        assert_eq!(image.data, Path::new("images/dog.jpg"));
        let caption = dataset.caption_item(2)?;
        assert_eq!(caption.data, "a red bus parked on the street");
        Ok(())
    }

    #[test]
    fn missing_caption_test() {
        let dataset = CaptionDataset::from_records(vec![CaptionRecord {
            image_name: "empty.jpg".into(),
            captions: vec![vec![]],
        }]);
        assert!(dataset.image_item(0).is_ok());
        assert!(dataset.caption_item(0).is_err());
        assert!(dataset.caption_item(1).is_err());
    }

    #[test]
    fn malformed_dataset_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("captions.json");
        fs::write(&path, r#"[{"image_name": "a.jpg"}]"#).unwrap();
        assert!(CaptionDataset::load(&path).is_err());
        assert!(CaptionDataset::load(dir.path().join("missing.json")).is_err());
    }
}
