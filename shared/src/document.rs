use serde::{Serialize, Deserialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{ItemKind, ItemRef};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read results document: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed results document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    #[serde(default)]
    pub definition_of_ready: Vec<String>,
    #[serde(default)]
    pub raw_text_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub webpage: String,
    #[serde(default)]
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Epic {
    pub title: String,
    pub summary: String,
}

/// Generated breakdown of one project: a single epic with ordered
/// features, each holding ordered stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub epic: Epic,
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub epics: usize,
    pub features: usize,
    pub stories: usize,
}

pub struct OutlineStory<'a> {
    pub item: ItemRef,
    pub story: &'a Story,
}

pub struct OutlineFeature<'a> {
    pub item: ItemRef,
    pub feature: &'a Feature,
    pub stories: Vec<OutlineStory<'a>>,
}

/// The document with render-time ids attached to every votable item.
pub struct Outline<'a> {
    pub epic: ItemRef,
    pub features: Vec<OutlineFeature<'a>>,
}

impl Outline<'_> {
    pub fn items(&self) -> Vec<ItemRef> {
        let mut items = vec![self.epic.clone()];
        for feature in &self.features {
            items.push(feature.item.clone());
            items.extend(feature.stories.iter().map(|s| s.item.clone()));
        }
        items
    }
}

fn render_id(kind: ItemKind, n: usize) -> ItemRef {
    let prefix = match kind {
        ItemKind::Epic => 'E',
        ItemKind::Feature => 'F',
        ItemKind::Story => 'S',
    };
    ItemRef::generated(kind, format!("{}{}", prefix, n))
}

impl ResultsDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            epics: 1,
            features: self.features.len(),
            stories: self.features.iter().map(|f| f.stories.len()).sum(),
        }
    }

    /// Features are numbered F1..Fn; stories S1..Sm across the whole
    /// document so every story key stays unique.
    pub fn outline(&self) -> Outline<'_> {
        let mut story_no = 0;
        let features = self.features.iter()
            .enumerate()
            .map(|(idx, feature)| OutlineFeature {
                item: render_id(ItemKind::Feature, idx + 1),
                feature,
                stories: feature.stories.iter()
                    .map(|story| {
                        story_no += 1;
                        OutlineStory { item: render_id(ItemKind::Story, story_no), story }
                    })
                    .collect(),
            })
            .collect();

        Outline {
            epic: render_id(ItemKind::Epic, 1),
            features,
        }
    }
}

pub const SAMPLE_DOCUMENT: &str = include_str!("../data/sample_results.json");

pub fn sample_document() -> Result<ResultsDocument, DocumentError> {
    ResultsDocument::from_json(SAMPLE_DOCUMENT)
}
