use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A generated landing page. Transient: built, persisted as JSONB, and
/// discarded within one seeder invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoPage {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    LandingPage,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LandingPage => "landing_page",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub slots: Vec<BlockSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    ImageText,
    Listing,
}

/// One element inside a block. The position key serializes as `slot`,
/// matching the upstream wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSlot {
    #[serde(rename = "type")]
    pub slot_type: SlotType,
    #[serde(rename = "slot")]
    pub position: SlotPosition,
    pub config: SlotConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotType {
    ProductBox,
    Image,
    Text,
    ProductListing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPosition {
    Left,
    Right,
    Listing,
}

/// Slot configuration. The shape depends on the slot type, so the enum
/// is untagged: only the config keys appear on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotConfig {
    #[serde(rename_all = "camelCase")]
    ProductBox { product_id: Uuid },
    Image { url: String },
    #[serde(rename_all = "camelCase")]
    Media { media_id: Uuid },
    Text { content: String },
    #[serde(rename_all = "camelCase")]
    ProductListing { category_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_serializes_with_upstream_keys() {
        let id = Uuid::new_v4();
        let slot = BlockSlot {
            slot_type: SlotType::ProductBox,
            position: SlotPosition::Left,
            config: SlotConfig::ProductBox { product_id: id },
        };

        let value = serde_json::to_value(&slot).unwrap();
        assert_eq!(value["type"], "product-box");
        assert_eq!(value["slot"], "left");
        assert_eq!(value["config"]["productId"], id.to_string());
    }

    #[test]
    fn page_type_serializes_snake_case() {
        let value = serde_json::to_value(PageType::LandingPage).unwrap();
        assert_eq!(value, "landing_page");
        assert_eq!(PageType::LandingPage.as_str(), "landing_page");
    }

    #[test]
    fn listing_config_roundtrips() {
        let id = Uuid::new_v4();
        let config = SlotConfig::ProductListing { category_id: id };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("categoryId"));

        let back: SlotConfig = serde_json::from_str(&json).unwrap();
        match back {
            SlotConfig::ProductListing { category_id } => assert_eq!(category_id, id),
            other => panic!("unexpected config variant: {other:?}"),
        }
    }
}
